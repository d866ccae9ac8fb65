//! Fail-together loading of the home/dashboard data set.

use crate::client::Client;
use crate::error::ClientResult;
use crate::models::{Channel, ContentItem, CustomSubject, StorageSummary, UserInfo};

/// Everything the home page needs, loaded as one unit.
#[derive(Debug, Clone)]
pub struct HomeData {
    pub user: UserInfo,
    pub storage: StorageSummary,
    pub channels: Vec<Channel>,
    pub news: Vec<ContentItem>,
    pub contents: Vec<ContentItem>,
    pub subjects: Vec<CustomSubject>,
}

/// Issue all home fetches concurrently and wait for every one to settle.
/// If any single fetch failed, the aggregate fails; a partial `HomeData`
/// is never produced.
pub(crate) async fn load(
    client: &Client,
    category: Option<&str>,
    subject: Option<&str>,
) -> ClientResult<HomeData> {
    let (user, storage, channels, news, contents, subjects) = tokio::join!(
        client.user_info(),
        client.storage_summary(),
        client.my_channels(),
        client.subscribed_news(),
        client.custom_contents(category, subject),
        client.custom_subjects(),
    );

    Ok(HomeData {
        user: user?,
        storage: storage?,
        channels: channels?,
        news: news?,
        contents: contents?,
        subjects: subjects?,
    })
}
