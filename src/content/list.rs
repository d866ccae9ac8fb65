//! Paginated listing of a user's own content.

use std::sync::Arc;

use reqwest::Method;

use crate::error::ClientResult;
use crate::models::{BackendContent, ContentItem, Page};
use crate::transport::Transport;

use super::translate;

/// Sort key for the listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    CreatedAt,
    Title,
    ViewCount,
    LikeCount,
}

impl SortField {
    fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Title => "title",
            Self::ViewCount => "viewCount",
            Self::LikeCount => "likeCount",
        }
    }
}

/// Sort direction for the listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One page worth of listing parameters.
#[derive(Debug, Clone)]
pub struct ContentQuery {
    pub user_id: i64,
    pub page: u32,
    pub size: u32,
    pub sort_by: SortField,
    pub direction: SortDirection,
}

impl ContentQuery {
    /// First page of a user's content, newest first.
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id,
            page: 0,
            size: 20,
            sort_by: SortField::default(),
            direction: SortDirection::default(),
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn sort(mut self, sort_by: SortField, direction: SortDirection) -> Self {
        self.sort_by = sort_by;
        self.direction = direction;
        self
    }
}

/// A fetched page of the user's content, translated to the UI model, with
/// the query kept around so the page can be refreshed in place.
pub struct UserContents {
    transport: Arc<Transport>,
    query: ContentQuery,
    items: Vec<ContentItem>,
}

impl std::fmt::Debug for UserContents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserContents")
            .field("query", &self.query)
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl UserContents {
    /// Fetch one page. Requires a signed-in session; the token check runs
    /// locally before any request goes out. Pages beyond the last one come
    /// back as an empty list, not an error.
    pub(crate) async fn fetch(transport: Arc<Transport>, query: ContentQuery) -> ClientResult<Self> {
        let items = load(&transport, &query).await?;
        Ok(Self {
            transport,
            query,
            items,
        })
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn query(&self) -> &ContentQuery {
        &self.query
    }

    /// Re-issue the identical query, replacing the held items. For callers
    /// reacting to content mutations made elsewhere (e.g. a deletion).
    pub async fn refresh(&mut self) -> ClientResult<&[ContentItem]> {
        self.items = load(&self.transport, &self.query).await?;
        Ok(&self.items)
    }
}

async fn load(transport: &Transport, query: &ContentQuery) -> ClientResult<Vec<ContentItem>> {
    let path = format!("/contents/user/{}", query.user_id);
    let (builder, _session) = transport.authed(Method::GET, &path)?;
    let builder = builder.query(&[
        ("page", query.page.to_string()),
        ("size", query.size.to_string()),
        ("sortBy", query.sort_by.as_str().to_string()),
        ("direction", query.direction.as_str().to_string()),
    ]);

    let page: Page<BackendContent> = transport.send_json(builder).await?;
    Ok(page.content.iter().map(translate::to_content_item).collect())
}
