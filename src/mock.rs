//! In-memory fixture data for mock mode.
//!
//! When the client runs with `ApiMode::Mock`, the read-only endpoints are
//! served from this store instead of the network. A small artificial delay
//! keeps callers honest about their async handling.

use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use tracing::debug;

use crate::models::{
    Channel, ContentItem, ContentKind, CustomSubject, LikeResponse, StorageSummary, UserInfo,
};

/// Simulated network latency for fixture responses.
const MOCK_DELAY: Duration = Duration::from_millis(300);

async fn delay() {
    tokio::time::sleep(MOCK_DELAY).await;
}

fn kind_code(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Package => "package",
        ContentKind::Contents => "contents",
        ContentKind::Question => "question",
        ContentKind::Exam => "exam",
    }
}

fn item(
    id: &str,
    title: &str,
    kind: ContentKind,
    category: &str,
    school: &str,
    grade: &str,
    subject: &str,
    channel_name: &str,
) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        thumbnail: "/placeholder-thumbnail.jpg".to_string(),
        channel_name: channel_name.to_string(),
        channel_id: "channel1".to_string(),
        kind,
        category: category.to_string(),
        school: school.to_string(),
        grade: grade.to_string(),
        semester: "1학기".to_string(),
        subject: subject.to_string(),
        view_count: 455,
        like_count: 11,
        download_count: 2,
        liked: false,
        created_at: Utc::now().date_naive().to_string(),
        badges: vec!["공개".to_string()],
    }
}

/// Fixture-backed stand-in for the read-only backend endpoints.
pub(crate) struct FixtureStore {
    contents: Mutex<Vec<ContentItem>>,
    news: Mutex<Vec<ContentItem>>,
}

impl FixtureStore {
    pub fn new() -> Self {
        let contents = vec![
            item(
                "1",
                "분수의 이해",
                ContentKind::Contents,
                "#교과",
                "초등학교",
                "5학년",
                "수학",
                "내 콘텐츠",
            ),
            item(
                "2",
                "찬찬한글 기본_자음, 모음, 받침 연습",
                ContentKind::Package,
                "#교과",
                "초등학교",
                "1학년",
                "국어",
                "내 콘텐츠",
            ),
            item(
                "3",
                "물질의 상태 변화 실험",
                ContentKind::Contents,
                "#교과",
                "중학교",
                "1학년",
                "과학",
                "내 콘텐츠",
            ),
            item(
                "4",
                "영문법 기초 단원평가",
                ContentKind::Exam,
                "#교과",
                "중학교",
                "2학년",
                "영어",
                "내 콘텐츠",
            ),
        ];

        let news = vec![
            item(
                "101",
                "진진구의 기초 지식, 도형, 단위 연습",
                ContentKind::Package,
                "#패키지",
                "초등학교",
                "5학년",
                "수학",
                "진진구 수학교실",
            ),
            item(
                "102",
                "사회 탐구 보고서 쓰기",
                ContentKind::Contents,
                "#교과",
                "초등학교",
                "6학년",
                "사회",
                "열린 사회교실",
            ),
        ];

        Self {
            contents: Mutex::new(contents),
            news: Mutex::new(news),
        }
    }

    pub async fn user_info(&self) -> UserInfo {
        delay().await;
        UserInfo {
            id: "8".to_string(),
            name: "김교사".to_string(),
            nickname: "수학쌤".to_string(),
            school: "서울초등학교".to_string(),
            location: "서울".to_string(),
            profile_image: "/default-profile.png".to_string(),
            message_count: 3,
            channel_invite_count: 1,
            follower_count: 42,
            following_count: 17,
        }
    }

    pub async fn storage_summary(&self) -> StorageSummary {
        delay().await;
        let total = self.contents.lock().len() as u32;
        StorageSummary {
            used_space: "1.2GB".to_string(),
            total_space: "10GB".to_string(),
            package_count: 1,
            contents_count: 2,
            question_count: 0,
            exam_count: 1,
            shared_count: 0,
            total_count: total,
        }
    }

    pub async fn channels(&self) -> Vec<Channel> {
        delay().await;
        vec![
            Channel {
                id: "channel1".to_string(),
                name: "진진구 수학교실".to_string(),
                description: "초등 수학 자료를 나누는 채널".to_string(),
                thumbnail: "/default-thumbnail.png".to_string(),
                subscriber_count: 1024,
            },
            Channel {
                id: "channel2".to_string(),
                name: "열린 사회교실".to_string(),
                description: "사회 탐구 수업 자료".to_string(),
                thumbnail: "/default-thumbnail.png".to_string(),
                subscriber_count: 311,
            },
        ]
    }

    pub async fn subscribed_news(&self) -> Vec<ContentItem> {
        delay().await;
        self.news.lock().clone()
    }

    /// Custom teaching materials, optionally filtered by kind and by the
    /// compound subject key `{school}_{grade}_{id}_{subject}`.
    pub async fn custom_contents(
        &self,
        category: Option<&str>,
        subject: Option<&str>,
    ) -> Vec<ContentItem> {
        delay().await;
        let mut filtered = self.contents.lock().clone();

        if let Some(key) = subject.filter(|s| *s != "all") {
            let parts: Vec<&str> = key.split('_').collect();
            if let [school, grade, _, subject_name] = parts.as_slice() {
                filtered.retain(|c| {
                    c.school == *school && c.grade == *grade && c.subject == *subject_name
                });
            }
        }

        if let Some(kind) = category.filter(|c| *c != "all") {
            filtered.retain(|c| kind_code(c.kind) == kind);
        }

        filtered
    }

    pub async fn custom_subjects(&self) -> Vec<CustomSubject> {
        delay().await;
        vec![
            CustomSubject {
                school_level: "초등학교".to_string(),
                grade: 5,
                subject_id: "math".to_string(),
                subject_name: "수학".to_string(),
            },
            CustomSubject {
                school_level: "초등학교".to_string(),
                grade: 6,
                subject_id: "social".to_string(),
                subject_name: "사회".to_string(),
            },
        ]
    }

    pub async fn content_detail(&self, content_id: &str) -> Option<ContentItem> {
        delay().await;
        let contents = self.contents.lock();
        let news = self.news.lock();
        contents
            .iter()
            .chain(news.iter())
            .find(|c| c.id == content_id)
            .cloned()
    }

    /// Toggle a like on a fixture item, mutating its counter.
    pub async fn toggle_like(&self, content_id: &str) -> LikeResponse {
        delay().await;
        let mut contents = self.contents.lock();
        let mut news = self.news.lock();

        let found = contents
            .iter_mut()
            .chain(news.iter_mut())
            .find(|c| c.id == content_id);

        match found {
            Some(content) => {
                content.liked = !content.liked;
                if content.liked {
                    content.like_count += 1;
                } else {
                    content.like_count = content.like_count.saturating_sub(1);
                }
                LikeResponse {
                    success: true,
                    like_count: content.like_count,
                }
            }
            None => {
                debug!(content_id, "like toggle on unknown fixture content");
                LikeResponse {
                    success: false,
                    like_count: 0,
                }
            }
        }
    }
}
