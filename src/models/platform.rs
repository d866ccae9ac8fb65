//! Read-only platform models consumed unmodified from the backend.

use serde::{Deserialize, Serialize};

/// Profile card data for the signed-in teacher (`GET /api/user/info`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub nickname: String,
    pub school: String,
    pub location: String,
    pub profile_image: String,
    pub message_count: u32,
    pub channel_invite_count: u32,
    pub follower_count: u32,
    pub following_count: u32,
}

/// Personal storage statistics (`GET /api/user/storage`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSummary {
    pub used_space: String,
    pub total_space: String,
    pub package_count: u32,
    pub contents_count: u32,
    pub question_count: u32,
    pub exam_count: u32,
    pub shared_count: u32,
    pub total_count: u32,
}

/// A channel the user owns or subscribes to (`GET /api/user/channels`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub subscriber_count: u32,
}

/// A subject the user teaches, driving the custom-material filter
/// (`GET /api/user/custom-subjects`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSubject {
    pub school_level: String,
    pub grade: u8,
    pub subject_id: String,
    pub subject_name: String,
}

/// Result of toggling a like on a content item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub success: bool,
    pub like_count: u64,
}
