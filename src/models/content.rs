//! Content wire DTOs and the normalized UI content model.

use serde::{Deserialize, Serialize};

/// Raw content representation as the backend serves it.
///
/// Owned by the backend; nothing outside [`crate::content::translate`] is
/// allowed to interpret its shape. Every classification field is nullable
/// and may drift, which is why translation is total and defensive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackendContent {
    pub content_id: i64,
    pub title: Option<String>,
    pub description: Option<String>,

    // Classification codes.
    pub content_type: Option<String>,
    pub school_level: Option<String>,
    pub grade: Option<String>,
    pub semester: Option<String>,
    pub subject: Option<String>,
    pub achievement_standard: Option<String>,

    // Format and payload.
    pub content_format: Option<String>,
    pub content_url: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub file_extension: Option<String>,

    // Support material linkage.
    pub parent_content_id: Option<i64>,
    pub is_support_material: Option<bool>,

    pub thumbnail_path: Option<String>,
    pub keywords: Option<String>,

    // Rights and visibility.
    pub copyright_type: Option<String>,
    pub usage_condition: Option<String>,
    pub public_status: Option<String>,

    // Storage location.
    pub storage_type: Option<String>,
    pub channel_id: Option<i64>,
    pub folder_path: Option<String>,

    pub user_id: Option<i64>,

    // Counters.
    pub view_count: Option<i64>,
    pub like_count: Option<i64>,
    pub download_count: Option<i64>,

    // ISO-8601 timestamps, serialized without interpretation.
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Spring-style page envelope for paginated listing endpoints.
///
/// Every field is defaulted so an out-of-range or otherwise empty page
/// deserializes to an empty envelope instead of an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

/// What kind of material a content item is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Package,
    #[default]
    Contents,
    Question,
    Exam,
}

/// Normalized content model the view layer consumes.
///
/// Invariant: every field holds a deterministic value. Absent backend data
/// degrades to the documented defaults during translation; nothing here is
/// ever null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub channel_name: String,
    pub channel_id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub category: String,
    pub school: String,
    pub grade: String,
    pub semester: String,
    pub subject: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub liked: bool,
    /// Date-only string, e.g. `2025-03-18`. Empty when the backend gave no
    /// timestamp.
    pub created_at: String,
    #[serde(default)]
    pub badges: Vec<String>,
}
