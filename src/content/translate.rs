//! Translation from the backend content DTO to the normalized UI model.
//!
//! This is the only place allowed to interpret [`BackendContent`]. The
//! translation is total: it never fails, and every field of the resulting
//! [`ContentItem`] is always assigned. Backend data drift degrades to the
//! documented defaults instead of crashing the presentation layer.

use crate::models::{BackendContent, ContentItem, ContentKind};

use super::labels::{
    self, ContentClass, PublicStatus, SchoolLevel, SubjectCode,
};

/// Map one backend content record into the UI model.
pub fn to_content_item(raw: &BackendContent) -> ContentItem {
    ContentItem {
        id: raw.content_id.to_string(),
        title: raw.title.clone().unwrap_or_default(),
        thumbnail: thumbnail(raw),
        channel_name: labels::DEFAULT_CHANNEL_NAME.to_string(),
        channel_id: raw
            .channel_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| labels::DEFAULT_CHANNEL_ID.to_string()),
        kind: ContentKind::default(),
        category: category_label(raw.content_type.as_deref()),
        school: school_label(raw.school_level.as_deref()),
        grade: numbered_label(raw.grade.as_deref(), "학년"),
        semester: numbered_label(raw.semester.as_deref(), "학기"),
        subject: subject_label(raw.subject.as_deref()),
        view_count: counter(raw.view_count),
        like_count: counter(raw.like_count),
        download_count: counter(raw.download_count),
        liked: false,
        created_at: date_only(raw.created_at.as_deref()),
        badges: vec![visibility_badge(raw.public_status.as_deref())],
    }
}

/// Thumbnail fallback chain: backend path, then a placeholder keyed by the
/// lower-cased subject code, then the generic placeholder.
fn thumbnail(raw: &BackendContent) -> String {
    if let Some(path) = raw.thumbnail_path.as_deref()
        && !path.trim().is_empty()
    {
        return path.to_string();
    }

    raw.subject
        .as_deref()
        .and_then(|code| SubjectCode::parse(&code.to_lowercase()))
        .map(SubjectCode::placeholder)
        .unwrap_or(labels::GENERIC_THUMBNAIL)
        .to_string()
}

/// Category label. Unmapped codes become the not-applicable marker; the raw
/// backend code is never surfaced.
fn category_label(code: Option<&str>) -> String {
    code.and_then(ContentClass::parse)
        .map(ContentClass::label)
        .unwrap_or(labels::NOT_APPLICABLE)
        .to_string()
}

/// School label. Unmapped codes fall back to the raw value when present.
fn school_label(code: Option<&str>) -> String {
    match code {
        Some(c) if !c.trim().is_empty() => SchoolLevel::parse(c)
            .map(SchoolLevel::label)
            .unwrap_or(c)
            .to_string(),
        _ => labels::NOT_APPLICABLE.to_string(),
    }
}

/// Subject label. Unmapped codes fall back to the raw value when present.
fn subject_label(code: Option<&str>) -> String {
    match code {
        Some(c) if !c.trim().is_empty() => SubjectCode::parse(c)
            .map(SubjectCode::label)
            .unwrap_or(c)
            .to_string(),
        _ => labels::NOT_APPLICABLE.to_string(),
    }
}

/// Render `5` + `학년` as `5학년`; absent values use the marker.
fn numbered_label(value: Option<&str>, unit: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => format!("{}{unit}", v.trim()),
        _ => labels::NOT_APPLICABLE.to_string(),
    }
}

fn counter(value: Option<i64>) -> u64 {
    value.map(|v| v.max(0) as u64).unwrap_or(0)
}

/// Truncate an ISO-8601 timestamp to its date component.
fn date_only(timestamp: Option<&str>) -> String {
    timestamp
        .map(|ts| ts.split('T').next().unwrap_or(ts).to_string())
        .unwrap_or_default()
}

/// Single-element badge list carrying the visibility label.
fn visibility_badge(code: Option<&str>) -> String {
    code.and_then(PublicStatus::parse)
        .map(PublicStatus::label)
        .unwrap_or(labels::NOT_APPLICABLE)
        .to_string()
}
