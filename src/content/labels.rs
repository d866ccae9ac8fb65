//! Closed enumerations over the backend's classification codes and the
//! fixed Korean labels the UI renders for them.
//!
//! Every code the backend can legitimately send is an enum variant; parsing
//! returns `None` for anything else so callers must handle the unmapped
//! branch explicitly.

use serde::{Deserialize, Serialize};

/// Placeholder label shown when a classification code cannot be mapped.
pub const NOT_APPLICABLE: &str = "해당없음";

/// Generic thumbnail used when neither the backend nor a subject placeholder
/// provides one.
pub const GENERIC_THUMBNAIL: &str = "/placeholder-thumbnail.jpg";

/// Channel name for items not filed under a channel.
pub const DEFAULT_CHANNEL_NAME: &str = "내 콘텐츠";

/// Channel id for items not filed under a channel.
pub const DEFAULT_CHANNEL_ID: &str = "my-content";

/// School level codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchoolLevel {
    Elementary,
    Middle,
    High,
}

impl SchoolLevel {
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "elementary" => Some(Self::Elementary),
            "middle" => Some(Self::Middle),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Elementary => "초등학교",
            Self::Middle => "중학교",
            Self::High => "고등학교",
        }
    }
}

/// Subject codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectCode {
    Korean,
    Math,
    English,
    Science,
    Social,
}

impl SubjectCode {
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "korean" => Some(Self::Korean),
            "math" => Some(Self::Math),
            "english" => Some(Self::English),
            "science" => Some(Self::Science),
            "social" => Some(Self::Social),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Korean => "국어",
            Self::Math => "수학",
            Self::English => "영어",
            Self::Science => "과학",
            Self::Social => "사회",
        }
    }

    /// Subject-specific thumbnail placeholder.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Korean => "/placeholders/korean.png",
            Self::Math => "/placeholders/math.png",
            Self::English => "/placeholders/english.png",
            Self::Science => "/placeholders/science.png",
            Self::Social => "/placeholders/social.png",
        }
    }
}

/// Content classification codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentClass {
    School,
    NonSchool,
    Element,
}

impl ContentClass {
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "school" => Some(Self::School),
            "non-school" => Some(Self::NonSchool),
            "element" => Some(Self::Element),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::School => "#교과",
            Self::NonSchool => "#비교과",
            Self::Element => "#요소자료",
        }
    }
}

/// Visibility codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicStatus {
    Public,
    Private,
}

impl PublicStatus {
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Public => "공개",
            Self::Private => "비공개",
        }
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_labels() {
        assert_eq!(SchoolLevel::parse("elementary").map(SchoolLevel::label), Some("초등학교"));
        assert_eq!(SubjectCode::parse("math").map(SubjectCode::label), Some("수학"));
        assert_eq!(ContentClass::parse("non-school").map(ContentClass::label), Some("#비교과"));
        assert_eq!(PublicStatus::parse("private").map(PublicStatus::label), Some("비공개"));
    }

    #[test]
    fn unknown_codes_do_not_parse() {
        assert_eq!(SchoolLevel::parse("kindergarten"), None);
        assert_eq!(SubjectCode::parse("music"), None);
        assert_eq!(ContentClass::parse("etc"), None);
        assert_eq!(PublicStatus::parse("shared"), None);
    }

    #[test]
    fn mapping_is_stable() {
        let first = SubjectCode::parse("science").map(SubjectCode::label);
        let second = SubjectCode::parse("science").map(SubjectCode::label);
        assert_eq!(first, second);
    }
}
