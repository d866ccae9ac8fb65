//! Content registration: the form draft, its validation rules, and the
//! multipart submission payload.
//!
//! A draft lives for the duration of one form session. Validation runs in a
//! fixed order before anything touches the network, and a failed submission
//! leaves the draft intact so the user can correct and resubmit.

use std::path::Path;

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::error::ValidationError;

use super::labels::{ContentClass, PublicStatus};

/// How the content payload is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Attachment,
    File,
    Url,
}

/// Copyright declaration for the material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyrightType {
    Personal,
    Shared,
}

/// Usage condition attached to the material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UsageCondition {
    PublicDomain,
    Ccl,
    Copyright,
    Ofl,
}

/// Whether the item is filed under a channel or the personal folder tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageTarget {
    Channel,
    Storage,
}

/// A file selected for upload: name plus raw bytes. MIME type is sniffed
/// from the bytes at submission time.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read an attachment from disk, taking the file name from the path.
    pub async fn read(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read attachment {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());
        Ok(Self { file_name, bytes })
    }

    fn part(&self) -> Result<Part> {
        let mime = infer::get(&self.bytes)
            .map(|t| t.mime_type())
            .unwrap_or("application/octet-stream");
        Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(mime)
            .context("failed to build multipart file part")
    }
}

/// Transient form state for one content registration.
#[derive(Debug, Clone)]
pub struct RegistrationDraft {
    pub title: String,
    pub description: String,
    pub content_class: ContentClass,
    pub school_level: Option<String>,
    pub grade: Option<String>,
    pub semester: Option<String>,
    pub subject: Option<String>,
    pub achievement_standard: String,
    pub content_format: ContentFormat,
    pub content_url: String,
    pub keywords: String,
    pub copyright_type: CopyrightType,
    pub usage_condition: UsageCondition,
    pub public_status: PublicStatus,
    pub storage_target: StorageTarget,
    pub channel_id: Option<i64>,
    pub folder_path: Option<String>,
    pub parent_content_id: Option<i64>,
    pub is_support_material: bool,
    pub file: Option<Attachment>,
    pub thumbnail: Option<Attachment>,
}

impl Default for RegistrationDraft {
    /// Form-mount defaults.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            content_class: ContentClass::School,
            school_level: None,
            grade: None,
            semester: None,
            subject: None,
            achievement_standard: String::new(),
            content_format: ContentFormat::Attachment,
            content_url: String::new(),
            keywords: String::new(),
            copyright_type: CopyrightType::Personal,
            usage_condition: UsageCondition::PublicDomain,
            public_status: PublicStatus::Public,
            storage_target: StorageTarget::Channel,
            channel_id: None,
            folder_path: None,
            parent_content_id: None,
            is_support_material: false,
            file: None,
            thumbnail: None,
        }
    }
}

impl RegistrationDraft {
    /// Evaluate the required-field and cross-field rules in their fixed
    /// order. The first failing rule wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.keywords.trim().is_empty() {
            return Err(ValidationError::EmptyKeywords);
        }
        if self.content_format != ContentFormat::Url && self.file.is_none() {
            return Err(ValidationError::MissingFile);
        }
        if self.content_format == ContentFormat::Url && self.content_url.trim().is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        if self.storage_target == StorageTarget::Channel && self.channel_id.is_none() {
            return Err(ValidationError::MissingChannel);
        }
        if self.storage_target == StorageTarget::Storage && non_empty(&self.folder_path).is_none() {
            return Err(ValidationError::MissingFolder);
        }
        Ok(())
    }

    /// Wire metadata for the `content` part. Optional fields are serialized
    /// as explicit `null`, never omitted; the channel id, folder path, and
    /// content URL are only populated when the corresponding mode selects
    /// them.
    pub(crate) fn metadata(&self) -> ContentMetadata<'_> {
        ContentMetadata {
            title: self.title.trim(),
            description: self.description.trim(),
            content_type: self.content_class,
            school_level: non_empty(&self.school_level),
            grade: non_empty(&self.grade),
            semester: non_empty(&self.semester),
            subject: non_empty(&self.subject),
            achievement_standard: non_empty_str(&self.achievement_standard),
            content_format: self.content_format,
            content_url: if self.content_format == ContentFormat::Url {
                non_empty_str(&self.content_url)
            } else {
                None
            },
            keywords: self.keywords.trim(),
            copyright_type: self.copyright_type,
            usage_condition: self.usage_condition,
            public_status: self.public_status,
            storage_type: self.storage_target,
            channel_id: if self.storage_target == StorageTarget::Channel {
                self.channel_id
            } else {
                None
            },
            folder_path: if self.storage_target == StorageTarget::Storage {
                non_empty(&self.folder_path)
            } else {
                None
            },
            parent_content_id: self.parent_content_id,
            is_support_material: self.is_support_material,
        }
    }

    /// Assemble the multipart form: the JSON metadata blob plus the primary
    /// file and optional thumbnail as binary parts.
    pub(crate) fn multipart(&self) -> Result<Form> {
        let metadata =
            serde_json::to_string(&self.metadata()).context("failed to encode content metadata")?;

        let mut form = Form::new().part(
            "content",
            Part::text(metadata)
                .mime_str("application/json")
                .context("failed to build metadata part")?,
        );

        if let Some(file) = &self.file {
            form = form.part("file", file.part()?);
        }
        if let Some(thumbnail) = &self.thumbnail {
            form = form.part("thumbnail", thumbnail.part()?);
        }

        Ok(form)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn non_empty_str(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// The JSON metadata block of a registration submission
/// (`POST /contents`, part name `content`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContentMetadata<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub content_type: ContentClass,
    pub school_level: Option<&'a str>,
    pub grade: Option<&'a str>,
    pub semester: Option<&'a str>,
    pub subject: Option<&'a str>,
    pub achievement_standard: Option<&'a str>,
    pub content_format: ContentFormat,
    pub content_url: Option<&'a str>,
    pub keywords: &'a str,
    pub copyright_type: CopyrightType,
    pub usage_condition: UsageCondition,
    pub public_status: PublicStatus,
    pub storage_type: StorageTarget,
    pub channel_id: Option<i64>,
    pub folder_path: Option<&'a str>,
    pub parent_content_id: Option<i64>,
    pub is_support_material: bool,
}
