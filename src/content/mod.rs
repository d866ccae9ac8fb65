//! Content pipeline: label tables, wire-to-UI translation, registration,
//! and per-user listing.

pub mod labels;
pub mod list;
pub mod register;
pub mod translate;

pub use list::{ContentQuery, SortDirection, SortField, UserContents};
pub use register::{
    Attachment, ContentFormat, CopyrightType, RegistrationDraft, StorageTarget, UsageCondition,
};
pub use translate::to_content_item;
