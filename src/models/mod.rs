//! Wire and UI data models.

pub mod content;
pub mod platform;
pub mod user;

pub use content::{BackendContent, ContentItem, ContentKind, Page};
pub use platform::{Channel, CustomSubject, LikeResponse, StorageSummary, UserInfo};
pub use user::{LoginRequest, LoginResponse, User};
