//! ITDA platform client
//!
//! Async client SDK for the ITDA teaching-content backend: session and
//! token lifecycle, content registration and listing, and the read-only
//! platform endpoints, with an in-memory mock mode for the latter.
//!
//! ```no_run
//! use itda_client::{Client, Config, ContentQuery};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = Client::new(Config::from_env()?)?;
//! let user = client.login("teacher1", "secret").await?;
//! let page = client
//!     .list_user_contents(ContentQuery::for_user(user.user_id))
//!     .await?;
//! for item in page.items() {
//!     println!("{} ({})", item.title, item.category);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod home;
mod mock;
pub mod models;
pub mod session;
pub mod transport;

pub use client::Client;
pub use config::{ApiMode, Config};
pub use content::{
    Attachment, ContentFormat, ContentQuery, CopyrightType, RegistrationDraft, SortDirection,
    SortField, StorageTarget, UsageCondition, UserContents,
};
pub use error::{AuthError, ClientError, ClientResult, TransportError, ValidationError};
pub use home::HomeData;
pub use models::{BackendContent, ContentItem, ContentKind, Page, User};
pub use session::{FileStorage, MemoryStorage, Session, SessionStorage, SessionStore};
