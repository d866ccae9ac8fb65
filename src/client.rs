//! The client facade: session lifecycle, content operations, and the
//! read-only platform endpoints.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{ApiMode, Config};
use crate::content::{ContentQuery, RegistrationDraft, UserContents};
use crate::error::{AuthError, ClientError, ClientResult, TransportError};
use crate::home::{self, HomeData};
use crate::mock::FixtureStore;
use crate::models::{
    BackendContent, Channel, ContentItem, ContentKind, CustomSubject, LikeResponse, LoginRequest,
    LoginResponse, StorageSummary, User, UserInfo,
};
use crate::session::{FileStorage, Session, SessionStorage, SessionStore};
use crate::transport::Transport;

/// HTTP statuses treated as a credential/permission rejection rather than a
/// transport fault.
const REJECTION_STATUSES: &[u16] = &[400, 401, 403];

/// Async client for the platform backend.
pub struct Client {
    config: Config,
    transport: Arc<Transport>,
    session: Arc<SessionStore>,
    fixtures: FixtureStore,
}

impl Client {
    /// Construct a client with file-backed session persistence under the
    /// configured session directory. Restores a persisted session when one
    /// exists and is intact.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let storage = FileStorage::new(config.session_dir.clone());
        Self::with_storage(config, Box::new(storage))
    }

    /// Construct a client with injected session storage.
    pub fn with_storage(config: Config, storage: Box<dyn SessionStorage>) -> anyhow::Result<Self> {
        let session = Arc::new(SessionStore::open(storage));
        let transport = Arc::new(Transport::new(&config, Arc::clone(&session))?);

        Ok(Self {
            config,
            transport,
            session,
            fixtures: FixtureStore::new(),
        })
    }

    /// The session store backing this client.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Identity of the signed-in user, if any. Synchronous read of local
    /// state; no network round trip.
    pub fn current_user(&self) -> Option<User> {
        self.session.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // -----------------------------------------------------------------
    // Session lifecycle
    // -----------------------------------------------------------------

    /// Sign in. On success the token/user snapshot is persisted and
    /// readable through [`Client::current_user`]. A backend rejection
    /// surfaces as [`AuthError::Rejected`] carrying the backend's message
    /// when it provided one.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<User> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = match self.transport.post_json("/auth/login", &request).await
        {
            Ok(response) => response,
            Err(ClientError::Transport(TransportError {
                status: Some(status),
                message,
            })) if REJECTION_STATUSES.contains(&status) => {
                return Err(AuthError::rejected(Some(message)).into());
            }
            Err(e) => return Err(e),
        };

        if response.token.trim().is_empty() {
            return Err(AuthError::rejected(None).into());
        }

        let user = response.user();
        self.session.replace(Some(Session {
            token: response.token,
            user: user.clone(),
        }))?;

        debug!(username = %user.username, "signed in");
        Ok(user)
    }

    /// Sign out. Tells the backend on a best-effort basis; local session
    /// state is always cleared regardless of the call's outcome.
    pub async fn logout(&self) {
        if let Ok((builder, _session)) = self.transport.authed(Method::POST, "/auth/logout") {
            if let Err(e) = self.transport.send_expect_ok(builder).await {
                warn!(error = %e, "backend logout failed; clearing local session anyway");
            }
        }
        self.session.clear();
    }

    // -----------------------------------------------------------------
    // Content pipeline
    // -----------------------------------------------------------------

    /// Submit a registration draft.
    ///
    /// Validates first (no network on failure), then posts one multipart
    /// request: the JSON metadata blob plus the file and thumbnail parts.
    /// Caller identity rides in the bearer token and the legacy `X-User-Id`
    /// header, both taken from the same session snapshot. On failure of any
    /// kind the draft is left untouched for correction; nothing is retried.
    pub async fn register_content(&self, draft: &RegistrationDraft) -> ClientResult<BackendContent> {
        draft.validate()?;

        let (builder, session) = self.transport.authed(Method::POST, "/contents")?;
        let form = draft.multipart()?;
        let builder = builder
            .header("X-User-Id", session.user.user_id.to_string())
            .multipart(form);

        let created: BackendContent = self.transport.send_json(builder).await?;
        debug!(content_id = created.content_id, "content registered");
        Ok(created)
    }

    /// Fetch one page of a user's content, translated to the UI model.
    /// Requires a signed-in session; checked locally before any request.
    pub async fn list_user_contents(&self, query: ContentQuery) -> ClientResult<UserContents> {
        UserContents::fetch(Arc::clone(&self.transport), query).await
    }

    /// Load the whole home data set concurrently with fail-together
    /// semantics.
    pub async fn load_home(
        &self,
        category: Option<&str>,
        subject: Option<&str>,
    ) -> ClientResult<HomeData> {
        home::load(self, category, subject).await
    }

    // -----------------------------------------------------------------
    // Read-only endpoints (fixture-served in mock mode)
    // -----------------------------------------------------------------

    pub async fn user_info(&self) -> ClientResult<UserInfo> {
        if self.config.api_mode == ApiMode::Mock {
            return Ok(self.fixtures.user_info().await);
        }
        self.transport.get_json("/api/user/info", &[]).await
    }

    pub async fn storage_summary(&self) -> ClientResult<StorageSummary> {
        if self.config.api_mode == ApiMode::Mock {
            return Ok(self.fixtures.storage_summary().await);
        }
        self.transport.get_json("/api/user/storage", &[]).await
    }

    pub async fn my_channels(&self) -> ClientResult<Vec<Channel>> {
        if self.config.api_mode == ApiMode::Mock {
            return Ok(self.fixtures.channels().await);
        }
        self.transport.get_json("/api/user/channels", &[]).await
    }

    pub async fn subscribed_news(&self) -> ClientResult<Vec<ContentItem>> {
        if self.config.api_mode == ApiMode::Mock {
            return Ok(self.fixtures.subscribed_news().await);
        }
        self.transport
            .get_json("/api/channels/subscribed/news", &[])
            .await
    }

    /// Custom teaching materials, optionally filtered by kind and by the
    /// compound subject key.
    pub async fn custom_contents(
        &self,
        category: Option<&str>,
        subject: Option<&str>,
    ) -> ClientResult<Vec<ContentItem>> {
        if self.config.api_mode == ApiMode::Mock {
            return Ok(self.fixtures.custom_contents(category, subject).await);
        }

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(category) = category {
            query.push(("category", category.to_string()));
        }
        if let Some(subject) = subject {
            query.push(("subject", subject.to_string()));
        }
        self.transport.get_json("/api/contents/custom", &query).await
    }

    pub async fn custom_subjects(&self) -> ClientResult<Vec<CustomSubject>> {
        if self.config.api_mode == ApiMode::Mock {
            return Ok(self.fixtures.custom_subjects().await);
        }
        self.transport
            .get_json("/api/user/custom-subjects", &[])
            .await
    }

    /// Detail view of a single content item. Unknown ids resolve to `None`.
    pub async fn content_detail(&self, content_id: &str) -> ClientResult<Option<ContentItem>> {
        if self.config.api_mode == ApiMode::Mock {
            return Ok(self.fixtures.content_detail(content_id).await);
        }

        let path = format!("/api/contents/{content_id}");
        match self.transport.get_json(&path, &[]).await {
            Ok(item) => Ok(Some(item)),
            Err(ClientError::Transport(TransportError {
                status: Some(404), ..
            })) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Toggle a like on a content item.
    pub async fn toggle_like(
        &self,
        content_id: &str,
        kind: ContentKind,
    ) -> ClientResult<LikeResponse> {
        if self.config.api_mode == ApiMode::Mock {
            return Ok(self.fixtures.toggle_like(content_id).await);
        }

        // The like endpoints predate the REST surface and keep their
        // legacy paths.
        let path = if kind == ContentKind::Package {
            "/viewer/insertJoin.json"
        } else {
            "/cts/act/respns/insert.json"
        };

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct LikeRequest<'a> {
            id: &'a str,
            content_type: ContentKind,
        }

        self.transport
            .post_json(
                path,
                &LikeRequest {
                    id: content_id,
                    content_type: kind,
                },
            )
            .await
    }
}
