//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use url::Url;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which backend the read-only fetches talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    /// In-memory fixture data, no network.
    Mock,
    /// The real REST backend.
    Real,
}

impl ApiMode {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "real" => Ok(Self::Real),
            other => bail!("ITDA_API_MODE must be \"mock\" or \"real\", got {other:?}"),
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST backend (default: http://localhost:8080).
    pub base_url: Url,

    /// API mode for the read-only endpoints (default: real).
    ///
    /// Authenticated operations (login, registration, per-user listing)
    /// always use real semantics regardless of this switch.
    pub api_mode: ApiMode,

    /// Fixed request timeout (default: 10 seconds).
    pub timeout: Duration,

    /// Directory holding the persisted session token and user record
    /// (default: ./.itda-session).
    pub session_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = env::var("ITDA_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let base_url = Url::parse(&base_url).context("ITDA_API_BASE_URL must be a valid URL")?;

        let api_mode = match env::var("ITDA_API_MODE") {
            Ok(value) => ApiMode::parse(&value)?,
            Err(_) => ApiMode::Real,
        };

        let timeout_secs: u64 = env::var("ITDA_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .context("ITDA_API_TIMEOUT_SECS must be a valid u64")?;

        let session_dir = env::var("ITDA_SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./.itda-session"));

        Ok(Self {
            base_url,
            api_mode,
            timeout: Duration::from_secs(timeout_secs),
            session_dir,
        })
    }

    /// Configuration pointing at a specific backend, with defaults for
    /// everything else. Mostly useful in tests and embedding tools.
    pub fn for_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            api_mode: ApiMode::Real,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_dir: PathBuf::from("./.itda-session"),
        }
    }
}
