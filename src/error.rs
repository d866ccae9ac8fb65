//! Client error types.

use thiserror::Error;

/// Errors surfaced by the client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("internal client error")]
    Internal(#[from] anyhow::Error),
}

/// A registration draft failed a required-field or cross-field rule.
///
/// Evaluated before any network call; messages are the exact strings shown
/// to the user. Rule order is fixed and the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("콘텐츠명을 입력해주세요.")]
    EmptyTitle,

    #[error("키워드를 입력해주세요.")]
    EmptyKeywords,

    #[error("파일을 선택해주세요.")]
    MissingFile,

    #[error("URL을 입력해주세요.")]
    EmptyUrl,

    #[error("채널을 선택해주세요.")]
    MissingChannel,

    #[error("폴더를 선택해주세요.")]
    MissingFolder,
}

/// Authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// An authenticated call was attempted with no session token. Raised
    /// locally, before anything is sent over the wire.
    #[error("로그인이 필요합니다.")]
    NotSignedIn,

    /// The backend rejected the supplied credentials.
    #[error("{0}")]
    Rejected(String),
}

impl AuthError {
    /// Rejection carrying the backend's message, or a generic one when the
    /// backend gave none.
    pub fn rejected(message: Option<String>) -> Self {
        match message {
            Some(m) if !m.trim().is_empty() => Self::Rejected(m),
            _ => Self::Rejected("아이디 또는 비밀번호가 올바르지 않습니다.".to_string()),
        }
    }
}

/// A request reached the network and failed: non-2xx response or a
/// connection-level error. Carries the HTTP status when there was a
/// response, and the backend-provided message when one could be extracted.
#[derive(Debug, Clone, Error)]
#[error("요청에 실패했습니다: {message}")]
pub struct TransportError {
    pub status: Option<u16>,
    pub message: String,
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.into())
    }
}

/// Result type alias using ClientError.
pub type ClientResult<T> = Result<T, ClientError>;
