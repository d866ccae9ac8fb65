//! User identity and auth endpoint payloads.

use serde::{Deserialize, Serialize};

/// The signed-in user's identity, as persisted alongside the session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub user_type: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body from `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub token_type: String,
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub user_type: String,
}

impl LoginResponse {
    /// Extract the user record carried alongside the token.
    pub fn user(&self) -> User {
        User {
            user_id: self.user_id,
            username: self.username.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            user_type: self.user_type.clone(),
        }
    }
}
