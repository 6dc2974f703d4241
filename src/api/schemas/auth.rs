use crate::domain::token::TokenPair;
use crate::domain::user::UserProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

/// Payload shape varies by provider: implicit-flow providers hand the client
/// a token directly, code-flow providers hand it a code to exchange.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SocialCredentials {
    Implicit { token: String },
    CodeFlow { code: String, redirect_uri: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Discord,
    Microsoft,
}

impl SocialProvider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Discord => "discord",
            Self::Microsoft => "microsoft",
        }
    }
}

/// Response shape shared by login, registration, and social login.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserProfile,
    pub tokens: TokenPair,
}

#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}
