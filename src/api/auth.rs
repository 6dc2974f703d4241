use crate::api::ApiClient;
use crate::api::schemas::auth::{
    AuthResponse, ChangePasswordRequest, LoginRequest, ProfileUpdate, RegisterRequest,
    SocialCredentials, SocialProvider,
};
use crate::domain::user::UserProfile;
use crate::error::Result;
use reqwest::Method;
use serde_json::to_value;

/// Session-establishing and profile endpoints.
///
/// The three login variants are alternatives of one capability; each
/// persists the returned credential pair on success so subsequent requests
/// carry the new access token.
impl ApiClient {
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let response: AuthResponse = self.request(Method::POST, "/auth/login", None, Some(&body)).await?;
        self.credentials().save_tokens(&response.tokens.access, &response.tokens.refresh);
        Ok(response)
    }

    #[tracing::instrument(skip(self, fields))]
    pub async fn register(&self, fields: &RegisterRequest) -> Result<AuthResponse> {
        let body = to_value(fields)?;
        let response: AuthResponse = self.request(Method::POST, "/auth/register", None, Some(&body)).await?;
        self.credentials().save_tokens(&response.tokens.access, &response.tokens.refresh);
        Ok(response)
    }

    #[tracing::instrument(skip(self, credentials), fields(provider = provider.as_str()))]
    pub async fn social_login(
        &self,
        provider: SocialProvider,
        credentials: &SocialCredentials,
    ) -> Result<AuthResponse> {
        let body = to_value(credentials)?;
        let path = format!("/auth/{}", provider.as_str());
        let response: AuthResponse = self.request(Method::POST, &path, None, Some(&body)).await?;
        self.credentials().save_tokens(&response.tokens.access, &response.tokens.refresh);
        Ok(response)
    }

    /// Local logout: drops stored credentials. Navigation and in-memory
    /// state resets are the session store's concern.
    pub fn logout(&self) {
        self.credentials().clear();
    }

    pub async fn current_user(&self) -> Result<UserProfile> {
        self.request(Method::GET, "/auth/profile", None, None).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        let body = to_value(update)?;
        self.request(Method::PATCH, "/auth/profile", None, Some(&body)).await
    }

    #[tracing::instrument(skip_all)]
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<()> {
        let body = to_value(ChangePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        })?;
        self.request_empty(Method::POST, "/auth/change-password", Some(&body)).await
    }
}
