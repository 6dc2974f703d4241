use crate::api::ApiClient;
use crate::api::schemas::auth::{
    ProfileUpdate, RegisterRequest, SocialCredentials, SocialProvider,
};
use crate::domain::session::Session;
use crate::domain::user::UserProfile;
use crate::error::Result;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, PoisonError, RwLock};

type SessionEndHook = Arc<dyn Fn() + Send + Sync>;

/// In-memory authentication state consumed by the UI, synchronized with the
/// credential store through the API client.
///
/// Every mutating operation either succeeds and updates the session, or
/// leaves the state untouched and reports the failure; there is no partial
/// transition. Dependent stores learn about session end through registered
/// hooks rather than by being reached into.
pub struct SessionStore {
    api: Arc<ApiClient>,
    state: RwLock<Session>,
    session_end_hooks: RwLock<Vec<SessionEndHook>>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            state: RwLock::new(Session::anonymous()),
            session_end_hooks: RwLock::new(Vec::new()),
        }
    }

    /// Synchronizes the in-memory session with the cached profile.
    /// Pure bookkeeping, no network call.
    pub fn check_auth(&self) {
        let session = Session::from_user(self.api.credentials().user());
        *self.write_state() = session;
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated
    }

    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.session().user
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_admin())
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        let response = self.api.login(email, password).await?;
        self.establish(response.user.clone());
        Ok(response.user)
    }

    #[tracing::instrument(skip(self, fields))]
    pub async fn register(&self, fields: &RegisterRequest) -> Result<UserProfile> {
        let response = self.api.register(fields).await?;
        self.establish(response.user.clone());
        Ok(response.user)
    }

    #[tracing::instrument(skip(self, credentials), fields(provider = provider.as_str()))]
    pub async fn social_login(
        &self,
        provider: SocialProvider,
        credentials: &SocialCredentials,
    ) -> Result<UserProfile> {
        let response = self.api.social_login(provider, credentials).await?;
        self.establish(response.user.clone());
        Ok(response.user)
    }

    /// Clears persisted credentials, resets the in-memory session, and
    /// notifies subscribed stores. A failing subscriber is logged, not fatal.
    #[tracing::instrument(skip(self))]
    pub fn logout(&self) {
        self.api.logout();
        *self.write_state() = Session::anonymous();

        // Hooks run outside the lock so a subscriber may register further
        // hooks without deadlocking.
        let hooks: Vec<SessionEndHook> = self
            .session_end_hooks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for hook in &hooks {
            if catch_unwind(AssertUnwindSafe(|| hook())).is_err() {
                tracing::warn!("session-end subscriber panicked");
            }
        }
        tracing::info!("session ended");
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        let user = self.api.update_profile(update).await?;
        self.api.credentials().save_user(&user);
        *self.write_state() = Session::from_user(Some(user.clone()));
        Ok(user)
    }

    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<()> {
        self.api.change_password(old_password, new_password).await
    }

    /// Adopts a profile obtained out of band, e.g. by the OAuth callback page.
    pub fn set_user(&self, user: UserProfile) {
        self.api.credentials().save_user(&user);
        *self.write_state() = Session::from_user(Some(user));
    }

    /// Adopts a credential pair obtained out of band.
    pub fn set_tokens(&self, access: &str, refresh: &str) {
        self.api.credentials().save_tokens(access, refresh);
    }

    /// Registers a hook fired when the session ends. Dependent stores
    /// subscribe at wiring time.
    pub fn on_session_end(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.session_end_hooks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(hook));
    }

    /// Login entry point with the interrupted location preserved, so the UI
    /// can return the user where they were after signing in.
    #[must_use]
    pub fn login_url_with_return(&self, return_url: Option<&str>) -> String {
        let route = &self.api.config().auth.login_route;
        return_url.map_or_else(
            || route.clone(),
            |url| format!("{route}?returnUrl={}", urlencoding::encode(url)),
        )
    }

    fn establish(&self, user: UserProfile) {
        self.api.credentials().save_user(&user);
        tracing::info!(user = %user.display_name(), "session established");
        *self.write_state() = Session::from_user(Some(user));
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, Session> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
