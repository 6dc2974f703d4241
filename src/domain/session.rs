use crate::domain::user::UserProfile;

/// The client's belief about whether a user is currently authenticated.
///
/// Derived state: always reconstructable from the cached profile in the
/// credential store. `is_authenticated` tracks profile presence, not token
/// validity; a stale flag is corrected lazily on the next failed request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
}

impl Session {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None, is_authenticated: false }
    }

    #[must_use]
    pub fn from_user(user: Option<UserProfile>) -> Self {
        let is_authenticated = user.is_some();
        Self { user, is_authenticated }
    }
}
