use crate::domain::token;
use crate::domain::user::UserProfile;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_KEY: &str = "user.json";

/// Durable key/value persistence for the credential pair and cached profile.
///
/// One file per key under the state directory, mirroring the storage layout
/// the backend's web client uses. No validation logic lives here. Write
/// failures are swallowed so callers always proceed optimistically; the
/// worst case is a session that does not survive a restart.
///
/// Multiple processes sharing a state directory can race, same as multiple
/// browser tabs sharing storage. No cross-process coordination is attempted;
/// a stale in-memory session is corrected lazily on the next failed request.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!(error = %e, dir = %dir.display(), "failed to create state directory");
        }
        Self { dir }
    }

    /// Unconditionally overwrites both tokens.
    pub fn save_tokens(&self, access: &str, refresh: &str) {
        self.write(ACCESS_TOKEN_KEY, access);
        self.write(REFRESH_TOKEN_KEY, refresh);
    }

    /// Post-refresh update; the refresh token is left untouched.
    pub fn save_access_token(&self, access: &str) {
        self.write(ACCESS_TOKEN_KEY, access);
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    pub fn save_user(&self, user: &UserProfile) {
        match serde_json::to_string(user) {
            Ok(json) => self.write(USER_KEY, &json),
            Err(e) => tracing::warn!(error = %e, "failed to serialize cached profile"),
        }
    }

    /// Cached profile; an unparseable cache reads as absent.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unparseable cached profile");
                None
            }
        }
    }

    /// Removes both tokens and the cached profile. Idempotent.
    pub fn clear(&self) {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
            self.remove(key);
        }
    }

    /// Startup cleanup: drops a stale access token, and both tokens when the
    /// refresh token itself can no longer be exchanged.
    pub fn evict_expired(&self, skew: Duration) {
        if let Some(access) = self.access_token() {
            if token::is_expired(&access, skew) {
                tracing::debug!("access token expired, removing");
                self.remove(ACCESS_TOKEN_KEY);
            }
        }

        let refresh_dead = match self.refresh_token() {
            Some(refresh) => {
                if token::is_expired(&refresh, skew) {
                    tracing::debug!("refresh token expired, removing");
                    self.remove(REFRESH_TOKEN_KEY);
                    true
                } else {
                    false
                }
            }
            None => true,
        };

        // Without a usable refresh token the access token cannot be renewed.
        if refresh_dead {
            self.remove(ACCESS_TOKEN_KEY);
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(error = %e, key, "failed to read credential entry");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = fs::write(self.path(key), value) {
            tracing::warn!(error = %e, key, "failed to persist credential entry");
        }
    }

    fn remove(&self, key: &str) {
        match fs::remove_file(self.path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(error = %e, key, "failed to remove credential entry"),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
