//! Authenticated-user session state
//!
//! A plain value owned by the caller and passed into each handler, one per
//! connected client. No expiry.

/// Records which user, if any, is currently authenticated
#[derive(Debug, Clone, Default)]
pub struct Session {
    current_user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session authenticated as `username`
    pub fn login(&mut self, username: impl Into<String>) {
        self.current_user = Some(username.into());
    }

    /// Reset to unauthenticated
    pub fn logout(&mut self) {
        self.current_user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }
}
