// src/session.rs

/// Explicit session context, established when the external identity provider
/// reports a successful sign-in and dropped on sign-out. Components that need
/// the current identity or the device push token receive this by reference
/// instead of reaching into global state.
#[derive(Debug, Clone)]
pub struct Session {
    user_id: String,
    push_token: Option<String>,
}

impl Session {
    pub fn sign_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            push_token: None,
        }
    }

    /// Attach the device push token captured by the client, if any.
    pub fn with_push_token(mut self, token: impl Into<String>) -> Self {
        self.push_token = Some(token.into());
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn push_token(&self) -> Option<&str> {
        self.push_token.as_deref()
    }

    /// Tear the session down. Consumes the context so no component can keep
    /// acting on behalf of a signed-out identity.
    pub fn sign_out(self) {}
}
