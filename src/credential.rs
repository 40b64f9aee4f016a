use secrecy::{ExposeSecret, SecretString};

use crate::error::StoryError;

/// A session-lifetime API credential.
///
/// Held only in memory for the duration of the session: never persisted,
/// never logged. Debug formatting is redacted by `secrecy`.
#[derive(Debug, Clone)]
pub struct Credential(SecretString);

impl Credential {
    /// Wraps user-supplied input. Input that is empty after trimming is
    /// rejected with an auth error.
    pub fn new(raw: impl Into<String>) -> Result<Self, StoryError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(StoryError::AuthError("Missing API key".to_string()));
        }
        Ok(Credential(SecretString::new(raw)))
    }

    /// Exposes the secret for use as a bearer token.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}
