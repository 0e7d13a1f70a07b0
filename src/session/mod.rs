//! Session store: single source of truth for the authenticated identity and
//! the bearer credential authorizing mutating backend calls.
//!
//! Login and logout flip identity and credential together; there is no
//! observable point where one is set and the other is not. Dependent
//! components read through the accessors and never mutate session state.

use crate::client::ApiClient;
use crate::models::{LoginRequest, RegisterRequest, UserProfile};

/// Result of a login, register, or restore attempt. Failures carry a
/// human-readable message; errors never propagate past this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failure(String),
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            LoginOutcome::Success => None,
            LoginOutcome::Failure(msg) => Some(msg),
        }
    }
}

/// Client-side session state.
#[derive(Debug, Default)]
pub struct SessionStore {
    identity: Option<UserProfile>,
    credential: Option<String>,
}

impl SessionStore {
    /// Create an empty, unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&UserProfile> {
        self.identity.as_ref()
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Authenticate with email and password. On success the identity and
    /// credential are set atomically; on any failure prior state is left
    /// untouched.
    pub async fn login(&mut self, client: &ApiClient, email: &str, password: &str) -> LoginOutcome {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = match client.login(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Login request failed: {}", e);
                return LoginOutcome::Failure(e.message());
            }
        };

        self.establish(client, response).await
    }

    /// Create an account and authenticate in one step.
    pub async fn register(&mut self, client: &ApiClient, request: &RegisterRequest) -> LoginOutcome {
        let response = match client.register(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Registration request failed: {}", e);
                return LoginOutcome::Failure(e.message());
            }
        };

        self.establish(client, response).await
    }

    /// Re-establish a session from a persisted token by validating it
    /// against the backend.
    pub async fn restore(&mut self, client: &ApiClient, token: &str) -> LoginOutcome {
        match client.get_me(token).await {
            Ok(identity) => {
                self.identity = Some(identity);
                self.credential = Some(token.to_string());
                LoginOutcome::Success
            }
            Err(e) => {
                tracing::warn!("Session restore failed: {}", e);
                LoginOutcome::Failure(e.message())
            }
        }
    }

    /// Clear the session unconditionally. Idempotent.
    pub fn logout(&mut self) {
        self.identity = None;
        self.credential = None;
    }

    async fn establish(
        &mut self,
        client: &ApiClient,
        response: crate::models::AuthResponse,
    ) -> LoginOutcome {
        let Some(token) = response.token else {
            let message = response
                .message
                .unwrap_or_else(|| "Invalid email or password".to_string());
            return LoginOutcome::Failure(message);
        };

        // Login responses may omit the profile; fetch it before touching
        // any state so a failure leaves the session as it was.
        let identity = match response.user {
            Some(user) => user,
            None => match client.get_me(&token).await {
                Ok(user) => user,
                Err(e) => {
                    tracing::warn!("Profile fetch after login failed: {}", e);
                    return LoginOutcome::Failure(e.message());
                }
            },
        };

        self.identity = Some(identity);
        self.credential = Some(token);
        LoginOutcome::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = SessionStore::new();
        assert!(!session.is_authenticated());
        assert!(session.identity().is_none());
        assert!(session.credential().is_none());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut session = SessionStore::new();
        session.logout();
        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.credential().is_none());
    }
}
