use async_trait::async_trait;
use uuid::Uuid;

use super::dto::{AuthResponse, SignupRequest, UserProfile};

/// Token returned by every auth operation. An opaque placeholder, no claims.
pub const MOCK_TOKEN: &str = "mock-jwt-token";

/// Seam for credential handling.
///
/// The only implementation today is [`MockAuth`]; a real identity backend can
/// replace it later without touching the routes.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> anyhow::Result<AuthResponse>;
    async fn signup(&self, signup: SignupRequest) -> anyhow::Result<AuthResponse>;
    async fn logout(&self) -> anyhow::Result<()>;
    async fn current_user(&self) -> anyhow::Result<UserProfile>;
}

/// Mocked auth: always succeeds, echoes input where provided, returns a fixed
/// stub identity otherwise. The password is accepted and discarded.
pub struct MockAuth;

#[async_trait]
impl AuthProvider for MockAuth {
    async fn login(&self, email: &str, _password: &str) -> anyhow::Result<AuthResponse> {
        let user = UserProfile {
            id: Uuid::new_v4().to_string(),
            name: "John Doe".to_string(),
            email: email.to_string(),
            age: 28,
            location: "Mumbai".to_string(),
        };
        Ok(AuthResponse {
            user,
            token: MOCK_TOKEN.to_string(),
        })
    }

    async fn signup(&self, signup: SignupRequest) -> anyhow::Result<AuthResponse> {
        let SignupRequest {
            name,
            email,
            age,
            location,
            // accepted, never stored or verified
            password: _password,
            phone: _phone,
            gender: _gender,
        } = signup;

        let user = UserProfile {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            age,
            location,
        };
        Ok(AuthResponse {
            user,
            token: MOCK_TOKEN.to_string(),
        })
    }

    async fn logout(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn current_user(&self) -> anyhow::Result<UserProfile> {
        Ok(UserProfile {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            age: 28,
            location: "Mumbai".to_string(),
        })
    }
}
