use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::dto::{AuthResponse, LoginRequest, MessageResponse, SignupRequest, UserProfile},
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/signup", post(signup))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(payload) = payload?;
    let response = state.auth.login(&payload.email, &payload.password).await?;
    info!(email = %response.user.email, "login");
    Ok(Json(response))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(payload) = payload?;
    let response = state.auth.signup(payload).await?;
    info!(user_id = %response.user.id, email = %response.user.email, "signup");
    Ok(Json(response))
}

#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    state.auth.logout().await?;
    Ok(Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    }))
}

#[instrument(skip(state))]
pub async fn me(State(state): State<AppState>) -> Result<Json<UserProfile>, ApiError> {
    Ok(Json(state.auth.current_user().await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::provider::MOCK_TOKEN;

    fn payload<T>(value: T) -> Result<Json<T>, JsonRejection> {
        Ok(Json(value))
    }

    #[tokio::test]
    async fn login_always_succeeds_for_well_formed_input() {
        let state = AppState::fake();
        let Json(response) = login(
            State(state),
            payload(LoginRequest {
                email: "ada@example.com".into(),
                password: "anything".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.user.email, "ada@example.com");
        assert_eq!(response.token, MOCK_TOKEN);
    }

    #[tokio::test]
    async fn signup_echoes_the_supplied_profile() {
        let state = AppState::fake();
        let Json(response) = signup(
            State(state),
            payload(SignupRequest {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                password: "secret".into(),
                phone: String::new(),
                age: 30,
                gender: String::new(),
                location: "Pune".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(response.user.name, "Ada");
        assert_eq!(response.user.age, 30);
        assert_eq!(response.user.location, "Pune");
    }

    #[tokio::test]
    async fn logout_acknowledges() {
        let Json(response) = logout(State(AppState::fake())).await.unwrap();
        assert_eq!(response.message, "Logged out successfully");
    }

    #[tokio::test]
    async fn me_returns_the_fixed_identity() {
        let Json(user) = me(State(AppState::fake())).await.unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "John Doe");
    }

    #[test]
    fn auth_response_serializes_user_and_token() {
        let response = AuthResponse {
            user: UserProfile {
                id: "1".into(),
                name: "John Doe".into(),
                email: "john@example.com".into(),
                age: 28,
                location: "Mumbai".into(),
            },
            token: MOCK_TOKEN.into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("mock-jwt-token"));
        assert!(json.contains("john@example.com"));
    }

    #[test]
    fn signup_request_defaults_optional_fields() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","password":"secret"}"#,
        )
        .unwrap();
        assert_eq!(request.phone, "");
        assert_eq!(request.age, 0);
        assert_eq!(request.gender, "");
        assert_eq!(request.location, "");
    }
}
