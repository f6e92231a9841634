use crate::account::{error::AccountError, service::AccountService, store::CredentialStore};
use crate::workerhub::handlers::AuthResponse;
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[utoipa::path(
    post,
    path= "/auth/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful", body = [AuthResponse], content_type = "application/json"),
        (status = 400, description = "Invalid email or password", body = [AuthResponse]),
        (status = 500, description = "Storage failure", body = [AuthResponse]),
    ),
    tag= "auth"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login<S>(
    service: Extension<AccountService<S>>,
    payload: Option<Json<LoginRequest>>,
) -> impl IntoResponse
where
    S: CredentialStore + Clone + Send + Sync + 'static,
{
    let Some(Json(request)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("Missing payload")),
        );
    };

    debug!("login attempt: {:?}", request);

    // A malformed email falls through to the lookup and fails like any other
    // unknown identifier, same status and message as a wrong password
    match service.login(&request.email, &request.password).await {
        Ok(user) => (StatusCode::OK, Json(AuthResponse::user(user))),

        Err(AccountError::InvalidCredentials | AccountError::Duplicate) => (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("Invalid email or password")),
        ),

        Err(AccountError::Storage(err)) => {
            // No identifier in the log line, the email stays at debug level
            error!("Login failed: {}", err);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AuthResponse::failure("Login failed")),
            )
        }
    }
}
