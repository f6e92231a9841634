use crate::account::{
    error::AccountError,
    service::{AccountService, NewRegistration},
    store::CredentialStore,
};
use crate::workerhub::handlers::{valid_email, AuthResponse};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub name: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("account_type", &self.account_type)
            .field("name", &self.name)
            .finish()
    }
}

impl From<RegisterRequest> for NewRegistration {
    fn from(request: RegisterRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
            account_type: request.account_type,
            name: request.name,
        }
    }
}

#[utoipa::path(
    post,
    path= "/auth/register",
    request_body = RegisterRequest,
    responses (
        (status = 200, description = "Registration successful", body = [AuthResponse], content_type = "application/json"),
        (status = 400, description = "Email already registered or payload invalid", body = [AuthResponse]),
        (status = 500, description = "Storage failure", body = [AuthResponse]),
    ),
    tag= "auth"
)]
// axum handler for register
#[instrument(skip_all)]
pub async fn register<S>(
    service: Extension<AccountService<S>>,
    payload: Option<Json<RegisterRequest>>,
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

    debug!("register attempt: {:?}", request);

    if !valid_email(&request.email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("Invalid email")),
        );
    }

    match service.register(request.into()).await {
        Ok(user) => (StatusCode::OK, Json(AuthResponse::user(user))),

        Err(AccountError::Duplicate) => (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("Email already registered")),
        ),

        Err(AccountError::InvalidCredentials) => (
            StatusCode::BAD_REQUEST,
            Json(AuthResponse::failure("Invalid email or password")),
        ),

        Err(AccountError::Storage(err)) => {
            // No identifier in the log line, the email stays at debug level
            error!("Registration failed: {}", err);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AuthResponse::failure("Registration failed")),
            )
        }
    }
}
