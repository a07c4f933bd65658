use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            AuthError::MissingSecret => (StatusCode::UNAUTHORIZED, "AuthenticationError"),
            AuthError::InvalidSecret => (StatusCode::FORBIDDEN, "AuthorizationError"),
        };

        (status, Json(ErrorResponse::new(name, &self)))
    }
}
