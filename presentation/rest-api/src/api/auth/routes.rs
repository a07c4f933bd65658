use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::use_cases::authenticate::{
    AuthenticateParams, AuthenticateRequestUseCase,
};

use crate::api::auth::dto::{VerifySecretRequest, VerifySecretResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    authenticate_use_case: Arc<dyn AuthenticateRequestUseCase>,
}

impl AuthApi {
    pub fn new(authenticate_use_case: Arc<dyn AuthenticateRequestUseCase>) -> Self {
        Self {
            authenticate_use_case,
        }
    }
}

/// Authentication API
///
/// Lets callers check a student secret before submitting work.
#[OpenApi]
impl AuthApi {
    /// Verify a student secret
    ///
    /// Returns 401 when no secret is given and 403 when it does not match.
    #[oai(path = "/auth/verify", method = "post", tag = "ApiTags::Auth")]
    async fn verify(&self, body: Json<VerifySecretRequest>) -> VerifySecretApiResponse {
        let params = AuthenticateParams {
            presented: body.0.secret,
        };

        match self.authenticate_use_case.execute(params).await {
            Ok(()) => VerifySecretApiResponse::Ok(Json(VerifySecretResponse { verified: true })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                if status == StatusCode::FORBIDDEN {
                    VerifySecretApiResponse::Forbidden(json)
                } else {
                    VerifySecretApiResponse::Unauthorized(json)
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum VerifySecretApiResponse {
    #[oai(status = 200)]
    Ok(Json<VerifySecretResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
}
