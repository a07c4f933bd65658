use std::sync::Arc;

use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::ApiKey;

use business::domain::auth::use_cases::authenticate::{
    AuthenticateParams, AuthenticateRequestUseCase,
};

/// Shared-secret authentication.
///
/// The checker resolves the authenticator from request data, so the route
/// tree must be wrapped with `.data(Arc<dyn AuthenticateRequestUseCase>)`.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-Student-Secret",
    key_in = "header",
    checker = "student_secret_checker"
)]
#[allow(dead_code)]
pub struct StudentSecretAuth(pub ());

async fn student_secret_checker(req: &Request, api_key: ApiKey) -> Option<()> {
    let Some(authenticator) = req.data::<Arc<dyn AuthenticateRequestUseCase>>() else {
        tracing::error!("Authenticator missing from request data");
        return None;
    };

    authenticator
        .execute(AuthenticateParams {
            presented: Some(api_key.key),
        })
        .await
        .ok()
}
