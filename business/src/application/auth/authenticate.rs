use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::use_cases::authenticate::{
    AuthenticateParams, AuthenticateRequestUseCase,
};
use crate::domain::auth::verifier::SecretVerifier;
use crate::domain::logger::Logger;
use crate::domain::settings::model::DeploymentSettings;

pub struct AuthenticateRequestUseCaseImpl {
    pub settings: Arc<DeploymentSettings>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AuthenticateRequestUseCase for AuthenticateRequestUseCaseImpl {
    async fn execute(&self, params: AuthenticateParams) -> Result<(), AuthError> {
        let presented = match params.presented {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                self.logger.warn("Rejected request without a student secret");
                return Err(AuthError::MissingSecret);
            }
        };

        if !SecretVerifier::verifies(&self.settings.student_secret, &presented) {
            self.logger.warn("Rejected request with an invalid student secret");
            return Err(AuthError::InvalidSecret);
        }

        self.logger.debug("Student secret verified");
        Ok(())
    }
}
