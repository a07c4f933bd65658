use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;

pub struct AuthenticateParams {
    pub presented: Option<String>,
}

#[async_trait]
pub trait AuthenticateRequestUseCase: Send + Sync {
    async fn execute(&self, params: AuthenticateParams) -> Result<(), AuthError>;
}
