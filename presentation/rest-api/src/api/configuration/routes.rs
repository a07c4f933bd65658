use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::configuration::use_cases::describe::DescribeConfigurationUseCase;

use crate::api::configuration::dto::ConfigurationResponse;
use crate::api::security::StudentSecretAuth;
use crate::api::tags::ApiTags;

pub struct ConfigurationApi {
    describe_use_case: Arc<dyn DescribeConfigurationUseCase>,
}

impl ConfigurationApi {
    pub fn new(describe_use_case: Arc<dyn DescribeConfigurationUseCase>) -> Self {
        Self { describe_use_case }
    }
}

#[OpenApi]
impl ConfigurationApi {
    /// Describe the active configuration
    ///
    /// Requires the `X-Student-Secret` header. Credential values are never
    /// returned, only their presence, the token kind and the secret's
    /// fingerprint.
    #[oai(path = "/configuration", method = "get", tag = "ApiTags::Configuration")]
    async fn get_configuration(&self, _auth: StudentSecretAuth) -> Json<ConfigurationResponse> {
        Json(self.describe_use_case.execute().await.into())
    }
}
