use std::sync::Arc;

use logger::TracingLogger;

use business::application::auth::authenticate::AuthenticateRequestUseCaseImpl;
use business::application::configuration::describe::DescribeConfigurationUseCaseImpl;
use business::domain::auth::use_cases::authenticate::AuthenticateRequestUseCase;
use business::domain::settings::model::DeploymentSettings;

use crate::api::auth::routes::AuthApi;
use crate::api::configuration::routes::ConfigurationApi;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: AuthApi,
    pub configuration_api: ConfigurationApi,
    /// Shared with the security scheme through request data.
    pub authenticator: Arc<dyn AuthenticateRequestUseCase>,
}

impl DependencyContainer {
    pub fn new(settings: DeploymentSettings) -> Self {
        let settings = Arc::new(settings);
        let logger = Arc::new(TracingLogger);

        let authenticator: Arc<dyn AuthenticateRequestUseCase> =
            Arc::new(AuthenticateRequestUseCaseImpl {
                settings: settings.clone(),
                logger: logger.clone(),
            });
        let describe_use_case = Arc::new(DescribeConfigurationUseCaseImpl { settings, logger });

        Self {
            health_api: crate::api::health::routes::Api::new(),
            auth_api: AuthApi::new(authenticator.clone()),
            configuration_api: ConfigurationApi::new(describe_use_case),
            authenticator,
        }
    }
}
