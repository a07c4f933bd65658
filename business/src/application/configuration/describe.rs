use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::configuration::model::ConfigurationReport;
use crate::domain::configuration::use_cases::describe::DescribeConfigurationUseCase;
use crate::domain::logger::Logger;
use crate::domain::settings::model::DeploymentSettings;

pub struct DescribeConfigurationUseCaseImpl {
    pub settings: Arc<DeploymentSettings>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DescribeConfigurationUseCase for DescribeConfigurationUseCaseImpl {
    async fn execute(&self) -> ConfigurationReport {
        let report = ConfigurationReport::from_settings(&self.settings);
        self.logger.info(&format!(
            "Describing configuration (mode: {}, token: {})",
            report.generation_mode, report.token_kind
        ));
        report
    }
}
