use async_trait::async_trait;

use crate::domain::configuration::model::ConfigurationReport;

#[async_trait]
pub trait DescribeConfigurationUseCase: Send + Sync {
    async fn execute(&self) -> ConfigurationReport;
}
