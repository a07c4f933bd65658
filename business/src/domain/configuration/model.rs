use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::settings::model::DeploymentSettings;
use crate::domain::settings::value_objects::{GenerationMode, TokenKind};
use crate::domain::settings::variables::{EnvVar, Requirement};

/// Presence of one contract variable. Never carries the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableStatus {
    pub name: String,
    pub requirement: Requirement,
    pub present: bool,
}

/// Redacted view of the active configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationReport {
    pub generation_mode: GenerationMode,
    pub token_kind: TokenKind,
    pub owner: Option<String>,
    pub secret_fingerprint: String,
    pub variables: Vec<VariableStatus>,
    pub generated_at: DateTime<Utc>,
}

impl ConfigurationReport {
    pub fn from_settings(settings: &DeploymentSettings) -> Self {
        let variables = EnvVar::ALL
            .into_iter()
            .map(|var| VariableStatus {
                name: var.name().to_string(),
                requirement: var.requirement(settings.require_llm),
                present: settings.is_present(var),
            })
            .collect();

        Self {
            generation_mode: settings.generation_mode(),
            token_kind: settings.github_token.kind(),
            owner: settings.repository_owner().map(|o| o.to_string()),
            secret_fingerprint: settings.student_secret.fingerprint(),
            variables,
            generated_at: Utc::now(),
        }
    }
}
