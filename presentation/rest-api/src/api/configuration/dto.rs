use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};

use business::domain::configuration::model::{ConfigurationReport, VariableStatus};
use business::domain::settings::value_objects::GenerationMode;
use business::domain::settings::variables::Requirement;

#[derive(Debug, Clone, Enum)]
pub enum GenerationModeDto {
    #[oai(rename = "llm")]
    Llm,
    #[oai(rename = "template")]
    Template,
}

impl From<GenerationMode> for GenerationModeDto {
    fn from(mode: GenerationMode) -> Self {
        match mode {
            GenerationMode::Llm => GenerationModeDto::Llm,
            GenerationMode::Template => GenerationModeDto::Template,
        }
    }
}

#[derive(Debug, Clone, Enum)]
pub enum RequirementDto {
    #[oai(rename = "required")]
    Required,
    #[oai(rename = "optional")]
    Optional,
}

impl From<Requirement> for RequirementDto {
    fn from(requirement: Requirement) -> Self {
        match requirement {
            Requirement::Required => RequirementDto::Required,
            Requirement::Optional => RequirementDto::Optional,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct VariableStatusResponse {
    /// Environment variable name
    pub name: String,
    pub requirement: RequirementDto,
    /// Whether a non-blank value is set
    pub present: bool,
}

impl From<VariableStatus> for VariableStatusResponse {
    fn from(v: VariableStatus) -> Self {
        Self {
            name: v.name,
            requirement: v.requirement.into(),
            present: v.present,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ConfigurationResponse {
    /// `llm` when an OpenAI key is configured, `template` otherwise
    pub generation_mode: GenerationModeDto,
    /// Kind of GitHub token, detected from its prefix
    pub token_kind: String,
    /// Target owner; absent means the token's own account
    #[oai(skip_serializing_if_is_none)]
    pub owner: Option<String>,
    /// SHA-256 prefix of the configured secret
    pub secret_fingerprint: String,
    pub variables: Vec<VariableStatusResponse>,
    pub generated_at: DateTime<Utc>,
}

impl From<ConfigurationReport> for ConfigurationResponse {
    fn from(r: ConfigurationReport) -> Self {
        Self {
            generation_mode: r.generation_mode.into(),
            token_kind: r.token_kind.to_string(),
            owner: r.owner,
            secret_fingerprint: r.secret_fingerprint,
            variables: r.variables.into_iter().map(Into::into).collect(),
            generated_at: r.generated_at,
        }
    }
}
