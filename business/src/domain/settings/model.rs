use super::errors::{ConfigurationError, ConfigurationIssue, ValueError};
use super::source::EnvSource;
use super::value_objects::{
    GenerationMode, GithubOwner, GithubToken, OpenAiApiKey, StudentSecret,
};
use super::variables::{EnvVar, REQUIRE_LLM};

/// Validated deployment settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct DeploymentSettings {
    pub student_secret: StudentSecret,
    pub openai_api_key: Option<OpenAiApiKey>,
    pub github_token: GithubToken,
    pub github_owner: Option<GithubOwner>,
    pub require_llm: bool,
}

impl DeploymentSettings {
    /// Reads every variable from `source` and validates it.
    ///
    /// Blank values count as absent. All problems are reported together,
    /// in catalogue order, with `REQUIRE_LLM` problems first.
    pub fn load(source: &dyn EnvSource) -> Result<Self, ConfigurationError> {
        let mut issues = Vec::new();

        let require_llm = match parse_flag(read(source, REQUIRE_LLM)) {
            Ok(flag) => flag,
            Err(reason) => {
                issues.push(ConfigurationIssue::malformed(REQUIRE_LLM, reason));
                false
            }
        };

        let student_secret =
            required(source, EnvVar::StudentSecret, StudentSecret::new, &mut issues);

        // A malformed key is already reported; only flag it missing when unset.
        let openai_var = EnvVar::OpenAiApiKey;
        let openai_api_key = optional(source, openai_var, OpenAiApiKey::new, &mut issues);
        if require_llm && read(source, openai_var.name()).is_none() {
            issues.push(ConfigurationIssue::missing(openai_var));
        }

        let github_token = required(source, EnvVar::GithubToken, GithubToken::new, &mut issues);
        let github_owner = optional(source, EnvVar::GithubOwner, GithubOwner::new, &mut issues);

        match (student_secret, github_token) {
            (Some(student_secret), Some(github_token)) if issues.is_empty() => Ok(Self {
                student_secret,
                openai_api_key,
                github_token,
                github_owner,
                require_llm,
            }),
            _ => Err(ConfigurationError::Invalid(issues)),
        }
    }

    pub fn generation_mode(&self) -> GenerationMode {
        match self.openai_api_key {
            Some(_) => GenerationMode::Llm,
            None => GenerationMode::Template,
        }
    }

    /// Configured owner, or `None` for the token's own account.
    pub fn repository_owner(&self) -> Option<&GithubOwner> {
        self.github_owner.as_ref()
    }

    pub fn is_present(&self, var: EnvVar) -> bool {
        match var {
            EnvVar::StudentSecret | EnvVar::GithubToken => true,
            EnvVar::OpenAiApiKey => self.openai_api_key.is_some(),
            EnvVar::GithubOwner => self.github_owner.is_some(),
        }
    }
}

fn read(source: &dyn EnvSource, name: &str) -> Option<String> {
    source
        .get(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required<T>(
    source: &dyn EnvSource,
    var: EnvVar,
    parse: impl FnOnce(String) -> Result<T, ValueError>,
    issues: &mut Vec<ConfigurationIssue>,
) -> Option<T> {
    match read(source, var.name()) {
        Some(raw) => validated(var, parse(raw), issues),
        None => {
            issues.push(ConfigurationIssue::missing(var));
            None
        }
    }
}

fn optional<T>(
    source: &dyn EnvSource,
    var: EnvVar,
    parse: impl FnOnce(String) -> Result<T, ValueError>,
    issues: &mut Vec<ConfigurationIssue>,
) -> Option<T> {
    read(source, var.name()).and_then(|raw| validated(var, parse(raw), issues))
}

fn validated<T>(
    var: EnvVar,
    result: Result<T, ValueError>,
    issues: &mut Vec<ConfigurationIssue>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(reason) => {
            issues.push(ConfigurationIssue::malformed(var.name(), reason.to_string()));
            None
        }
    }
}

fn parse_flag(raw: Option<String>) -> Result<bool, String> {
    let Some(raw) = raw else {
        return Ok(false);
    };
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(format!("expected a boolean, got {:?}", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::value_objects::TokenKind;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn minimal() -> HashMap<String, String> {
        env(&[("STUDENT_SECRET", "s3cret"), ("GITHUB_TOKEN", "ghp_abc")])
    }

    #[test]
    fn should_load_minimal_configuration_in_template_mode() {
        // Arrange
        let source = minimal();

        // Act
        let settings = DeploymentSettings::load(&source).unwrap();

        // Assert
        assert_eq!(settings.student_secret.expose(), "s3cret");
        assert_eq!(settings.github_token.kind(), TokenKind::Classic);
        assert_eq!(settings.generation_mode(), GenerationMode::Template);
        assert!(settings.repository_owner().is_none());
        assert!(!settings.require_llm);
    }

    #[test]
    fn should_switch_to_llm_mode_when_key_present() {
        let mut source = minimal();
        source.insert("OPENAI_API_KEY".into(), "sk-test".into());

        let settings = DeploymentSettings::load(&source).unwrap();

        assert_eq!(settings.generation_mode(), GenerationMode::Llm);
        assert!(settings.is_present(EnvVar::OpenAiApiKey));
    }

    #[test]
    fn should_load_owner_when_configured() {
        let mut source = minimal();
        source.insert("GITHUB_OWNER".into(), "my-org".into());

        let settings = DeploymentSettings::load(&source).unwrap();

        assert_eq!(settings.repository_owner().unwrap().as_str(), "my-org");
    }

    #[test]
    fn should_treat_blank_values_as_absent() {
        let source = env(&[
            ("STUDENT_SECRET", "s3cret"),
            ("GITHUB_TOKEN", "ghp_abc"),
            ("OPENAI_API_KEY", "   "),
            ("GITHUB_OWNER", ""),
        ]);

        let settings = DeploymentSettings::load(&source).unwrap();

        assert_eq!(settings.generation_mode(), GenerationMode::Template);
        assert!(settings.github_owner.is_none());
    }

    #[test]
    fn should_report_all_missing_required_variables_at_once() {
        let source = env(&[]);

        let error = DeploymentSettings::load(&source).unwrap_err();

        assert_eq!(
            error.issues(),
            &[
                ConfigurationIssue::missing(EnvVar::StudentSecret),
                ConfigurationIssue::missing(EnvVar::GithubToken),
            ]
        );
    }

    #[test]
    fn should_require_openai_key_when_llm_required() {
        let mut source = minimal();
        source.insert("REQUIRE_LLM".into(), "TRUE".into());

        let error = DeploymentSettings::load(&source).unwrap_err();

        assert_eq!(
            error.issues(),
            &[ConfigurationIssue::missing(EnvVar::OpenAiApiKey)]
        );
    }

    #[test]
    fn should_accept_llm_requirement_when_key_present() {
        let mut source = minimal();
        source.insert("REQUIRE_LLM".into(), "yes".into());
        source.insert("OPENAI_API_KEY".into(), "sk-test".into());

        let settings = DeploymentSettings::load(&source).unwrap();

        assert!(settings.require_llm);
        assert_eq!(settings.generation_mode(), GenerationMode::Llm);
    }

    #[test]
    fn should_report_malformed_key_once_when_llm_required() {
        let mut source = minimal();
        source.insert("REQUIRE_LLM".into(), "1".into());
        source.insert("OPENAI_API_KEY".into(), "sk bad".into());

        let error = DeploymentSettings::load(&source).unwrap_err();

        assert_eq!(error.issues().len(), 1);
        assert_eq!(error.issues()[0].variable(), "OPENAI_API_KEY");
        assert!(matches!(
            error.issues()[0],
            ConfigurationIssue::Malformed { .. }
        ));
    }

    #[test]
    fn should_report_unparseable_flag_and_other_issues_in_order() {
        let source = env(&[
            ("REQUIRE_LLM", "maybe"),
            ("GITHUB_TOKEN", "ghp_abc"),
            ("GITHUB_OWNER", "-bad-"),
        ]);

        let error = DeploymentSettings::load(&source).unwrap_err();
        let variables: Vec<&str> = error.issues().iter().map(|i| i.variable()).collect();

        assert_eq!(
            variables,
            vec!["REQUIRE_LLM", "STUDENT_SECRET", "GITHUB_OWNER"]
        );
    }

    #[test]
    fn should_not_leak_credentials_in_debug_output() {
        let mut source = minimal();
        source.insert("OPENAI_API_KEY".into(), "sk-topsecret".into());

        let settings = DeploymentSettings::load(&source).unwrap();
        let debug = format!("{:?}", settings);

        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("ghp_abc"));
        assert!(!debug.contains("sk-topsecret"));
    }
}
