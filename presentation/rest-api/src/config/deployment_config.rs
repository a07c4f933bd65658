use business::domain::settings::model::DeploymentSettings;
use business::domain::settings::source::EnvSource;
use business::domain::settings::value_objects::TokenKind;

/// Reads values from the process environment.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Load and validate deployment settings
///
/// Environment variables:
/// - STUDENT_SECRET: Shared secret for inbound requests (required)
/// - OPENAI_API_KEY: LLM credential (required when REQUIRE_LLM is set)
/// - GITHUB_TOKEN: GitHub personal access token (required)
/// - GITHUB_OWNER: Target account or organization (optional)
/// - REQUIRE_LLM: Makes OPENAI_API_KEY required (default: false)
///
/// # Errors
/// Returns every configuration issue at once; each is also logged.
pub fn load_deployment_settings(source: &dyn EnvSource) -> anyhow::Result<DeploymentSettings> {
    match DeploymentSettings::load(source) {
        Ok(settings) => {
            tracing::info!(
                mode = %settings.generation_mode(),
                token_kind = %settings.github_token.kind(),
                owner = settings.repository_owner().map(|o| o.as_str()).unwrap_or("<token account>"),
                secret_fingerprint = %settings.student_secret.fingerprint(),
                "Deployment settings loaded"
            );
            if settings.github_token.kind() == TokenKind::Unknown {
                tracing::warn!("GITHUB_TOKEN has an unrecognised prefix");
            }
            Ok(settings)
        }
        Err(err) => {
            for issue in err.issues() {
                tracing::error!(variable = issue.variable(), "{}", issue);
            }
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn should_load_settings_from_source() {
        let source: HashMap<String, String> = [
            ("STUDENT_SECRET", "s3cret"),
            ("GITHUB_TOKEN", "token-without-prefix"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let settings = load_deployment_settings(&source).unwrap();

        assert_eq!(settings.github_token.kind(), TokenKind::Unknown);
    }

    #[test]
    fn should_fail_with_all_issues_in_message() {
        let source: HashMap<String, String> = HashMap::new();

        let error = load_deployment_settings(&source).unwrap_err();
        let message = error.to_string();

        assert!(message.contains("STUDENT_SECRET"));
        assert!(message.contains("GITHUB_TOKEN"));
    }
}
