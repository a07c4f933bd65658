use super::variables::EnvVar;

/// A single problem found while reading the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationIssue {
    #[error("config.missing_variable: {0}")]
    Missing(String),
    #[error("config.malformed_variable: {var} ({reason})")]
    Malformed { var: String, reason: String },
}

impl ConfigurationIssue {
    pub fn missing(var: EnvVar) -> Self {
        ConfigurationIssue::Missing(var.name().to_string())
    }

    pub fn malformed(var: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigurationIssue::Malformed {
            var: var.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending variable.
    pub fn variable(&self) -> &str {
        match self {
            ConfigurationIssue::Missing(var) => var,
            ConfigurationIssue::Malformed { var, .. } => var,
        }
    }
}

/// Configuration errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("config.invalid: {}", summarize(.0))]
    Invalid(Vec<ConfigurationIssue>),
}

impl ConfigurationError {
    pub fn issues(&self) -> &[ConfigurationIssue] {
        match self {
            ConfigurationError::Invalid(issues) => issues,
        }
    }
}

fn summarize(issues: &[ConfigurationIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Reasons a single value failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("value is empty")]
    Empty,
    #[error("value contains whitespace")]
    ContainsWhitespace,
    #[error("value is longer than {0} characters")]
    TooLong(usize),
    #[error("{0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_summarize_every_issue_in_error_message() {
        let error = ConfigurationError::Invalid(vec![
            ConfigurationIssue::missing(EnvVar::StudentSecret),
            ConfigurationIssue::malformed("GITHUB_OWNER", "value is empty"),
        ]);

        let message = error.to_string();

        assert!(message.starts_with("config.invalid"));
        assert!(message.contains("config.missing_variable: STUDENT_SECRET"));
        assert!(message.contains("config.malformed_variable: GITHUB_OWNER (value is empty)"));
    }

    #[test]
    fn should_expose_variable_name_of_issue() {
        let missing = ConfigurationIssue::missing(EnvVar::GithubToken);
        let malformed = ConfigurationIssue::malformed("REQUIRE_LLM", "not a boolean");

        assert_eq!(missing.variable(), "GITHUB_TOKEN");
        assert_eq!(malformed.variable(), "REQUIRE_LLM");
    }
}
