use serde::{Deserialize, Serialize};

/// Environment variables that make up the deployment helper's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvVar {
    StudentSecret,
    OpenAiApiKey,
    GithubToken,
    GithubOwner,
}

/// Flag selecting the variant in which `OPENAI_API_KEY` becomes required.
pub const REQUIRE_LLM: &str = "REQUIRE_LLM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Required,
    Optional,
}

impl EnvVar {
    /// Catalogue order, as documented for operators.
    pub const ALL: [EnvVar; 4] = [
        EnvVar::StudentSecret,
        EnvVar::OpenAiApiKey,
        EnvVar::GithubToken,
        EnvVar::GithubOwner,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EnvVar::StudentSecret => "STUDENT_SECRET",
            EnvVar::OpenAiApiKey => "OPENAI_API_KEY",
            EnvVar::GithubToken => "GITHUB_TOKEN",
            EnvVar::GithubOwner => "GITHUB_OWNER",
        }
    }

    pub fn requirement(&self, require_llm: bool) -> Requirement {
        match self {
            EnvVar::StudentSecret | EnvVar::GithubToken => Requirement::Required,
            EnvVar::OpenAiApiKey if require_llm => Requirement::Required,
            EnvVar::OpenAiApiKey | EnvVar::GithubOwner => Requirement::Optional,
        }
    }
}

impl std::fmt::Display for EnvVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Requirement::Required => write!(f, "required"),
            Requirement::Optional => write!(f, "optional"),
        }
    }
}

impl std::str::FromStr for EnvVar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnvVar::ALL
            .into_iter()
            .find(|var| var.name() == s)
            .ok_or_else(|| format!("Unknown environment variable: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_variables_in_catalogue_order() {
        let names: Vec<&str> = EnvVar::ALL.iter().map(|v| v.name()).collect();

        assert_eq!(
            names,
            vec![
                "STUDENT_SECRET",
                "OPENAI_API_KEY",
                "GITHUB_TOKEN",
                "GITHUB_OWNER"
            ]
        );
    }

    #[test]
    fn should_require_openai_key_only_in_llm_variant() {
        assert_eq!(
            EnvVar::OpenAiApiKey.requirement(false),
            Requirement::Optional
        );
        assert_eq!(
            EnvVar::OpenAiApiKey.requirement(true),
            Requirement::Required
        );
    }

    #[test]
    fn should_always_require_secret_and_token() {
        for require_llm in [false, true] {
            assert_eq!(
                EnvVar::StudentSecret.requirement(require_llm),
                Requirement::Required
            );
            assert_eq!(
                EnvVar::GithubToken.requirement(require_llm),
                Requirement::Required
            );
            assert_eq!(
                EnvVar::GithubOwner.requirement(require_llm),
                Requirement::Optional
            );
        }
    }

    #[test]
    fn should_parse_variable_from_name() {
        let var: EnvVar = "GITHUB_TOKEN".parse().unwrap();
        assert_eq!(var, EnvVar::GithubToken);
        assert!("GITHUB_TOKENS".parse::<EnvVar>().is_err());
    }
}
