use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::errors::ValueError;

const REDACTED: &str = "****";
const MAX_OWNER_LENGTH: usize = 39;

static OWNER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+(-[A-Za-z0-9]+)*$").expect("valid owner regex"));

fn non_empty(value: impl Into<String>) -> Result<String, ValueError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValueError::Empty);
    }
    Ok(trimmed.to_string())
}

/// First 8 hex characters of the SHA-256 digest of `value`.
pub fn fingerprint_of(value: &str) -> String {
    Sha256::digest(value.as_bytes())
        .iter()
        .take(4)
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// Shared secret authenticating inbound requests.
#[derive(Clone, PartialEq, Eq)]
pub struct StudentSecret(String);

impl StudentSecret {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueError> {
        non_empty(value).map(Self)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn fingerprint(&self) -> String {
        fingerprint_of(&self.0)
    }
}

impl std::fmt::Debug for StudentSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StudentSecret({})", REDACTED)
    }
}

impl std::fmt::Display for StudentSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

/// Credential for the LLM API.
#[derive(Clone, PartialEq, Eq)]
pub struct OpenAiApiKey(String);

impl OpenAiApiKey {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueError> {
        let value = non_empty(value)?;
        if value.chars().any(char::is_whitespace) {
            return Err(ValueError::ContainsWhitespace);
        }
        Ok(Self(value))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for OpenAiApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OpenAiApiKey({})", REDACTED)
    }
}

impl std::fmt::Display for OpenAiApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

/// Kind of GitHub token, recognised from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Classic,
    FineGrained,
    OAuth,
    UserToServer,
    Installation,
    Unknown,
}

impl TokenKind {
    fn detect(token: &str) -> Self {
        // github_pat_ must be checked before the three-letter prefixes.
        if token.starts_with("github_pat_") {
            TokenKind::FineGrained
        } else if token.starts_with("ghp_") {
            TokenKind::Classic
        } else if token.starts_with("gho_") {
            TokenKind::OAuth
        } else if token.starts_with("ghu_") {
            TokenKind::UserToServer
        } else if token.starts_with("ghs_") {
            TokenKind::Installation
        } else {
            TokenKind::Unknown
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Classic => write!(f, "classic"),
            TokenKind::FineGrained => write!(f, "fine_grained"),
            TokenKind::OAuth => write!(f, "oauth"),
            TokenKind::UserToServer => write!(f, "user_to_server"),
            TokenKind::Installation => write!(f, "installation"),
            TokenKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// GitHub personal access token.
#[derive(Clone, PartialEq, Eq)]
pub struct GithubToken {
    value: String,
    kind: TokenKind,
}

impl GithubToken {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueError> {
        let value = non_empty(value)?;
        if value.chars().any(char::is_whitespace) {
            return Err(ValueError::ContainsWhitespace);
        }
        let kind = TokenKind::detect(&value);
        Ok(Self { value, kind })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for GithubToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GithubToken({}, {})", self.kind, REDACTED)
    }
}

impl std::fmt::Display for GithubToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", REDACTED)
    }
}

/// Account or organization login on GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GithubOwner(String);

impl GithubOwner {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueError> {
        let value = non_empty(value)?;
        if value.chars().count() > MAX_OWNER_LENGTH {
            return Err(ValueError::TooLong(MAX_OWNER_LENGTH));
        }
        if !OWNER_PATTERN.is_match(&value) {
            return Err(ValueError::InvalidFormat(
                "expected alphanumerics separated by single hyphens".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GithubOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How project files are produced by the helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// An LLM key is configured.
    Llm,
    /// No key; deterministic templates.
    Template,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Llm => write!(f, "llm"),
            GenerationMode::Template => write!(f, "template"),
        }
    }
}
