#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth.missing_secret")]
    MissingSecret,
    #[error("auth.invalid_secret")]
    InvalidSecret,
}
