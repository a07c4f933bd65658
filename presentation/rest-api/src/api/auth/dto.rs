use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct VerifySecretRequest {
    /// Shared secret to check
    pub secret: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct VerifySecretResponse {
    pub verified: bool,
}
