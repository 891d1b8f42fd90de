/// Where the authentication endpoints live. Injected into the form instead
/// of hard-coding a literal, so deployments and tests can point elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    base_url: String,
}

impl AuthConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}
