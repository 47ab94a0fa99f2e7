//! Client configuration

/// Configuration for connecting to the backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://pos.example.com")
    pub base_url: String,

    /// Bearer token for authentication; acquiring/refreshing it is the
    /// auth subsystem's concern, not this crate's
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration with the default 30s timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}
