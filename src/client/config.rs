use std::env;

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    server_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let server_url =
            env::var("CLIENT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration pointing at an explicit server.
    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_server_url() {
        let config = ClientConfig::with_server_url("http://localhost:8080");
        assert_eq!(config.server_url(), "http://localhost:8080");
    }

    #[test]
    fn test_api_url() {
        let config = ClientConfig::with_server_url("http://127.0.0.1:3000");
        let url = config.api_url("/api/auth/login");
        assert_eq!(url, "http://127.0.0.1:3000/api/auth/login");
    }
}
