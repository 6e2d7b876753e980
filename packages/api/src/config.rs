use serde::{Deserialize, Serialize};

/// Where the backend API lives.
///
/// The default points at a local backend. Setting `STAFFDESK_API_URL` at
/// compile time bakes a different base URL into the build, which is how
/// release bundles are pointed at the real deployment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    option_env!("STAFFDESK_API_URL")
        .unwrap_or("http://localhost:8000/api/v1")
        .to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_a_base_url() {
        let config = ApiConfig::default();
        assert!(config.base_url.starts_with("http"));
    }

    #[test]
    fn explicit_base_url_wins() {
        let config = ApiConfig::new("https://hr.internal/api/v1");
        assert_eq!(config.base_url, "https://hr.internal/api/v1");
    }
}
