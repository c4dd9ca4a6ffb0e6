//! Server configuration
//!
//! Defines the configurable parameters for the tracker server: bind
//! address plus the version and environment labels surfaced by the
//! metadata endpoints.

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to (e.g., "0.0.0.0:8080")
    pub bind_addr: String,

    /// Version string reported by /api/info
    pub app_version: String,

    /// Deployment environment label (e.g., "development", "production")
    pub environment: String,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - BIND_ADDR (optional, default: 0.0.0.0:8080)
    /// - APP_VERSION (optional, default: 1.0.0)
    /// - APP_ENVIRONMENT (optional, default: development)
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let app_version = std::env::var("APP_VERSION").unwrap_or_else(|_| "1.0.0".to_string());

        let environment =
            std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Self {
            bind_addr,
            app_version,
            environment,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!("invalid bind address: {}", self.bind_addr));
        }

        if self.app_version.is_empty() {
            return Err("app_version cannot be empty".to_string());
        }

        if self.environment.is_empty() {
            return Err("environment cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            app_version: "1.0.0".to_string(),
            environment: "development".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.app_version, "1.0.0");
        assert_eq!(config.environment, "development");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Unparseable bind address should fail
        config.bind_addr = "not-an-address".to_string();
        assert!(config.validate().is_err());

        config.bind_addr = "127.0.0.1:9090".to_string();
        assert!(config.validate().is_ok());

        // Empty version should fail
        config.app_version = String::new();
        assert!(config.validate().is_err());
    }
}
