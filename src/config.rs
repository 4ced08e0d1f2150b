/// Application configuration loaded from environment variables
///
/// Every field has a default matching the service's historical constants, so the
/// server starts with no configuration at all against a local MongoDB.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection string
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub mongodb_url: String,
    /// Database name holding the users collection
    pub database: String,
    /// TCP port the HTTP server binds to
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mongodb_url: "mongodb://localhost:27017".to_string(),
            database: "mongogolang".to_string(),
            port: 4000,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// Environment variables:
    /// - `MONGODB_URL` (default: "mongodb://localhost:27017")
    /// - `MONGODB_DATABASE` (default: "mongogolang")
    /// - `PORT` (default: 4000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mongodb_url = std::env::var("MONGODB_URL").unwrap_or(defaults.mongodb_url);
        let database = std::env::var("MONGODB_DATABASE").unwrap_or(defaults.database);
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        Self {
            mongodb_url,
            database,
            port,
        }
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.mongodb_url, "mongodb://localhost:27017");
        assert_eq!(config.database, "mongogolang");
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_bind_addr() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:4000");
    }
}
