//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Optional CSV file to seed the activity store at startup
    pub seed_csv_path: Option<String>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            seed_csv_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional; an unset or unparseable PORT falls
    /// back to 8080.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            seed_csv_path: env::var("SEED_CSV_PATH").ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_port() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert!(config.seed_csv_path.is_none());
    }
}
