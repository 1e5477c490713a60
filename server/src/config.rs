//! Runtime configuration loaded from the environment.

/// Runtime configuration populated from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_port: u16,
    pub database_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_port: 8080,
            database_path: "qr_service.db".into(),
        }
    }
}

impl ServerConfig {
    /// Load configuration, falling back to defaults for unset or
    /// unparsable values.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("SERVER_PORT") {
            if let Ok(p) = v.parse::<u16>() {
                config.server_port = p;
            }
        }
        if let Ok(v) = std::env::var("DATABASE_PATH") {
            if !v.is_empty() {
                config.database_path = v;
            }
        }

        config
    }
}
