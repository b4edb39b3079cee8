use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use tasky_carousel::CarouselSettings;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub carousel: CarouselSettings,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Sqlite,
    Memory,
    Firestore,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    #[serde(default)]
    pub firestore: FirestoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FirestoreConfig {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_firestore_base_url")]
    pub base_url: String,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            api_key: String::new(),
            base_url: default_firestore_base_url(),
        }
    }
}

fn default_firestore_base_url() -> String {
    tasky_contact::firestore::DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Contact details shown on the landing page.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_contact_phone")]
    pub contact_phone: String,
    #[serde(default = "default_contact_hours")]
    pub contact_hours: String,
    #[serde(default = "default_location")]
    pub location: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: default_contact_email(),
            contact_phone: default_contact_phone(),
            contact_hours: default_contact_hours(),
            location: default_location(),
        }
    }
}

fn default_contact_email() -> String {
    "hello.tasky.app@gmail.com".to_string()
}

fn default_contact_phone() -> String {
    "+254112187873".to_string()
}

fn default_contact_hours() -> String {
    "Mon-Fri, 9am-5pm EAT".to_string()
}

fn default_location() -> String {
    "Nairobi, Kenya".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, FIRESTORE_API_KEY, FIRESTORE_PROJECT_ID)
    /// 2. Environment variables (TASKY__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:tasky.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("TASKY")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(api_key) = env::var("FIRESTORE_API_KEY") {
            builder = builder.set_override("store.firestore.api_key", api_key)?;
        }
        if let Ok(project_id) = env::var("FIRESTORE_PROJECT_ID") {
            builder = builder.set_override("store.firestore.project_id", project_id)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.store.backend == StoreBackend::Firestore
            && self.store.firestore.project_id.trim().is_empty()
        {
            return Err("Firestore store requires store.firestore.project_id".to_string());
        }
        self.carousel.validate().map_err(|e| e.to_string())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections: 5,
            },
            store: StoreConfig::default(),
            observability: ObservabilityConfig::default(),
            carousel: CarouselSettings::default(),
            site: SiteConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = config();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_firestore_without_project() {
        let mut config = config();
        config.store.backend = StoreBackend::Firestore;

        assert!(config.validate().is_err());

        config.store.firestore.project_id = "tasky-app".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_carousel_settings() {
        let mut config = config();
        config.carousel.step_ratio = 1.5;
        assert!(config.validate().is_err());

        let mut config = self::config();
        config.carousel.interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("tasky.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 8080

[store]
backend = "memory"

[carousel]
interval_ms = 2500

[site]
location = "Mombasa, Kenya"
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.display().to_string())).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.carousel.interval_ms, 2500);
        assert_eq!(config.carousel.step_ratio, 0.5);
        assert_eq!(config.site.location, "Mombasa, Kenya");
        assert_eq!(config.site.contact_email, "hello.tasky.app@gmail.com");
        assert_eq!(
            config.store.firestore.base_url,
            "https://firestore.googleapis.com"
        );
    }
}
