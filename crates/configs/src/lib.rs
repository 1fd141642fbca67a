use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: default_database_url(), sqlx_logging: false }
    }
}

/// Single origin allowed to make credentialed cross-origin requests.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allowed_origin: default_allowed_origin() }
    }
}

/// Argon2id cost parameters used for password hashing.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct CredentialsConfig {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default = "default_featured_min_rating")]
    pub featured_min_rating: f64,
    #[serde(default = "default_featured_limit")]
    pub featured_limit: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            featured_min_rating: default_featured_min_rating(),
            featured_limit: default_featured_limit(),
        }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 3001 }
fn default_database_url() -> String { "sqlite::memory:".into() }
fn default_allowed_origin() -> String { "http://localhost:3001".into() }
// argon2 crate recommended parameters (19 MiB, t=2, p=1)
fn default_memory_kib() -> u32 { 19 * 1024 }
fn default_iterations() -> u32 { 2 }
fn default_parallelism() -> u32 { 1 }
fn default_featured_min_rating() -> f64 { 4.0 }
fn default_featured_limit() -> u64 { 10 }

/// `CONFIG_PATH`, or `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

/// Read the file at `config_path()`, or fall back to defaults when it does not exist.
pub fn load_default() -> Result<AppConfig> {
    load_or_default(&config_path())
}

/// Missing file means defaults; an unreadable or malformed file is an error.
pub fn load_or_default(path: &str) -> Result<AppConfig> {
    if std::path::Path::new(path).exists() {
        load_from_file(path)
    } else {
        Ok(AppConfig::default())
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`) when present, otherwise start from
    /// defaults; then apply environment overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.apply_env();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Environment variables win over file values.
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = url;
        }
        if let Ok(origin) = std::env::var("CORS_ALLOWED_ORIGIN") {
            self.cors.allowed_origin = origin;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.validate()?;
        self.cors.validate()?;
        self.credentials.validate()?;
        self.catalog.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        if !self.url.to_lowercase().starts_with("sqlite:") {
            return Err(anyhow!("database.url must start with sqlite:"));
        }
        Ok(())
    }
}

impl CorsConfig {
    pub fn validate(&self) -> Result<()> {
        let origin = self.allowed_origin.trim();
        if origin.is_empty() || origin == "*" {
            return Err(anyhow!("cors.allowed_origin must name a single origin"));
        }
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(anyhow!("cors.allowed_origin must start with http:// or https://"));
        }
        Ok(())
    }
}

impl CredentialsConfig {
    /// Cheapest parameters argon2 accepts. Only meant for tests.
    pub fn low_cost() -> Self {
        Self { memory_kib: 8, iterations: 1, parallelism: 1 }
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 || self.parallelism == 0 {
            return Err(anyhow!("credentials.iterations and credentials.parallelism must be >= 1"));
        }
        if self.memory_kib < self.parallelism.saturating_mul(8) {
            return Err(anyhow!("credentials.memory_kib must be >= 8 * parallelism"));
        }
        Ok(())
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=5.0).contains(&self.featured_min_rating) {
            return Err(anyhow!("catalog.featured_min_rating must be within 0.0..=5.0"));
        }
        if self.featured_limit == 0 {
            return Err(anyhow!("catalog.featured_limit must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let mut cfg = AppConfig::default();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.port, 3001);
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.cors.allowed_origin, "http://localhost:3001");
        assert_eq!(cfg.catalog.featured_limit, 10);
        assert_eq!(cfg.credentials.memory_kib, 19 * 1024);
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 8088\n\n[catalog]\nfeatured_limit = 2").unwrap();
        let cfg = load_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.catalog.featured_limit, 2);
        assert_eq!(cfg.catalog.featured_min_rating, 4.0);
    }

    #[test]
    fn rejects_bad_values() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "postgres://localhost/x".into();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.cors.allowed_origin = "*".into();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.credentials.memory_kib = 4;
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.catalog.featured_min_rating = 5.5;
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let cfg = load_or_default(missing.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 3001);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[cors]\nallowed_origin = \"https://app.example.com\"").unwrap();
        let cfg = load_or_default(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.cors.allowed_origin, "https://app.example.com");

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[server\nport = ").unwrap();
        assert!(load_or_default(broken.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn huge_parallelism_is_rejected_without_overflow() {
        let mut cfg = AppConfig::default();
        cfg.credentials.parallelism = u32::MAX;
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.credentials = CredentialsConfig { memory_kib: u32::MAX, iterations: 1, parallelism: 600_000_000 };
        assert!(cfg.credentials.validate().is_ok());
    }

    #[test]
    fn zero_worker_threads_normalized() {
        let mut cfg = AppConfig::default();
        cfg.server.worker_threads = Some(0);
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.worker_threads, Some(4));
    }
}
