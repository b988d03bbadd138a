use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub repository: RepositoryConfig,
    pub menu: MenuConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080 }
    }
}

/// Storage backend selector. Exactly one variant is active per running
/// instance; an unknown or missing value is a deserialization error and
/// prevents startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepositoryBackend {
    InMemory,
    Json,
    Database,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryConfig {
    pub backend: RepositoryBackend,
    #[serde(default = "default_json_path")]
    pub json_path: String,
}

fn default_json_path() -> String {
    "data/pizza-list.json".to_string()
}

/// Display metadata for the configured menu, printed at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    pub name: String,
    #[serde(default = "default_menu_version")]
    pub version: u32,
    pub created_on: String,
}

fn default_menu_version() -> u32 { 99 }

/// Single in-memory HTTP Basic credential guarding the protected routes.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { username: "user".into(), password: "password".into() }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize();
        self.repository.validate()?;
        self.auth.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
    }
}

impl RepositoryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.backend == RepositoryBackend::Json && self.json_path.trim().is_empty() {
            return Err(anyhow!("repository.json_path must be set for the json backend"));
        }
        Ok(())
    }
}

impl AuthConfig {
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(anyhow!("auth.username and auth.password must be non-empty"));
        }
        Ok(())
    }
}
