use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::net::SocketAddr;
use tracing::warn;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Absent means "use the per-service default port", which is why this
    /// is not defaulted away.
    pub server: Option<ServerConfig>,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".into(), port: 8080 }
    }
}

/// Named upstream table for the gateway: service selector -> base address.
/// Base addresses carry the resource prefix because the dispatcher strips
/// the selector segment before forwarding.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_upstreams")]
    pub upstreams: HashMap<String, String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { upstreams: default_upstreams() }
    }
}

fn default_upstreams() -> HashMap<String, String> {
    HashMap::from([
        ("users".to_string(), "http://user-service:8081/users".to_string()),
        ("products".to_string(), "http://product-service:8082/products".to_string()),
        ("orders".to_string(), "http://order-service:8083/orders".to_string()),
    ])
}

/// Config from the optional file (`CONFIG_PATH`, default `config.toml`).
/// An absent file is the normal case and stays quiet; a file that exists
/// but cannot be read or parsed is reported before falling back.
fn load_optional() -> Option<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!(path = %path, error = %e, "failed to parse config file, using defaults");
                None
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path, error = %e, "failed to read config file, using defaults");
            None
        }
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl ServerConfig {
    /// Effective bind config for one process: optional config file, then
    /// env vars (`SERVER_HOST`, `PORT`, env wins), then the per-service
    /// default port.
    pub fn resolve(default_port: u16) -> Self {
        let mut cfg = load_optional()
            .and_then(|app| app.server)
            .unwrap_or_else(|| Self { port: default_port, ..Self::default() });
        if let Ok(host) = std::env::var("SERVER_HOST") {
            if !host.trim().is_empty() {
                cfg.host = host;
            }
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse::<u16>() {
                cfg.port = port;
            }
        }
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(anyhow!("server.host must not be empty"));
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.validate()?;
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

impl GatewayConfig {
    /// Effective upstream table: optional config file, then per-service env
    /// overrides (`USERS_UPSTREAM`, `PRODUCTS_UPSTREAM`, `ORDERS_UPSTREAM`).
    pub fn resolve() -> Self {
        let mut cfg = load_optional().map(|app| app.gateway).unwrap_or_default();
        for (selector, var) in [
            ("users", "USERS_UPSTREAM"),
            ("products", "PRODUCTS_UPSTREAM"),
            ("orders", "ORDERS_UPSTREAM"),
        ] {
            if let Ok(url) = std::env::var(var) {
                if !url.trim().is_empty() {
                    cfg.upstreams.insert(selector.to_string(), url);
                }
            }
        }
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.upstreams.is_empty() {
            return Err(anyhow!("gateway.upstreams must not be empty"));
        }
        for (selector, base) in &self.upstreams {
            if selector.trim().is_empty() {
                return Err(anyhow!("gateway.upstreams has an empty selector"));
            }
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                return Err(anyhow!("upstream for '{selector}' must start with http(s)"));
            }
        }
        Ok(())
    }
}
