use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process configuration resolved once at startup.
///
/// Both API credentials are externally supplied secrets; they are never
/// hard-coded and never printed (see the redacting `Debug` impl below).
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub discogs_api_key: String,
    pub discogs_api_secret: String,
    pub shopify_shop_domain: String,
    pub shopify_admin_token: String,
    pub shopify_api_version: String,
    pub currency: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("discogs_api_key", &"[redacted]")
            .field("discogs_api_secret", &"[redacted]")
            .field("shopify_shop_domain", &self.shopify_shop_domain)
            .field("shopify_admin_token", &"[redacted]")
            .field("shopify_api_version", &self.shopify_api_version)
            .field("currency", &self.currency)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
