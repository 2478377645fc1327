// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub site: SiteConfig,
    pub order: OrderConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common, or json)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    pub max_body_size: u64,
}

/// Static site configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Directory the site assets are served from
    pub root: String,
    /// Index file names tried for directory paths
    #[serde(default = "default_index_files")]
    pub index_files: Vec<String>,
    /// Health check configuration
    #[serde(default)]
    pub health: HealthConfig,
}

fn default_index_files() -> Vec<String> {
    vec!["index.html".to_string()]
}

/// Health check configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HealthConfig {
    /// Enable health check endpoints
    #[serde(default = "default_health_enabled")]
    pub enabled: bool,
    /// Liveness probe path (default: /healthz)
    #[serde(default = "default_healthz_path")]
    pub liveness_path: String,
    /// Readiness probe path (default: /readyz)
    #[serde(default = "default_readyz_path")]
    pub readiness_path: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_health_enabled() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_healthz_path() -> String {
    "/healthz".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_readyz_path() -> String {
    "/readyz".to_string()
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: default_health_enabled(),
            liveness_path: default_healthz_path(),
            readiness_path: default_readyz_path(),
        }
    }
}

/// Order intake configuration
///
/// The credential fields are optional on purpose: their absence is a
/// detectable misconfiguration reported per request, never a startup crash.
#[derive(Debug, Deserialize, Clone)]
pub struct OrderConfig {
    /// Turnstile server-side secret
    #[serde(default)]
    pub turnstile_secret: Option<String>,
    /// Resend API key (bearer credential)
    #[serde(default)]
    pub resend_api_key: Option<String>,
    /// Verified sender address for outbound mail
    #[serde(default)]
    pub resend_from: Option<String>,
    /// Recipient of order notifications
    pub order_to: String,
    /// Subject line for order notifications
    pub subject: String,
    /// Token verification endpoint
    pub verify_url: String,
    /// Email dispatch endpoint
    pub email_url: String,
    /// Timeout for outbound calls, in seconds
    pub request_timeout: u64,
}

impl OrderConfig {
    /// Email credentials, if fully configured
    pub fn email_credentials(&self) -> Option<(&str, &str)> {
        match (self.resend_api_key.as_deref(), self.resend_from.as_deref()) {
            (Some(key), Some(from)) if !key.is_empty() && !from.is_empty() => Some((key, from)),
            _ => None,
        }
    }
}
