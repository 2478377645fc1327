// Configuration module entry point
// Loads layered configuration and owns the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HealthConfig, HttpConfig, LoggingConfig, OrderConfig, PerformanceConfig, ServerConfig,
    SiteConfig,
};

impl Config {
    /// Load configuration from the default "config.toml" file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Layering: built-in defaults, then the file (if present), then
    /// environment variables such as `CHISEL_ORDER__TURNSTILE_SECRET`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("CHISEL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "ChiselSite/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 65_536)? // order payloads are small
            .set_default("site.root", "site")?
            .set_default("order.order_to", "info@chainandchisel.art")?
            .set_default("order.subject", "Chain & Chisel Order Request")?
            .set_default(
                "order.verify_url",
                "https://challenges.cloudflare.com/turnstile/v0/siteverify",
            )?
            .set_default("order.email_url", "https://api.resend.com/emails")?
            .set_default("order.request_timeout", 15)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
