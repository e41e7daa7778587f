//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the payment strategy, the gateway settings source and host URLs.

use pay_core::{BoxedPaymentStrategy, CallbackUrls, ConfigLookup, EnvLookup, DEFAULT_PAY_NOW_LABEL};
use pay_slickpay::SlickpayGateway;
use std::collections::HashMap;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the billing host, used for webhook and return URLs
    pub system_url: String,
    /// Gateway module name in the callback path
    pub module_name: String,
    /// Submit button label of the payment form
    pub pay_now_label: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            system_url: std::env::var("SYSTEM_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            module_name: std::env::var("MODULE_NAME").unwrap_or_else(|_| "slickpay".to_string()),
            pay_now_label: std::env::var("PAY_NOW_LABEL")
                .unwrap_or_else(|_| DEFAULT_PAY_NOW_LABEL.to_string()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment strategy
    pub strategy: BoxedPaymentStrategy,
    /// Gateway settings, re-read for the configuration form
    pub settings: Arc<dyn ConfigLookup>,
    /// Host callback URLs
    pub urls: CallbackUrls,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the Slick-Pay strategy
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let settings = load_gateway_settings()?;

        let gateway = SlickpayGateway::from_lookup(settings.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to initialize Slick-Pay: {}", e))?;

        tracing::info!(
            "Slick-Pay mode: {}, API: {}",
            gateway.config().mode,
            gateway.config().base_url()
        );

        Ok(Self::with_strategy(config, settings, Arc::new(gateway)))
    }

    /// Assemble state from parts
    pub fn with_strategy(
        config: AppConfig,
        settings: Arc<dyn ConfigLookup>,
        strategy: BoxedPaymentStrategy,
    ) -> Self {
        let urls = CallbackUrls::new(&config.system_url).with_module_name(&config.module_name);
        Self {
            strategy,
            settings,
            urls,
            config,
        }
    }
}

/// Load gateway settings from `config/gateway.toml`, falling back to
/// `SLICKPAY_*` environment variables.
fn load_gateway_settings() -> anyhow::Result<Arc<dyn ConfigLookup>> {
    let config_paths = [
        "config/gateway.toml",
        "../config/gateway.toml",
        "../../config/gateway.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let settings = settings_from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded {} gateway settings from {}", settings.len(), path);
            return Ok(Arc::new(settings));
        }
    }

    tracing::info!("No gateway settings file found, reading SLICKPAY_* environment");
    Ok(Arc::new(EnvLookup::default()))
}

/// Flatten a TOML table into lookup strings.
///
/// Booleans follow the host's checkbox convention: `true` → `"on"`,
/// `false` → `""`.
pub fn settings_from_toml(content: &str) -> anyhow::Result<HashMap<String, String>> {
    let table: toml::Table = toml::from_str(content)?;

    table
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Boolean(true) => "on".to_string(),
                toml::Value::Boolean(false) => String::new(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                other => anyhow::bail!("Unsupported value for {}: {}", key, other),
            };
            Ok((key, text))
        })
        .collect()
}
