//! Cart configuration.
//!
//! Loaded from a TOML file, every key optional:
//!
//! ```toml
//! [shipping]
//! free_shipping_threshold = 500
//! flat_shipping_cost = 50
//!
//! [runtime]
//! channel_buffer = 32
//! notification_capacity = 16
//!
//! [[products]]
//! id = "bottle-200ml"
//! name = "Tender Coconut Water"
//! subtitle = "Ready to Drink"
//! price = 40
//! volume = "200ml"
//! image = "images/bottle-200ml.png"
//! ```
//!
//! Without `[[products]]` the built-in storefront catalog is used.

use crate::cart_actor::CartError;
use crate::catalog::Catalog;
use crate::model::Product;
use crate::totals::ShippingPolicy;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "CART_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CartError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Capacity of the cart actor's request channel.
    pub channel_buffer: usize,
    /// How many unread notifications a subscriber may fall behind.
    pub notification_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            notification_capacity: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub shipping: ShippingPolicy,
    pub runtime: RuntimeConfig,
    pub products: Vec<Product>,
}

impl CartConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Loads the file named by `CART_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => {
                info!("No {} set, using defaults", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.runtime.channel_buffer == 0 {
            return Err(ConfigError::Invalid("runtime.channel_buffer must be positive".into()));
        }
        if self.runtime.notification_capacity == 0 {
            return Err(ConfigError::Invalid(
                "runtime.notification_capacity must be positive".into(),
            ));
        }
        if !self.products.is_empty() {
            Catalog::from_products(self.products.clone())?;
        }
        Ok(())
    }

    /// The configured catalog, falling back to the storefront products.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        if self.products.is_empty() {
            Ok(Catalog::storefront())
        } else {
            Ok(Catalog::from_products(self.products.clone())?)
        }
    }
}
