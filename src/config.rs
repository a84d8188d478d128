//! Configuration module
//!
//! Reads `config.toml` from `~/.config/hotel-ops/` (or the path in
//! `HOTEL_OPS_CONFIG`). Every section is optional; missing values take
//! the defaults below.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::{BrandingConfig, CurrencyRate, DomainResult, HotelSettings, Language, RateTable, TimeFormat};
use crate::shared::{AppResult, InfraError};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "HOTEL_OPS_CONFIG";

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub hotel: HotelSection,
    pub currencies: Vec<CurrencySection>,
    pub branding: BrandingSection,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// `[hotel]` money settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelSection {
    pub base_currency: String,
    pub display_currency: String,
    pub decimal_places: u32,
}

impl Default for HotelSection {
    fn default() -> Self {
        let settings = HotelSettings::default();
        Self {
            base_currency: settings.base_currency,
            display_currency: settings.display_currency,
            decimal_places: settings.decimal_places,
        }
    }
}

/// One `[[currencies]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencySection {
    pub code: String,
    pub rate_to_base: Decimal,
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_decimal_places() -> u32 {
    2
}

/// `[branding]` values used until a branding document is saved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingSection {
    pub hotel_name: String,
    pub tagline: Option<String>,
    pub time_zone: String,
    pub language: Language,
    pub time_format: TimeFormat,
    pub preferred_currency: String,
    pub check_in_time: String,
    pub check_out_time: String,
}

impl Default for BrandingSection {
    fn default() -> Self {
        let b = BrandingConfig::default();
        Self {
            hotel_name: b.hotel_name,
            tagline: b.tagline,
            time_zone: b.time_zone,
            language: b.language,
            time_format: b.time_format,
            preferred_currency: b.preferred_currency,
            check_in_time: b.check_in_time,
            check_out_time: b.check_out_time,
        }
    }
}

/// `[storage]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the file key-value store; platform data dir when unset
    pub dir: Option<PathBuf>,
    /// Keep everything in memory, nothing is written to disk
    pub in_memory: bool,
}

/// `[logging]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `hotel_ops=debug`
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a config file. Errors on unreadable files and invalid TOML.
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> AppResult<Self> {
        let config: AppConfig = toml::from_str(raw).map_err(InfraError::from)?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is absent
    /// or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Configuration loaded from {}", path.display());
                config
            }
            Err(e) => {
                error!("Failed to load config from {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn settings(&self) -> HotelSettings {
        HotelSettings {
            base_currency: self.hotel.base_currency.clone(),
            display_currency: self.hotel.display_currency.clone(),
            decimal_places: self.hotel.decimal_places,
        }
    }

    /// Rate table from `[[currencies]]`; the built-in table when none are listed.
    pub fn rate_table(&self) -> DomainResult<RateTable> {
        let rates = if self.currencies.is_empty() {
            default_currencies()
        } else {
            self.currencies
                .iter()
                .map(|c| CurrencyRate::new(c.code.as_str(), c.rate_to_base, c.decimal_places))
                .collect()
        };
        RateTable::new(&self.hotel.base_currency, rates)
    }

    /// Branding used when nothing has been persisted yet
    pub fn default_branding(&self) -> BrandingConfig {
        let b = &self.branding;
        BrandingConfig {
            hotel_name: b.hotel_name.clone(),
            tagline: b.tagline.clone(),
            time_zone: b.time_zone.clone(),
            language: b.language,
            time_format: b.time_format,
            preferred_currency: b.preferred_currency.clone(),
            check_in_time: b.check_in_time.clone(),
            check_out_time: b.check_out_time.clone(),
            ..BrandingConfig::default()
        }
        .normalized()
    }
}

/// USD base with the currencies the front desk sees most.
pub fn default_currencies() -> Vec<CurrencyRate> {
    vec![
        CurrencyRate::new("USD", Decimal::ONE, 2),
        CurrencyRate::new("EUR", Decimal::new(110, 2), 2),
        CurrencyRate::new("GBP", Decimal::new(127, 2), 2),
        CurrencyRate::new("INR", Decimal::new(12, 3), 2),
        CurrencyRate::new("JPY", Decimal::new(67, 4), 0),
    ]
}

/// `$HOTEL_OPS_CONFIG`, else `~/.config/hotel-ops/config.toml`
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hotel-ops")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────
