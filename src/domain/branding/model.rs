//! Branding configuration entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::locale::{canonical_time_zone, Language, TimeFormat};
use crate::shared::{validate_currency_code, validate_hex_color, validate_hhmm};

/// Hotel identity and presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BrandingConfig {
    #[validate(length(min = 1, max = 120, message = "hotel name is required"))]
    pub hotel_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "logo url is not a valid URL"))]
    pub logo_url: Option<String>,
    #[validate(custom(function = "validate_hex_color"))]
    pub primary_color: String,
    #[validate(custom(function = "validate_hex_color"))]
    pub secondary_color: String,
    /// IANA identifier, stored in canonical form
    #[validate(length(min = 1, message = "time zone is required"))]
    pub time_zone: String,
    #[validate(custom(function = "validate_hhmm"))]
    pub check_in_time: String,
    #[validate(custom(function = "validate_hhmm"))]
    pub check_out_time: String,
    #[validate(custom(function = "validate_currency_code"))]
    pub preferred_currency: String,
    pub language: Language,
    pub time_format: TimeFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "contact email is invalid"))]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            hotel_name: "Grand Hotel".to_string(),
            tagline: None,
            logo_url: None,
            primary_color: "#1e3a8a".to_string(),
            secondary_color: "#f59e0b".to_string(),
            time_zone: "UTC".to_string(),
            check_in_time: "15:00".to_string(),
            check_out_time: "11:00".to_string(),
            preferred_currency: "USD".to_string(),
            language: Language::English,
            time_format: TimeFormat::H12,
            contact_email: None,
            contact_phone: None,
            address: None,
        }
    }
}

impl BrandingConfig {
    /// Rewrite retired zone aliases and upper-case the currency code.
    /// Applied on load, on update and on import.
    pub fn normalized(mut self) -> Self {
        self.time_zone = canonical_time_zone(&self.time_zone);
        self.preferred_currency = self.preferred_currency.trim().to_ascii_uppercase();
        self
    }
}

// ── Tests ──────────────────────────────────────────────────────
