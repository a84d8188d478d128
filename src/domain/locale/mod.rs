//! Locale and time zone rules

pub mod model;
pub mod timezone;

pub use model::{DisplayLocale, Language, TimeFormat};
pub use timezone::{canonical_time_zone, parse_time_zone, validate_time_zone, FALLBACK_TIME_ZONE};
