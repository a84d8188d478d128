//! Currency aggregate
//!
//! Rate table, hotel money settings and the conversion rule.

pub mod model;

pub use model::{normalize_code, round_half_up, CurrencyRate, HotelSettings, RateTable};
