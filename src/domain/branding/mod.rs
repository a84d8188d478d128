//! Branding aggregate

pub mod model;

pub use model::BrandingConfig;
