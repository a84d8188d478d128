//! Application services

mod auth;
mod branding;
mod clock;
mod currency;
mod revenue;
mod shift;

pub use auth::AuthService;
pub use branding::BrandingService;
pub use clock::{Clock, FixedClock, SharedClock, SystemClock, TimeFormatter};
pub use currency::CurrencyService;
pub use revenue::{RevenueService, RevenueSummary};
pub use shift::ShiftService;
