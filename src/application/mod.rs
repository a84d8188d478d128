//! Application layer - services, navigation and the dashboard composition root

pub mod dashboard;
pub mod navigation;
pub mod seed;
pub mod services;

pub use dashboard::{Dashboard, Session, Stores};
pub use navigation::{Navigation, Navigator};
pub use services::{
    AuthService, BrandingService, Clock, CurrencyService, FixedClock, RevenueService,
    RevenueSummary, SharedClock, ShiftService, SystemClock, TimeFormatter,
};
