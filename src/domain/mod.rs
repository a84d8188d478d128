pub mod access;
pub mod booking;
pub mod branding;
pub mod currency;
pub mod filter;
pub mod financial;
pub mod inventory;
pub mod locale;
pub mod message;
pub mod repositories;
pub mod security;
pub mod shift;
pub mod task;
pub mod user;

// Re-export commonly used types
pub use access::{Module, ModuleAccessTable, Role};
pub use booking::{Booking, BookingStatus, CreateBookingDto};
pub use branding::BrandingConfig;
pub use currency::{CurrencyRate, HotelSettings, RateTable};
pub use filter::{FilteredRecords, ModuleFilter};
pub use financial::{Charge, Money, RevenueSource};
pub use inventory::InventoryItem;
pub use locale::{Language, TimeFormat};
pub use message::{Message, Priority, Recipient};
pub use repositories::{DomainResult, Record};
pub use security::{AccessGrant, SecurityEventKind, SecurityLog, Severity};
pub use shift::{ShiftSchedule, ShiftStatus};
pub use task::{Task, TaskStatus};
pub use user::{CreateUserDto, Department, GetUserDto, ShiftRecord, ShiftType, UpdateUserDto, User};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
