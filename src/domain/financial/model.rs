//! Money and revenue charges

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::currency::normalize_code;
use crate::domain::repositories::Record;

/// An amount tagged with its currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: normalize_code(currency),
        }
    }
}

/// Revenue-producing department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevenueSource {
    Rooms,
    Restaurant,
    RoomService,
    Banquet,
    Other,
}

impl RevenueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::Restaurant => "restaurant",
            Self::RoomService => "room-service",
            Self::Banquet => "banquet",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for RevenueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A posted charge, kept in the currency it was taken in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: Uuid,
    pub source: RevenueSource,
    pub description: String,
    pub amount: Money,
    pub booking_id: Option<Uuid>,
    pub posted_at: DateTime<Utc>,
}

impl Charge {
    pub fn new(source: RevenueSource, description: impl Into<String>, amount: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            description: description.into(),
            amount,
            booking_id: None,
            posted_at: Utc::now(),
        }
    }
}

impl Record for Charge {
    const ENTITY: &'static str = "Charge";

    fn id(&self) -> Uuid {
        self.id
    }
}
