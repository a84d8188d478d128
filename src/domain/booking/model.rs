//! Room booking entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::financial::Money;
use crate::domain::repositories::Record;
use crate::domain::{DomainError, DomainResult};

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked-in",
            Self::CheckedOut => "checked-out",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Room booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub guest_name: String,
    pub room_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub status: BookingStatus,
    pub total: Money,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingDto {
    #[validate(length(min = 1, max = 120, message = "guest name is required"))]
    pub guest_name: String,
    #[validate(length(min = 1, max = 10, message = "room number is required"))]
    pub room_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(range(min = 1, max = 12, message = "guests must be 1–12"))]
    pub guests: u32,
    pub total: Money,
}

impl Booking {
    pub fn from_dto(dto: CreateBookingDto) -> DomainResult<Self> {
        if dto.check_out <= dto.check_in {
            return Err(DomainError::Validation(
                "check-out must be after check-in".into(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            guest_name: dto.guest_name,
            room_number: dto.room_number,
            check_in: dto.check_in,
            check_out: dto.check_out,
            guests: dto.guests,
            status: BookingStatus::Confirmed,
            total: dto.total,
            created_at: Utc::now(),
        })
    }

    fn reject(&self, action: &'static str) -> DomainError {
        DomainError::InvalidTransition {
            entity: "Booking",
            from: self.status.to_string(),
            action,
        }
    }

    pub fn mark_checked_in(&mut self) -> DomainResult<()> {
        if self.status != BookingStatus::Confirmed {
            return Err(self.reject("check in"));
        }
        self.status = BookingStatus::CheckedIn;
        Ok(())
    }

    pub fn mark_checked_out(&mut self) -> DomainResult<()> {
        if self.status != BookingStatus::CheckedIn {
            return Err(self.reject("check out"));
        }
        self.status = BookingStatus::CheckedOut;
        Ok(())
    }

    pub fn cancel(&mut self) -> DomainResult<()> {
        if self.status != BookingStatus::Confirmed {
            return Err(self.reject("cancel"));
        }
        self.status = BookingStatus::Cancelled;
        Ok(())
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Room is held for the night starting on `date`.
    pub fn occupies(&self, date: NaiveDate) -> bool {
        matches!(self.status, BookingStatus::Confirmed | BookingStatus::CheckedIn)
            && self.check_in <= date
            && date < self.check_out
    }
}

impl Record for Booking {
    const ENTITY: &'static str = "Booking";

    fn id(&self) -> Uuid {
        self.id
    }
}

// ── Tests ──────────────────────────────────────────────────────
