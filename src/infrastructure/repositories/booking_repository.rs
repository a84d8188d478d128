use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Booking, BookingStatus, CreateBookingDto, DomainError, DomainResult};
use crate::infrastructure::storage::Store;
use crate::shared::describe_validation_errors;

pub type BookingStore = Store<Booking>;

impl Store<Booking> {
    pub fn create_booking(&mut self, dto: CreateBookingDto) -> DomainResult<Booking> {
        dto.validate()
            .map_err(|e| DomainError::Validation(describe_validation_errors(&e)))?;
        let booking = Booking::from_dto(dto)?;

        if let Some(clash) = self.iter().find(|b| {
            b.room_number == booking.room_number
                && b.occupies(booking.check_in.max(b.check_in))
                && booking.occupies(booking.check_in.max(b.check_in))
        }) {
            return Err(DomainError::Conflict(format!(
                "Room {} is already booked by {}",
                clash.room_number, clash.guest_name
            )));
        }

        let booking = self.insert(booking)?;
        info!(booking_id = %booking.id, room = %booking.room_number, "Booking created");
        Ok(booking)
    }

    pub fn check_in(&mut self, id: Uuid) -> DomainResult<Booking> {
        let booking = self.update(id, Booking::mark_checked_in)?;
        info!(booking_id = %id, room = %booking.room_number, "Guest checked in");
        Ok(booking)
    }

    pub fn check_out(&mut self, id: Uuid) -> DomainResult<Booking> {
        let booking = self.update(id, Booking::mark_checked_out)?;
        info!(booking_id = %id, room = %booking.room_number, "Guest checked out");
        Ok(booking)
    }

    pub fn cancel_booking(&mut self, id: Uuid) -> DomainResult<Booking> {
        let booking = self.update(id, Booking::cancel)?;
        info!(booking_id = %id, "Booking cancelled");
        Ok(booking)
    }

    pub fn delete_booking(&mut self, id: Uuid) -> DomainResult<Booking> {
        self.remove(id)
    }

    pub fn arrivals_on(&self, date: NaiveDate) -> Vec<Booking> {
        self.filter(|b| b.check_in == date && b.occupies(date))
    }

    pub fn departures_on(&self, date: NaiveDate) -> Vec<Booking> {
        self.filter(|b| {
            b.check_out == date
                && matches!(b.status, BookingStatus::Confirmed | BookingStatus::CheckedIn)
        })
    }

    pub fn occupied_on(&self, date: NaiveDate) -> Vec<Booking> {
        self.filter(|b| b.occupies(date))
    }
}

// ── Tests ──────────────────────────────────────────────────────
