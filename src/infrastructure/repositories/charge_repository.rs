use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::domain::{Charge, DomainError, DomainResult, RevenueSource};
use crate::infrastructure::storage::Store;

pub type ChargeStore = Store<Charge>;

impl Store<Charge> {
    pub fn post(&mut self, charge: Charge) -> DomainResult<Charge> {
        if charge.amount.amount.is_sign_negative() {
            return Err(DomainError::Validation(format!(
                "Charge amount must not be negative: {}",
                charge.amount.amount
            )));
        }
        let charge = self.insert(charge)?;
        info!(
            charge_id = %charge.id,
            source = %charge.source,
            amount = %charge.amount.amount,
            currency = %charge.amount.currency,
            "Charge posted"
        );
        Ok(charge)
    }

    pub fn by_source(&self, source: RevenueSource) -> Vec<Charge> {
        self.filter(|c| c.source == source)
    }

    pub fn for_booking(&self, booking_id: Uuid) -> Vec<Charge> {
        self.filter(|c| c.booking_id == Some(booking_id))
    }

    pub fn posted_since(&self, since: DateTime<Utc>) -> Vec<Charge> {
        self.filter(|c| c.posted_at >= since)
    }
}

// ── Tests ──────────────────────────────────────────────────────
