//! Shift clock: schedule transitions plus the user's embedded shift record

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::services::TimeFormatter;
use crate::domain::{DomainError, DomainResult, ShiftSchedule, ShiftStatus, ShiftType};
use crate::infrastructure::{ShiftStore, UserStore};

/// Drives shift transitions at hotel-local "now"
pub struct ShiftService<'a> {
    time: &'a TimeFormatter,
}

impl<'a> ShiftService<'a> {
    pub fn new(time: &'a TimeFormatter) -> Self {
        Self { time }
    }

    pub fn schedule(
        &self,
        shifts: &mut ShiftStore,
        users: &UserStore,
        user_id: Uuid,
        date: NaiveDate,
        shift_type: ShiftType,
    ) -> DomainResult<ShiftSchedule> {
        users.require(user_id)?;
        if shifts
            .iter()
            .any(|s| s.user_id == user_id && s.date == date && s.status != ShiftStatus::Cancelled)
        {
            return Err(DomainError::Conflict(format!(
                "User {} already has a shift on {}",
                user_id, date
            )));
        }

        let shift = shifts.insert(ShiftSchedule::new(user_id, date, shift_type))?;
        info!(shift_id = %shift.id, %user_id, %date, "Shift scheduled");
        Ok(shift)
    }

    // ── Clock ───────────────────────────────────────────────────

    pub fn clock_in(&self, shifts: &mut ShiftStore, users: &mut UserStore, id: Uuid) -> DomainResult<ShiftSchedule> {
        let user_id = shifts.require(id)?.user_id;
        users.require(user_id)?;
        // Re-clocking the same shift is left to the state machine.
        if let Some(active) = shifts.active_for_user(user_id).filter(|a| a.id != id) {
            return Err(DomainError::Conflict(format!(
                "User {} is already clocked in on shift {}",
                user_id, active.id
            )));
        }

        let now = self.time.local_now();
        let shift = logged(shifts.update(id, |s| s.clock_in(now)), id)?;
        users.set_on_shift(user_id, Some(now))?;
        info!(shift_id = %id, %user_id, at = %now, "Clocked in");
        Ok(shift)
    }

    pub fn clock_out(&self, shifts: &mut ShiftStore, users: &mut UserStore, id: Uuid) -> DomainResult<ShiftSchedule> {
        let user_id = shifts.require(id)?.user_id;
        users.require(user_id)?;

        let now = self.time.local_now();
        let shift = logged(shifts.update(id, |s| s.clock_out(now)), id)?;
        users.set_on_shift(user_id, None)?;
        info!(shift_id = %id, %user_id, hours = shift.hours_worked(), "Clocked out");
        Ok(shift)
    }

    pub fn start_break(&self, shifts: &mut ShiftStore, id: Uuid) -> DomainResult<ShiftSchedule> {
        let now = self.time.local_now();
        logged(shifts.update(id, |s| s.start_break(now)), id)
    }

    pub fn end_break(&self, shifts: &mut ShiftStore, id: Uuid) -> DomainResult<ShiftSchedule> {
        let now = self.time.local_now();
        logged(shifts.update(id, |s| s.end_break(now)), id)
    }

    // ── Administrative ──────────────────────────────────────────

    /// A shift missed mid-way also takes the user off shift.
    pub fn mark_missed(&self, shifts: &mut ShiftStore, users: &mut UserStore, id: Uuid) -> DomainResult<ShiftSchedule> {
        let before = shifts.require(id)?.clone();
        let shift = logged(shifts.update(id, ShiftSchedule::mark_missed), id)?;
        if before.status == ShiftStatus::InProgress && users.get(before.user_id).is_some() {
            users.set_on_shift(before.user_id, None)?;
        }
        info!(shift_id = %id, "Shift marked missed");
        Ok(shift)
    }

    pub fn cancel(&self, shifts: &mut ShiftStore, id: Uuid) -> DomainResult<ShiftSchedule> {
        let shift = logged(shifts.update(id, ShiftSchedule::cancel), id)?;
        info!(shift_id = %id, "Shift cancelled");
        Ok(shift)
    }
}

fn logged(result: DomainResult<ShiftSchedule>, id: Uuid) -> DomainResult<ShiftSchedule> {
    result.inspect_err(|e| {
        if e.is_rejected_transition() {
            warn!(shift_id = %id, "{}", e);
        }
    })
}

// ── Tests ──────────────────────────────────────────────────────
