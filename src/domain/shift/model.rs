//! Scheduled shift entity and its clock state machine

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::repositories::Record;
use crate::domain::user::ShiftType;
use crate::domain::{DomainError, DomainResult};

/// Shift status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftStatus {
    /// Planned, not started
    Scheduled,
    /// Clocked in
    InProgress,
    /// Clocked out
    Completed,
    /// Never clocked in, or abandoned
    Missed,
    /// Withdrawn before it started
    Cancelled,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Missed => "missed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Missed | Self::Cancelled)
    }
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduled work period for one staff member.
///
/// Times are hotel-local wall clock values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSchedule {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub shift_type: ShiftType,
    pub scheduled_start: NaiveTime,
    pub scheduled_end: NaiveTime,
    pub status: ShiftStatus,
    pub actual_start_time: Option<NaiveDateTime>,
    pub actual_end_time: Option<NaiveDateTime>,
    pub break_start: Option<NaiveDateTime>,
    pub break_end: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl ShiftSchedule {
    pub fn new(user_id: Uuid, date: NaiveDate, shift_type: ShiftType) -> Self {
        let (scheduled_start, scheduled_end) = shift_type.default_hours();
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            shift_type,
            scheduled_start,
            scheduled_end,
            status: ShiftStatus::Scheduled,
            actual_start_time: None,
            actual_end_time: None,
            break_start: None,
            break_end: None,
            notes: None,
        }
    }

    fn reject(&self, action: &'static str) -> DomainError {
        DomainError::InvalidTransition {
            entity: "Shift",
            from: self.status.to_string(),
            action,
        }
    }

    /// `scheduled → in-progress`
    pub fn clock_in(&mut self, now: NaiveDateTime) -> DomainResult<()> {
        if self.status != ShiftStatus::Scheduled {
            return Err(self.reject("clock in"));
        }
        self.status = ShiftStatus::InProgress;
        self.actual_start_time = Some(now);
        Ok(())
    }

    /// `in-progress → completed`. An open break ends at the same instant.
    pub fn clock_out(&mut self, now: NaiveDateTime) -> DomainResult<()> {
        if self.status != ShiftStatus::InProgress {
            return Err(self.reject("clock out"));
        }
        if self.is_on_break() {
            self.break_end = Some(now);
        }
        self.status = ShiftStatus::Completed;
        self.actual_end_time = Some(now);
        Ok(())
    }

    pub fn start_break(&mut self, now: NaiveDateTime) -> DomainResult<()> {
        if self.status != ShiftStatus::InProgress || self.is_on_break() {
            return Err(self.reject("start break on"));
        }
        self.break_start = Some(now);
        self.break_end = None;
        Ok(())
    }

    pub fn end_break(&mut self, now: NaiveDateTime) -> DomainResult<()> {
        if self.status != ShiftStatus::InProgress || !self.is_on_break() {
            return Err(self.reject("end break on"));
        }
        self.break_end = Some(now);
        Ok(())
    }

    /// `scheduled | in-progress → missed`
    pub fn mark_missed(&mut self) -> DomainResult<()> {
        if !matches!(self.status, ShiftStatus::Scheduled | ShiftStatus::InProgress) {
            return Err(self.reject("mark missed"));
        }
        self.status = ShiftStatus::Missed;
        Ok(())
    }

    /// `scheduled → cancelled`
    pub fn cancel(&mut self) -> DomainResult<()> {
        if self.status != ShiftStatus::Scheduled {
            return Err(self.reject("cancel"));
        }
        self.status = ShiftStatus::Cancelled;
        Ok(())
    }

    pub fn is_on_break(&self) -> bool {
        self.status == ShiftStatus::InProgress
            && self.break_start.is_some()
            && self.break_end.is_none()
    }

    /// Actual end minus actual start, in hours; zero until both are known.
    pub fn hours_worked(&self) -> f64 {
        match (self.actual_start_time, self.actual_end_time) {
            (Some(start), Some(end)) if end >= start => (end - start).num_seconds() as f64 / 3600.0,
            _ => 0.0,
        }
    }

    /// Length of the recorded break, in minutes.
    pub fn break_minutes(&self) -> i64 {
        match (self.break_start, self.break_end) {
            (Some(start), Some(end)) if end >= start => (end - start).num_minutes(),
            _ => 0,
        }
    }
}

impl Record for ShiftSchedule {
    const ENTITY: &'static str = "Shift";

    fn id(&self) -> Uuid {
        self.id
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        day().and_hms_opt(h, m, s).unwrap()
    }

    fn sample_shift() -> ShiftSchedule {
        ShiftSchedule::new(Uuid::new_v4(), day(), ShiftType::Morning)
    }

    #[test]
    fn clock_in_then_out_counts_hours() {
        let mut s = sample_shift();
        s.clock_in(at(9, 0, 0)).unwrap();
        assert_eq!(s.status, ShiftStatus::InProgress);
        s.clock_out(at(17, 30, 0)).unwrap();
        assert_eq!(s.status, ShiftStatus::Completed);
        assert_eq!(s.hours_worked(), 8.5);
    }

    #[test]
    fn clock_in_from_completed_is_rejected() {
        let mut s = sample_shift();
        s.clock_in(at(9, 0, 0)).unwrap();
        s.clock_out(at(17, 30, 0)).unwrap();
        let before = s.clone();

        let err = s.clock_in(at(18, 0, 0)).unwrap_err();
        assert!(err.is_rejected_transition());
        assert_eq!(s, before);
    }

    #[test]
    fn clock_out_requires_in_progress() {
        let mut s = sample_shift();
        assert!(s.clock_out(at(17, 0, 0)).is_err());
        assert_eq!(s.status, ShiftStatus::Scheduled);
        assert!(s.actual_end_time.is_none());
    }

    #[test]
    fn hours_worked_is_zero_until_both_times_exist() {
        let mut s = sample_shift();
        assert_eq!(s.hours_worked(), 0.0);
        s.clock_in(at(9, 0, 0)).unwrap();
        assert_eq!(s.hours_worked(), 0.0);
    }

    #[test]
    fn breaks_do_not_change_status() {
        let mut s = sample_shift();
        assert!(s.start_break(at(8, 0, 0)).is_err());

        s.clock_in(at(9, 0, 0)).unwrap();
        s.start_break(at(12, 0, 0)).unwrap();
        assert!(s.is_on_break());
        assert_eq!(s.status, ShiftStatus::InProgress);
        assert!(s.start_break(at(12, 5, 0)).is_err());

        s.end_break(at(12, 30, 0)).unwrap();
        assert!(!s.is_on_break());
        assert_eq!(s.break_minutes(), 30);
        assert!(s.end_break(at(12, 40, 0)).is_err());
    }

    #[test]
    fn clock_out_while_on_break_closes_break() {
        let mut s = sample_shift();
        s.clock_in(at(9, 0, 0)).unwrap();
        s.start_break(at(16, 45, 0)).unwrap();
        s.clock_out(at(17, 0, 0)).unwrap();
        assert_eq!(s.status, ShiftStatus::Completed);
        assert_eq!(s.break_end, Some(at(17, 0, 0)));
        assert_eq!(s.hours_worked(), 8.0);
    }

    #[test]
    fn cancel_only_from_scheduled() {
        let mut s = sample_shift();
        s.cancel().unwrap();
        assert_eq!(s.status, ShiftStatus::Cancelled);
        assert!(s.clock_in(at(9, 0, 0)).is_err());

        let mut s = sample_shift();
        s.clock_in(at(9, 0, 0)).unwrap();
        assert!(s.cancel().is_err());
        assert_eq!(s.status, ShiftStatus::InProgress);
    }

    #[test]
    fn missed_is_terminal() {
        let mut s = sample_shift();
        s.mark_missed().unwrap();
        assert!(s.status.is_terminal());
        assert!(s.mark_missed().is_err());
        assert!(s.clock_in(at(9, 0, 0)).is_err());
    }

    #[test]
    fn overnight_shift_hours() {
        let mut s = ShiftSchedule::new(Uuid::new_v4(), day(), ShiftType::Night);
        s.clock_in(at(23, 0, 0)).unwrap();
        let next_morning = day().succ_opt().unwrap().and_hms_opt(7, 15, 0).unwrap();
        s.clock_out(next_morning).unwrap();
        assert_eq!(s.hours_worked(), 8.25);
    }

    #[test]
    fn status_display() {
        assert_eq!(ShiftStatus::InProgress.to_string(), "in-progress");
    }
}
