use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{ShiftSchedule, ShiftStatus};
use crate::infrastructure::storage::Store;

pub type ShiftStore = Store<ShiftSchedule>;

impl Store<ShiftSchedule> {
    pub fn shifts_for_user(&self, user_id: Uuid) -> Vec<ShiftSchedule> {
        let mut shifts = self.filter(|s| s.user_id == user_id);
        shifts.sort_by_key(|s| (s.date, s.scheduled_start));
        shifts
    }

    pub fn shifts_on(&self, date: NaiveDate) -> Vec<ShiftSchedule> {
        let mut shifts = self.filter(|s| s.date == date);
        shifts.sort_by_key(|s| s.scheduled_start);
        shifts
    }

    pub fn active_for_user(&self, user_id: Uuid) -> Option<&ShiftSchedule> {
        self.iter()
            .find(|s| s.user_id == user_id && s.status == ShiftStatus::InProgress)
    }

    pub fn total_hours_for_user(&self, user_id: Uuid) -> f64 {
        self.iter()
            .filter(|s| s.user_id == user_id)
            .map(ShiftSchedule::hours_worked)
            .sum()
    }
}
