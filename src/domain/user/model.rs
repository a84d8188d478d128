//! Staff user entity and the embedded shift record

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::access::Role;
use crate::domain::repositories::Record;

/// Hotel department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    Management,
    FrontOffice,
    Housekeeping,
    FoodAndBeverage,
    Banquet,
    Maintenance,
    Security,
    Finance,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Management => "management",
            Self::FrontOffice => "front-office",
            Self::Housekeeping => "housekeeping",
            Self::FoodAndBeverage => "food-and-beverage",
            Self::Banquet => "banquet",
            Self::Maintenance => "maintenance",
            Self::Security => "security",
            Self::Finance => "finance",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shift band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftType {
    Morning,
    Afternoon,
    Night,
}

impl ShiftType {
    /// Default scheduled hours for the band.
    pub fn default_hours(&self) -> (NaiveTime, NaiveTime) {
        let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN);
        match self {
            Self::Morning => (t(7), t(15)),
            Self::Afternoon => (t(15), t(23)),
            Self::Night => (t(23), t(7)),
        }
    }
}

/// Clock state carried on the user.
///
/// `clocked_in_at` is present exactly when `is_on_shift` is true; the
/// fields are private so only [`ShiftRecord::clock_in`] and
/// [`ShiftRecord::clock_out`] can change them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    is_on_shift: bool,
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
    pub shift_type: ShiftType,
    clocked_in_at: Option<NaiveDateTime>,
}

impl ShiftRecord {
    pub fn new(shift_type: ShiftType) -> Self {
        let (shift_start, shift_end) = shift_type.default_hours();
        Self {
            is_on_shift: false,
            shift_start,
            shift_end,
            shift_type,
            clocked_in_at: None,
        }
    }

    pub fn is_on_shift(&self) -> bool {
        self.is_on_shift
    }

    pub fn clocked_in_at(&self) -> Option<NaiveDateTime> {
        self.clocked_in_at
    }

    pub fn clock_in(&mut self, at: NaiveDateTime) {
        self.is_on_shift = true;
        self.clocked_in_at = Some(at);
    }

    pub fn clock_out(&mut self) {
        self.is_on_shift = false;
        self.clocked_in_at = None;
    }
}

/// Staff user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    role: Role,
    pub department: Department,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub current_shift: ShiftRecord,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        role: Role,
        department: Department,
        shift_type: ShiftType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            username: username.into(),
            role,
            department,
            is_active: true,
            last_login: None,
            current_shift: ShiftRecord::new(shift_type),
        }
    }

    /// Role is fixed at creation.
    pub fn role(&self) -> Role {
        self.role
    }
}

impl Record for User {
    const ENTITY: &'static str = "User";

    fn id(&self) -> Uuid {
        self.id
    }
}

// ── Tests ──────────────────────────────────────────────────────
