//! Wall clock and hotel-local date/time formatting
//!
//! Every "now" in the crate comes from an injected [`Clock`] and is
//! reinterpreted in the hotel's configured zone, never the host's zone.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{
    DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;

use crate::domain::locale::{validate_time_zone, DisplayLocale, Language, TimeFormat};
use crate::domain::{BrandingConfig, DomainError, DomainResult};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub type SharedClock = Arc<dyn Clock>;

/// Host system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for deterministic tests and demos
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(now) }
    }

    /// Clock frozen at `y-m-d h:m:s` UTC.
    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Self {
        let now = NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .map(|naive| Utc.from_utc_datetime(&naive))
            .unwrap_or_default();
        Self::new(now)
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Formats dates and times in the hotel zone and display locale
#[derive(Clone)]
pub struct TimeFormatter {
    clock: SharedClock,
    zone: Tz,
    language: Language,
    time_format: TimeFormat,
}

impl TimeFormatter {
    /// Unknown zones fall back (with a warning) instead of failing.
    pub fn new(clock: SharedClock, time_zone: &str, language: Language, time_format: TimeFormat) -> Self {
        Self {
            clock,
            zone: validate_time_zone(time_zone),
            language,
            time_format,
        }
    }

    pub fn from_branding(clock: SharedClock, branding: &BrandingConfig) -> Self {
        Self::new(clock, &branding.time_zone, branding.language, branding.time_format)
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn locale(&self) -> DisplayLocale {
        self.language.display_locale()
    }

    /// 12h/24h after the language override
    pub fn time_format(&self) -> TimeFormat {
        self.language.effective_time_format(self.time_format)
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    // ── Hotel-local now ─────────────────────────────────────────

    pub fn now_utc(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn now(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.zone)
    }

    /// Wall-clock reading in the hotel zone
    pub fn local_now(&self) -> NaiveDateTime {
        self.now().naive_local()
    }

    pub fn today(&self) -> NaiveDate {
        self.local_now().date()
    }

    pub fn to_local(&self, ts: DateTime<Utc>) -> NaiveDateTime {
        ts.with_timezone(&self.zone).naive_local()
    }

    pub fn current_date(&self) -> String {
        self.format_date(self.today())
    }

    pub fn current_time(&self) -> String {
        self.render_time(self.local_now())
    }

    pub fn current_date_time(&self) -> String {
        self.render_date_time(self.local_now())
    }

    // ── Formatting ──────────────────────────────────────────────

    /// Accepts `HH:MM`, `HH:MM:SS`, RFC 3339, or a naive ISO timestamp.
    ///
    /// Bare times are taken as today in the hotel zone; naive timestamps
    /// are already hotel-local.
    pub fn format_time(&self, input: &str) -> DomainResult<String> {
        let input = input.trim();
        let local = if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
            self.to_local(ts.with_timezone(&Utc))
        } else if let Some(naive) = parse_naive_timestamp(input) {
            naive
        } else if let Some(time) = parse_bare_time(input) {
            self.today().and_time(time)
        } else {
            return Err(DomainError::Validation(format!(
                "Unrecognised time value: {:?}",
                input
            )));
        };
        Ok(self.render_time(local))
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        self.render(date.and_time(NaiveTime::MIN), self.locale().short_date_pattern())
    }

    pub fn format_date_long(&self, date: NaiveDate) -> String {
        self.render(date.and_time(NaiveTime::MIN), self.locale().long_date_pattern())
    }

    pub fn format_date_time(&self, ts: DateTime<Utc>) -> String {
        self.render_date_time(self.to_local(ts))
    }

    fn render_time(&self, local: NaiveDateTime) -> String {
        let format = self.time_format();
        let rendered = self.render(local, self.locale().time_pattern(format));
        match (format, self.locale().day_period(local.hour())) {
            (TimeFormat::H12, Some(marker)) => format!("{} {}", rendered, marker),
            _ => rendered,
        }
    }

    fn render_date_time(&self, local: NaiveDateTime) -> String {
        format!(
            "{} {}",
            self.render(local, self.locale().short_date_pattern()),
            self.render_time(local)
        )
    }

    // Patterns carry no offset, so rendering the wall-clock value as UTC is exact.
    fn render(&self, local: NaiveDateTime, pattern: &str) -> String {
        Utc.from_utc_datetime(&local)
            .format_localized(pattern, self.locale().chrono_locale())
            .to_string()
            .trim_end()
            .to_string()
    }
}

impl std::fmt::Debug for TimeFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeFormatter")
            .field("zone", &self.zone.name())
            .field("language", &self.language)
            .field("time_format", &self.time_format)
            .finish()
    }
}

fn parse_bare_time(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .ok()
}

fn parse_naive_timestamp(input: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter(clock: FixedClock, tz: &str, language: Language, format: TimeFormat) -> TimeFormatter {
        TimeFormatter::new(Arc::new(clock), tz, language, format)
    }

    #[test]
    fn now_is_reinterpreted_in_hotel_zone() {
        // 20:00 UTC is 01:30 next day in Kolkata
        let f = formatter(FixedClock::at(2024, 3, 14, 20, 0, 0), "Asia/Mumbai", Language::English, TimeFormat::H24);
        assert_eq!(f.zone().name(), "Asia/Kolkata");
        assert_eq!(f.today(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(f.current_time(), "01:30");
        assert_eq!(f.current_date(), "03/15/2024");
        assert_eq!(f.current_date_time(), "03/15/2024 01:30");
    }

    #[test]
    fn invalid_zone_falls_back_and_still_formats() {
        let f = formatter(FixedClock::at(2024, 3, 14, 9, 5, 0), "Mars/Olympus", Language::English, TimeFormat::H12);
        assert_eq!(f.zone(), Tz::UTC);
        assert_eq!(f.current_time(), "09:05 AM");
    }

    #[test]
    fn format_time_inputs() {
        let f = formatter(FixedClock::at(2024, 3, 14, 12, 0, 0), "America/New_York", Language::English, TimeFormat::H12);
        assert_eq!(f.format_time("14:30").unwrap(), "02:30 PM");
        assert_eq!(f.format_time("07:05:59").unwrap(), "07:05 AM");
        assert_eq!(f.format_time("2024-03-14T18:45:00Z").unwrap(), "02:45 PM");
        assert_eq!(f.format_time("2024-03-14T18:45").unwrap(), "06:45 PM");
        assert!(matches!(f.format_time("half past"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn german_always_uses_24h() {
        let f = formatter(FixedClock::at(2024, 3, 14, 15, 10, 0), "Europe/Berlin", Language::German, TimeFormat::H12);
        assert_eq!(f.time_format(), TimeFormat::H24);
        assert_eq!(f.current_time(), "16:10");
        assert_eq!(f.current_date(), "14.03.2024");
    }

    #[test]
    fn french_and_spanish_keep_day_period() {
        let fr = formatter(FixedClock::at(2024, 3, 14, 14, 30, 0), "UTC", Language::French, TimeFormat::H12);
        assert_eq!(fr.current_time(), "02:30 PM");
        assert_eq!(fr.format_time("02:30").unwrap(), "02:30 AM");
        assert_eq!(fr.current_date(), "14/03/2024");

        let es = formatter(FixedClock::at(2024, 3, 14, 14, 30, 0), "UTC", Language::Spanish, TimeFormat::H12);
        assert_eq!(es.current_time(), "02:30 p. m.");
        assert_eq!(es.format_time("02:30").unwrap(), "02:30 a. m.");
        assert_eq!(es.current_date_time(), "14/03/2024 02:30 p. m.");

        let es24 = formatter(FixedClock::at(2024, 3, 14, 14, 30, 0), "UTC", Language::Spanish, TimeFormat::H24);
        assert_eq!(es24.current_time(), "14:30");
    }

    #[test]
    fn long_dates_use_locale_names() {
        let f = formatter(FixedClock::at(2024, 3, 14, 12, 0, 0), "UTC", Language::English, TimeFormat::H12);
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        assert_eq!(f.format_date_long(date), "Thursday, March 14, 2024");
    }

    #[test]
    fn format_date_time_converts_zone() {
        let f = formatter(FixedClock::at(2024, 1, 1, 0, 0, 0), "Asia/Tokyo", Language::English, TimeFormat::H24);
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap();
        assert_eq!(f.format_date_time(ts), "01/02/2024 08:00");
    }

    #[test]
    fn fixed_clock_moves() {
        let clock = FixedClock::at(2024, 1, 1, 9, 0, 0);
        clock.advance(Duration::minutes(90));
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap());
    }
}
