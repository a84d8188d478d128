//! Time zone identifiers: alias rewrite, validation and fallback

use chrono_tz::Tz;
use tracing::warn;

use crate::domain::{DomainError, DomainResult};

/// Zone used whenever a configured identifier cannot be resolved.
pub const FALLBACK_TIME_ZONE: Tz = Tz::UTC;

/// Retired or non-canonical identifiers and their replacements.
/// `Asia/Mumbai` never existed in the tz database but shows up in hotel configs.
const TIME_ZONE_ALIASES: &[(&str, &str)] = &[
    ("Asia/Mumbai", "Asia/Kolkata"),
    ("Asia/Calcutta", "Asia/Kolkata"),
    ("Asia/Saigon", "Asia/Ho_Chi_Minh"),
    ("Asia/Katmandu", "Asia/Kathmandu"),
    ("Asia/Rangoon", "Asia/Yangon"),
    ("Europe/Kiev", "Europe/Kyiv"),
];

/// Rewrite a known alias to its canonical zone; anything else is returned trimmed.
pub fn canonical_time_zone(tz: &str) -> String {
    let tz = tz.trim();
    TIME_ZONE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == tz)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or_else(|| tz.to_string())
}

/// Strict resolution, without fallback.
pub fn parse_time_zone(tz: &str) -> DomainResult<Tz> {
    canonical_time_zone(tz)
        .parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimeZone(tz.trim().to_string()))
}

/// Resolve an identifier, falling back to [`FALLBACK_TIME_ZONE`] with a warning.
pub fn validate_time_zone(tz: &str) -> Tz {
    match parse_time_zone(tz) {
        Ok(zone) => zone,
        Err(e) => {
            warn!(fallback = FALLBACK_TIME_ZONE.name(), "{}, using fallback", e);
            FALLBACK_TIME_ZONE
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mumbai_becomes_kolkata() {
        assert_eq!(validate_time_zone("Asia/Mumbai").name(), "Asia/Kolkata");
        assert_eq!(canonical_time_zone("Asia/Mumbai"), "Asia/Kolkata");
    }

    #[test]
    fn other_aliases_are_rewritten() {
        assert_eq!(canonical_time_zone("Europe/Kiev"), "Europe/Kyiv");
        assert_eq!(validate_time_zone("Asia/Saigon").name(), "Asia/Ho_Chi_Minh");
    }

    #[test]
    fn valid_zones_pass_through() {
        assert_eq!(validate_time_zone("America/New_York").name(), "America/New_York");
        assert_eq!(canonical_time_zone(" Europe/Paris "), "Europe/Paris");
    }

    #[test]
    fn invalid_zone_falls_back() {
        assert_eq!(validate_time_zone("Mars/Olympus_Mons"), FALLBACK_TIME_ZONE);
        assert_eq!(validate_time_zone(""), FALLBACK_TIME_ZONE);
        assert!(matches!(
            parse_time_zone(" Mars/Olympus_Mons "),
            Err(DomainError::InvalidTimeZone(ref tz)) if tz == "Mars/Olympus_Mons"
        ));
        assert_eq!(parse_time_zone("Asia/Calcutta").unwrap().name(), "Asia/Kolkata");
    }
}
