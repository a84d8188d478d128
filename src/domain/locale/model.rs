//! UI language, display locale and clock convention

use chrono::Locale;
use serde::{Deserialize, Serialize};

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "hi")]
    Hindi,
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Hindi => "hi",
        }
    }

    pub fn display_locale(&self) -> DisplayLocale {
        match self {
            Self::English => DisplayLocale::EnUs,
            Self::Spanish => DisplayLocale::EsEs,
            Self::French => DisplayLocale::FrFr,
            Self::German => DisplayLocale::DeDe,
            Self::Hindi => DisplayLocale::HiIn,
        }
    }

    /// German screens always show a 24-hour clock.
    pub fn effective_time_format(&self, configured: TimeFormat) -> TimeFormat {
        match self {
            Self::German => TimeFormat::H24,
            _ => configured,
        }
    }
}

/// 12- or 24-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    H12,
    #[serde(rename = "24h")]
    H24,
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::H12
    }
}

/// Locale used for date/time rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLocale {
    EnUs,
    EsEs,
    FrFr,
    DeDe,
    HiIn,
}

impl DisplayLocale {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EsEs => "es-ES",
            Self::FrFr => "fr-FR",
            Self::DeDe => "de-DE",
            Self::HiIn => "hi-IN",
        }
    }

    pub fn chrono_locale(&self) -> Locale {
        match self {
            Self::EnUs => Locale::en_US,
            Self::EsEs => Locale::es_ES,
            Self::FrFr => Locale::fr_FR,
            Self::DeDe => Locale::de_DE,
            Self::HiIn => Locale::hi_IN,
        }
    }

    pub fn short_date_pattern(&self) -> &'static str {
        match self {
            Self::EnUs => "%m/%d/%Y",
            Self::DeDe => "%d.%m.%Y",
            Self::EsEs | Self::FrFr | Self::HiIn => "%d/%m/%Y",
        }
    }

    pub fn long_date_pattern(&self) -> &'static str {
        match self {
            Self::EnUs => "%A, %B %-d, %Y",
            Self::DeDe => "%A, %-d. %B %Y",
            Self::EsEs => "%A, %-d de %B de %Y",
            Self::FrFr | Self::HiIn => "%A %-d %B %Y",
        }
    }

    /// Locales whose chrono data has no AM/PM strings render the hour
    /// only; the marker comes from [`DisplayLocale::day_period`].
    pub fn time_pattern(&self, format: TimeFormat) -> &'static str {
        match (format, self.day_period(0)) {
            (TimeFormat::H24, _) => "%H:%M",
            (TimeFormat::H12, Some(_)) => "%I:%M",
            (TimeFormat::H12, None) => "%I:%M %p",
        }
    }

    /// Day-period marker for a 12-hour clock where chrono has none.
    pub fn day_period(&self, hour: u32) -> Option<&'static str> {
        let pm = hour >= 12;
        match self {
            Self::EsEs => Some(if pm { "p. m." } else { "a. m." }),
            Self::FrFr => Some(if pm { "PM" } else { "AM" }),
            Self::EnUs | Self::DeDe | Self::HiIn => None,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_forces_24h() {
        assert_eq!(Language::German.effective_time_format(TimeFormat::H12), TimeFormat::H24);
        assert_eq!(Language::English.effective_time_format(TimeFormat::H12), TimeFormat::H12);
        assert_eq!(Language::French.effective_time_format(TimeFormat::H24), TimeFormat::H24);
    }

    #[test]
    fn language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Hindi).unwrap(), "\"hi\"");
        let lang: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(lang, Language::German);
        assert_eq!(lang.code(), "de");
        assert_eq!(lang.display_locale().tag(), "de-DE");
    }

    #[test]
    fn twelve_hour_markers() {
        assert_eq!(DisplayLocale::EnUs.time_pattern(TimeFormat::H12), "%I:%M %p");
        assert_eq!(DisplayLocale::EsEs.time_pattern(TimeFormat::H12), "%I:%M");
        assert_eq!(DisplayLocale::EsEs.day_period(14), Some("p. m."));
        assert_eq!(DisplayLocale::FrFr.day_period(2), Some("AM"));
        assert_eq!(DisplayLocale::FrFr.time_pattern(TimeFormat::H24), "%H:%M");
        assert_eq!(DisplayLocale::EnUs.day_period(14), None);
    }

    #[test]
    fn time_format_serializes_as_label() {
        assert_eq!(serde_json::to_string(&TimeFormat::H24).unwrap(), "\"24h\"");
    }
}
