use std::borrow::Cow;

use chrono::NaiveTime;
use validator::{ValidationError, ValidationErrors};

pub fn validate_pagination(page: Option<u32>, limit: Option<u32>) -> (u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(20).clamp(1, 100);
    (page, limit)
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// `HH:MM` on a 24-hour clock, e.g. a check-in time.
pub fn validate_hhmm(value: &str) -> Result<(), ValidationError> {
    if value.len() == 5 && NaiveTime::parse_from_str(value, "%H:%M").is_ok() {
        Ok(())
    } else {
        Err(invalid("hhmm", "time must be HH:MM"))
    }
}

/// `#RGB` or `#RRGGBB`.
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    let Some(hex) = value.strip_prefix('#') else {
        return Err(invalid("hex_color", "color must start with #"));
    };
    if matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(invalid("hex_color", "color must be #RGB or #RRGGBB"))
    }
}

/// Three ASCII letters, as in ISO 4217.
pub fn validate_currency_code(value: &str) -> Result<(), ValidationError> {
    if value.len() == 3 && value.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(invalid("currency_code", "currency must be a 3-letter code"))
    }
}

/// Flatten validator output into one line, `field: message; field: message`.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, msg)
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_is_clamped() {
        assert_eq!(validate_pagination(None, None), (1, 20));
        assert_eq!(validate_pagination(Some(0), Some(500)), (1, 100));
        assert_eq!(validate_pagination(Some(3), Some(0)), (3, 1));
    }

    #[test]
    fn hhmm() {
        assert!(validate_hhmm("15:00").is_ok());
        assert!(validate_hhmm("00:30").is_ok());
        assert!(validate_hhmm("24:00").is_err());
        assert!(validate_hhmm("9:00").is_err());
        assert!(validate_hhmm("15:00:00").is_err());
    }

    #[test]
    fn hex_color() {
        assert!(validate_hex_color("#1a2b3c").is_ok());
        assert!(validate_hex_color("#fff").is_ok());
        assert!(validate_hex_color("1a2b3c").is_err());
        assert!(validate_hex_color("#12345").is_err());
        assert!(validate_hex_color("#gggggg").is_err());
    }

    #[test]
    fn currency_code() {
        assert!(validate_currency_code("USD").is_ok());
        assert!(validate_currency_code("usd").is_ok());
        assert!(validate_currency_code("US").is_err());
        assert!(validate_currency_code("U5D").is_err());
    }
}
