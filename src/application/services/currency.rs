//! Currency conversion and the admin money settings

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::currency::round_half_up;
use crate::domain::{
    DomainError, DomainResult, HotelSettings, Module, ModuleAccessTable, RateTable, User,
};

/// Upper bound for `HotelSettings::decimal_places`
pub const MAX_SUMMARY_DECIMAL_PLACES: u32 = 8;

/// Converts and formats amounts against a rate table and the hotel settings
#[derive(Debug, Clone)]
pub struct CurrencyService {
    rates: RateTable,
    settings: HotelSettings,
}

impl CurrencyService {
    /// Both settings currencies must exist in the table.
    pub fn new(rates: RateTable, settings: HotelSettings) -> DomainResult<Self> {
        rates.get(&settings.base_currency)?;
        rates.get(&settings.display_currency)?;
        check_decimal_places(settings.decimal_places)?;
        Ok(Self { rates, settings })
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn settings(&self) -> &HotelSettings {
        &self.settings
    }

    pub fn display_currency(&self) -> &str {
        &self.settings.display_currency
    }

    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> DomainResult<Decimal> {
        self.rates.convert(amount, from, to)
    }

    pub fn to_display(&self, amount: Decimal, from: &str) -> DomainResult<Decimal> {
        self.rates.convert(amount, from, &self.settings.display_currency)
    }

    pub fn format(&self, amount: Decimal, code: &str) -> DomainResult<String> {
        self.rates.format_amount(amount, code)
    }

    /// Convert into the display currency and render it.
    pub fn format_in_display(&self, amount: Decimal, from: &str) -> DomainResult<String> {
        let converted = self.to_display(amount, from)?;
        self.format(converted, &self.settings.display_currency)
    }

    /// Round an aggregated display-currency amount to the settings'
    /// decimal places.
    pub fn summary_amount(&self, amount: Decimal) -> Decimal {
        round_half_up(amount, self.settings.decimal_places)
    }

    /// Render an aggregated display-currency amount, e.g. `"155.00 USD"`.
    pub fn format_summary(&self, amount: Decimal) -> String {
        format!(
            "{:.*} {}",
            self.settings.decimal_places as usize,
            self.summary_amount(amount),
            self.settings.display_currency
        )
    }

    // ── Admin configuration ─────────────────────────────────────

    /// Replace the money settings. Only roles that can open the admin
    /// module may do this.
    pub fn update_settings(&mut self, actor: &User, settings: HotelSettings) -> DomainResult<&HotelSettings> {
        if !ModuleAccessTable::can_access(actor.role(), Module::Admin) {
            warn!(user = %actor.username, role = %actor.role(), "Settings change refused");
            return Err(DomainError::AccessDenied {
                role: actor.role().to_string(),
                module: Module::Admin.to_string(),
            });
        }

        check_decimal_places(settings.decimal_places)?;

        let base = self.rates.get(&settings.base_currency)?.code.clone();
        let display = self.rates.get(&settings.display_currency)?.code.clone();
        if base != self.rates.base() {
            return Err(DomainError::Validation(format!(
                "Base currency must match the rate table base {}",
                self.rates.base()
            )));
        }

        self.settings = HotelSettings {
            base_currency: base,
            display_currency: display,
            decimal_places: settings.decimal_places,
        };
        info!(
            user = %actor.username,
            display_currency = %self.settings.display_currency,
            "Hotel currency settings updated"
        );
        Ok(&self.settings)
    }
}

fn check_decimal_places(decimal_places: u32) -> DomainResult<()> {
    if decimal_places > MAX_SUMMARY_DECIMAL_PLACES {
        return Err(DomainError::Validation(format!(
            "Decimal places must be at most {}",
            MAX_SUMMARY_DECIMAL_PLACES
        )));
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::model::tests::{dec, sample_table};
    use crate::domain::{Department, Role, ShiftType};

    fn service() -> CurrencyService {
        CurrencyService::new(sample_table(), HotelSettings::default()).unwrap()
    }

    fn user(role: Role) -> User {
        User::new("Staff", "staff", role, Department::Management, ShiftType::Morning)
    }

    #[test]
    fn display_conversion_and_format() {
        let svc = service();
        assert_eq!(svc.to_display(dec("50"), "EUR").unwrap(), dec("55.00"));
        assert_eq!(svc.format_in_display(dec("50"), "eur").unwrap(), "55.00 USD");
    }

    #[test]
    fn only_admin_roles_change_settings() {
        let mut svc = service();
        let settings = HotelSettings {
            display_currency: "eur".into(),
            ..HotelSettings::default()
        };

        let err = svc.update_settings(&user(Role::FrontDesk), settings.clone()).unwrap_err();
        assert!(matches!(err, DomainError::AccessDenied { .. }));
        assert_eq!(svc.display_currency(), "USD");

        svc.update_settings(&user(Role::Admin), settings).unwrap();
        assert_eq!(svc.display_currency(), "EUR");
    }

    #[test]
    fn unknown_currency_in_settings() {
        let mut svc = service();
        let err = svc
            .update_settings(
                &user(Role::Admin),
                HotelSettings {
                    display_currency: "XYZ".into(),
                    ..HotelSettings::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::UnknownCurrency(ref code) if code == "XYZ"));
        assert_eq!(svc.display_currency(), "USD");
    }

    #[test]
    fn summary_precision_follows_settings() {
        let mut svc = service();
        assert_eq!(svc.format_summary(dec("100.49")), "100.49 USD");

        svc.update_settings(
            &user(Role::Admin),
            HotelSettings {
                decimal_places: 0,
                ..HotelSettings::default()
            },
        )
        .unwrap();
        assert_eq!(svc.summary_amount(dec("100.49")), dec("100"));
        assert_eq!(svc.format_summary(dec("100.50")), "101 USD");

        let err = svc
            .update_settings(
                &user(Role::Admin),
                HotelSettings {
                    decimal_places: 30,
                    ..HotelSettings::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(svc.settings().decimal_places, 0);
    }

    #[test]
    fn construction_checks_settings() {
        let settings = HotelSettings {
            display_currency: "CHF".into(),
            ..HotelSettings::default()
        };
        assert!(CurrencyService::new(sample_table(), settings).is_err());
    }
}
