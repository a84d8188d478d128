//! Revenue totals in the display currency

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::application::services::CurrencyService;
use crate::domain::{Charge, DomainResult, RevenueSource};

/// Per-source and overall revenue, already in one currency
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    pub currency: String,
    pub by_source: BTreeMap<RevenueSource, Decimal>,
    pub total: Decimal,
}

/// Sums charges posted in mixed currencies
pub struct RevenueService<'a> {
    currency: &'a CurrencyService,
}

impl<'a> RevenueService<'a> {
    pub fn new(currency: &'a CurrencyService) -> Self {
        Self { currency }
    }

    /// Each charge is converted to the display currency before it is added.
    /// The sum is rounded to the settings' decimal places.
    pub fn total<'c>(&self, charges: impl IntoIterator<Item = &'c Charge>) -> DomainResult<Decimal> {
        let mut total = Decimal::ZERO;
        for c in charges {
            total += self.currency.to_display(c.amount.amount, &c.amount.currency)?;
        }
        Ok(self.currency.summary_amount(total))
    }

    pub fn summary<'c>(&self, charges: impl IntoIterator<Item = &'c Charge>) -> DomainResult<RevenueSummary> {
        let mut by_source: BTreeMap<RevenueSource, Decimal> = BTreeMap::new();
        let mut total = Decimal::ZERO;
        let mut count = 0usize;

        for charge in charges {
            let converted = self
                .currency
                .to_display(charge.amount.amount, &charge.amount.currency)?;
            *by_source.entry(charge.source).or_insert(Decimal::ZERO) += converted;
            total += converted;
            count += 1;
        }

        for amount in by_source.values_mut() {
            *amount = self.currency.summary_amount(*amount);
        }
        let total = self.currency.summary_amount(total);

        debug!(charges = count, %total, "Revenue summarised");
        Ok(RevenueSummary {
            currency: self.currency.display_currency().to_string(),
            by_source,
            total,
        })
    }

    pub fn format_total<'c>(&self, charges: impl IntoIterator<Item = &'c Charge>) -> DomainResult<String> {
        let total = self.total(charges)?;
        Ok(self.currency.format_summary(total))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::currency::model::tests::{dec, sample_table};
    use crate::domain::{Department, DomainError, HotelSettings, Money, Role, ShiftType, User};

    fn charge(source: RevenueSource, amount: &str, code: &str) -> Charge {
        Charge::new(source, "test", Money::new(dec(amount), code))
    }

    #[test]
    fn converts_each_charge_before_summing() {
        let currency = CurrencyService::new(sample_table(), HotelSettings::default()).unwrap();
        let revenue = RevenueService::new(&currency);
        let charges = vec![
            charge(RevenueSource::Rooms, "100", "USD"),
            charge(RevenueSource::Restaurant, "50", "EUR"),
        ];

        assert_eq!(revenue.total(&charges).unwrap(), dec("155.00"));
        assert_eq!(revenue.format_total(&charges).unwrap(), "155.00 USD");
    }

    #[test]
    fn rounding_happens_per_charge() {
        let currency = CurrencyService::new(sample_table(), HotelSettings::default()).unwrap();
        let revenue = RevenueService::new(&currency);
        // 0.005 EUR is 0.0055 USD, 0.01 each; converting the 0.01 EUR sum gives 0.01
        let charges = vec![
            charge(RevenueSource::Other, "0.005", "EUR"),
            charge(RevenueSource::Other, "0.005", "EUR"),
        ];
        assert_eq!(revenue.total(&charges).unwrap(), dec("0.02"));
    }

    #[test]
    fn breakdown_by_source() {
        let currency = CurrencyService::new(sample_table(), HotelSettings::default()).unwrap();
        let revenue = RevenueService::new(&currency);
        let charges = vec![
            charge(RevenueSource::Rooms, "100", "USD"),
            charge(RevenueSource::Rooms, "10", "EUR"),
            charge(RevenueSource::Banquet, "1000", "JPY"),
        ];
        let summary = revenue.summary(&charges).unwrap();
        assert_eq!(summary.currency, "USD");
        assert_eq!(summary.by_source[&RevenueSource::Rooms], dec("111.00"));
        assert_eq!(summary.by_source[&RevenueSource::Banquet], dec("6.70"));
        assert_eq!(summary.total, dec("117.70"));
        assert!(!summary.by_source.contains_key(&RevenueSource::Restaurant));
    }

    #[test]
    fn totals_use_settings_decimal_places() {
        let mut currency = CurrencyService::new(sample_table(), HotelSettings::default()).unwrap();
        let admin = User::new("Admin", "admin", Role::Admin, Department::Management, ShiftType::Morning);
        currency
            .update_settings(
                &admin,
                HotelSettings {
                    decimal_places: 0,
                    ..HotelSettings::default()
                },
            )
            .unwrap();

        let revenue = RevenueService::new(&currency);
        let charges = vec![
            charge(RevenueSource::Rooms, "100.49", "USD"),
            charge(RevenueSource::Restaurant, "10", "EUR"),
        ];
        assert_eq!(revenue.total(&charges[..1]).unwrap(), dec("100"));
        assert_eq!(revenue.format_total(&charges[..1]).unwrap(), "100 USD");

        let summary = revenue.summary(&charges).unwrap();
        assert_eq!(summary.by_source[&RevenueSource::Restaurant], dec("11"));
        assert_eq!(summary.total, dec("111"));
    }

    #[test]
    fn unknown_currency_fails_whole_total() {
        let currency = CurrencyService::new(sample_table(), HotelSettings::default()).unwrap();
        let revenue = RevenueService::new(&currency);
        let charges = vec![charge(RevenueSource::Rooms, "1", "XXX")];
        assert!(matches!(revenue.total(&charges), Err(DomainError::UnknownCurrency(_))));
    }
}
