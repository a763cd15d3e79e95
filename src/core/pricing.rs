//! Per-performance pricing and volume-credit calculation.
//!
//! All amounts are integer minor units (cents). Arithmetic is exact integer
//! multiplication and addition; nothing here rounds or divides.

use serde::{Deserialize, Serialize};

use super::error::StatementError;
use super::types::{Catalog, Invoice, Performance, PlayCategory};

/// Named constant set driving pricing and volume credits.
///
/// The default values are the historical theater tariff. Carrying them as a
/// plain value (rather than globals) lets a caller price the same invoice
/// under alternative tariffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Flat charge for any tragedy performance, in cents.
    pub tragedy_base: i64,
    /// Audience size above which a tragedy charges per extra seat.
    pub tragedy_audience_threshold: u32,
    /// Per-seat surcharge beyond the tragedy threshold, in cents.
    pub tragedy_overage_per_seat: i64,

    /// Flat charge for any comedy performance, in cents.
    pub comedy_base: i64,
    /// Audience size above which a comedy charges its overage.
    pub comedy_audience_threshold: u32,
    /// Flat surcharge once a comedy exceeds its threshold, in cents.
    pub comedy_overage_flat: i64,
    /// Per-seat surcharge beyond the comedy threshold, in cents.
    pub comedy_overage_per_seat: i64,
    /// Unconditional per-seat charge for comedies, in cents.
    pub comedy_per_seat: i64,

    /// Audience size above which volume credits accrue, one per extra seat.
    pub credits_audience_threshold: u32,
    /// Comedies earn one bonus credit per this many seats.
    /// Zero disables the bonus.
    pub comedy_credits_divisor: u32,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            tragedy_base: 40_000,
            tragedy_audience_threshold: 30,
            tragedy_overage_per_seat: 1_000,
            comedy_base: 30_000,
            comedy_audience_threshold: 20,
            comedy_overage_flat: 10_000,
            comedy_overage_per_seat: 500,
            comedy_per_seat: 300,
            credits_audience_threshold: 30,
            comedy_credits_divisor: 5,
        }
    }
}

/// Pure, stateless calculator for amounts (cents) and volume credits.
///
/// ```
/// use playbill::core::*;
///
/// let catalog = CatalogBuilder::new()
///     .add_play("hamlet", Play::new("Hamlet", PlayCategory::Tragedy))
///     .build()
///     .unwrap();
/// let performance = Performance::new("hamlet", 55);
///
/// let calc = StatementCalculator::default();
/// assert_eq!(calc.amount(&performance, &catalog).unwrap(), 65_000);
/// assert_eq!(calc.volume_credits(&performance, &catalog).unwrap(), 25);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementCalculator {
    rules: PricingRules,
}

impl StatementCalculator {
    pub fn new(rules: PricingRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Charge for one performance, in cents.
    ///
    /// Fails with [`StatementError::UnknownPlay`] if the performance
    /// references a play absent from the catalog.
    pub fn amount(
        &self,
        performance: &Performance,
        catalog: &Catalog,
    ) -> Result<i64, StatementError> {
        let play = catalog.play(&performance.play_id)?;
        let audience = performance.audience;
        let rules = &self.rules;

        let amount = match play.category {
            PlayCategory::Tragedy => {
                let mut amount = rules.tragedy_base;
                if audience > rules.tragedy_audience_threshold {
                    amount += rules.tragedy_overage_per_seat
                        * i64::from(audience - rules.tragedy_audience_threshold);
                }
                amount
            }
            PlayCategory::Comedy => {
                let mut amount = rules.comedy_base;
                if audience > rules.comedy_audience_threshold {
                    amount += rules.comedy_overage_flat
                        + rules.comedy_overage_per_seat
                            * i64::from(audience - rules.comedy_audience_threshold);
                }
                amount += rules.comedy_per_seat * i64::from(audience);
                amount
            }
        };
        Ok(amount)
    }

    /// Volume credits earned by one performance.
    ///
    /// Base credits accrue one per seat beyond the credits threshold;
    /// comedies add one bonus credit per `comedy_credits_divisor` seats.
    pub fn volume_credits(
        &self,
        performance: &Performance,
        catalog: &Catalog,
    ) -> Result<i64, StatementError> {
        let play = catalog.play(&performance.play_id)?;
        let audience = performance.audience;
        let rules = &self.rules;

        let mut credits =
            i64::from(audience.saturating_sub(rules.credits_audience_threshold));
        if play.category == PlayCategory::Comedy {
            // A zero divisor means the tariff grants no comedy bonus.
            let bonus = audience.checked_div(rules.comedy_credits_divisor).unwrap_or(0);
            credits += i64::from(bonus);
        }
        Ok(credits)
    }

    /// Sum of [`amount`](Self::amount) over the invoice, in performance order.
    pub fn total_amount(&self, invoice: &Invoice, catalog: &Catalog) -> Result<i64, StatementError> {
        let mut total = 0i64;
        for performance in &invoice.performances {
            total += self.amount(performance, catalog)?;
        }
        Ok(total)
    }

    /// Sum of [`volume_credits`](Self::volume_credits) over the invoice.
    pub fn total_volume_credits(
        &self,
        invoice: &Invoice,
        catalog: &Catalog,
    ) -> Result<i64, StatementError> {
        let mut total = 0i64;
        for performance in &invoice.performances {
            total += self.volume_credits(performance, catalog)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CatalogBuilder, Play};

    fn catalog() -> Catalog {
        CatalogBuilder::new()
            .add_play("hamlet", Play::new("Hamlet", PlayCategory::Tragedy))
            .add_play("as-like", Play::new("As You Like It", PlayCategory::Comedy))
            .build()
            .unwrap()
    }

    #[test]
    fn tragedy_at_threshold_charges_base_only() {
        let calc = StatementCalculator::default();
        let perf = Performance::new("hamlet", 30);
        assert_eq!(calc.amount(&perf, &catalog()).unwrap(), 40_000);
    }

    #[test]
    fn comedy_at_threshold_has_no_overage() {
        let calc = StatementCalculator::default();
        let perf = Performance::new("as-like", 20);
        // 30000 + 300 * 20
        assert_eq!(calc.amount(&perf, &catalog()).unwrap(), 36_000);
    }

    #[test]
    fn credits_never_underflow_on_small_audiences() {
        let calc = StatementCalculator::default();
        let perf = Performance::new("hamlet", 0);
        assert_eq!(calc.volume_credits(&perf, &catalog()).unwrap(), 0);
    }

    #[test]
    fn zero_credits_divisor_disables_the_comedy_bonus() {
        let rules = PricingRules {
            comedy_credits_divisor: 0,
            ..PricingRules::default()
        };
        let calc = StatementCalculator::new(rules);
        let perf = Performance::new("as-like", 35);
        // base credits only: max(35 - 30, 0)
        assert_eq!(calc.volume_credits(&perf, &catalog()).unwrap(), 5);
    }

    #[test]
    fn custom_rules_flow_through() {
        let rules = PricingRules {
            tragedy_base: 10_000,
            ..PricingRules::default()
        };
        let calc = StatementCalculator::new(rules);
        let perf = Performance::new("hamlet", 10);
        assert_eq!(calc.amount(&perf, &catalog()).unwrap(), 10_000);
    }
}
