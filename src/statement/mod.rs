//! Plain-text statement rendering.
//!
//! Produces the fixed statement layout:
//!
//! ```text
//! Statement for BigCo
//!   Hamlet: $650.00 (55 seats)
//! Amount owed is $650.00
//! You earned 25 credits
//! ```
//!
//! Rendering either returns the complete statement or an error — never a
//! partial string.

pub mod currency;

use crate::core::{Catalog, Invoice, StatementCalculator, StatementError};

use currency::format_usd;

/// Render a statement under the default [`PricingRules`](crate::core::PricingRules).
///
/// ```
/// use playbill::core::*;
/// use playbill::statement::statement;
///
/// let catalog = CatalogBuilder::new()
///     .add_play("hamlet", Play::new("Hamlet", PlayCategory::Tragedy))
///     .build()
///     .unwrap();
/// let invoice = InvoiceBuilder::new("BigCo")
///     .add_performance("hamlet", 55)
///     .build();
///
/// let text = statement(&invoice, &catalog).unwrap();
/// assert_eq!(
///     text,
///     "Statement for BigCo\n\
///      \x20 Hamlet: $650.00 (55 seats)\n\
///      Amount owed is $650.00\n\
///      You earned 25 credits\n"
/// );
/// ```
pub fn statement(invoice: &Invoice, catalog: &Catalog) -> Result<String, StatementError> {
    statement_with(&StatementCalculator::default(), invoice, catalog)
}

/// Render a statement under a caller-supplied calculator.
///
/// One line per performance in invoice order, then the amount owed and the
/// volume credits earned. Every line is newline-terminated, the last one
/// included.
pub fn statement_with(
    calculator: &StatementCalculator,
    invoice: &Invoice,
    catalog: &Catalog,
) -> Result<String, StatementError> {
    let mut out = String::new();
    out.push_str(&format!("Statement for {}\n", invoice.customer));

    let mut total_amount = 0i64;
    let mut volume_credits = 0i64;

    for performance in &invoice.performances {
        let play = catalog.play(&performance.play_id)?;
        let amount = calculator.amount(performance, catalog)?;
        volume_credits += calculator.volume_credits(performance, catalog)?;

        out.push_str(&format!(
            "  {}: {} ({} seats)\n",
            play.name,
            format_usd(amount),
            performance.audience
        ));
        total_amount += amount;
    }

    out.push_str(&format!("Amount owed is {}\n", format_usd(total_amount)));
    out.push_str(&format!("You earned {volume_credits} credits\n"));
    Ok(out)
}
