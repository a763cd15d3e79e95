use super::error::StatementError;
use super::types::*;

/// Builder for constructing a [`Catalog`] with unique play identifiers.
///
/// ```
/// use playbill::core::*;
///
/// let catalog = CatalogBuilder::new()
///     .add_play("hamlet", Play::new("Hamlet", PlayCategory::Tragedy))
///     .add_play("as-like", Play::new("As You Like It", PlayCategory::Comedy))
///     .build()
///     .unwrap();
///
/// assert!(catalog.contains("hamlet"));
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    entries: Vec<(String, Play)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_play(mut self, play_id: impl Into<String>, play: Play) -> Self {
        self.entries.push((play_id.into(), play));
        self
    }

    /// Build the catalog, rejecting duplicate play identifiers.
    pub fn build(self) -> Result<Catalog, StatementError> {
        let mut catalog = Catalog::new();
        for (play_id, play) in self.entries {
            if catalog.insert(play_id.clone(), play).is_some() {
                return Err(StatementError::Builder(format!(
                    "duplicate play id: {play_id}"
                )));
            }
        }
        Ok(catalog)
    }
}

/// Builder for an [`Invoice`].
///
/// ```
/// use playbill::core::*;
///
/// let invoice = InvoiceBuilder::new("BigCo")
///     .add_performance("hamlet", 55)
///     .build();
///
/// assert_eq!(invoice.performances.len(), 1);
/// ```
pub struct InvoiceBuilder {
    customer: String,
    performances: Vec<Performance>,
}

impl InvoiceBuilder {
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            performances: Vec::new(),
        }
    }

    pub fn add_performance(mut self, play_id: impl Into<String>, audience: u32) -> Self {
        self.performances.push(Performance::new(play_id, audience));
        self
    }

    pub fn build(self) -> Invoice {
        Invoice {
            customer: self.customer,
            performances: self.performances,
        }
    }
}
