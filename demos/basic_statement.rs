use playbill::core::*;
use playbill::statement::statement;

fn main() {
    // Catalog of plays the theater can bill for
    let catalog = CatalogBuilder::new()
        .add_play("hamlet", Play::new("Hamlet", PlayCategory::Tragedy))
        .add_play("as-like", Play::new("As You Like It", PlayCategory::Comedy))
        .add_play("othello", Play::new("Othello", PlayCategory::Tragedy))
        .build()
        .expect("catalog ids are unique");

    // One customer's performances for the billing period
    let invoice = InvoiceBuilder::new("BigCo")
        .add_performance("hamlet", 55)
        .add_performance("as-like", 35)
        .add_performance("othello", 40)
        .build();

    let text = statement(&invoice, &catalog).expect("all plays are in the catalog");
    print!("{text}");
}
