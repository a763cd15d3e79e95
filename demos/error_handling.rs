use playbill::core::*;
use playbill::statement::statement;

fn main() {
    let catalog = CatalogBuilder::new()
        .add_play("hamlet", Play::new("Hamlet", PlayCategory::Tragedy))
        .build()
        .expect("catalog ids are unique");

    // References a play the catalog does not carry — the whole statement
    // aborts, no partial text is produced.
    let invoice = InvoiceBuilder::new("BigCo")
        .add_performance("hamlet", 55)
        .add_performance("cymbeline", 20)
        .build();

    match statement(&invoice, &catalog) {
        Ok(text) => print!("{text}"),
        Err(StatementError::UnknownPlay(id)) => {
            eprintln!("cannot bill {}: play {id:?} is not in the catalog", invoice.customer);
        }
        Err(err) => eprintln!("statement failed: {err}"),
    }

    // Category tags from external data are validated at the boundary
    match PlayCategory::from_code("pastoral") {
        Ok(category) => println!("parsed category: {category:?}"),
        Err(err) => eprintln!("rejected tag: {err}"),
    }
}
