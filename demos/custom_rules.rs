use playbill::core::*;
use playbill::statement::statement_with;

fn main() {
    let catalog = CatalogBuilder::new()
        .add_play("hamlet", Play::new("Hamlet", PlayCategory::Tragedy))
        .add_play("as-like", Play::new("As You Like It", PlayCategory::Comedy))
        .build()
        .expect("catalog ids are unique");

    let invoice = InvoiceBuilder::new("BigCo")
        .add_performance("hamlet", 55)
        .add_performance("as-like", 35)
        .build();

    // Festival tariff: cheaper tragedies, doubled comedy overage
    let festival = PricingRules {
        tragedy_base: 25_000,
        comedy_overage_flat: 20_000,
        ..PricingRules::default()
    };

    for (label, rules) in [("House", PricingRules::default()), ("Festival", festival)] {
        let calc = StatementCalculator::new(rules);
        let text = statement_with(&calc, &invoice, &catalog).expect("catalog is complete");
        println!("--- {label} tariff ---");
        print!("{text}");
        println!();
    }
}
