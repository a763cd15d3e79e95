use criterion::{Criterion, black_box, criterion_group, criterion_main};

use playbill::core::*;
use playbill::statement::statement;

fn catalog() -> Catalog {
    CatalogBuilder::new()
        .add_play("hamlet", Play::new("Hamlet", PlayCategory::Tragedy))
        .add_play("as-like", Play::new("As You Like It", PlayCategory::Comedy))
        .add_play("othello", Play::new("Othello", PlayCategory::Tragedy))
        .build()
        .unwrap()
}

fn build_invoice(performances: usize) -> Invoice {
    let ids = ["hamlet", "as-like", "othello"];
    let mut builder = InvoiceBuilder::new("BENCH-BigCo");
    for i in 0..performances {
        builder = builder.add_performance(ids[i % ids.len()], (i % 120) as u32);
    }
    builder.build()
}

fn bench_pricing(c: &mut Criterion) {
    let catalog = catalog();
    let invoice = build_invoice(1000);
    let calc = StatementCalculator::default();

    c.bench_function("total_amount_1000_performances", |b| {
        b.iter(|| black_box(calc.total_amount(black_box(&invoice), black_box(&catalog))));
    });
}

fn bench_statement(c: &mut Criterion) {
    let catalog = catalog();
    let small = build_invoice(3);
    let large = build_invoice(1000);

    c.bench_function("statement_3_performances", |b| {
        b.iter(|| black_box(statement(black_box(&small), black_box(&catalog))));
    });
    c.bench_function("statement_1000_performances", |b| {
        b.iter(|| black_box(statement(black_box(&large), black_box(&catalog))));
    });
}

criterion_group!(benches, bench_pricing, bench_statement);
criterion_main!(benches);
