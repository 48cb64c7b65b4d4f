//! Benchmarks for merge throughput.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic templates and datasets.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docmerge::{
    merge_batch, Dataset, Document, MergeOptions, Paragraph, Row, Table, TableCell, TableRow,
};

/// Creates a template with the given number of paragraphs plus a table.
fn create_template(paragraph_count: usize) -> Document {
    let mut doc = Document::new();
    for i in 0..paragraph_count {
        let mut p = Paragraph::new();
        p.add_text(format!("Paragraph {i}: dear «First_Name» "));
        p.add_text("«Last_Name», your balance is «Balance».");
        doc.add_paragraph(p);
    }

    let mut table = Table::new();
    table.add_row(TableRow::new(vec![
        TableCell::text("«First_Name»"),
        TableCell::text("«Balance»"),
    ]));
    doc.add_table(table);
    doc
}

fn create_dataset(row_count: usize) -> Dataset {
    let mut dataset = Dataset::new(["First Name", "Last Name", "Balance"]);
    for i in 0..row_count {
        dataset.add_row(
            Row::new()
                .with("First Name", format!("First{i}"))
                .with("Last Name", format!("Last{i}"))
                .with("Balance", i as i64),
        );
    }
    dataset
}

fn bench_merge_sequential(c: &mut Criterion) {
    let template = create_template(20);
    let dataset = create_dataset(50);
    let options = MergeOptions::default().sequential();

    c.bench_function("merge_50_rows_sequential", |b| {
        b.iter(|| {
            let batch = merge_batch(
                black_box(&template),
                black_box(&dataset),
                "Last Name",
                &options,
            )
            .unwrap();
            black_box(batch.success_count())
        })
    });
}

fn bench_merge_parallel(c: &mut Criterion) {
    let template = create_template(20);
    let dataset = create_dataset(50);
    let options = MergeOptions::default();

    c.bench_function("merge_50_rows_parallel", |b| {
        b.iter(|| {
            let batch = merge_batch(
                black_box(&template),
                black_box(&dataset),
                "Last Name",
                &options,
            )
            .unwrap();
            black_box(batch.success_count())
        })
    });
}

criterion_group!(benches, bench_merge_sequential, bench_merge_parallel);
criterion_main!(benches);
