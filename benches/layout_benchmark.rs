//! Conversion throughput benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use markdeck::{to_deck, Block, ConvertOptions, Document, Inline, ListItem, TableCell, TableRow};

fn sample_document(sections: usize) -> Document {
    let mut doc = Document::new();
    for i in 0..sections {
        doc.push(Block::heading(1, vec![Inline::text(format!("Section {i}"))]));
        doc.push(Block::paragraph(vec![
            Inline::text("Intro with "),
            Inline::bold(vec![Inline::text("bold")]),
            Inline::text(" and "),
            Inline::code("inline code"),
        ]));
        doc.push(Block::List {
            ordered: true,
            items: (0..5).map(|n| ListItem::text(format!("item {n}"))).collect(),
        });
        doc.push(Block::code(
            Some("bash"),
            "for f in *.log; do\n  grep -c ERROR \"$f\"\ndone",
        ));
        doc.push(Block::Table {
            rows: vec![
                TableRow::header(vec![TableCell::text("name"), TableCell::text("count")]),
                TableRow::from_strings(["alpha", "3"]),
                TableRow::from_strings(["beta", "7"]),
            ],
        });
    }
    doc
}

fn bench_convert(c: &mut Criterion) {
    let options = ConvertOptions::default();
    let small = sample_document(5);
    let large = sample_document(100);

    c.bench_function("convert_5_sections", |b| {
        b.iter(|| to_deck(black_box(&small), &options).unwrap())
    });
    c.bench_function("convert_100_sections", |b| {
        b.iter(|| to_deck(black_box(&large), &options).unwrap())
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
