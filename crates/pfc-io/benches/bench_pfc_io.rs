use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pfc_codec::PrefixCodec;
use pfc_io::{encode_lines, parse_records, write_records};

fn generate_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("line {i} of plain text destined for the aligner"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_records(c: &mut Criterion) {
    let text = generate_text(500);
    let dict = PrefixCodec::dna().build_dictionary(&text).unwrap();
    let records = encode_lines(&text, &dict).unwrap();
    let framed = write_records(&records);

    c.bench_function("write_records_500", |b| {
        b.iter(|| black_box(write_records(black_box(&records))))
    });
    c.bench_function("parse_records_500", |b| {
        b.iter(|| black_box(parse_records(black_box(&framed)).unwrap()))
    });
}

criterion_group!(benches, bench_records);
criterion_main!(benches);
