use coinage_core::{Amount, DecimalValue, Formatter, Locale, RoundingMode};
use criterion::{Criterion, criterion_group, criterion_main};
use rust_decimal_macros::dec;
use std::hint::black_box;

fn bench_parsing(c: &mut Criterion) {
    c.bench_function("decimal_parsing", |b| {
        b.iter(|| black_box("123456.789012".parse::<DecimalValue>().unwrap()));
    });
}

fn bench_addition(c: &mut Criterion) {
    c.bench_function("decimal_addition", |b| {
        let x: DecimalValue = "123.456789".parse().unwrap();
        let y: DecimalValue = "987.65".parse().unwrap();
        b.iter(|| black_box(black_box(&x) + black_box(&y)));
    });
}

fn bench_multiplication(c: &mut Criterion) {
    c.bench_function("decimal_multiplication", |b| {
        let x: DecimalValue = "123.456789".parse().unwrap();
        let y: DecimalValue = "9.876543".parse().unwrap();
        b.iter(|| black_box(black_box(&x) * black_box(&y)));
    });
}

fn bench_division(c: &mut Criterion) {
    c.bench_function("decimal_division_non_terminating", |b| {
        let x: DecimalValue = "100".parse().unwrap();
        let y: DecimalValue = "3".parse().unwrap();
        b.iter(|| black_box(black_box(&x).try_div(black_box(&y)).unwrap()));
    });
}

fn bench_rounding(c: &mut Criterion) {
    c.bench_function("decimal_round_half_up", |b| {
        let x: DecimalValue = "1234.56789".parse().unwrap();
        b.iter(|| black_box(black_box(&x).round_to(2, RoundingMode::HalfUp)));
    });
}

fn bench_rust_decimal_interop(c: &mut Criterion) {
    c.bench_function("decimal_from_rust_decimal", |b| {
        let d = dec!(123456.789012);
        b.iter(|| black_box(DecimalValue::from(black_box(d))));
    });
}

fn bench_convert(c: &mut Criterion) {
    c.bench_function("amount_convert_and_round", |b| {
        let amount = Amount::new("20.99", "USD").unwrap();
        b.iter(|| black_box(amount.convert("EUR", black_box("0.91")).unwrap().round()));
    });
}

fn bench_format(c: &mut Criterion) {
    let formatter = Formatter::new(Locale::new("de-CH"));
    let amount = Amount::new("1234567.891", "CHF").unwrap();
    c.bench_function("formatter_format", |b| {
        b.iter(|| black_box(formatter.format(black_box(&amount))));
    });
    c.bench_function("formatter_parse", |b| {
        b.iter(|| black_box(formatter.parse(black_box("CHF 1’234’567.89"), "CHF").unwrap()));
    });
}

criterion_group!(
    benches,
    bench_parsing,
    bench_addition,
    bench_multiplication,
    bench_division,
    bench_rounding,
    bench_rust_decimal_interop,
    bench_convert,
    bench_format,
);
criterion_main!(benches);
