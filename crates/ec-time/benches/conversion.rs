use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ec_time::{ethiopian_to_gregorian, gregorian_to_ethiopian, EthiopianDate};

fn conversion_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("ethiopian_to_gregorian", |b| {
        b.iter(|| ethiopian_to_gregorian(black_box(2016), black_box(8), black_box(27)))
    });

    group.bench_function("gregorian_to_ethiopian", |b| {
        b.iter(|| gregorian_to_ethiopian(black_box(2024), black_box(5), black_box(5)))
    });

    group.finish();
}

fn arithmetic_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let Ok(start) = EthiopianDate::new(2016, 1, 1) else {
        return;
    };

    group.bench_function("add_days/small", |b| {
        b.iter(|| black_box(start).add_days(black_box(69)))
    });

    group.bench_function("add_days/large", |b| {
        b.iter(|| black_box(start).add_days(black_box(-700_000)))
    });

    group.bench_function("add_months", |b| {
        b.iter(|| black_box(start).add_months(black_box(130)))
    });

    group.bench_function("diff_in_months", |b| {
        let end = EthiopianDate::new(2117, 13, 5).unwrap_or(start);
        b.iter(|| black_box(end).diff_in_months(black_box(&start)))
    });

    group.finish();
}

criterion_group!(benches, conversion_benches, arithmetic_benches);
criterion_main!(benches);
