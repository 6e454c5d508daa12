use cert_is::rules::{check_ranges, check_types, check_values, Membership};
use cert_is::{TypeSpec, Value};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn subjects(count: usize) -> Vec<Value> {
    (0..count).map(|n| Value::from(n as f64)).collect()
}

fn value_rule_bench(c: &mut Criterion) {
    let subjects = subjects(1_000);
    let valid: Vec<Value> = (0..1_000).map(|n| Value::from(n as f64)).collect();
    c.bench_function("check_values_1k", |b| {
        b.iter(|| {
            let result = check_values(&subjects, Membership::AnyOf(&valid), None);
            black_box(result).unwrap();
        });
    });
}

fn type_rule_bench(c: &mut Criterion) {
    let subjects = subjects(1_000);
    let valid_types = vec![TypeSpec::from("string"), TypeSpec::from("number")];
    c.bench_function("check_types_1k", |b| {
        b.iter(|| {
            let result = check_types(&subjects, Membership::AnyOf(&valid_types), None);
            black_box(result).unwrap();
        });
    });
}

fn range_rule_bench(c: &mut Criterion) {
    let subjects = subjects(1_000);
    let lower = Value::from(-1.0);
    let upper = Value::from(1_000.0);
    c.bench_function("check_ranges_1k", |b| {
        b.iter(|| {
            let result = check_ranges(&subjects, &lower, &upper, false, false, None);
            black_box(result).unwrap();
        });
    });
}

criterion_group!(benches, value_rule_bench, type_rule_bench, range_rule_bench);
criterion_main!(benches);
