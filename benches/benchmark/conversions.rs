use crate::common::{configure_criterion, find_user, DomainError};
use criterion::{criterion_group, Criterion};
use maybe_rail::convert::{maybe_to_nullable_result, nullable_result_to_maybe};
use maybe_rail::Maybe;
use std::hint::black_box;

pub fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");

    group.bench_function("nullable_result_round_trip", |b| {
        b.iter(|| {
            let maybe = nullable_result_to_maybe(find_user(black_box(42)));
            black_box(maybe_to_nullable_result(maybe))
        })
    });

    group.bench_function("option_into_maybe", |b| {
        b.iter(|| {
            let maybe: Maybe<u64, DomainError> = black_box(Some(7u64)).into();
            black_box(maybe.ok())
        })
    });

    group.finish();
}

criterion_group! {
    name = conversion_benches;
    config = configure_criterion();
    targets = bench_conversions,
}
