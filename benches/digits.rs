//! Benchmarks for digit counting, rounded division, and power caches

extern crate criterion;
extern crate bigint_ext;
extern crate oorandom;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use bigint_ext::num_bigint::BigInt;
use bigint_ext::{count_digits, count_digits_and_trailing_zeros, divide, pow_cache, RoundingMode};

mod common;
use common::*;

criterion_main!(
    digits,
    division,
);

criterion_group!(
    name = digits;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(5))
                       .sample_size(300);
    targets =
        bench_count_digits,
        bench_trailing_zeros,
        bench_pow_cache,
);

criterion_group!(
    name = division;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        bench_divide,
);


fn bench_count_digits(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_digits");

    for &limbs in [1usize, 4, 32, 256].iter() {
        let values = random_bigints(0x1f63, 200, limbs, 1);
        group.bench_with_input(BenchmarkId::from_parameter(limbs), &values, |b, values| {
            let mut iter = RandomIterator::new(values);
            b.iter(|| black_box(count_digits(iter.next())))
        });
    }

    group.finish();
}

fn bench_trailing_zeros(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_digits_and_trailing_zeros");

    for &limbs in [1usize, 4, 32, 256].iter() {
        let values = random_bigints(0x9a08, 200, limbs, 80);
        group.bench_with_input(BenchmarkId::from_parameter(limbs), &values, |b, values| {
            let mut iter = RandomIterator::new(values);
            b.iter(|| black_box(count_digits_and_trailing_zeros(iter.next())))
        });

        group.bench_with_input(BenchmarkId::new("to_string", limbs), &values, |b, values| {
            let mut iter = RandomIterator::new(values);
            b.iter(|| {
                let s = iter.next().to_string();
                black_box(s.len() - s.trim_end_matches('0').len())
            })
        });
    }

    group.finish();
}

fn bench_pow_cache(c: &mut Criterion) {
    let cache = match pow_cache::get_cache(10, 4096) {
        Ok(cache) => cache,
        Err(err) => panic!("{}", err),
    };
    cache.get(4095);

    let mut rng = oorandom::Rand32::new(7);
    let exponents: Vec<usize> = (0..1000).map(|_| rng.rand_range(0..4096) as usize).collect();

    c.bench_function("pow_cache_hit", |b| {
        let mut iter = RandomIterator::new(&exponents);
        b.iter(|| black_box(cache.get(*iter.next()).bits()))
    });

    c.bench_function("pow_uncached", |b| {
        let mut iter = RandomIterator::new(&exponents);
        b.iter(|| black_box(BigInt::from(10).pow(*iter.next() as u32).bits()))
    });
}

fn bench_divide(c: &mut Criterion) {
    let dividends = random_bigints(0x5eed, 100, 16, 40);
    let divisors = random_bigints(0xd1f5, 100, 5, 10);

    for mode in [RoundingMode::ToZero, RoundingMode::MidpointToEven, RoundingMode::AwayFromZero].iter() {
        let name = format!("divide/{}", mode);
        c.bench_function(&name, |b| {
            let mut n = RandomIterator::new_with_seed(&dividends, 1);
            let mut d = RandomIterator::new_with_seed(&divisors, 2);
            b.iter(|| black_box(divide(n.next(), d.next(), *mode)))
        });
    }
}
