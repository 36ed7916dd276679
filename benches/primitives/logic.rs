//! Benchmarks for the function table.

use std::hint::black_box;

use binary_g1::dsp::logic;
use criterion::Criterion;

pub fn bench_logic(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives/logic");

    // Every selector including the out-of-range fallback, every input pair
    group.bench_function("full_table", |b| {
        b.iter(|| {
            let mut high = 0u32;
            for selector in -1..6 {
                for (a, bb) in [(false, false), (false, true), (true, false), (true, true)] {
                    let out = logic::evaluate(black_box(selector), black_box(a), black_box(bb));
                    high += out as u32;
                }
            }
            high
        })
    });

    group.finish();
}
