//! Benchmarks for one engine evaluation across all channels.

use std::hint::black_box;

use binary_g1::{
    io::{ChannelInput, ChannelOutput, Port, SharedDefaultInput},
    GateLogicEngine, LogicSettings,
};
use criterion::{BenchmarkId, Criterion};

use crate::CHANNEL_COUNTS;

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");
    let engine = GateLogicEngine::new();
    let defaults = SharedDefaultInput::new(10.0, 0.0);

    for &size in CHANNEL_COUNTS {
        // Mix of patched and unpatched jacks so the fallback path runs too
        let inputs: Vec<ChannelInput> = (0..size)
            .map(|i| {
                let a = if i % 3 == 0 {
                    Port::unpatched()
                } else {
                    Port::patched(if i % 2 == 0 { 10.0 } else { 0.0 })
                };
                ChannelInput::new(a, Port::patched(5.0))
            })
            .collect();
        let mut outputs = vec![ChannelOutput::default(); size];

        // === PLAIN ===
        // AND / XOR, nothing inverted
        let plain = LogicSettings::with_selectors(2, 4);
        group.bench_with_input(BenchmarkId::new("and_xor", size), &size, |b, _| {
            b.iter(|| {
                engine.evaluate(
                    black_box(&inputs),
                    black_box(defaults),
                    black_box(&plain),
                    black_box(&mut outputs),
                )
            })
        });

        // === ALL INVERTED ===
        let inverted = LogicSettings {
            invert_a: true,
            invert_b: true,
            invert_1: true,
            invert_2: true,
            ..LogicSettings::with_selectors(3, 0)
        };
        group.bench_with_input(BenchmarkId::new("inverted", size), &size, |b, _| {
            b.iter(|| {
                engine.evaluate(
                    black_box(&inputs),
                    black_box(defaults),
                    black_box(&inverted),
                    black_box(&mut outputs),
                )
            })
        });
    }

    group.finish();
}
