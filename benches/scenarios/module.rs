//! Benchmarks for a full module frame: param decode, port gather, engine, lights.

use std::hint::black_box;

use binary_g1::{
    io::InputPort,
    module::{BinaryModule, ParamId},
};
use criterion::Criterion;

fn patched<const N: usize>() -> BinaryModule<N> {
    let mut module = BinaryModule::<N>::new();
    module.set_param(ParamId::FunctionAb1, 2.0);
    module.set_param(ParamId::FunctionAb2, 4.0);
    for channel in 0..N {
        let _ = module.patch(InputPort::A, channel, if channel % 2 == 0 { 10.0 } else { 0.0 });
        if channel % 4 != 3 {
            let _ = module.patch(InputPort::B, channel, 5.0);
        }
    }
    module.set_default(InputPort::B, 10.0);
    module
}

pub fn bench_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/module");

    let mut small = patched::<4>();
    group.bench_function("process/4", |b| {
        b.iter(|| {
            small.process();
            black_box(small.outputs()[0])
        })
    });

    let mut panel = patched::<16>();
    group.bench_function("process/16", |b| {
        b.iter(|| {
            panel.process();
            black_box(panel.outputs()[0])
        })
    });

    let mut large = patched::<64>();
    group.bench_function("process/64", |b| {
        b.iter(|| {
            large.process();
            black_box(large.outputs()[0])
        })
    });

    group.finish();
}
