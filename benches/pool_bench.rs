use criterion::{criterion_group, criterion_main, Criterion};
use mcpool::{approx_pi, ThreadPool, WorkerPool};

const TASKS: u32 = 16;
const SAMPLES: u32 = 10_000;

fn fan_out_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");

    for threads in [1u32, 2, 4] {
        group.bench_function(format!("{threads}_workers"), |b| {
            b.iter_batched(
                || WorkerPool::new(threads).unwrap(),
                |pool| {
                    let handles: Vec<_> = (0..TASKS)
                        .map(|seed| pool.submit(move || approx_pi(SAMPLES, u64::from(seed))).unwrap())
                        .collect();
                    for handle in handles {
                        handle.wait().unwrap();
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn sampler_bench(c: &mut Criterion) {
    c.bench_function("approx_pi_100k", |b| {
        b.iter(|| approx_pi(100_000, 42));
    });
}

criterion_group!(benches, fan_out_bench, sampler_bench);
criterion_main!(benches);
