use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use flakeid::{
    Error, Generator, Sequential, Snowflake, SystemClock, TimeSource, constant, overflow_checked,
    shifted,
};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

#[derive(Debug)]
struct FixedMockTime {
    millis: i64,
}

impl TimeSource for FixedMockTime {
    fn current_millis(&self) -> i64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded). Matches the per-tick sequence capacity.
const TOTAL_IDS: usize = 4096;

/// Spins through sequence exhaustion until the clock moves on.
fn next_id<G: Generator>(generator: &G) -> i64 {
    loop {
        match generator.generate(1) {
            Ok(id) => break id,
            Err(Error::Overflow { .. }) => core::hint::spin_loop(),
            Err(e) => panic!("generator error: {e}"),
        }
    }
}

/// Benchmarks a hot path where every call succeeds.
fn bench_generator<G: Generator>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> G,
) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.generate(1).unwrap());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks a generator on the wall clock, spinning when a tick is
/// exhausted.
fn bench_generator_yield<G: Generator>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> G,
) {
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let generator = generator_factory();
            let start = Instant::now();

            for _ in 0..iters {
                for _ in 0..TOTAL_IDS {
                    black_box(next_id(&generator));
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks one shared generator contended by several threads.
fn bench_generator_threaded<G: Generator + Send + Sync>(
    c: &mut Criterion,
    group_name: &str,
    generator_factory: impl Fn() -> G,
) {
    let threads = num_cpus::get().clamp(2, 8);
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements((TOTAL_IDS * threads) as u64));

    group.bench_function(format!("threads/{threads}/elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let generator = Arc::new(generator_factory());
            let barrier = Barrier::new(threads + 1);

            scope(|s| {
                for _ in 0..threads {
                    let generator = Arc::clone(&generator);
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        for _ in 0..iters {
                            for _ in 0..TOTAL_IDS {
                                black_box(next_id(&generator));
                            }
                        }
                    });
                }

                barrier.wait();
                let start = Instant::now();
                // Leaving the scope joins every worker.
                start
            })
            .elapsed()
        });
    });

    group.finish();
}

fn benchmarks(c: &mut Criterion) {
    bench_generator(c, "sequential", Sequential::new);
    bench_generator(c, "node_field", || shifted(12, overflow_checked(10, constant(3))));
    bench_generator(c, "snowflake/fixed", || {
        Snowflake::with_time(1, FixedMockTime { millis: 42 })
    });
    bench_generator_yield(c, "snowflake/system_clock", || {
        Snowflake::with_time(1, SystemClock::default())
    });
    bench_generator_threaded(c, "snowflake/system_clock/threaded", || Snowflake::new(1));
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
