/* Benchmarks for the constant table.  Exercises the one hot path a
 * consumer has: resolving names to values. */

use criterion::{criterion_group, criterion_main, Criterion};

use std::time::Duration;

pub fn run_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("table basics");

    // Reduce the time to reduce disk space needed and go faster.
    group.measurement_time(Duration::from_secs(3));
    group.warm_up_time(Duration::from_secs(1));

    // Touch the table once so initialization is not measured.
    inetdefs::table::lookup("AF_INET").unwrap();

    group.bench_function("lookup hit (10K)", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                inetdefs::table::lookup("AF_INET").unwrap();
                inetdefs::table::lookup("SOL_IP").unwrap();
                inetdefs::table::lookup("CLOCK_MONOTONIC").unwrap();
                inetdefs::table::lookup("IPV6_TCLASS").unwrap();
                inetdefs::table::lookup("SOMAXCONN").unwrap();
                inetdefs::table::lookup("STA_RONLY").unwrap();
                inetdefs::table::lookup("INADDR_LOOPBACK").unwrap();
                inetdefs::table::lookup("__SIZEOF_PTHREAD_MUTEX_T").unwrap();
                inetdefs::table::lookup("IPPROTO_TCP").unwrap();
                inetdefs::table::lookup("IPPORT_ECHO").unwrap();
            }
        })
    });

    group.bench_function("lookup miss (1K)", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                let _ = inetdefs::table::lookup("AF_NO_SUCH_FAMILY");
            }
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmark);
criterion_main!(benches);
