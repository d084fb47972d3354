//! Criterion benchmarks for ambient_logger

use ambient_logger::prelude::*;
use ambient_logger::stdlog::DiscardOutput;
use ambient_logger::{bridge, global};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;

// ============================================================================
// Ambient Read Benchmarks
// ============================================================================

fn bench_ambient_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("ambient_reads");
    group.throughput(Throughput::Elements(1));

    group.bench_function("logger", |b| {
        b.iter(|| black_box(global::logger()));
    });

    group.bench_function("sugared", |b| {
        b.iter(|| black_box(global::sugared()));
    });

    group.bench_function("snapshot", |b| {
        b.iter(|| black_box(global::snapshot()));
    });

    group.bench_function("nop_info", |b| {
        b.iter(|| global::logger().info(black_box("discarded")));
    });

    group.finish();
}

// ============================================================================
// Swap Benchmarks
// ============================================================================

fn bench_replace_globals(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_globals");
    group.throughput(Throughput::Elements(1));

    let logger = Arc::new(Logger::nop());

    group.bench_function("replace_and_restore", |b| {
        b.iter(|| global::replace_globals(Arc::clone(&logger)).restore());
    });

    group.finish();
}

// ============================================================================
// Bridge Benchmarks
// ============================================================================

fn bench_bridge(c: &mut Criterion) {
    let mut group = c.benchmark_group("bridge");
    group.throughput(Throughput::Elements(1));

    let direct = StdLog::new(Arc::new(DiscardOutput), "", Flags::STD | Flags::SHORT_FILE);
    group.bench_function("print_direct", |b| {
        b.iter(|| direct.print(black_box("plain line")));
    });

    let mut logger = Logger::new();
    logger.set_min_level(LogLevel::Trace);
    let forwarded = bridge::new_std_log(logger);
    group.bench_function("print_forwarded", |b| {
        b.iter(|| forwarded.print(black_box("forwarded line")));
    });

    let target = Arc::new(Logger::nop());
    group.bench_function("redirect_and_restore", |b| {
        b.iter(|| bridge::redirect(&direct, Arc::clone(&target), LogLevel::Info).restore());
    });

    group.finish();
}

// ============================================================================
// Sugared Logging Benchmarks
// ============================================================================

fn bench_sugared_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("sugared_logging");
    group.throughput(Throughput::Elements(1));

    let sugar = Logger::new().sugar();

    group.bench_function("info", |b| {
        b.iter(|| sugar.info(black_box("message")));
    });

    group.bench_function("infow_two_fields", |b| {
        b.iter(|| {
            sugar.infow(
                black_box("message"),
                [("user_id", FieldValue::from(42)), ("action", "login".into())],
            )
        });
    });

    group.bench_function("infow_filtered", |b| {
        b.iter(|| sugar.debugw(black_box("filtered"), [("k", 1)]));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ambient_reads,
    bench_replace_globals,
    bench_bridge,
    bench_sugared_logging
);
criterion_main!(benches);
