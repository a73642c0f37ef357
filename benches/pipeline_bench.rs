// In numshuffle-core/benches/pipeline_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use numshuffle::kernels::{anchor_delta, transpose};
use numshuffle::{Codec, PipelineKind, TransposeMode};

// --- Mock Data Generation ---

/// A slowly drifting sensor-like series: the delta pipeline's best case.
fn generate_smooth_f64(len: usize) -> Vec<f64> {
    (0..len).map(|i| 1_000.0 + (i as f64 * 0.01).sin() * 5.0).collect()
}

/// Values drawn from a small set: the dictionary pipeline's best case.
fn generate_low_cardinality_i64(len: usize) -> Vec<i64> {
    (0..len).map(|i| ((i * 7919) % 37) as i64 * 1_000_003).collect()
}

// --- Benchmark Suite ---

const BENCH_LEN: usize = 65536;

fn bench_kernels(c: &mut Criterion) {
    let smooth = generate_smooth_f64(BENCH_LEN);
    let mut planes = Vec::new();
    transpose::transpose(&smooth, &mut planes);

    let mut group = c.benchmark_group("Kernels");
    group.throughput(Throughput::Bytes((BENCH_LEN * 8) as u64));

    group.bench_function("transpose f64", |b| {
        let mut out = Vec::new();
        b.iter(|| transpose::transpose(black_box(&smooth), &mut out))
    });
    group.bench_function("reverse_transpose f64", |b| {
        let mut out: Vec<f64> = Vec::new();
        b.iter(|| transpose::reverse_transpose(black_box(&planes), &mut out, TransposeMode::Strict))
    });
    group.bench_function("anchor_delta encode f64", |b| {
        b.iter(|| anchor_delta::encode_to_vec(black_box(&smooth)))
    });
    group.finish();
}

fn bench_pipelines(c: &mut Criterion) {
    let smooth = generate_smooth_f64(BENCH_LEN);
    let categorical = generate_low_cardinality_i64(BENCH_LEN);
    let mut codec = Codec::default();

    let mut group = c.benchmark_group("Pipelines");
    group.throughput(Throughput::Bytes((BENCH_LEN * 8) as u64));

    for kind in PipelineKind::ALL {
        let smooth_frame = codec.compress(kind, &smooth).unwrap();
        let categorical_frame = codec.compress(kind, &categorical).unwrap();

        group.bench_function(format!("compress {:?} (smooth f64)", kind), |b| {
            b.iter(|| codec.compress(kind, black_box(&smooth)))
        });
        group.bench_function(format!("decompress {:?} (smooth f64)", kind), |b| {
            b.iter(|| codec.decompress::<f64>(kind, black_box(&smooth_frame)))
        });
        group.bench_function(format!("compress {:?} (categorical i64)", kind), |b| {
            b.iter(|| codec.compress(kind, black_box(&categorical)))
        });
        group.bench_function(format!("decompress {:?} (categorical i64)", kind), |b| {
            b.iter(|| codec.decompress::<i64>(kind, black_box(&categorical_frame)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kernels, bench_pipelines);
criterion_main!(benches);
