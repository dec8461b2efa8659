extern crate criterion;

use criterion::{criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration, Throughput};

use lzav::{compress, compress_bound, compress_into, decompress_into};

/// Synthetic corpora standing in for the teacher's `include_bytes!` text/JSON/image samples --
/// this crate carries no such files, so each stands for one point on the compressibility
/// spectrum instead: a short line, a highly repetitive run, English-shaped prose, and
/// uncompressible noise.
fn corpora() -> Vec<(&'static str, Vec<u8>)> {
    let mut rng_state: u64 = 0x9E3779B97F4A7C15;
    let mut next = move || {
        rng_state ^= rng_state << 13;
        rng_state ^= rng_state >> 7;
        rng_state ^= rng_state << 17;
        rng_state
    };
    let mut random = vec![0u8; 65536];
    for chunk in random.chunks_mut(8) {
        let bytes = next().to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }

    vec![
        ("short_line", b"The quick brown fox jumps over the lazy dog.".to_vec()),
        ("repetitive_1k", b"ABCDEFGH".repeat(128)),
        ("prose_34k", "Call me Ishmael. Some years ago, never mind how long precisely, \
            having little or no money in my purse, and nothing particular to interest me \
            on shore, I thought I would sail about a little and see the watery part of \
            the world. ".repeat(400)),
        ("random_64k", random),
    ]
}

fn bench_compress(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Linear);
    let mut group = c.benchmark_group("compress");
    group.plot_config(plot_config);

    for (name, data) in corpora() {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| compress(data))
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Linear);
    let mut group = c.benchmark_group("decompress");
    group.plot_config(plot_config);

    for (name, data) in corpora() {
        let mut dst = vec![0u8; compress_bound(data.len())];
        let clen = compress_into(&data, &mut dst).unwrap();
        dst.truncate(clen);
        let mut out = vec![0u8; data.len()];

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &dst, |b, compressed| {
            b.iter(|| decompress_into(compressed, &mut out))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
