use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use implus_tools::binary_dict::{extract_from_bytes, rank_candidates, scan_printable_runs, DICTIONARY_MAGIC};

/// Synthetic dictionary body: short words separated by frequency bytes
fn synthetic_dictionary(words: usize) -> Vec<u8> {
    let mut data = DICTIONARY_MAGIC.to_be_bytes().to_vec();
    for i in 0..words {
        data.extend_from_slice(format!("word{}", i % 5000).as_bytes());
        data.push((i % 256) as u8);
        data.push(0x00);
    }
    data
}

fn bench_scanner(c: &mut Criterion) {
    let data = synthetic_dictionary(100_000);

    let mut group = c.benchmark_group("binary_dict");
    group.sample_size(20); // WHY: inputs are a few MB, 20 samples is enough to catch regressions
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("scan_printable_runs", |b| {
        b.iter(|| black_box(scan_printable_runs(black_box(&data))))
    });

    group.bench_function("scan_and_rank", |b| {
        b.iter(|| black_box(rank_candidates(scan_printable_runs(black_box(&data)))))
    });

    group.bench_function("extract_from_bytes", |b| {
        b.iter(|| black_box(extract_from_bytes(black_box(&data)).map(|(_, n, ranked)| (n, ranked.len()))))
    });

    group.finish();
}

criterion_group!(benches, bench_scanner);
criterion_main!(benches);
