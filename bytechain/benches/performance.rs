use bytechain::{Chain, SlabBucket};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;

fn bench_sequential_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_concat");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("plain_growth", size), size, |b, &size| {
            b.iter(|| {
                let mut chain = Chain::new();
                for i in 0..size {
                    chain.concat_int(i as i32).unwrap();
                    chain.concat_byte(b',').unwrap();
                }
                black_box(chain.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("bucket_growth", size), size, |b, &size| {
            let bucket = Arc::new(SlabBucket::new());
            b.iter(|| {
                let mut chain = Chain::with_bucket(bucket.clone());
                for i in 0..size {
                    chain.concat_int(i as i32).unwrap();
                    chain.concat_byte(b',').unwrap();
                }
                black_box(chain.len())
            });
        });
    }
    group.finish();
}

fn bench_searching(c: &mut Criterion) {
    let mut group = c.benchmark_group("searching");

    for size in [1000, 10000].iter() {
        let mut chain = Chain::new();
        for i in 0..*size {
            chain.concat_int(i).unwrap();
            chain.concat_byte(b' ').unwrap();
        }
        chain.concat_str("needle").unwrap();

        group.throughput(Throughput::Bytes(chain.len() as u64));
        group.bench_with_input(BenchmarkId::new("find_seq", size), &chain, |b, chain| {
            b.iter(|| black_box(chain.find_seq("needle")));
        });
    }
    group.finish();
}

fn bench_projections(c: &mut Criterion) {
    let mut group = c.benchmark_group("projections");

    let ints = Chain::from("-1234567890");
    group.bench_function("to_long", |b| {
        b.iter(|| black_box(ints.to_long(0)));
    });

    let reals = Chain::from("1.5e2");
    group.bench_function("to_double", |b| {
        b.iter(|| black_box(reals.to_double(0.0)));
    });

    let text = Chain::from("kat😀中 kat😀中 kat😀中");
    let units: Vec<u16> = "kat😀中 kat😀中 kat😀中".encode_utf16().collect();
    group.bench_function("is_units", |b| {
        b.iter(|| black_box(text.is_units(&units)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_concat,
    bench_searching,
    bench_projections
);
criterion_main!(benches);
