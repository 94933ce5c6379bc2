use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Reference the main crate
extern crate dirstore;

use dirstore::infrastructure::hash::{fnv_hash, KeyField};
use dirstore::record::generator::{random_name, random_telephone};
use dirstore::record::random_records;

// Benchmark the hash on name shaped keys
pub fn bench_names(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let names: Vec<String> = (0..1000).map(|_| random_name(&mut rng)).collect();

    let mut group = c.benchmark_group("Names");

    group.bench_function("fnv_hash", |b: &mut criterion::Bencher| {
        b.iter(|| {
            for name in &names {
                black_box(fnv_hash(black_box(name)));
            }
        })
    });

    group.finish();
}

// Benchmark the hash on telephone shaped keys
pub fn bench_telephones(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let telephones: Vec<String> = (0..1000).map(|_| random_telephone(&mut rng)).collect();

    let mut group = c.benchmark_group("Telephones");

    group.bench_function("fnv_hash", |b: &mut criterion::Bencher| {
        b.iter(|| {
            for telephone in &telephones {
                black_box(fnv_hash(black_box(telephone)));
            }
        })
    });

    group.finish();
}

// Benchmark the record extractors
pub fn bench_key_fields(c: &mut Criterion) {
    let records = random_records(&mut StdRng::seed_from_u64(3), 1000);

    let mut group = c.benchmark_group("KeyFields");

    for field in [KeyField::FirstName, KeyField::Telephone] {
        group.bench_function(field.label(), |b: &mut criterion::Bencher| {
            b.iter(|| {
                for record in &records {
                    black_box(field.hash(black_box(record)));
                }
            })
        });
    }

    group.finish();
}

// Export the benchmark group for criterion
criterion_group!(benches, bench_names, bench_telephones, bench_key_fields);

// Only run the benchmark group when this file is executed directly
criterion_main!(benches);
