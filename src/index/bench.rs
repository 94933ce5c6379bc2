use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Import the directory and index from the crate
use dirstore::directory::Directory;
use dirstore::index::HashIndex;
use dirstore::infrastructure::hash::KeyField;
use dirstore::record::random_records;

// Test configuration
const RECORD_COUNT: usize = 10_000;
const LOOKUP_COUNT: usize = 1_000;

fn populated_directory() -> Directory {
    let mut directory: Directory = random_records(&mut StdRng::seed_from_u64(0), RECORD_COUNT)
        .into_iter()
        .collect();
    directory.sort();
    directory
}

// Benchmark building an index from a populated directory, rehashes included
pub fn bench_index_build(c: &mut Criterion) {
    let directory = populated_directory();

    let mut group = c.benchmark_group("IndexBuild");

    for key_field in [KeyField::FirstName, KeyField::Telephone] {
        group.bench_function(key_field.label(), |b| {
            b.iter(|| {
                let index = HashIndex::build(key_field, black_box(&directory));
                index.destroy();
            });
        });
    }

    group.finish();
}

// Benchmark the three retrieval paths on the same keys
pub fn bench_retrieval_paths(c: &mut Criterion) {
    let directory = populated_directory();
    let index = HashIndex::build(KeyField::Telephone, &directory);
    let records: Vec<_> = directory.iter().step_by(RECORD_COUNT / LOOKUP_COUNT).collect();

    let mut group = c.benchmark_group("Retrieval");

    group.bench_function("LinearScan", |b| {
        b.iter(|| {
            for record in &records {
                assert!(!directory.linear_search(black_box(record.last_name())).is_not_found());
            }
        });
    });

    group.bench_function("BinarySearch", |b| {
        b.iter(|| {
            for record in &records {
                assert!(!directory.binary_search_all(black_box(record.last_name())).is_not_found());
            }
        });
    });

    group.bench_function("HashLookup", |b| {
        b.iter(|| {
            for record in &records {
                assert!(!index.lookup(&directory, black_box(record.telephone())).is_not_found());
            }
        });
    });

    group.finish();
}

// Export the benchmark group for criterion
criterion_group!(benches, bench_index_build, bench_retrieval_paths);

// Only run the benchmark group when this file is executed directly
criterion_main!(benches);
