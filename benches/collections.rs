// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use indexed_collections::{ArrayIndexedCollection, Collection, LinkedListIndexedCollection};

const SIZES: &[usize] = &[64, 256, 1024, 4096, 16384];

fn filled_array(size: usize) -> ArrayIndexedCollection<usize> {
    (0..size).collect()
}

fn filled_list(size: usize) -> LinkedListIndexedCollection<usize> {
    (0..size).collect()
}

fn add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vec", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size {
                    vec.push(i);
                }
                black_box(vec)
            })
        });
        group.bench_with_input(BenchmarkId::new("array", size), size, |b, &size| {
            b.iter(|| {
                let mut array: ArrayIndexedCollection<usize> = ArrayIndexedCollection::new();
                for i in 0..size {
                    array.add(i).unwrap();
                }
                black_box(array)
            })
        });
        group.bench_with_input(BenchmarkId::new("list", size), size, |b, &size| {
            b.iter(|| {
                let mut list: LinkedListIndexedCollection<usize> =
                    LinkedListIndexedCollection::new();
                for i in 0..size {
                    list.add(i).unwrap();
                }
                black_box(list)
            })
        });
    }
    group.finish();
}

fn get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("array", size), size, |b, &size| {
            let array = filled_array(size);
            b.iter(|| {
                for i in 0..size {
                    black_box(array.get(i).unwrap());
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("list", size), size, |b, &size| {
            let list = filled_list(size);
            b.iter(|| {
                for i in 0..size {
                    black_box(list.get(i).unwrap());
                }
            })
        });
    }
    group.finish();
}

fn insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("array", size), size, |b, &size| {
            b.iter_batched_ref(
                || filled_array(size),
                |array| array.insert(size, 0).unwrap(),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("list", size), size, |b, &size| {
            b.iter_batched_ref(
                || filled_list(size),
                |list| list.insert(size, 0).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(collections, add, get, insert_front);
criterion_main!(collections);
