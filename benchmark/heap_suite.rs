use std::time::SystemTime;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use oorandom::Rand64;

use sliceheap::{ascending, SliceHeap};

fn random_u64s(len: usize) -> Vec<u64> {
  let mut rng = Rand64::new(
    SystemTime::now()
      .duration_since(SystemTime::UNIX_EPOCH)
      .unwrap()
      .as_nanos(),
  );
  let bound = (len as u64) * 3 / 2 + 1;
  (0..len).map(|_| rng.rand_range(1..bound)).collect()
}

fn sliceheap_push_random(c: &mut Criterion) {
  let mut group = c.benchmark_group("sliceheap_push_random_u64");
  for len in [512, 1024, 2048, 4096, 8192] {
    let input = random_u64s(len);
    let mut storage = Vec::with_capacity(len);
    group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
      b.iter(|| {
        let mut heap = SliceHeap::bind(&mut storage, ascending);
        for item in input {
          heap.push(*item);
        }
        storage.clear();
      })
    });
  }
  group.finish();
}

fn sliceheap_initialize_random(c: &mut Criterion) {
  let mut group = c.benchmark_group("sliceheap_initialize_random_u64");
  for len in [512, 1024, 2048, 4096, 8192] {
    let input = random_u64s(len);
    group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
      b.iter(|| {
        let mut storage = input.clone();
        SliceHeap::min_on(&mut storage);
        black_box(storage)
      })
    });
  }
  group.finish();
}

// One push and one pop against heaps of a fixed size, from 1 up to 1025 elements.
fn sliceheap_push_pop(c: &mut Criterion) {
  let mut group = c.benchmark_group("sliceheap_push_pop");
  let mut nodes = 1;
  while nodes <= (1 << 10) + 1 {
    let mut storage: Vec<u64> = (0..nodes as u64).collect();
    group.bench_function(BenchmarkId::new("nodes", nodes), |b| {
      let mut heap = SliceHeap::min_on(&mut storage);
      let mut i = 0u64;
      b.iter(|| {
        heap.push(i);
        i = i.wrapping_add(1);
        black_box(heap.pop())
      })
    });
    nodes <<= 1;
  }
  group.finish();
}

criterion_group!(
  benches,
  sliceheap_push_random,
  sliceheap_initialize_random,
  sliceheap_push_pop
);
criterion_main!(benches);
