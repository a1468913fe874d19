// So we don't get "function complexity" lints and such since it's a demo.
#![allow(clippy::all)]

use std::collections::HashMap;

use sliceheap::{SliceHeap, ValueSource};

// A heap can be set up in one function and handed back to the caller, as long as the storage it
// borrows outlives it.
fn largest_first(scores: &mut Vec<i32>) -> SliceHeap<'_, i32, impl Fn(&[i32], usize, usize) -> bool> {
  SliceHeap::on(scores, |s: &[i32], i, j| s[i] > s[j])
}

fn main() {
  let mut scores = vec![3, 2, 4, 5, 1, 0, 6];
  let mut heap = largest_first(&mut scores);

  // We can see the heap arrange itself by looking at the backing vector.
  println!("{:?}", heap.as_slice());

  // Push a few more elements.
  heap.push(8);
  heap.push(7);
  heap.push(9);

  // Pop everything off, printing as we pop largest to smallest.
  while let Ok(largest) = heap.pop() {
    println!("{}", largest);
  }
  println!("Backing vector is empty: {}", scores.is_empty());

  // Words keyed by how often they occur, popped alphabetically.
  let mut counts = HashMap::new();
  for word in "the quick brown fox jumps over the lazy dog the end".split(' ') {
    *counts.entry(word).or_insert(0) += 1;
  }
  let mut words = Vec::with_capacity(counts.len());
  let mut heap = SliceHeap::min_on(&mut words);
  heap.push_keys(&counts);
  let alphabetical: Vec<&str> = heap.drain_sorted().collect();
  println!("{:?}", alphabetical);

  // Only the positions of the indices move; the table they point into never does.
  let names = ["carol", "alice", "dave", "bob"];
  let mut order = Vec::new();
  let mut heap = SliceHeap::bind(&mut order, |s: &[usize], i, j| names[s[i]] < names[s[j]]);
  heap.push_values((0..names.len()).collect::<Vec<_>>());
  while let Ok(index) = heap.pop() {
    println!("{} (index {})", names[index], index);
  }

  // Anything that knows how to hand over its values can be used as a source.
  let values: Vec<u32> = [10u32, 30, 20].into_values_iter().collect();
  println!("Pushed in this order: {:?}", values);
}
