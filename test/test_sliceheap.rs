// In case you're wondering, the instances of `#[cfg_attr(all(windows, miri), ignore)]` in this
// file above the panicking tests are there simply because Miri only supports catching panics on
// Unix-like OSes, so without the configuration attributes those tests just panic normally under
// Miri on Windows, which we don't want.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::time::SystemTime;

use cool_asserts::assert_panics;
use oorandom::Rand32;

use sliceheap::*;

fn seeded_rng() -> Rand32 {
  Rand32::new(
    SystemTime::now()
      .duration_since(SystemTime::UNIX_EPOCH)
      .unwrap()
      .as_secs(),
  )
}

fn check_heap_property<F>(heap: &SliceHeap<'_, i32, F>)
where F: Fn(&[i32], usize, usize) -> bool {
  let data = heap.as_slice();
  for parent in 0..data.len() {
    for child in [2 * parent + 1, 2 * parent + 2] {
      if child < data.len() {
        assert!(
          !heap.less(child, parent),
          "child {} ({}) precedes parent {} ({}) in {:?}",
          child,
          data[child],
          parent,
          data[parent],
          data
        );
      }
    }
  }
}

#[test]
fn initialize_then_pop_in_order() {
  let mut a = vec![3, 2, 4, 5, 1, 0, 6];
  let mut heap = SliceHeap::on(&mut a, |s: &[i32], i, j| s[i] < s[j]);
  check_heap_property(&heap);
  let popped: Vec<i32> = heap.drain_sorted().collect();
  assert_eq!(popped, [0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn initialize_layout_for_max_heap() {
  let mut a = vec![3, 2, 4, 5, 1, 0, 6];
  let heap = SliceHeap::on(&mut a, |s: &[i32], i, j| s[i] > s[j]);
  assert_eq!(heap.as_slice(), [6, 5, 4, 2, 1, 0, 3]);
  drop(heap);
  assert_eq!(a, [6, 5, 4, 2, 1, 0, 3]);
}

#[test]
fn max_heap_push_more_then_pop_all() {
  let mut a = vec![3, 2, 4, 5, 1, 0, 6];
  let mut heap = SliceHeap::on(&mut a, |s: &[i32], i, j| s[i] > s[j]);
  heap.push(8);
  heap.push(7);
  heap.push(9);
  let mut popped = Vec::new();
  while !heap.is_empty() {
    popped.push(heap.pop().unwrap());
  }
  assert_eq!(popped, [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn interleaved_pushes_from_empty() {
  let mut a = Vec::new();
  let mut heap = SliceHeap::bind(&mut a, |s: &[i32], i, j| s[i] < s[j]);
  for x in [3, 2, 4, 5, 1, 0, 6] {
    heap.push(x);
    check_heap_property(&heap);
  }
  for x in [8, 7, 9] {
    heap.push(x);
    check_heap_property(&heap);
  }
  let mut expected = 0;
  while let Ok(x) = heap.pop() {
    assert_eq!(x, expected);
    check_heap_property(&heap);
    expected += 1;
  }
  assert_eq!(expected, 10);
}

#[test]
fn many_pushes_match_reference() {
  let mut a = vec![3, 2, 4, 5, 1, 0, 6];
  {
    let mut heap = SliceHeap::min_on(&mut a);
    for i in 7..100 {
      heap.push(i);
    }
    assert_eq!(heap.len(), 100);
  }
  // Everything the heap did happened in the caller's vector.
  assert_eq!(a.len(), 100);
  assert_eq!(a[0], 0);
  let mut heap = SliceHeap::bind(&mut a, ascending);
  assert!(heap.is_heap());
  for expected in 0..100 {
    assert_eq!(heap.pop(), Ok(expected));
  }
  assert!(a.is_empty());
}

#[test]
fn push_peek_agreement() {
  let mut rng = seeded_rng();
  let mut a = Vec::new();
  let mut heap = SliceHeap::min_on(&mut a);
  let mut min = i32::MAX;
  for _ in 0..200 {
    let x = rng.rand_range(0..1000) as i32;
    heap.push(x);
    min = min.min(x);
    assert_eq!(heap.peek(), Ok(&min));
  }
}

#[test]
fn random_operations_keep_heap_property_and_size() {
  let mut rng = seeded_rng();
  let mut a: Vec<i32> = (0..32).map(|_| rng.rand_range(0..500) as i32).collect();
  let mut model = a.clone();
  let initial = a.len();
  let mut heap = SliceHeap::on(&mut a, |s: &[i32], i, j| s[i] > s[j]);
  let (mut pushes, mut pops) = (0, 0);
  for _ in 0..2000 {
    if rng.rand_range(0..3) == 0 && !heap.is_empty() {
      let top = heap.pop().unwrap();
      let max = *model.iter().max().unwrap();
      assert_eq!(top, max);
      let at = model.iter().position(|&x| x == max).unwrap();
      model.swap_remove(at);
      pops += 1;
    } else {
      let x = rng.rand_range(0..500) as i32;
      heap.push(x);
      model.push(x);
      pushes += 1;
    }
    check_heap_property(&heap);
    assert_eq!(heap.len(), initial + pushes - pops);
  }
}

#[test]
fn initialize_is_idempotent() {
  let mut a = vec![9, 4, 7, 1, 8, 2, 2, 6, 3];
  let mut heap = SliceHeap::on(&mut a, ascending);
  let first = heap.as_slice().to_vec();
  heap.initialize();
  assert_eq!(heap.as_slice(), first.as_slice());
  assert!(heap.is_heap());
  let mut sorted = heap.as_slice().to_vec();
  sorted.sort();
  assert_eq!(sorted, [1, 2, 2, 3, 4, 6, 7, 8, 9]);
}

#[test]
fn bind_does_not_reorder() {
  let mut a = vec![5, 4, 3];
  let heap = SliceHeap::bind(&mut a, ascending);
  assert_eq!(heap.as_slice(), [5, 4, 3]);
  assert!(!heap.is_heap());
}

#[test]
fn empty_peek() {
  let mut a = Vec::<i32>::new();
  let heap = SliceHeap::min_on(&mut a);
  assert_eq!(heap.peek(), Err(HeapError::Empty));
}

#[test]
fn empty_pop() {
  let mut a = Vec::<i32>::new();
  let mut heap = SliceHeap::bind(&mut a, ascending);
  assert_eq!(heap.pop(), Err(HeapError::Empty));
  // The failed pop left the heap usable.
  heap.push(1);
  assert_eq!(heap.pop(), Ok(1));
  assert_eq!(heap.pop(), Err(HeapError::Empty));
}

#[test]
fn single_element() {
  let mut a = vec![42];
  let mut heap = SliceHeap::bind(&mut a, descending);
  assert!(heap.is_heap());
  assert_eq!(heap.peek(), Ok(&42));
  assert_eq!(heap.pop(), Ok(42));
  assert!(heap.is_empty());
}

#[test]
fn error_display() {
  assert_eq!(
    HeapError::Empty.to_string(),
    "Attempted to access the top of an empty heap!"
  );
  assert_eq!(
    HeapError::OutOfBounds { index: 4, len: 2 }.to_string(),
    "Heap position 4 is out of bounds (length is 2)!"
  );
  let boxed: Box<dyn std::error::Error> = Box::new(HeapError::Empty);
  assert!(std::error::Error::source(&*boxed).is_none());
}

#[test]
fn less_reads_live_positions() {
  let mut a = vec![1, 2];
  let mut heap = SliceHeap::bind(&mut a, ascending);
  assert!(heap.less(0, 1));
  heap.swap(0, 1);
  assert!(!heap.less(0, 1));
  assert!(heap.less(1, 0));
  assert_eq!(heap.as_slice(), [2, 1]);
}

#[test]
fn less_is_evaluated_on_every_call() {
  let calls = Cell::new(0);
  let mut a = vec![5, 3, 8, 1];
  let mut heap = SliceHeap::bind(&mut a, |s: &[i32], i, j| {
    calls.set(calls.get() + 1);
    s[i] < s[j]
  });
  heap.initialize();
  let after_init = calls.get();
  assert!(after_init > 0);
  assert!(heap.less(0, 1));
  assert!(heap.less(0, 1));
  assert_eq!(calls.get(), after_init + 2);
}

#[test]
fn try_swap_and_try_less() {
  let mut a = vec![1, 2, 3];
  let mut heap = SliceHeap::bind(&mut a, ascending);
  assert_eq!(heap.try_less(0, 2), Ok(true));
  assert_eq!(
    heap.try_less(0, 3),
    Err(HeapError::OutOfBounds { index: 3, len: 3 })
  );
  assert_eq!(heap.try_swap(0, 2), Ok(()));
  assert_eq!(heap.as_slice(), [3, 2, 1]);
  assert_eq!(
    heap.try_swap(9, 0),
    Err(HeapError::OutOfBounds { index: 9, len: 3 })
  );
  assert_eq!(heap.as_slice(), [3, 2, 1]);
}

#[cfg_attr(all(windows, miri), ignore)]
#[test]
fn out_of_range_positions_panic() {
  assert_panics!(SliceHeap::min_on(&mut vec![1, 2, 3]).swap(0, 3));
  assert_panics!(SliceHeap::min_on(&mut vec![1, 2, 3]).less(3, 0));
  assert_panics!(SliceHeap::min_on(&mut vec![1, 2, 3]).fix(3));
  assert_panics!(SliceHeap::min_on(&mut Vec::<i32>::new()).less(0, 0));
}

#[test]
fn remove_arbitrary_positions() {
  let mut a: Vec<i32> = (0..20).rev().collect();
  let mut heap = SliceHeap::min_on(&mut a);
  let mut removed = Vec::new();
  for index in [7, 0, 12, 3, 3] {
    let expected = heap.as_slice()[index];
    let got = heap.remove(index).unwrap();
    assert_eq!(got, expected);
    check_heap_property(&heap);
    removed.push(got);
  }
  assert_eq!(heap.len(), 15);
  assert_eq!(
    heap.remove(15),
    Err(HeapError::OutOfBounds { index: 15, len: 15 })
  );
  let mut rest: Vec<i32> = heap.drain_sorted().collect();
  rest.extend(removed);
  rest.sort();
  assert_eq!(rest, (0..20).collect::<Vec<_>>());
}

#[test]
fn remove_last_position() {
  let mut a = vec![1, 2, 3];
  let mut heap = SliceHeap::min_on(&mut a);
  assert_eq!(heap.remove(2), Ok(3));
  assert_eq!(heap.as_slice(), [1, 2]);
}

#[test]
fn fix_after_changing_elements() {
  let mut rng = seeded_rng();
  let mut a: Vec<i32> = (0..64).map(|_| rng.rand_range(0..100) as i32).collect();
  SliceHeap::min_on(&mut a);
  for _ in 0..100 {
    let index = rng.rand_range(0..64) as usize;
    a[index] = rng.rand_range(0..100) as i32;
    let mut heap = SliceHeap::bind(&mut a, ascending);
    heap.fix(index);
    check_heap_property(&heap);
  }
}

#[test]
fn push_keys_from_hash_map() {
  let map: HashMap<&str, i32> = [("c", 3), ("a", 1), ("e", 5), ("b", 2), ("d", 4)]
    .into_iter()
    .collect();
  let mut keys = Vec::new();
  let mut heap = SliceHeap::bind(&mut keys, |s: &[&str], i, j| s[i] < s[j]);
  heap.push_keys(&map);
  assert_eq!(heap.len(), 5);
  let popped: Vec<&str> = heap.drain_sorted().collect();
  assert_eq!(popped, ["a", "b", "c", "d", "e"]);
  // The map was only borrowed.
  assert_eq!(map.len(), 5);
}

#[test]
fn push_keys_from_owned_maps() {
  let hash: HashMap<String, ()> = ["pear", "apple", "fig"]
    .iter()
    .map(|s| (s.to_string(), ()))
    .collect();
  let tree: BTreeMap<String, ()> = ["kiwi", "date"]
    .iter()
    .map(|s| (s.to_string(), ()))
    .collect();
  let mut keys = Vec::new();
  let mut heap = SliceHeap::min_on(&mut keys);
  heap.push_keys(hash);
  heap.push_keys(tree);
  let popped: Vec<String> = heap.drain_sorted().collect();
  assert_eq!(popped, ["apple", "date", "fig", "kiwi", "pear"]);
}

#[test]
fn push_values_from_maps() {
  let hash: HashMap<char, u32> = [('x', 30), ('y', 10), ('z', 20)].into_iter().collect();
  let mut tree = BTreeMap::new();
  tree.insert(1, 25);
  tree.insert(2, 5);
  let mut values = Vec::new();
  let mut heap = SliceHeap::max_on(&mut values);
  heap.push_values(&hash);
  heap.push_values(&tree);
  heap.push_values(tree);
  let popped: Vec<u32> = heap.drain_sorted().collect();
  assert_eq!(popped, [30, 25, 25, 20, 10, 5, 5]);
}

#[test]
fn push_values_from_sequences() {
  let slice: &[i32] = &[4, 9];
  let array = [1, 7];
  let vec = vec![3, 8];
  let mut values = vec![5];
  let mut heap = SliceHeap::min_on(&mut values);
  heap.push_values(slice);
  heap.push_values(&array);
  heap.push_values(&vec);
  heap.push_values([6, 2]);
  heap.push_values(vec.clone());
  let popped: Vec<i32> = heap.drain_sorted().collect();
  assert_eq!(popped, [1, 2, 3, 3, 4, 5, 6, 7, 8, 8, 9]);
  // Borrowed sources are untouched.
  assert_eq!(slice, [4, 9]);
  assert_eq!(array, [1, 7]);
  assert_eq!(vec, [3, 8]);
}

#[test]
fn push_values_goes_back_to_front() {
  // With a less function that never prefers anything, nothing moves, so the backing vector shows
  // the order in which the values were pushed.
  let mut values = Vec::new();
  let mut heap = SliceHeap::bind(&mut values, |_: &[i32], _, _| false);
  heap.push_values(&[1, 2, 3]);
  assert_eq!(heap.as_slice(), [3, 2, 1]);
}

#[test]
fn drain_sorted_partial_then_drop() {
  let mut a = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
  let mut heap = SliceHeap::max_on(&mut a);
  let mut it = heap.drain_sorted();
  assert_eq!(it.len(), 9);
  assert_eq!(it.next(), Some(9));
  assert_eq!(it.next(), Some(8));
  assert_eq!(it.size_hint(), (7, Some(7)));
  drop(it);
  assert!(heap.is_empty());
  assert!(a.is_empty());
}

#[test]
fn extend_few_and_many() {
  let mut a: Vec<i32> = (0..1000).collect();
  let mut heap = SliceHeap::max_on(&mut a);
  // Few enough to be sifted in one at a time.
  heap.extend(vec![5000, -1]);
  assert!(heap.is_heap());
  assert_eq!(heap.peek(), Ok(&5000));
  // Enough to rebuild.
  heap.extend(&(1000..3000).collect::<Vec<_>>());
  assert!(heap.is_heap());
  assert_eq!(heap.len(), 3002);
  assert_eq!(heap.pop(), Ok(5000));
  assert_eq!(heap.pop(), Ok(2999));
}

#[test]
fn by_key_orders_structs() {
  #[derive(Debug, Clone, PartialEq)]
  struct Task {
    name: &'static str,
    priority: u8,
  }

  let mut tasks = vec![
    Task { name: "b", priority: 2 },
    Task { name: "c", priority: 3 },
    Task { name: "a", priority: 1 },
  ];
  let mut heap = SliceHeap::on(&mut tasks, by_key(|t: &Task| t.priority));
  heap.push(Task { name: "z", priority: 0 });
  let names: Vec<&str> = heap.drain_sorted().map(|t| t.name).collect();
  assert_eq!(names, ["z", "a", "b", "c"]);
}

#[test]
fn less_over_a_separate_key_table() {
  // Elements are indices into a weight table; only the positions of the indices move.
  let weights = [0.5f64, 0.1, 0.9, 0.3];
  let mut order: Vec<usize> = (0..weights.len()).collect();
  let mut heap = SliceHeap::on(&mut order, |s: &[usize], i, j| weights[s[i]] < weights[s[j]]);
  assert_eq!(heap.pop(), Ok(1));
  assert_eq!(heap.pop(), Ok(3));
  assert_eq!(heap.pop(), Ok(0));
  assert_eq!(heap.pop(), Ok(2));
}

#[test]
fn debug_and_as_ref() {
  let mut a = vec![2, 1];
  let heap = SliceHeap::min_on(&mut a);
  assert_eq!(format!("{:?}", heap), "[1, 2]");
  let slice: &[i32] = heap.as_ref();
  assert_eq!(slice, [1, 2]);
}

#[test]
fn into_inner_returns_the_borrow() {
  let mut a = vec![3, 1, 2];
  let heap = SliceHeap::min_on(&mut a);
  let v = heap.into_inner();
  v.push(0);
  assert_eq!(a.len(), 4);
}
