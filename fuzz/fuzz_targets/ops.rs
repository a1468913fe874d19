#![no_main]
use libfuzzer_sys::fuzz_target;
use libfuzzer_sys::arbitrary;

#[derive(arbitrary::Arbitrary)]
#[derive(Debug)]
struct Target {
    ctor: Constructor,
    ops: Vec<Op>,
    dtor: Destructor,
}

#[derive(arbitrary::Arbitrary)]
#[derive(Debug)]
enum Constructor {
    Bind,
    On(Vec<Box<i32>>),
}

#[derive(arbitrary::Arbitrary)]
#[derive(Debug)]
enum Op {
    Push(Box<i32>),
    Pop,
    Peek,
    Remove(usize),
    Fix(usize, Box<i32>),
    TrySwap(usize, usize),
    Initialize,
    PushValues(Vec<Box<i32>>),
    Extend(Vec<Box<i32>>),
}

#[derive(arbitrary::Arbitrary)]
#[derive(Debug)]
enum Destructor {
    LetDrop,
    DrainSorted,
}

use sliceheap::SliceHeap;

fn less(s: &[Box<i32>], i: usize, j: usize) -> bool {
    s[i] < s[j]
}

fn run(ctor: Constructor, ops: Vec<Op>, dtor: Destructor) {
    let (mut data, initialize) = match ctor {
        Constructor::Bind => (Vec::new(), false),
        Constructor::On(v) => (v, true),
    };
    // A sorted copy of everything that should be in the heap.
    let mut model: Vec<i32> = data.iter().map(|b| **b).collect();
    model.sort();

    if initialize {
        SliceHeap::bind(&mut data, less).initialize();
    }

    for op in ops {
        // Binding is free, so the heap is rebound for every operation. That lets `Fix` change an
        // element directly in the vector the way a caller would.
        match op {
            Op::Push(b) => {
                let at = model.partition_point(|x| *x <= *b);
                model.insert(at, *b);
                SliceHeap::bind(&mut data, less).push(b);
            }
            Op::Pop => match SliceHeap::bind(&mut data, less).pop() {
                Ok(b) => assert_eq!(*b, model.remove(0)),
                Err(_) => assert!(model.is_empty()),
            },
            Op::Peek => match SliceHeap::bind(&mut data, less).peek() {
                Ok(b) => assert_eq!(**b, model[0]),
                Err(_) => assert!(model.is_empty()),
            },
            Op::Remove(index) => match SliceHeap::bind(&mut data, less).remove(index) {
                Ok(b) => {
                    let at = model.binary_search(&*b).unwrap();
                    model.remove(at);
                }
                Err(_) => assert!(index >= model.len()),
            },
            Op::Fix(index, value) if index < data.len() => {
                let at = model.binary_search(&*data[index]).unwrap();
                model.remove(at);
                let at = model.partition_point(|x| *x <= *value);
                model.insert(at, *value);
                data[index] = value;
                SliceHeap::bind(&mut data, less).fix(index);
            }
            Op::TrySwap(i, j) => {
                let mut heap = SliceHeap::bind(&mut data, less);
                if heap.try_swap(i, j).is_ok() {
                    heap.initialize();
                }
            }
            Op::Initialize => SliceHeap::bind(&mut data, less).initialize(),
            Op::PushValues(values) => {
                model.extend(values.iter().map(|b| **b));
                model.sort();
                SliceHeap::bind(&mut data, less).push_values(values);
            }
            Op::Extend(values) => {
                model.extend(values.iter().map(|b| **b));
                model.sort();
                SliceHeap::bind(&mut data, less).extend(values);
            }
            _ => return,
        }
        let heap = SliceHeap::bind(&mut data, less);
        assert!(heap.is_heap());
        assert_eq!(heap.len(), model.len());
    }

    match dtor {
        Destructor::LetDrop => drop(data),
        Destructor::DrainSorted => {
            let mut heap = SliceHeap::bind(&mut data, less);
            let drained: Vec<i32> = heap.drain_sorted().map(|b| *b).collect();
            assert_eq!(drained, model);
            assert!(data.is_empty());
        }
    }
}

fuzz_target!(|target: Target| {
    run(target.ctor, target.ops, target.dtor);
});
