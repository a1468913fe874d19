use serde::{Deserialize, Serialize};
use sliceheap::*;

#[derive(Debug, Deserialize, Serialize)]
struct Job {
  name: String,
  priority: u32,
}

const JSON_STR: &str = r#"
[
  {
    "name": "write docs",
    "priority": 3
  },
  {
    "name": "fix build",
    "priority": 1
  },
  {
    "name": "release",
    "priority": 9
  },
  {
    "name": "review",
    "priority": 2
  }
]
"#;

fn main() {
  let mut jobs: Vec<Job> = serde_json::from_str(JSON_STR).unwrap();

  let mut heap = SliceHeap::on(&mut jobs, by_key(|job: &Job| job.priority));
  heap.push(Job {
    name: String::from("triage"),
    priority: 0,
  });

  // The heap serializes as its backing vector, in heap layout.
  println!("{}\n", serde_json::to_string_pretty(&heap).unwrap());

  let next = heap.pop().unwrap();
  println!("Next up: {:?}\n", next);

  println!("{}", serde_json::to_string(&heap).unwrap());
}
