pub mod keyed;
pub mod priority_queue;

pub use keyed::{Key, KeyedMap, KeyedSet};
pub use priority_queue::IndexedPriorityQueue;
