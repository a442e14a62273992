use std::fmt::Debug;

use crate::data_structures::keyed::{Key, KeyedMap};

/// A queued element together with its current priority
#[derive(Debug, Clone, Copy)]
struct Entry<E, P> {
    element: E,
    priority: P,
}

/// Binary min-heap with an element -> slot index for O(log n) priority changes
///
/// Each element is queued at most once. The position index is only ever
/// touched through `swap` and the push/pop at the tail, so it always mirrors
/// the heap array.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<E, P>
where
    E: Key,
    P: PartialOrd + Copy + Debug,
{
    /// The heap array; the live prefix is the whole vector
    heap: Vec<Entry<E, P>>,

    /// Current slot of every queued element
    positions: KeyedMap<E, usize>,
}

impl<E, P> IndexedPriorityQueue<E, P>
where
    E: Key,
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedPriorityQueue {
            heap: Vec::new(),
            positions: KeyedMap::new(),
        }
    }

    /// Creates an empty queue sized for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedPriorityQueue {
            heap: Vec::with_capacity(capacity),
            positions: KeyedMap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the element is currently queued
    pub fn contains(&self, element: &E) -> bool {
        self.positions.contains_key(element)
    }

    /// Returns the current priority of a queued element
    pub fn priority(&self, element: &E) -> Option<P> {
        self.positions
            .get(element)
            .map(|&slot| self.heap[slot].priority)
    }

    /// Queues an element with the given priority
    ///
    /// Offering an element that is already queued changes its priority instead
    /// of adding a second entry.
    pub fn offer(&mut self, element: E, priority: P) {
        if self.contains(&element) {
            self.change_priority(element, priority);
            return;
        }

        let slot = self.heap.len();
        self.heap.push(Entry { element, priority });
        self.positions.insert(element, slot);
        self.sift_up(slot);
    }

    /// Removes and returns the element with the smallest priority
    pub fn poll(&mut self) -> Option<(E, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions.remove(&entry.element);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((entry.element, entry.priority))
    }

    /// Returns the element with the smallest priority without removing it
    pub fn peek(&self) -> Option<(E, P)> {
        self.heap.first().map(|entry| (entry.element, entry.priority))
    }

    /// Moves a queued element to a new priority, in either direction
    ///
    /// Returns false if the element is not queued.
    pub fn change_priority(&mut self, element: E, priority: P) -> bool {
        let slot = match self.positions.get(&element) {
            Some(&slot) => slot,
            None => return false,
        };

        self.heap[slot].priority = priority;

        if slot > 0 && priority < self.heap[Self::parent(slot)].priority {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
        true
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    fn parent(slot: usize) -> usize {
        (slot - 1) / 2
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = Self::parent(slot);
            if self.heap[parent].priority > self.heap[slot].priority {
                self.swap(parent, slot);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }

            // Ties go to the left child
            let right = left + 1;
            let mut child = left;
            if right < len && self.heap[right].priority < self.heap[left].priority {
                child = right;
            }

            if self.heap[child].priority < self.heap[slot].priority {
                self.swap(slot, child);
                slot = child;
            } else {
                break;
            }
        }
    }

    /// Swaps two heap slots and records the new slot of both elements
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].element, a);
        self.positions.insert(self.heap[b].element, b);
    }
}

impl<E, P> Default for IndexedPriorityQueue<E, P>
where
    E: Key,
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_consistent<E, P>(queue: &IndexedPriorityQueue<E, P>)
    where
        E: Key,
        P: PartialOrd + Copy + Debug,
    {
        assert_eq!(queue.positions.len(), queue.heap.len());
        for (slot, entry) in queue.heap.iter().enumerate() {
            assert_eq!(
                queue.positions.get(&entry.element),
                Some(&slot),
                "position index out of sync for {:?}",
                entry.element
            );
            if slot > 0 {
                let parent = &queue.heap[(slot - 1) / 2];
                assert!(
                    parent.priority <= entry.priority,
                    "heap property violated at slot {}",
                    slot
                );
            }
        }
    }

    #[test]
    fn test_offer_and_poll_in_order() {
        let mut queue = IndexedPriorityQueue::new();
        queue.offer(0usize, 5.0);
        queue.offer(1, 3.0);
        queue.offer(2, 8.0);
        queue.offer(3, 1.0);
        assert_consistent(&queue);

        assert_eq!(queue.peek(), Some((3, 1.0)));
        assert_eq!(queue.poll(), Some((3, 1.0)));
        assert_eq!(queue.poll(), Some((1, 3.0)));
        assert_eq!(queue.poll(), Some((0, 5.0)));
        assert_eq!(queue.poll(), Some((2, 8.0)));
        assert_eq!(queue.poll(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_change_priority_both_directions() {
        let mut queue = IndexedPriorityQueue::new();
        for (element, priority) in [(0usize, 10.0), (1, 20.0), (2, 30.0), (3, 40.0)] {
            queue.offer(element, priority);
        }

        assert!(queue.change_priority(3, 5.0));
        assert_consistent(&queue);
        assert_eq!(queue.peek(), Some((3, 5.0)));

        assert!(queue.change_priority(3, 50.0));
        assert_consistent(&queue);
        assert_eq!(queue.peek(), Some((0, 10.0)));
        assert_eq!(queue.priority(&3), Some(50.0));

        assert!(!queue.change_priority(42, 1.0));
    }

    #[test]
    fn test_offer_existing_element_updates_priority() {
        let mut queue = IndexedPriorityQueue::new();
        queue.offer(7usize, 9.0);
        queue.offer(8, 4.0);
        queue.offer(7, 1.0);

        assert_eq!(queue.len(), 2);
        assert_consistent(&queue);
        assert_eq!(queue.poll(), Some((7, 1.0)));
    }

    #[test]
    fn test_poll_promotes_left_child_on_tie() {
        let mut queue = IndexedPriorityQueue::new();
        for (element, priority) in [(0usize, 0.0), (1, 5.0), (2, 5.0), (3, 9.0), (4, 9.0)] {
            queue.offer(element, priority);
        }

        assert_eq!(queue.poll(), Some((0, 0.0)));
        assert_consistent(&queue);
        assert_eq!(queue.peek(), Some((1, 5.0)));
        assert_eq!(queue.heap[2].element, 2);
        assert_eq!(queue.positions.get(&4), Some(&1));
    }

    #[test]
    fn test_infinite_priorities_sink() {
        let mut queue = IndexedPriorityQueue::new();
        queue.offer(0usize, f64::INFINITY);
        queue.offer(1, 0.0);
        queue.offer(2, f64::INFINITY);
        assert!(queue.change_priority(2, 3.0));

        assert_eq!(queue.poll(), Some((1, 0.0)));
        assert_eq!(queue.poll(), Some((2, 3.0)));
        assert_eq!(queue.poll(), Some((0, f64::INFINITY)));
    }

    #[test]
    fn test_random_interleaving_keeps_index_in_sync() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut queue: IndexedPriorityQueue<usize, u32> = IndexedPriorityQueue::new();

        for _ in 0..2_000 {
            match rng.gen_range(0..3) {
                0 => queue.offer(rng.gen_range(0..64), rng.gen_range(0..1_000)),
                1 => {
                    queue.poll();
                }
                _ => {
                    queue.change_priority(rng.gen_range(0..64), rng.gen_range(0..1_000));
                }
            }
            assert_consistent(&queue);
        }

        let mut last = 0;
        while let Some((_, priority)) = queue.poll() {
            assert!(priority >= last);
            last = priority;
            assert_consistent(&queue);
        }
    }
}
