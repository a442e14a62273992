use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sssp_engine::data_structures::IndexedPriorityQueue;
use sssp_engine::VertexId;
use std::collections::HashMap;

#[test]
fn test_interleaved_operations_drain_in_order() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let mut queue: IndexedPriorityQueue<usize, OrderedFloat<f64>> = IndexedPriorityQueue::new();
        // Shadow model of what should be queued
        let mut model: HashMap<usize, OrderedFloat<f64>> = HashMap::new();

        for _ in 0..300 {
            let element = rng.gen_range(0..40);
            let priority = OrderedFloat(rng.gen_range(0.0..1_000.0));
            match rng.gen_range(0..4) {
                0 | 1 => {
                    queue.offer(element, priority);
                    model.insert(element, priority);
                }
                2 => {
                    let polled = queue.poll();
                    let expected_min = model.values().min().copied();
                    assert_eq!(polled.map(|(_, p)| p), expected_min);
                    if let Some((element, _)) = polled {
                        model.remove(&element);
                    }
                }
                _ => {
                    let changed = queue.change_priority(element, priority);
                    assert_eq!(changed, model.contains_key(&element));
                    if changed {
                        model.insert(element, priority);
                    }
                }
            }
            assert_eq!(queue.len(), model.len());
        }

        let mut last = OrderedFloat(f64::NEG_INFINITY);
        while let Some((element, priority)) = queue.poll() {
            assert!(priority >= last, "extracted out of order");
            assert_eq!(model.remove(&element), Some(priority));
            last = priority;
        }
        assert!(model.is_empty());
    }
}

#[test]
fn test_equal_priorities_all_come_out() {
    let mut queue = IndexedPriorityQueue::new();
    for index in 0..10 {
        queue.offer(VertexId::new(index), 1.0);
    }
    queue.change_priority(VertexId::new(9), 1.0);

    let mut seen: Vec<usize> = std::iter::from_fn(|| queue.poll())
        .map(|(vertex, priority)| {
            assert_eq!(priority, 1.0);
            vertex.index()
        })
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_peek_does_not_remove() {
    let mut queue = IndexedPriorityQueue::new();
    assert_eq!(queue.peek(), None::<(usize, f64)>);

    queue.offer(3usize, 2.5);
    queue.offer(1, 0.5);
    assert_eq!(queue.peek(), Some((1, 0.5)));
    assert_eq!(queue.len(), 2);
    assert!(queue.contains(&3));

    queue.clear();
    assert!(queue.is_empty());
    assert!(!queue.contains(&3));
}
