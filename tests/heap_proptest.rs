use min_pq::MinHeap;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Insert(i16),
    ExtractMin,
}

fn heap_ordered(values: &[i16]) -> bool {
    (1..values.len()).all(|i| values[(i - 1) / 2] <= values[i])
}

proptest! {
    #[test]
    fn build_then_drain_is_sorted(mut items in proptest::collection::vec(any::<i16>(), 0..200)) {
        let heap = MinHeap::build(items.clone());
        prop_assert_eq!(heap.len(), items.len());
        prop_assert!(heap_ordered(heap.as_slice()));

        items.sort();
        prop_assert_eq!(heap.into_sorted_vec(), items);
    }

    #[test]
    fn heap_matches_sorted_model(
        initial in proptest::collection::vec(any::<i16>(), 0..50),
        ops in proptest::collection::vec(
            prop_oneof![
                any::<i16>().prop_map(Operation::Insert),
                Just(Operation::ExtractMin),
            ],
            1..200
        )
    ) {
        let mut model = initial.clone();
        model.sort();
        let mut heap = MinHeap::build(initial);

        for op in ops {
            match op {
                Operation::Insert(value) => {
                    let len = heap.len();
                    heap.insert(value);
                    prop_assert_eq!(heap.len(), len + 1);
                    let at = model.partition_point(|&m| m <= value);
                    model.insert(at, value);
                }
                Operation::ExtractMin => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(heap.extract_min(), expected);
                    prop_assert_eq!(heap.len(), model.len());
                }
            }
            prop_assert!(heap_ordered(heap.as_slice()), "heap order broken: {:?}", heap.as_slice());
            prop_assert_eq!(heap.peek(), model.first());
        }

        prop_assert_eq!(heap.into_sorted_vec(), model);
    }
}
