//! Binary min-heap priority queue.
//!
//! ```
//! use min_pq::MinHeap;
//!
//! let mut heap = MinHeap::build(vec![4, 10, 3, 5, 1, 1]);
//! heap.insert(2);
//! assert_eq!(heap.extract_min(), Some(1));
//! assert_eq!(heap.len(), 6);
//! ```

pub mod compare;
pub mod heapq;

pub use compare::{ByFn, ByKey, Compare, Natural};
pub use heapq::{IntoIterSorted, MinHeap};
