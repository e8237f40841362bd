use crate::compare::{ByFn, ByKey, Compare, Natural};
use std::fmt;
use std::iter::FusedIterator;

/// Binary min-heap stored as a complete binary tree in array order.
///
/// For every index `i > 0` the element at `(i - 1) / 2` is not greater than
/// the element at `i`, so the minimum always sits at index 0. The ordering is
/// supplied by `C`, which defaults to the elements' own `PartialOrd`.
#[derive(Clone)]
pub struct MinHeap<T, C = Natural> {
    values: Vec<T>,
    cmp: C,
}

fn parent(index: usize) -> usize {
    (index - 1) >> 1
}

fn left(index: usize) -> usize {
    (index << 1) + 1
}

fn right(index: usize) -> usize {
    (index << 1) + 2
}

impl<T: PartialOrd> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap::with_comparator(Natural)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            values: Vec::with_capacity(capacity),
            cmp: Natural,
        }
    }

    /// Builds a heap from `items` in O(n), taking ownership of the vector.
    pub fn build(items: Vec<T>) -> Self {
        MinHeap::build_with(items, Natural)
    }

    /// Builds a heap from a copy of `items`, leaving the slice untouched.
    pub fn build_from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        MinHeap::build(items.to_vec())
    }
}

impl<T, F> MinHeap<T, ByFn<F>>
where
    F: Fn(&T, &T) -> bool,
{
    /// Empty heap ordered by the strict less-than closure `less`.
    pub fn with_less(less: F) -> Self {
        MinHeap::with_comparator(ByFn(less))
    }
}

impl<T, K, F> MinHeap<T, ByKey<F>>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    /// Empty heap ordered by the key `key` extracts from each element.
    pub fn with_key(key: F) -> Self {
        MinHeap::with_comparator(ByKey(key))
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        MinHeap {
            values: Vec::new(),
            cmp,
        }
    }

    /// Builds a heap from `items` ordered by `cmp`.
    ///
    /// The input order is kept as the initial layout and then repaired by
    /// sifting down every index from `len / 2` to 0.
    pub fn build_with(items: Vec<T>, cmp: C) -> Self {
        let mut heap = MinHeap { values: items, cmp };
        log::trace!("building heap from {} values", heap.values.len());
        for index in (0..=heap.values.len() / 2).rev() {
            heap.bubble_down(index);
        }
        heap
    }

    pub fn insert(&mut self, value: T) {
        self.values.push(value);
        self.bubble_up(self.values.len() - 1);
    }

    /// Removes and returns the minimum, or `None` if the heap is empty.
    pub fn extract_min(&mut self) -> Option<T> {
        match self.values.len() {
            0 => None,
            1 => self.values.pop(),
            _ => {
                let min = self.values.swap_remove(0);
                self.bubble_down(0);
                Some(min)
            }
        }
    }

    pub fn peek(&self) -> Option<&T> {
        self.values.first()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The backing array in heap order. Useful for diagnostics only: any
    /// arrangement satisfying the heap property is a valid layout.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Returns the backing vector in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Consumes the heap and returns its elements in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        log::trace!("sorting {} values out of heap", self.values.len());
        self.into_iter_sorted().collect()
    }

    /// Consumes the heap, yielding elements by repeated `extract_min`.
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { heap: self }
    }

    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if self.cmp.less(&self.values[index], &self.values[parent]) {
                self.values.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn bubble_down(&mut self, mut index: usize) {
        let len = self.values.len();
        loop {
            let left_idx = left(index);
            let right_idx = right(index);
            if left_idx >= len {
                break;
            }

            // left keeps the slot on ties with right
            let mut min_idx = index;
            if self.cmp.less(&self.values[left_idx], &self.values[min_idx]) {
                min_idx = left_idx;
            }
            if right_idx < len && self.cmp.less(&self.values[right_idx], &self.values[min_idx]) {
                min_idx = right_idx;
            }

            if min_idx == index {
                break;
            }
            self.values.swap(index, min_idx);
            index = min_idx;
        }
    }

    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        (1..self.values.len())
            .all(|i| !self.cmp.less(&self.values[i], &self.values[parent(i)]))
    }
}

impl<T: PartialOrd> Default for MinHeap<T> {
    fn default() -> Self {
        MinHeap::new()
    }
}

impl<T: PartialOrd> From<Vec<T>> for MinHeap<T> {
    fn from(items: Vec<T>) -> Self {
        MinHeap::build(items)
    }
}

impl<T: PartialOrd> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        MinHeap::build(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.values.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

/// Iterator returned by [`MinHeap::into_iter_sorted`].
pub struct IntoIterSorted<T, C = Natural> {
    heap: MinHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIterSorted<T, C> {}

impl<T, C: Compare<T>> FusedIterator for IntoIterSorted<T, C> {}
