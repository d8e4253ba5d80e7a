use alloc::vec::{self, Vec};
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::ops::{Bound, Range, RangeBounds};

/// The ordered, duplicate-free list of keys backing `RawOrderedDict`.
///
/// Uniqueness is not checked here; the owning map consults its value map before
/// handing a key over.
#[derive(Clone)]
pub(crate) struct KeySequence<K> {
    keys: Vec<K>,
}

/// Converts `range` into a half-open `start..end` range over a sequence of length `len`.
///
/// # Panics
///
/// Panics if either bound overflows, if `start > end`, or if `end > len`.
pub(crate) fn resolve_range<R>(range: &R, len: usize) -> Range<usize>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).expect("range start overflowed in OrderedDict"),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).expect("range end overflowed in OrderedDict"),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };
    assert!(start <= end, "range start {start} is greater than range end {end} in OrderedDict");
    assert!(end <= len, "range end {end} out of range for OrderedDict of length {len}");
    start..end
}

/// Restores the max-heap property below `root`.
fn sift_down<K, F>(heap: &mut [K], mut root: usize, compare: &mut F)
where
    F: FnMut(&K, &K) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= heap.len() {
            return;
        }
        if child + 1 < heap.len() && compare(&heap[child], &heap[child + 1]) == Ordering::Less {
            child += 1;
        }
        if compare(&heap[root], &heap[child]) != Ordering::Less {
            return;
        }
        heap.swap(root, child);
        root = child;
    }
}

impl<K> KeySequence<K> {
    pub(crate) const fn new() -> Self {
        Self {
            keys: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.keys.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    pub(crate) fn get(&self, position: usize) -> Option<&K> {
        self.keys.get(position)
    }

    /// Returns the position of `key` by scanning the sequence front to back.
    pub(crate) fn position_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.keys.iter().position(|k| k.borrow() == key)
    }

    pub(crate) fn push(&mut self, key: K) {
        self.keys.push(key);
    }

    pub(crate) fn insert(&mut self, position: usize, key: K) {
        self.keys.insert(position, key);
    }

    pub(crate) fn remove(&mut self, position: usize) -> K {
        self.keys.remove(position)
    }

    pub(crate) fn pop(&mut self) -> Option<K> {
        self.keys.pop()
    }

    pub(crate) fn drain(&mut self, range: Range<usize>) -> vec::Drain<'_, K> {
        self.keys.drain(range)
    }

    pub(crate) fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.keys.retain(f);
    }

    /// Sorts the keys with an in-place heapsort.
    ///
    /// Every index the sort touches is derived from the sequence length alone, so a
    /// `compare` that is not a strict weak ordering scrambles the order but cannot panic.
    pub(crate) fn sort_unstable_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        let len = self.keys.len();
        for root in (0..len / 2).rev() {
            sift_down(&mut self.keys[..len], root, &mut compare);
        }
        for end in (1..len).rev() {
            self.keys.swap(0, end);
            sift_down(&mut self.keys[..end], 0, &mut compare);
        }
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.keys.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.keys.shrink_to_fit();
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
    }

    pub(crate) fn into_vec(self) -> Vec<K> {
        self.keys
    }
}
