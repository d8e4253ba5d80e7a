use core::hash::{BuildHasher, Hash};

use hashbrown::DefaultHashBuilder;

use super::OrderedDict;
use crate::raw::RawOrderedDict;

impl<K, V> OrderedDict<K, V, DefaultHashBuilder> {
    /// Creates an empty map with capacity for at least `capacity` elements.
    ///
    /// The capacity is a hint; inserting more elements simply grows the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let dict: OrderedDict<i32, i32> = OrderedDict::with_capacity(32);
    /// assert!(dict.is_empty());
    /// assert!(dict.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> OrderedDict<K, V, S> {
    /// Creates an empty map with capacity for at least `capacity` elements, using
    /// `hash_builder` to hash the keys.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        OrderedDict {
            raw: RawOrderedDict::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the number of elements the map can hold without reallocating.
    ///
    /// The value is a hint and is always at least [`len`](Self::len).
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}

impl<K, V, S> OrderedDict<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict: OrderedDict<&str, i32> = OrderedDict::new();
    /// dict.reserve(10);
    /// assert!(dict.capacity() >= 10);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional);
    }

    /// Shrinks the capacity of the map as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.raw.shrink_to_fit();
    }
}
