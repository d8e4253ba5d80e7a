use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::ops::{Index, IndexMut, RangeBounds};

use super::{Iter, OrderedDict};
use crate::Position;
use crate::raw::resolve_range;

impl<K, V, S> OrderedDict<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Returns the zero-based position of `key` in iteration order, or `None` if the key
    /// is not present.
    ///
    /// # Complexity
    ///
    /// O(1) expected for an absent key, O(n) otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    /// dict.insert(20, "b");
    /// dict.insert(10, "a");
    ///
    /// assert_eq!(dict.position_of(&10), Some(1));
    /// assert_eq!(dict.position_of(&15), None);
    /// ```
    #[must_use]
    pub fn position_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.position_of(key)
    }

    /// Returns the key-value pair at `position`, or `None` if `position` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let dict = OrderedDict::from([("a", 10), ("c", 30), ("b", 20)]);
    /// assert_eq!(dict.get_index(1), Some((&"c", &30)));
    /// assert!(dict.get_index(3).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) expected
    #[must_use]
    pub fn get_index(&self, position: usize) -> Option<(&K, &V)> {
        self.raw.get_index(position)
    }

    /// Returns the key and a mutable reference to the value at `position`, or `None` if
    /// `position` is out of bounds.
    ///
    /// The key is returned as a shared reference because mutating it would break the
    /// map's lookup structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::from([(10, "a"), (5, "b")]);
    /// if let Some((key, value)) = dict.get_index_mut(1) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    /// assert_eq!(dict.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_index_mut(&mut self, position: usize) -> Option<(&K, &mut V)> {
        self.raw.get_index_mut(position)
    }

    /// Returns the key-value pair at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let dict = OrderedDict::from([("a", 1), ("b", 2)]);
    /// assert_eq!(dict.entry_at(1), (&"b", &2));
    /// ```
    #[must_use]
    pub fn entry_at(&self, position: usize) -> (&K, &V) {
        let len = self.len();
        self.raw
            .get_index(position)
            .unwrap_or_else(|| panic!("position {position} out of bounds for OrderedDict of length {len}"))
    }

    /// Inserts a key-value pair at `position`, shifting all later entries up by one, if the
    /// key is not already present.
    ///
    /// An existing key is left untouched: its value and position are preserved and `value`
    /// is dropped. Returns `true` if the pair was inserted.
    ///
    /// # Panics
    ///
    /// Panics if `position > len`, even when the key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::from([("a", 1), ("b", 2)]);
    /// assert!(dict.insert_at(0, "c", 3));
    /// assert!(!dict.insert_at(2, "a", 99));
    ///
    /// assert_eq!(dict.to_string(), "[c: 3, a: 1, b: 2]");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn insert_at(&mut self, position: usize, key: K, value: V) -> bool {
        self.raw.insert_at(position, key, value)
    }

    /// Removes and returns the key-value pair at `position`, shifting all later entries down
    /// by one.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(dict.remove_at(1), ("b", 2));
    /// assert_eq!(dict.to_string(), "[a: 1, c: 3]");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn remove_at(&mut self, position: usize) -> (K, V) {
        self.raw.remove_at(position)
    }

    /// Removes the entries in the positional `range` and returns them in their original order.
    ///
    /// # Panics
    ///
    /// Panics if the range start is greater than its end, or if the end is greater than
    /// `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    /// assert_eq!(dict.remove_range(1..3), [("b", 2), ("c", 3)]);
    /// assert_eq!(dict.to_string(), "[a: 1, d: 4]");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn remove_range<R>(&mut self, range: R) -> Vec<(K, V)>
    where
        R: RangeBounds<usize>,
    {
        self.raw.remove_range(&range)
    }

    /// Replaces the entries in the positional `range` with `entries`.
    ///
    /// The entries currently in `range` are removed first. The replacements are then inserted
    /// in order starting at the range's start; any replacement whose key is already present
    /// in the map, including one inserted earlier from `entries`, is skipped.
    ///
    /// # Panics
    ///
    /// Panics if the range start is greater than its end, or if the end is greater than
    /// `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::from([("a", 1), ("b", 2), ("c", 3)]);
    /// dict.replace_range(1..2, [("x", 10), ("a", 99), ("y", 20)]);
    /// assert_eq!(dict.to_string(), "[a: 1, x: 10, y: 20, c: 3]");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n + m), where m is the number of replacement entries.
    pub fn replace_range<R, I>(&mut self, range: R, entries: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.raw.replace_range(&range, entries);
    }

    /// Constructs a double-ended iterator over the entries in the positional `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range start is greater than its end, or if the end is greater than
    /// `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let dict = OrderedDict::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let mut range = dict.range(1..);
    /// assert_eq!(range.next(), Some((&1, &"a")));
    /// assert_eq!(range.next_back(), Some((&2, &"b")));
    /// assert_eq!(range.next(), None);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<'_, K, V, S>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(&range, self.len());
        Iter::new(&self.raw.keys()[range], self.raw.values())
    }

    /// Builds a new, independent map holding the entries in the positional `range`, in order.
    ///
    /// # Panics
    ///
    /// Panics if the range start is greater than its end, or if the end is greater than
    /// `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let dict = OrderedDict::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let tail = dict.subrange(1..);
    /// assert_eq!(tail.to_string(), "[b: 2, c: 3]");
    /// assert_eq!(dict.len(), 3);
    /// ```
    #[must_use]
    pub fn subrange<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
        V: Clone,
        S: Clone,
    {
        let entries = self.range(range);
        let mut subrange = Self::with_capacity_and_hasher(entries.len(), self.hasher().clone());
        for (k, v) in entries {
            subrange.raw.push_vacant(k.clone(), v.clone());
        }
        subrange
    }
}

/// Indexes into the map by position.
///
/// # Panics
///
/// Panics if `position` is out of bounds.
///
/// # Examples
///
/// ```
/// use ordered_dict::{OrderedDict, Position};
///
/// let dict = OrderedDict::from([("b", 2), ("a", 1)]);
/// assert_eq!(dict[Position(0)], 2);
/// ```
impl<K, V, S> Index<Position> for OrderedDict<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, position: Position) -> &Self::Output {
        self.get_index(position.0).map(|(_, v)| v).expect("index out of bounds")
    }
}

/// Mutably indexes into the map by position.
///
/// # Panics
///
/// Panics if `position` is out of bounds.
///
/// # Examples
///
/// ```
/// use ordered_dict::{OrderedDict, Position};
///
/// let mut dict = OrderedDict::from([("a", 1), ("b", 2)]);
/// dict[Position(1)] = 5;
/// assert_eq!(dict.get(&"b"), Some(&5));
/// ```
impl<K, V, S> IndexMut<Position> for OrderedDict<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn index_mut(&mut self, position: Position) -> &mut Self::Output {
        self.get_index_mut(position.0).map(|(_, v)| v).expect("index out of bounds")
    }
}
