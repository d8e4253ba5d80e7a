use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{BuildHasher, Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;
use core::slice;

use hashbrown::{DefaultHashBuilder, HashMap};

use crate::raw::RawOrderedDict;

mod capacity;
mod entry;
mod positional;

pub use crate::Position;
pub use entry::{Entry, OccupiedEntry, VacantEntry};

/// An insertion-ordered map based on a key vector and a hash map.
///
/// Keys must implement [`Hash`] and [`Eq`] for lookup, and [`Clone`] because each key is
/// stored once in the key sequence and once in the value map. Values carry no bounds.
///
/// Iterators obtained from functions such as [`OrderedDict::iter`], [`OrderedDict::iter_mut`],
/// [`OrderedDict::values`], or [`OrderedDict::keys`] produce their items in the order the keys
/// were first inserted, unless that order has since been changed by a sort or a positional
/// operation.
///
/// It is a logic error for a key to be modified in such a way that the key's hash, as
/// determined by the [`Hash`] trait, or its equality, as determined by the [`Eq`] trait,
/// changes while it is in the map. The behavior resulting from such a logic error is not
/// specified, but will be encapsulated to the `OrderedDict` that observed the logic error
/// and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use ordered_dict::OrderedDict;
///
/// // type inference lets us omit an explicit type signature (which
/// // would be `OrderedDict<&str, &str>` in this example).
/// let mut book_reviews = OrderedDict::new();
///
/// // review some books.
/// book_reviews.insert("Adventures of Huckleberry Finn", "My favorite book.");
/// book_reviews.insert("Grimms' Fairy Tales", "Masterpiece.");
/// book_reviews.insert("Pride and Prejudice", "Very enjoyable.");
/// book_reviews.insert("The Adventures of Sherlock Holmes", "Eye lyked it alot.");
///
/// // check for a specific one.
/// if !book_reviews.contains_key("Les Misérables") {
///     println!("We've got {} reviews, but Les Misérables ain't one.",
///              book_reviews.len());
/// }
///
/// // oops, this review has a lot of spelling mistakes, let's delete it.
/// book_reviews.remove("The Adventures of Sherlock Holmes");
///
/// // iterate over everything, in the order the reviews were written.
/// for (book, review) in &book_reviews {
///     println!("{book}: \"{review}\"");
/// }
/// ```
///
/// An `OrderedDict` with a known list of items can be initialized from an array. A key
/// that appears twice keeps the position of its first occurrence and the value of its last:
///
/// ```
/// use ordered_dict::OrderedDict;
///
/// let dict = OrderedDict::from([(1, "x"), (2, "y"), (1, "z")]);
/// assert_eq!(dict.to_string(), "[1: z, 2: y]");
/// ```
pub struct OrderedDict<K, V, S = DefaultHashBuilder> {
    raw: RawOrderedDict<K, V, S>,
}

/// An iterator over the entries of an `OrderedDict`.
///
/// This `struct` is created by the [`iter`] and [`range`] methods on [`OrderedDict`]. See
/// their documentation for more.
///
/// # Examples
///
/// ```
/// use ordered_dict::OrderedDict;
///
/// let dict = OrderedDict::from([(2, "b"), (1, "a")]);
/// let mut iter = dict.iter();
/// assert_eq!(iter.next(), Some((&2, &"b")));
/// assert_eq!(iter.next_back(), Some((&1, &"a")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OrderedDict::iter
/// [`range`]: OrderedDict::range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V, S> {
    keys: slice::Iter<'a, K>,
    values: &'a HashMap<K, V, S>,
}

/// An owning iterator over the entries of an `OrderedDict`, in order.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedDict`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of an `OrderedDict`.
///
/// This `struct` is created by the [`keys`] method on [`OrderedDict`]. See its
/// documentation for more.
///
/// [`keys`]: OrderedDict::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K> {
    inner: slice::Iter<'a, K>,
}

/// An iterator over the values of an `OrderedDict`.
///
/// This `struct` is created by the [`values`] method on [`OrderedDict`]. See its
/// documentation for more.
///
/// [`values`]: OrderedDict::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V, S> {
    inner: Iter<'a, K, V, S>,
}

/// A mutable iterator over the entries of an `OrderedDict`, in order.
///
/// This `struct` is created by the [`iter_mut`] method on [`OrderedDict`]. See its
/// documentation for more.
///
/// [`iter_mut`]: OrderedDict::iter_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, K, V> {
    inner: alloc::vec::IntoIter<(&'a K, &'a mut V)>,
}

/// A mutable iterator over the values of an `OrderedDict`, in order.
///
/// This `struct` is created by the [`values_mut`] method on [`OrderedDict`]. See its
/// documentation for more.
///
/// [`values_mut`]: OrderedDict::values_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

/// An owning iterator over the keys of an `OrderedDict`.
///
/// This `struct` is created by the [`into_keys`] method on [`OrderedDict`].
///
/// [`into_keys`]: OrderedDict::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

/// An owning iterator over the values of an `OrderedDict`.
///
/// This `struct` is created by the [`into_values`] method on [`OrderedDict`].
///
/// [`into_values`]: OrderedDict::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<K, V> {
    inner: IntoIter<K, V>,
}

impl<K, V> OrderedDict<K, V, DefaultHashBuilder> {
    /// Makes a new, empty `OrderedDict`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    ///
    /// // entries can now be inserted into the empty map
    /// dict.insert(1, "a");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<K, V, S> OrderedDict<K, V, S> {
    /// Creates an empty map which will use the given hash builder to hash keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashbrown::DefaultHashBuilder;
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::with_hasher(DefaultHashBuilder::default());
    /// dict.insert(1, 2);
    /// ```
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        OrderedDict {
            raw: RawOrderedDict::with_hasher(hash_builder),
        }
    }

    /// Returns a reference to the map's [`BuildHasher`].
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.raw.hasher()
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut a = OrderedDict::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the map, removing all elements. Allocated capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut a = OrderedDict::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Gets an iterator over the entries of the map, in order.
    ///
    /// Each call returns an independent cursor; iterators can be cloned to restart a
    /// traversal from their current point.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    /// dict.insert(3, "c");
    /// dict.insert(2, "b");
    /// dict.insert(1, "a");
    ///
    /// let first = dict.iter().next().unwrap();
    /// assert_eq!(first, (&3, &"c"));
    /// assert_eq!(dict.iter().count(), 3);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter::new(self.raw.keys(), self.raw.values())
    }

    /// Gets an iterator over the keys of the map, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut a = OrderedDict::new();
    /// a.insert(2, "b");
    /// a.insert(1, "a");
    ///
    /// let keys: Vec<_> = a.keys().cloned().collect();
    /// assert_eq!(keys, [2, 1]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K> {
        Keys {
            inner: self.raw.keys().iter(),
        }
    }

    /// Gets an iterator over the values of the map, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut a = OrderedDict::new();
    /// a.insert(1, "hello");
    /// a.insert(2, "goodbye");
    ///
    /// let values: Vec<&str> = a.values().cloned().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V, S> {
        Values { inner: self.iter() }
    }
}

impl<K, V, S> OrderedDict<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Builds a map from `iter`, then sorts its keys with `compare`.
    ///
    /// Duplicate keys in `iter` resolve exactly as for [`FromIterator`]. The sort is not
    /// stable: keys that compare equal may end up in any relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let dict: OrderedDict<_, _> =
    ///     OrderedDict::from_iter_sorted_by([(3, "c"), (1, "a"), (2, "b")], |a, b| b.cmp(a));
    /// let keys: Vec<_> = dict.keys().copied().collect();
    /// assert_eq!(keys, [3, 2, 1]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n)
    pub fn from_iter_sorted_by<I, F>(iter: I, compare: F) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        F: FnMut(&K, &K) -> Ordering,
        S: Default,
    {
        let mut dict: Self = iter.into_iter().collect();
        dict.sort_keys_by(compare);
        dict
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but [`Hash`] and [`Eq`] on
    /// the borrowed form *must* match those for the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    /// dict.insert(1, "a");
    /// assert_eq!(dict.get(&1), Some(&"a"));
    /// assert_eq!(dict.get(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) expected
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.get(key)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// The returned key is the one stored in the map, which matters for key types where
    /// non-identical keys can be considered equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    /// dict.insert(1, "a");
    /// assert_eq!(dict.get_key_value(&1), Some((&1, &"a")));
    /// assert_eq!(dict.get_key_value(&2), None);
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    /// dict.insert(1, "a");
    /// if let Some(x) = dict.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(dict[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    /// dict.insert(1, "a");
    /// assert!(dict.contains_key(&1));
    /// assert!(!dict.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.contains_key(key)
    }

    /// Returns the first entry in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    /// assert_eq!(dict.first(), None);
    /// dict.insert(2, "b");
    /// dict.insert(1, "a");
    /// assert_eq!(dict.first(), Some((&2, &"b")));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.raw.get_index(0)
    }

    /// Returns the last entry in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    /// assert_eq!(dict.last(), None);
    /// dict.insert(2, "b");
    /// dict.insert(1, "a");
    /// assert_eq!(dict.last(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.raw.get_index(self.len().checked_sub(1)?)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, the pair is appended at the end and
    /// `None` is returned.
    ///
    /// If the map did have this key present, the value is updated in place, and the old
    /// value is returned. Neither the stored key nor its position change.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    /// assert_eq!(dict.insert(37, "a"), None);
    /// assert_eq!(dict.insert(12, "b"), None);
    ///
    /// assert_eq!(dict.insert(37, "c"), Some("a"));
    /// assert_eq!(dict[&37], "c");
    /// assert_eq!(dict.position_of(&37), Some(0));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) expected, amortized
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Appends a key-value pair if the key is not already present.
    ///
    /// Unlike [`insert`](Self::insert), an existing key is left untouched: both its value
    /// and its position are preserved and `value` is dropped. Returns `true` if the pair
    /// was appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    /// assert!(dict.append("a", 1));
    /// assert!(dict.append("b", 2));
    /// assert!(!dict.append("a", 99));
    ///
    /// assert_eq!(dict["a"], 1);
    /// assert_eq!(dict.to_string(), "[a: 1, b: 2]");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) expected, amortized
    pub fn append(&mut self, key: K, value: V) -> bool {
        self.raw.append(key, value)
    }

    /// Removes a key from the map, returning the value at the key if the key was
    /// previously in the map. Entries after it move down one position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    /// dict.insert(1, "a");
    /// assert_eq!(dict.remove(&1), Some("a"));
    /// assert_eq!(dict.remove(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if the key was
    /// previously in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::new();
    /// dict.insert(1, "a");
    /// assert_eq!(dict.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(dict.remove_entry(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.remove_entry(key)
    }

    /// Removes and returns the first entry in iteration order, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::from([(2, "b"), (1, "a")]);
    /// assert_eq!(dict.pop_first(), Some((2, "b")));
    /// assert_eq!(dict.pop_first(), Some((1, "a")));
    /// assert_eq!(dict.pop_first(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_first()
    }

    /// Removes and returns the last entry in iteration order, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::from([(2, "b"), (1, "a")]);
    /// assert_eq!(dict.pop_last(), Some((1, "a")));
    /// assert_eq!(dict.pop_last(), Some((2, "b")));
    /// assert_eq!(dict.pop_last(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) expected
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_last()
    }

    /// Reorders the entries by comparing their keys with `compare`.
    ///
    /// Only the key sequence is permuted; values stay attached to their keys. The sort is
    /// not stable. If `compare` is not a strict weak ordering the resulting order is
    /// unspecified, but the map stays consistent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::from([("b", 2), ("c", 3), ("a", 1)]);
    /// dict.sort_keys_by(|a, b| a.cmp(b));
    /// assert_eq!(dict.to_string(), "[a: 1, b: 2, c: 3]");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n)
    pub fn sort_keys_by<F>(&mut self, compare: F)
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        self.raw.sort_keys_by(compare);
    }

    /// Reorders the entries by their keys' natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::from([(3, "c"), (1, "a"), (2, "b")]);
    /// dict.sort_keys();
    /// let keys: Vec<_> = dict.keys().copied().collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn sort_keys(&mut self)
    where
        K: Ord,
    {
        self.raw.sort_keys_by(K::cmp);
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all pairs `(k, v)` for which `f(&k, &mut v)` returns `false`.
    /// The elements are visited in order, and the survivors keep their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict: OrderedDict<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// // Keep only the elements with even-numbered keys.
    /// dict.retain(|&k, _| k % 2 == 0);
    /// assert!(dict.into_iter().eq(vec![(0, 0), (2, 20), (4, 40), (6, 60)]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.raw.retain(f);
    }

    /// Gets a mutable iterator over the entries of the map, in order.
    ///
    /// Building the iterator costs one O(n) pass and a temporary allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::from([("a", 1), ("b", 2), ("c", 3)]);
    ///
    /// // add 10 to the value if the key isn't "a"
    /// for (key, value) in dict.iter_mut() {
    ///     if key != &"a" {
    ///         *value += 10;
    ///     }
    /// }
    /// assert_eq!(dict.to_string(), "[a: 1, b: 12, c: 13]");
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.raw.entries_mut().into_iter(),
        }
    }

    /// Gets a mutable iterator over the values of the map, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict = OrderedDict::from([("a", String::from("hello")), ("b", String::from("goodbye"))]);
    ///
    /// for value in dict.values_mut() {
    ///     value.push('!');
    /// }
    ///
    /// let values: Vec<String> = dict.values().cloned().collect();
    /// assert_eq!(values, ["hello!", "goodbye!"]);
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut { inner: self.iter_mut() }
    }

    /// Gets the given key's corresponding entry in the map for in-place manipulation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut count: OrderedDict<&str, usize> = OrderedDict::new();
    ///
    /// // count the number of occurrences of letters in the vec
    /// for x in ["a", "b", "a", "c", "a", "b"] {
    ///     count.entry(x).and_modify(|curr| *curr += 1).or_insert(1);
    /// }
    ///
    /// assert_eq!(count.to_string(), "[a: 3, b: 2, c: 1]");
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, S> {
        if self.raw.contains_key(&key) {
            Entry::Occupied(OccupiedEntry { key, dict: &mut self.raw })
        } else {
            Entry::Vacant(VacantEntry { key, dict: &mut self.raw })
        }
    }

    /// Builds a new, independent map holding only the requested keys, in the order they
    /// were requested.
    ///
    /// Keys that are not present are skipped. A key requested more than once appears once,
    /// at its first requested position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let dict = OrderedDict::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let subset = dict.subset(["c", "missing", "a"]);
    /// assert_eq!(subset.to_string(), "[c: 3, a: 1]");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(m) expected, where m is the number of requested keys.
    #[must_use]
    pub fn subset<'q, Q, I>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = &'q Q>,
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + 'q,
        V: Clone,
        S: Clone,
    {
        let mut subset = Self::with_hasher(self.hasher().clone());
        for key in keys {
            if let Some((k, v)) = self.raw.get_key_value(key) {
                subset.raw.append(k.clone(), v.clone());
            }
        }
        subset
    }

    /// Creates a consuming iterator visiting all the keys, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let dict = OrderedDict::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<i32> = dict.into_keys().collect();
    /// assert_eq!(keys, [2, 1]);
    /// ```
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    /// Creates a consuming iterator visiting all the values, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let dict = OrderedDict::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<&str> = dict.into_values().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }
}

impl<K: Clone, V: Clone, S: Clone> Clone for OrderedDict<K, V, S> {
    fn clone(&self) -> Self {
        OrderedDict {
            raw: self.raw.clone(),
        }
    }
}

impl<K, V, S> Hash for OrderedDict<K, V, S>
where
    K: Hash + Eq,
    V: Hash,
    S: BuildHasher,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

/// Two maps are equal when they hold the same keys in the same order with equal values.
impl<K, V, S> PartialEq for OrderedDict<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, S> Eq for OrderedDict<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> fmt::Debug for OrderedDict<K, V, S>
where
    K: fmt::Debug + Hash + Eq,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders the map as `[key: value, ...]` in iteration order, or `[]` when empty.
///
/// # Examples
///
/// ```
/// use ordered_dict::OrderedDict;
///
/// let dict = OrderedDict::from([("k1", "v1"), ("k2", "v2")]);
/// assert_eq!(dict.to_string(), "[k1: v1, k2: v2]");
///
/// let empty: OrderedDict<&str, &str> = OrderedDict::new();
/// assert_eq!(empty.to_string(), "[]");
/// ```
impl<K, V, S> fmt::Display for OrderedDict<K, V, S>
where
    K: fmt::Display + Hash + Eq,
    V: fmt::Display,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        f.write_str("]")
    }
}

impl<K, V, S: Default> Default for OrderedDict<K, V, S> {
    fn default() -> Self {
        OrderedDict::with_hasher(S::default())
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedDict<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut dict = OrderedDict::with_capacity_and_hasher(iter.size_hint().0, S::default());
        dict.extend(iter);
        dict
    }
}

/// Extends the map with [`insert`](OrderedDict::insert) semantics: a key that is already
/// present has its value replaced and keeps its position.
impl<K, V, S> Extend<(K, V)> for OrderedDict<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for OrderedDict<K, V, S>
where
    K: Hash + Eq + Copy,
    V: Copy,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedDict<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, S>;

    fn into_iter(self) -> Iter<'a, K, V, S> {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut OrderedDict<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for OrderedDict<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let dict = OrderedDict::from([(2, "b"), (1, "a")]);
    /// let mut iter = dict.into_iter();
    /// assert_eq!(iter.next(), Some((2, "b")));
    /// assert_eq!(iter.next_back(), Some((1, "a")));
    /// ```
    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.into_entries().into_iter(),
        }
    }
}

impl<K, Q, V, S> Index<&Q> for OrderedDict<K, V, S>
where
    K: Borrow<Q> + Hash + Eq + Clone,
    Q: ?Sized + Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `OrderedDict`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Hash + Eq + Clone, V, const N: usize> From<[(K, V); N]> for OrderedDict<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

#[inline]
fn lookup<'a, K, V, S>(values: &'a HashMap<K, V, S>, key: &K) -> &'a V
where
    K: Hash + Eq,
    S: BuildHasher,
{
    values.get(key).expect("`Iter` - key sequence and value map are out of sync!")
}

impl<'a, K, V, S> Iter<'a, K, V, S> {
    pub(crate) fn new(keys: &'a [K], values: &'a HashMap<K, V, S>) -> Self {
        Iter {
            keys: keys.iter(),
            values,
        }
    }
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        Some((key, lookup(self.values, key)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let key = self.keys.nth(n)?;
        Some((key, lookup(self.values, key)))
    }
}

impl<K, V, S> DoubleEndedIterator for Iter<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        Some((key, lookup(self.values, key)))
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ExactSizeIterator for Iter<'_, K, V, S> {
    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> FusedIterator for Iter<'_, K, V, S> {}

impl<K, V, S> Clone for Iter<'_, K, V, S> {
    fn clone(&self) -> Self {
        Iter {
            keys: self.keys.clone(),
            values: self.values,
        }
    }
}

impl<K, V, S> fmt::Debug for Iter<'_, K, V, S>
where
    K: fmt::Debug + Hash + Eq,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice().iter().map(|(k, v)| (k, &**v))).finish()
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for ValuesMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(_, v)| &**v)).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K, V> Default for IntoIter<K, V> {
    fn default() -> Self {
        IntoIter {
            inner: alloc::vec::Vec::new().into_iter(),
        }
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for Keys<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K> FusedIterator for Keys<'_, K> {}

impl<K> Clone for Keys<'_, K> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K> Default for Keys<'_, K> {
    fn default() -> Self {
        Keys {
            inner: <&[K]>::default().iter(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Keys<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.clone()).finish()
    }
}

impl<'a, K, V, S> Iterator for Values<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> DoubleEndedIterator for Values<'_, K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ExactSizeIterator for Values<'_, K, V, S> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> FusedIterator for Values<'_, K, V, S> {}

impl<K, V, S> Clone for Values<'_, K, V, S> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V, S> fmt::Debug for Values<'_, K, V, S>
where
    K: Hash + Eq,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoKeys<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for IntoKeys<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(k, _)| k)).finish()
    }
}

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoValues<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoValues<K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for IntoValues<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.as_slice().iter().map(|(_, v)| v)).finish()
    }
}
