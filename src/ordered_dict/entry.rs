use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;

use crate::raw::RawOrderedDict;

/// A view into a single entry in a map, which may either be vacant or occupied.
///
/// This `enum` is constructed from the [`entry`] method on [`crate::OrderedDict`].
///
/// # Examples
///
/// ```
/// use ordered_dict::OrderedDict;
/// use ordered_dict::ordered_dict::Entry;
///
/// let mut dict = OrderedDict::new();
///
/// match dict.entry("oz") {
///     Entry::Vacant(v) => {
///         v.insert(1);
///     }
///     Entry::Occupied(mut o) => {
///         *o.get_mut() += 1;
///     }
/// }
/// assert_eq!(dict["oz"], 1);
/// ```
///
/// [`entry`]: crate::OrderedDict::entry
pub enum Entry<'a, K: 'a, V: 'a, S: 'a> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V, S>),

    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V, S>),
}

impl<K, V, S> fmt::Debug for Entry<'_, K, V, S>
where
    K: fmt::Debug + Hash + Eq + Clone,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Vacant(v) => f.debug_tuple("Entry").field(v).finish(),
            Entry::Occupied(o) => f.debug_tuple("Entry").field(o).finish(),
        }
    }
}

/// A view into a vacant entry in an `OrderedDict`.
/// It is part of the [`Entry`] enum.
///
/// Inserting through a vacant entry appends the pair at the end of the map.
pub struct VacantEntry<'a, K, V, S> {
    pub(crate) key: K,
    pub(crate) dict: &'a mut RawOrderedDict<K, V, S>,
}

impl<K: fmt::Debug, V, S> fmt::Debug for VacantEntry<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VacantEntry").field("key", &self.key).finish()
    }
}

/// A view into an occupied entry in an `OrderedDict`.
/// It is part of the [`Entry`] enum.
pub struct OccupiedEntry<'a, K, V, S> {
    pub(crate) key: K,
    pub(crate) dict: &'a mut RawOrderedDict<K, V, S>,
}

impl<K, V, S> fmt::Debug for OccupiedEntry<'_, K, V, S>
where
    K: fmt::Debug + Hash + Eq + Clone,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupiedEntry").field("key", self.key()).field("value", self.get()).finish()
    }
}

impl<'a, K, V, S> Entry<'a, K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Ensures a value is in the entry by appending the default if empty, and returns
    /// a mutable reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict: OrderedDict<&str, usize> = OrderedDict::new();
    /// dict.entry("poneyland").or_insert(12);
    ///
    /// assert_eq!(dict["poneyland"], 12);
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => v.insert(default),
        }
    }

    /// Ensures a value is in the entry by appending the result of the default function if
    /// empty, and returns a mutable reference to the value in the entry.
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => v.insert(default()),
        }
    }

    /// Ensures a value is in the entry by appending, if empty, the result of the default
    /// function, which is given a reference to the entry's key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict: OrderedDict<&str, usize> = OrderedDict::new();
    ///
    /// dict.entry("poneyland").or_insert_with_key(|key| key.chars().count());
    ///
    /// assert_eq!(dict["poneyland"], 9);
    /// ```
    pub fn or_insert_with_key<F: FnOnce(&K) -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(o) => o.into_mut(),
            Entry::Vacant(v) => {
                let value = default(&v.key);
                v.insert(value)
            }
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(o) => o.key(),
            Entry::Vacant(v) => v.key(),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any potential inserts
    /// into the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    ///
    /// let mut dict: OrderedDict<&str, usize> = OrderedDict::new();
    ///
    /// dict.entry("poneyland").and_modify(|e| *e += 1).or_insert(42);
    /// assert_eq!(dict["poneyland"], 42);
    ///
    /// dict.entry("poneyland").and_modify(|e| *e += 1).or_insert(42);
    /// assert_eq!(dict["poneyland"], 43);
    /// ```
    #[must_use]
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Entry::Occupied(o) = &mut self {
            f(o.get_mut());
        }
        self
    }

    /// Ensures a value is in the entry by appending the default value if empty,
    /// and returns a mutable reference to the value in the entry.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }
}

impl<'a, K, V, S> VacantEntry<'a, K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Gets a reference to the key that would be used when inserting a value
    /// through the `VacantEntry`.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Appends the entry's key with `value` at the end of the map and returns a mutable
    /// reference to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    /// use ordered_dict::ordered_dict::Entry;
    ///
    /// let mut dict = OrderedDict::from([("a", 1)]);
    ///
    /// if let Entry::Vacant(v) = dict.entry("b") {
    ///     *v.insert(2) += 1;
    /// }
    /// assert_eq!(dict.to_string(), "[a: 1, b: 3]");
    /// ```
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry { key, dict } = self;
        dict.push_vacant(key, value)
    }
}

impl<'a, K, V, S> OccupiedEntry<'a, K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the entry's position in iteration order.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn position(&self) -> usize {
        self.dict.position_of(&self.key).expect("`OccupiedEntry::position()` - entry key is missing!")
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        self.dict.get(&self.key).expect("`OccupiedEntry::get()` - entry key is missing!")
    }

    /// Gets a mutable reference to the value in the entry.
    ///
    /// If you need a reference to the `OccupiedEntry` that may outlive the destruction of
    /// the `Entry` value, see [`into_mut`](Self::into_mut).
    pub fn get_mut(&mut self) -> &mut V {
        self.dict.get_mut(&self.key).expect("`OccupiedEntry::get_mut()` - entry key is missing!")
    }

    /// Converts the entry into a mutable reference to its value.
    pub fn into_mut(self) -> &'a mut V {
        let OccupiedEntry { key, dict } = self;
        dict.get_mut(&key).expect("`OccupiedEntry::into_mut()` - entry key is missing!")
    }

    /// Sets the value of the entry and returns the entry's old value. The position is
    /// unchanged.
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }

    /// Takes the value out of the entry and returns it. Later entries move down one
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_dict::OrderedDict;
    /// use ordered_dict::ordered_dict::Entry;
    ///
    /// let mut dict = OrderedDict::from([("a", 1), ("b", 2)]);
    ///
    /// if let Entry::Occupied(o) = dict.entry("a") {
    ///     assert_eq!(o.position(), 0);
    ///     assert_eq!(o.remove(), 1);
    /// }
    /// assert_eq!(dict.position_of("b"), Some(0));
    /// ```
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Takes ownership of the key and value from the map.
    pub fn remove_entry(self) -> (K, V) {
        self.dict.remove_entry(&self.key).expect("`OccupiedEntry::remove_entry()` - entry key is missing!")
    }
}
