use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::hash::{BuildHasher, Hash};
use core::mem;
use core::ops::RangeBounds;

use hashbrown::{DefaultHashBuilder, HashMap};

use super::key_sequence::{KeySequence, resolve_range};

/// The dual structure backing `OrderedDict`.
///
/// Every method that changes membership touches both fields before returning, so
/// the set of keys in `keys` always equals the domain of `values`.
#[derive(Clone)]
pub(crate) struct RawOrderedDict<K, V, S> {
    /// Iteration and positional order.
    keys: KeySequence<K>,
    /// Key to value lookup.
    values: HashMap<K, V, S>,
}

impl<K, V, S> RawOrderedDict<K, V, S> {
    pub(crate) fn with_hasher(hash_builder: S) -> Self {
        Self {
            keys: KeySequence::new(),
            values: HashMap::with_hasher(hash_builder),
        }
    }

    pub(crate) fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            keys: KeySequence::with_capacity(capacity),
            values: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the smaller of the two substructures' capacities.
    pub(crate) fn capacity(&self) -> usize {
        self.keys.capacity().min(self.values.capacity())
    }

    pub(crate) const fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(crate) fn hasher(&self) -> &S {
        self.values.hasher()
    }

    #[inline]
    pub(crate) fn keys(&self) -> &[K] {
        self.keys.as_slice()
    }

    #[inline]
    pub(crate) const fn values(&self) -> &HashMap<K, V, S> {
        &self.values
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }
}

impl<K, V, S> RawOrderedDict<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    #[inline]
    fn value_of(&self, key: &K) -> &V {
        self.values.get(key).expect("`RawOrderedDict::value_of()` - key sequence and value map are out of sync!")
    }

    /// Takes the value for a key that was just removed from the key sequence.
    fn take_value(values: &mut HashMap<K, V, S>, key: &K) -> (K, V) {
        values
            .remove_entry(key)
            .expect("`RawOrderedDict::take_value()` - key sequence and value map are out of sync!")
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.values.get(key)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.values.get_mut(key)
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.values.get_key_value(key)
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.values.contains_key(key)
    }

    /// Returns the position of `key`, or `None` if absent.
    ///
    /// Misses are answered by the value map; hits cost a linear scan.
    pub(crate) fn position_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if !self.values.contains_key(key) {
            return None;
        }
        self.keys.position_of(key)
    }

    pub(crate) fn get_index(&self, position: usize) -> Option<(&K, &V)> {
        let key = self.keys.get(position)?;
        Some((key, self.value_of(key)))
    }

    pub(crate) fn get_index_mut(&mut self, position: usize) -> Option<(&K, &mut V)> {
        let key = self.keys.get(position)?;
        let value = self
            .values
            .get_mut(key)
            .expect("`RawOrderedDict::get_index_mut()` - key sequence and value map are out of sync!");
        Some((key, value))
    }

    /// Updates the value for `key` in place, or appends a new entry.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.values.get_mut(&key) {
            return Some(mem::replace(slot, value));
        }
        self.keys.push(key.clone());
        self.values.insert(key, value);
        None
    }

    /// Appends an entry for a key known to be absent and returns its value slot.
    pub(crate) fn push_vacant(&mut self, key: K, value: V) -> &mut V {
        debug_assert!(!self.values.contains_key(&key), "`RawOrderedDict::push_vacant()` - `key` is present!");
        self.keys.push(key.clone());
        self.values.entry(key).or_insert(value)
    }

    pub(crate) fn append(&mut self, key: K, value: V) -> bool {
        if self.values.contains_key(&key) {
            return false;
        }
        self.keys.push(key.clone());
        self.values.insert(key, value);
        true
    }

    /// # Panics
    ///
    /// Panics if `position > len`, whether or not `key` is present.
    pub(crate) fn insert_at(&mut self, position: usize, key: K, value: V) -> bool {
        let len = self.len();
        assert!(position <= len, "insertion position {position} out of bounds for OrderedDict of length {len}");
        if self.values.contains_key(&key) {
            return false;
        }
        self.keys.insert(position, key.clone());
        self.values.insert(key, value);
        true
    }

    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (key, value) = self.values.remove_entry(key)?;
        let position = self
            .keys
            .position_of::<K>(&key)
            .expect("`RawOrderedDict::remove_entry()` - key sequence and value map are out of sync!");
        self.keys.remove(position);
        Some((key, value))
    }

    /// # Panics
    ///
    /// Panics if `position >= len`.
    pub(crate) fn remove_at(&mut self, position: usize) -> (K, V) {
        let len = self.len();
        assert!(position < len, "position {position} out of bounds for OrderedDict of length {len}");
        let key = self.keys.remove(position);
        Self::take_value(&mut self.values, &key)
    }

    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        if self.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let key = self.keys.pop()?;
        Some(Self::take_value(&mut self.values, &key))
    }

    /// Removes the entries in `range`, returning them in their original order.
    pub(crate) fn remove_range<R>(&mut self, range: &R) -> Vec<(K, V)>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(range, self.len());
        let Self { keys, values } = self;
        keys.drain(range).map(|key| Self::take_value(values, &key)).collect()
    }

    /// Replaces the entries in `range` with `entries`, skipping keys that are already present.
    pub(crate) fn replace_range<R, I>(&mut self, range: &R, entries: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = (K, V)>,
    {
        let range = resolve_range(range, self.len());
        let mut position = range.start;
        drop(self.remove_range(&range));
        for (key, value) in entries {
            if self.insert_at(position, key, value) {
                position += 1;
            }
        }
    }

    pub(crate) fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let Self { keys, values } = self;
        keys.retain(|key| {
            let value = values
                .get_mut(key)
                .expect("`RawOrderedDict::retain()` - key sequence and value map are out of sync!");
            let keep = f(key, value);
            if !keep {
                values.remove(key);
            }
            keep
        });
    }

    pub(crate) fn sort_keys_by<F>(&mut self, compare: F)
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        self.keys.sort_unstable_by(compare);
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.keys.reserve(additional);
        self.values.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.keys.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    /// Returns every entry in order, with mutable access to the values.
    ///
    /// The value slots are borrowed from the map in hash order, parked in a table keyed by
    /// key reference, then taken back out in key sequence order.
    pub(crate) fn entries_mut(&mut self) -> Vec<(&K, &mut V)> {
        let Self { keys, values } = self;
        let mut slots: HashMap<&K, &mut V, DefaultHashBuilder> =
            HashMap::with_capacity_and_hasher(values.len(), DefaultHashBuilder::default());
        slots.extend(values.iter_mut());
        keys.as_slice()
            .iter()
            .map(|key| {
                slots
                    .remove_entry(key)
                    .expect("`RawOrderedDict::entries_mut()` - key sequence and value map are out of sync!")
            })
            .collect()
    }

    /// Consumes the map, returning its entries in order.
    pub(crate) fn into_entries(self) -> Vec<(K, V)> {
        let Self { keys, mut values } = self;
        keys.into_vec().into_iter().map(|key| Self::take_value(&mut values, &key)).collect()
    }

    /// Verifies that both substructures agree.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.keys.len(), self.values.len(), "length mismatch");
        for (position, key) in self.keys.as_slice().iter().enumerate() {
            assert!(self.values.contains_key(key), "key at position {position} missing from value map");
            assert_eq!(self.keys.position_of(key), Some(position), "duplicate key at position {position}");
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use proptest::prelude::*;

    type Raw = RawOrderedDict<u8, u32, DefaultHashBuilder>;

    fn raw() -> Raw {
        RawOrderedDict::with_hasher(DefaultHashBuilder::default())
    }

    fn keys_of(raw: &Raw) -> Vec<u8> {
        raw.keys().to_vec()
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Insert(u8, u32),
        Append(u8, u32),
        InsertAt(usize, u8, u32),
        Remove(u8),
        RemoveAt(usize),
        RemoveRange(usize, usize),
        ReplaceRange(usize, usize, Vec<(u8, u32)>),
        PopFirst,
        PopLast,
        SortKeys,
        Retain(u32),
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            4 => (0u8..32, any::<u32>()).prop_map(|(k, v)| Operation::Insert(k, v)),
            3 => (0u8..32, any::<u32>()).prop_map(|(k, v)| Operation::Append(k, v)),
            3 => (any::<usize>(), 0u8..32, any::<u32>()).prop_map(|(p, k, v)| Operation::InsertAt(p, k, v)),
            3 => (0u8..32).prop_map(Operation::Remove),
            2 => any::<usize>().prop_map(Operation::RemoveAt),
            1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Operation::RemoveRange(a, b)),
            1 => (any::<usize>(), any::<usize>(), prop::collection::vec((0u8..32, any::<u32>()), 0..4))
                .prop_map(|(a, b, e)| Operation::ReplaceRange(a, b, e)),
            1 => Just(Operation::PopFirst),
            1 => Just(Operation::PopLast),
            1 => Just(Operation::SortKeys),
            1 => (1u32..5).prop_map(Operation::Retain),
        ]
    }

    /// Clamps a pair of arbitrary numbers into a valid `start..end` range over `len` entries.
    fn clamp_range(a: usize, b: usize, len: usize) -> (usize, usize) {
        let (a, b) = (a % (len + 1), b % (len + 1));
        (a.min(b), a.max(b))
    }

    fn model_position(model: &[(u8, u32)], key: u8) -> Option<usize> {
        model.iter().position(|(k, _)| *k == key)
    }

    proptest! {
        #[test]
        fn raw_behaves_like_vec_of_pairs(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(u8, u32)> = Vec::new();
            let mut raw = raw();

            for operation in operations {
                match operation {
                    Operation::Insert(k, v) => {
                        let expected = match model_position(&model, k) {
                            Some(p) => Some(mem::replace(&mut model[p].1, v)),
                            None => {
                                model.push((k, v));
                                None
                            }
                        };
                        prop_assert_eq!(raw.insert(k, v), expected);
                    }
                    Operation::Append(k, v) => {
                        let expected = model_position(&model, k).is_none();
                        if expected {
                            model.push((k, v));
                        }
                        prop_assert_eq!(raw.append(k, v), expected);
                    }
                    Operation::InsertAt(p, k, v) => {
                        let p = p % (model.len() + 1);
                        let expected = model_position(&model, k).is_none();
                        if expected {
                            model.insert(p, (k, v));
                        }
                        prop_assert_eq!(raw.insert_at(p, k, v), expected);
                    }
                    Operation::Remove(k) => {
                        let expected = model_position(&model, k).map(|p| model.remove(p));
                        prop_assert_eq!(raw.remove_entry(&k), expected);
                    }
                    Operation::RemoveAt(p) => {
                        if !model.is_empty() {
                            let p = p % model.len();
                            prop_assert_eq!(raw.remove_at(p), model.remove(p));
                        }
                    }
                    Operation::RemoveRange(a, b) => {
                        let (start, end) = clamp_range(a, b, model.len());
                        let expected: Vec<_> = model.drain(start..end).collect();
                        prop_assert_eq!(raw.remove_range(&(start..end)), expected);
                    }
                    Operation::ReplaceRange(a, b, entries) => {
                        let (start, end) = clamp_range(a, b, model.len());
                        model.drain(start..end);
                        let mut position = start;
                        for &(k, v) in &entries {
                            if model_position(&model, k).is_none() {
                                model.insert(position, (k, v));
                                position += 1;
                            }
                        }
                        raw.replace_range(&(start..end), entries);
                    }
                    Operation::PopFirst => {
                        let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                        prop_assert_eq!(raw.pop_first(), expected);
                    }
                    Operation::PopLast => {
                        prop_assert_eq!(raw.pop_last(), model.pop());
                    }
                    Operation::SortKeys => {
                        // Keys are unique, so an unstable sort is still deterministic.
                        model.sort_unstable_by_key(|(k, _)| *k);
                        raw.sort_keys_by(Ord::cmp);
                    }
                    Operation::Retain(divisor) => {
                        model.retain(|(_, v)| v % divisor == 0);
                        raw.retain(|_, v| *v % divisor == 0);
                    }
                }

                raw.check_invariants();
                let expected_keys: Vec<u8> = model.iter().map(|(k, _)| *k).collect();
                prop_assert_eq!(keys_of(&raw), expected_keys);
                for (position, (k, v)) in model.iter().enumerate() {
                    prop_assert_eq!(raw.get_index(position), Some((k, v)));
                    prop_assert_eq!(raw.position_of(k), Some(position));
                }
            }
        }
    }

    #[test]
    fn insert_stores_new_value_for_new_key() {
        let mut raw = raw();
        assert_eq!(raw.insert(1, 10), None);
        assert_eq!(raw.get(&1), Some(&10));
        assert_eq!(raw.insert(1, 11), Some(10));
        assert_eq!(raw.get(&1), Some(&11));
        assert_eq!(keys_of(&raw), vec![1]);
    }

    #[test]
    fn remove_entry_by_borrowed_key() {
        let mut raw: RawOrderedDict<String, u32, DefaultHashBuilder> =
            RawOrderedDict::with_hasher(DefaultHashBuilder::default());
        for (value, key) in ["a", "b", "c"].into_iter().enumerate() {
            raw.insert(String::from(key), u32::try_from(value).unwrap());
        }

        assert_eq!(raw.remove_entry("b"), Some((String::from("b"), 1)));
        assert_eq!(raw.remove_entry("b"), None);
        assert_eq!(raw.keys(), [String::from("a"), String::from("c")]);
        assert_eq!(raw.position_of("c"), Some(1));
        raw.check_invariants();
    }

    #[test]
    fn entries_mut_follows_key_order() {
        let mut raw = raw();
        for k in [7, 3, 9, 1] {
            raw.insert(k, u32::from(k));
        }
        raw.sort_keys_by(|a, b| b.cmp(a));

        let entries = raw.entries_mut();
        assert_eq!(entries.iter().map(|(k, _)| **k).collect::<Vec<_>>(), vec![9, 7, 3, 1]);
        for (k, v) in entries {
            *v += u32::from(*k) * 10;
        }
        assert_eq!(raw.get(&3), Some(&33));
        raw.check_invariants();
    }

    #[test]
    fn push_vacant_returns_slot() {
        let mut raw = raw();
        *raw.push_vacant(3, 1) += 1;
        assert_eq!(raw.get(&3), Some(&2));
        raw.check_invariants();
    }

    #[test]
    fn into_entries_preserves_order() {
        let mut raw = raw();
        raw.insert(9, 90);
        raw.insert(1, 10);
        raw.insert_at(1, 5, 50);
        assert_eq!(raw.into_entries(), vec![(9, 90), (5, 50), (1, 10)]);
    }

    #[test]
    fn capacity_covers_len() {
        let mut raw: Raw = RawOrderedDict::with_capacity_and_hasher(16, DefaultHashBuilder::default());
        assert!(raw.capacity() >= 16);
        for k in 0..40 {
            raw.insert(k, u32::from(k));
        }
        assert!(raw.capacity() >= raw.len());
        raw.clear();
        assert!(raw.is_empty());
        raw.shrink_to_fit();
        raw.reserve(4);
        assert!(raw.capacity() >= 4);
    }

    #[test]
    #[should_panic(expected = "insertion position 2 out of bounds for OrderedDict of length 1")]
    fn insert_at_past_end_panics_even_for_present_key() {
        let mut raw = raw();
        raw.insert(1, 1);
        raw.insert_at(2, 1, 1);
    }

    #[test]
    #[should_panic(expected = "position 0 out of bounds for OrderedDict of length 0")]
    fn remove_at_on_empty_panics() {
        let mut raw = raw();
        raw.remove_at(0);
    }
}
