use std::{
    borrow::Borrow,
    collections::{VecDeque, hash_map::RandomState, vec_deque},
    hash::{BuildHasher, Hash, Hasher},
    mem, ptr, slice, vec,
};

/// Number of buckets a table starts with unless a capacity is given.
pub(crate) const DEFAULT_CAPACITY: usize = 5;

/// Load factor above which an insert grows the table first.
///
/// The check uses the occupancy *before* the new entry is placed, so the
/// load factor may end up slightly above the threshold right after the
/// insert that crossed it.
pub(crate) const LOAD_FACTOR_THRESHOLD: f64 = 0.7;

/// Multiplier applied to the capacity on growth. Doubling keeps the
/// amortized insert cost constant; capacities are 5, 10, 20, ...
const GROWTH_FACTOR: usize = 2;

/// An owned key-value pair stored in a bucket chain.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    /// The entry's key; unique across the whole table.
    key: K,
    /// The value associated with the key.
    value: V,
}

/// A bucket chain: the ordered sequence of entries assigned to one slot.
type Bucket<K, V> = VecDeque<Entry<K, V>>;

/// A hash table resolving collisions by separate chaining.
///
/// Every key is slotted with `hash(key) % capacity`; all entries sharing a
/// slot live in that slot's chain and are searched linearly by key
/// equality. When an insert finds the load factor above 0.7 the bucket
/// array is doubled and every entry redistributed, so the chains stay
/// short and operations stay amortized O(1). Capacity never shrinks.
///
/// The hasher is an explicit type parameter (`S: BuildHasher`, defaulting
/// to the standard `RandomState`), so composite keys such as tuples hash
/// through their derived `Hash` with no ambient customization.
///
/// Note: this implementation is not thread-safe. For concurrent access,
/// use [`ConcurrentChainedMap`](crate::ConcurrentChainedMap).
#[derive(Debug, Clone)]
pub struct ChainedHashMap<K, V, S = RandomState> {
    /// The bucket array; its length is the table's capacity, always > 0.
    buckets: Vec<Bucket<K, V>>,
    /// Number of entries across all buckets.
    size: usize,
    /// Builds the hasher used to slot keys.
    build_hasher: S,
}

impl<K, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ChainedHashMap<K, V> {
    /// Creates an empty `ChainedHashMap` with the default capacity of 5
    /// buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `ChainedHashMap` with the given number of buckets
    /// (at least 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    /// Creates an empty `ChainedHashMap` with the default capacity and the
    /// given hasher.
    pub fn with_hasher(build_hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, build_hasher)
    }

    /// Creates an empty `ChainedHashMap` with the given number of buckets
    /// (at least 1) and the given hasher.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        let capacity = capacity.max(1);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, VecDeque::new);
        Self { buckets, size: 0, build_hasher }
    }

    /// Returns the number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the ratio of entries to buckets.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Removes every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.size = 0;
    }

    /// Exchanges the bucket storage, size, and hasher with another table
    /// in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns an iterator over the entries in slot order, then
    /// within-bucket insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.buckets, 0)
    }

    /// Returns the end sentinel: the cursor one past the last entry. Every
    /// exhausted [`Iter`] over this table compares equal to it.
    #[must_use]
    pub fn end(&self) -> Iter<'_, K, V> {
        Iter::new(&self.buckets, self.buckets.len())
    }

    /// Returns an iterator yielding mutable references to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut { buckets: self.buckets.iter_mut(), current: None }
    }

    /// Returns the first occupied cursor position at or after the given
    /// one, together with the entry stored there. Used by the concurrent
    /// iterator, which tracks its position as plain indices while it holds
    /// the table's read guard.
    pub(crate) fn occupied_at_or_after(
        &self,
        bucket_index: usize,
        entry_index: usize,
    ) -> Option<(usize, usize, &K, &V)> {
        let mut bucket_index = bucket_index;
        let mut entry_index = entry_index;
        while let Some(bucket) = self.buckets.get(bucket_index) {
            if let Some(entry) = bucket.get(entry_index) {
                return Some((bucket_index, entry_index, &entry.key, &entry.value));
            }
            bucket_index = bucket_index.saturating_add(1);
            entry_index = 0;
        }
        None
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Maps a key to its slot: `hash(key) % capacity`.
    ///
    /// Capacities start at 5 and double, so they are not powers of two and
    /// the hash is reduced with a modulo rather than a mask.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn bucket_index<Q: ?Sized + Hash>(&self, key: &Q) -> usize {
        let mut hasher = self.build_hasher.build_hasher();
        key.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present.
    ///
    /// An existing key has its value overwritten in place and the size is
    /// unchanged; a fresh key is appended to its slot's chain. If the load
    /// factor exceeds 0.7 before the entry is placed, the table grows
    /// first, which reassigns the slot of most keys.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.load_factor() > LOAD_FACTOR_THRESHOLD {
            self.grow();
        }

        let index = self.bucket_index(&key);
        let Some(bucket) = self.buckets.get_mut(index) else { return None };

        if bucket.is_empty() {
            bucket.push_front(Entry { key, value });
            self.size = self.size.saturating_add(1);
            return None;
        }
        for entry in &mut *bucket {
            if entry.key == key {
                return Some(mem::replace(&mut entry.value, value));
            }
        }
        bucket.push_back(Entry { key, value });
        self.size = self.size.saturating_add(1);
        None
    }

    /// Retrieves a reference to the value stored for a key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets
            .get(index)?
            .iter()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    /// Retrieves a mutable reference to the value stored for a key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets
            .get_mut(index)?
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Subscript-style access: returns a mutable reference to the value
    /// for `key`, inserting `V::default()` under that key first if absent.
    ///
    /// The implicit insert counts toward the size and runs the same growth
    /// check as [`insert`](Self::insert), so this is a mutating operation
    /// even when it only reads.
    ///
    /// # Panics
    ///
    /// Panics if the table's bucket bookkeeping is inconsistent; this does
    /// not happen while the capacity invariant holds.
    #[allow(clippy::expect_used)]
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        if self.load_factor() > LOAD_FACTOR_THRESHOLD {
            self.grow();
        }

        let index = self.bucket_index(&key);
        let bucket =
            self.buckets.get_mut(index).expect("slot index is always within the bucket array");
        let position = bucket.iter().position(|entry| entry.key == key);
        if let Some(position) = position {
            bucket
                .get_mut(position)
                .map(|entry| &mut entry.value)
                .expect("position was just found in this bucket")
        } else {
            self.size = self.size.saturating_add(1);
            bucket.push_back(Entry { key, value: V::default() });
            bucket
                .back_mut()
                .map(|entry| &mut entry.value)
                .expect("bucket cannot be empty right after a push")
        }
    }

    /// Returns true if an entry with an equal key exists.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry with an equal key, returning its value. Removal
    /// of an absent key is a normal `None`, not a fault.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = self.buckets.get_mut(index)?;
        let position = bucket.iter().position(|entry| entry.key.borrow() == key)?;
        let entry = bucket.remove(position)?;
        self.size = self.size.saturating_sub(1);
        Some(entry.value)
    }

    /// Returns a cursor positioned at the entry with an equal key, or the
    /// [`end`](Self::end) sentinel when the key is absent.
    pub fn find<Q>(&self, key: &Q) -> Iter<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets
            .get(index)
            .and_then(|bucket| bucket.iter().position(|entry| entry.key.borrow() == key))
            .map_or_else(|| self.end(), |position| Iter::at(&self.buckets, index, position))
    }

    /// Replaces the bucket array with one `GROWTH_FACTOR` times larger and
    /// redistributes every entry by its new slot.
    ///
    /// Entries are moved bucket by bucket, front to back, so two keys that
    /// land in the same new bucket keep their relative insertion order.
    /// O(size); capacity only ever grows.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len().saturating_mul(GROWTH_FACTOR);
        let mut new_buckets = Vec::with_capacity(new_capacity);
        new_buckets.resize_with(new_capacity, VecDeque::new);

        let old_buckets = mem::replace(&mut self.buckets, new_buckets);
        for bucket in old_buckets {
            for entry in bucket {
                let index = self.bucket_index(&entry.key);
                if let Some(target) = self.buckets.get_mut(index) {
                    target.push_back(entry);
                }
            }
        }
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    /// Builds a table by inserting the pairs in order, so a later
    /// duplicate key overrides an earlier one.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::with_capacity_and_hasher(DEFAULT_CAPACITY, S::default());
        map.extend(iter);
        map
    }
}

/// A cursor over a table's entries: the bucket array, a bucket index, and
/// a position within that bucket.
///
/// Entries come out in slot order, then within-bucket insertion order;
/// that order is not stable across a growth event. Two cursors are equal
/// iff they reference the same bucket array at the same bucket index and
/// within-bucket position, so an exhausted cursor equals
/// [`ChainedHashMap::end`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// The bucket array being traversed.
    buckets: &'a [Bucket<K, V>],
    /// Index of the bucket the cursor is in; `buckets.len()` is the end
    /// sentinel.
    bucket_index: usize,
    /// Position of the cursor within the current bucket.
    entry_index: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Creates a cursor at the start of the given bucket, normalized past
    /// empty buckets so it either points at an entry or is the end
    /// sentinel.
    fn new(buckets: &'a [Bucket<K, V>], bucket_index: usize) -> Self {
        let mut iter = Self { buckets, bucket_index, entry_index: 0 };
        iter.skip_to_occupied();
        iter
    }

    /// Creates a cursor pointing directly at an existing entry.
    fn at(buckets: &'a [Bucket<K, V>], bucket_index: usize, entry_index: usize) -> Self {
        Self { buckets, bucket_index, entry_index }
    }

    /// Advances the cursor past exhausted and empty buckets until it
    /// points at an entry or reaches the end sentinel.
    fn skip_to_occupied(&mut self) {
        while let Some(bucket) = self.buckets.get(self.bucket_index) {
            if self.entry_index < bucket.len() {
                break;
            }
            self.bucket_index = self.bucket_index.saturating_add(1);
            self.entry_index = 0;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.buckets.get(self.bucket_index)?.get(self.entry_index)?;
        self.entry_index = self.entry_index.saturating_add(1);
        self.skip_to_occupied();
        Some((&entry.key, &entry.value))
    }
}

impl<K, V> PartialEq for Iter<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.buckets, other.buckets)
            && self.bucket_index == other.bucket_index
            && self.entry_index == other.entry_index
    }
}

impl<K, V> Eq for Iter<'_, K, V> {}

/// The mutable counterpart of [`Iter`]: yields `(&K, &mut V)` in the same
/// slot-then-insertion order.
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    /// Buckets the cursor has not entered yet.
    buckets: slice::IterMut<'a, Bucket<K, V>>,
    /// The chain currently being walked.
    current: Option<vec_deque::IterMut<'a, Entry<K, V>>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chain) = self.current.as_mut() {
                if let Some(entry) = chain.next() {
                    return Some((&entry.key, &mut entry.value));
                }
            }
            self.current = Some(self.buckets.next()?.iter_mut());
        }
    }
}

/// An owning iterator moving every entry out of the table.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    /// Buckets not yet drained.
    buckets: vec::IntoIter<Bucket<K, V>>,
    /// The chain currently being drained.
    current: Option<vec_deque::IntoIter<Entry<K, V>>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chain) = self.current.as_mut() {
                if let Some(entry) = chain.next() {
                    return Some((entry.key, entry.value));
                }
            }
            self.current = Some(self.buckets.next()?.into_iter());
        }
    }
}

#[allow(single_use_lifetimes)]
impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[allow(single_use_lifetimes)]
impl<'a, K, V, S> IntoIterator for &'a mut ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for ChainedHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { buckets: self.buckets.into_iter(), current: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut map = ChainedHashMap::new();
        assert_eq!(map.insert("key1".to_string(), 1), None);
        assert_eq!(map.insert("key2".to_string(), 2), None);
        assert_eq!(map.insert("key3".to_string(), 3), None);

        assert_eq!(map.get("key1"), Some(&1));
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.get("key3"), Some(&3));
        assert_eq!(map.get("key4"), None);
    }

    #[test]
    fn test_update_keeps_size() {
        let mut map = ChainedHashMap::new();
        assert_eq!(map.insert("a".to_string(), 1), None);
        assert_eq!(map.insert("a".to_string(), 2), Some(1));

        assert_eq!(map.len(), 1);
        assert_eq!(map.find("a").next(), Some((&"a".to_string(), &2)));
    }

    #[test]
    fn test_remove() {
        let mut map = ChainedHashMap::new();
        map.insert("key1".to_string(), 1);
        map.insert("key2".to_string(), 2);

        assert_eq!(map.remove("key1"), Some(1));
        assert_eq!(map.get("key1"), None);
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.remove("key1"), None);
    }

    #[test]
    fn test_remove_absent_key_is_a_no_op() {
        let mut map = ChainedHashMap::new();
        map.insert(1, "one");

        assert_eq!(map.remove(&7), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut map = ChainedHashMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);

        map.insert("key1".to_string(), 1);
        assert!(!map.is_empty());
        assert_eq!(map.len(), 1);

        map.insert("key2".to_string(), 2);
        assert_eq!(map.len(), 2);

        map.remove("key1");
        assert_eq!(map.len(), 1);

        map.remove("key2");
        assert!(map.is_empty());
    }

    #[test]
    fn test_growth_keeps_every_entry() {
        // Capacity 5 with threshold 0.7 means the fifth insert finds a
        // pre-insert load factor of 0.8 and grows the table first.
        let mut map = ChainedHashMap::with_capacity(5);
        for i in 1..=10 {
            map.insert(i, i * 10);
        }

        assert!(map.capacity() > 5);
        assert_eq!(map.len(), 10);
        for i in 1..=10 {
            assert_eq!(map.get(&i), Some(&(i * 10)));
        }
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn test_load_factor_stays_near_threshold() {
        let mut map = ChainedHashMap::with_capacity(5);
        for i in 0..100 {
            map.insert(i, i);
            let slack = 1.0 / map.capacity() as f64;
            assert!(
                map.load_factor() <= LOAD_FACTOR_THRESHOLD + slack,
                "load factor {} above threshold after insert {i}",
                map.load_factor()
            );
        }
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let mut map = ChainedHashMap::with_capacity(5);
        for i in 0..50 {
            map.insert(i, i);
        }
        let grown = map.capacity();
        for i in 0..50 {
            map.remove(&i);
        }

        assert!(map.is_empty());
        assert_eq!(map.capacity(), grown);
    }

    #[test]
    fn test_get_or_default_on_missing_key() {
        let mut map: ChainedHashMap<String, i32> = ChainedHashMap::new();
        assert_eq!(*map.get_or_default("missing".to_string()), i32::default());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_or_default_on_existing_key() {
        let mut map = ChainedHashMap::new();
        map.insert("hits".to_string(), 3);

        *map.get_or_default("hits".to_string()) += 1;

        assert_eq!(map.get("hits"), Some(&4));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_mut() {
        let mut map = ChainedHashMap::new();
        map.insert("key1".to_string(), 1);

        if let Some(value) = map.get_mut("key1") {
            *value += 10;
        }

        assert_eq!(map.get("key1"), Some(&11));
    }

    #[test]
    fn test_contains_key() {
        let mut map = ChainedHashMap::new();
        map.insert("a".to_string(), 1);

        assert!(map.contains_key("a"));
        assert!(!map.contains_key("b"));
    }

    #[test]
    fn test_find_yields_the_entry_first() {
        let mut map = ChainedHashMap::new();
        for i in 0..20 {
            map.insert(i, i * 2);
        }

        let mut cursor = map.find(&7);
        assert_eq!(cursor.next(), Some((&7, &14)));
    }

    #[test]
    fn test_find_absent_is_the_end_sentinel() {
        let mut map = ChainedHashMap::new();
        map.insert(1, "one");

        assert!(map.find(&2) == map.end());
        assert!(map.find(&1) != map.end());
    }

    #[test]
    fn test_exhausted_iterator_equals_end() {
        let mut map = ChainedHashMap::new();
        map.insert(1, 10);
        map.insert(2, 20);

        let mut iter = map.iter();
        while iter.next().is_some() {}
        assert!(iter == map.end());
    }

    #[test]
    fn test_iterator_equality_tracks_position() {
        let mut map = ChainedHashMap::new();
        map.insert(1, 10);
        map.insert(2, 20);

        let mut a = map.iter();
        let b = map.iter();
        assert!(a.clone() == b);

        a.next();
        assert!(a != b);
    }

    #[test]
    fn test_iter_visits_every_entry_once() {
        let mut map = ChainedHashMap::new();
        for i in 0..50 {
            map.insert(i, i);
        }

        let mut seen: Vec<i32> = map.iter().map(|(key, _)| *key).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_iter_mut() {
        let mut map = ChainedHashMap::new();
        map.insert("key1".to_string(), 1);
        map.insert("key2".to_string(), 2);

        for (_, value) in &mut map {
            *value *= 10;
        }

        assert_eq!(map.get("key1"), Some(&10));
        assert_eq!(map.get("key2"), Some(&20));
    }

    #[test]
    fn test_into_iter_moves_entries_out() {
        let mut map = ChainedHashMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);

        let mut pairs: Vec<(String, i32)> = map.into_iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
    }

    #[test]
    fn test_from_iter_later_duplicates_override() {
        let map: ChainedHashMap<&str, i32> =
            [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&3));
        assert_eq!(map.get("b"), Some(&2));
    }

    #[test]
    fn test_swap() {
        let mut left = ChainedHashMap::new();
        left.insert("left".to_string(), 1);
        let mut right = ChainedHashMap::new();
        right.insert("right".to_string(), 2);
        right.insert("other".to_string(), 3);

        left.swap(&mut right);

        assert_eq!(left.len(), 2);
        assert_eq!(left.get("right"), Some(&2));
        assert_eq!(right.len(), 1);
        assert_eq!(right.get("left"), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut map = ChainedHashMap::new();
        for i in 0..20 {
            map.insert(i, i);
        }
        let capacity = map.capacity();

        map.clear();

        assert!(map.is_empty());
        assert_eq!(map.capacity(), capacity);
        assert_eq!(map.get(&3), None);
    }

    #[test]
    fn test_pair_keys_hash_without_customization() {
        let mut map = ChainedHashMap::new();
        map.insert(("host".to_string(), 80_u16), "http");
        map.insert(("host".to_string(), 443_u16), "https");

        assert_eq!(map.get(&("host".to_string(), 443_u16)), Some(&"https"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut map = ChainedHashMap::with_capacity(0);
        assert_eq!(map.capacity(), 1);

        map.insert(1, 1);
        assert_eq!(map.get(&1), Some(&1));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    proptest! {
        /// The table behaves exactly like the standard map over arbitrary
        /// insert/remove/get sequences.
        #[test]
        fn prop_matches_std_hash_map(
            ops in proptest::collection::vec((0_u8..3, 0_u16..64, any::<i32>()), 0..256)
        ) {
            let mut map = ChainedHashMap::new();
            let mut model = HashMap::new();

            for (op, key, value) in ops {
                match op {
                    0 => prop_assert_eq!(map.insert(key, value), model.insert(key, value)),
                    1 => prop_assert_eq!(map.remove(&key), model.remove(&key)),
                    _ => prop_assert_eq!(map.get(&key), model.get(&key)),
                }
            }

            prop_assert_eq!(map.len(), model.len());
            for (key, value) in &model {
                prop_assert_eq!(map.get(key), Some(value));
            }
        }

        /// Iterating visits each stored entry exactly once.
        #[test]
        fn prop_iteration_is_complete(
            pairs in proptest::collection::hash_map(any::<u32>(), any::<u32>(), 0..128)
        ) {
            let map: ChainedHashMap<u32, u32> = pairs.clone().into_iter().collect();

            let visited: HashMap<u32, u32> =
                map.iter().map(|(key, value)| (*key, *value)).collect();
            prop_assert_eq!(visited.len(), map.len());
            prop_assert_eq!(visited, pairs);
        }

        /// Growth never loses or duplicates entries.
        #[test]
        fn prop_growth_preserves_contents(count in 1_usize..200) {
            let mut map = ChainedHashMap::with_capacity(5);
            for i in 0..count {
                map.insert(i, i.wrapping_mul(7));
            }

            prop_assert_eq!(map.len(), count);
            for i in 0..count {
                prop_assert_eq!(map.get(&i), Some(&i.wrapping_mul(7)));
            }
        }
    }
}
