use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::ptr;
use std::sync::{RwLock, RwLockReadGuard};

use crate::chained_map::ChainedHashMap;

/// A thread-safe separate-chaining hash table.
///
/// One reader-writer lock guards the whole table: mutating operations
/// (`insert`, `get_or_default`, `remove`, `clear`, `swap`) take it in
/// exclusive mode, so at most one writer runs and growth is atomic with
/// respect to every other caller; read-only operations (`contains_key`,
/// `get`, `len`, `capacity`) take it in shared mode and may run in
/// parallel with each other. There is no per-bucket locking and no
/// lock-free fast path.
///
/// Lock acquisition blocks until the lock is available, with no timeout.
/// Read operations return owned clones rather than references, so no
/// borrow of the table's storage can outlive the lock. Cursor-style
/// traversal (`find`/`end`) lives on [`ChainedHashMap`]; use
/// [`into_inner`](Self::into_inner) or a single-threaded table when you
/// need it.
#[derive(Debug)]
pub struct ConcurrentChainedMap<K, V, S = RandomState> {
    /// The underlying chained table, guarded by a single reader-writer
    /// lock.
    inner: RwLock<ChainedHashMap<K, V, S>>,
}

impl<K, V> Default for ConcurrentChainedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ConcurrentChainedMap<K, V> {
    /// Creates an empty map with the default capacity of 5 buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::from(ChainedHashMap::new())
    }

    /// Creates an empty map with the given number of buckets (at least 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(ChainedHashMap::with_capacity(capacity))
    }
}

impl<K, V, S> ConcurrentChainedMap<K, V, S> {
    /// Creates an empty map with the default capacity and the given
    /// hasher.
    pub fn with_hasher(build_hasher: S) -> Self {
        Self::from(ChainedHashMap::with_hasher(build_hasher))
    }

    /// Creates an empty map with the given number of buckets (at least 1)
    /// and the given hasher.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        Self::from(ChainedHashMap::with_capacity_and_hasher(capacity, build_hasher))
    }

    /// Consumes the map and returns the single-threaded table it guards.
    ///
    /// # Panics
    ///
    /// Panics if the lock was poisoned by a writer that panicked.
    #[allow(clippy::expect_used)]
    pub fn into_inner(self) -> ChainedHashMap<K, V, S> {
        self.inner.into_inner().expect("Failed to take ownership of the table")
    }

    /// Acquires the shared lock.
    ///
    /// # Panics
    ///
    /// Panics if the lock was poisoned by a writer that panicked.
    #[allow(clippy::expect_used)]
    fn read(&self) -> RwLockReadGuard<'_, ChainedHashMap<K, V, S>> {
        self.inner.read().expect("Failed to acquire read lock")
    }

    /// Returns the number of entries in the table. Takes the shared lock.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the table holds no entries. Takes the shared lock.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets. Takes the shared lock.
    pub fn capacity(&self) -> usize {
        self.read().capacity()
    }

    /// Returns the ratio of entries to buckets. Takes the shared lock.
    pub fn load_factor(&self) -> f64 {
        self.read().load_factor()
    }

    /// Removes every entry, keeping the current capacity. Takes the
    /// exclusive lock.
    ///
    /// # Panics
    ///
    /// Panics if the lock was poisoned by a writer that panicked.
    #[allow(clippy::expect_used)]
    pub fn clear(&self) {
        self.inner.write().expect("Failed to acquire write lock").clear();
    }

    /// Exchanges the two guarded tables in O(1) without exchanging the
    /// locks themselves.
    ///
    /// Both exclusive locks are taken in address order, so two threads
    /// swapping the same pair in opposite argument order cannot deadlock.
    /// Swapping a map with itself is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if either lock was poisoned by a writer that panicked.
    #[allow(clippy::expect_used)]
    pub fn swap(&self, other: &Self) {
        if ptr::eq(self, other) {
            return;
        }
        let (first, second) = if ptr::from_ref(self) < ptr::from_ref(other) {
            (self, other)
        } else {
            (other, self)
        };
        let mut first_guard = first.inner.write().expect("Failed to acquire write lock");
        let mut second_guard = second.inner.write().expect("Failed to acquire write lock");
        first_guard.swap(&mut second_guard);
    }

    /// Returns an iterator over cloned key-value pairs.
    ///
    /// The iterator holds the shared lock for its whole lifetime, so the
    /// traversal sees one consistent snapshot and writers block until it
    /// is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the lock was poisoned by a writer that panicked.
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter { guard: self.read(), bucket_index: 0, entry_index: 0 }
    }
}

impl<K, V, S> ConcurrentChainedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present. Takes the exclusive lock; may grow the table.
    ///
    /// # Panics
    ///
    /// Panics if the lock was poisoned by a writer that panicked.
    #[allow(clippy::expect_used)]
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.write().expect("Failed to acquire write lock").insert(key, value)
    }

    /// Retrieves a clone of the value stored for a key. Takes the shared
    /// lock.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.read().get(key).cloned()
    }

    /// Subscript-style access: returns a clone of the value for `key`,
    /// inserting `V::default()` under that key first if absent.
    ///
    /// Always takes the exclusive lock, even when the key is already
    /// present: the operation is read-modify-write, and correctness wins
    /// over read concurrency here.
    ///
    /// # Panics
    ///
    /// Panics if the lock was poisoned by a writer that panicked.
    #[allow(clippy::expect_used)]
    pub fn get_or_default(&self, key: K) -> V
    where
        V: Default + Clone,
    {
        self.inner.write().expect("Failed to acquire write lock").get_or_default(key).clone()
    }

    /// Returns true if an entry with an equal key exists. Takes the
    /// shared lock.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read().contains_key(key)
    }

    /// Removes the entry with an equal key, returning its value. Removal
    /// of an absent key is a normal `None`. Takes the exclusive lock.
    ///
    /// # Panics
    ///
    /// Panics if the lock was poisoned by a writer that panicked.
    #[allow(clippy::expect_used)]
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().expect("Failed to acquire write lock").remove(key)
    }
}

impl<K, V, S> From<ChainedHashMap<K, V, S>> for ConcurrentChainedMap<K, V, S> {
    /// Wraps a single-threaded table behind a fresh, unlocked lock.
    fn from(map: ChainedHashMap<K, V, S>) -> Self {
        Self { inner: RwLock::new(map) }
    }
}

impl<K, V, S> Clone for ConcurrentChainedMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    /// Deep-copies every entry into a new map with its own, unlocked
    /// lock; lock state is never cloned.
    #[allow(clippy::expect_used)]
    fn clone(&self) -> Self {
        Self::from(self.read().clone())
    }
}

/// Iterator over cloned key-value pairs of a [`ConcurrentChainedMap`].
///
/// Holds the table's read guard, so the table cannot change while the
/// iterator is alive.
#[derive(Debug)]
pub struct Iter<'a, K, V, S = RandomState> {
    /// Read guard pinning the table for the iterator's lifetime.
    guard: RwLockReadGuard<'a, ChainedHashMap<K, V, S>>,
    /// Bucket the cursor is in.
    bucket_index: usize,
    /// Position within the current bucket.
    entry_index: usize,
}

impl<K, V, S> Iterator for Iter<'_, K, V, S>
where
    K: Clone,
    V: Clone,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let (bucket_index, entry_index, key, value) =
            self.guard.occupied_at_or_after(self.bucket_index, self.entry_index)?;
        let item = (key.clone(), value.clone());
        self.bucket_index = bucket_index;
        self.entry_index = entry_index.saturating_add(1);
        Some(item)
    }
}

#[allow(single_use_lifetimes)]
impl<'a, K, V, S> IntoIterator for &'a ConcurrentChainedMap<K, V, S>
where
    K: Clone,
    V: Clone,
{
    type Item = (K, V);
    type IntoIter = Iter<'a, K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
