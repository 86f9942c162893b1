//! Utility traits shared by the map implementations

use crate::{ChainedHashMap, ConcurrentChainedMap};

/// Extension trait providing collection-style helpers on top of the map
/// types' core API.
pub trait MapExtensions<K, V> {
    /// Returns the keys of the map as a `Vec`, in iteration order.
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the map as a `Vec`, in iteration order.
    fn values(&self) -> Vec<V>;
}

impl<K, V, S> MapExtensions<K, V> for ChainedHashMap<K, V, S>
where
    K: Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }
}

impl<K, V, S> MapExtensions<K, V> for ConcurrentChainedMap<K, V, S>
where
    K: Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_and_values() {
        let mut map = ChainedHashMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        map.insert("c".to_string(), 3);

        let mut keys = map.keys();
        keys.sort();

        let mut values = map.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_keys_and_values_on_the_concurrent_map() {
        let map = ConcurrentChainedMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);

        let mut keys = map.keys();
        keys.sort();
        let mut values = map.values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(values, vec![1, 2]);
    }
}
