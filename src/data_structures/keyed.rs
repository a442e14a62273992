use std::fmt::Debug;
use std::marker::PhantomData;

/// A key that maps onto a dense index
///
/// Keyed collections store their entries in a vector slot chosen by the key's
/// index, so keys should be small and densely allocated (arena indices).
pub trait Key: Copy + Eq + Debug {
    /// Returns the slot index for this key
    fn index(&self) -> usize;

    /// Rebuilds a key from its slot index
    fn from_index(index: usize) -> Self;
}

impl Key for usize {
    fn index(&self) -> usize {
        *self
    }

    fn from_index(index: usize) -> Self {
        index
    }
}

/// A mapping from dense keys to values
///
/// Lookups, inserts and removals are O(1). Iteration order is key index order.
#[derive(Debug, Clone)]
pub struct KeyedMap<K, V>
where
    K: Key,
{
    /// One optional value per key index
    slots: Vec<Option<V>>,

    /// Number of occupied slots
    len: usize,

    _key: PhantomData<K>,
}

impl<K, V> KeyedMap<K, V>
where
    K: Key,
{
    /// Creates a new empty map
    pub fn new() -> Self {
        KeyedMap {
            slots: Vec::new(),
            len: 0,
            _key: PhantomData,
        }
    }

    /// Creates a map with room for keys up to `capacity` without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        KeyedMap {
            slots: Vec::with_capacity(capacity),
            len: 0,
            _key: PhantomData,
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value, returning the previous value for the key if any
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = key.index();
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }

        let previous = self.slots[index].replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Returns a reference to the value for a key
    pub fn get(&self, key: &K) -> Option<&V> {
        self.slots.get(key.index()).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the value for a key
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.slots.get_mut(key.index()).and_then(Option::as_mut)
    }

    /// Returns true if the key has a value
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes the value for a key and returns it
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let removed = self.slots.get_mut(key.index()).and_then(Option::take);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Removes every entry, keeping the allocation
    pub fn clear(&mut self) {
        self.slots.clear();
        self.len = 0;
    }

    /// Iterates over `(key, &value)` pairs in key index order
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (K::from_index(index), value)))
    }

    /// Iterates over the keys in index order
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.iter().map(|(key, _)| key)
    }
}

impl<K, V> Default for KeyedMap<K, V>
where
    K: Key,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for KeyedMap<K, V>
where
    K: Key,
    V: PartialEq,
{
    // Trailing empty slots do not make two maps different
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(key, value)| other.get(&key) == Some(value))
    }
}

impl<K, V> FromIterator<(K, V)> for KeyedMap<K, V>
where
    K: Key,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = KeyedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// A membership set over dense keys
#[derive(Debug, Clone)]
pub struct KeyedSet<K>
where
    K: Key,
{
    members: Vec<bool>,
    len: usize,
    _key: PhantomData<K>,
}

impl<K> KeyedSet<K>
where
    K: Key,
{
    /// Creates a new empty set
    pub fn new() -> Self {
        KeyedSet {
            members: Vec::new(),
            len: 0,
            _key: PhantomData,
        }
    }

    /// Creates a set with room for keys up to `capacity` without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        KeyedSet {
            members: Vec::with_capacity(capacity),
            len: 0,
            _key: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a key, returning true if it was not already present
    pub fn insert(&mut self, key: K) -> bool {
        let index = key.index();
        if index >= self.members.len() {
            self.members.resize(index + 1, false);
        }

        if self.members[index] {
            return false;
        }
        self.members[index] = true;
        self.len += 1;
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.members.get(key.index()).copied().unwrap_or(false)
    }

    /// Removes a key, returning true if it was present
    pub fn remove(&mut self, key: &K) -> bool {
        match self.members.get_mut(key.index()) {
            Some(member) if *member => {
                *member = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.members.clear();
        self.len = 0;
    }

    /// Iterates over the members in key index order
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, member)| **member)
            .map(|(index, _)| K::from_index(index))
    }
}

impl<K> Default for KeyedSet<K>
where
    K: Key,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<K> for KeyedSet<K>
where
    K: Key,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = KeyedSet::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_insert_overwrite_and_remove() {
        let mut map: KeyedMap<usize, &str> = KeyedMap::new();
        assert!(map.is_empty());

        assert_eq!(map.insert(3, "c"), None);
        assert_eq!(map.insert(0, "a"), None);
        assert_eq!(map.insert(3, "C"), Some("c"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&3), Some(&"C"));
        assert_eq!(map.get(&1), None);
        assert_eq!(map.get(&99), None);

        assert_eq!(map.remove(&3), Some("C"));
        assert_eq!(map.remove(&3), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_map_equality_ignores_capacity() {
        let mut left: KeyedMap<usize, i32> = KeyedMap::new();
        left.insert(1, 10);
        left.insert(7, 70);
        left.remove(&7);

        let right: KeyedMap<usize, i32> = [(1, 10)].into_iter().collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_set_membership() {
        let mut set: KeyedSet<usize> = KeyedSet::new();
        assert!(set.insert(4));
        assert!(!set.insert(4));
        assert!(set.insert(1));
        assert!(set.contains(&4));
        assert!(!set.contains(&2));
        assert!(!set.contains(&1000));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 4]);

        assert!(set.remove(&4));
        assert!(!set.remove(&4));
        assert_eq!(set.len(), 1);
    }
}
