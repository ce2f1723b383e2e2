use std::{
  fmt::{self, Debug, Formatter},
  hash::Hash,
};

use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};

/// A multimap holding each distinct `(key, value)` pair at most once.
///
/// Keys keep first-insertion order, as do the values under each key. Keys without any
/// value are dropped, so [`SetMultimap::get`] never returns an empty set.
#[derive(Clone)]
pub struct SetMultimap<K, V> {
  entries: IndexMap<K, IndexSet<V>>,
  len: usize,
}

impl<K, V> SetMultimap<K, V> {
  #[must_use]
  pub fn new() -> Self {
    Self {
      entries: IndexMap::new(),
      len: 0,
    }
  }

  /// Number of `(key, value)` pairs.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn keys(&self) -> indexmap::map::Keys<'_, K, IndexSet<V>> {
    self.entries.keys()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
    self
      .entries
      .iter()
      .flat_map(|(key, values)| values.iter().map(move |value| (key, value)))
  }

  #[must_use]
  pub const fn as_map(&self) -> &IndexMap<K, IndexSet<V>> {
    &self.entries
  }

  pub fn clear(&mut self) {
    self.entries.clear();
    self.len = 0;
  }
}

impl<K: Hash + Eq, V: Hash + Eq> SetMultimap<K, V> {
  /// Adds the pair. Returns `false`, keeping the stored pair, if it was already present.
  pub fn put(&mut self, key: K, value: V) -> bool {
    let inserted = self.entries.entry(key).or_default().insert(value);
    if inserted {
      self.len += 1;
    }
    inserted
  }

  /// Adds every value under `key`. Returns whether any pair was new.
  pub fn put_all<I>(&mut self, key: K, values: I) -> bool
  where
    K: Clone,
    I: IntoIterator<Item = V>,
  {
    let mut changed = false;
    for value in values {
      changed |= self.put(key.clone(), value);
    }
    changed
  }

  pub fn remove(&mut self, key: &K, value: &V) -> bool {
    let Some(values) = self.entries.get_mut(key) else {
      return false;
    };
    if !values.shift_remove(value) {
      return false;
    }
    if values.is_empty() {
      self.entries.shift_remove(key);
    }
    self.len -= 1;
    true
  }

  /// Removes every value under `key`, returning them.
  pub fn remove_all(&mut self, key: &K) -> Option<IndexSet<V>> {
    let removed = self.entries.shift_remove(key)?;
    self.len -= removed.len();
    Some(removed)
  }

  #[must_use]
  pub fn get(&self, key: &K) -> Option<&IndexSet<V>> {
    self.entries.get(key)
  }

  #[must_use]
  pub fn contains_key(&self, key: &K) -> bool {
    self.entries.contains_key(key)
  }

  #[must_use]
  pub fn contains_entry(&self, key: &K, value: &V) -> bool {
    self.entries.get(key).is_some_and(|values| values.contains(value))
  }
}

impl<K, V> Default for SetMultimap<K, V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Hash + Eq, V: Hash + Eq> PartialEq for SetMultimap<K, V> {
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.entries == other.entries
  }
}

impl<K: Hash + Eq, V: Hash + Eq> Eq for SetMultimap<K, V> {}

impl<K: Hash + Eq, V: Hash + Eq> Extend<(K, V)> for SetMultimap<K, V> {
  fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
    for (key, value) in iter {
      self.put(key, value);
    }
  }
}

impl<K: Hash + Eq, V: Hash + Eq> FromIterator<(K, V)> for SetMultimap<K, V> {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut multimap = Self::new();
    multimap.extend(iter);
    multimap
  }
}

impl<K: Debug, V: Debug> Debug for SetMultimap<K, V> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.entries.iter()).finish()
  }
}

impl<K: Serialize, V: Serialize> Serialize for SetMultimap<K, V> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(self.entries.iter())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn duplicate_pairs_are_kept_once() {
    let mut tags = SetMultimap::new();
    assert!(tags.put("color", "red"));
    assert!(!tags.put("color", "red"));
    assert!(tags.put("color", "blue"));
    assert_eq!(tags.len(), 2);
    assert_eq!(tags.get(&"color").map(IndexSet::len), Some(2));
  }

  #[test]
  fn removing_last_value_drops_key() {
    let mut tags: SetMultimap<&str, i32> = [("a", 1), ("a", 2), ("b", 3)].into_iter().collect();
    assert!(tags.remove(&"b", &3));
    assert!(!tags.contains_key(&"b"));
    assert!(!tags.remove(&"b", &3));
    assert_eq!(tags.len(), 2);
  }

  #[test]
  fn remove_all_returns_values_and_updates_len() {
    let mut tags = SetMultimap::new();
    tags.put_all("k", [1, 2, 2, 3]);
    assert_eq!(tags.len(), 3);
    let removed = tags.remove_all(&"k").unwrap();
    assert_eq!(removed.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(tags.is_empty());
    assert!(tags.remove_all(&"k").is_none());
  }

  #[test]
  fn equality_ignores_insertion_order() {
    let a: SetMultimap<_, _> = [("x", 1), ("y", 2)].into_iter().collect();
    let b: SetMultimap<_, _> = [("y", 2), ("x", 1)].into_iter().collect();
    assert_eq!(a, b);
  }

  #[test]
  fn iterates_pairs_in_insertion_order() {
    let tags: SetMultimap<_, _> = [("x", 1), ("y", 2), ("x", 3)].into_iter().collect();
    assert_eq!(tags.iter().collect::<Vec<_>>(), vec![(&"x", &1), (&"x", &3), (&"y", &2)]);
    assert!(tags.contains_entry(&"x", &3));
  }

  #[test]
  fn serializes_as_map_of_sequences() {
    let tags: SetMultimap<_, _> = [("x", 1), ("x", 2)].into_iter().collect();
    assert_eq!(serde_json::to_string(&tags).unwrap(), r#"{"x":[1,2]}"#);
    assert_eq!(format!("{tags:?}"), r#"{"x": {1, 2}}"#);
  }
}
