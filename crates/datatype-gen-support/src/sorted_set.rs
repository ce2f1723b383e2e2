use std::{
  cmp::Ordering,
  fmt::{self, Debug, Formatter},
  sync::Arc,
};

use serde::{Serialize, Serializer};

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// Ordering used by a [`SortedSet`].
///
/// Either the natural `Ord` ordering of `T`, or a user supplied function. Two comparators
/// are considered the same if both are natural or both wrap the same function instance.
pub struct Comparator<T> {
  compare: Arc<CompareFn<T>>,
  natural: bool,
}

impl<T: Ord + 'static> Comparator<T> {
  #[must_use]
  pub fn natural() -> Self {
    Self {
      compare: Arc::new(T::cmp),
      natural: true,
    }
  }

  #[must_use]
  pub fn reverse() -> Self {
    Self::new(|a: &T, b: &T| b.cmp(a))
  }
}

impl<T> Comparator<T> {
  pub fn new<F>(compare: F) -> Self
  where
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
  {
    Self {
      compare: Arc::new(compare),
      natural: false,
    }
  }

  #[must_use]
  pub fn compare(&self, a: &T, b: &T) -> Ordering {
    (self.compare)(a, b)
  }

  #[must_use]
  pub const fn is_natural(&self) -> bool {
    self.natural
  }

  #[must_use]
  pub fn same_as(&self, other: &Self) -> bool {
    if self.natural || other.natural {
      return self.natural == other.natural;
    }
    std::ptr::addr_eq(Arc::as_ptr(&self.compare), Arc::as_ptr(&other.compare))
  }
}

impl<T> Clone for Comparator<T> {
  fn clone(&self) -> Self {
    Self {
      compare: Arc::clone(&self.compare),
      natural: self.natural,
    }
  }
}

impl<T> Debug for Comparator<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.natural {
      f.write_str("Comparator(natural)")
    } else {
      f.write_str("Comparator(custom)")
    }
  }
}

/// An immutable set kept in comparator order.
///
/// Cloning is cheap: the elements live behind an `Arc` and are shared with the
/// [`SortedSetBuffer`] the set was frozen from until either side is written to.
pub struct SortedSet<T> {
  elements: Arc<Vec<T>>,
  comparator: Comparator<T>,
}

impl<T: Ord + 'static> SortedSet<T> {
  #[must_use]
  pub fn new() -> Self {
    Self::with_comparator(Comparator::natural())
  }
}

impl<T> SortedSet<T> {
  #[must_use]
  pub fn with_comparator(comparator: Comparator<T>) -> Self {
    Self {
      elements: Arc::new(Vec::new()),
      comparator,
    }
  }

  pub fn from_iter_with<I>(comparator: Comparator<T>, elements: I) -> Self
  where
    T: Clone,
    I: IntoIterator<Item = T>,
  {
    let mut buffer = SortedSetBuffer::with_comparator(comparator);
    buffer.extend(elements);
    buffer.freeze()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.elements.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.elements.iter()
  }

  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    self.elements.as_slice()
  }

  #[must_use]
  pub fn first(&self) -> Option<&T> {
    self.elements.first()
  }

  #[must_use]
  pub fn last(&self) -> Option<&T> {
    self.elements.last()
  }

  #[must_use]
  pub fn contains(&self, value: &T) -> bool {
    search(&self.elements, &self.comparator, value).is_ok()
  }

  #[must_use]
  pub const fn comparator(&self) -> &Comparator<T> {
    &self.comparator
  }

  /// Whether both sets share the same element storage.
  #[must_use]
  pub fn ptr_eq(a: &Self, b: &Self) -> bool {
    Arc::ptr_eq(&a.elements, &b.elements)
  }
}

impl<T: Ord + 'static> Default for SortedSet<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Ord + Clone + 'static> FromIterator<T> for SortedSet<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::from_iter_with(Comparator::natural(), iter)
  }
}

impl<T> Clone for SortedSet<T> {
  fn clone(&self) -> Self {
    Self {
      elements: Arc::clone(&self.elements),
      comparator: self.comparator.clone(),
    }
  }
}

impl<T: PartialEq> PartialEq for SortedSet<T> {
  fn eq(&self, other: &Self) -> bool {
    self.elements == other.elements
  }
}

impl<T: Eq> Eq for SortedSet<T> {}

impl<T: Debug> Debug for SortedSet<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.elements.iter()).finish()
  }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.elements.iter()
  }
}

impl<T: Serialize> Serialize for SortedSet<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(self.elements.iter())
  }
}

/// Mutable counterpart of [`SortedSet`] held by generated builders.
///
/// Inserting an element equal (under the comparator) to one already present keeps the
/// existing element. The comparator never changes after construction; [`clear`] drops
/// the elements but keeps it.
///
/// [`clear`]: SortedSetBuffer::clear
pub struct SortedSetBuffer<T> {
  elements: Arc<Vec<T>>,
  comparator: Comparator<T>,
}

impl<T: Ord + 'static> SortedSetBuffer<T> {
  #[must_use]
  pub fn natural() -> Self {
    Self::with_comparator(Comparator::natural())
  }
}

impl<T> SortedSetBuffer<T> {
  #[must_use]
  pub fn with_comparator(comparator: Comparator<T>) -> Self {
    Self {
      elements: Arc::new(Vec::new()),
      comparator,
    }
  }

  /// Starts a buffer sharing the storage of a frozen set.
  #[must_use]
  pub fn shared(set: &SortedSet<T>) -> Self {
    Self {
      elements: Arc::clone(&set.elements),
      comparator: set.comparator.clone(),
    }
  }

  /// Adopts `set`'s storage into `slot` when the buffer there is absent, or empty with the
  /// same comparator. Returns `false` if the caller has to copy the elements instead.
  pub fn try_share(slot: &mut Option<Self>, set: &SortedSet<T>) -> bool {
    let adoptable = slot
      .as_ref()
      .is_none_or(|buffer| buffer.is_empty() && buffer.comparator.same_as(&set.comparator));
    if adoptable {
      *slot = Some(Self::shared(set));
    }
    adoptable
  }

  #[must_use]
  pub const fn comparator(&self) -> &Comparator<T> {
    &self.comparator
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.elements.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.elements.iter()
  }

  #[must_use]
  pub fn as_slice(&self) -> &[T] {
    self.elements.as_slice()
  }

  #[must_use]
  pub fn contains(&self, value: &T) -> bool {
    search(&self.elements, &self.comparator, value).is_ok()
  }

  pub fn insert(&mut self, value: T) -> bool
  where
    T: Clone,
  {
    match search(&self.elements, &self.comparator, &value) {
      Ok(_) => false,
      Err(index) => {
        Arc::make_mut(&mut self.elements).insert(index, value);
        true
      }
    }
  }

  pub fn remove(&mut self, value: &T) -> bool
  where
    T: Clone,
  {
    match search(&self.elements, &self.comparator, value) {
      Ok(index) => {
        Arc::make_mut(&mut self.elements).remove(index);
        true
      }
      Err(_) => false,
    }
  }

  pub fn retain<F>(&mut self, keep: F)
  where
    T: Clone,
    F: FnMut(&T) -> bool,
  {
    Arc::make_mut(&mut self.elements).retain(keep);
  }

  pub fn clear(&mut self) {
    self.elements = Arc::new(Vec::new());
  }

  /// Snapshots the current contents. Shares storage until the buffer is next written.
  #[must_use]
  pub fn freeze(&self) -> SortedSet<T> {
    SortedSet {
      elements: Arc::clone(&self.elements),
      comparator: self.comparator.clone(),
    }
  }
}

impl<T: Clone> Extend<T> for SortedSetBuffer<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.insert(value);
    }
  }
}

impl<T> Clone for SortedSetBuffer<T> {
  fn clone(&self) -> Self {
    Self {
      elements: Arc::clone(&self.elements),
      comparator: self.comparator.clone(),
    }
  }
}

impl<T: Debug> Debug for SortedSetBuffer<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.elements.iter()).finish()
  }
}

impl<'a, T> IntoIterator for &'a SortedSetBuffer<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.elements.iter()
  }
}

fn search<T>(elements: &[T], comparator: &Comparator<T>, value: &T) -> Result<usize, usize> {
  elements.binary_search_by(|candidate| comparator.compare(candidate, value))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn natural_order_and_first_insertion_wins() {
    let mut buffer = SortedSetBuffer::natural();
    assert!(buffer.insert(3));
    assert!(buffer.insert(1));
    assert!(!buffer.insert(3));
    buffer.insert(2);
    assert_eq!(buffer.as_slice(), &[1, 2, 3]);
  }

  #[test]
  fn custom_comparator_orders_and_dedups() {
    let by_len = Comparator::new(|a: &String, b: &String| a.len().cmp(&b.len()));
    let mut buffer = SortedSetBuffer::with_comparator(by_len);
    buffer.extend(["ccc".to_string(), "a".to_string(), "bb".to_string(), "zz".to_string()]);
    assert_eq!(buffer.as_slice(), &["a".to_string(), "bb".to_string(), "ccc".to_string()]);
  }

  #[test]
  fn clear_keeps_comparator() {
    let mut buffer = SortedSetBuffer::with_comparator(Comparator::reverse());
    buffer.extend([1, 2, 3]);
    buffer.clear();
    assert!(buffer.is_empty());
    buffer.extend([1, 3, 2]);
    assert_eq!(buffer.as_slice(), &[3, 2, 1]);
  }

  #[test]
  fn freeze_shares_storage_until_next_write() {
    let mut buffer = SortedSetBuffer::natural();
    buffer.extend([5, 4]);
    let first = buffer.freeze();
    let second = buffer.freeze();
    assert!(SortedSet::ptr_eq(&first, &second));

    buffer.insert(6);
    let third = buffer.freeze();
    assert!(!SortedSet::ptr_eq(&first, &third));
    assert_eq!(first.as_slice(), &[4, 5]);
    assert_eq!(third.as_slice(), &[4, 5, 6]);
  }

  #[test]
  fn try_share_adopts_only_compatible_buffers() {
    let frozen: SortedSet<i32> = [2, 1].into_iter().collect();

    let mut empty_slot = None;
    assert!(SortedSetBuffer::try_share(&mut empty_slot, &frozen));
    let adopted = empty_slot.as_ref().map(SortedSetBuffer::freeze).unwrap();
    assert!(SortedSet::ptr_eq(&adopted, &frozen));

    let mut reversed = Some(SortedSetBuffer::with_comparator(Comparator::reverse()));
    assert!(!SortedSetBuffer::try_share(&mut reversed, &frozen));

    let mut populated = Some(SortedSetBuffer::natural());
    populated.as_mut().unwrap().insert(9);
    assert!(!SortedSetBuffer::try_share(&mut populated, &frozen));
  }

  #[test]
  fn comparator_identity() {
    let custom = Comparator::new(|a: &i32, b: &i32| a.cmp(b));
    assert!(custom.same_as(&custom.clone()));
    assert!(!custom.same_as(&Comparator::natural()));
    assert!(Comparator::<i32>::natural().same_as(&Comparator::natural()));
    assert!(!custom.same_as(&Comparator::new(|a: &i32, b: &i32| a.cmp(b))));
  }

  #[test]
  fn serializes_as_sequence() {
    let set: SortedSet<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[1,2,3]");
    assert_eq!(format!("{set:?}"), "{1, 2, 3}");
  }
}
