use crate::BuildError;

/// Tracks which required fields of a builder have not been assigned yet.
///
/// `N` is the number of required fields of the datatype; each required field owns the
/// ordinal it was given when the builder was generated. Every builder starts with all
/// ordinals unset, removes an ordinal the first time the field is assigned, and copies
/// the whole set into any partial value it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsetFields<const N: usize> {
  unset: [bool; N],
}

impl<const N: usize> UnsetFields<N> {
  /// Every required field unset, the state of a freshly constructed builder.
  #[must_use]
  pub const fn all() -> Self {
    Self { unset: [true; N] }
  }

  /// No field unset.
  #[must_use]
  pub const fn none() -> Self {
    Self { unset: [false; N] }
  }

  #[must_use]
  pub fn contains(&self, ordinal: usize) -> bool {
    self.unset.get(ordinal).copied().unwrap_or(false)
  }

  pub fn remove(&mut self, ordinal: usize) {
    if let Some(slot) = self.unset.get_mut(ordinal) {
      *slot = false;
    }
  }

  pub fn insert(&mut self, ordinal: usize) {
    if let Some(slot) = self.unset.get_mut(ordinal) {
      *slot = true;
    }
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    !self.unset.contains(&true)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.unset.iter().filter(|unset| **unset).count()
  }

  /// Names of the unset fields, in ordinal order.
  #[must_use]
  pub fn names(&self, names: &[&'static str; N]) -> Vec<&'static str> {
    names
      .iter()
      .zip(self.unset.iter())
      .filter_map(|(name, unset)| unset.then_some(*name))
      .collect()
  }

  /// Fails with [`BuildError::NotSet`] if `ordinal` is unset.
  pub fn check_set(&self, ordinal: usize, field: &'static str) -> Result<(), BuildError> {
    if self.contains(ordinal) {
      return Err(BuildError::not_set(field));
    }
    Ok(())
  }

  /// Fails with [`BuildError::PartialUnset`] if `ordinal` is unset.
  pub fn check_partial(&self, ordinal: usize, field: &'static str) -> Result<(), BuildError> {
    if self.contains(ordinal) {
      return Err(BuildError::partial_unset(field));
    }
    Ok(())
  }

  /// Fails with [`BuildError::MissingFields`] if any field is unset.
  pub fn check_complete(&self, datatype: &'static str, names: &[&'static str; N]) -> Result<(), BuildError> {
    if self.is_empty() {
      return Ok(());
    }
    Err(BuildError::MissingFields {
      datatype,
      fields: self.names(names),
    })
  }
}

impl<const N: usize> Default for UnsetFields<N> {
  fn default() -> Self {
    Self::all()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ErrorKind;

  const NAMES: [&str; 3] = ["name", "email", "id"];

  #[test]
  fn starts_with_every_field_unset() {
    let unset = UnsetFields::<3>::all();
    assert_eq!(unset.len(), 3);
    assert!(!unset.is_empty());
    assert_eq!(unset.names(&NAMES), vec!["name", "email", "id"]);
  }

  #[test]
  fn remove_and_insert_toggle_ordinals() {
    let mut unset = UnsetFields::<3>::all();
    unset.remove(1);
    assert!(!unset.contains(1));
    assert_eq!(unset.names(&NAMES), vec!["name", "id"]);

    unset.insert(1);
    assert!(unset.contains(1));
  }

  #[test]
  fn out_of_range_ordinals_are_ignored() {
    let mut unset = UnsetFields::<1>::all();
    unset.remove(7);
    assert!(!unset.contains(7));
    assert_eq!(unset.len(), 1);
  }

  #[test]
  fn zero_required_fields_is_always_complete() {
    let unset = UnsetFields::<0>::all();
    assert!(unset.is_empty());
    assert!(unset.check_complete("Empty", &[]).is_ok());
  }

  #[test]
  fn check_complete_lists_missing_fields() {
    let mut unset = UnsetFields::<3>::all();
    unset.remove(0);
    let err = unset.check_complete("Person", &NAMES).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalState);
    assert_eq!(err.to_string(), "Not set: [email, id] (building Person)");
  }

  #[test]
  fn check_set_and_check_partial_report_different_kinds() {
    let unset = UnsetFields::<3>::all();
    assert_eq!(unset.check_set(0, "name").unwrap_err().kind(), ErrorKind::IllegalState);
    assert_eq!(
      unset.check_partial(0, "name").unwrap_err().kind(),
      ErrorKind::UnsupportedOperation
    );
    assert!(UnsetFields::<3>::none().check_set(2, "id").is_ok());
  }
}
