/// Broad category of a [`BuildError`], mirroring the two failure families generated
/// builders can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// The builder is not in a state that allows the call (unset field, fixed comparator).
  IllegalState,
  /// The call is not supported by this artifact (reading an unset field of a partial).
  UnsupportedOperation,
}

/// Errors raised by generated builders, values and partials.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
  #[error("{field} not set")]
  NotSet { field: &'static str },

  #[error("Not set: [{}] (building {datatype})", fields.join(", "))]
  MissingFields {
    datatype: &'static str,
    fields: Vec<&'static str>,
  },

  #[error("{field} not set on partial value")]
  PartialUnset { field: &'static str },

  #[error("Comparator already set for {field}")]
  ComparatorAlreadySet { field: &'static str },
}

impl BuildError {
  #[must_use]
  pub const fn not_set(field: &'static str) -> Self {
    Self::NotSet { field }
  }

  #[must_use]
  pub const fn partial_unset(field: &'static str) -> Self {
    Self::PartialUnset { field }
  }

  #[must_use]
  pub const fn comparator_already_set(field: &'static str) -> Self {
    Self::ComparatorAlreadySet { field }
  }

  #[must_use]
  pub const fn kind(&self) -> ErrorKind {
    match self {
      Self::NotSet { .. } | Self::MissingFields { .. } | Self::ComparatorAlreadySet { .. } => ErrorKind::IllegalState,
      Self::PartialUnset { .. } => ErrorKind::UnsupportedOperation,
    }
  }

  /// Name of the field the error concerns, if it concerns exactly one.
  #[must_use]
  pub fn field(&self) -> Option<&'static str> {
    match self {
      Self::NotSet { field } | Self::PartialUnset { field } | Self::ComparatorAlreadySet { field } => Some(*field),
      Self::MissingFields { fields, .. } => match fields.as_slice() {
        [single] => Some(*single),
        _ => None,
      },
    }
  }
}
