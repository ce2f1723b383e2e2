//! Runtime types referenced by code emitted from `datatype-gen`.
//!
//! Generated builders track their unset required fields with [`UnsetFields`] and report
//! failures as [`BuildError`]. Sorted-set and multimap properties are stored as
//! [`SortedSet`] and [`SetMultimap`].

mod error;
mod multimap;
mod sorted_set;
mod unset;

pub use error::{BuildError, ErrorKind};
pub use multimap::SetMultimap;
pub use sorted_set::{Comparator, SortedSet, SortedSetBuffer};
pub use unset::UnsetFields;
