//! Immutable descriptors of the datatypes a schema declares.

mod datatype;
mod field;
mod primitive;
pub(crate) mod types;

pub use datatype::{Datatype, MethodPolicy, NameAndVisibility, Underride};
pub use field::Field;
pub use primitive::Primitive;

#[cfg(test)]
mod tests;
