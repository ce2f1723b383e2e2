use std::str::FromStr;

use strum::{Display, EnumString, IntoStaticStr};
use syn::Type;

/// `Copy` scalar types. Fields of these types are passed and returned by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Primitive {
  Bool,
  Char,
  I8,
  I16,
  I32,
  I64,
  I128,
  Isize,
  U8,
  U16,
  U32,
  U64,
  U128,
  Usize,
  F32,
  F64,
}

impl Primitive {
  #[must_use]
  pub fn of(ty: &Type) -> Option<Self> {
    let Type::Path(type_path) = ty else {
      return None;
    };
    if type_path.qself.is_some() {
      return None;
    }
    let ident = type_path.path.get_ident()?;
    Self::from_str(&ident.to_string()).ok()
  }

  /// Floats compare by bit pattern in generated equality, so `NaN` equals itself.
  #[must_use]
  pub const fn is_float(self) -> bool {
    matches!(self, Self::F32 | Self::F64)
  }
}
