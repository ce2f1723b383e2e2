use proc_macro2::Ident;
use syn::{Attribute, Expr, LitStr, Type};

use super::Primitive;
use crate::generator::codegen;

/// One declared field of a [`super::Datatype`].
#[derive(Debug, Clone, bon::Builder)]
pub struct Field {
  #[builder(into)]
  pub name: String,
  pub ty: Type,
  pub primitive: Option<Primitive>,
  #[builder(into)]
  pub getter: String,
  #[builder(into)]
  pub capitalized_name: String,
  #[builder(into)]
  pub constant_name: String,
  /// The declared type is fully checked at runtime, so no unchecked conversion is involved.
  #[builder(default)]
  pub fully_checked_cast: bool,
  pub default: Option<Expr>,
  pub json_name: Option<String>,
  /// Attributes emitted verbatim on the field's primary mutation method.
  #[builder(default)]
  pub decorations: Vec<Attribute>,
  #[builder(default)]
  pub docs: Vec<String>,
}

impl Field {
  /// A field whose getter and name variants are derived from `name`.
  #[cfg(test)]
  pub fn named(name: &str, ty: Type) -> Self {
    use crate::naming::identifiers;

    Self::builder()
      .name(name)
      .maybe_primitive(Primitive::of(&ty))
      .ty(ty)
      .getter(name)
      .capitalized_name(identifiers::capitalized(name))
      .constant_name(identifiers::constant_style(name))
      .build()
  }

  #[cfg(test)]
  #[must_use]
  pub fn with_default(mut self, default: Expr) -> Self {
    self.default = Some(default);
    self
  }

  pub(crate) fn ident(&self) -> Ident {
    codegen::ident(&self.name)
  }

  pub(crate) fn getter_ident(&self) -> Ident {
    codegen::ident(&self.getter)
  }

  pub(crate) fn name_lit(&self) -> LitStr {
    LitStr::new(&self.name, proc_macro2::Span::call_site())
  }

  pub(crate) const fn is_primitive(&self) -> bool {
    self.primitive.is_some()
  }

  pub(crate) fn is_float(&self) -> bool {
    self.primitive.is_some_and(Primitive::is_float)
  }
}
