use std::collections::{BTreeMap, BTreeSet};

use proc_macro2::Ident;
use serde::Deserialize;
use strum::Display;
use syn::{LitStr, Path, Type};

use super::Field;
use crate::generator::codegen::{self, Visibility};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAndVisibility {
  pub name: String,
  pub visibility: Visibility,
}

impl NameAndVisibility {
  pub fn public(name: &str) -> Self {
    Self {
      name: name.to_string(),
      visibility: Visibility::Public,
    }
  }

  pub(crate) fn ident(&self) -> Ident {
    codegen::ident(&self.name)
  }
}

/// Names and visibility of the builder-level methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodPolicy {
  pub build: NameAndVisibility,
  pub build_partial: NameAndVisibility,
  pub clear: NameAndVisibility,
  pub merge_from: NameAndVisibility,
  pub merge_from_builder: NameAndVisibility,
}

impl Default for MethodPolicy {
  fn default() -> Self {
    Self {
      build: NameAndVisibility::public("build"),
      build_partial: NameAndVisibility::public("build_partial"),
      clear: NameAndVisibility::public("clear"),
      merge_from: NameAndVisibility::public("merge_from"),
      merge_from_builder: NameAndVisibility::public("merge_from_builder"),
    }
  }
}

/// Standard trait impls the user writes by hand instead of having them generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Underride {
  Display,
  PartialEq,
}

/// A record-like datatype and the policy for the three artifacts generated from it.
#[derive(Debug, Clone, bon::Builder)]
pub struct Datatype {
  #[builder(into)]
  pub name: String,
  #[builder(into)]
  pub builder_name: String,
  #[builder(into)]
  pub partial_name: String,
  #[builder(default)]
  pub fields: Vec<Field>,
  #[builder(default)]
  pub methods: MethodPolicy,
  #[builder(default = true)]
  pub to_builder: bool,
  #[builder(default)]
  pub visibility: Visibility,
  /// Error type returned by mutation methods that run a validator.
  pub error_type: Option<Type>,
  #[builder(default)]
  pub underrides: BTreeSet<Underride>,
  /// Generated method name (`set_email`, `add_roles`, ...) to validator path.
  #[builder(default)]
  pub hooks: BTreeMap<String, Path>,
  #[builder(default)]
  pub docs: Vec<String>,
}

impl Datatype {
  /// A datatype with conventional artifact names and no fields.
  #[cfg(test)]
  pub fn named(name: &str) -> Self {
    use crate::naming::identifiers::{builder_name, partial_name};

    Self::builder()
      .name(name)
      .builder_name(builder_name(name))
      .partial_name(partial_name(name))
      .build()
  }

  #[cfg(test)]
  #[must_use]
  pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
    self.fields = fields;
    self
  }

  pub(crate) fn value_ident(&self) -> Ident {
    codegen::ident(&self.name)
  }

  pub(crate) fn builder_ident(&self) -> Ident {
    codegen::ident(&self.builder_name)
  }

  pub(crate) fn partial_ident(&self) -> Ident {
    codegen::ident(&self.partial_name)
  }

  pub(crate) fn name_lit(&self) -> LitStr {
    LitStr::new(&self.name, proc_macro2::Span::call_site())
  }

  pub(crate) fn underrides(&self, underride: Underride) -> bool {
    self.underrides.contains(&underride)
  }

  #[cfg(test)]
  pub(crate) fn field(&self, name: &str) -> Option<&Field> {
    self.fields.iter().find(|field| field.name == name)
  }
}
