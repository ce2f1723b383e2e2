//! Interoperability adapters. They read field descriptors and contribute attributes that are emitted
//! verbatim on each field's primary mutation method.

use syn::{Attribute, parse_quote};

use crate::generator::model::Field;

pub(crate) trait AccessorDecorator {
  fn decorate(&self, field: &Field) -> Vec<Attribute>;
}

/// Makes a field's setter discoverable under its JSON property name in rustdoc search.
pub(crate) struct JsonPropertyAdapter;

impl AccessorDecorator for JsonPropertyAdapter {
  fn decorate(&self, field: &Field) -> Vec<Attribute> {
    field
      .json_name
      .iter()
      .filter(|json_name| **json_name != field.name)
      .map(|json_name| parse_quote!(#[doc(alias = #json_name)]))
      .collect()
  }
}

pub(crate) fn default_adapters() -> Vec<Box<dyn AccessorDecorator>> {
  vec![Box::new(JsonPropertyAdapter)]
}
