mod collections;
mod scalar;

use std::collections::BTreeMap;

use quote::quote;
use syn::{Path, parse_quote};

use crate::generator::{
  model::Datatype,
  property::{FieldCategory, Initially, MergeAction, MethodKind, NestedDatatype},
  resolver::resolve_datatype,
};

/// Every fragment one field strategy contributes, as token strings.
pub(super) struct Rendered {
  pub category: FieldCategory,
  pub initially: Initially,
  pub merge_actions: Vec<MergeAction>,
  pub validated: bool,
  pub kinds: Vec<MethodKind>,
  pub accessors: String,
  pub builder_field: String,
  pub builder_init: String,
  pub final_assignment: String,
  pub partial_accessor: String,
  pub merge_from_value: String,
  pub merge_from_builder: String,
  pub clear: String,
  /// `set_from_result` applied to a builder named `builder` and an expression named `result`.
  pub set_from_result: String,
  pub eq: String,
  pub partial_eq: String,
  pub display: String,
  pub partial_display: String,
}

pub(super) fn render(datatype: &Datatype, field: &str) -> Rendered {
  render_nested(datatype, &[], field)
}

pub(super) fn render_nested(datatype: &Datatype, nested: &[Datatype], field: &str) -> Rendered {
  let nested: BTreeMap<String, NestedDatatype> = nested
    .iter()
    .map(|datatype| (datatype.name.clone(), NestedDatatype::new(datatype, false)))
    .collect();
  let resolved = resolve_datatype(datatype, &nested).unwrap();
  let support: Path = parse_quote!(support);
  let resolved_field = resolved
    .fields
    .iter()
    .find(|resolved| resolved.field.name == field)
    .unwrap();
  let cx = resolved_field.context(&support);
  let generator = resolved_field.generator.as_ref();
  let accessors = generator.accessors(&cx);

  Rendered {
    category: generator.category(),
    initially: generator.initially(),
    merge_actions: generator.merge_actions(),
    validated: generator.validator().is_some(),
    kinds: accessors.iter().map(|accessor| accessor.kind).collect(),
    accessors: accessors
      .iter()
      .map(|accessor| accessor.tokens.to_string())
      .collect::<Vec<_>>()
      .join("\n"),
    builder_field: generator.builder_field(&cx).to_string(),
    builder_init: generator.builder_init(&cx).to_string(),
    final_assignment: generator.final_assignment(&cx).to_string(),
    partial_accessor: generator.partial_accessor(&cx).to_string(),
    merge_from_value: generator.merge_from_value(&cx).to_string(),
    merge_from_builder: generator.merge_from_builder(&cx).to_string(),
    clear: generator.clear_field(&cx).to_string(),
    set_from_result: generator
      .set_from_result(&cx, &quote! { builder }, &quote! { result })
      .to_string(),
    eq: generator.eq_term(&cx).to_string(),
    partial_eq: generator.partial_eq_term(&cx).to_string(),
    display: generator.display_term(&cx).to_string(),
    partial_display: generator.partial_display_term(&cx).to_string(),
  }
}

/// A datatype whose hooks run `validate_*` functions returning `ValidationError`.
pub(super) fn validated(mut datatype: Datatype, hooks: &[(&str, &str)]) -> Datatype {
  datatype.error_type = Some(parse_quote!(ValidationError));
  datatype.hooks = hooks
    .iter()
    .map(|(method, path)| ((*method).to_string(), syn::parse_str::<Path>(path).unwrap()))
    .collect();
  datatype
}

fn squash(code: &str) -> String {
  code.split_whitespace().collect()
}

/// Checks that `code` contains `expected`, ignoring whitespace.
#[track_caller]
pub(super) fn assert_emits(code: &str, expected: &str) {
  assert!(
    squash(code).contains(&squash(expected)),
    "expected `{expected}` in:\n{code}"
  );
}

#[track_caller]
pub(super) fn assert_omits(code: &str, unexpected: &str) {
  assert!(
    !squash(code).contains(&squash(unexpected)),
    "unexpected `{unexpected}` in:\n{code}"
  );
}
