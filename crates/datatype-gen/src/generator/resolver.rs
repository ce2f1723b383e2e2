//! Binds one [`FieldCodeGenerator`] to every field of every datatype.
//!
//! Recognizers are tried in a fixed order and the first structural match wins. Datatypes are
//! resolved so that anything stored by value is resolved before the datatype that stores it,
//! which lets a buildable field know whether merging its nested builder can fail.

use std::{
  cell::RefCell,
  collections::{BTreeMap, BTreeSet},
};

use itertools::Itertools;
use quote::quote;
use syn::{ImplItem, ItemImpl, Path, Type, parse_quote};

use super::{
  model::{Datatype, Field, types},
  property::{
    BuildableProperty, DefaultProperty, FieldCategory, FieldCodeGenerator, FieldContext, Initially, ListProperty,
    MapProperty, MethodKind, MultimapProperty, NestedDatatype, OptionalProperty, SetProperty, SortedSetProperty,
    Validator,
  },
  schema::{Schema, SchemaError, graph::NestingGraph},
};

pub(crate) type Recognizer = fn(&ResolveContext<'_>, &Field) -> Option<Box<dyn FieldCodeGenerator>>;

pub(crate) const RECOGNIZERS: &[(&str, Recognizer)] = &[
  ("buildable list", ListProperty::recognize_buildable),
  ("list", ListProperty::recognize),
  ("set", SetProperty::recognize),
  ("sorted set", SortedSetProperty::recognize),
  ("map", MapProperty::recognize),
  ("multimap", MultimapProperty::recognize),
  ("optional", OptionalProperty::recognize),
  ("buildable", BuildableProperty::recognize),
  ("default", DefaultProperty::recognize),
];

/// What recognizers may consult while resolving the fields of one datatype.
pub(crate) struct ResolveContext<'a> {
  datatype: &'a Datatype,
  nested: &'a BTreeMap<String, NestedDatatype>,
  consumed: RefCell<BTreeSet<String>>,
}

impl<'a> ResolveContext<'a> {
  pub(crate) fn new(datatype: &'a Datatype, nested: &'a BTreeMap<String, NestedDatatype>) -> Self {
    Self {
      datatype,
      nested,
      consumed: RefCell::new(BTreeSet::new()),
    }
  }

  /// The validator registered for `kind` on `field`, marking the hook as used.
  pub(crate) fn hook(&self, kind: MethodKind, field: &Field) -> Option<Validator> {
    let method = kind.method_name(field);
    let path: &Path = self.datatype.hooks.get(&method)?;
    let error = self.datatype.error_type.clone()?;
    self.consumed.borrow_mut().insert(method);
    Some(Validator {
      path: path.clone(),
      error,
    })
  }

  /// The schema datatype `ty` names, if it is a bare reference to one.
  pub(crate) fn nested(&self, ty: &Type) -> Option<&'a NestedDatatype> {
    let name = types::type_name(ty)?;
    if !types::is_named(ty, &name) {
      return None;
    }
    self.nested.get(&name)
  }

  fn unused_hooks(&self) -> Vec<String> {
    let consumed = self.consumed.borrow();
    self
      .datatype
      .hooks
      .keys()
      .filter(|method| !consumed.contains(*method))
      .cloned()
      .collect()
  }
}

/// A field with its bound strategy and, for required fields, its slot in the unset-set.
#[derive(Debug)]
pub(crate) struct ResolvedField<'a> {
  pub field: &'a Field,
  pub generator: Box<dyn FieldCodeGenerator>,
  pub ordinal: Option<usize>,
}

impl ResolvedField<'_> {
  pub(crate) fn context<'s>(&'s self, support: &'s Path) -> FieldContext<'s> {
    FieldContext {
      field: self.field,
      support,
      ordinal: self.ordinal,
    }
  }

  pub(crate) fn category(&self) -> FieldCategory {
    self.generator.category()
  }
}

#[derive(Debug)]
pub(crate) struct ResolvedDatatype<'a> {
  pub datatype: &'a Datatype,
  pub fields: Vec<ResolvedField<'a>>,
  /// Hook entries no field strategy looked up.
  pub unused_hooks: Vec<String>,
}

impl ResolvedDatatype<'_> {
  pub(crate) fn required(&self) -> impl Iterator<Item = &ResolvedField<'_>> {
    self.fields.iter().filter(|field| field.ordinal.is_some())
  }

  pub(crate) fn required_count(&self) -> usize {
    self.required().count()
  }

  /// Whether `merge_from` and `merge_from_builder` return `Result`.
  pub(crate) fn merge_fallible(&self) -> bool {
    self
      .fields
      .iter()
      .any(|field| field.generator.validator().is_some() || field.generator.nested_merge_fallible())
  }

  /// Whether merge bodies need a `template` builder to compare defaults against.
  pub(crate) fn needs_template(&self) -> bool {
    self.fields.iter().any(|field| field.generator.needs_template())
  }
}

/// Resolves every datatype of `schema`, returned in declaration order.
pub(crate) fn resolve(schema: &Schema) -> Result<Vec<ResolvedDatatype<'_>>, SchemaError> {
  let order = NestingGraph::build(&schema.datatypes).resolution_order()?;
  let mut nested: BTreeMap<String, NestedDatatype> = schema
    .datatypes
    .iter()
    .map(|datatype| (datatype.name.clone(), NestedDatatype::new(datatype, false)))
    .collect();

  let mut resolved = BTreeMap::new();
  for name in order {
    let Some(datatype) = schema.datatype(name) else {
      continue;
    };
    let result = resolve_datatype(datatype, &nested)?;
    if let Some(entry) = nested.get_mut(name) {
      entry.merge_fallible = result.merge_fallible();
    }
    resolved.insert(name, result);
  }

  Ok(
    schema
      .datatypes
      .iter()
      .filter_map(|datatype| resolved.remove(datatype.name.as_str()))
      .collect(),
  )
}

pub(crate) fn resolve_datatype<'a>(
  datatype: &'a Datatype,
  nested: &BTreeMap<String, NestedDatatype>,
) -> Result<ResolvedDatatype<'a>, SchemaError> {
  let cx = ResolveContext::new(datatype, nested);
  let mut next_ordinal = 0;
  let mut fields = Vec::with_capacity(datatype.fields.len());

  for field in &datatype.fields {
    let generator = resolve_field(&cx, field);
    let category = generator.category();
    if field.default.is_some() && category != FieldCategory::Default {
      return Err(SchemaError::DefaultNotAllowed {
        datatype: datatype.name.clone(),
        field: field.name.clone(),
        category: category.to_string(),
      });
    }
    if generator.nested_merge_fallible() && datatype.error_type.is_none() {
      return Err(SchemaError::FallibleNestedMerge {
        datatype: datatype.name.clone(),
        field: field.name.clone(),
      });
    }

    let ordinal = (generator.initially() == Initially::Required).then(|| {
      let ordinal = next_ordinal;
      next_ordinal += 1;
      ordinal
    });
    fields.push(ResolvedField {
      field,
      generator,
      ordinal,
    });
  }

  let resolved = ResolvedDatatype {
    datatype,
    fields,
    unused_hooks: cx.unused_hooks(),
  };
  check_member_names(&resolved)?;
  Ok(resolved)
}

/// Rejects datatypes where two generated methods of the builder, or of the value, share a name.
fn check_member_names(resolved: &ResolvedDatatype<'_>) -> Result<(), SchemaError> {
  let datatype = resolved.datatype;
  let support: Path = parse_quote!(datatype_gen_support);
  let methods = &datatype.methods;

  let mut builder_members = vec!["new".to_string()];
  builder_members.extend(
    [
      &methods.build,
      &methods.build_partial,
      &methods.clear,
      &methods.merge_from,
      &methods.merge_from_builder,
    ]
    .into_iter()
    .map(|method| method.name.clone()),
  );
  for field in &resolved.fields {
    let cx = field.context(&support);
    for accessor in field.generator.accessors(&cx) {
      builder_members.extend(method_names(&accessor.tokens));
    }
  }

  let mut value_members = vec!["builder".to_string()];
  if datatype.to_builder {
    value_members.push("to_builder".to_string());
  }
  value_members.extend(resolved.fields.iter().map(|field| field.field.getter.clone()));

  let duplicate = builder_members
    .iter()
    .duplicates()
    .chain(value_members.iter().duplicates())
    .next();
  match duplicate {
    Some(method) => Err(SchemaError::DuplicateMethod {
      datatype: datatype.name.clone(),
      method: method.clone(),
    }),
    None => Ok(()),
  }
}

/// Names of the functions declared in one accessor fragment.
fn method_names(tokens: &proc_macro2::TokenStream) -> Vec<String> {
  let Ok(item) = syn::parse2::<ItemImpl>(quote! { impl Builder { #tokens } }) else {
    return Vec::new();
  };
  item
    .items
    .iter()
    .filter_map(|item| match item {
      ImplItem::Fn(function) => Some(function.sig.ident.to_string()),
      _ => None,
    })
    .collect()
}

fn resolve_field(cx: &ResolveContext<'_>, field: &Field) -> Box<dyn FieldCodeGenerator> {
  RECOGNIZERS
    .iter()
    .find_map(|(_, recognize)| recognize(cx, field))
    .unwrap_or_else(|| DefaultProperty::fallback(cx, field))
}
