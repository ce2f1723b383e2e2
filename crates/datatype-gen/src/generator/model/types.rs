//! Structural inspection of declared field types.
//!
//! Recognition works on the last path segment only, so `std::vec::Vec<T>` and an imported `Vec<T>` match alike.

use syn::{GenericArgument, PathArguments, PathSegment, Type};

pub(crate) fn last_segment(ty: &Type) -> Option<&PathSegment> {
  match ty {
    Type::Path(type_path) if type_path.qself.is_none() => type_path.path.segments.last(),
    Type::Group(group) => last_segment(&group.elem),
    Type::Paren(paren) => last_segment(&paren.elem),
    _ => None,
  }
}

/// Name of the outermost type constructor, e.g. `BTreeMap` for `BTreeMap<String, u32>`.
pub(crate) fn type_name(ty: &Type) -> Option<String> {
  last_segment(ty).map(|segment| segment.ident.to_string())
}

/// Type arguments of the outermost constructor, ignoring lifetimes and const arguments.
pub(crate) fn type_arguments(ty: &Type) -> Vec<&Type> {
  let Some(segment) = last_segment(ty) else {
    return vec![];
  };
  let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
    return vec![];
  };
  arguments
    .args
    .iter()
    .filter_map(|argument| match argument {
      GenericArgument::Type(ty) => Some(ty),
      _ => None,
    })
    .collect()
}

/// Matches `ty` against one of `names` with exactly `arity` type arguments.
pub(crate) fn match_constructor<'a>(ty: &'a Type, names: &[&str], arity: usize) -> Option<(String, Vec<&'a Type>)> {
  let name = type_name(ty)?;
  if !names.contains(&name.as_str()) {
    return None;
  }
  let arguments = type_arguments(ty);
  (arguments.len() == arity).then_some((name, arguments))
}

/// Whether `ty` is a bare path naming `name` with no type arguments.
pub(crate) fn is_named(ty: &Type, name: &str) -> bool {
  last_segment(ty).is_some_and(|segment| segment.ident == name && segment.arguments.is_empty())
}
