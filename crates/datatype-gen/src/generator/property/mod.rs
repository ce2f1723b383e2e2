//! Field strategies: one implementation of [`FieldCodeGenerator`] per field category.
//!
//! Every strategy renders the fragments for exactly one field. Fragments refer to a few fixed names
//! bound by the synthesizer: `self` (the builder, value or partial being generated), `value` (the
//! value passed to `merge_from`), `other` (the builder passed to `merge_from_builder`), `builder`
//! (the fresh builder inside `to_builder`), `template` (a fresh builder inside merge and clear
//! bodies) and `parts` (the `Vec<String>` collected by `Display`).

mod buildable;
mod default;
mod list;
mod map;
mod multimap;
mod optional;
mod set;
mod sorted_set;

use std::fmt::Debug;

pub(crate) use buildable::{BuildableProperty, NestedDatatype};
pub(crate) use default::DefaultProperty;
pub(crate) use list::ListProperty;
pub(crate) use map::MapProperty;
pub(crate) use multimap::MultimapProperty;
pub(crate) use optional::OptionalProperty;
use proc_macro2::{Ident, TokenStream};
use quote::{ToTokens, quote};
pub(crate) use set::SetProperty;
pub(crate) use sorted_set::SortedSetProperty;
use strum::{AsRefStr, Display};
use syn::{LitStr, Path, Type};

use crate::generator::{
  codegen::{self, generate_docs},
  model::Field,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum FieldCategory {
  #[strum(to_string = "default")]
  Default,
  #[strum(to_string = "optional")]
  Optional,
  #[strum(to_string = "list")]
  List,
  #[strum(to_string = "buildable list")]
  BuildableList,
  #[strum(to_string = "set")]
  Set,
  #[strum(to_string = "sorted set")]
  SortedSet,
  #[strum(to_string = "map")]
  Map,
  #[strum(to_string = "multimap")]
  Multimap,
  #[strum(to_string = "buildable")]
  Buildable,
}

/// State of a field in a freshly constructed builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Initially {
  Required,
  HasDefault,
}

/// How a merge folds a source field into the target builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MergeAction {
  SkipIfEqualsDefault,
  SkipIfUnset,
  AppendToCollection,
  MergeNested,
}

/// Per-field builder methods, named by [`MethodKind::method_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum MethodKind {
  Set,
  SetNullable,
  SetBuilder,
  SetComparator,
  Map,
  Get,
  GetMut,
  Add,
  AddBuilder,
  AddAll,
  Put,
  PutAll,
  PutAllFrom,
  Remove,
  RemoveAll,
  Mutate,
  Clear,
}

impl MethodKind {
  pub fn method_name(self, field: &Field) -> String {
    let name = &field.name;
    match self {
      Self::Set => format!("set_{name}"),
      Self::SetNullable => format!("set_nullable_{name}"),
      Self::SetBuilder => format!("set_{name}_builder"),
      Self::SetComparator => format!("set_{name}_comparator"),
      Self::Map => format!("map_{name}"),
      Self::Get => field.getter.clone(),
      Self::GetMut => format!("{}_mut", field.getter),
      Self::Add => format!("add_{name}"),
      Self::AddBuilder => format!("add_{name}_builder"),
      Self::AddAll => format!("add_all_{name}"),
      Self::Put => format!("put_{name}"),
      Self::PutAll => format!("put_all_{name}"),
      Self::PutAllFrom => format!("put_all_{name}_from"),
      Self::Remove => format!("remove_{name}"),
      Self::RemoveAll => format!("remove_all_{name}"),
      Self::Mutate => format!("mutate_{name}"),
      Self::Clear => format!("clear_{name}"),
    }
  }
}

/// A generated builder method together with the kind it was derived from.
#[derive(Debug, Clone)]
pub(crate) struct Accessor {
  pub kind: MethodKind,
  pub tokens: TokenStream,
}

impl Accessor {
  pub(crate) fn new(kind: MethodKind, tokens: TokenStream) -> Self {
    Self { kind, tokens }
  }
}

/// A user validator registered for a field's primary mutation method.
///
/// The validator is called with references to the incoming value (or key and value) and returns
/// `Result<(), E>` where `E` is the datatype's error type.
#[derive(Debug, Clone)]
pub(crate) struct Validator {
  pub path: Path,
  pub error: Type,
}

impl Validator {
  pub(crate) fn check(&self, arguments: &TokenStream) -> TokenStream {
    let path = &self.path;
    quote! { #path(#arguments)?; }
  }
}

/// Return shape of a builder method that may fail.
pub(crate) struct Returns {
  error: Option<TokenStream>,
}

impl Returns {
  /// Fails only when `validator` is present.
  pub(crate) fn validated(validator: Option<&Validator>) -> Self {
    Self {
      error: validator.map(|validator| validator.error.to_token_stream()),
    }
  }

  /// Always fails with a build error, or with the validator's error type when one is registered.
  pub(crate) fn fallible(cx: &FieldContext<'_>, validator: Option<&Validator>) -> Self {
    Self {
      error: Some(validator.map_or_else(|| cx.build_error(), |validator| validator.error.to_token_stream())),
    }
  }

  pub(crate) fn ty(&self) -> TokenStream {
    match &self.error {
      Some(error) => quote! { Result<&mut Self, #error> },
      None => quote! { &mut Self },
    }
  }

  pub(crate) fn finish(&self) -> TokenStream {
    self.wrap(&quote! { self })
  }

  pub(crate) fn wrap(&self, expr: &TokenStream) -> TokenStream {
    if self.error.is_some() {
      quote! { Ok(#expr) }
    } else {
      expr.clone()
    }
  }
}

/// `?` when a call to a validated method must propagate, nothing otherwise.
pub(crate) fn propagate(validator: Option<&Validator>) -> TokenStream {
  if validator.is_some() {
    quote! { ? }
  } else {
    quote! {}
  }
}

/// Everything a strategy needs to know about where its field is being rendered.
pub(crate) struct FieldContext<'a> {
  pub field: &'a Field,
  pub support: &'a Path,
  /// Position of the field in the unset-set, for required fields.
  pub ordinal: Option<usize>,
}

impl FieldContext<'_> {
  pub(crate) fn ident(&self) -> Ident {
    self.field.ident()
  }

  pub(crate) fn getter(&self) -> Ident {
    self.field.getter_ident()
  }

  pub(crate) fn method(&self, kind: MethodKind) -> Ident {
    codegen::ident(&kind.method_name(self.field))
  }

  pub(crate) const fn ty(&self) -> &Type {
    &self.field.ty
  }

  pub(crate) fn name_lit(&self) -> LitStr {
    self.field.name_lit()
  }

  pub(crate) fn docs(&self) -> TokenStream {
    generate_docs(&self.field.docs)
  }

  pub(crate) fn build_error(&self) -> TokenStream {
    let support = self.support;
    quote! { #support::BuildError }
  }

  /// `display` entry for a field whose value is always present.
  pub(crate) fn display_entry(&self) -> TokenStream {
    let ident = self.ident();
    let format = LitStr::new(&format!("{}={{:?}}", self.field.name), proc_macro2::Span::call_site());
    quote! { parts.push(format!(#format, self.#ident)); }
  }

  /// `display` entry for a field stored as `Option`, printed only when present.
  pub(crate) fn display_entry_if_present(&self) -> TokenStream {
    let ident = self.ident();
    let format = LitStr::new(&format!("{}={{:?}}", self.field.name), proc_macro2::Span::call_site());
    quote! {
      if let Some(current) = &self.#ident {
        parts.push(format!(#format, current));
      }
    }
  }
}

/// Parameter type for a single incoming value: by value for primitives, `impl Into<T>` otherwise.
pub(crate) fn param_type(ty: &Type, primitive: bool) -> TokenStream {
  if primitive {
    quote! { #ty }
  } else {
    quote! { impl Into<#ty> }
  }
}

/// Binds `ident` to its declared type, converting from the `impl Into` parameter when needed.
pub(crate) fn bind_param(ident: &Ident, ty: &Type, primitive: bool) -> TokenStream {
  if primitive {
    quote! {}
  } else {
    quote! { let #ident: #ty = #ident.into(); }
  }
}

/// Expression handing a generic `Into<T>` item to a method built with [`param_type`].
pub(crate) fn forward(ident: &Ident, primitive: bool) -> TokenStream {
  if primitive {
    quote! { #ident.into() }
  } else {
    quote! { #ident }
  }
}

/// Code generation for one field of one category.
pub(crate) trait FieldCodeGenerator: Debug {
  fn category(&self) -> FieldCategory;

  fn initially(&self) -> Initially {
    Initially::HasDefault
  }

  fn merge_actions(&self) -> Vec<MergeAction>;

  /// The method user validators attach to, and adapters decorate.
  fn primary_mutation(&self) -> MethodKind;

  fn validator(&self) -> Option<&Validator> {
    None
  }

  /// Whether merging this field can fail for reasons other than its own validator.
  fn nested_merge_fallible(&self) -> bool {
    false
  }

  /// Whether merge fragments compare against `template`.
  fn needs_template(&self) -> bool {
    false
  }

  fn value_field(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let ty = cx.ty();
    quote! { #ident: #ty }
  }

  fn builder_field(&self, cx: &FieldContext<'_>) -> TokenStream {
    self.value_field(cx)
  }

  fn partial_field(&self, cx: &FieldContext<'_>) -> TokenStream {
    self.value_field(cx)
  }

  /// Field initializer inside the builder's `new`.
  fn builder_init(&self, cx: &FieldContext<'_>) -> TokenStream;

  fn accessors(&self, cx: &FieldContext<'_>) -> Vec<Accessor>;

  /// Expression freezing the builder field into the value; may use `?` with `BuildError`.
  fn final_assignment(&self, cx: &FieldContext<'_>) -> TokenStream;

  /// Expression freezing the builder field into the partial; never fails.
  fn partial_assignment(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    quote! { self.#ident.clone() }
  }

  /// Statements copying the value's field into `builder` without validation.
  fn assign_to_builder(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    quote! { builder.#ident = self.#ident.clone(); }
  }

  fn merge_from_value(&self, cx: &FieldContext<'_>) -> TokenStream;

  fn merge_from_builder(&self, cx: &FieldContext<'_>) -> TokenStream;

  /// Statement storing a fully computed field value into `builder` through its public mutators.
  fn set_from_result(&self, cx: &FieldContext<'_>, builder: &TokenStream, result: &TokenStream) -> TokenStream;

  /// Statements resetting the field to the state of `template`.
  fn clear_field(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    quote! { self.#ident = template.#ident; }
  }

  fn value_accessor(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let getter = cx.getter();
    let ty = cx.ty();
    let docs = cx.docs();
    quote! {
      #docs
      pub fn #getter(&self) -> &#ty {
        &self.#ident
      }
    }
  }

  fn partial_accessor(&self, cx: &FieldContext<'_>) -> TokenStream {
    self.value_accessor(cx)
  }

  fn eq_term(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    quote! { self.#ident == other.#ident }
  }

  fn partial_eq_term(&self, cx: &FieldContext<'_>) -> TokenStream {
    self.eq_term(cx)
  }

  fn display_term(&self, cx: &FieldContext<'_>) -> TokenStream {
    cx.display_entry()
  }

  fn partial_display_term(&self, cx: &FieldContext<'_>) -> TokenStream {
    self.display_term(cx)
  }
}

#[cfg(test)]
mod tests;
