//! Composes field strategies into the value, builder and partial artifacts of one datatype.

mod builder;
mod merge;
mod partial;
mod standard;
mod value;

use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

use self::{
  builder::BuilderGenerator, partial::PartialGenerator, standard::StandardImplsGenerator, value::ValueGenerator,
};
use super::{
  model::Datatype,
  property::{FieldCodeGenerator, FieldContext},
  resolver::ResolvedDatatype,
  unset::UnsetLayout,
};

/// One resolved datatype plus the support crate path its generated code refers to.
pub(crate) struct BuilderSynthesizer<'a> {
  resolved: &'a ResolvedDatatype<'a>,
  support: &'a Path,
  layout: UnsetLayout,
}

impl<'a> BuilderSynthesizer<'a> {
  pub(crate) fn new(resolved: &'a ResolvedDatatype<'a>, support: &'a Path) -> Self {
    Self {
      resolved,
      support,
      layout: UnsetLayout::of(resolved),
    }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let value = ValueGenerator::new(self).generate();
    let builder = BuilderGenerator::new(self).generate();
    let partial = PartialGenerator::new(self).generate();
    let standard = StandardImplsGenerator::new(self).generate();

    quote! {
      #value
      #builder
      #partial
      #standard
    }
  }

  pub(crate) fn datatype(&self) -> &'a Datatype {
    self.resolved.datatype
  }

  pub(crate) fn support(&self) -> &'a Path {
    self.support
  }

  pub(crate) const fn layout(&self) -> &UnsetLayout {
    &self.layout
  }

  pub(crate) fn resolved(&self) -> &'a ResolvedDatatype<'a> {
    self.resolved
  }

  /// Every field's strategy together with its rendering context, in declaration order.
  pub(crate) fn fields(&self) -> impl Iterator<Item = (&'a dyn FieldCodeGenerator, FieldContext<'a>)> {
    let support = self.support;
    self
      .resolved
      .fields
      .iter()
      .map(move |field| (field.generator.as_ref(), field.context(support)))
  }

  /// Collects one fragment per field.
  pub(crate) fn collect<F>(&self, fragment: F) -> Vec<TokenStream>
  where
    F: Fn(&dyn FieldCodeGenerator, &FieldContext<'_>) -> TokenStream,
  {
    self.fields().map(|(generator, cx)| fragment(generator, &cx)).collect()
  }

  pub(crate) fn error_type(&self) -> TokenStream {
    let support = self.support;
    self
      .datatype()
      .error_type
      .as_ref()
      .map_or_else(|| quote! { #support::BuildError }, |ty| quote! { #ty })
  }
}
