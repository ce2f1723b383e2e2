use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{LitStr, Path};

use super::resolver::ResolvedDatatype;

/// Generation-time view of a builder's unset-set: one slot per required field, in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UnsetLayout {
  names: Vec<String>,
}

impl UnsetLayout {
  pub(crate) fn of(resolved: &ResolvedDatatype<'_>) -> Self {
    let mut required: Vec<(usize, &str)> = resolved
      .fields
      .iter()
      .filter_map(|field| field.ordinal.map(|ordinal| (ordinal, field.field.name.as_str())))
      .collect();
    required.sort_unstable_by_key(|(ordinal, _)| *ordinal);
    Self {
      names: required.into_iter().map(|(_, name)| name.to_string()).collect(),
    }
  }

  pub(crate) fn len(&self) -> usize {
    self.names.len()
  }

  fn count(&self) -> Literal {
    Literal::usize_unsuffixed(self.len())
  }

  /// Type of the `unset` field shared by builder and partial.
  pub(crate) fn field_type(&self, support: &Path) -> TokenStream {
    let count = self.count();
    quote! { #support::UnsetFields<#count> }
  }

  pub(crate) fn initial(&self, support: &Path) -> TokenStream {
    quote! { #support::UnsetFields::all() }
  }

  pub(crate) fn required_fields(&self) -> TokenStream {
    let count = self.count();
    let names = self
      .names
      .iter()
      .map(|name| LitStr::new(name, proc_macro2::Span::call_site()));
    quote! {
      const REQUIRED_FIELDS: [&'static str; #count] = [#(#names),*];
    }
  }
}
