use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
  #[default]
  Public,
  Crate,
  File,
}

impl Visibility {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "public" => Some(Visibility::Public),
      "crate" => Some(Visibility::Crate),
      "file" | "private" => Some(Visibility::File),
      _ => None,
    }
  }

  pub(crate) fn to_tokens(self) -> TokenStream {
    match self {
      Visibility::Public => quote! { pub },
      Visibility::Crate => quote! { pub(crate) },
      Visibility::File => quote! {},
    }
  }
}

pub(crate) fn generate_docs(docs: &[String]) -> TokenStream {
  if docs.is_empty() {
    return quote! {};
  }
  let doc_lines: Vec<TokenStream> = docs
    .iter()
    .map(|line| {
      let line = format!(" {line}");
      quote! { #[doc = #line] }
    })
    .collect();
  quote! { #(#doc_lines)* }
}

pub(crate) fn ident(name: &str) -> Ident {
  format_ident!("{name}")
}

pub(crate) fn ordinal(value: usize) -> Literal {
  Literal::usize_unsuffixed(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_visibility_parse() {
    assert_eq!(Visibility::parse("public"), Some(Visibility::Public));
    assert_eq!(Visibility::parse("crate"), Some(Visibility::Crate));
    assert_eq!(Visibility::parse("private"), Some(Visibility::File));
    assert_eq!(Visibility::parse("protected"), None);
  }

  #[test]
  fn test_visibility_tokens() {
    assert_eq!(Visibility::Public.to_tokens().to_string(), "pub");
    assert_eq!(Visibility::Crate.to_tokens().to_string(), "pub (crate)");
    assert!(Visibility::File.to_tokens().is_empty());
  }

  #[test]
  fn test_generate_docs_prefixes_space() {
    let docs = generate_docs(&["A person.".to_string()]).to_string();
    assert!(docs.contains("\" A person.\""));
    assert!(generate_docs(&[]).is_empty());
  }
}
