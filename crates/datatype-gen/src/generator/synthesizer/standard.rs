use proc_macro2::{Ident, TokenStream};
use quote::quote;

use super::BuilderSynthesizer;
use crate::generator::model::Underride;

/// `PartialEq` and `Display` for the value and partial, unless the datatype writes them by hand.
pub(crate) struct StandardImplsGenerator<'s, 'a> {
  synthesizer: &'s BuilderSynthesizer<'a>,
}

impl<'s, 'a> StandardImplsGenerator<'s, 'a> {
  pub(crate) fn new(synthesizer: &'s BuilderSynthesizer<'a>) -> Self {
    Self { synthesizer }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let datatype = self.synthesizer.datatype();
    let value = datatype.value_ident();
    let partial = datatype.partial_ident();

    let eq = (!datatype.underrides(Underride::PartialEq)).then(|| {
      let value_terms = self.synthesizer.collect(|generator, cx| generator.eq_term(cx));
      let mut partial_terms = self.synthesizer.collect(|generator, cx| generator.partial_eq_term(cx));
      partial_terms.push(quote! { self.unset == other.unset });
      let value_eq = generate_partial_eq(&value, &value_terms);
      let partial_eq = generate_partial_eq(&partial, &partial_terms);
      quote! {
        #value_eq
        #partial_eq
      }
    });

    let display = (!datatype.underrides(Underride::Display)).then(|| {
      let value_terms = self.synthesizer.collect(|generator, cx| generator.display_term(cx));
      let partial_terms = self.synthesizer.collect(|generator, cx| generator.partial_display_term(cx));
      let value_display = generate_display(&value, &datatype.name, &value_terms);
      let partial_display = generate_display(&partial, &format!("partial {}", datatype.name), &partial_terms);
      quote! {
        #value_display
        #partial_display
      }
    });

    quote! {
      #eq
      #display
    }
  }
}

fn generate_partial_eq(name: &Ident, terms: &[TokenStream]) -> TokenStream {
  if terms.is_empty() {
    return quote! {
      impl PartialEq for #name {
        fn eq(&self, _other: &Self) -> bool {
          true
        }
      }
    };
  }
  let body = quote! { #(#terms)&&* };

  quote! {
    impl PartialEq for #name {
      fn eq(&self, other: &Self) -> bool {
        #body
      }
    }
  }
}

fn generate_display(name: &Ident, label: &str, terms: &[TokenStream]) -> TokenStream {
  let format = format!("{label}{{{{{{}}}}}}");
  if terms.is_empty() {
    let empty = format!("{label}{{}}");
    return quote! {
      impl std::fmt::Display for #name {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
          f.write_str(#empty)
        }
      }
    };
  }

  quote! {
    impl std::fmt::Display for #name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        #(#terms)*
        write!(f, #format, parts.join(", "))
      }
    }
  }
}
