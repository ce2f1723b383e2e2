use proc_macro2::TokenStream;
use quote::quote;

use super::BuilderSynthesizer;

/// The partial value: every field the builder had, plus a copy of its unset-set.
pub(crate) struct PartialGenerator<'s, 'a> {
  synthesizer: &'s BuilderSynthesizer<'a>,
}

impl<'s, 'a> PartialGenerator<'s, 'a> {
  pub(crate) fn new(synthesizer: &'s BuilderSynthesizer<'a>) -> Self {
    Self { synthesizer }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let datatype = self.synthesizer.datatype();
    let partial = datatype.partial_ident();
    let vis = datatype.visibility.to_tokens();
    let docs = format!(
      " A [`{}`] that may be missing required fields, for use in tests. Reading a missing field fails.",
      datatype.name
    );
    let fields = self.synthesizer.collect(|generator, cx| generator.partial_field(cx));
    let accessors = self.synthesizer.collect(|generator, cx| generator.partial_accessor(cx));
    let unset = self.synthesizer.layout().field_type(self.synthesizer.support());

    quote! {
      #[doc = #docs]
      #[derive(Debug, Clone)]
      #vis struct #partial {
        #(#fields,)*
        unset: #unset,
      }

      impl #partial {
        #(#accessors)*
      }
    }
  }
}
