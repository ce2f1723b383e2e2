use proc_macro2::TokenStream;
use quote::quote;

use super::BuilderSynthesizer;

/// `merge_from` (value into builder) and `merge_from_builder` (builder into builder).
pub(crate) struct MergeGenerator<'s, 'a> {
  synthesizer: &'s BuilderSynthesizer<'a>,
}

impl<'s, 'a> MergeGenerator<'s, 'a> {
  pub(crate) fn new(synthesizer: &'s BuilderSynthesizer<'a>) -> Self {
    Self { synthesizer }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let from_value = self.generate_merge_from();
    let from_builder = self.generate_merge_from_builder();

    quote! {
      #from_value
      #from_builder
    }
  }

  fn generate_merge_from(&self) -> TokenStream {
    let datatype = self.synthesizer.datatype();
    let method = &datatype.methods.merge_from;
    let name = method.ident();
    let vis = method.visibility.to_tokens();
    let value = datatype.value_ident();
    let merges = self.synthesizer.collect(|generator, cx| generator.merge_from_value(cx));
    let (ret, finish) = self.returns();
    let template = self.template();

    quote! {
      /// Copies every field of `value` that differs from its initial state; collections are appended to.
      #vis fn #name(&mut self, value: &#value) -> #ret {
        #template
        #(#merges)*
        #finish
      }
    }
  }

  fn generate_merge_from_builder(&self) -> TokenStream {
    let datatype = self.synthesizer.datatype();
    let method = &datatype.methods.merge_from_builder;
    let name = method.ident();
    let vis = method.visibility.to_tokens();
    let merges = self.synthesizer.collect(|generator, cx| generator.merge_from_builder(cx));
    let (ret, finish) = self.returns();
    let template = self.template();

    quote! {
      /// Copies every field set on `other`; collections are appended to.
      #vis fn #name(&mut self, other: &Self) -> #ret {
        #template
        #(#merges)*
        #finish
      }
    }
  }

  fn returns(&self) -> (TokenStream, TokenStream) {
    if self.synthesizer.resolved().merge_fallible() {
      let error = self.synthesizer.error_type();
      (quote! { Result<&mut Self, #error> }, quote! { Ok(self) })
    } else {
      (quote! { &mut Self }, quote! { self })
    }
  }

  /// Declared only when some field compares against its initial value.
  fn template(&self) -> TokenStream {
    if self.synthesizer.resolved().needs_template() {
      quote! { let template = Self::new(); }
    } else {
      quote! {}
    }
  }
}
