use proc_macro2::TokenStream;
use quote::quote;

use super::BuilderSynthesizer;
use crate::generator::codegen::generate_docs;

/// The immutable, fully populated value type.
pub(crate) struct ValueGenerator<'s, 'a> {
  synthesizer: &'s BuilderSynthesizer<'a>,
}

impl<'s, 'a> ValueGenerator<'s, 'a> {
  pub(crate) fn new(synthesizer: &'s BuilderSynthesizer<'a>) -> Self {
    Self { synthesizer }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let definition = self.generate_struct_definition();
    let impl_block = self.generate_impl_block();

    quote! {
      #definition
      #impl_block
    }
  }

  fn generate_struct_definition(&self) -> TokenStream {
    let datatype = self.synthesizer.datatype();
    let name = datatype.value_ident();
    let vis = datatype.visibility.to_tokens();
    let docs = generate_docs(&datatype.docs);
    let fields = self.synthesizer.collect(|generator, cx| generator.value_field(cx));

    quote! {
      #docs
      #[derive(Debug, Clone)]
      #vis struct #name {
        #(#fields),*
      }
    }
  }

  fn generate_impl_block(&self) -> TokenStream {
    let datatype = self.synthesizer.datatype();
    let name = datatype.value_ident();
    let builder = datatype.builder_ident();
    let accessors = self.synthesizer.collect(|generator, cx| generator.value_accessor(cx));
    let to_builder = datatype.to_builder.then(|| self.generate_to_builder());

    quote! {
      impl #name {
        pub fn builder() -> #builder {
          #builder::new()
        }

        #(#accessors)*

        #to_builder
      }
    }
  }

  fn generate_to_builder(&self) -> TokenStream {
    let builder = self.synthesizer.datatype().builder_ident();
    let assignments = self.synthesizer.collect(|generator, cx| generator.assign_to_builder(cx));
    if assignments.is_empty() {
      return quote! {
        pub fn to_builder(&self) -> #builder {
          #builder::new()
        }
      };
    }

    quote! {
      /// A builder holding a copy of every field of this value.
      pub fn to_builder(&self) -> #builder {
        let mut builder = #builder::new();
        #(#assignments)*
        builder
      }
    }
  }
}
