use proc_macro2::TokenStream;
use quote::quote;

use super::{BuilderSynthesizer, merge::MergeGenerator};
use crate::generator::property::{Accessor, FieldCodeGenerator, FieldContext};

/// The mutable builder: storage, per-field accessors and the builder-level methods.
pub(crate) struct BuilderGenerator<'s, 'a> {
  synthesizer: &'s BuilderSynthesizer<'a>,
}

impl<'s, 'a> BuilderGenerator<'s, 'a> {
  pub(crate) fn new(synthesizer: &'s BuilderSynthesizer<'a>) -> Self {
    Self { synthesizer }
  }

  pub(crate) fn generate(&self) -> TokenStream {
    let definition = self.generate_struct_definition();
    let impl_block = self.generate_impl_block();
    let builder = self.synthesizer.datatype().builder_ident();

    quote! {
      #definition
      #impl_block

      impl Default for #builder {
        fn default() -> Self {
          Self::new()
        }
      }
    }
  }

  fn generate_struct_definition(&self) -> TokenStream {
    let datatype = self.synthesizer.datatype();
    let builder = datatype.builder_ident();
    let vis = datatype.visibility.to_tokens();
    let docs = format!(" Builder for [`{}`].", datatype.name);
    let fields = self.synthesizer.collect(|generator, cx| generator.builder_field(cx));
    let unset = self.synthesizer.layout().field_type(self.synthesizer.support());

    quote! {
      #[doc = #docs]
      #[derive(Debug, Clone)]
      #vis struct #builder {
        #(#fields,)*
        unset: #unset,
      }
    }
  }

  fn generate_impl_block(&self) -> TokenStream {
    let builder = self.synthesizer.datatype().builder_ident();
    let required_fields = self.synthesizer.layout().required_fields();
    let constructor = self.generate_constructor();
    let accessors: Vec<TokenStream> = self
      .synthesizer
      .fields()
      .flat_map(|(generator, cx)| decorated_accessors(generator, &cx))
      .collect();
    let build = self.generate_build();
    let build_partial = self.generate_build_partial();
    let clear = self.generate_clear();
    let merges = MergeGenerator::new(self.synthesizer).generate();

    quote! {
      impl #builder {
        #required_fields

        #constructor

        #(#accessors)*

        #build
        #build_partial
        #clear
        #merges
      }
    }
  }

  fn generate_constructor(&self) -> TokenStream {
    let inits = self.synthesizer.collect(|generator, cx| generator.builder_init(cx));
    let unset = self.synthesizer.layout().initial(self.synthesizer.support());

    quote! {
      pub fn new() -> Self {
        Self {
          #(#inits,)*
          unset: #unset,
        }
      }
    }
  }

  fn generate_build(&self) -> TokenStream {
    let datatype = self.synthesizer.datatype();
    let method = &datatype.methods.build;
    let name = method.ident();
    let vis = method.visibility.to_tokens();
    let value = datatype.value_ident();
    let name_lit = datatype.name_lit();
    let support = self.synthesizer.support();
    let assignments = self.synthesizer.collect(|generator, cx| {
      let ident = cx.ident();
      let expr = generator.final_assignment(cx);
      quote! { #ident: #expr }
    });

    quote! {
      /// Fails with `MissingFields` naming every required field that was never set.
      #vis fn #name(&self) -> Result<#value, #support::BuildError> {
        self.unset.check_complete(#name_lit, &Self::REQUIRED_FIELDS)?;
        Ok(#value {
          #(#assignments,)*
        })
      }
    }
  }

  fn generate_build_partial(&self) -> TokenStream {
    let datatype = self.synthesizer.datatype();
    let method = &datatype.methods.build_partial;
    let name = method.ident();
    let vis = method.visibility.to_tokens();
    let partial = datatype.partial_ident();
    let assignments = self.synthesizer.collect(|generator, cx| {
      let ident = cx.ident();
      let expr = generator.partial_assignment(cx);
      quote! { #ident: #expr }
    });

    quote! {
      /// Snapshots the builder without checking required fields. Reading an unset field of the
      /// result fails instead.
      #vis fn #name(&self) -> #partial {
        #partial {
          #(#assignments,)*
          unset: self.unset,
        }
      }
    }
  }

  fn generate_clear(&self) -> TokenStream {
    let method = &self.synthesizer.datatype().methods.clear;
    let name = method.ident();
    let vis = method.visibility.to_tokens();
    let clears = self.synthesizer.collect(|generator, cx| generator.clear_field(cx));

    quote! {
      /// Resets every field to its initial state. Sorted-set comparators are kept.
      #vis fn #name(&mut self) -> &mut Self {
        let template = Self::new();
        #(#clears)*
        self.unset = template.unset;
        self
      }
    }
  }
}

/// A field's accessors, with adapter decorations attached to its primary mutation method.
fn decorated_accessors(generator: &dyn FieldCodeGenerator, cx: &FieldContext<'_>) -> Vec<TokenStream> {
  let primary = generator.primary_mutation();
  let decorations = &cx.field.decorations;
  generator
    .accessors(cx)
    .into_iter()
    .map(|Accessor { kind, tokens }| {
      if kind == primary {
        quote! {
          #(#decorations)*
          #tokens
        }
      } else {
        tokens
      }
    })
    .collect()
}
