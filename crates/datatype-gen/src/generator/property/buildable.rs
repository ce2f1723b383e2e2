use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::LitStr;

use super::{
  Accessor, FieldCategory, FieldCodeGenerator, FieldContext, MergeAction, MethodKind, Returns, Validator, bind_param,
  param_type, propagate,
};
use crate::generator::{
  model::{Datatype, Field},
  resolver::ResolveContext,
};

/// What a field that nests another schema datatype needs to know about it.
#[derive(Debug, Clone)]
pub(crate) struct NestedDatatype {
  pub value: Ident,
  pub builder: Ident,
  pub partial: Ident,
  pub build: Ident,
  pub build_partial: Ident,
  pub clear: Ident,
  pub merge_from: Ident,
  pub merge_from_builder: Ident,
  pub to_builder: bool,
  /// Whether the nested builder's merge methods return `Result`.
  pub merge_fallible: bool,
}

impl NestedDatatype {
  pub(crate) fn new(datatype: &Datatype, merge_fallible: bool) -> Self {
    let methods = &datatype.methods;
    Self {
      value: datatype.value_ident(),
      builder: datatype.builder_ident(),
      partial: datatype.partial_ident(),
      build: methods.build.ident(),
      build_partial: methods.build_partial.ident(),
      clear: methods.clear.ident(),
      merge_from: methods.merge_from.ident(),
      merge_from_builder: methods.merge_from_builder.ident(),
      to_builder: datatype.to_builder,
      merge_fallible,
    }
  }
}

/// A nested datatype stored as its builder, so it can be edited in place.
#[derive(Debug)]
pub(crate) struct BuildableProperty {
  nested: NestedDatatype,
  validator: Option<Validator>,
}

impl BuildableProperty {
  pub(crate) fn recognize(cx: &ResolveContext<'_>, field: &Field) -> Option<Box<dyn FieldCodeGenerator>> {
    let nested = cx.nested(&field.ty)?;
    if !nested.to_builder {
      return None;
    }
    Some(Box::new(Self {
      nested: nested.clone(),
      validator: cx.hook(MethodKind::Set, field),
    }))
  }

  /// Validates the builder bound to `builder` when it is complete enough to build.
  fn check_complete(&self) -> Option<TokenStream> {
    let build = &self.nested.build;
    self.validator.as_ref().map(|validator| {
      let check = validator.check(&quote! { &current });
      quote! {
        if let Ok(current) = builder.#build() {
          #check
        }
      }
    })
  }

  fn merge_call(&self, cx: &FieldContext<'_>, method: &Ident, source: &TokenStream) -> TokenStream {
    let ident = cx.ident();
    let q = if self.nested.merge_fallible { quote! { ? } } else { quote! {} };
    match self.check_complete() {
      Some(check) => quote! {
        let mut builder = self.#ident.clone();
        builder.#method(#source)#q;
        #check
        self.#ident = builder;
      },
      None => quote! { self.#ident.#method(#source)#q; },
    }
  }
}

impl FieldCodeGenerator for BuildableProperty {
  fn category(&self) -> FieldCategory {
    FieldCategory::Buildable
  }

  fn merge_actions(&self) -> Vec<MergeAction> {
    vec![MergeAction::MergeNested]
  }

  fn primary_mutation(&self) -> MethodKind {
    MethodKind::Set
  }

  fn validator(&self) -> Option<&Validator> {
    self.validator.as_ref()
  }

  fn nested_merge_fallible(&self) -> bool {
    self.nested.merge_fallible
  }

  fn builder_field(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let builder = &self.nested.builder;
    quote! { #ident: #builder }
  }

  fn partial_field(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let partial = &self.nested.partial;
    quote! { #ident: #partial }
  }

  fn builder_init(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let builder = &self.nested.builder;
    quote! { #ident: #builder::new() }
  }

  fn accessors(&self, cx: &FieldContext<'_>) -> Vec<Accessor> {
    let ident = cx.ident();
    let ty = cx.ty();
    let builder_ty = &self.nested.builder;
    let getter = cx.getter();
    let getter_mut = cx.method(MethodKind::GetMut);
    let docs = cx.docs();
    let set = cx.method(MethodKind::Set);
    let set_builder = cx.method(MethodKind::SetBuilder);
    let mutate = cx.method(MethodKind::Mutate);

    let param = param_type(ty, false);
    let bind = bind_param(&ident, ty, false);
    let check = self.validator.as_ref().map(|validator| validator.check(&quote! { &#ident }));
    let returns = Returns::validated(self.validator.as_ref());
    let ret = returns.ty();
    let finish = returns.finish();

    let mutate_body = match self.check_complete() {
      Some(check_complete) => quote! {
        let mut builder = self.#ident.clone();
        mutator(&mut builder);
        #check_complete
        self.#ident = builder;
      },
      None => quote! { mutator(&mut self.#ident); },
    };
    let check_builder = self.check_complete();

    let mut accessors = vec![
      Accessor::new(
        MethodKind::Set,
        quote! {
          pub fn #set(&mut self, #ident: #param) -> #ret {
            #bind
            #check
            self.#ident = #ident.to_builder();
            #finish
          }
        },
      ),
      Accessor::new(
        MethodKind::SetBuilder,
        quote! {
          pub fn #set_builder(&mut self, builder: #builder_ty) -> #ret {
            #check_builder
            self.#ident = builder;
            #finish
          }
        },
      ),
      Accessor::new(
        MethodKind::Mutate,
        quote! {
          pub fn #mutate<F>(&mut self, mutator: F) -> #ret
          where
            F: FnOnce(&mut #builder_ty),
          {
            #mutate_body
            #finish
          }
        },
      ),
      Accessor::new(
        MethodKind::Get,
        quote! {
          #docs
          pub fn #getter(&self) -> &#builder_ty {
            &self.#ident
          }
        },
      ),
    ];

    // Direct mutable access would bypass the validator.
    if self.validator.is_none() {
      accessors.push(Accessor::new(
        MethodKind::GetMut,
        quote! {
          pub fn #getter_mut(&mut self) -> &mut #builder_ty {
            &mut self.#ident
          }
        },
      ));
    }

    accessors
  }

  fn final_assignment(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let build = &self.nested.build;
    quote! { self.#ident.#build()? }
  }

  fn partial_assignment(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let build_partial = &self.nested.build_partial;
    quote! { self.#ident.#build_partial() }
  }

  fn assign_to_builder(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    quote! { builder.#ident = self.#ident.to_builder(); }
  }

  fn merge_from_value(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    self.merge_call(cx, &self.nested.merge_from, &quote! { &value.#ident })
  }

  fn merge_from_builder(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    self.merge_call(cx, &self.nested.merge_from_builder, &quote! { &other.#ident })
  }

  fn set_from_result(&self, cx: &FieldContext<'_>, builder: &TokenStream, result: &TokenStream) -> TokenStream {
    let set = cx.method(MethodKind::Set);
    let propagate = propagate(self.validator.as_ref());
    quote! { #builder.#set(#result)#propagate; }
  }

  fn clear_field(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let clear = &self.nested.clear;
    quote! { self.#ident.#clear(); }
  }

  fn value_accessor(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let getter = cx.getter();
    let value = &self.nested.value;
    let docs = cx.docs();
    quote! {
      #docs
      pub fn #getter(&self) -> &#value {
        &self.#ident
      }
    }
  }

  fn partial_accessor(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let getter = cx.getter();
    let partial = &self.nested.partial;
    let docs = cx.docs();
    quote! {
      #docs
      pub fn #getter(&self) -> &#partial {
        &self.#ident
      }
    }
  }

  /// Nested values print through their own `Display`.
  fn display_term(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let format = LitStr::new(&format!("{}={{}}", cx.field.name), proc_macro2::Span::call_site());
    quote! { parts.push(format!(#format, self.#ident)); }
  }
}
