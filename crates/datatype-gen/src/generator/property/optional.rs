use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use super::{
  Accessor, FieldCategory, FieldCodeGenerator, FieldContext, MergeAction, MethodKind, Returns, Validator, bind_param,
  param_type, propagate,
};
use crate::generator::{
  model::{Field, Primitive, types},
  resolver::ResolveContext,
};

/// `Option<T>`: absent until set, cleared back to `None`.
#[derive(Debug)]
pub(crate) struct OptionalProperty {
  element: Type,
  primitive: bool,
  /// Compared through `to_bits` so that `NaN` equals itself.
  float: bool,
  validator: Option<Validator>,
}

impl OptionalProperty {
  pub(crate) fn recognize(cx: &ResolveContext<'_>, field: &Field) -> Option<Box<dyn FieldCodeGenerator>> {
    let (_, arguments) = types::match_constructor(&field.ty, &["Option"], 1)?;
    let element = arguments[0].clone();
    let primitive = Primitive::of(&element);
    Some(Box::new(Self {
      primitive: primitive.is_some(),
      float: primitive.is_some_and(Primitive::is_float),
      element,
      validator: cx.hook(MethodKind::Set, field),
    }))
  }

  fn copied(&self, expr: &TokenStream) -> TokenStream {
    if self.primitive {
      quote! { *#expr }
    } else {
      quote! { #expr.clone() }
    }
  }
}

impl FieldCodeGenerator for OptionalProperty {
  fn category(&self) -> FieldCategory {
    FieldCategory::Optional
  }

  fn merge_actions(&self) -> Vec<MergeAction> {
    vec![MergeAction::SkipIfEqualsDefault]
  }

  fn primary_mutation(&self) -> MethodKind {
    MethodKind::Set
  }

  fn validator(&self) -> Option<&Validator> {
    self.validator.as_ref()
  }

  fn builder_init(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    quote! { #ident: None }
  }

  fn accessors(&self, cx: &FieldContext<'_>) -> Vec<Accessor> {
    let ident = cx.ident();
    let element = &self.element;
    let getter = cx.getter();
    let docs = cx.docs();
    let set = cx.method(MethodKind::Set);
    let set_nullable = cx.method(MethodKind::SetNullable);
    let map = cx.method(MethodKind::Map);
    let clear = cx.method(MethodKind::Clear);

    let param = param_type(element, self.primitive);
    let bind = bind_param(&ident, element, self.primitive);
    let check = self.validator.as_ref().map(|validator| validator.check(&quote! { &#ident }));
    let returns = Returns::validated(self.validator.as_ref());
    let ret = returns.ty();
    let finish = returns.finish();
    let cleared = returns.wrap(&quote! { self.#clear() });
    let current = if self.primitive {
      quote! { self.#ident }
    } else {
      quote! { self.#ident.clone() }
    };
    let get = if self.primitive {
      quote! {
        #docs
        pub fn #getter(&self) -> Option<#element> {
          self.#ident
        }
      }
    } else {
      quote! {
        #docs
        pub fn #getter(&self) -> Option<&#element> {
          self.#ident.as_ref()
        }
      }
    };

    vec![
      Accessor::new(
        MethodKind::Set,
        quote! {
          pub fn #set(&mut self, #ident: #param) -> #ret {
            #bind
            #check
            self.#ident = Some(#ident);
            #finish
          }
        },
      ),
      Accessor::new(
        MethodKind::SetNullable,
        quote! {
          pub fn #set_nullable(&mut self, #ident: Option<#element>) -> #ret {
            match #ident {
              Some(#ident) => self.#set(#ident),
              None => #cleared,
            }
          }
        },
      ),
      Accessor::new(
        MethodKind::Map,
        quote! {
          pub fn #map<F>(&mut self, mapper: F) -> #ret
          where
            F: FnOnce(#element) -> #element,
          {
            match #current {
              Some(current) => self.#set(mapper(current)),
              None => #finish,
            }
          }
        },
      ),
      Accessor::new(
        MethodKind::Clear,
        quote! {
          pub fn #clear(&mut self) -> &mut Self {
            self.#ident = None;
            self
          }
        },
      ),
      Accessor::new(MethodKind::Get, get),
    ]
  }

  fn final_assignment(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    quote! { self.#ident.clone() }
  }

  fn merge_from_value(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let assign = self.set_from_result(cx, &quote! { self }, &self.copied(&quote! { current }));
    quote! {
      if let Some(current) = &value.#ident {
        #assign
      }
    }
  }

  fn merge_from_builder(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let assign = self.set_from_result(cx, &quote! { self }, &self.copied(&quote! { current }));
    quote! {
      if let Some(current) = &other.#ident {
        #assign
      }
    }
  }

  fn set_from_result(&self, cx: &FieldContext<'_>, builder: &TokenStream, result: &TokenStream) -> TokenStream {
    let set = cx.method(MethodKind::Set);
    let propagate = propagate(self.validator.as_ref());
    quote! { #builder.#set(#result)#propagate; }
  }

  fn value_accessor(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let getter = cx.getter();
    let element = &self.element;
    let docs = cx.docs();
    if self.primitive {
      quote! {
        #docs
        pub fn #getter(&self) -> Option<#element> {
          self.#ident
        }
      }
    } else {
      quote! {
        #docs
        pub fn #getter(&self) -> Option<&#element> {
          self.#ident.as_ref()
        }
      }
    }
  }

  fn eq_term(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    if self.float {
      let element = &self.element;
      quote! { self.#ident.map(#element::to_bits) == other.#ident.map(#element::to_bits) }
    } else {
      quote! { self.#ident == other.#ident }
    }
  }

  fn display_term(&self, cx: &FieldContext<'_>) -> TokenStream {
    cx.display_entry_if_present()
  }
}
