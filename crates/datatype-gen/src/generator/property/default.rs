use proc_macro2::TokenStream;
use quote::quote;

use super::{
  Accessor, FieldCategory, FieldCodeGenerator, FieldContext, Initially, MergeAction, MethodKind, Returns, Validator,
  bind_param, param_type, propagate,
};
use crate::generator::{codegen, model::Field, resolver::ResolveContext};

/// Any type no other category claims. Required unless the schema declares a default.
#[derive(Debug)]
pub(crate) struct DefaultProperty {
  required: bool,
  primitive: bool,
  float: bool,
  validator: Option<Validator>,
}

impl DefaultProperty {
  pub(crate) fn recognize(cx: &ResolveContext<'_>, field: &Field) -> Option<Box<dyn FieldCodeGenerator>> {
    Some(Self::fallback(cx, field))
  }

  /// Accepts any field.
  pub(crate) fn fallback(cx: &ResolveContext<'_>, field: &Field) -> Box<dyn FieldCodeGenerator> {
    Box::new(Self {
      required: field.default.is_none(),
      primitive: field.is_primitive(),
      float: field.is_float(),
      validator: cx.hook(MethodKind::Set, field),
    })
  }

  fn copied(&self, expr: &TokenStream) -> TokenStream {
    if self.primitive {
      expr.clone()
    } else {
      quote! { #expr.clone() }
    }
  }

  fn differs_from_template(&self, source: &TokenStream, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    if self.float {
      quote! { #source.#ident.to_bits() != template.#ident.to_bits() }
    } else {
      quote! { #source.#ident != template.#ident }
    }
  }

  fn ordinal(cx: &FieldContext<'_>) -> proc_macro2::Literal {
    codegen::ordinal(cx.ordinal.unwrap_or_default())
  }

  fn setter(&self, cx: &FieldContext<'_>) -> Accessor {
    let ident = cx.ident();
    let ty = cx.ty();
    let set = cx.method(MethodKind::Set);
    let param = param_type(ty, self.primitive);
    let bind = bind_param(&ident, ty, self.primitive);
    let check = self.validator.as_ref().map(|validator| validator.check(&quote! { &#ident }));
    let store = if self.required {
      let ordinal = Self::ordinal(cx);
      quote! {
        self.#ident = Some(#ident);
        self.unset.remove(#ordinal);
      }
    } else {
      quote! { self.#ident = #ident; }
    };
    let returns = Returns::validated(self.validator.as_ref());
    let ret = returns.ty();
    let finish = returns.finish();

    Accessor::new(
      MethodKind::Set,
      quote! {
        pub fn #set(&mut self, #ident: #param) -> #ret {
          #bind
          #check
          #store
          #finish
        }
      },
    )
  }

  fn mapper(&self, cx: &FieldContext<'_>) -> Accessor {
    let ident = cx.ident();
    let ty = cx.ty();
    let set = cx.method(MethodKind::Set);
    let map = cx.method(MethodKind::Map);
    let getter = cx.getter();
    let call = quote! { self.#set(mapper(current)) };

    let (returns, current, tail) = if self.required {
      let returns = Returns::fallible(cx, self.validator.as_ref());
      let current = self.copied(&quote! { self.#getter()? });
      let tail = if self.validator.is_some() { call } else { returns.wrap(&call) };
      (returns, current, tail)
    } else {
      let returns = Returns::validated(self.validator.as_ref());
      (returns, self.copied(&quote! { self.#ident }), call)
    };
    let ret = returns.ty();

    Accessor::new(
      MethodKind::Map,
      quote! {
        pub fn #map<F>(&mut self, mapper: F) -> #ret
        where
          F: FnOnce(#ty) -> #ty,
        {
          let current = #current;
          #tail
        }
      },
    )
  }

  fn getter(&self, cx: &FieldContext<'_>) -> Accessor {
    let ident = cx.ident();
    let ty = cx.ty();
    let getter = cx.getter();
    let docs = cx.docs();

    let tokens = if self.required {
      let ordinal = Self::ordinal(cx);
      let name = cx.name_lit();
      let error = cx.build_error();
      let (ret, lookup) = if self.primitive {
        (quote! { #ty }, quote! { self.#ident })
      } else {
        (quote! { &#ty }, quote! { self.#ident.as_ref() })
      };
      quote! {
        #docs
        pub fn #getter(&self) -> Result<#ret, #error> {
          self.unset.check_set(#ordinal, #name)?;
          #lookup.ok_or_else(|| #error::not_set(#name))
        }
      }
    } else if self.primitive {
      quote! {
        #docs
        pub fn #getter(&self) -> #ty {
          self.#ident
        }
      }
    } else {
      quote! {
        #docs
        pub fn #getter(&self) -> &#ty {
          &self.#ident
        }
      }
    };

    Accessor::new(MethodKind::Get, tokens)
  }
}

impl FieldCodeGenerator for DefaultProperty {
  fn category(&self) -> FieldCategory {
    FieldCategory::Default
  }

  fn initially(&self) -> Initially {
    if self.required {
      Initially::Required
    } else {
      Initially::HasDefault
    }
  }

  fn merge_actions(&self) -> Vec<MergeAction> {
    if self.required {
      vec![MergeAction::SkipIfUnset]
    } else {
      vec![MergeAction::SkipIfEqualsDefault]
    }
  }

  fn primary_mutation(&self) -> MethodKind {
    MethodKind::Set
  }

  fn validator(&self) -> Option<&Validator> {
    self.validator.as_ref()
  }

  fn needs_template(&self) -> bool {
    !self.required
  }

  fn builder_field(&self, cx: &FieldContext<'_>) -> TokenStream {
    if self.required {
      let ident = cx.ident();
      let ty = cx.ty();
      quote! { #ident: Option<#ty> }
    } else {
      self.value_field(cx)
    }
  }

  fn partial_field(&self, cx: &FieldContext<'_>) -> TokenStream {
    self.builder_field(cx)
  }

  fn builder_init(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    match &cx.field.default {
      Some(default) if !self.required => quote! { #ident: #default },
      _ => quote! { #ident: None },
    }
  }

  fn accessors(&self, cx: &FieldContext<'_>) -> Vec<Accessor> {
    vec![self.setter(cx), self.mapper(cx), self.getter(cx)]
  }

  fn final_assignment(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let stored = self.copied(&quote! { self.#ident });
    if self.required {
      let name = cx.name_lit();
      let error = cx.build_error();
      quote! { #stored.ok_or_else(|| #error::not_set(#name))? }
    } else {
      stored
    }
  }

  fn partial_assignment(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    self.copied(&quote! { self.#ident })
  }

  fn assign_to_builder(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let stored = self.copied(&quote! { self.#ident });
    if self.required {
      let ordinal = Self::ordinal(cx);
      quote! {
        builder.#ident = Some(#stored);
        builder.unset.remove(#ordinal);
      }
    } else {
      quote! { builder.#ident = #stored; }
    }
  }

  fn merge_from_value(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let assign = self.set_from_result(cx, &quote! { self }, &self.copied(&quote! { value.#ident }));
    if self.required {
      assign
    } else {
      let differs = self.differs_from_template(&quote! { value }, cx);
      quote! {
        if #differs {
          #assign
        }
      }
    }
  }

  fn merge_from_builder(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    if self.required {
      let getter = cx.getter();
      let assign = self.set_from_result(cx, &quote! { self }, &self.copied(&quote! { current }));
      quote! {
        if let Ok(current) = other.#getter() {
          #assign
        }
      }
    } else {
      let differs = self.differs_from_template(&quote! { other }, cx);
      let assign = self.set_from_result(cx, &quote! { self }, &self.copied(&quote! { other.#ident }));
      quote! {
        if #differs {
          #assign
        }
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
    let ty = cx.ty();
    let docs = cx.docs();
    if self.primitive {
      quote! {
        #docs
        pub fn #getter(&self) -> #ty {
          self.#ident
        }
      }
    } else {
      quote! {
        #docs
        pub fn #getter(&self) -> &#ty {
          &self.#ident
        }
      }
    }
  }

  fn partial_accessor(&self, cx: &FieldContext<'_>) -> TokenStream {
    if !self.required {
      return self.value_accessor(cx);
    }
    let ident = cx.ident();
    let getter = cx.getter();
    let ty = cx.ty();
    let docs = cx.docs();
    let ordinal = Self::ordinal(cx);
    let name = cx.name_lit();
    let error = cx.build_error();
    let (ret, lookup) = if self.primitive {
      (quote! { #ty }, quote! { self.#ident })
    } else {
      (quote! { &#ty }, quote! { self.#ident.as_ref() })
    };
    quote! {
      #docs
      pub fn #getter(&self) -> Result<#ret, #error> {
        self.unset.check_partial(#ordinal, #name)?;
        #lookup.ok_or_else(|| #error::partial_unset(#name))
      }
    }
  }

  fn eq_term(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    if self.float {
      quote! { self.#ident.to_bits() == other.#ident.to_bits() }
    } else {
      quote! { self.#ident == other.#ident }
    }
  }

  fn partial_eq_term(&self, cx: &FieldContext<'_>) -> TokenStream {
    if !(self.required && self.float) {
      return self.eq_term(cx);
    }
    let ident = cx.ident();
    let ty = cx.ty();
    quote! { self.#ident.map(#ty::to_bits) == other.#ident.map(#ty::to_bits) }
  }

  fn partial_display_term(&self, cx: &FieldContext<'_>) -> TokenStream {
    if self.required {
      cx.display_entry_if_present()
    } else {
      cx.display_entry()
    }
  }
}
