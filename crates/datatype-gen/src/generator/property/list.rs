use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Type;

use super::{
  Accessor, FieldCategory, FieldCodeGenerator, FieldContext, MergeAction, MethodKind, NestedDatatype, Returns,
  Validator, forward, param_type, propagate,
};
use crate::generator::{
  model::{Field, Primitive, types},
  resolver::ResolveContext,
};

/// `Vec<T>`, optionally with elements that are themselves schema datatypes.
#[derive(Debug)]
pub(crate) struct ListProperty {
  element: Type,
  primitive: bool,
  nested: Option<NestedDatatype>,
  validator: Option<Validator>,
}

impl ListProperty {
  pub(crate) fn recognize(cx: &ResolveContext<'_>, field: &Field) -> Option<Box<dyn FieldCodeGenerator>> {
    Self::element(field).map(|element| Self::boxed(cx, field, element, None))
  }

  pub(crate) fn recognize_buildable(cx: &ResolveContext<'_>, field: &Field) -> Option<Box<dyn FieldCodeGenerator>> {
    let element = Self::element(field)?;
    let nested = cx.nested(&element)?.clone();
    Some(Self::boxed(cx, field, element, Some(nested)))
  }

  fn element(field: &Field) -> Option<Type> {
    types::match_constructor(&field.ty, &["Vec"], 1).map(|(_, arguments)| arguments[0].clone())
  }

  fn boxed(
    cx: &ResolveContext<'_>,
    field: &Field,
    element: Type,
    nested: Option<NestedDatatype>,
  ) -> Box<dyn FieldCodeGenerator> {
    Box::new(Self {
      primitive: Primitive::of(&element).is_some(),
      element,
      nested,
      validator: cx.hook(MethodKind::Add, field),
    })
  }

  fn add_builder(&self, cx: &FieldContext<'_>, nested: &NestedDatatype) -> Accessor {
    let add = cx.method(MethodKind::Add);
    let add_builder = cx.method(MethodKind::AddBuilder);
    let builder_ty = &nested.builder;
    let build = &nested.build;
    let returns = Returns::fallible(cx, self.validator.as_ref());
    let ret = returns.ty();
    let call = quote! { self.#add(element) };
    let tail = if self.validator.is_some() { call } else { returns.wrap(&call) };

    Accessor::new(
      MethodKind::AddBuilder,
      quote! {
        pub fn #add_builder(&mut self, builder: &#builder_ty) -> #ret {
          let element = builder.#build()?;
          #tail
        }
      },
    )
  }
}

impl FieldCodeGenerator for ListProperty {
  fn category(&self) -> FieldCategory {
    if self.nested.is_some() {
      FieldCategory::BuildableList
    } else {
      FieldCategory::List
    }
  }

  fn merge_actions(&self) -> Vec<MergeAction> {
    vec![MergeAction::AppendToCollection]
  }

  fn primary_mutation(&self) -> MethodKind {
    MethodKind::Add
  }

  fn validator(&self) -> Option<&Validator> {
    self.validator.as_ref()
  }

  fn builder_init(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    quote! { #ident: Vec::new() }
  }

  fn accessors(&self, cx: &FieldContext<'_>) -> Vec<Accessor> {
    let ident = cx.ident();
    let element = &self.element;
    let getter = cx.getter();
    let docs = cx.docs();
    let add = cx.method(MethodKind::Add);
    let add_all = cx.method(MethodKind::AddAll);
    let remove = cx.method(MethodKind::Remove);
    let mutate = cx.method(MethodKind::Mutate);
    let clear = cx.method(MethodKind::Clear);

    let param = param_type(element, self.primitive);
    let bind = if self.primitive {
      quote! {}
    } else {
      quote! { let element: #element = element.into(); }
    };
    let check = self.validator.as_ref().map(|validator| validator.check(&quote! { &element }));
    let returns = Returns::validated(self.validator.as_ref());
    let ret = returns.ty();
    let finish = returns.finish();
    let q = propagate(self.validator.as_ref());
    let item = forward(&format_ident!("element"), self.primitive);
    let mutate_body = match &self.validator {
      Some(validator) => {
        let check = validator.check(&quote! { element });
        quote! {
          let mut elements = self.#ident.clone();
          mutator(&mut elements);
          for element in &elements {
            #check
          }
          self.#ident = elements;
        }
      }
      None => quote! { mutator(&mut self.#ident); },
    };

    let mut accessors = vec![
      Accessor::new(
        MethodKind::Add,
        quote! {
          pub fn #add(&mut self, element: #param) -> #ret {
            #bind
            #check
            self.#ident.push(element);
            #finish
          }
        },
      ),
      Accessor::new(
        MethodKind::AddAll,
        quote! {
          pub fn #add_all<I>(&mut self, elements: I) -> #ret
          where
            I: IntoIterator,
            I::Item: Into<#element>,
          {
            for element in elements {
              self.#add(#item)#q;
            }
            #finish
          }
        },
      ),
      Accessor::new(
        MethodKind::Remove,
        quote! {
          pub fn #remove(&mut self, element: &#element) -> &mut Self {
            if let Some(index) = self.#ident.iter().position(|current| current == element) {
              self.#ident.remove(index);
            }
            self
          }
        },
      ),
      Accessor::new(
        MethodKind::Mutate,
        quote! {
          pub fn #mutate<F>(&mut self, mutator: F) -> #ret
          where
            F: FnOnce(&mut Vec<#element>),
          {
            #mutate_body
            #finish
          }
        },
      ),
      Accessor::new(
        MethodKind::Clear,
        quote! {
          pub fn #clear(&mut self) -> &mut Self {
            self.#ident.clear();
            self
          }
        },
      ),
      Accessor::new(
        MethodKind::Get,
        quote! {
          #docs
          pub fn #getter(&self) -> &[#element] {
            &self.#ident
          }
        },
      ),
    ];

    if let Some(nested) = &self.nested {
      accessors.push(self.add_builder(cx, nested));
    }

    accessors
  }

  fn final_assignment(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    quote! { self.#ident.clone() }
  }

  fn merge_from_value(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let add_all = cx.method(MethodKind::AddAll);
    let q = propagate(self.validator.as_ref());
    quote! { self.#add_all(value.#ident.iter().cloned())#q; }
  }

  fn merge_from_builder(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let add_all = cx.method(MethodKind::AddAll);
    let q = propagate(self.validator.as_ref());
    quote! { self.#add_all(other.#ident.iter().cloned())#q; }
  }

  fn set_from_result(&self, cx: &FieldContext<'_>, builder: &TokenStream, result: &TokenStream) -> TokenStream {
    let clear = cx.method(MethodKind::Clear);
    let add_all = cx.method(MethodKind::AddAll);
    let q = propagate(self.validator.as_ref());
    quote! {
      #builder.#clear();
      #builder.#add_all(#result)#q;
    }
  }

  fn clear_field(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    quote! { self.#ident.clear(); }
  }

  fn value_accessor(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let getter = cx.getter();
    let element = &self.element;
    let docs = cx.docs();
    quote! {
      #docs
      pub fn #getter(&self) -> &[#element] {
        &self.#ident
      }
    }
  }
}
