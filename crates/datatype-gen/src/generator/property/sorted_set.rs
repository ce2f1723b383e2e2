use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Type;

use super::{
  Accessor, FieldCategory, FieldCodeGenerator, FieldContext, MergeAction, MethodKind, Returns, Validator, forward,
  param_type, propagate,
};
use crate::generator::{
  model::{Field, Primitive, types},
  resolver::ResolveContext,
};

/// `SortedSet<T>`, accumulated in a `SortedSetBuffer` whose comparator is fixed on first use.
#[derive(Debug)]
pub(crate) struct SortedSetProperty {
  element: Type,
  primitive: bool,
  validator: Option<Validator>,
}

impl SortedSetProperty {
  pub(crate) fn recognize(cx: &ResolveContext<'_>, field: &Field) -> Option<Box<dyn FieldCodeGenerator>> {
    let (_, arguments) = types::match_constructor(&field.ty, &["SortedSet"], 1)?;
    let element = arguments[0].clone();
    Some(Box::new(Self {
      primitive: Primitive::of(&element).is_some(),
      element,
      validator: cx.hook(MethodKind::Add, field),
    }))
  }

  fn buffer_method(cx: &FieldContext<'_>) -> proc_macro2::Ident {
    format_ident!("{}_buffer", cx.field.name)
  }
}

impl FieldCodeGenerator for SortedSetProperty {
  fn category(&self) -> FieldCategory {
    FieldCategory::SortedSet
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

  fn builder_field(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let element = &self.element;
    let support = cx.support;
    quote! { #ident: Option<#support::SortedSetBuffer<#element>> }
  }

  fn builder_init(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    quote! { #ident: None }
  }

  fn accessors(&self, cx: &FieldContext<'_>) -> Vec<Accessor> {
    let ident = cx.ident();
    let element = &self.element;
    let support = cx.support;
    let name = cx.name_lit();
    let error = cx.build_error();
    let getter = cx.getter();
    let docs = cx.docs();
    let buffer = Self::buffer_method(cx);
    let set_comparator = cx.method(MethodKind::SetComparator);
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
          let mut buffer = self.#buffer().clone();
          mutator(&mut buffer);
          for element in &buffer {
            #check
          }
          self.#ident = Some(buffer);
        }
      }
      None => quote! { mutator(self.#buffer()); },
    };

    vec![
      Accessor::new(
        MethodKind::SetComparator,
        quote! {
          pub fn #set_comparator(&mut self, comparator: #support::Comparator<#element>) -> Result<&mut Self, #error> {
            if self.#ident.is_some() {
              return Err(#error::comparator_already_set(#name));
            }
            self.#ident = Some(#support::SortedSetBuffer::with_comparator(comparator));
            Ok(self)
          }
        },
      ),
      Accessor::new(
        MethodKind::Add,
        quote! {
          pub fn #add(&mut self, element: #param) -> #ret {
            #bind
            #check
            self.#buffer().insert(element);
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
            self.#buffer().remove(element);
            self
          }
        },
      ),
      Accessor::new(
        MethodKind::Mutate,
        quote! {
          pub fn #mutate<F>(&mut self, mutator: F) -> #ret
          where
            F: FnOnce(&mut #support::SortedSetBuffer<#element>),
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
            if let Some(buffer) = &mut self.#ident {
              buffer.clear();
            }
            self
          }
        },
      ),
      Accessor::new(
        MethodKind::Get,
        quote! {
          #docs
          pub fn #getter(&mut self) -> &[#element] {
            self.#buffer().as_slice()
          }

          fn #buffer(&mut self) -> &mut #support::SortedSetBuffer<#element> {
            self.#ident.get_or_insert_with(#support::SortedSetBuffer::natural)
          }
        },
      ),
    ]
  }

  fn final_assignment(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let support = cx.support;
    quote! {
      self.#ident.as_ref().map_or_else(#support::SortedSet::new, #support::SortedSetBuffer::freeze)
    }
  }

  fn partial_assignment(&self, cx: &FieldContext<'_>) -> TokenStream {
    self.final_assignment(cx)
  }

  fn assign_to_builder(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let support = cx.support;
    quote! { builder.#ident = Some(#support::SortedSetBuffer::shared(&self.#ident)); }
  }

  fn merge_from_value(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let support = cx.support;
    let add_all = cx.method(MethodKind::AddAll);
    let q = propagate(self.validator.as_ref());
    let append = quote! { self.#add_all(value.#ident.iter().cloned())#q; };
    if self.validator.is_some() {
      return append;
    }
    quote! {
      if !#support::SortedSetBuffer::try_share(&mut self.#ident, &value.#ident) {
        #append
      }
    }
  }

  fn merge_from_builder(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let add_all = cx.method(MethodKind::AddAll);
    let q = propagate(self.validator.as_ref());
    quote! {
      if let Some(buffer) = &other.#ident {
        self.#add_all(buffer.iter().cloned())#q;
      }
    }
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
    quote! {
      if let Some(buffer) = &mut self.#ident {
        buffer.clear();
      }
    }
  }
}
