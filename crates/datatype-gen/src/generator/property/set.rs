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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetKind {
  Hash,
  BTree,
  Index,
}

impl SetKind {
  fn from_name(name: &str) -> Option<Self> {
    match name {
      "HashSet" => Some(Self::Hash),
      "BTreeSet" => Some(Self::BTree),
      "IndexSet" => Some(Self::Index),
      _ => None,
    }
  }

  /// `IndexSet::remove` is deprecated in favour of an explicit ordering choice.
  fn remove_method(self) -> proc_macro2::Ident {
    match self {
      Self::Index => format_ident!("shift_remove"),
      Self::Hash | Self::BTree => format_ident!("remove"),
    }
  }
}

/// `HashSet<T>`, `BTreeSet<T>` and `IndexSet<T>`. Adding an element already present is a no-op.
#[derive(Debug)]
pub(crate) struct SetProperty {
  kind: SetKind,
  element: Type,
  primitive: bool,
  validator: Option<Validator>,
}

impl SetProperty {
  pub(crate) fn recognize(cx: &ResolveContext<'_>, field: &Field) -> Option<Box<dyn FieldCodeGenerator>> {
    let (name, arguments) = types::match_constructor(&field.ty, &["HashSet", "BTreeSet", "IndexSet"], 1)?;
    let kind = SetKind::from_name(&name)?;
    let element = arguments[0].clone();
    Some(Box::new(Self {
      kind,
      primitive: Primitive::of(&element).is_some(),
      element,
      validator: cx.hook(MethodKind::Add, field),
    }))
  }
}

impl FieldCodeGenerator for SetProperty {
  fn category(&self) -> FieldCategory {
    FieldCategory::Set
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
    quote! { #ident: Default::default() }
  }

  fn accessors(&self, cx: &FieldContext<'_>) -> Vec<Accessor> {
    let ident = cx.ident();
    let ty = cx.ty();
    let element = &self.element;
    let getter = cx.getter();
    let docs = cx.docs();
    let add = cx.method(MethodKind::Add);
    let add_all = cx.method(MethodKind::AddAll);
    let remove = cx.method(MethodKind::Remove);
    let mutate = cx.method(MethodKind::Mutate);
    let clear = cx.method(MethodKind::Clear);
    let remove_method = self.kind.remove_method();

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

    vec![
      Accessor::new(
        MethodKind::Add,
        quote! {
          pub fn #add(&mut self, element: #param) -> #ret {
            #bind
            #check
            self.#ident.insert(element);
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
            self.#ident.#remove_method(element);
            self
          }
        },
      ),
      Accessor::new(
        MethodKind::Mutate,
        quote! {
          pub fn #mutate<F>(&mut self, mutator: F) -> #ret
          where
            F: FnOnce(&mut #ty),
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
          pub fn #getter(&self) -> &#ty {
            &self.#ident
          }
        },
      ),
    ]
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
}
