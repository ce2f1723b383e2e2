use proc_macro2::{Ident, TokenStream};
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

/// `HashMap<K, V>`, `BTreeMap<K, V>` and `IndexMap<K, V>`. Putting an existing key replaces its value.
#[derive(Debug)]
pub(crate) struct MapProperty {
  key: Type,
  value: Type,
  key_primitive: bool,
  value_primitive: bool,
  ordered: bool,
  validator: Option<Validator>,
}

impl MapProperty {
  pub(crate) fn recognize(cx: &ResolveContext<'_>, field: &Field) -> Option<Box<dyn FieldCodeGenerator>> {
    let (name, arguments) = types::match_constructor(&field.ty, &["HashMap", "BTreeMap", "IndexMap"], 2)?;
    let key = arguments[0].clone();
    let value = arguments[1].clone();
    Some(Box::new(Self {
      key_primitive: Primitive::of(&key).is_some(),
      value_primitive: Primitive::of(&value).is_some(),
      key,
      value,
      ordered: name == "IndexMap",
      validator: cx.hook(MethodKind::Put, field),
    }))
  }

  fn remove_method(&self) -> Ident {
    if self.ordered {
      format_ident!("shift_remove")
    } else {
      format_ident!("remove")
    }
  }

  fn cloned_entries(source: &TokenStream) -> TokenStream {
    quote! { #source.iter().map(|(key, current)| (key.clone(), current.clone())) }
  }
}

impl FieldCodeGenerator for MapProperty {
  fn category(&self) -> FieldCategory {
    FieldCategory::Map
  }

  fn merge_actions(&self) -> Vec<MergeAction> {
    vec![MergeAction::AppendToCollection]
  }

  fn primary_mutation(&self) -> MethodKind {
    MethodKind::Put
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
    let key_ty = &self.key;
    let value_ty = &self.value;
    let getter = cx.getter();
    let docs = cx.docs();
    let put = cx.method(MethodKind::Put);
    let put_all = cx.method(MethodKind::PutAll);
    let remove = cx.method(MethodKind::Remove);
    let mutate = cx.method(MethodKind::Mutate);
    let clear = cx.method(MethodKind::Clear);
    let remove_method = self.remove_method();

    let key_param = param_type(key_ty, self.key_primitive);
    let value_param = param_type(value_ty, self.value_primitive);
    let bind_key = (!self.key_primitive).then(|| quote! { let key: #key_ty = key.into(); });
    let bind_value = (!self.value_primitive).then(|| quote! { let value: #value_ty = value.into(); });
    let check = self.validator.as_ref().map(|validator| validator.check(&quote! { &key, &value }));
    let returns = Returns::validated(self.validator.as_ref());
    let ret = returns.ty();
    let finish = returns.finish();
    let q = propagate(self.validator.as_ref());
    let key_item = forward(&format_ident!("key"), self.key_primitive);
    let value_item = forward(&format_ident!("value"), self.value_primitive);
    let mutate_body = match &self.validator {
      Some(validator) => {
        let check = validator.check(&quote! { key, value });
        quote! {
          let mut entries = self.#ident.clone();
          mutator(&mut entries);
          for (key, value) in &entries {
            #check
          }
          self.#ident = entries;
        }
      }
      None => quote! { mutator(&mut self.#ident); },
    };

    vec![
      Accessor::new(
        MethodKind::Put,
        quote! {
          pub fn #put(&mut self, key: #key_param, value: #value_param) -> #ret {
            #bind_key
            #bind_value
            #check
            self.#ident.insert(key, value);
            #finish
          }
        },
      ),
      Accessor::new(
        MethodKind::PutAll,
        quote! {
          pub fn #put_all<I, EK, EV>(&mut self, entries: I) -> #ret
          where
            I: IntoIterator<Item = (EK, EV)>,
            EK: Into<#key_ty>,
            EV: Into<#value_ty>,
          {
            for (key, value) in entries {
              self.#put(#key_item, #value_item)#q;
            }
            #finish
          }
        },
      ),
      Accessor::new(
        MethodKind::Remove,
        quote! {
          pub fn #remove(&mut self, key: &#key_ty) -> &mut Self {
            self.#ident.#remove_method(key);
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
    let put_all = cx.method(MethodKind::PutAll);
    let q = propagate(self.validator.as_ref());
    let entries = Self::cloned_entries(&quote! { value.#ident });
    quote! { self.#put_all(#entries)#q; }
  }

  fn merge_from_builder(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    let put_all = cx.method(MethodKind::PutAll);
    let q = propagate(self.validator.as_ref());
    let entries = Self::cloned_entries(&quote! { other.#ident });
    quote! { self.#put_all(#entries)#q; }
  }

  fn set_from_result(&self, cx: &FieldContext<'_>, builder: &TokenStream, result: &TokenStream) -> TokenStream {
    let clear = cx.method(MethodKind::Clear);
    let put_all = cx.method(MethodKind::PutAll);
    let q = propagate(self.validator.as_ref());
    quote! {
      #builder.#clear();
      #builder.#put_all(#result)#q;
    }
  }

  fn clear_field(&self, cx: &FieldContext<'_>) -> TokenStream {
    let ident = cx.ident();
    quote! { self.#ident.clear(); }
  }
}
