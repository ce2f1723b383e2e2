use syn::parse_quote;

use super::{assert_emits, assert_omits, render, render_nested, validated};
use crate::generator::{
  model::{Datatype, Field, NameAndVisibility},
  property::{FieldCategory, Initially, MergeAction, MethodKind},
};

fn catalog() -> Datatype {
  Datatype::named("Catalog").with_fields(vec![
    Field::named("items", parse_quote!(Vec<String>)),
    Field::named("ids", parse_quote!(Vec<i32>)),
    Field::named("labels", parse_quote!(HashSet<String>)),
    Field::named("ordered", parse_quote!(IndexSet<String>)),
    Field::named("prices", parse_quote!(BTreeMap<String, i32>)),
    Field::named("aliases", parse_quote!(IndexMap<String, String>)),
    Field::named("tags", parse_quote!(SetMultimap<String, String>)),
  ])
}

#[test]
fn test_list_accessors() {
  let rendered = render(&catalog(), "items");
  assert_eq!(rendered.category, FieldCategory::List);
  assert_eq!(rendered.initially, Initially::HasDefault);
  assert_eq!(rendered.merge_actions, vec![MergeAction::AppendToCollection]);
  assert_eq!(
    rendered.kinds,
    vec![
      MethodKind::Add,
      MethodKind::AddAll,
      MethodKind::Remove,
      MethodKind::Mutate,
      MethodKind::Clear,
      MethodKind::Get
    ]
  );
  assert_eq!(rendered.builder_init, "items : Vec :: new ()");

  let code = &rendered.accessors;
  assert_emits(code, "pub fn add_items(&mut self, element: impl Into<String>) -> &mut Self");
  assert_emits(code, "let element: String = element.into(); self.items.push(element);");
  assert_emits(code, "pub fn add_all_items<I>(&mut self, elements: I) -> &mut Self where I: IntoIterator, I::Item: Into<String>,");
  assert_emits(code, "for element in elements { self.add_items(element); }");
  assert_emits(code, "pub fn remove_items(&mut self, element: &String) -> &mut Self");
  assert_emits(code, "F: FnOnce(&mut Vec<String>),");
  assert_emits(code, "mutator(&mut self.items);");
  assert_emits(code, "pub fn items(&self) -> &[String] { &self.items }");

  assert_emits(&rendered.merge_from_value, "self.add_all_items(value.items.iter().cloned());");
  assert_emits(&rendered.merge_from_builder, "self.add_all_items(other.items.iter().cloned());");
  assert_emits(&rendered.clear, "self.items.clear();");
}

#[test]
fn test_primitive_list_takes_elements_by_value() {
  let rendered = render(&catalog(), "ids");
  assert_emits(&rendered.accessors, "pub fn add_ids(&mut self, element: i32) -> &mut Self");
  assert_emits(&rendered.accessors, "self.add_ids(element.into());");
  assert_omits(&rendered.accessors, "let element: i32");
}

#[test]
fn test_validated_list() {
  let datatype = validated(
    Datatype::named("Account").with_fields(vec![Field::named("roles", parse_quote!(Vec<String>))]),
    &[("add_roles", "validate_role")],
  );
  let rendered = render(&datatype, "roles");
  assert!(rendered.validated);

  let code = &rendered.accessors;
  assert_emits(code, "pub fn add_roles(&mut self, element: impl Into<String>) -> Result<&mut Self, ValidationError>");
  assert_emits(code, "validate_role(&element)?; self.roles.push(element); Ok(self)");
  assert_emits(code, "self.add_roles(element)?;");
  assert_emits(code, "let mut elements = self.roles.clone(); mutator(&mut elements);");
  assert_emits(code, "for element in &elements { validate_role(element)?; }");
  assert_emits(code, "pub fn remove_roles(&mut self, element: &String) -> &mut Self");
  assert_emits(&rendered.merge_from_value, "self.add_all_roles(value.roles.iter().cloned())?;");
}

#[test]
fn test_buildable_list_adds_from_builders() {
  let address = Datatype::named("Address");
  let datatype = Datatype::named("Person").with_fields(vec![Field::named("addresses", parse_quote!(Vec<Address>))]);
  let rendered = render_nested(&datatype, &[address], "addresses");
  assert_eq!(rendered.category, FieldCategory::BuildableList);
  assert_eq!(rendered.kinds.last(), Some(&MethodKind::AddBuilder));
  assert_emits(
    &rendered.accessors,
    "pub fn add_addresses_builder(&mut self, builder: &AddressBuilder) -> Result<&mut Self, support::BuildError>",
  );
  assert_emits(&rendered.accessors, "let element = builder.build()?; Ok(self.add_addresses(element))");
}

#[test]
fn test_buildable_list_uses_renamed_build_method() {
  let mut address = Datatype::named("Address");
  address.methods.build = NameAndVisibility::public("finish");
  let datatype = Datatype::named("Person").with_fields(vec![Field::named("addresses", parse_quote!(Vec<Address>))]);
  let rendered = render_nested(&datatype, &[address], "addresses");
  assert_emits(&rendered.accessors, "let element = builder.finish()?;");
}

#[test]
fn test_list_of_unknown_type_is_plain_list() {
  let datatype = Datatype::named("Person").with_fields(vec![Field::named("addresses", parse_quote!(Vec<Address>))]);
  let rendered = render(&datatype, "addresses");
  assert_eq!(rendered.category, FieldCategory::List);
  assert!(!rendered.kinds.contains(&MethodKind::AddBuilder));
}

#[test]
fn test_set_accessors() {
  let rendered = render(&catalog(), "labels");
  assert_eq!(rendered.category, FieldCategory::Set);
  assert_eq!(rendered.builder_init, "labels : Default :: default ()");
  assert_emits(&rendered.accessors, "self.labels.insert(element);");
  assert_emits(&rendered.accessors, "self.labels.remove(element);");
  assert_emits(&rendered.accessors, "F: FnOnce(&mut HashSet<String>),");
  assert_emits(&rendered.accessors, "pub fn labels(&self) -> &HashSet<String>");
}

#[test]
fn test_index_set_removal_keeps_order() {
  let rendered = render(&catalog(), "ordered");
  assert_emits(&rendered.accessors, "self.ordered.shift_remove(element);");
}

#[test]
fn test_map_accessors() {
  let rendered = render(&catalog(), "prices");
  assert_eq!(rendered.category, FieldCategory::Map);
  assert_eq!(
    rendered.kinds,
    vec![
      MethodKind::Put,
      MethodKind::PutAll,
      MethodKind::Remove,
      MethodKind::Mutate,
      MethodKind::Clear,
      MethodKind::Get
    ]
  );

  let code = &rendered.accessors;
  assert_emits(code, "pub fn put_prices(&mut self, key: impl Into<String>, value: i32) -> &mut Self");
  assert_emits(code, "let key: String = key.into(); self.prices.insert(key, value);");
  assert_emits(code, "pub fn put_all_prices<I, EK, EV>(&mut self, entries: I) -> &mut Self");
  assert_emits(code, "I: IntoIterator<Item = (EK, EV)>, EK: Into<String>, EV: Into<i32>,");
  assert_emits(code, "self.put_prices(key, value.into());");
  assert_emits(code, "pub fn remove_prices(&mut self, key: &String) -> &mut Self { self.prices.remove(key); self }");

  assert_emits(
    &rendered.merge_from_value,
    "self.put_all_prices(value.prices.iter().map(|(key, current)| (key.clone(), current.clone())));",
  );
}

#[test]
fn test_index_map_removal_keeps_order() {
  let rendered = render(&catalog(), "aliases");
  assert_emits(&rendered.accessors, "self.aliases.shift_remove(key);");
}

#[test]
fn test_validated_map_checks_key_and_value() {
  let datatype = validated(
    Datatype::named("Env").with_fields(vec![Field::named("vars", parse_quote!(BTreeMap<String, String>))]),
    &[("put_vars", "validate_var")],
  );
  let rendered = render(&datatype, "vars");
  assert_emits(&rendered.accessors, "validate_var(&key, &value)?;");
  assert_emits(&rendered.accessors, "for (key, value) in &entries { validate_var(key, value)?; }");
}

#[test]
fn test_multimap_accessors() {
  let rendered = render(&catalog(), "tags");
  assert_eq!(rendered.category, FieldCategory::Multimap);
  assert_eq!(
    rendered.kinds,
    vec![
      MethodKind::Put,
      MethodKind::PutAll,
      MethodKind::PutAllFrom,
      MethodKind::Remove,
      MethodKind::RemoveAll,
      MethodKind::Mutate,
      MethodKind::Clear,
      MethodKind::Get
    ]
  );

  let code = &rendered.accessors;
  assert_emits(code, "self.tags.put(key, value);");
  assert_emits(code, "pub fn put_all_tags<I>(&mut self, key: impl Into<String>, values: I) -> &mut Self");
  assert_emits(
    code,
    "pub fn put_all_tags_from(&mut self, multimap: &SetMultimap<String, String>) -> &mut Self",
  );
  assert_emits(code, "pub fn remove_tags(&mut self, key: &String, value: &String) -> &mut Self");
  assert_emits(code, "pub fn remove_all_tags(&mut self, key: &String) -> &mut Self { self.tags.remove_all(key); self }");

  assert_emits(&rendered.merge_from_value, "self.put_all_tags_from(&value.tags);");
  assert_emits(&rendered.merge_from_builder, "self.put_all_tags_from(&other.tags);");
}

#[test]
fn test_collection_set_from_result_replaces_contents() {
  let catalog = catalog();
  assert_emits(
    &render(&catalog, "items").set_from_result,
    "builder.clear_items(); builder.add_all_items(result);",
  );
  assert_emits(
    &render(&catalog, "labels").set_from_result,
    "builder.clear_labels(); builder.add_all_labels(result);",
  );
  assert_emits(
    &render(&catalog, "prices").set_from_result,
    "builder.clear_prices(); builder.put_all_prices(result);",
  );
  assert_emits(
    &render(&catalog, "tags").set_from_result,
    "builder.clear_tags(); builder.put_all_tags_from(&result);",
  );
}

#[test]
fn test_validated_collection_set_from_result_propagates() {
  let datatype = validated(
    Datatype::named("Account").with_fields(vec![
      Field::named("roles", parse_quote!(Vec<String>)),
      Field::named("limits", parse_quote!(BTreeMap<String, i32>)),
    ]),
    &[("add_roles", "validate_role"), ("put_limits", "validate_limit")],
  );
  assert_emits(
    &render(&datatype, "roles").set_from_result,
    "builder.clear_roles(); builder.add_all_roles(result)?;",
  );
  assert_emits(
    &render(&datatype, "limits").set_from_result,
    "builder.clear_limits(); builder.put_all_limits(result)?;",
  );
}

#[test]
fn test_buildable_list_set_from_result() {
  let address = Datatype::named("Address");
  let datatype = Datatype::named("Person").with_fields(vec![Field::named("addresses", parse_quote!(Vec<Address>))]);
  let rendered = render_nested(&datatype, &[address], "addresses");
  assert_emits(
    &rendered.set_from_result,
    "builder.clear_addresses(); builder.add_all_addresses(result);",
  );
}

#[test]
fn test_collection_equality_and_display() {
  let rendered = render(&catalog(), "tags");
  assert_emits(&rendered.eq, "self.tags == other.tags");
  assert_eq!(rendered.partial_eq, rendered.eq);
  assert_emits(&rendered.display, "parts.push(format!(\"tags={:?}\", self.tags));");
  assert_eq!(rendered.partial_display, rendered.display);
}
