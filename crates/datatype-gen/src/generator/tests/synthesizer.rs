use serde_json::json;

use super::{assert_emits, assert_omits, generate};

fn person() -> serde_json::Value {
  json!({
    "uses": ["datatype_gen_support::{SetMultimap, SortedSet}"],
    "datatypes": [
      {
        "name": "Address",
        "fields": [{ "name": "street", "type": "String", "default": "String::new()" }]
      },
      {
        "name": "Person",
        "docs": ["A person."],
        "fields": [
          { "name": "name", "type": "String" },
          { "name": "age", "type": "i32", "default": "0" },
          { "name": "weight", "type": "f64", "default": "0.0" },
          { "name": "nick_name", "type": "Option<String>", "json_name": "nickName" },
          { "name": "tags", "type": "Vec<String>", "json_name": "tagList" },
          { "name": "labels", "type": "SetMultimap<String, String>" },
          { "name": "scores", "type": "SortedSet<i32>" },
          { "name": "address", "type": "Address" }
        ]
      }
    ]
  })
}

#[test]
fn test_generated_module_parses() {
  let code = generate(person());
  let file = syn::parse_file(&code).unwrap();

  let structs: Vec<String> = file
    .items
    .iter()
    .filter_map(|item| match item {
      syn::Item::Struct(item) => Some(item.ident.to_string()),
      _ => None,
    })
    .collect();
  assert_eq!(
    structs,
    [
      "Address",
      "AddressBuilder",
      "PartialAddress",
      "Person",
      "PersonBuilder",
      "PartialPerson"
    ]
  );
  assert_emits(&code, "use datatype_gen_support::{SetMultimap, SortedSet};");
  assert_emits(&code, "/// A person.");
}

#[test]
fn test_value_type() {
  let code = generate(person());
  assert_emits(&code, "#[derive(Debug, Clone)] pub struct Person { name: String, age: i32,");
  assert_emits(&code, "scores: SortedSet<i32>, address: Address, }");
  assert_emits(&code, "pub fn builder() -> PersonBuilder { PersonBuilder::new() }");
  assert_emits(&code, "pub fn name(&self) -> &String { &self.name }");
  assert_emits(&code, "pub fn nick_name(&self) -> Option<&String> { self.nick_name.as_ref() }");
  assert_emits(&code, "pub fn tags(&self) -> &[String] { &self.tags }");
  assert_emits(&code, "pub fn to_builder(&self) -> PersonBuilder { let mut builder = PersonBuilder::new();");
  assert_emits(&code, "builder.name = Some(self.name.clone()); builder.unset.remove(0);");
  assert_emits(
    &code,
    "builder.scores = Some(datatype_gen_support::SortedSetBuffer::shared(&self.scores));",
  );
  assert_emits(&code, "builder.address = self.address.to_builder();");
}

#[test]
fn test_builder_type() {
  let code = generate(person());
  assert_emits(&code, "scores: Option<datatype_gen_support::SortedSetBuffer<i32>>, address: AddressBuilder,");
  assert_emits(&code, "unset: datatype_gen_support::UnsetFields<1>, }");
  assert_emits(&code, "const REQUIRED_FIELDS: [&'static str; 1] = [\"name\"];");
  assert_emits(&code, "unset: datatype_gen_support::UnsetFields::all(),");
  assert_emits(&code, "impl Default for PersonBuilder { fn default() -> Self { Self::new() } }");
}

#[test]
fn test_builder_level_methods() {
  let code = generate(person());
  assert_emits(
    &code,
    "pub fn build(&self) -> Result<Person, datatype_gen_support::BuildError> { self.unset.check_complete(\"Person\", &Self::REQUIRED_FIELDS)?;",
  );
  assert_emits(&code, "address: self.address.build()?");
  assert_emits(&code, "pub fn build_partial(&self) -> PartialPerson { PartialPerson {");
  assert_emits(&code, "address: self.address.build_partial(), unset: self.unset, }");
  assert_emits(&code, "pub fn clear(&mut self) -> &mut Self { let template = Self::new();");
  assert_emits(&code, "self.unset = template.unset; self }");
  assert_emits(&code, "pub fn merge_from(&mut self, value: &Person) -> &mut Self { let template = Self::new();");
  assert_emits(&code, "pub fn merge_from_builder(&mut self, other: &Self) -> &mut Self {");
}

#[test]
fn test_adapter_decorations_on_primary_mutation() {
  let code = generate(person());
  assert_emits(&code, "#[doc(alias = \"nickName\")] pub fn set_nick_name(");
  assert_emits(&code, "#[doc(alias = \"tagList\")] pub fn add_tags(");
  assert_omits(&code, "#[doc(alias = \"nickName\")] pub fn set_nullable_nick_name(");
}

#[test]
fn test_partial_type() {
  let code = generate(person());
  assert_emits(&code, "pub struct PartialPerson { name: Option<String>,");
  assert_emits(&code, "address: PartialAddress, unset: datatype_gen_support::UnsetFields<1>, }");
  assert_emits(
    &code,
    "pub fn name(&self) -> Result<&String, datatype_gen_support::BuildError> { self.unset.check_partial(0, \"name\")?;",
  );
}

#[test]
fn test_standard_impls() {
  let code = generate(person());
  assert_emits(
    &code,
    "impl PartialEq for Person { fn eq(&self, other: &Self) -> bool { self.name == other.name && self.age == other.age && self.weight.to_bits() == other.weight.to_bits()",
  );
  assert_emits(&code, "&& self.unset == other.unset");
  assert_emits(&code, "impl std::fmt::Display for Person");
  assert_emits(&code, "write!(f, \"Person{{{}}}\", parts.join(\", \"))");
  assert_emits(&code, "write!(f, \"partial Person{{{}}}\", parts.join(\", \"))");
  assert_emits(
    &code,
    "if let Some(current) = &self.nick_name { parts.push(format!(\"nick_name={:?}\", current)); }",
  );
}

#[test]
fn test_underrides_skip_standard_impls() {
  let code = generate(json!({
    "datatypes": [{
      "name": "Point",
      "underrides": ["display", "partial_eq"],
      "fields": [{ "name": "x", "type": "i32" }]
    }]
  }));
  assert_omits(&code, "impl PartialEq for Point");
  assert_omits(&code, "impl std::fmt::Display for Point");
  assert_omits(&code, "impl PartialEq for PartialPoint");
}

#[test]
fn test_empty_datatype() {
  let code = generate(json!({ "datatypes": [{ "name": "Marker" }] }));
  syn::parse_file(&code).unwrap();
  assert_emits(&code, "pub struct Marker {}");
  assert_emits(&code, "const REQUIRED_FIELDS: [&'static str; 0] = [];");
  assert_emits(&code, "unset: datatype_gen_support::UnsetFields<0>,");
  assert_emits(&code, "pub fn to_builder(&self) -> MarkerBuilder { MarkerBuilder::new() }");
  assert_emits(&code, "fn eq(&self, _other: &Self) -> bool { true }");
  assert_emits(&code, "f.write_str(\"Marker{}\")");
}

#[test]
fn test_method_policy_and_visibility() {
  let code = generate(json!({
    "datatypes": [{
      "name": "Point",
      "visibility": "crate",
      "to_builder": false,
      "methods": {
        "build": { "name": "finish", "visibility": "crate" },
        "merge_from": { "visibility": "private" }
      },
      "fields": [{ "name": "x", "type": "i32" }]
    }]
  }));
  assert_emits(&code, "pub(crate) struct Point {");
  assert_emits(&code, "pub(crate) struct PointBuilder {");
  assert_emits(&code, "pub(crate) struct PartialPoint {");
  assert_emits(&code, "pub(crate) fn finish(&self) -> Result<Point, datatype_gen_support::BuildError>");
  assert_emits(&code, "fn merge_from(&mut self, value: &Point) -> &mut Self");
  assert_omits(&code, "pub fn merge_from(");
  assert_omits(&code, "fn to_builder(");
  assert_emits(&code, "pub fn set_x(&mut self, x: i32) -> &mut Self");
}

#[test]
fn test_validated_datatype() {
  let code = generate(json!({
    "datatypes": [{
      "name": "User",
      "error_type": "crate::ValidationError",
      "hooks": { "set_email": "crate::validate_email", "add_roles": "crate::validate_role" },
      "fields": [
        { "name": "email", "type": "String" },
        { "name": "roles", "type": "Vec<String>" }
      ]
    }]
  }));
  assert_emits(
    &code,
    "pub fn set_email(&mut self, email: impl Into<String>) -> Result<&mut Self, crate::ValidationError>",
  );
  assert_emits(&code, "crate::validate_email(&email)?;");
  assert_emits(&code, "crate::validate_role(&element)?;");
  assert_emits(
    &code,
    "pub fn merge_from(&mut self, value: &User) -> Result<&mut Self, crate::ValidationError>",
  );
  assert_emits(
    &code,
    "pub fn merge_from_builder(&mut self, other: &Self) -> Result<&mut Self, crate::ValidationError>",
  );
  assert_emits(&code, "self.add_all_roles(value.roles.iter().cloned())?; Ok(self) }");
  assert_omits(&code, "let template = Self::new(); self.set_email");
}
