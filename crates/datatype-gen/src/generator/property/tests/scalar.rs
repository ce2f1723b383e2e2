use syn::parse_quote;

use super::{assert_emits, assert_omits, render, validated};
use crate::generator::{
  model::{Datatype, Field},
  property::{FieldCategory, Initially, MergeAction, MethodKind},
};

fn person() -> Datatype {
  Datatype::named("Person").with_fields(vec![
    Field::named("name", parse_quote!(String)),
    Field::named("id", parse_quote!(u64)),
    Field::named("age", parse_quote!(i32)).with_default(parse_quote!(0)),
    Field::named("weight", parse_quote!(f64)).with_default(parse_quote!(0.0)),
    Field::named("nickname", parse_quote!(Option<String>)),
    Field::named("visits", parse_quote!(Option<u32>)),
    Field::named("ratio", parse_quote!(Option<f64>)),
  ])
}

#[test]
fn test_required_field_accessors() {
  let rendered = render(&person(), "name");
  assert_eq!(rendered.category, FieldCategory::Default);
  assert_eq!(rendered.initially, Initially::Required);
  assert_eq!(rendered.merge_actions, vec![MergeAction::SkipIfUnset]);
  assert_eq!(rendered.kinds, vec![MethodKind::Set, MethodKind::Map, MethodKind::Get]);

  let code = &rendered.accessors;
  assert_emits(code, "pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self");
  assert_emits(code, "let name: String = name.into();");
  assert_emits(code, "self.name = Some(name); self.unset.remove(0);");
  assert_emits(
    code,
    "pub fn name(&self) -> Result<&String, support::BuildError> { self.unset.check_set(0, \"name\")?;",
  );
  assert_emits(code, "self.name.as_ref().ok_or_else(|| support::BuildError::not_set(\"name\"))");
}

#[test]
fn test_required_field_storage_and_build() {
  let rendered = render(&person(), "name");
  assert_eq!(rendered.builder_field, "name : Option < String >");
  assert_eq!(rendered.builder_init, "name : None");
  assert_emits(
    &rendered.final_assignment,
    "self.name.clone().ok_or_else(|| support::BuildError::not_set(\"name\"))?",
  );
  assert_emits(&rendered.partial_accessor, "self.unset.check_partial(0, \"name\")?;");
  assert_emits(&rendered.partial_accessor, "support::BuildError::partial_unset(\"name\")");
}

#[test]
fn test_required_field_ordinals_follow_declaration_order() {
  let rendered = render(&person(), "id");
  assert_emits(&rendered.accessors, "self.unset.remove(1);");
  assert_emits(&rendered.accessors, "pub fn id(&self) -> Result<u64, support::BuildError>");
  assert_emits(&rendered.accessors, "self.unset.check_set(1, \"id\")?;");
}

#[test]
fn test_required_field_map_fails_when_unset() {
  let rendered = render(&person(), "name");
  assert_emits(
    &rendered.accessors,
    "pub fn map_name<F>(&mut self, mapper: F) -> Result<&mut Self, support::BuildError> where F: FnOnce(String) -> String,",
  );
  assert_emits(&rendered.accessors, "let current = self.name()?.clone();");
  assert_emits(&rendered.accessors, "Ok(self.set_name(mapper(current)))");
}

#[test]
fn test_required_field_merges_skip_unset() {
  let rendered = render(&person(), "name");
  assert_emits(&rendered.merge_from_value, "self.set_name(value.name.clone());");
  assert_emits(
    &rendered.merge_from_builder,
    "if let Ok(current) = other.name() { self.set_name(current.clone()); }",
  );
}

#[test]
fn test_defaulted_field() {
  let rendered = render(&person(), "age");
  assert_eq!(rendered.initially, Initially::HasDefault);
  assert_eq!(rendered.merge_actions, vec![MergeAction::SkipIfEqualsDefault]);
  assert_eq!(rendered.builder_field, "age : i32");
  assert_eq!(rendered.builder_init, "age : 0");

  let code = &rendered.accessors;
  assert_emits(code, "pub fn set_age(&mut self, age: i32) -> &mut Self { self.age = age; self }");
  assert_emits(code, "pub fn age(&self) -> i32 { self.age }");
  assert_emits(code, "let current = self.age; self.set_age(mapper(current))");
  assert_omits(code, "unset");

  assert_emits(
    &rendered.merge_from_value,
    "if value.age != template.age { self.set_age(value.age); }",
  );
  assert_emits(
    &rendered.merge_from_builder,
    "if other.age != template.age { self.set_age(other.age); }",
  );
}

#[test]
fn test_float_defaults_compare_bit_patterns() {
  let rendered = render(&person(), "weight");
  assert_emits(
    &rendered.merge_from_value,
    "if value.weight.to_bits() != template.weight.to_bits()",
  );
}

#[test]
fn test_validated_setter() {
  let datatype = validated(
    Datatype::named("User").with_fields(vec![Field::named("email", parse_quote!(String))]),
    &[("set_email", "validate_email")],
  );
  let rendered = render(&datatype, "email");
  assert!(rendered.validated);

  let code = &rendered.accessors;
  assert_emits(
    code,
    "pub fn set_email(&mut self, email: impl Into<String>) -> Result<&mut Self, ValidationError>",
  );
  assert_emits(code, "let email: String = email.into(); validate_email(&email)?; self.email = Some(email);");
  assert_emits(code, "Ok(self)");
  assert_emits(code, "pub fn map_email<F>(&mut self, mapper: F) -> Result<&mut Self, ValidationError>");
  assert_emits(&rendered.merge_from_value, "self.set_email(value.email.clone())?;");
}

#[test]
fn test_optional_field() {
  let rendered = render(&person(), "nickname");
  assert_eq!(rendered.category, FieldCategory::Optional);
  assert_eq!(rendered.initially, Initially::HasDefault);
  assert_eq!(
    rendered.kinds,
    vec![
      MethodKind::Set,
      MethodKind::SetNullable,
      MethodKind::Map,
      MethodKind::Clear,
      MethodKind::Get
    ]
  );
  assert_eq!(rendered.builder_init, "nickname : None");

  let code = &rendered.accessors;
  assert_emits(code, "pub fn set_nickname(&mut self, nickname: impl Into<String>) -> &mut Self");
  assert_emits(code, "self.nickname = Some(nickname);");
  assert_emits(
    code,
    "pub fn set_nullable_nickname(&mut self, nickname: Option<String>) -> &mut Self",
  );
  assert_emits(code, "None => self.clear_nickname(),");
  assert_emits(code, "match self.nickname.clone() { Some(current) => self.set_nickname(mapper(current)), None => self, }");
  assert_emits(code, "pub fn nickname(&self) -> Option<&String> { self.nickname.as_ref() }");

  assert_emits(
    &rendered.merge_from_value,
    "if let Some(current) = &value.nickname { self.set_nickname(current.clone()); }",
  );
}

#[test]
fn test_optional_primitive_is_copied() {
  let rendered = render(&person(), "visits");
  assert_emits(&rendered.accessors, "pub fn set_visits(&mut self, visits: u32) -> &mut Self");
  assert_emits(&rendered.accessors, "pub fn visits(&self) -> Option<u32> { self.visits }");
  assert_emits(&rendered.merge_from_builder, "self.set_visits(*current);");
}

#[test]
fn test_validated_optional_clears_through_ok() {
  let datatype = validated(
    Datatype::named("User").with_fields(vec![Field::named("nickname", parse_quote!(Option<String>))]),
    &[("set_nickname", "validate_nickname")],
  );
  let rendered = render(&datatype, "nickname");
  assert_emits(&rendered.accessors, "validate_nickname(&nickname)?;");
  assert_emits(&rendered.accessors, "None => Ok(self.clear_nickname()),");
  assert_emits(&rendered.accessors, "None => Ok(self),");
}

#[test]
fn test_optional_float_compares_bit_patterns() {
  let rendered = render(&person(), "ratio");
  assert_emits(
    &rendered.eq,
    "self.ratio.map(f64::to_bits) == other.ratio.map(f64::to_bits)",
  );
  assert_eq!(rendered.partial_eq, rendered.eq);
  assert_emits(&rendered.accessors, "pub fn ratio(&self) -> Option<f64> { self.ratio }");
}

#[test]
fn test_optional_non_float_compares_directly() {
  let rendered = render(&person(), "visits");
  assert_emits(&rendered.eq, "self.visits == other.visits");
  assert_omits(&rendered.eq, "to_bits");
}

#[test]
fn test_required_float_partial_compares_bit_patterns() {
  let datatype = Datatype::named("Sample").with_fields(vec![Field::named("mean", parse_quote!(f64))]);
  let rendered = render(&datatype, "mean");
  assert_emits(&rendered.eq, "self.mean.to_bits() == other.mean.to_bits()");
  assert_emits(&rendered.partial_eq, "self.mean.map(f64::to_bits) == other.mean.map(f64::to_bits)");
}

#[test]
fn test_scalar_set_from_result() {
  let rendered = render(&person(), "name");
  assert_emits(&rendered.set_from_result, "builder.set_name(result);");
  let rendered = render(&person(), "age");
  assert_emits(&rendered.set_from_result, "builder.set_age(result);");
  let rendered = render(&person(), "nickname");
  assert_emits(&rendered.set_from_result, "builder.set_nickname(result);");
}

#[test]
fn test_validated_set_from_result_propagates() {
  let datatype = validated(
    Datatype::named("User").with_fields(vec![
      Field::named("email", parse_quote!(String)),
      Field::named("nickname", parse_quote!(Option<String>)),
    ]),
    &[("set_email", "validate_email"), ("set_nickname", "validate_nickname")],
  );
  assert_emits(&render(&datatype, "email").set_from_result, "builder.set_email(result)?;");
  assert_emits(&render(&datatype, "nickname").set_from_result, "builder.set_nickname(result)?;");
}

#[test]
fn test_scalar_display_terms() {
  let rendered = render(&person(), "age");
  assert_emits(&rendered.display, "parts.push(format!(\"age={:?}\", self.age));");
  assert_eq!(rendered.partial_display, rendered.display);

  let rendered = render(&person(), "name");
  assert_emits(&rendered.display, "parts.push(format!(\"name={:?}\", self.name));");
  assert_emits(
    &rendered.partial_display,
    "if let Some(current) = &self.name { parts.push(format!(\"name={:?}\", current)); }",
  );

  let rendered = render(&person(), "nickname");
  assert_emits(&rendered.display, "if let Some(current) = &self.nickname {");
}
