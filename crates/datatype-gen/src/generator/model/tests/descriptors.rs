use syn::parse_quote;

use crate::generator::model::{Datatype, Field, MethodPolicy, Primitive, Underride};

#[test]
fn test_field_named_derives_variants() {
  let field = Field::named("first_name", parse_quote!(String));
  assert_eq!(field.getter, "first_name");
  assert_eq!(field.capitalized_name, "FirstName");
  assert_eq!(field.constant_name, "FIRST_NAME");
  assert!(field.primitive.is_none());
  assert!(field.default.is_none());
  assert!(!field.fully_checked_cast);
}

#[test]
fn test_field_named_detects_primitive() {
  let field = Field::named("weight", parse_quote!(f64)).with_default(parse_quote!(0.0));
  assert_eq!(field.primitive, Some(Primitive::F64));
  assert!(field.is_float());
  assert!(field.default.is_some());
}

#[test]
fn test_datatype_named_uses_conventional_artifacts() {
  let datatype = Datatype::named("Person");
  assert_eq!(datatype.builder_name, "PersonBuilder");
  assert_eq!(datatype.partial_name, "PartialPerson");
  assert!(datatype.to_builder);
  assert_eq!(datatype.methods, MethodPolicy::default());
  assert!(!datatype.underrides(Underride::Display));
}

#[test]
fn test_datatype_field_lookup() {
  let datatype = Datatype::named("Person").with_fields(vec![Field::named("name", parse_quote!(String))]);
  assert!(datatype.field("name").is_some());
  assert!(datatype.field("age").is_none());
}
