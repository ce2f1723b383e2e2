use syn::parse_quote;

use crate::generator::model::{
  Primitive,
  types::{is_named, match_constructor, type_arguments, type_name},
};

#[test]
fn test_primitive_detection() {
  assert_eq!(Primitive::of(&parse_quote!(u32)), Some(Primitive::U32));
  assert_eq!(Primitive::of(&parse_quote!(f64)), Some(Primitive::F64));
  assert_eq!(Primitive::of(&parse_quote!(bool)), Some(Primitive::Bool));
  assert_eq!(Primitive::of(&parse_quote!(String)), None);
  assert_eq!(Primitive::of(&parse_quote!(std::primitive::u32)), None);
  assert!(Primitive::F32.is_float());
  assert!(!Primitive::I64.is_float());
}

#[test]
fn test_type_name_uses_last_segment() {
  assert_eq!(type_name(&parse_quote!(std::vec::Vec<String>)), Some("Vec".to_string()));
  assert_eq!(type_name(&parse_quote!(BTreeMap<String, u32>)), Some("BTreeMap".to_string()));
  assert_eq!(type_name(&parse_quote!(&str)), None);
  assert_eq!(type_name(&parse_quote!((u32, u32))), None);
}

#[test]
fn test_type_arguments_skip_lifetimes() {
  let ty = parse_quote!(Cow<'static, str>);
  let arguments = type_arguments(&ty);
  assert_eq!(arguments.len(), 1);
}

#[test]
fn test_match_constructor_checks_arity() {
  let ty = parse_quote!(HashMap<String, u32>);
  let (name, arguments) = match_constructor(&ty, &["HashMap", "BTreeMap"], 2).unwrap();
  assert_eq!(name, "HashMap");
  assert_eq!(arguments.len(), 2);

  let erased = parse_quote!(HashMap);
  assert!(match_constructor(&erased, &["HashMap"], 2).is_none());
  assert!(match_constructor(&ty, &["Vec"], 1).is_none());
}

#[test]
fn test_is_named() {
  assert!(is_named(&parse_quote!(Address), "Address"));
  assert!(is_named(&parse_quote!(crate::model::Address), "Address"));
  assert!(!is_named(&parse_quote!(Address<u8>), "Address"));
  assert!(!is_named(&parse_quote!(AddressBook), "Address"));
}
