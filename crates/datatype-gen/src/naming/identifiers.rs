use std::{collections::HashSet, sync::LazyLock};

use inflections::Inflect;

pub(crate) static FORBIDDEN_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "try", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "gen", "self", "Self",
  ]
  .into_iter()
  .collect()
});

// Names the generated builder already uses for its own members.
static RESERVED_FIELD_NAMES: LazyLock<HashSet<&str>> = LazyLock::new(|| ["unset"].into_iter().collect());

static RESERVED_TYPE_NAMES: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  ["Clone", "Copy", "Debug", "Default", "Display", "Option", "Result", "Self", "Send", "Sync", "Vec"]
    .into_iter()
    .collect()
});

fn is_plain_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  let Some(first) = chars.next() else {
    return false;
  };
  (first.is_ascii_alphabetic() || first == '_') && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && name != "_"
}

/// Whether `name` can be used verbatim as a generated field or method name.
///
/// Field names are emitted without raw-identifier escaping, so keywords are rejected rather than rewritten.
pub(crate) fn is_valid_field_name(name: &str) -> bool {
  is_plain_identifier(name)
    && !name.chars().any(|c| c.is_ascii_uppercase())
    && !FORBIDDEN_IDENTIFIERS.contains(name)
    && !RESERVED_FIELD_NAMES.contains(name)
}

pub(crate) fn is_valid_type_name(name: &str) -> bool {
  is_plain_identifier(name)
    && name.starts_with(|c: char| c.is_ascii_uppercase())
    && !FORBIDDEN_IDENTIFIERS.contains(name)
    && !RESERVED_TYPE_NAMES.contains(name)
}

/// `first_name` becomes `FirstName`.
pub(crate) fn capitalized(name: &str) -> String {
  name.to_pascal_case()
}

/// `first_name` becomes `FIRST_NAME`.
pub(crate) fn constant_style(name: &str) -> String {
  name.to_constant_case()
}

pub(crate) fn builder_name(datatype: &str) -> String {
  format!("{datatype}Builder")
}

pub(crate) fn partial_name(datatype: &str) -> String {
  format!("Partial{datatype}")
}
