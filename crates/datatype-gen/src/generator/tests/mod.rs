mod synthesizer;

use crate::generator::{
  adapters::default_adapters,
  codegen::Visibility,
  orchestrator::{GenerateOptions, Orchestrator},
  schema::{Schema, SchemaFile},
};

pub(super) fn schema_file(value: serde_json::Value) -> SchemaFile {
  serde_json::from_value(value).expect("failed to parse test schema")
}

pub(super) fn load_schema(value: serde_json::Value) -> Schema {
  Schema::from_file(schema_file(value), Visibility::Public, &default_adapters()).expect("invalid test schema")
}

/// Runs the whole pipeline and returns the formatted module.
pub(super) fn generate(value: serde_json::Value) -> String {
  let orchestrator = Orchestrator::new(schema_file(value), GenerateOptions::default()).expect("invalid test schema");
  let (code, _) = orchestrator.generate().expect("generation failed");
  code
}

/// Drops whitespace and the trailing commas prettyplease adds when it wraps a list.
fn squash(code: &str) -> String {
  let squashed: String = code.split_whitespace().collect();
  squashed.replace(",)", ")").replace(",}", "}").replace(",]", "]")
}

#[track_caller]
pub(super) fn assert_emits(code: &str, expected: &str) {
  assert!(
    squash(code).contains(&squash(expected)),
    "expected `{expected}` in:\n{code}"
  );
}

#[track_caller]
pub(super) fn assert_omits(code: &str, unexpected: &str) {
  assert!(
    !squash(code).contains(&squash(unexpected)),
    "unexpected `{unexpected}` in:\n{code}"
  );
}
