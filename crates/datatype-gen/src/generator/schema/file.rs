use std::collections::BTreeMap;

use serde::Deserialize;

use crate::generator::model::Underride;

/// On-disk schema: `use` declarations for the generated module plus the datatypes to generate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
  #[serde(default)]
  pub uses: Vec<String>,
  pub datatypes: Vec<DatatypeSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatatypeSpec {
  pub name: String,
  #[serde(default)]
  pub docs: Vec<String>,
  pub builder: Option<String>,
  pub partial: Option<String>,
  #[serde(default = "default_true")]
  pub to_builder: bool,
  pub visibility: Option<String>,
  pub error_type: Option<String>,
  #[serde(default)]
  pub underrides: Vec<Underride>,
  #[serde(default)]
  pub hooks: BTreeMap<String, String>,
  #[serde(default)]
  pub methods: MethodsSpec,
  #[serde(default)]
  pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodsSpec {
  pub build: Option<MethodSpec>,
  pub build_partial: Option<MethodSpec>,
  pub clear: Option<MethodSpec>,
  pub merge_from: Option<MethodSpec>,
  pub merge_from_builder: Option<MethodSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodSpec {
  pub name: Option<String>,
  pub visibility: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
  pub name: String,
  #[serde(rename = "type")]
  pub ty: String,
  pub getter: Option<String>,
  pub default: Option<String>,
  #[serde(default)]
  pub fully_checked_cast: bool,
  pub json_name: Option<String>,
  #[serde(default)]
  pub setter_attrs: Vec<String>,
  #[serde(default)]
  pub docs: Vec<String>,
}

const fn default_true() -> bool {
  true
}
