/// Reasons a schema file cannot be turned into datatypes.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
  #[error("datatype '{name}' is declared more than once")]
  DuplicateDatatype { name: String },

  #[error("'{name}' is not a valid datatype or artifact name")]
  InvalidTypeName { name: String },

  #[error("{datatype}: field '{field}' is declared more than once")]
  DuplicateField { datatype: String, field: String },

  #[error("{datatype}: getter '{getter}' is used by more than one field")]
  DuplicateGetter { datatype: String, getter: String },

  #[error("{datatype}: '{name}' is not a valid field or method name")]
  InvalidFieldName { datatype: String, name: String },

  #[error("{datatype}.{field}: cannot parse type '{ty}': {source}")]
  InvalidType {
    datatype: String,
    field: String,
    ty: String,
    source: syn::Error,
  },

  #[error("{datatype}.{field}: cannot parse default '{expr}': {source}")]
  InvalidDefault {
    datatype: String,
    field: String,
    expr: String,
    source: syn::Error,
  },

  #[error("{datatype}.{field}: cannot parse setter attribute '{attr}': {source}")]
  InvalidAttribute {
    datatype: String,
    field: String,
    attr: String,
    source: syn::Error,
  },

  #[error("{datatype}: cannot parse path '{path}': {source}")]
  InvalidPath {
    datatype: String,
    path: String,
    source: syn::Error,
  },

  #[error("cannot parse use declaration '{tree}': {source}")]
  InvalidUse { tree: String, source: syn::Error },

  #[error("{datatype}: unknown visibility '{value}' (expected public, crate or private)")]
  InvalidVisibility { datatype: String, value: String },

  #[error("{datatype}.{field}: {category} fields cannot declare a default")]
  DefaultNotAllowed {
    datatype: String,
    field: String,
    category: String,
  },

  #[error("{datatype}: validators require an error_type")]
  MissingErrorType { datatype: String },

  #[error("{datatype}.{field}: merging the nested datatype can fail, so an error_type is required")]
  FallibleNestedMerge { datatype: String, field: String },

  #[error("{datatype}: more than one generated method is named '{method}'")]
  DuplicateMethod { datatype: String, method: String },

  #[error("datatypes contain each other by value: {}", cycle.join(" -> "))]
  NestingCycle { cycle: Vec<String> },

  #[error("{datatype}: generic datatypes are not supported")]
  GenericDatatype { datatype: String },
}
