//! Orchestration for the schema to builder code generation pipeline.
//!
//! The `Orchestrator` validates a schema file once on construction and then renders it: every
//! datatype is resolved field by field, synthesized into its value, builder and partial types, and
//! the resulting module is checked with `syn` and formatted with `prettyplease`.
//!
//! ## Usage
//!
//! ```no_run
//! use datatype_gen::generator::orchestrator::{GenerateOptions, Orchestrator};
//!
//! # fn example() -> anyhow::Result<()> {
//! let schema_json = std::fs::read_to_string("person.json")?;
//! let file = serde_json::from_str(&schema_json)?;
//!
//! let orchestrator = Orchestrator::new(file, GenerateOptions::default())?;
//! let (code, stats) = orchestrator.generate_with_header("person.json")?;
//!
//! println!("Generated {} datatypes with {} warnings", stats.datatypes_generated, stats.warnings.len());
//! std::fs::write("person.rs", code)?;
//! # Ok(())
//! # }
//! ```

use anyhow::Context;
use quote::{ToTokens, quote};
use syn::Path;

use crate::generator::{
  adapters::default_adapters,
  codegen::Visibility,
  metrics::GenerationStats,
  property::{FieldCategory, Initially, MergeAction},
  resolver::{self, ResolvedDatatype},
  schema::{Schema, SchemaFile},
  synthesizer::BuilderSynthesizer,
};

pub const DEFAULT_SUPPORT_CRATE: &str = "datatype_gen_support";

/// Settings that apply to every datatype of one generation run.
#[derive(Debug, Clone, bon::Builder)]
pub struct GenerateOptions {
  /// Visibility of generated types whose datatype does not declare one.
  #[builder(default)]
  pub visibility: Visibility,
  /// Path generated code uses to reach the runtime support types.
  #[builder(into, default = DEFAULT_SUPPORT_CRATE.to_string())]
  pub support_crate: String,
}

impl Default for GenerateOptions {
  fn default() -> Self {
    Self::builder().build()
  }
}

/// One field as the resolver bound it, for listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSummary {
  pub datatype: String,
  pub field: String,
  pub capitalized_name: String,
  pub constant_name: String,
  pub ty: String,
  pub fully_checked_cast: bool,
  pub category: FieldCategory,
  pub initially: Initially,
  pub merge_actions: Vec<MergeAction>,
  pub validated: bool,
}

/// High-level orchestrator for schema to builder code generation.
pub struct Orchestrator {
  schema: Schema,
  support: Path,
}

impl Orchestrator {
  /// Validates `file` and prepares it for generation.
  ///
  /// # Errors
  ///
  /// Returns an error if the schema is invalid or the support crate path does not parse.
  pub fn new(file: SchemaFile, options: GenerateOptions) -> anyhow::Result<Self> {
    let support = syn::parse_str::<Path>(&options.support_crate)
      .with_context(|| format!("invalid support crate path '{}'", options.support_crate))?;
    let schema = Schema::from_file(file, options.visibility, &default_adapters())?;
    Ok(Self { schema, support })
  }

  pub fn datatype_names(&self) -> Vec<&str> {
    self
      .schema
      .datatypes
      .iter()
      .map(|datatype| datatype.name.as_str())
      .collect()
  }

  fn resolve(&self) -> anyhow::Result<Vec<ResolvedDatatype<'_>>> {
    Ok(resolver::resolve(&self.schema)?)
  }

  /// Generates the builder module without a file header.
  ///
  /// # Errors
  ///
  /// Returns an error if a field cannot be resolved (for example a default on a collection) or the
  /// generated tokens are not a valid Rust file.
  pub fn generate(&self) -> anyhow::Result<(String, GenerationStats)> {
    let resolved = self.resolve()?;
    let mut stats = GenerationStats::default();
    stats.record_datatypes(&resolved);

    let uses = &self.schema.uses;
    let items = resolved
      .iter()
      .map(|datatype| BuilderSynthesizer::new(datatype, &self.support).generate());
    let code = quote! {
      #(use #uses;)*
      #(#items)*
    };

    let syntax_tree = syn::parse2::<syn::File>(code).context("generated code is not a valid Rust file")?;
    let formatted = prettyplease::unparse(&syntax_tree);

    Ok((formatted, stats))
  }

  /// Generates the builder module with an auto-generated file header naming `source_path`.
  ///
  /// # Errors
  ///
  /// Returns the same errors as `generate()`.
  pub fn generate_with_header(&self, source_path: &str) -> anyhow::Result<(String, GenerationStats)> {
    let (code, stats) = self.generate()?;
    let names = self.datatype_names().join(", ");

    let final_code = format!(
      r"//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builders for: {names}
//! Source: {source_path}
//! Generated by `datatype-gen`
#![allow(clippy::ptr_arg, dead_code)]

{code}"
    );

    Ok((final_code, stats))
  }

  /// The resolved category, initial state and merge policy of every field.
  ///
  /// # Errors
  ///
  /// Returns an error if a field cannot be resolved.
  pub fn field_summaries(&self) -> anyhow::Result<Vec<FieldSummary>> {
    let resolved = self.resolve()?;
    Ok(
      resolved
        .iter()
        .flat_map(|datatype| {
          datatype.fields.iter().map(|field| FieldSummary {
            datatype: datatype.datatype.name.clone(),
            field: field.field.name.clone(),
            capitalized_name: field.field.capitalized_name.clone(),
            constant_name: field.field.constant_name.clone(),
            ty: field.field.ty.to_token_stream().to_string().replace(' ', ""),
            fully_checked_cast: field.field.fully_checked_cast,
            category: field.category(),
            initially: field.generator.initially(),
            merge_actions: field.generator.merge_actions(),
            validated: field.generator.validator().is_some(),
          })
        })
        .collect(),
    )
  }
}
