use std::collections::BTreeMap;

use strum::Display;

use crate::generator::{property::FieldCategory, resolver::ResolvedDatatype};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub datatypes_generated: usize,
  pub fields_resolved: usize,
  pub required_fields: usize,
  pub validated_fields: usize,
  pub fields_by_category: BTreeMap<FieldCategory, usize>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub(crate) fn record_datatype(&mut self, resolved: &ResolvedDatatype<'_>) {
    self.datatypes_generated += 1;
    self.required_fields += resolved.required_count();
    for field in &resolved.fields {
      self.fields_resolved += 1;
      *self.fields_by_category.entry(field.category()).or_default() += 1;
      if field.generator.validator().is_some() {
        self.validated_fields += 1;
      }
    }

    let datatype = &resolved.datatype.name;
    if resolved.fields.is_empty() {
      self.record_warning(GenerationWarning::EmptyDatatype {
        datatype: datatype.clone(),
      });
    }
    self.record_warnings(resolved.unused_hooks.iter().map(|method| GenerationWarning::UnusedHook {
      datatype: datatype.clone(),
      method: method.clone(),
    }));
  }

  pub(crate) fn record_datatypes(&mut self, resolved: &[ResolvedDatatype<'_>]) {
    for datatype in resolved {
      self.record_datatype(datatype);
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Datatype '{datatype}': hook '{method}' does not name a validated method of any field")]
  UnusedHook { datatype: String, method: String },
  #[strum(to_string = "Datatype '{datatype}' declares no fields")]
  EmptyDatatype { datatype: String },
}
