//! Turns a [`SchemaFile`] into validated [`Datatype`] descriptors.

mod errors;
mod file;
pub(crate) mod graph;

use std::collections::{BTreeMap, BTreeSet};

pub use errors::SchemaError;
pub use file::{DatatypeSpec, FieldSpec, MethodSpec, SchemaFile};
use syn::{Attribute, Expr, Path, Type, UseTree, parse::Parser};

use self::graph::NestingGraph;
use crate::{
  generator::{
    adapters::AccessorDecorator,
    codegen::Visibility,
    model::{Datatype, Field, MethodPolicy, NameAndVisibility, Primitive},
  },
  naming::identifiers::{
    builder_name, capitalized, constant_style, is_valid_field_name, is_valid_type_name, partial_name,
  },
};

/// Validated datatypes plus the `use` declarations the generated module starts with.
#[derive(Debug, Clone)]
pub struct Schema {
  pub uses: Vec<UseTree>,
  pub datatypes: Vec<Datatype>,
}

impl Schema {
  pub(crate) fn from_file(
    file: SchemaFile,
    visibility: Visibility,
    adapters: &[Box<dyn AccessorDecorator>],
  ) -> Result<Self, SchemaError> {
    let uses = file
      .uses
      .iter()
      .map(|tree| {
        syn::parse_str::<UseTree>(tree).map_err(|source| SchemaError::InvalidUse {
          tree: tree.clone(),
          source,
        })
      })
      .collect::<Result<Vec<_>, _>>()?;

    let mut seen = BTreeSet::new();
    let mut datatypes = Vec::with_capacity(file.datatypes.len());
    for spec in file.datatypes {
      if !seen.insert(spec.name.clone()) {
        return Err(SchemaError::DuplicateDatatype { name: spec.name });
      }
      datatypes.push(DatatypeConverter::new(&spec, visibility, adapters).convert()?);
    }

    if let Some(cycle) = NestingGraph::build(&datatypes).cycles().into_iter().next() {
      return Err(SchemaError::NestingCycle { cycle });
    }

    Ok(Self { uses, datatypes })
  }

  pub(crate) fn datatype(&self, name: &str) -> Option<&Datatype> {
    self.datatypes.iter().find(|datatype| datatype.name == name)
  }
}

struct DatatypeConverter<'a> {
  spec: &'a DatatypeSpec,
  default_visibility: Visibility,
  adapters: &'a [Box<dyn AccessorDecorator>],
}

impl<'a> DatatypeConverter<'a> {
  fn new(spec: &'a DatatypeSpec, default_visibility: Visibility, adapters: &'a [Box<dyn AccessorDecorator>]) -> Self {
    Self {
      spec,
      default_visibility,
      adapters,
    }
  }

  fn convert(&self) -> Result<Datatype, SchemaError> {
    let spec = self.spec;
    if spec.name.contains('<') {
      return Err(SchemaError::GenericDatatype {
        datatype: spec.name.clone(),
      });
    }
    let name = self.type_name(&spec.name)?;
    let builder = self.type_name(&spec.builder.clone().unwrap_or_else(|| builder_name(&name)))?;
    let partial = self.type_name(&spec.partial.clone().unwrap_or_else(|| partial_name(&name)))?;

    let visibility = match &spec.visibility {
      Some(value) => self.visibility(value)?,
      None => self.default_visibility,
    };
    let error_type = spec.error_type.as_deref().map(|ty| self.error_type(ty)).transpose()?;
    let hooks = self.hooks()?;
    if !hooks.is_empty() && error_type.is_none() {
      return Err(SchemaError::MissingErrorType { datatype: name });
    }

    Ok(
      Datatype::builder()
        .name(name)
        .builder_name(builder)
        .partial_name(partial)
        .fields(self.fields()?)
        .methods(self.methods()?)
        .to_builder(spec.to_builder)
        .visibility(visibility)
        .maybe_error_type(error_type)
        .underrides(spec.underrides.iter().copied().collect())
        .hooks(hooks)
        .docs(spec.docs.clone())
        .build(),
    )
  }

  fn type_name(&self, name: &str) -> Result<String, SchemaError> {
    if is_valid_type_name(name) {
      Ok(name.to_string())
    } else {
      Err(SchemaError::InvalidTypeName { name: name.to_string() })
    }
  }

  fn member_name(&self, name: &str) -> Result<String, SchemaError> {
    if is_valid_field_name(name) {
      Ok(name.to_string())
    } else {
      Err(SchemaError::InvalidFieldName {
        datatype: self.spec.name.clone(),
        name: name.to_string(),
      })
    }
  }

  fn visibility(&self, value: &str) -> Result<Visibility, SchemaError> {
    Visibility::parse(value).ok_or_else(|| SchemaError::InvalidVisibility {
      datatype: self.spec.name.clone(),
      value: value.to_string(),
    })
  }

  fn path(&self, path: &str) -> Result<Path, SchemaError> {
    syn::parse_str::<Path>(path).map_err(|source| SchemaError::InvalidPath {
      datatype: self.spec.name.clone(),
      path: path.to_string(),
      source,
    })
  }

  fn error_type(&self, ty: &str) -> Result<Type, SchemaError> {
    syn::parse_str::<Type>(ty).map_err(|source| SchemaError::InvalidPath {
      datatype: self.spec.name.clone(),
      path: ty.to_string(),
      source,
    })
  }

  fn hooks(&self) -> Result<BTreeMap<String, Path>, SchemaError> {
    self
      .spec
      .hooks
      .iter()
      .map(|(method, validator)| Ok((self.member_name(method)?, self.path(validator)?)))
      .collect()
  }

  fn methods(&self) -> Result<MethodPolicy, SchemaError> {
    let defaults = MethodPolicy::default();
    let methods = &self.spec.methods;
    Ok(MethodPolicy {
      build: self.method(methods.build.as_ref(), defaults.build)?,
      build_partial: self.method(methods.build_partial.as_ref(), defaults.build_partial)?,
      clear: self.method(methods.clear.as_ref(), defaults.clear)?,
      merge_from: self.method(methods.merge_from.as_ref(), defaults.merge_from)?,
      merge_from_builder: self.method(methods.merge_from_builder.as_ref(), defaults.merge_from_builder)?,
    })
  }

  fn method(&self, spec: Option<&MethodSpec>, default: NameAndVisibility) -> Result<NameAndVisibility, SchemaError> {
    let Some(spec) = spec else {
      return Ok(default);
    };
    let name = match &spec.name {
      Some(name) => self.member_name(name)?,
      None => default.name,
    };
    let visibility = match &spec.visibility {
      Some(value) => self.visibility(value)?,
      None => default.visibility,
    };
    Ok(NameAndVisibility { name, visibility })
  }

  fn fields(&self) -> Result<Vec<Field>, SchemaError> {
    let mut names = BTreeSet::new();
    let mut getters = BTreeSet::new();
    let mut fields = Vec::with_capacity(self.spec.fields.len());

    for spec in &self.spec.fields {
      let field = self.field(spec)?;
      if !names.insert(field.name.clone()) {
        return Err(SchemaError::DuplicateField {
          datatype: self.spec.name.clone(),
          field: field.name,
        });
      }
      if !getters.insert(field.getter.clone()) {
        return Err(SchemaError::DuplicateGetter {
          datatype: self.spec.name.clone(),
          getter: field.getter,
        });
      }
      fields.push(field);
    }

    Ok(fields)
  }

  fn field(&self, spec: &FieldSpec) -> Result<Field, SchemaError> {
    let name = self.member_name(&spec.name)?;
    let getter = self.member_name(spec.getter.as_deref().unwrap_or(&name))?;
    let ty = syn::parse_str::<Type>(&spec.ty).map_err(|source| SchemaError::InvalidType {
      datatype: self.spec.name.clone(),
      field: name.clone(),
      ty: spec.ty.clone(),
      source,
    })?;
    let default = spec
      .default
      .as_deref()
      .map(|expr| {
        syn::parse_str::<Expr>(expr).map_err(|source| SchemaError::InvalidDefault {
          datatype: self.spec.name.clone(),
          field: name.clone(),
          expr: expr.to_string(),
          source,
        })
      })
      .transpose()?;
    let mut decorations = Vec::new();
    for attr in &spec.setter_attrs {
      let parsed = Attribute::parse_outer
        .parse_str(attr)
        .map_err(|source| SchemaError::InvalidAttribute {
          datatype: self.spec.name.clone(),
          field: name.clone(),
          attr: attr.clone(),
          source,
        })?;
      decorations.extend(parsed);
    }

    let mut field = Field::builder()
      .capitalized_name(capitalized(&name))
      .constant_name(constant_style(&name))
      .name(name)
      .maybe_primitive(Primitive::of(&ty))
      .ty(ty)
      .getter(getter)
      .fully_checked_cast(spec.fully_checked_cast)
      .maybe_default(default)
      .maybe_json_name(spec.json_name.clone())
      .decorations(decorations)
      .docs(spec.docs.clone())
      .build();

    let contributed: Vec<Attribute> = self
      .adapters
      .iter()
      .flat_map(|adapter| adapter.decorate(&field))
      .collect();
    field.decorations.extend(contributed);

    Ok(field)
  }
}
