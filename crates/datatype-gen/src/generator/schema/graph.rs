use std::collections::BTreeSet;

use petgraph::{
  algo::{kosaraju_scc, toposort},
  graphmap::DiGraphMap,
};
use syn::Type;

use super::SchemaError;
use crate::generator::model::{Datatype, types};

/// Which datatypes store which other datatypes by value.
///
/// An edge `A -> B` means a builder for `A` holds a builder for `B`, so `B` must be resolved first and
/// `A` may never be reachable from `B`.
pub(crate) struct NestingGraph<'a> {
  graph: DiGraphMap<&'a str, ()>,
}

impl<'a> NestingGraph<'a> {
  pub(crate) fn build(datatypes: &'a [Datatype]) -> Self {
    let names: BTreeSet<&str> = datatypes.iter().map(|datatype| datatype.name.as_str()).collect();
    let mut graph = DiGraphMap::new();

    for datatype in datatypes {
      graph.add_node(datatype.name.as_str());
      for field in &datatype.fields {
        if let Some(nested) = stored_datatype(&field.ty, &names) {
          graph.add_edge(datatype.name.as_str(), nested, ());
        }
      }
    }

    Self { graph }
  }

  pub(crate) fn cycles(&self) -> Vec<Vec<String>> {
    kosaraju_scc(&self.graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
      .map(|scc| scc.into_iter().rev().map(String::from).collect())
      .collect()
  }

  /// Datatype names ordered so that every datatype comes after the ones it nests.
  pub(crate) fn resolution_order(&self) -> Result<Vec<&'a str>, SchemaError> {
    let mut order = toposort(&self.graph, None).map_err(|cycle| SchemaError::NestingCycle {
      cycle: vec![cycle.node_id().to_string()],
    })?;
    order.reverse();
    Ok(order)
  }
}

/// The schema datatype `ty` stores inline: `D` itself or `Option<D>`.
fn stored_datatype<'n>(ty: &Type, names: &BTreeSet<&'n str>) -> Option<&'n str> {
  let inner = match types::match_constructor(ty, &["Option"], 1) {
    Some((_, arguments)) => arguments[0],
    None => ty,
  };
  let name = types::type_name(inner)?;
  if !types::is_named(inner, &name) {
    return None;
  }
  names.get(name.as_str()).copied()
}
