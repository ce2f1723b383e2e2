use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::{
  generator::orchestrator::{FieldSummary, GenerateOptions, Orchestrator},
  ui::{Colors, term_width},
  utils::schema::SchemaLoader,
};

pub async fn list_fields(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let file = SchemaLoader::open(input).await?.parse()?;
  let orchestrator = Orchestrator::new(file, GenerateOptions::default())?;
  let summaries = orchestrator.field_summaries()?;

  println!("{}", fields_table(&summaries, colors, term_width()));

  Ok(())
}

fn fields_table(summaries: &[FieldSummary], colors: &Colors, width: u16) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(width);

  let mut row = Row::new();
  for title in ["DATATYPE", "FIELD", "VARIANTS", "TYPE", "CATEGORY", "INITIALLY", "MERGE"] {
    row.add_cell(Cell::new(title).fg(colors.label_cell()));
  }
  table.set_header(row);

  for summary in summaries {
    let merge = summary.merge_actions.iter().join(", ");
    let category = if summary.validated {
      format!("{} (validated)", summary.category)
    } else {
      summary.category.to_string()
    };
    let variants = format!("{} {}", summary.capitalized_name, summary.constant_name);
    let ty = if summary.fully_checked_cast {
      format!("{} (checked)", summary.ty)
    } else {
      summary.ty.clone()
    };

    let mut row = Row::new();
    row.add_cell(Cell::new(&summary.datatype).fg(colors.primary_cell()));
    row.add_cell(
      Cell::new(&summary.field)
        .fg(colors.value_cell())
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(variants));
    row.add_cell(Cell::new(ty).fg(colors.info_cell()));
    row.add_cell(
      Cell::new(category)
        .fg(colors.accent_cell())
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(summary.initially.to_string()));
    row.add_cell(Cell::new(merge));
    table.add_row(row);
  }

  table
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    generator::property::{FieldCategory, Initially, MergeAction},
    ui::colors::Theme,
  };

  #[test]
  fn test_fields_table_rows() {
    let summaries = vec![FieldSummary {
      datatype: "Person".to_string(),
      field: "tags".to_string(),
      capitalized_name: "Tags".to_string(),
      constant_name: "TAGS".to_string(),
      ty: "Vec<String>".to_string(),
      fully_checked_cast: true,
      category: FieldCategory::List,
      initially: Initially::HasDefault,
      merge_actions: vec![MergeAction::AppendToCollection],
      validated: true,
    }];

    let rendered = fields_table(&summaries, &Colors::new(false, Theme::Dark), 200).to_string();
    assert!(rendered.contains("DATATYPE"));
    assert!(rendered.contains("Person"));
    assert!(rendered.contains("Tags TAGS"));
    assert!(rendered.contains("Vec<String> (checked)"));
    assert!(rendered.contains("list (validated)"));
    assert!(rendered.contains("HAS_DEFAULT"));
    assert!(rendered.contains("APPEND_TO_COLLECTION"));
  }
}
