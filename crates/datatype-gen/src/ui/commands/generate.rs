use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    codegen::Visibility,
    metrics::GenerationStats,
    orchestrator::{FieldSummary, GenerateOptions, Orchestrator},
    schema::SchemaFile,
  },
  ui::{Colors, GenerateCommand},
  utils::schema::SchemaLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub visibility: Visibility,
  pub support_crate: String,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      visibility,
      support_crate,
      verbose,
      quiet,
    } = command;

    let visibility = Visibility::parse(&visibility)
      .ok_or_else(|| anyhow::anyhow!("Invalid visibility '{visibility}': expected public, crate or file"))?;

    Ok(Self {
      input,
      output,
      visibility,
      support_crate,
      verbose,
      quiet,
    })
  }

  async fn load_schema(&self) -> anyhow::Result<SchemaFile> {
    SchemaLoader::open(&self.input).await?.parse()
  }

  fn create_orchestrator(&self, file: SchemaFile) -> anyhow::Result<Orchestrator> {
    let options = GenerateOptions::builder()
      .visibility(self.visibility)
      .support_crate(self.support_crate.clone())
      .build();
    Orchestrator::new(file, options)
  }

  async fn write_output(&self, code: String) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, code).await?;
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading schema from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating builders...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Datatypes generated:", stats.datatypes_generated.to_string());
    self.stat("Fields resolved:", stats.fields_resolved.to_string());
    for (category, count) in &stats.fields_by_category {
      self.stat("", format!("{count} {category}"));
    }
    self.stat("Required fields:", stats.required_fields.to_string());
    if stats.validated_fields > 0 {
      self.stat("Validated fields:", stats.validated_fields.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_fields(&self, summaries: &[FieldSummary]) {
    if self.config.quiet || !self.config.verbose {
      return;
    }

    let mut current = None;
    for summary in summaries {
      if current != Some(summary.datatype.as_str()) {
        current = Some(summary.datatype.as_str());
        println!("              {}", summary.datatype.as_str().with(self.colors.accent()));
      }
      println!(
        "                {} {}",
        format!("{}:", summary.field).with(self.colors.label()),
        format!("{} ({})", summary.ty, summary.category).with(self.colors.info())
      );
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || self.config.quiet {
      return;
    }

    println!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated builders".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let file = config.load_schema().await?;

  logger.log_generating();
  let orchestrator = config.create_orchestrator(file)?;
  let source_path = config.input.display().to_string();

  let (code, stats) = orchestrator.generate_with_header(&source_path)?;
  logger.print_statistics(&stats);
  if config.verbose {
    logger.print_fields(&orchestrator.field_summaries()?);
  }

  logger.log_writing();
  config.write_output(code).await?;

  logger.log_success();
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ui::colors::Theme;

  fn command(input: PathBuf, output: PathBuf) -> GenerateCommand {
    GenerateCommand {
      input,
      output,
      visibility: "public".to_string(),
      support_crate: "datatype_gen_support".to_string(),
      verbose: false,
      quiet: true,
    }
  }

  #[test]
  fn test_from_command_parses_visibility() {
    let mut cmd = command(PathBuf::from("in.json"), PathBuf::from("out.rs"));
    cmd.visibility = "crate".to_string();
    let config = GenerateConfig::from_command(cmd).unwrap();
    assert_eq!(config.visibility, Visibility::Crate);
    assert!(config.quiet);
  }

  #[test]
  fn test_from_command_rejects_unknown_visibility() {
    let mut cmd = command(PathBuf::from("in.json"), PathBuf::from("out.rs"));
    cmd.visibility = "protected".to_string();
    let err = GenerateConfig::from_command(cmd).unwrap_err();
    assert!(err.to_string().contains("Invalid visibility 'protected'"));
  }

  #[tokio::test]
  async fn test_generate_code_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("person.json");
    let output = dir.path().join("generated").join("person.rs");
    tokio::fs::write(
      &input,
      r#"{"datatypes": [{"name": "Person", "fields": [
        {"name": "name", "type": "String"},
        {"name": "tags", "type": "Vec<String>"}
      ]}]}"#,
    )
    .await
    .unwrap();

    let config = GenerateConfig::from_command(command(input, output.clone())).unwrap();
    generate_code(config, &Colors::new(false, Theme::Dark)).await.unwrap();

    let code = tokio::fs::read_to_string(&output).await.unwrap();
    assert!(code.starts_with("//! AUTO-GENERATED CODE - DO NOT EDIT!"));
    assert!(code.contains("pub struct PersonBuilder"));
    assert!(code.contains("pub fn add_tags"));
  }

  #[tokio::test]
  async fn test_generate_code_reports_schema_errors() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.json");
    let output = dir.path().join("bad.rs");
    tokio::fs::write(
      &input,
      r#"{"datatypes": [{"name": "Bad", "fields": [{"name": "items", "type": "Vec<i32>", "default": "vec![1]"}]}]}"#,
    )
    .await
    .unwrap();

    let config = GenerateConfig::from_command(command(input, output.clone())).unwrap();
    assert!(generate_code(config, &Colors::new(false, Theme::Dark)).await.is_err());
    assert!(!output.exists());
  }
}
