use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::generator::orchestrator::DEFAULT_SUPPORT_CRATE;

#[derive(Parser, Debug)]
#[command(name = "datatype-gen")]
#[command(author, version, about = "Builder, value and partial type generator", styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a datatype schema
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate builders, values and partials from a datatype schema
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the JSON datatype schema
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the generated Rust code will be written
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// Visibility of generated types that do not declare their own (public, crate or file)
  #[arg(long, value_name = "VISIBILITY", default_value = "public")]
  pub visibility: String,

  /// Path generated code uses to reach the runtime support crate
  #[arg(long, value_name = "PATH", default_value = DEFAULT_SUPPORT_CRATE)]
  pub support_crate: String,

  /// Enable verbose output with per-datatype details
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every field with its resolved category, initial state and merge policy
  Fields {
    /// Path to the JSON datatype schema
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
