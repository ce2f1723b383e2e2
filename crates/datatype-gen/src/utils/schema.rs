use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::generator::schema::SchemaFile;

/// Reads a JSON datatype schema from disk.
#[derive(Debug)]
pub struct SchemaLoader {
  path: PathBuf,
  content: Vec<u8>,
}

impl SchemaLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let content = tokio::fs::read(path)
      .await
      .with_context(|| format!("failed to read schema '{}'", path.display()))?;
    Ok(Self {
      path: path.to_path_buf(),
      content,
    })
  }

  /// Parses the schema, reporting the JSON path of the first invalid entry.
  pub fn parse(&self) -> anyhow::Result<SchemaFile> {
    parse_schema(&self.content).with_context(|| format!("invalid schema '{}'", self.path.display()))
  }
}

pub(crate) fn parse_schema(content: &[u8]) -> anyhow::Result<SchemaFile> {
  let deserializer = &mut serde_json::Deserializer::from_slice(content);
  serde_path_to_error::deserialize(deserializer).map_err(|err| {
    let path = err.path().to_string();
    anyhow::anyhow!("at '{path}': {}", err.into_inner())
  })
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[test]
  fn test_parse_schema_minimal() {
    let file = parse_schema(br#"{"datatypes": [{"name": "Point"}]}"#).unwrap();
    assert_eq!(file.datatypes.len(), 1);
    assert_eq!(file.datatypes[0].name, "Point");
    assert!(file.datatypes[0].to_builder);
  }

  #[test]
  fn test_parse_schema_reports_path() {
    let err = parse_schema(br#"{"datatypes": [{"name": "Point", "fields": [{"name": "x", "type": 3}]}]}"#).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("datatypes[0].fields[0].type"), "{message}");
  }

  #[test]
  fn test_parse_schema_rejects_unknown_keys() {
    let err = parse_schema(br#"{"datatypes": [], "extra": true}"#).unwrap_err();
    assert!(err.to_string().contains("extra"));
  }

  #[tokio::test]
  async fn test_schema_loader_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file
      .write_all(br#"{"datatypes": [{"name": "Person", "fields": [{"name": "name", "type": "String"}]}]}"#)
      .unwrap();

    let loader = SchemaLoader::open(file.path()).await.unwrap();
    let schema = loader.parse().unwrap();
    assert_eq!(schema.datatypes[0].fields[0].name, "name");
  }

  #[tokio::test]
  async fn test_schema_loader_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = SchemaLoader::open(&dir.path().join("missing.json")).await;
    assert!(result.unwrap_err().to_string().contains("failed to read schema"));
  }
}
