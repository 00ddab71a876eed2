use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Where the id and text live inside one delimited input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordLayout {
    pub delimiter: char,
    /// Zero-based field holding the numeric document id.
    pub id_field: usize,
    /// Records with fewer fields than this are malformed. The text is always the last field.
    pub min_fields: usize,
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self { delimiter: '\t', id_field: 1, min_fields: 2 }
    }
}

/// How raw tokens become index terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermFolding {
    /// Terms are exactly the whitespace-separated tokens.
    #[default]
    Verbatim,
    /// NFKC, lowercase, strip the `[newline]` marker and ASCII punctuation.
    Folded,
}

/// What happens when the same document id is ingested more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIds {
    /// Every ingest adds its own postings, so df counts ingest events.
    #[default]
    Additive,
    /// A term never records the same id twice; df counts distinct ids.
    Merge,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub layout: RecordLayout,
    pub folding: TermFolding,
    pub duplicates: DuplicateIds,
}

impl IndexConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = File::open(path.as_ref())?;
        let config: IndexConfig = serde_json::from_reader(BufReader::new(f))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.layout.min_fields <= self.layout.id_field {
            return Err(Error::Config(format!(
                "min_fields ({}) must exceed id_field ({})",
                self.layout.min_fields, self.layout.id_field
            )));
        }
        Ok(())
    }
}
