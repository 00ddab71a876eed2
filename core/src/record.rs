use crate::config::RecordLayout;
use crate::error::RecordError;
use crate::index::DocId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: DocId,
    pub text: String,
}

impl Document {
    pub fn new(id: DocId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}

/// Parse one delimited line. The id comes from `layout.id_field`, the text is the last field.
pub fn parse_record(line: &str, layout: &RecordLayout) -> Result<Document, RecordError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields: Vec<&str> = line.split(layout.delimiter).collect();
    let required = layout.min_fields.max(layout.id_field.saturating_add(1));
    if fields.len() < required {
        return Err(RecordError::MissingFields { found: fields.len(), required });
    }
    let raw_id = fields[layout.id_field].trim();
    let id = raw_id
        .parse::<DocId>()
        .map_err(|source| RecordError::InvalidId { value: raw_id.to_string(), source })?;
    // `fields` has at least `required >= 1` entries here
    let text = fields[fields.len() - 1];
    Ok(Document::new(id, text))
}
