use crate::index::DocId;
use serde::Serialize;
use std::collections::HashMap;

/// Original text per document id, used only to render query results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStore {
    docs: HashMap<DocId, String>,
}

impl DocumentStore {
    pub fn new() -> Self { Self::default() }

    /// Last write wins. Returns the text that was replaced, if any.
    pub fn insert(&mut self, id: DocId, text: String) -> Option<String> {
        self.docs.insert(id, text)
    }

    pub fn text(&self, id: DocId) -> Option<&str> {
        self.docs.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
