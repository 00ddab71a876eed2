use crate::config::DuplicateIds;
use serde::Serialize;
use std::collections::HashMap;

pub type DocId = u64;

/// Document frequency plus the ascending list of documents holding a term.
///
/// `document_frequency == postings.len()` whenever the entry is observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingsEntry {
    document_frequency: usize,
    postings: Vec<DocId>, // sorted ascending, non-decreasing
}

impl PostingsEntry {
    fn first(id: DocId) -> Self {
        Self { document_frequency: 1, postings: vec![id] }
    }

    pub fn document_frequency(&self) -> usize {
        self.document_frequency
    }

    pub fn postings(&self) -> &[DocId] {
        &self.postings
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.postings.binary_search(&id).is_ok()
    }

    /// Ids arriving in non-decreasing order append; anything else is placed by binary search.
    fn insert(&mut self, id: DocId) {
        match self.postings.last() {
            Some(&last) if last > id => {
                let at = self.postings.partition_point(|&p| p <= id);
                self.postings.insert(at, id);
            }
            _ => self.postings.push(id),
        }
        self.document_frequency += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvertedIndex {
    terms: HashMap<String, PostingsEntry>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, term: &str) -> Option<&PostingsEntry> {
        self.terms.get(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingsEntry)> + '_ {
        self.terms.iter().map(|(t, e)| (t.as_str(), e))
    }

    /// Record one posting of `id` under `term`. Returns false if the posting was
    /// suppressed because `duplicates` is `Merge` and the id is already present.
    pub(crate) fn add_posting(&mut self, term: &str, id: DocId, duplicates: DuplicateIds) -> bool {
        if let Some(entry) = self.terms.get_mut(term) {
            if duplicates == DuplicateIds::Merge && entry.contains(id) {
                return false;
            }
            entry.insert(id);
            return true;
        }
        self.terms.insert(term.to_owned(), PostingsEntry::first(id));
        true
    }
}
