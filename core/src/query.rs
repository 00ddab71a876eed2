use crate::builder::IndexBuilder;
use crate::config::{IndexConfig, TermFolding};
use crate::index::{DocId, InvertedIndex, PostingsEntry};
use crate::record::Document;
use crate::store::DocumentStore;
use crate::tokenizer::query_term;
use serde::Serialize;
use std::cmp::Ordering;

/// Intersect two ascending id lists with a two-cursor merge in O(|a| + |b|).
///
/// The lagging cursor always advances; the loop ends only once one side has
/// no unread elements left. Repeated ids match pairwise.
pub fn intersect_sorted(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match<'a> {
    pub doc_id: DocId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Lookup<'a> {
    Found { document_frequency: usize, matches: Vec<Match<'a>> },
    NotFound,
}

impl Lookup<'_> {
    pub fn doc_ids(&self) -> Vec<DocId> {
        match self {
            Lookup::Found { matches, .. } => matches.iter().map(|m| m.doc_id).collect(),
            Lookup::NotFound => Vec::new(),
        }
    }
}

/// Which operand of a two-term query was missing from the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Intersection<'a> {
    Matches { matches: Vec<Match<'a>> },
    NoMatch,
    TermNotFound { side: Side, term: String },
}

impl Intersection<'_> {
    pub fn doc_ids(&self) -> Vec<DocId> {
        match self {
            Intersection::Matches { matches } => matches.iter().map(|m| m.doc_id).collect(),
            _ => Vec::new(),
        }
    }
}

/// Finished, read-only index plus document store. Safe to share between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndex {
    index: InvertedIndex,
    store: DocumentStore,
    folding: TermFolding,
}

impl SearchIndex {
    pub(crate) fn from_parts(index: InvertedIndex, store: DocumentStore, folding: TermFolding) -> Self {
        Self { index, store, folding }
    }

    pub fn from_documents<I>(docs: I, config: IndexConfig) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        let mut builder = IndexBuilder::new(config);
        for doc in docs {
            builder.ingest(doc);
        }
        builder.finish().0
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn folding(&self) -> TermFolding {
        self.folding
    }

    fn entry(&self, term: &str) -> Option<&PostingsEntry> {
        let key = query_term(term, self.folding)?;
        self.index.get(&key)
    }

    fn with_text(&self, ids: &[DocId]) -> Vec<Match<'_>> {
        ids.iter().map(|&doc_id| Match { doc_id, text: self.store.text(doc_id) }).collect()
    }

    pub fn lookup(&self, term: &str) -> Lookup<'_> {
        match self.entry(term) {
            Some(entry) => Lookup::Found {
                document_frequency: entry.document_frequency(),
                matches: self.with_text(entry.postings()),
            },
            None => Lookup::NotFound,
        }
    }

    /// Boolean AND of two terms. The left term is checked first when both are missing.
    pub fn intersect(&self, term_a: &str, term_b: &str) -> Intersection<'_> {
        let Some(a) = self.entry(term_a) else {
            return Intersection::TermNotFound { side: Side::Left, term: term_a.to_string() };
        };
        let Some(b) = self.entry(term_b) else {
            return Intersection::TermNotFound { side: Side::Right, term: term_b.to_string() };
        };
        let ids = intersect_sorted(a.postings(), b.postings());
        tracing::debug!(left = term_a, right = term_b, hits = ids.len(), "intersected postings");
        if ids.is_empty() {
            Intersection::NoMatch
        } else {
            Intersection::Matches { matches: self.with_text(&ids) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_handles_equal_tails() {
        assert_eq!(intersect_sorted(&[1, 4, 9], &[2, 9]), vec![9]);
        assert_eq!(intersect_sorted(&[9], &[1, 2, 3, 9]), vec![9]);
    }

    #[test]
    fn merge_keeps_going_after_one_side_stalls() {
        // the early-exit variant stops once `a` sits on its last element
        assert_eq!(intersect_sorted(&[1, 7], &[2, 3, 4, 5, 6, 7]), vec![7]);
    }

    #[test]
    fn merge_with_empty() {
        assert!(intersect_sorted(&[], &[1, 2]).is_empty());
        assert!(intersect_sorted(&[1, 2], &[]).is_empty());
    }

    #[test]
    fn merge_pairs_repeated_ids() {
        assert_eq!(intersect_sorted(&[5, 5], &[5, 5]), vec![5, 5]);
        assert_eq!(intersect_sorted(&[5, 5], &[5]), vec![5]);
    }

    #[test]
    fn folded_queries_use_folded_keys() {
        let config = IndexConfig { folding: TermFolding::Folded, ..Default::default() };
        let idx = SearchIndex::from_documents(
            vec![Document::new(1, "Stuttgart: #Bahn"), Document::new(2, "stuttgart")],
            config,
        );
        assert_eq!(idx.folding(), TermFolding::Folded);
        assert_eq!(idx.lookup("STUTTGART").doc_ids(), vec![1, 2]);
        assert_eq!(idx.intersect("stuttgart", "bahn!").doc_ids(), vec![1]);
        assert_eq!(idx.lookup("!!!"), Lookup::NotFound);
    }
}
