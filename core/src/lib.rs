//! Term-level inverted index over short tab-separated documents, with
//! single-term listing and two-term boolean AND.

pub mod builder;
pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod record;
pub mod source;
pub mod store;
pub mod tokenizer;

pub use builder::{BuildReport, IndexBuilder};
pub use config::{DuplicateIds, IndexConfig, RecordLayout, TermFolding};
pub use error::{Error, RecordError, Result};
pub use index::{DocId, InvertedIndex, PostingsEntry};
pub use query::{intersect_sorted, Intersection, Lookup, Match, SearchIndex, Side};
pub use record::{parse_record, Document};
pub use store::DocumentStore;
