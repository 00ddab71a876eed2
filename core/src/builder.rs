use crate::config::IndexConfig;
use crate::error::{Error, Result};
use crate::index::InvertedIndex;
use crate::query::SearchIndex;
use crate::record::{parse_record, Document};
use crate::store::DocumentStore;
use crate::tokenizer::terms;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::io::BufRead;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Raw lines handed to `ingest_line`; `ingest_reader` drops blank lines before that.
    /// Documents passed straight to `ingest` are not counted here.
    pub records: usize,
    pub indexed: usize,
    pub malformed: usize,
    /// Distinct terms in the finished index.
    pub terms: usize,
    /// Distinct document ids in the store.
    pub documents: usize,
}

/// Accumulates the inverted index and document store in a single pass.
pub struct IndexBuilder {
    config: IndexConfig,
    index: InvertedIndex,
    store: DocumentStore,
    report: BuildReport,
}

impl IndexBuilder {
    pub fn new(config: IndexConfig) -> Self {
        Self {
            config,
            index: InvertedIndex::new(),
            store: DocumentStore::new(),
            report: BuildReport::default(),
        }
    }

    /// The index as built so far.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Store the text and add one posting per distinct term of the document.
    pub fn ingest(&mut self, doc: Document) {
        let Document { id, text } = doc;
        let mut seen: HashSet<Cow<'_, str>> = HashSet::new();
        for term in terms(&text, self.config.folding) {
            if seen.contains(&term) {
                continue;
            }
            self.index.add_posting(&term, id, self.config.duplicates);
            seen.insert(term);
        }
        drop(seen);
        self.store.insert(id, text);
        self.report.indexed += 1;
    }

    /// Parse and ingest one raw line. A malformed line is counted and returned
    /// as [`Error::MalformedRecord`]; the builder stays usable.
    pub fn ingest_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        self.report.records += 1;
        match parse_record(line, &self.config.layout) {
            Ok(doc) => {
                self.ingest(doc);
                Ok(())
            }
            Err(source) => {
                self.report.malformed += 1;
                tracing::debug!(line = line_no, error = %source, "skipping malformed record");
                Err(Error::MalformedRecord { line: line_no, source })
            }
        }
    }

    /// Ingest every line until end of input. Blank lines are ignored, malformed
    /// records are skipped, and only I/O failures abort.
    pub fn ingest_reader<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }
            match self.ingest_line(line_no, &line) {
                Ok(()) => {}
                Err(e) if e.is_malformed_record() => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    pub fn finish(self) -> (SearchIndex, BuildReport) {
        let mut report = self.report;
        report.terms = self.index.len();
        report.documents = self.store.len();
        if report.malformed > 0 {
            tracing::warn!(malformed = report.malformed, "skipped malformed records");
        }
        tracing::info!(
            records = report.records,
            indexed = report.indexed,
            num_terms = report.terms,
            num_docs = report.documents,
            "index build complete"
        );
        let index = SearchIndex::from_parts(self.index, self.store, self.config.folding);
        (index, report)
    }
}
