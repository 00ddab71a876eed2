use crate::builder::{BuildReport, IndexBuilder};
use crate::config::IndexConfig;
use crate::error::Result;
use crate::query::SearchIndex;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

/// A file is its own corpus; a directory contributes every non-hidden regular
/// file below it, in sorted path order.
pub fn corpus_files<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("corpus path {} does not exist", path.display()),
        )
        .into());
    }
    let mut files = Vec::new();
    let walker = WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()));
    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Build a finished index from a corpus file or directory, reading each file to the end.
pub fn build_from_path<P: AsRef<Path>>(path: P, config: IndexConfig) -> Result<(SearchIndex, BuildReport)> {
    let files = corpus_files(path.as_ref())?;
    tracing::info!(path = %path.as_ref().display(), files = files.len(), "indexing corpus");
    let mut builder = IndexBuilder::new(config);
    for file in files {
        let before = builder.report().malformed;
        let reader = BufReader::new(File::open(&file)?);
        builder.ingest_reader(reader)?;
        tracing::debug!(
            file = %file.display(),
            malformed = builder.report().malformed - before,
            "ingested corpus file"
        );
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn single_file_is_its_own_corpus() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("tweets");
        fs::write(&p, "a\t1\tcat\n").unwrap();
        assert_eq!(corpus_files(&p).unwrap(), vec![p]);
    }

    #[test]
    fn directory_walk_is_sorted_and_skips_hidden() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.tsv"), "").unwrap();
        fs::write(dir.path().join("a.tsv"), "").unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();
        fs::write(dir.path().join("sub/c.tsv"), "").unwrap();
        let names: Vec<String> = corpus_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(names, vec!["a.tsv", "b.tsv", "sub/c.tsv"]);
    }

    #[test]
    fn builds_from_directory_of_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.tsv"), "d\t1\tcat dog\r\n\r\nbad line\r\n").unwrap();
        fs::write(dir.path().join("b.tsv"), "d\t2\tcat\r\n").unwrap();
        let (idx, report) = build_from_path(dir.path(), IndexConfig::default()).unwrap();
        assert_eq!(report.records, 3);
        assert_eq!(report.indexed, 2);
        assert_eq!(report.malformed, 1);
        assert_eq!(report.terms, 2);
        assert_eq!(report.documents, 2);
        assert_eq!(idx.lookup("cat").doc_ids(), vec![1, 2]);
        assert_eq!(idx.lookup("dog").doc_ids(), vec![1]);
        assert_eq!(idx.store().text(1), Some("cat dog"));
        assert_eq!(idx.intersect("cat", "dog").doc_ids(), vec![1]);
    }

    #[test]
    fn build_from_missing_path_fails() {
        let dir = tempdir().unwrap();
        let err = build_from_path(dir.path().join("gone"), IndexConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn missing_path_is_not_found() {
        let dir = tempdir().unwrap();
        match corpus_files(dir.path().join("nope")) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected {other:?}"),
        }
    }
}
