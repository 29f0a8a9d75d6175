//! The in-memory course collection and its loaded flag.

use crate::course::Course;
use crate::error::LoadError;
use crate::loader;
use log::{info, warn};
use std::path::Path;

/// Result of asking the catalog to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records were read; carries how many.
    Loaded(usize),
    /// The catalog was already loaded, nothing was read.
    AlreadyLoaded,
}

/// In-memory course collection plus the flag gating queries on it.
///
/// A catalog starts empty and unloaded. It is loaded at most once; a failed load
/// leaves it exactly as it was, so the caller can retry.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<Course>,
    loaded: bool,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn courses(&self) -> &[Course] {
        &self.records
    }

    /// Load records from `path` unless the catalog is already loaded.
    ///
    /// Records are swapped in only after the whole file parsed.
    pub fn load_from(&mut self, path: &Path) -> Result<LoadOutcome, LoadError> {
        if self.loaded {
            return Ok(LoadOutcome::AlreadyLoaded);
        }

        match loader::load(path) {
            Ok(records) => {
                info!("loaded {} courses from {}", records.len(), path.display());
                self.records = records;
                self.loaded = true;
                Ok(LoadOutcome::Loaded(self.records.len()))
            }
            Err(err) => {
                warn!("course data load failed: {err}");
                Err(err)
            }
        }
    }

    /// `(id, title)` pairs in catalog order.
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records.iter().map(|course| (course.id(), course.title()))
    }

    /// First course whose id equals `id` exactly.
    pub fn find(&self, id: &str) -> Option<&Course> {
        self.records.iter().find(|course| course.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn data_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        write!(file, "{content}").expect("write temp file");
        file
    }

    #[test]
    fn test_new_catalog_is_empty_and_unloaded() {
        let catalog = Catalog::new();
        assert!(!catalog.is_loaded());
        assert!(catalog.is_empty());
        assert_eq!(catalog.list().count(), 0);
    }

    #[test]
    fn test_load_then_list_in_file_order() {
        let file = data_file("CS100,Intro to CS\nCS101,Data Structures,CS100\n");
        let mut catalog = Catalog::new();

        assert_eq!(catalog.load_from(file.path()).unwrap(), LoadOutcome::Loaded(2));
        assert!(catalog.is_loaded());

        let listed: Vec<(&str, &str)> = catalog.list().collect();
        assert_eq!(
            listed,
            [("CS100", "Intro to CS"), ("CS101", "Data Structures")]
        );
    }

    #[test]
    fn test_second_load_is_noop() {
        let file = data_file("CS100,Intro to CS\n");
        let mut catalog = Catalog::new();
        catalog.load_from(file.path()).unwrap();

        let other = data_file("CS900,Other\nCS901,Other Again\n");
        assert_eq!(
            catalog.load_from(other.path()).unwrap(),
            LoadOutcome::AlreadyLoaded
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.courses()[0].id(), "CS100");
    }

    #[test]
    fn test_malformed_load_leaves_catalog_empty_and_unloaded() {
        let file = data_file("CS100,Intro to CS\nbroken\n");
        let mut catalog = Catalog::new();

        let err = catalog.load_from(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { .. }));
        assert!(!catalog.is_loaded());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_missing_source_keeps_unloaded_and_allows_retry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courselist.csv");
        let mut catalog = Catalog::new();

        let err = catalog.load_from(&path).unwrap_err();
        assert!(matches!(err, LoadError::SourceUnavailable { .. }));
        assert!(!catalog.is_loaded());

        std::fs::write(&path, "CS100,Intro to CS\n").unwrap();
        assert_eq!(catalog.load_from(&path).unwrap(), LoadOutcome::Loaded(1));
    }

    #[test]
    fn test_find_returns_first_match() {
        let file = data_file("CS100,First\nCS101,Other\nCS100,Duplicate\n");
        let mut catalog = Catalog::new();
        catalog.load_from(file.path()).unwrap();

        assert_eq!(catalog.find("CS100").map(|c| c.title()), Some("First"));
        assert!(catalog.find("cs100").is_none());
        assert!(catalog.find("CS999").is_none());
    }

    #[test]
    fn test_find_renders_single_prerequisite() {
        let file = data_file("CS101,Intro,CS100\n");
        let mut catalog = Catalog::new();
        catalog.load_from(file.path()).unwrap();

        let course = catalog.find("CS101").unwrap();
        assert!(course.details().ends_with("Prerequisites: CS100"));
    }
}
