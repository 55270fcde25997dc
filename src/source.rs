//! Document text sources.
//!
//! Extracting text from binary formats is left to external tools; a
//! [`TextSource`] only has to hand back the full decoded text.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AnalysisError, Result};

/// Anything that can produce the text of one document.
pub trait TextSource {
    fn extract(&self) -> Result<String>;
}

/// A UTF-8 text file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainTextFile {
    path: PathBuf,
}

impl PlainTextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for PlainTextFile {
    fn extract(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| AnalysisError::DocumentUnreadable {
            path: self.path.clone(),
            source,
        })
    }
}

/// Text already held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryText(pub String);

impl TextSource for InMemoryText {
    fn extract(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn extract(&self) -> Result<String> {
        (**self).extract()
    }
}

impl<T: TextSource + ?Sized> TextSource for Box<T> {
    fn extract(&self) -> Result<String> {
        (**self).extract()
    }
}

/// Pick a source for `path` by extension.
///
/// Only `.txt` files are read directly; PDF and other binary formats need an
/// external extractor and are rejected with
/// [`AnalysisError::UnsupportedDocument`].
pub fn open_document(path: impl AsRef<Path>) -> Result<Box<dyn TextSource>> {
    let path = path.as_ref();
    let is_text = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
    if is_text {
        Ok(Box::new(PlainTextFile::new(path)))
    } else {
        Err(AnalysisError::UnsupportedDocument {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_text_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Hello world.\nSecond line").unwrap();

        let source = open_document(file.path()).unwrap();
        assert_eq!(source.extract().unwrap(), "Hello world.\nSecond line");
    }

    #[test]
    fn test_rejects_pdf() {
        let err = open_document("report.pdf").err().unwrap();
        assert!(matches!(err, AnalysisError::UnsupportedDocument { .. }));

        let err = open_document("no_extension").err().unwrap();
        assert!(matches!(err, AnalysisError::UnsupportedDocument { .. }));
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert!(open_document("NOTES.TXT").is_ok());
    }

    #[test]
    fn test_missing_file() {
        let source = PlainTextFile::new("/no/such/file.txt");
        let err = source.extract().unwrap_err();
        assert!(matches!(err, AnalysisError::DocumentUnreadable { .. }));
    }

    #[test]
    fn test_in_memory() {
        let source = InMemoryText("abc".into());
        assert_eq!((&source).extract().unwrap(), "abc");
    }
}
