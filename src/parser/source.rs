//! Source documents for extraction: PDF files and pre-extracted text

use crate::Result;
use anyhow::Context;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Form feed separates pages in pre-extracted text files
const PAGE_BREAK: char = '\u{000C}';

/// Text of one source file, page by page
#[derive(Debug, Clone, Default)]
pub struct SourceDocument {
    /// File name used in log lines
    pub name: String,
    pub pages: Vec<String>,
    /// Pages that could not be read
    pub warnings: Vec<String>,
}

impl SourceDocument {
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            pages: text.split(PAGE_BREAK).map(str::to_string).collect(),
            warnings: Vec::new(),
        }
    }

    pub fn char_count(&self) -> usize {
        self.pages.iter().map(|p| p.chars().count()).sum()
    }
}

/// List extractable files (*.pdf, *.txt) in a directory, sorted by name
pub fn discover_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Source directory not found: {}", dir.display());
    }

    let mut files = Vec::new();
    for ext in ["pdf", "txt"] {
        let pattern = dir.join(format!("*.{}", ext));
        let pattern = pattern.to_string_lossy();
        for entry in glob::glob(&pattern)? {
            files.push(entry?);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read one source file, dispatching on its extension
pub fn read_source(path: &Path) -> Result<SourceDocument> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let is_pdf = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        read_pdf(path, name)
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read text file: {}", path.display()))?;
        Ok(SourceDocument::from_text(name, &text))
    }
}

fn read_pdf(path: &Path, name: String) -> Result<SourceDocument> {
    let doc = Document::load(path)
        .with_context(|| format!("Failed to load PDF: {}", path.display()))?;

    let mut source = SourceDocument {
        name,
        ..SourceDocument::default()
    };

    for page_number in doc.get_pages().keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(text) => source.pages.push(text),
            Err(e) => source
                .warnings
                .push(format!("Page {} unreadable: {}", page_number, e)),
        }
    }

    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_sorted_pdf_and_txt() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "x").unwrap();
        fs::write(temp_dir.path().join("a.pdf"), "x").unwrap();
        fs::write(temp_dir.path().join("c.json"), "x").unwrap();

        let files = discover_sources(temp_dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.txt"]);
    }

    #[test]
    fn test_discover_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(discover_sources(&temp_dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_text_source_splits_pages() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dump.txt");
        fs::write(&path, "page one\u{000C}page two").unwrap();

        let source = read_source(&path).unwrap();
        assert_eq!(source.name, "dump.txt");
        assert_eq!(source.pages, vec!["page one", "page two"]);
        assert_eq!(source.char_count(), 16);
    }

    #[test]
    fn test_corrupt_pdf_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.pdf");
        fs::write(&path, "this is not a pdf").unwrap();

        let err = read_source(&path).unwrap_err();
        assert!(err.to_string().contains("broken.pdf"));
    }
}
