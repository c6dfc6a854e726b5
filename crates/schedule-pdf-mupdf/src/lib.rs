use std::path::Path;

use mupdf::{Document, TextPageFlags};

use schedule_core::{BackendError, PdfBackend};

pub mod layout;

pub use layout::{LineBox, merge_rows};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate isolates the mupdf dependency (AGPL-3.0) so that the parsing
/// crates do not transitively depend on it.
///
/// Page text is rebuilt row by row from the bounding boxes of MuPDF's
/// structured text lines (see [`merge_rows`]), with typographic ligatures
/// expanded.
#[derive(Debug, Default, Clone, Copy)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

fn open(path: &Path) -> Result<Document, BackendError> {
    let path_str = path
        .to_str()
        .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;
    Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))
}

fn count_pages(document: &Document) -> Result<usize, BackendError> {
    let count = document
        .page_count()
        .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
    Ok(usize::try_from(count).unwrap_or(0))
}

fn page_text(document: &Document, index: usize) -> Result<String, BackendError> {
    let count = count_pages(document)?;
    if index >= count {
        return Err(BackendError::PageOutOfRange { index, count });
    }

    let page_no =
        i32::try_from(index).map_err(|e| BackendError::ExtractionError(e.to_string()))?;
    let page = document
        .load_page(page_no)
        .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
    let text_page = page
        .to_text_page(TextPageFlags::empty())
        .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

    let mut lines = Vec::new();
    for block in text_page.blocks() {
        for line in block.lines() {
            let bounds = line.bounds();
            let text: String = line
                .chars()
                .map(|c| c.char().unwrap_or('\u{FFFD}'))
                .collect();
            lines.push(LineBox::new(bounds.x0, bounds.y0, bounds.y1, text));
        }
    }

    Ok(expand_ligatures(&merge_rows(lines)))
}

/// Expand common typographic ligatures found in PDFs.
pub fn expand_ligatures(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace(['\u{FB05}', '\u{FB06}'], "st")
}

impl PdfBackend for MupdfBackend {
    fn page_count(&self, path: &Path) -> Result<usize, BackendError> {
        count_pages(&open(path)?)
    }

    fn extract_page_text(&self, path: &Path, index: usize) -> Result<String, BackendError> {
        page_text(&open(path)?, index)
    }

    fn extract_first_page(&self, path: &Path) -> Result<String, BackendError> {
        let document = open(path)?;
        let count = count_pages(&document)?;
        tracing::debug!(path = %path.display(), pages = count, "opened PDF");
        if count == 0 {
            return Err(BackendError::NoPages);
        }
        page_text(&document, 0)
    }
}
