use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("PDF has no pages")]
    NoPages,
    #[error("page {index} out of range (document has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level text extraction step; turning page text
/// into subject records lives in `schedule_parsing::SubjectExtractor`.
pub trait PdfBackend: Send + Sync {
    /// Number of pages in the document.
    fn page_count(&self, path: &Path) -> Result<usize, BackendError>;

    /// Extract the text of a single page (0-based), one line per text line.
    fn extract_page_text(&self, path: &Path, index: usize) -> Result<String, BackendError>;

    /// Extract the text of the first page.
    ///
    /// Returns [`BackendError::NoPages`] for an empty document.
    fn extract_first_page(&self, path: &Path) -> Result<String, BackendError> {
        if self.page_count(path)? == 0 {
            return Err(BackendError::NoPages);
        }
        self.extract_page_text(path, 0)
    }
}
