//! Mock PDF backend for testing.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, PdfBackend};

/// A configurable outcome for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// A document with these page texts.
    Pages(Vec<String>),
    /// The document cannot be opened.
    OpenError(String),
    /// Text extraction fails after the document opens.
    ExtractionError(String),
}

/// A hand-rolled mock implementing [`PdfBackend`] without touching the file.
///
/// Counts page-text extractions via [`call_count()`](MockBackend::call_count).
pub struct MockBackend {
    response: MockResponse,
    call_count: AtomicUsize,
}

impl MockBackend {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            call_count: AtomicUsize::new(0),
        }
    }

    /// A single-page document with the given text.
    pub fn single_page(text: &str) -> Self {
        Self::new(MockResponse::Pages(vec![text.to_string()]))
    }

    /// A document with zero pages.
    pub fn empty() -> Self {
        Self::new(MockResponse::Pages(Vec::new()))
    }

    /// Number of times page text was extracted.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl PdfBackend for MockBackend {
    fn page_count(&self, _path: &Path) -> Result<usize, BackendError> {
        match &self.response {
            MockResponse::Pages(pages) => Ok(pages.len()),
            MockResponse::OpenError(msg) => Err(BackendError::OpenError(msg.clone())),
            MockResponse::ExtractionError(_) => Ok(1),
        }
    }

    fn extract_page_text(&self, _path: &Path, index: usize) -> Result<String, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            MockResponse::Pages(pages) => {
                pages
                    .get(index)
                    .cloned()
                    .ok_or(BackendError::PageOutOfRange {
                        index,
                        count: pages.len(),
                    })
            }
            MockResponse::OpenError(msg) => Err(BackendError::OpenError(msg.clone())),
            MockResponse::ExtractionError(msg) => {
                Err(BackendError::ExtractionError(msg.clone()))
            }
        }
    }
}
