use std::path::Path;

use thiserror::Error;

pub mod extractor;
pub mod text_processing;

pub use extractor::SubjectExtractor;
pub use text_processing::{strip_cid_artifacts, title_case};
// Re-export domain types from core (canonical definitions live there)
pub use schedule_core::{BackendError, PdfBackend, Subject, SubjectList};

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("PDF has no pages")]
    NoPages,
    #[error("backend error: {0}")]
    Backend(BackendError),
}

impl From<BackendError> for ParsingError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::NoPages => ParsingError::NoPages,
            other => ParsingError::Backend(other),
        }
    }
}

/// Parse the subject table out of first-page text.
///
/// `None` and empty text both yield an empty list.
pub fn extract_subjects(first_page_text: Option<&str>) -> SubjectList {
    match first_page_text {
        Some(text) if !text.is_empty() => SubjectExtractor::new().extract(text),
        _ => SubjectList::new(),
    }
}

/// Extract the subject table from a schedule PDF using the given backend.
///
/// Pipeline:
/// 1. Extract the text of page one via `backend`
/// 2. Find the "RELAÇÃO DE DISCIPLINAS" marker
/// 3. Parse digit-led rows until the "OBS" footnote
pub fn extract_schedule(
    pdf_path: &Path,
    backend: &dyn PdfBackend,
) -> Result<SubjectList, ParsingError> {
    SubjectExtractor::new().extract_via_backend(pdf_path, backend)
}
