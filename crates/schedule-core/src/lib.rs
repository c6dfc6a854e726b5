pub mod backend;
pub mod mock;
pub mod subject;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};
pub use subject::{Subject, SubjectList};
