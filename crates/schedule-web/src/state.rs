use std::sync::Arc;

use schedule_core::PdfBackend;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub backend: Arc<dyn PdfBackend>,
}

impl AppState {
    pub fn new(backend: Arc<dyn PdfBackend>) -> Self {
        Self { backend }
    }
}
