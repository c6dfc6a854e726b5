//! Run the MuPDF backend and subject parser against a real schedule PDF.
//!
//! Run with:
//!   SCHEDULE_PDF=/path/to/comprovante.pdf \
//!   cargo test -p schedule-pdf-mupdf --test sample_pdf -- --ignored --nocapture

use std::path::PathBuf;

use schedule_core::PdfBackend;
use schedule_pdf_mupdf::MupdfBackend;

fn sample_path() -> Option<PathBuf> {
    std::env::var_os("SCHEDULE_PDF").map(PathBuf::from)
}

#[test]
#[ignore]
fn extracts_subjects_from_sample() {
    let Some(path) = sample_path() else {
        eprintln!("SCHEDULE_PDF not set, skipping");
        return;
    };

    let backend = MupdfBackend::new();
    let text = backend.extract_first_page(&path).unwrap();
    assert!(!text.is_empty(), "first page has no text");

    let subjects = schedule_parsing::extract_schedule(&path, &backend).unwrap();
    for (code, subject) in subjects.codes().zip(subjects.iter()) {
        println!(
            "{code:>8}  {:<50} {:>4} {:>3}",
            subject.name, subject.tp, subject.max_absences
        );
    }
    assert!(!subjects.is_empty(), "no subjects parsed");
}
