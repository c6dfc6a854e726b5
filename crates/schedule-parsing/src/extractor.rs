use std::path::Path;

use schedule_core::{PdfBackend, Subject, SubjectList};

use crate::ParsingError;
use crate::text_processing::{parse_absences, strip_cid_artifacts, title_case};

/// Header lines that open the subject table (accented and plain spellings).
pub const START_MARKERS: &[&str] = &["RELAÇÃO DE DISCIPLINAS", "RELACAO DE DISCIPLINAS"];

/// Footnote prefix that closes the subject table.
pub const STOP_PREFIX: &str = "OBS";

/// A data row needs code, class, name (possibly empty) and the five trailing columns.
pub const MIN_ROW_TOKENS: usize = 6;

/// Where the scan is relative to the subject table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeMarker,
    Scanning,
}

/// Line-oriented scanner for the subject table on a schedule's first page.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectExtractor;

impl SubjectExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Scan first-page text and collect subject rows keyed by code.
    ///
    /// Rows are only read after the marker line and until the first line
    /// starting with the stop prefix. Malformed rows are skipped.
    pub fn extract(&self, first_page_text: &str) -> SubjectList {
        let mut subjects = SubjectList::new();
        let mut state = ScanState::BeforeMarker;

        for line in first_page_text.split('\n') {
            if is_start_marker(line) {
                state = ScanState::Scanning;
                continue;
            }

            let trimmed = line.trim();
            if state == ScanState::BeforeMarker || trimmed.is_empty() {
                continue;
            }

            // Must precede the digit filter: "OBS" lines never start with a digit.
            if trimmed.starts_with(STOP_PREFIX) {
                break;
            }

            if !starts_with_digit(trimmed) {
                continue;
            }

            if let Some(subject) = self.parse_row(trimmed) {
                subjects.upsert(subject);
            }
        }

        subjects
    }

    /// Run the backend on the PDF's first page and scan the result.
    pub fn extract_via_backend(
        &self,
        pdf_path: &Path,
        backend: &dyn PdfBackend,
    ) -> Result<SubjectList, ParsingError> {
        let text = backend.extract_first_page(pdf_path)?;
        let subjects = self.extract(&text);
        tracing::debug!(
            path = %pdf_path.display(),
            subjects = subjects.len(),
            "parsed first page"
        );
        Ok(subjects)
    }

    /// Split a trimmed data row into a [`Subject`].
    ///
    /// Columns are located from both ends so names may span any number of
    /// tokens: `code class name... _ tp _ _ absences`.
    fn parse_row(&self, row: &str) -> Option<Subject> {
        let tokens: Vec<&str> = row.split_whitespace().collect();
        let n = tokens.len();
        if n < MIN_ROW_TOKENS {
            return None;
        }

        // Empty for rows of 6 or 7 tokens.
        let name_tokens = tokens.get(2..n - 5).unwrap_or(&[]);
        let name = title_case(&name_tokens.join(" "));
        let tp = tokens[n - 4];

        let absences = strip_cid_artifacts(tokens[n - 1]);

        if name.is_empty() || tp.is_empty() {
            return None;
        }

        Some(Subject {
            code: tokens[0].to_string(),
            name,
            tp: tp.to_string(),
            max_absences: parse_absences(&absences),
        })
    }
}

fn is_start_marker(line: &str) -> bool {
    START_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Any Unicode numeric character counts, not only ASCII `0-9`.
fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_numeric)
}
