//! Rebuild visual rows from MuPDF text lines.
//!
//! MuPDF splits widely spaced table cells into separate lines (often separate
//! blocks), so a schedule row arrives as several fragments. Fragments whose
//! vertical extents line up are merged back into one row, left to right.

/// Vertical distance (in points) between two tops that still counts as one row.
pub const ROW_TOLERANCE: f32 = 3.0;

/// A text line with the part of its bounding box that layout needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBox {
    pub x0: f32,
    pub y0: f32,
    pub y1: f32,
    pub text: String,
}

impl LineBox {
    pub fn new(x0: f32, y0: f32, y1: f32, text: impl Into<String>) -> Self {
        Self {
            x0,
            y0,
            y1,
            text: text.into(),
        }
    }

    fn height(&self) -> f32 {
        (self.y1 - self.y0).max(0.0)
    }
}

struct Row {
    top: f32,
    bottom: f32,
    cells: Vec<LineBox>,
}

impl Row {
    fn new(line: LineBox) -> Self {
        Self {
            top: line.y0,
            bottom: line.y1,
            cells: vec![line],
        }
    }

    /// Same row if the tops are within tolerance or the boxes share at
    /// least half of the shorter one's height.
    fn accepts(&self, line: &LineBox) -> bool {
        if (line.y0 - self.top).abs() <= ROW_TOLERANCE {
            return true;
        }
        let overlap = self.bottom.min(line.y1) - self.top.max(line.y0);
        let shorter = (self.bottom - self.top).max(0.0).min(line.height());
        shorter > 0.0 && overlap >= shorter * 0.5
    }

    fn into_text(mut self) -> String {
        self.cells.sort_by(|a, b| a.x0.total_cmp(&b.x0));
        self.cells
            .iter()
            .map(|cell| cell.text.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Group lines into visual rows, top to bottom, cells ordered by x.
///
/// Rows are joined with `\n`; cells within a row with a single space.
pub fn merge_rows(mut lines: Vec<LineBox>) -> String {
    lines.retain(|line| !line.text.trim().is_empty());
    lines.sort_by(|a, b| a.y0.total_cmp(&b.y0).then(a.x0.total_cmp(&b.x0)));

    let mut rows: Vec<Row> = Vec::new();
    for line in lines {
        match rows.last_mut() {
            Some(row) if row.accepts(&line) => row.cells.push(line),
            _ => rows.push(Row::new(line)),
        }
    }

    rows.into_iter()
        .map(Row::into_text)
        .collect::<Vec<_>>()
        .join("\n")
}
