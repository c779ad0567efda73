/// Console formatting module - Pure rendering concerns for tabular output
///
/// This module handles:
/// - Column sizing by display width (wide Unicode characters count double)
/// - Padding cells to a column width
/// - Writing header, rule and data rows
///
/// It accepts pre-formatted cell text from the command layer and renders it.
/// `TableWriter` writes to any `std::io::Write` destination, so the same
/// code serves stdout and string buffers.
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Gap between columns
const COLUMN_GAP: &str = "  ";

/// Writer for table output
pub struct TableWriter<W: Write> {
    writer: W,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a headed table: header row, dashed rule, then one line per row
    pub fn write_table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
        let widths = column_widths(headers, rows);

        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        self.write_row(&header_cells, &widths)?;

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        self.write_row(&rule, &widths)?;

        for row in rows {
            self.write_row(row, &widths)?;
        }
        Ok(())
    }

    /// Write one row, padding every cell to its column width
    fn write_row(&mut self, cells: &[String], widths: &[usize]) -> io::Result<()> {
        let line = widths
            .iter()
            .enumerate()
            .map(|(i, width)| pad_to_width(cells.get(i).map(String::as_str).unwrap_or(""), *width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        writeln!(self.writer, "{}", line.trim_end())
    }

    /// Consume the writer, returning the destination
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Widest display width per column, headers included
pub fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let w = display_width(cell);
            match widths.get_mut(i) {
                Some(current) => *current = (*current).max(w),
                None => widths.push(w),
            }
        }
    }
    widths
}

/// Render a headed table to a string
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut writer = TableWriter::new(Vec::new());
    // Writing into a Vec cannot fail
    let _ = writer.write_table(headers, rows);
    String::from_utf8_lossy(&writer.into_inner()).into_owned()
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad string with spaces to at least `width` display columns
pub fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
