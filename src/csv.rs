// src/csv.rs
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Delimited-text parser (quotes, doubled-quote escapes, CRLF tolerant).
/// Blank lines are skipped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') { chars.next(); }
                row.push(take(&mut field));
                flush_row(&mut rows, &mut row);
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without newline; unterminated quotes keep what they have.
    row.push(field);
    flush_row(&mut rows, &mut row);
    rows
}

fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.len() == 1 && row[0].is_empty() {
        row.clear();
    } else {
        rows.push(take(row));
    }
}

/* ---------------- Header-indexed table ---------------- */

/// First row is the header; lookups are by column name.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn parse(text: &str, sep: char) -> Self {
        let mut rows = parse_rows(text, sep);
        if rows.is_empty() {
            return Self::default();
        }
        let headers = rows.remove(0).into_iter().map(|h| s!(h.trim())).collect();
        Self { headers, rows }
    }

    /// Column index by exact (trimmed) header name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell by row and optional column; short rows read as empty.
    pub fn cell<'a>(&'a self, row: &'a [String], col: Option<usize>) -> &'a str {
        col.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
    }
}
