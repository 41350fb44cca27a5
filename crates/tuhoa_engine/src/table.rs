//! Comma-separated text tables.
//!
//! Fields are separated by `,` and records by `\n` or `\r\n`. A field that
//! starts with `"` runs to the matching closing quote and may contain commas,
//! newlines and doubled quotes (`""` → `"`). Empty lines are skipped. A
//! leading UTF-8 byte-order mark is ignored.

use crate::error::EngineError;

/// Split delimited text into raw records.
pub fn parse_rows(content: &str) -> Result<Vec<Vec<String>>, EngineError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut quote_line = 0usize;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => {
                in_quotes = true;
                quote_line = line;
            }
            ',' => row.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                finish_row(&mut rows, &mut row, &mut field);
                line += 1;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(EngineError::TableParse(format!(
            "unterminated quoted field starting on line {quote_line}"
        )));
    }
    finish_row(&mut rows, &mut row, &mut field);
    Ok(rows)
}

fn finish_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>, field: &mut String) {
    row.push(std::mem::take(field));
    if row.len() == 1 && row[0].is_empty() {
        row.clear();
        return;
    }
    rows.push(std::mem::take(row));
}

/// Trimmed field `col` of a record, or `""` if the record is shorter.
pub fn field(record: &[String], col: usize) -> &str {
    record.get(col).map(|s| s.trim()).unwrap_or("")
}

/// A table whose first record is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl Table {
    /// Parse text with a header line. Header names are trimmed.
    pub fn parse(content: &str) -> Result<Self, EngineError> {
        let mut rows = parse_rows(content)?.into_iter();
        let headers = rows
            .next()
            .map(|h| h.into_iter().map(|s| s.trim().to_string()).collect())
            .unwrap_or_default();
        Ok(Self {
            headers,
            records: rows.collect(),
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Index of the first column named `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like [`Table::column`], failing with [`EngineError::MissingColumn`].
    pub fn require_column(&self, table: &'static str, name: &str) -> Result<usize, EngineError> {
        self.column(name).ok_or_else(|| EngineError::MissingColumn {
            table,
            column: name.to_string(),
        })
    }

    /// Data records (header excluded).
    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
