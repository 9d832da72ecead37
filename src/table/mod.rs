//! Tabular parsing of command and file output.
//!
//! OS utilities print loosely structured tables: `/etc/group` is
//! colon-delimited, `/proc/net/tcp` is whitespace-aligned, and
//! `docker ps -a` separates columns with runs of spaces while its fields
//! may contain single spaces themselves. This module turns such text into
//! addressable rows and columns.
//!
//! - [`tokenize()`] - Split text into a [`Table`] under a [`Separator`] policy
//! - [`column()`] - Pull one column out of a [`Table`]
//!
//! # Example
//!
//! ```
//! use hostcheck::table::{tokenize, Separator};
//!
//! let text = "REPOSITORY   TAG\nubuntu       latest\nmy app       v1\n";
//! let table = tokenize(text, &Separator::newline(), &Separator::RunOfWhitespace);
//! assert_eq!(table.column(0, true), vec!["ubuntu", "my app"]);
//! ```

pub mod column;
pub mod tokenize;

pub use column::column;
pub use tokenize::{tokenize, Separator};

/// An ordered sequence of column values.
pub type Row = Vec<String>;

/// An ordered sequence of rows, in source order.
///
/// Rows are not required to have the same length. Accessing a column past
/// the end of a row yields `None` rather than wrapping or panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create a table from already split rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// All rows, in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop every row with fewer than `min` fields.
    ///
    /// Guards against blank lines, title lines and truncated entries.
    pub fn retain_min_fields(mut self, min: usize) -> Self {
        self.rows.retain(|row| row.len() >= min);
        self
    }

    /// Rows after the header row (all but the first).
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or_default()
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        Table::new(
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn retain_min_fields_drops_short_rows() {
        let t = table(&[&["wheel", "x", "10", ""], &[""], &["bad", "x"]]).retain_min_fields(4);
        assert_eq!(t.len(), 1);
        assert_eq!(t.rows()[0][0], "wheel");
    }

    #[test]
    fn data_rows_skips_header() {
        let t = table(&[&["NAME"], &["one"], &["two"]]);
        assert_eq!(t.data_rows().len(), 2);
        assert_eq!(t.data_rows()[0][0], "one");
    }

    #[test]
    fn data_rows_of_empty_table_is_empty() {
        assert!(Table::default().data_rows().is_empty());
    }
}
