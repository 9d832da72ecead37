//! Column extraction.

use super::Table;

/// Values at `index` from every row of `table`, in row order.
///
/// With `skip_header` the first row is excluded unconditionally. Rows too
/// short to have `index` contribute nothing. Duplicates are kept.
pub fn column(table: &Table, index: usize, skip_header: bool) -> Vec<String> {
    let rows = if skip_header {
        table.data_rows()
    } else {
        table.rows()
    };
    rows.iter().filter_map(|row| row.get(index).cloned()).collect()
}

impl Table {
    /// See [`column`].
    pub fn column(&self, index: usize, skip_header: bool) -> Vec<String> {
        column(self, index, skip_header)
    }
}
