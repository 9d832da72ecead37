//! Row and column splitting.

use regex::Regex;
use std::sync::LazyLock;

use super::{Row, Table};

/// Two or more consecutive whitespace characters.
static MULTISPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("MULTISPACE must compile"));

/// A line break, tolerating CRLF.
static NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n").expect("NEWLINE must compile"));

/// How to split text into pieces.
///
/// The same policy type is used for rows and for columns.
#[derive(Debug, Clone)]
pub enum Separator {
    /// Split on every occurrence of an exact string. Empty fields are kept.
    Literal(String),

    /// Split on every match of a regular expression. Empty fields are kept.
    Pattern(Regex),

    /// Split on runs of two or more whitespace characters.
    ///
    /// Leading and trailing whitespace is ignored, so a single space inside
    /// a field (`my container`) never introduces a boundary.
    RunOfWhitespace,

    /// Split on any whitespace, discarding empty fields.
    Whitespace,
}

impl Separator {
    /// Line separator used for all row splitting in practice.
    pub fn newline() -> Self {
        Separator::Pattern(NEWLINE.clone())
    }

    /// Exact string separator.
    pub fn literal(sep: impl Into<String>) -> Self {
        Separator::Literal(sep.into())
    }

    /// Split `text` under this policy.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match self {
            Separator::Literal(sep) if sep.is_empty() => vec![text],
            Separator::Literal(sep) => text.split(sep.as_str()).collect(),
            Separator::Pattern(re) => re.split(text).collect(),
            Separator::RunOfWhitespace => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Vec::new()
                } else {
                    MULTISPACE.split(trimmed).collect()
                }
            }
            Separator::Whitespace => text.split_whitespace().collect(),
        }
    }
}

/// Split `text` into rows with `rows`, then each row into columns with
/// `columns`.
///
/// Blank rows are dropped, so empty input yields an empty [`Table`]. Short
/// rows are kept as they are; use [`Table::retain_min_fields`] to filter
/// them.
pub fn tokenize(text: &str, rows: &Separator, columns: &Separator) -> Table {
    let parsed: Vec<Row> = rows
        .split(text)
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            columns
                .split(line)
                .into_iter()
                .map(str::to_string)
                .collect()
        })
        .collect();

    tracing::trace!(rows = parsed.len(), "tokenized table");
    Table::new(parsed)
}
