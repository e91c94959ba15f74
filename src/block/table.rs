//! Pipe table rows.
//!
//! A table line starts and ends with `|`. Separator rows (`| --- | :-: |`)
//! mark the table as having a header and are otherwise dropped.

use smallvec::SmallVec;

use crate::limits;

/// Check whether a (fully trimmed) line belongs to a table.
#[inline]
pub fn is_table_line(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

/// Check whether a table line is a separator row.
///
/// Equivalent to `^\|[\s\-:|]+\|$`.
pub fn is_separator_row(line: &str) -> bool {
    if line.len() < 3 || !is_table_line(line) {
        return false;
    }
    line[1..line.len() - 1]
        .chars()
        .all(|c| c.is_whitespace() || matches!(c, '-' | ':' | '|'))
}

/// Split a table line into trimmed cells.
///
/// The empty pieces produced by the leading and trailing pipe are dropped.
/// Cells past [`limits::MAX_TABLE_COLUMNS`] are ignored.
pub fn split_row(line: &str) -> Vec<String> {
    let mut pieces: SmallVec<[&str; 8]> = line.split('|').collect();
    if pieces.len() >= 2 {
        pieces.pop();
        pieces.remove(0);
    }
    pieces
        .into_iter()
        .take(limits::MAX_TABLE_COLUMNS)
        .map(|cell| cell.trim().to_owned())
        .collect()
}

/// Rows collected while table mode is active.
#[derive(Debug, Default)]
pub struct TableState {
    pub rows: Vec<Vec<String>>,
    pub has_header: bool,
}

impl TableState {
    /// Start a table with its first line.
    pub fn new(line: &str) -> Self {
        let mut state = Self::default();
        state.push_line(line);
        state
    }

    /// Accept one more table line.
    pub fn push_line(&mut self, line: &str) {
        if is_separator_row(line) {
            self.has_header = true;
        } else {
            self.rows.push(split_row(line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_line_detection() {
        assert!(is_table_line("| a |"));
        assert!(is_table_line("||"));
        assert!(!is_table_line("|"));
        assert!(!is_table_line("| a"));
        assert!(!is_table_line("a |"));
    }

    #[test]
    fn test_separator_rows() {
        assert!(is_separator_row("| - | - |"));
        assert!(is_separator_row("|:---|---:|"));
        assert!(is_separator_row("| :-: |"));
        assert!(!is_separator_row("| a | - |"));
        assert!(!is_separator_row("||"));
    }

    #[test]
    fn test_split_row_trims_cells() {
        assert_eq!(split_row("|  A | B  |"), vec!["A", "B"]);
    }

    #[test]
    fn test_split_row_keeps_inner_empty_cells() {
        assert_eq!(split_row("| a || c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_split_row_caps_columns() {
        let line = format!("|{}", "x|".repeat(limits::MAX_TABLE_COLUMNS + 10));
        assert_eq!(split_row(&line).len(), limits::MAX_TABLE_COLUMNS);
    }

    #[test]
    fn test_table_state_header() {
        let mut state = TableState::new("| A | B |");
        state.push_line("| - | - |");
        state.push_line("| 1 | 2 |");
        assert!(state.has_header);
        assert_eq!(state.rows, vec![vec!["A", "B"], vec!["1", "2"]]);
    }
}
