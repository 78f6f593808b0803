use std::sync::LazyLock;

use regex::Regex;

/// Header/body separator row, e.g. `|---|:---:|`.
static SEPARATOR_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\|?[\s\-|:]+\|?\s*$")
        .unwrap_or_else(|e| panic!("invalid table separator pattern: {e}"))
});

/// Pipe table syntax.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';
    pub const SEPARATOR_CELL: &'static str = "---";

    /// A line is table-shaped when splitting on `|` gives more than two parts.
    pub fn is_row(line: &str) -> bool {
        line.split(Self::PIPE).count() > 2
    }

    /// Whether a row after the first is the header/body separator.
    pub fn is_separator(line: &str) -> bool {
        SEPARATOR_ROW.is_match(line)
    }

    /// Splits a row into trimmed cells, dropping the outer pipes.
    ///
    /// Returns `None` when every cell is empty.
    pub fn cells(line: &str) -> Option<Vec<String>> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        let cells: Vec<String> = t.split(Self::PIPE).map(|c| c.trim().to_string()).collect();
        cells.iter().any(|c| !c.is_empty()).then_some(cells)
    }

    /// Right-pads every row with empty cells up to the widest row.
    pub fn rectangular(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        rows
    }

    pub fn render_row<S: AsRef<str>>(cells: &[S]) -> String {
        let joined = cells
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" | ");
        format!("| {joined} |")
    }

    pub fn render_separator(columns: usize) -> String {
        Self::render_row(vec![Self::SEPARATOR_CELL; columns].as_slice())
    }
}
