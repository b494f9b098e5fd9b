use crate::error::TableError;

/// Header row plus data rows of a published sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DecodedTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Cell at `row`/`column`, empty when the row is shorter than the header.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Cell under the first column named `header`, empty when absent.
    pub fn value(&self, row: usize, header: &str) -> &str {
        match self.column_index(header) {
            Some(column) => self.cell(row, column),
            None => "",
        }
    }
}

/// Decodes CSV text whose first record is the header row.
pub fn decode(text: &str) -> Result<DecodedTable, TableError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TableError::EmptyCsv);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(DecodedTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_read_as_empty() {
        let table = decode("Rank,Team,Score\n1,alice\n").unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.value(0, "Team"), "alice");
        assert_eq!(table.value(0, "Score"), "");
        assert_eq!(table.value(0, "Missing"), "");
    }

    #[test]
    fn quoted_multiline_cells_survive() {
        let table = decode("Team,A\n\"bob (Bob)\",\"1:00:00\n(-1)\"\n").unwrap();
        assert_eq!(table.cell(0, 1), "1:00:00\n(-1)");
    }

    #[test]
    fn whitespace_only_text_is_rejected() {
        assert!(matches!(decode("  \n "), Err(TableError::EmptyCsv)));
    }
}
