use ahash::HashMap;

/// A record: one tabular row keyed by column name.
pub type Record = HashMap<String, String>;

/// Tabular data: a header row and data rows of string cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column names, in column order.
    pub headers: Vec<String>,
    /// Data rows of cells, in row order.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from raw rows, treating the first row as the header
    /// row.
    ///
    /// Empty input yields an empty table.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Table {
        if rows.is_empty() {
            return Table::default();
        }
        let headers = rows.remove(0);
        Table { headers, rows }
    }
}

/// Convert tabular data to records, mapping each row's cells to the
/// corresponding header by position.
///
/// Empty `rows` produce an empty sequence regardless of `headers`. Cells
/// beyond the last header are dropped; a row shorter than the headers
/// produces a record without the trailing columns.
pub fn rows_to_records(table: &Table) -> Vec<Record> {
    table
        .rows
        .iter()
        .map(|cells| {
            table
                .headers
                .iter()
                .zip(cells.iter())
                .map(|(header, cell)| (header.clone(), cell.clone()))
                .collect()
        })
        .collect()
}
