//! Tabular data model
//!
//! A [`DataTable`] is a list of column names plus rows of string cells. Cell
//! values are kept verbatim, including any inline HTML they carry. With the
//! `data-loading` feature tables can be read from CSV.

use crate::utils::error::{ConversionError, ConversionResult};

/// Column names and rows of string cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    /// Column names, used as the header row
    pub columns: Vec<String>,
    /// Data rows; every row has exactly `columns.len()` cells
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Create an empty table with the given column names
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DataTable {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// Short rows are padded with empty cells; rows wider than the header
    /// are rejected.
    pub fn push_row<I, S>(&mut self, row: I) -> ConversionResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = row.into_iter().map(Into::into).collect();
        if cells.len() > self.width() {
            return Err(ConversionError::invalid(format!(
                "row {} has {} cells but the table has {} columns",
                self.rows.len() + 1,
                cells.len(),
                self.width()
            )));
        }
        cells.resize(self.width(), String::new());
        self.rows.push(cells);
        Ok(())
    }

    /// Builder form of [`push_row`](Self::push_row)
    pub fn with_row<I, S>(mut self, row: I) -> ConversionResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(row)?;
        Ok(self)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(move |row| row.get(index).map(String::as_str))
    }

    /// Whether every non-empty cell of a column parses as a number
    pub fn is_numeric_column(&self, index: usize) -> bool {
        let mut seen = false;
        for value in self.column(index) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if value.parse::<f64>().is_err() {
                return false;
            }
            seen = true;
        }
        seen
    }
}

#[cfg(feature = "data-loading")]
impl DataTable {
    /// Read CSV with a header record from any reader
    pub fn from_csv_reader<R: std::io::Read>(reader: R, delimiter: u8) -> ConversionResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(ConversionError::invalid("CSV input has no header record"));
        }

        let mut table = DataTable::new(headers.iter());
        for record in csv_reader.records() {
            let record = record?;
            if record.len() > table.width() {
                let line = record.position().map_or(0, |p| p.line() as usize);
                return Err(ConversionError::parse_at(
                    format!(
                        "record has {} fields but the header has {}",
                        record.len(),
                        table.width()
                    ),
                    line,
                    table.width() + 1,
                ));
            }
            table.push_row(record.iter())?;
        }

        log::debug!(
            "loaded CSV table: {} columns, {} rows",
            table.width(),
            table.len()
        );
        Ok(table)
    }

    /// Read comma-separated CSV from a string
    pub fn from_csv_str(input: &str) -> ConversionResult<Self> {
        Self::from_csv_reader(input.as_bytes(), b',')
    }

    /// Read CSV from a file
    pub fn from_csv_path(
        path: impl AsRef<std::path::Path>,
        delimiter: u8,
    ) -> ConversionResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(std::io::BufReader::new(file), delimiter)
    }
}
