//! In-memory column table
//!
//! The CSV is read once into named columns. A column is numeric when every
//! non-empty cell parses as a float; empty numeric cells become `NaN`.
//! Nothing about which columns exist is checked at load time.

use super::error::{DatasetError, DatasetResult};
use serde::Serialize;
use std::io::Read;

/// Cell storage for one column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Number(Vec<f64>),
    Text(Vec<String>),
}

/// Kind of a column as reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Number,
    Text,
}

/// A named column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    fn from_cells(name: String, cells: Vec<String>) -> Self {
        let numeric = cells
            .iter()
            .all(|cell| cell.is_empty() || cell.parse::<f64>().is_ok());

        let data = if numeric {
            ColumnData::Number(
                cells
                    .iter()
                    .map(|cell| cell.parse::<f64>().unwrap_or(f64::NAN))
                    .collect(),
            )
        } else {
            ColumnData::Text(cells)
        };

        Self { name, data }
    }

    pub fn kind(&self) -> ColumnKind {
        match self.data {
            ColumnData::Number(_) => ColumnKind::Number,
            ColumnData::Text(_) => ColumnKind::Text,
        }
    }

    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Number(values) => values.len(),
            ColumnData::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values rendered as strings (category axis, labels)
    pub fn to_strings(&self) -> Vec<String> {
        match &self.data {
            ColumnData::Number(values) => values.iter().map(|v| v.to_string()).collect(),
            ColumnData::Text(values) => values.clone(),
        }
    }

    /// Numeric values, or `NotNumeric` naming the first offending cell
    pub fn as_numbers(&self) -> DatasetResult<&[f64]> {
        match &self.data {
            ColumnData::Number(values) => Ok(values),
            ColumnData::Text(values) => {
                let (row, value) = values
                    .iter()
                    .enumerate()
                    .find(|(_, cell)| !cell.is_empty() && cell.parse::<f64>().is_err())
                    .map(|(row, cell)| (row, cell.clone()))
                    .unwrap_or_default();
                Err(DatasetError::NotNumeric {
                    column: self.name.clone(),
                    row,
                    value,
                })
            }
        }
    }
}

/// Columns in header order, all of equal length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Parse CSV with a header row from any reader. Cells are trimmed,
    /// header names are kept exactly as written.
    pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Fields)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut row_count = 0;

        for result in reader.records() {
            let record = result?;
            for (idx, cell) in record.iter().enumerate() {
                cells[idx].push(cell.to_string());
            }
            row_count += 1;
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, cells)| Column::from_cells(name, cells))
            .collect();

        Ok(Self { columns, row_count })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by exact header name
    pub fn column(&self, name: &str) -> DatasetResult<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| DatasetError::ColumnNotFound(name.to_string()))
    }

    pub fn numeric_column(&self, name: &str) -> DatasetResult<&[f64]> {
        self.column(name)?.as_numbers()
    }

    pub fn text_column(&self, name: &str) -> DatasetResult<Vec<String>> {
        Ok(self.column(name)?.to_strings())
    }
}
