//! Fund Dataset
//!
//! The single CSV the dashboard reads at startup:
//!
//! - **table**: header-named columns parsed from the CSV
//! - **columns**: well-known column names and the emission scope selector
//! - **error**: error types
//!
//! The dataset is loaded once and shared read-only for the process lifetime.
//! Column presence is not validated up front; handlers discover a missing
//! column when they first ask for it.

pub mod columns;
pub mod error;
pub mod table;

pub use columns::EmissionScope;
pub use error::{DatasetError, DatasetResult};
pub use table::{Column, ColumnData, ColumnKind, Table};

use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// One row of the fund dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub fund: String,
    pub fund_size: f64,
    pub company_name: String,
    pub investment: f64,
    pub total_emissions: f64,
    pub scope1_emissions: f64,
    pub scope2_emissions: f64,
    pub scope3_emissions: f64,
}

/// The loaded dataset
#[derive(Debug, Clone)]
pub struct Dataset {
    source: Option<PathBuf>,
    table: Table,
}

impl Dataset {
    /// Load the dataset from a CSV file
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DatasetError::Open {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let table = Table::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.columns().len(),
            "Loaded dataset"
        );

        Ok(Self {
            source: Some(path.to_path_buf()),
            table,
        })
    }

    /// Build a dataset from in-memory CSV
    pub fn from_reader<R: Read>(reader: R) -> DatasetResult<Self> {
        Ok(Self {
            source: None,
            table: Table::from_reader(reader)?,
        })
    }

    /// File the dataset was read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Fund name of every row, in row order
    pub fn funds(&self) -> DatasetResult<Vec<String>> {
        self.table.text_column(columns::FUND)
    }

    /// Values of a numeric column, in row order
    pub fn numeric_column(&self, name: &str) -> DatasetResult<&[f64]> {
        self.table.numeric_column(name)
    }

    /// Values of any column rendered as strings, in row order
    pub fn text_column(&self, name: &str) -> DatasetResult<Vec<String>> {
        self.table.text_column(name)
    }

    /// Typed view of every row. Fails if any of the eight columns is absent.
    pub fn records(&self) -> DatasetResult<Vec<Record>> {
        let funds = self.funds()?;
        let companies = self.table.text_column(columns::COMPANY_NAME)?;
        let fund_size = self.numeric_column(columns::FUND_SIZE)?;
        let investment = self.numeric_column(columns::INVESTMENT)?;
        let total = self.numeric_column(columns::TOTAL_EMISSIONS)?;
        let scope1 = self.numeric_column(columns::SCOPE1_EMISSIONS)?;
        let scope2 = self.numeric_column(columns::SCOPE2_EMISSIONS)?;
        let scope3 = self.numeric_column(columns::SCOPE3_EMISSIONS)?;

        Ok(funds
            .into_iter()
            .zip(companies)
            .enumerate()
            .map(|(i, (fund, company_name))| Record {
                fund,
                fund_size: fund_size[i],
                company_name,
                investment: investment[i],
                total_emissions: total[i],
                scope1_emissions: scope1[i],
                scope2_emissions: scope2[i],
                scope3_emissions: scope3[i],
            })
            .collect())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Small dataset with every column present
    pub const SAMPLE_CSV: &str = "\
Fund,Fund Size ($M),Company Name,Investment ($M),Total Emissions by Fund (tons of CO2e),Scope 1 Emissions (tons of CO2e),Scope 2 Emissions (tons of CO2e),Scope 3 Emissions (tons of CO2e)
Growth Fund,500,Acme Corp,120,1500,400,300,800
Green Fund,300,Solaris,80,600,100,150,350
Growth Fund,500,Borealis,60,900,250,200,450
";

    pub fn sample() -> super::Dataset {
        super::Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
    }
}
