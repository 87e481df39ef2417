//! Column names and the emission scope selector
//!
//! Header names are matched exactly against the CSV header row.

use serde::Serialize;

pub const FUND: &str = "Fund";
pub const FUND_SIZE: &str = "Fund Size ($M)";
pub const COMPANY_NAME: &str = "Company Name";
pub const INVESTMENT: &str = "Investment ($M)";
pub const TOTAL_EMISSIONS: &str = "Total Emissions by Fund (tons of CO2e)";
pub const SCOPE1_EMISSIONS: &str = "Scope 1 Emissions (tons of CO2e)";
pub const SCOPE2_EMISSIONS: &str = "Scope 2 Emissions (tons of CO2e)";
pub const SCOPE3_EMISSIONS: &str = "Scope 3 Emissions (tons of CO2e)";

/// One of the four emissions columns offered by the scope dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum EmissionScope {
    #[default]
    Total,
    Scope1,
    Scope2,
    Scope3,
}

impl EmissionScope {
    /// All scopes in dropdown order
    pub const ALL: [EmissionScope; 4] = [
        EmissionScope::Total,
        EmissionScope::Scope1,
        EmissionScope::Scope2,
        EmissionScope::Scope3,
    ];

    /// CSV column holding this scope's values (also the dropdown value)
    pub fn column(&self) -> &'static str {
        match self {
            EmissionScope::Total => TOTAL_EMISSIONS,
            EmissionScope::Scope1 => SCOPE1_EMISSIONS,
            EmissionScope::Scope2 => SCOPE2_EMISSIONS,
            EmissionScope::Scope3 => SCOPE3_EMISSIONS,
        }
    }

    /// Human-readable dropdown label
    pub fn label(&self) -> &'static str {
        match self {
            EmissionScope::Total => "Total Emissions",
            EmissionScope::Scope1 => "Scope 1",
            EmissionScope::Scope2 => "Scope 2",
            EmissionScope::Scope3 => "Scope 3",
        }
    }

    /// Reverse lookup from a column name
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scope| scope.column() == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_total() {
        assert_eq!(EmissionScope::default().column(), TOTAL_EMISSIONS);
    }

    #[test]
    fn test_from_column() {
        for scope in EmissionScope::ALL {
            assert_eq!(EmissionScope::from_column(scope.column()), Some(scope));
        }
        assert_eq!(EmissionScope::from_column("Scope 4 Emissions"), None);
    }
}
