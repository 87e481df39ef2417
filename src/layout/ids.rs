//! Widget ids shared by the layout, the callback registry and the page script

pub const SCOPE_DROPDOWN: &str = "scope-dropdown";
pub const FUND_SIZE_CHART: &str = "fund-size-chart";
pub const INVESTMENT_CHART: &str = "investment-distribution";
pub const EMISSIONS_CHART: &str = "emissions-chart";

pub const TABS: &str = "tabs";
pub const TAB_FUND_SIZE: &str = "tab-fund-size";
pub const TAB_INVESTMENT: &str = "tab-investment-distribution";
pub const TAB_EMISSIONS: &str = "tab-emissions";
