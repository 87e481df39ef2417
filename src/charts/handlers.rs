//! Chart update handlers
//!
//! Each handler maps the current scope dropdown value and the dataset to a
//! figure. Only the emissions handler reads the value; the other two always
//! render the same fixed chart.

use super::figure::{BarTrace, Figure, Layout, PieTrace, CATEGORY_COLORS};
use crate::dataset::{columns, Dataset, DatasetResult, EmissionScope};

/// Signature shared by every update handler
pub type ChartHandler = fn(&Dataset, Option<&str>) -> DatasetResult<Figure>;

pub const FUND_SIZE_TITLE: &str = "Fund Size by Fund Type";
pub const INVESTMENT_TITLE: &str = "Investment Distribution by Company";
pub const EMISSIONS_AXIS_TITLE: &str = "Emissions (tons of CO2e)";
pub const EMISSIONS_COLOR: &str = "lightsalmon";

/// Bar chart of fund size, one coloured series per fund.
pub fn fund_size_chart(dataset: &Dataset, _selected_scope: Option<&str>) -> DatasetResult<Figure> {
    let funds = dataset.funds()?;
    let sizes = dataset.numeric_column(columns::FUND_SIZE)?;

    // Group rows by fund, keeping first-appearance order
    let mut groups: Vec<(String, Vec<String>, Vec<f64>)> = Vec::new();
    for (fund, size) in funds.into_iter().zip(sizes.iter().copied()) {
        match groups.iter_mut().find(|(name, _, _)| *name == fund) {
            Some((_, x, y)) => {
                x.push(fund);
                y.push(size);
            }
            None => groups.push((fund.clone(), vec![fund], vec![size])),
        }
    }

    let layout = Layout::new(FUND_SIZE_TITLE)
        .axis_titles(columns::FUND, columns::FUND_SIZE)
        .showlegend(false)
        .barmode("relative");

    let figure = groups
        .into_iter()
        .enumerate()
        .fold(Figure::new(layout), |figure, (idx, (name, x, y))| {
            figure.trace(
                BarTrace::new(x, y)
                    .name(name)
                    .color(CATEGORY_COLORS[idx % CATEGORY_COLORS.len()]),
            )
        });

    Ok(figure)
}

/// Donut chart of investment per company.
pub fn investment_distribution_chart(
    dataset: &Dataset,
    _selected_scope: Option<&str>,
) -> DatasetResult<Figure> {
    let companies = dataset.text_column(columns::COMPANY_NAME)?;
    let investments = dataset.numeric_column(columns::INVESTMENT)?.to_vec();

    Ok(Figure::new(Layout::new(INVESTMENT_TITLE)).trace(
        PieTrace::new(companies, investments)
            .hole(0.3)
            .textinfo("percent+label"),
    ))
}

/// Bar chart of the selected emissions column by fund.
///
/// The selection is used verbatim as a column name. `None` selects total
/// emissions; anything that is not a column fails with `ColumnNotFound`.
pub fn emissions_chart(dataset: &Dataset, selected_scope: Option<&str>) -> DatasetResult<Figure> {
    let scope = selected_scope.unwrap_or(EmissionScope::default().column());

    let funds = dataset.funds()?;
    let values = dataset.numeric_column(scope)?.to_vec();

    tracing::debug!(scope = %scope, rows = values.len(), "Rendering emissions chart");

    let layout = Layout::new(format!("{} by Fund", scope))
        .axis_titles(columns::FUND, EMISSIONS_AXIS_TITLE);

    Ok(Figure::new(layout).trace(
        BarTrace::new(funds, values)
            .name(scope)
            .color(EMISSIONS_COLOR),
    ))
}
