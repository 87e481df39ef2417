//! Callback registry
//!
//! Binds each output graph to an input widget and the handler that redraws it.
//! Dispatching an input change runs every bound handler in registration order;
//! each output succeeds or fails on its own.

use super::figure::Figure;
use super::handlers::{self, ChartHandler};
use crate::dataset::{Dataset, DatasetResult};
use crate::layout::ids;

/// A single input → output binding
#[derive(Clone)]
pub struct Callback {
    pub output: &'static str,
    pub input: &'static str,
    pub handler: ChartHandler,
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("output", &self.output)
            .field("input", &self.input)
            .finish()
    }
}

/// All callbacks of the dashboard
#[derive(Debug, Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three dashboard charts, all bound to the scope dropdown
    pub fn dashboard() -> Self {
        Self::new()
            .register(ids::FUND_SIZE_CHART, ids::SCOPE_DROPDOWN, handlers::fund_size_chart)
            .register(
                ids::INVESTMENT_CHART,
                ids::SCOPE_DROPDOWN,
                handlers::investment_distribution_chart,
            )
            .register(ids::EMISSIONS_CHART, ids::SCOPE_DROPDOWN, handlers::emissions_chart)
    }

    /// Builder method: bind a handler
    pub fn register(
        mut self,
        output: &'static str,
        input: &'static str,
        handler: ChartHandler,
    ) -> Self {
        self.callbacks.push(Callback {
            output,
            input,
            handler,
        });
        self
    }

    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    /// Find the callback that draws an output graph
    pub fn get(&self, output: &str) -> Option<&Callback> {
        self.callbacks.iter().find(|c| c.output == output)
    }

    /// Render one output graph for the given input value
    pub fn render(
        &self,
        output: &str,
        dataset: &Dataset,
        value: Option<&str>,
    ) -> Option<DatasetResult<Figure>> {
        self.get(output).map(|c| (c.handler)(dataset, value))
    }

    /// Run every handler bound to `input`, one result per output
    pub fn dispatch(
        &self,
        input: &str,
        dataset: &Dataset,
        value: Option<&str>,
    ) -> Vec<(&'static str, DatasetResult<Figure>)> {
        self.callbacks
            .iter()
            .filter(|c| c.input == input)
            .map(|c| {
                tracing::debug!(output = c.output, input = c.input, "Invoking callback");
                (c.output, (c.handler)(dataset, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{columns, fixtures, DatasetError};

    #[test]
    fn test_dispatch_order() {
        let registry = CallbackRegistry::dashboard();
        let outputs = registry.dispatch(ids::SCOPE_DROPDOWN, &fixtures::sample(), None);
        assert!(outputs.iter().all(|(_, result)| result.is_ok()));

        let order: Vec<_> = outputs.iter().map(|(id, _)| *id).collect();
        assert_eq!(
            order,
            vec![ids::FUND_SIZE_CHART, ids::INVESTMENT_CHART, ids::EMISSIONS_CHART]
        );
    }

    #[test]
    fn test_dispatch_matches_handlers() {
        let dataset = fixtures::sample();
        let registry = CallbackRegistry::dashboard();
        let outputs =
            registry.dispatch(ids::SCOPE_DROPDOWN, &dataset, Some(columns::SCOPE2_EMISSIONS));

        assert_eq!(
            *outputs[2].1.as_ref().unwrap(),
            handlers::emissions_chart(&dataset, Some(columns::SCOPE2_EMISSIONS)).unwrap()
        );
    }

    #[test]
    fn test_dispatch_unknown_input() {
        let outputs = CallbackRegistry::dashboard().dispatch("tabs", &fixtures::sample(), None);
        assert!(outputs.is_empty());
    }

    #[test]
    fn test_unknown_scope_fails_only_emissions() {
        let outputs = CallbackRegistry::dashboard().dispatch(
            ids::SCOPE_DROPDOWN,
            &fixtures::sample(),
            Some("bogus"),
        );

        assert_eq!(outputs.len(), 3);
        assert!(outputs[0].1.is_ok());
        assert!(outputs[1].1.is_ok());
        assert_eq!(outputs[2].0, ids::EMISSIONS_CHART);
        assert!(matches!(
            outputs[2].1,
            Err(DatasetError::ColumnNotFound(ref name)) if name == "bogus"
        ));
    }

    #[test]
    fn test_missing_column_fails_only_its_output() {
        let dataset = Dataset::from_reader(
            "Fund,Fund Size ($M),Total Emissions by Fund (tons of CO2e)\nA,10,5\nB,20,7\n"
                .as_bytes(),
        )
        .unwrap();

        let outputs = CallbackRegistry::dashboard().dispatch(ids::SCOPE_DROPDOWN, &dataset, None);

        assert!(outputs[0].1.is_ok());
        assert!(matches!(
            outputs[1].1,
            Err(DatasetError::ColumnNotFound(ref name)) if name == columns::COMPANY_NAME
        ));
        assert!(outputs[2].1.is_ok());
    }

    #[test]
    fn test_render_single() {
        let registry = CallbackRegistry::dashboard();
        let dataset = fixtures::sample();

        assert!(registry.render(ids::EMISSIONS_CHART, &dataset, None).is_some());
        assert!(registry.render("no-such-chart", &dataset, None).is_none());
    }
}
