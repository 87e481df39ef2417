//! Declarative widget tree
//!
//! The dashboard layout is a static value: a container holding a heading and
//! three tabs. It carries no behaviour; the callback registry decides what each
//! graph shows.

use super::ids;
use crate::dataset::EmissionScope;
use serde::Serialize;

pub const PAGE_TITLE: &str = "Investment and Emissions Dashboard";

/// A node in the layout tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    Container {
        fluid: bool,
        children: Vec<Widget>,
    },
    Heading {
        level: u8,
        text: String,
        class: String,
    },
    Tabs {
        id: String,
        active_tab: String,
        class: String,
        tabs: Vec<Tab>,
    },
    Graph {
        id: String,
    },
    Label {
        text: String,
        class: String,
    },
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        value: String,
        clearable: bool,
    },
}

/// A single tab with its content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    pub label: String,
    pub tab_id: String,
    pub children: Vec<Widget>,
}

/// Label/value pair offered by a dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl Widget {
    fn heading(level: u8, text: &str, class: &str) -> Self {
        Widget::Heading {
            level,
            text: text.to_string(),
            class: class.to_string(),
        }
    }

    fn graph(id: &str) -> Self {
        Widget::Graph { id: id.to_string() }
    }

    /// Depth-first search for a widget with the given id
    pub fn find(&self, id: &str) -> Option<&Widget> {
        match self {
            Widget::Graph { id: own } | Widget::Dropdown { id: own, .. } if own == id => {
                Some(self)
            }
            Widget::Tabs { id: own, .. } if own == id => Some(self),
            Widget::Container { children, .. } => children.iter().find_map(|c| c.find(id)),
            Widget::Tabs { tabs, .. } => tabs
                .iter()
                .flat_map(|t| t.children.iter())
                .find_map(|c| c.find(id)),
            _ => None,
        }
    }
}

/// Options of the emission scope dropdown, total emissions first
pub fn scope_options() -> Vec<DropdownOption> {
    EmissionScope::ALL
        .iter()
        .map(|scope| DropdownOption {
            label: scope.label().to_string(),
            value: scope.column().to_string(),
        })
        .collect()
}

fn section(heading: &str, mut children: Vec<Widget>) -> Vec<Widget> {
    let mut content = vec![Widget::heading(2, heading, "text-center mt-4")];
    content.append(&mut children);
    vec![Widget::Container {
        fluid: false,
        children: content,
    }]
}

/// Build the dashboard layout
pub fn build_layout() -> Widget {
    let tabs = vec![
        Tab {
            label: "Fund Size".to_string(),
            tab_id: ids::TAB_FUND_SIZE.to_string(),
            children: section(
                "Fund Size by Fund Type",
                vec![Widget::graph(ids::FUND_SIZE_CHART)],
            ),
        },
        Tab {
            label: "Investment Distribution".to_string(),
            tab_id: ids::TAB_INVESTMENT.to_string(),
            children: section(
                "Investment Distribution by Company",
                vec![Widget::graph(ids::INVESTMENT_CHART)],
            ),
        },
        Tab {
            label: "Emissions".to_string(),
            tab_id: ids::TAB_EMISSIONS.to_string(),
            children: section(
                "Total Emissions by Fund",
                vec![
                    Widget::graph(ids::EMISSIONS_CHART),
                    Widget::Label {
                        text: "Select Emission Scope:".to_string(),
                        class: "mt-3".to_string(),
                    },
                    Widget::Dropdown {
                        id: ids::SCOPE_DROPDOWN.to_string(),
                        options: scope_options(),
                        value: EmissionScope::default().column().to_string(),
                        clearable: false,
                    },
                ],
            ),
        },
    ];

    Widget::Container {
        fluid: true,
        children: vec![
            Widget::heading(1, PAGE_TITLE, "text-center my-4"),
            Widget::Tabs {
                id: ids::TABS.to_string(),
                active_tab: ids::TAB_FUND_SIZE.to_string(),
                class: "my-4".to_string(),
                tabs,
            },
        ],
    }
}
