//! Chart figure model
//!
//! Serializes to the Plotly figure JSON shape (`{"data": [...], "layout": {...}}`)
//! so the browser can hand it straight to `Plotly.react`.

use serde::Serialize;

/// Qualitative palette used when bars are coloured by category
pub const CATEGORY_COLORS: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Layout template applied to every dashboard chart
pub const TEMPLATE: &str = "plotly_white";

/// A complete chart: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    /// Builder method: append a trace
    pub fn trace(mut self, trace: impl Into<Trace>) -> Self {
        self.data.push(trace.into());
        self
    }
}

/// One series of a figure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Pie(PieTrace),
}

impl From<BarTrace> for Trace {
    fn from(trace: BarTrace) -> Self {
        Trace::Bar(trace)
    }
}

impl From<PieTrace> for Trace {
    fn from(trace: PieTrace) -> Self {
        Trace::Pie(trace)
    }
}

/// Vertical bar series over a category axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl BarTrace {
    pub fn new(x: Vec<String>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            name: None,
            marker: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.marker = Some(Marker {
            color: color.into(),
        });
        self
    }
}

/// Pie (or donut, with `hole > 0`) series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub hole: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textinfo: Option<String>,
}

impl PieTrace {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            values,
            hole: 0.0,
            textinfo: None,
        }
    }

    pub fn hole(mut self, hole: f64) -> Self {
        self.hole = hole;
        self
    }

    pub fn textinfo(mut self, textinfo: impl Into<String>) -> Self {
        self.textinfo = Some(textinfo.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

/// Figure layout: title, axes and template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    /// How bar traces sharing an x category combine ("relative" stacks them)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    pub template: String,
}

impl Layout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Title::new(title),
            xaxis: None,
            yaxis: None,
            showlegend: None,
            barmode: None,
            template: TEMPLATE.to_string(),
        }
    }

    pub fn axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.xaxis = Some(Axis { title: Title::new(x) });
        self.yaxis = Some(Axis { title: Title::new(y) });
        self
    }

    pub fn showlegend(mut self, show: bool) -> Self {
        self.showlegend = Some(show);
        self
    }

    pub fn barmode(mut self, mode: impl Into<String>) -> Self {
        self.barmode = Some(mode.into());
        self
    }
}
