//! HTML rendering
//!
//! Turns the widget tree into a Bootstrap page. Graphs are empty `div`s that
//! the page script fills by posting the dropdown value to the update endpoint
//! and passing each returned figure to `Plotly.react`.

use super::ids;
use super::widgets::{Tab, Widget, PAGE_TITLE};
use std::fmt::Write;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Escape text for use in HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a widget subtree to HTML
pub fn render_widget(widget: &Widget, out: &mut String) {
    match widget {
        Widget::Container { fluid, children } => {
            let class = if *fluid { "container-fluid" } else { "container" };
            let _ = write!(out, r#"<div class="{}">"#, class);
            for child in children {
                render_widget(child, out);
            }
            out.push_str("</div>");
        }
        Widget::Heading { level, text, class } => {
            let _ = write!(
                out,
                r#"<h{level} class="{}">{}</h{level}>"#,
                escape(class),
                escape(text),
            );
        }
        Widget::Tabs {
            id,
            active_tab,
            class,
            tabs,
        } => render_tabs(id, active_tab, class, tabs, out),
        Widget::Graph { id } => {
            let _ = write!(
                out,
                r#"<div id="{}" class="dash-graph" style="min-height:450px"></div>"#,
                escape(id)
            );
        }
        Widget::Label { text, class } => {
            let _ = write!(
                out,
                r#"<label class="form-label {}">{}</label>"#,
                escape(class),
                escape(text)
            );
        }
        Widget::Dropdown {
            id,
            options,
            value,
            clearable: _,
        } => {
            let _ = write!(out, r#"<select id="{}" class="form-select">"#, escape(id));
            for option in options {
                let selected = if &option.value == value { " selected" } else { "" };
                let _ = write!(
                    out,
                    r#"<option value="{}"{}>{}</option>"#,
                    escape(&option.value),
                    selected,
                    escape(&option.label)
                );
            }
            out.push_str("</select>");
        }
    }
}

fn render_tabs(id: &str, active_tab: &str, class: &str, tabs: &[Tab], out: &mut String) {
    let _ = write!(
        out,
        r#"<ul id="{}" class="nav nav-tabs {}" role="tablist">"#,
        escape(id),
        escape(class)
    );
    for tab in tabs {
        let active = if tab.tab_id == active_tab { " active" } else { "" };
        let _ = write!(
            out,
            r#"<li class="nav-item" role="presentation"><button class="nav-link{}" type="button" role="tab" data-tab="{}">{}</button></li>"#,
            active,
            escape(&tab.tab_id),
            escape(&tab.label)
        );
    }
    out.push_str("</ul>");

    out.push_str(r#"<div class="tab-content">"#);
    for tab in tabs {
        let active = if tab.tab_id == active_tab { " show active" } else { "" };
        let _ = write!(
            out,
            r#"<div id="{}" class="tab-pane fade{}" role="tabpanel">"#,
            escape(&tab.tab_id),
            active
        );
        for child in &tab.children {
            render_widget(child, out);
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
}

/// Render the full dashboard page
pub fn render_page(layout: &Widget) -> String {
    let mut body = String::new();
    render_widget(layout, &mut body);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="{css}">
<script src="{plotly}"></script>
</head>
<body>
<div id="dashboard-error" class="alert alert-danger m-3 d-none" role="alert"></div>
{body}
<script>
{script}
</script>
</body>
</html>
"#,
        title = escape(PAGE_TITLE),
        css = BOOTSTRAP_CSS,
        plotly = PLOTLY_JS,
        body = body,
        script = page_script(),
    )
}

fn page_script() -> String {
    PAGE_SCRIPT.replace("__SCOPE_DROPDOWN__", ids::SCOPE_DROPDOWN)
}

const PAGE_SCRIPT: &str = r##"(function () {
  const TEMPLATES = {
    plotly_white: {
      layout: {
        paper_bgcolor: "white",
        plot_bgcolor: "white",
        xaxis: { gridcolor: "#EBF0F8", zerolinecolor: "#EBF0F8" },
        yaxis: { gridcolor: "#EBF0F8", zerolinecolor: "#EBF0F8" }
      }
    }
  };

  const dropdown = document.getElementById("__SCOPE_DROPDOWN__");
  const errorBox = document.getElementById("dashboard-error");

  function showError(message) {
    errorBox.textContent = message;
    errorBox.classList.remove("d-none");
  }

  async function update() {
    const response = await fetch("/api/v1/update", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ input: "__SCOPE_DROPDOWN__", value: dropdown.value })
    });
    const payload = await response.json();
    if (!response.ok) {
      showError(payload.error ? payload.error.message : response.statusText);
      return;
    }
    errorBox.classList.add("d-none");
    for (const output of payload.outputs) {
      if (output.error) {
        showGraphError(output.id, output.error.message);
        continue;
      }
      clearGraphError(output.id);
      const layout = Object.assign({}, output.figure.layout);
      if (typeof layout.template === "string") {
        layout.template = TEMPLATES[layout.template];
      }
      Plotly.react(output.id, output.figure.data, layout, { responsive: true });
    }
  }

  function graphErrorBox(id) {
    const graph = document.getElementById(id);
    let box = document.getElementById(id + "-error");
    if (!box && graph) {
      box = document.createElement("div");
      box.id = id + "-error";
      box.className = "alert alert-danger d-none";
      box.setAttribute("role", "alert");
      graph.parentNode.insertBefore(box, graph);
    }
    return box;
  }

  function showGraphError(id, message) {
    const box = graphErrorBox(id);
    if (box) {
      box.textContent = message;
      box.classList.remove("d-none");
    }
    const graph = document.getElementById(id);
    if (graph && graph.data) { Plotly.purge(graph); }
  }

  function clearGraphError(id) {
    const box = document.getElementById(id + "-error");
    if (box) { box.classList.add("d-none"); }
  }

  document.querySelectorAll("[data-tab]").forEach(function (button) {
    button.addEventListener("click", function () {
      document.querySelectorAll("[data-tab]").forEach(function (b) {
        b.classList.toggle("active", b === button);
      });
      document.querySelectorAll(".tab-pane").forEach(function (pane) {
        const active = pane.id === button.dataset.tab;
        pane.classList.toggle("show", active);
        pane.classList.toggle("active", active);
        if (active) {
          pane.querySelectorAll(".dash-graph").forEach(function (g) {
            if (g.data) { Plotly.Plots.resize(g); }
          });
        }
      });
    });
  });

  dropdown.addEventListener("change", function () { update().catch(function (e) { showError(e.message); }); });
  update().catch(function (e) { showError(e.message); });
})();"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::build_layout;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Fund Size ($M)"), "Fund Size ($M)");
        assert_eq!(
            escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_page_contains_widgets() {
        let html = render_page(&build_layout());

        assert!(html.contains("<title>Investment and Emissions Dashboard</title>"));
        assert!(html.contains(r#"<div id="fund-size-chart""#));
        assert!(html.contains(r#"<div id="investment-distribution""#));
        assert!(html.contains(r#"<div id="emissions-chart""#));
        assert!(html.contains(r#"<select id="scope-dropdown""#));
        assert!(html.contains(
            r#"<option value="Total Emissions by Fund (tons of CO2e)" selected>Total Emissions</option>"#
        ));
        assert!(!html.contains("__SCOPE_DROPDOWN__"));
    }

    #[test]
    fn test_first_tab_active() {
        let html = render_page(&build_layout());
        assert!(html.contains(r#"<div id="tab-fund-size" class="tab-pane fade show active""#));
        assert!(html.contains(r#"<div id="tab-emissions" class="tab-pane fade""#));
        assert!(html.contains(r#"class="nav-link active" type="button" role="tab" data-tab="tab-fund-size""#));
    }

    #[test]
    fn test_script_handles_per_graph_errors() {
        let html = render_page(&build_layout());
        assert!(html.contains("if (output.error) {"));
        assert!(html.contains("showGraphError(output.id, output.error.message);"));
        assert!(html.contains(r#"box.id = id + "-error";"#));
    }
}
