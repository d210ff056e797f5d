//! Plain-text rendering of the controller's visible rows.

use proofview_engine::NodeView;

/// Render the visible rows as an indented outline.
///
/// One line per row, indented two spaces per level, with the node's actual
/// outcome and the checker's expectation in brackets.
pub(crate) fn render_text(rows: &[NodeView]) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        out.push_str("(empty trace: nothing to display)\n");
        return out;
    }
    for row in rows {
        let outcome = if row.is_model { "model" } else { "no model" };
        let expectation = match row.should_be_model {
            Some(true) => "expected model",
            Some(false) => "expected no model",
            None => "no expectation",
        };
        for _ in 0..row.level {
            out.push_str("  ");
        }
        out.push_str(&format!("- {} [{outcome}, {expectation}]\n", row.formula));
    }
    out
}

/// One-line summary printed above the text outline.
pub(crate) fn render_summary(shown: usize, total: usize, filtered: bool) -> String {
    let filter_note = if filtered { ", causal filter on" } else { "" };
    format!("Result trace: {shown} of {total} node(s) shown{filter_note}\n")
}
