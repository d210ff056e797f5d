//! Controller tying the flattener, expansion tracker, and causal filter
//! together for one model-checking response.

use serde::Serialize;
use tracing::{debug, warn};

use proofview_api::{Feedback, ModelCheckerResponse};

use crate::errors::{Notification, TreeError};
use crate::expansion::{self, ExpansionState};
use crate::filter;
use crate::flatten::{flatten, FlatNode};

/// View record handed to the presentation layer for one rendered row.
#[derive(Debug, Clone, Serialize)]
pub struct NodeView {
    pub formula: String,
    pub description: serde_json::Value,
    pub is_model: bool,
    pub should_be_model: Option<bool>,
    pub expandable: bool,
    pub level: usize,
    pub visible: bool,
}

impl From<&FlatNode> for NodeView {
    fn from(node: &FlatNode) -> Self {
        NodeView {
            formula: node.trace.formula.clone(),
            description: node.trace.description.clone(),
            is_model: node.trace.is_model,
            should_be_model: node.trace.should_be_model,
            expandable: node.expandable,
            level: node.level,
            visible: node.visible,
        }
    }
}

/// One result view: the response, its flattened sequence, and the state of
/// the two sub-engines.
///
/// All operations are synchronous and perform no I/O. The response is
/// decoded elsewhere and loaded exactly once; afterwards only expansion
/// state and the `visible` flags mutate, never the sequence itself.
#[derive(Debug)]
pub struct TraceTree {
    response: ModelCheckerResponse,
    nodes: Vec<FlatNode>,
    expansion: ExpansionState,
    filtered: bool,
}

impl TraceTree {
    /// Build the tree for a response.
    ///
    /// Flattens the trace once. Under `relevant` feedback the whole tree
    /// is expanded immediately; if that hits the structural depth limit
    /// the tree stays collapsed and the expand-error notification is
    /// returned for the presentation layer to surface.
    pub fn load(response: ModelCheckerResponse) -> (Self, Vec<Notification>) {
        let nodes = response
            .root_trace
            .as_ref()
            .map(flatten)
            .unwrap_or_default();
        debug!(nodes = nodes.len(), "flattened model-checker trace");
        let mut tree = Self {
            response,
            nodes,
            expansion: ExpansionState::new(),
            filtered: false,
        };
        let mut notifications = Vec::new();
        if tree.response.feedback == Feedback::Relevant {
            if let Err(error) = tree.expand_all() {
                warn!(%error, "auto-expansion failed; keeping the tree collapsed");
                notifications.push(Notification::ExpandError);
            }
        }
        (tree, notifications)
    }

    /// Number of flat nodes, regardless of expansion or filter state.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the response carried no trace to display.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The full flat sequence, for structural queries.
    pub fn nodes(&self) -> &[FlatNode] {
        &self.nodes
    }

    /// Whether the causal filter is currently applied.
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// Expand the node at `node_id`. Unknown ids are ignored.
    pub fn expand(&mut self, node_id: usize) {
        if node_id < self.nodes.len() {
            self.expansion.expand(node_id);
        }
    }

    /// Collapse the node at `node_id`.
    pub fn collapse(&mut self, node_id: usize) {
        self.expansion.collapse(node_id);
    }

    /// Expand every expandable node.
    ///
    /// On failure the expansion state is left exactly as it was.
    pub fn expand_all(&mut self) -> Result<(), TreeError> {
        self.expansion.expand_all(&self.nodes)
    }

    /// Contiguous descendant block of `node_id` in the flat sequence.
    pub fn descendants(&self, node_id: usize) -> &[FlatNode] {
        expansion::descendants(&self.nodes, node_id)
    }

    /// Apply or clear the causal filter.
    ///
    /// The polarity is the root's own expectation; a root without one
    /// falls back to its actual outcome.
    pub fn toggle_filter(&mut self, on: bool) {
        if on {
            let Some(root) = self.response.root_trace.as_deref() else {
                return;
            };
            let polarity = root.should_be_model.unwrap_or(root.is_model);
            filter::apply_filter(&mut self.nodes, polarity);
            self.filtered = true;
        } else {
            filter::clear_filter(&mut self.nodes);
            self.filtered = false;
        }
    }

    /// The rows the presentation layer should draw: nodes whose ancestors
    /// are all expanded and which the causal filter keeps visible.
    pub fn render(&self) -> Vec<NodeView> {
        self.expansion
            .rendered_indices(&self.nodes)
            .into_iter()
            .map(|node_id| &self.nodes[node_id])
            .filter(|node| node.visible)
            .map(NodeView::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proofview_api::Trace;

    use super::*;

    fn node(
        formula: &str,
        is_model: bool,
        should_be_model: Option<bool>,
        children: Vec<Arc<Trace>>,
    ) -> Arc<Trace> {
        Arc::new(Trace {
            formula: formula.into(),
            description: serde_json::Value::Null,
            is_model,
            should_be_model,
            children,
        })
    }

    /// An unexpectedly failing universal with one deviating and one
    /// conforming instance.
    fn sample_response(feedback: Feedback) -> ModelCheckerResponse {
        ModelCheckerResponse {
            root_trace: Some(node(
                "forall x. P(x)",
                false,
                Some(true),
                vec![
                    node("P(a)", false, Some(true), Vec::new()),
                    node("P(b)", true, Some(true), Vec::new()),
                ],
            )),
            feedback,
        }
    }

    fn rendered_formulas(tree: &TraceTree) -> Vec<String> {
        tree.render().into_iter().map(|row| row.formula).collect()
    }

    // ---------------------------------------------------------------
    // load
    // ---------------------------------------------------------------

    #[test]
    fn relevant_feedback_auto_expands_on_load() {
        let (tree, notifications) = TraceTree::load(sample_response(Feedback::Relevant));
        assert!(notifications.is_empty());
        assert_eq!(
            rendered_formulas(&tree),
            vec!["forall x. P(x)", "P(a)", "P(b)"]
        );
    }

    #[test]
    fn other_feedback_loads_collapsed() {
        let (tree, notifications) =
            TraceTree::load(sample_response(Feedback::Other("minimal".into())));
        assert!(notifications.is_empty());
        assert_eq!(rendered_formulas(&tree), vec!["forall x. P(x)"]);
    }

    #[test]
    fn absent_trace_renders_empty() {
        let (tree, notifications) = TraceTree::load(ModelCheckerResponse {
            root_trace: None,
            feedback: Feedback::Relevant,
        });
        assert!(notifications.is_empty());
        assert!(tree.is_empty());
        assert!(tree.render().is_empty());
    }

    #[test]
    fn overdeep_trace_degrades_to_the_collapsed_root() {
        let mut chain = node("p0", true, Some(true), Vec::new());
        for depth in 1..=crate::expansion::MAX_TREE_DEPTH + 1 {
            chain = node(&format!("p{depth}"), true, Some(true), vec![chain]);
        }
        let (mut tree, notifications) = TraceTree::load(ModelCheckerResponse {
            root_trace: Some(chain),
            feedback: Feedback::Relevant,
        });
        assert_eq!(notifications, vec![Notification::ExpandError]);
        assert_eq!(tree.render().len(), 1);
        // The failed auto-expansion left no partial state behind.
        assert!(tree.expand_all().is_err());
        assert_eq!(tree.render().len(), 1);
    }

    // ---------------------------------------------------------------
    // expand / collapse / descendants
    // ---------------------------------------------------------------

    #[test]
    fn expand_and_collapse_drive_the_rendered_rows() {
        let (mut tree, _) = TraceTree::load(sample_response(Feedback::Other("full".into())));
        tree.expand(0);
        assert_eq!(
            rendered_formulas(&tree),
            vec!["forall x. P(x)", "P(a)", "P(b)"]
        );
        tree.collapse(0);
        assert_eq!(rendered_formulas(&tree), vec!["forall x. P(x)"]);
    }

    #[test]
    fn expanding_an_unknown_id_is_ignored() {
        let (mut tree, _) = TraceTree::load(sample_response(Feedback::Other("full".into())));
        tree.expand(42);
        assert_eq!(rendered_formulas(&tree), vec!["forall x. P(x)"]);
    }

    #[test]
    fn descendants_come_from_the_flat_sequence() {
        let (tree, _) = TraceTree::load(sample_response(Feedback::Relevant));
        let block: Vec<&str> = tree
            .descendants(0)
            .iter()
            .map(|n| n.trace.formula.as_str())
            .collect();
        assert_eq!(block, vec!["P(a)", "P(b)"]);
    }

    // ---------------------------------------------------------------
    // toggle_filter
    // ---------------------------------------------------------------

    #[test]
    fn filter_narrows_render_to_the_causal_chain() {
        let (mut tree, _) = TraceTree::load(sample_response(Feedback::Relevant));
        // Root expected a model but got none; polarity per its expectation.
        tree.toggle_filter(true);
        assert!(tree.is_filtered());
        assert_eq!(rendered_formulas(&tree), vec!["forall x. P(x)", "P(b)"]);
        tree.toggle_filter(false);
        assert!(!tree.is_filtered());
        assert_eq!(
            rendered_formulas(&tree),
            vec!["forall x. P(x)", "P(a)", "P(b)"]
        );
    }

    #[test]
    fn filter_polarity_falls_back_to_the_root_outcome() {
        let response = ModelCheckerResponse {
            root_trace: Some(node(
                "forall x. P(x)",
                false,
                None,
                vec![
                    node("P(a)", false, Some(true), Vec::new()),
                    node("P(b)", true, Some(true), Vec::new()),
                ],
            )),
            feedback: Feedback::Relevant,
        };
        let (mut tree, _) = TraceTree::load(response);
        // No root expectation: polarity follows is_model = false, keeping
        // the deviating child.
        tree.toggle_filter(true);
        assert_eq!(rendered_formulas(&tree), vec!["forall x. P(x)", "P(a)"]);
    }

    #[test]
    fn filter_toggle_on_an_empty_tree_is_a_noop() {
        let (mut tree, _) = TraceTree::load(ModelCheckerResponse {
            root_trace: None,
            feedback: Feedback::Relevant,
        });
        tree.toggle_filter(true);
        assert!(!tree.is_filtered());
        assert!(tree.render().is_empty());
    }

    #[test]
    fn collapsed_nodes_stay_hidden_under_the_filter() {
        let (mut tree, _) = TraceTree::load(sample_response(Feedback::Other("full".into())));
        tree.toggle_filter(true);
        // Filter is applied but the root is collapsed: only the root shows.
        assert_eq!(rendered_formulas(&tree), vec!["forall x. P(x)"]);
    }
}
