//! Eager pre-order flattening of a trace tree.

use std::sync::Arc;

use proofview_api::Trace;

/// One entry of the pre-order flattening of a [`Trace`] tree.
///
/// Identity (`trace`, `level`, `expandable`) is fixed at creation; only
/// `visible` mutates afterwards, in place, through the causal filter. The
/// sequence's length and order never change once built.
#[derive(Debug, Clone)]
pub struct FlatNode {
    /// The originating trace node; never mutated through this handle.
    pub trace: Arc<Trace>,
    /// Depth from the root; the root sits at level 0.
    pub level: usize,
    /// Whether this node has children to expand.
    pub expandable: bool,
    /// Whether the causal filter currently keeps this node visible.
    pub visible: bool,
}

/// Flatten a trace tree into its pre-order sequence.
///
/// The children of a node at level L immediately follow it in the result,
/// each at level L + 1, until the next node at level <= L. Downstream
/// structural queries (ancestors, descendant blocks) rely on this
/// contiguity and never re-walk the original tree.
///
/// Expansion state plays no role here: the full tree is materialized
/// eagerly, exactly once per response. The traversal carries an explicit
/// work stack so call-stack depth is independent of the tree shape.
pub fn flatten(root: &Arc<Trace>) -> Vec<FlatNode> {
    let mut nodes = Vec::new();
    let mut stack = vec![(Arc::clone(root), 0usize)];
    while let Some((trace, level)) = stack.pop() {
        for child in trace.children.iter().rev() {
            stack.push((Arc::clone(child), level + 1));
        }
        nodes.push(FlatNode {
            expandable: !trace.children.is_empty(),
            visible: true,
            level,
            trace,
        });
    }
    nodes
}
