//! Expand/collapse bookkeeping over the flattened sequence.

use indexmap::IndexSet;

use crate::errors::TreeError;
use crate::flatten::FlatNode;

/// Maximum supported depth of a flattened trace.
///
/// Structural guard against runaway trees in malformed checker output.
/// Legitimate evaluation traces stay orders of magnitude below this.
pub const MAX_TREE_DEPTH: usize = 4096;

/// Expand/collapse state for a flat node sequence.
///
/// Nodes are identified by their index in the flattened sequence. This
/// state is independent of the causal filter's `visible` flag; the two are
/// composed by logical AND at render time.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: IndexSet<usize>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `node_id` is currently expanded.
    pub fn is_expanded(&self, node_id: usize) -> bool {
        self.expanded.contains(&node_id)
    }

    /// Mark `node_id` expanded.
    pub fn expand(&mut self, node_id: usize) {
        self.expanded.insert(node_id);
    }

    /// Mark `node_id` collapsed.
    pub fn collapse(&mut self, node_id: usize) {
        self.expanded.shift_remove(&node_id);
    }

    /// Expand every expandable node in `nodes`.
    ///
    /// Iterates the flat sequence, so call-stack depth is independent of
    /// the tree shape. A sequence deeper than [`MAX_TREE_DEPTH`] aborts
    /// before any state change and returns the structural-limit error, so
    /// the caller can fall back to the prior (typically collapsed) view.
    pub fn expand_all(&mut self, nodes: &[FlatNode]) -> Result<(), TreeError> {
        if let Some(depth) = nodes.iter().map(|node| node.level).max() {
            if depth > MAX_TREE_DEPTH {
                return Err(TreeError::DepthLimitExceeded {
                    depth,
                    limit: MAX_TREE_DEPTH,
                });
            }
        }
        for (node_id, node) in nodes.iter().enumerate() {
            if node.expandable {
                self.expanded.insert(node_id);
            }
        }
        Ok(())
    }

    /// Indices of the nodes whose ancestors are all expanded.
    ///
    /// Single pass over the sequence carrying a stack of open ancestors;
    /// an entry records whether the subtree below that ancestor is
    /// reachable (ancestor shown and itself expanded). Nodes at level 0
    /// have no ancestors and are always rendered.
    pub fn rendered_indices(&self, nodes: &[FlatNode]) -> Vec<usize> {
        let mut rendered = Vec::new();
        let mut ancestors: Vec<(usize, bool)> = Vec::new();
        for (node_id, node) in nodes.iter().enumerate() {
            while ancestors
                .last()
                .is_some_and(|&(level, _)| level >= node.level)
            {
                ancestors.pop();
            }
            let shown = ancestors.last().map_or(true, |&(_, open)| open);
            if shown {
                rendered.push(node_id);
            }
            ancestors.push((node.level, shown && self.is_expanded(node_id)));
        }
        rendered
    }
}

/// The contiguous block of descendants of `node_id` in the flat sequence.
///
/// Relies on the pre-order contiguity invariant: the descendants of a node
/// are exactly the nodes that follow it with a strictly greater level,
/// ending at the first node whose level drops back to the node's own (or at
/// the sequence end). Pure slice arithmetic; the original trace tree is
/// never consulted.
pub fn descendants(nodes: &[FlatNode], node_id: usize) -> &[FlatNode] {
    let Some(node) = nodes.get(node_id) else {
        return &[];
    };
    let start = node_id + 1;
    let end = nodes[start..]
        .iter()
        .position(|candidate| candidate.level <= node.level)
        .map_or(nodes.len(), |offset| start + offset);
    &nodes[start..end]
}
