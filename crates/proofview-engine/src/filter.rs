//! Causal relevance filter over the flattened sequence.

use tracing::warn;

use crate::flatten::FlatNode;

/// Recompute every node's `visible` flag for the requested polarity.
///
/// Root-down single pass in pre-order: the root is always visible; any
/// other node is visible iff its parent is visible and the node's
/// actual-vs-expected outcome matches `expected_polarity`. Visibility is
/// therefore monotone down the tree: a filtered-out branch never
/// resurfaces through its children.
///
/// Nodes without an expectation (malformed per the checker contract) are
/// never relevant; the pass still assigns them a defined `visible` value
/// and reports the degradation once.
pub fn apply_filter(nodes: &mut [FlatNode], expected_polarity: bool) {
    // (level, visible) per open ancestor. Explicit stack: the sequence can
    // be arbitrarily deep.
    let mut ancestors: Vec<(usize, bool)> = Vec::new();
    let mut missing_expectations = 0usize;
    for node in nodes.iter_mut() {
        while ancestors
            .last()
            .is_some_and(|&(level, _)| level >= node.level)
        {
            ancestors.pop();
        }
        let visible = match ancestors.last() {
            // The root is always shown.
            None => true,
            Some(&(_, parent_visible)) => {
                let relevant = match node.trace.behaved_as_expected() {
                    Some(actual) => actual == expected_polarity,
                    None => {
                        missing_expectations += 1;
                        false
                    }
                };
                parent_visible && relevant
            }
        };
        node.visible = visible;
        ancestors.push((node.level, visible));
    }
    if missing_expectations > 0 {
        warn!(
            nodes = missing_expectations,
            "trace nodes without an expectation were filtered as irrelevant"
        );
    }
}

/// Reset every node to visible. O(n), no structural change.
pub fn clear_filter(nodes: &mut [FlatNode]) {
    for node in nodes.iter_mut() {
        node.visible = true;
    }
}
