//! The checker service's response payload.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Feedback mode requested for a model-checking run.
///
/// Only [`Feedback::Relevant`] carries engine semantics (the result tree is
/// fully expanded on load). Every other mode string the backend may define
/// is preserved as-is so new modes never fail decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Feedback {
    /// Every node of the trace should be immediately visible.
    Relevant,
    /// Any other backend-defined mode; the tree loads collapsed.
    Other(String),
}

impl From<String> for Feedback {
    fn from(value: String) -> Self {
        if value == "relevant" {
            Feedback::Relevant
        } else {
            Feedback::Other(value)
        }
    }
}

impl From<Feedback> for String {
    fn from(value: Feedback) -> Self {
        match value {
            Feedback::Relevant => "relevant".to_owned(),
            Feedback::Other(mode) => mode,
        }
    }
}

/// One node of the checker's recursive evaluation record for a sub-formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    /// The sub-formula this node evaluates.
    pub formula: String,
    /// Opaque translatable text payload; never interpreted here.
    #[serde(default)]
    pub description: serde_json::Value,
    /// Whether this sub-formula was actually satisfied.
    pub is_model: bool,
    /// Whether this sub-formula was expected to be satisfied.
    ///
    /// The checker contract requires this on every node. `None` marks a
    /// malformed trace; no default is guessed, the causal filter treats
    /// such nodes as never relevant.
    #[serde(default)]
    pub should_be_model: Option<bool>,
    /// Sub-evaluations in evaluation order; empty for leaves.
    #[serde(default)]
    pub children: Vec<Arc<Trace>>,
}

impl Trace {
    /// Whether this node behaved as the checker expected, when known.
    pub fn behaved_as_expected(&self) -> Option<bool> {
        self.should_be_model.map(|expected| self.is_model == expected)
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Trace> = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter().map(|child| child.as_ref()));
        }
        count
    }
}

/// Response envelope delivered by the checker service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCheckerResponse {
    /// Root of the evaluation trace; absent means there is nothing to
    /// display, not an error.
    #[serde(default)]
    pub root_trace: Option<Arc<Trace>>,
    /// Requested feedback mode for this run.
    pub feedback: Feedback,
}
