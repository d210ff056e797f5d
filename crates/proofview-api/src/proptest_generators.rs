//! Proptest strategies for generating well-formed `Trace` trees.

use std::sync::Arc;

use proptest::prelude::*;

use crate::trace::Trace;

/// Strategy for an arbitrary evaluation trace.
///
/// Generated traces have:
/// - up to 5 levels of nesting
/// - up to 4 children per node
/// - `should_be_model` populated on every node (well-formed per the
///   checker contract)
pub fn arb_trace() -> impl Strategy<Value = Arc<Trace>> {
    arb_leaf().prop_recursive(5, 48, 4, |inner| {
        (
            arb_formula(),
            any::<bool>(),
            any::<bool>(),
            proptest::collection::vec(inner, 1..=4),
        )
            .prop_map(|(formula, is_model, should_be_model, children)| {
                Arc::new(Trace {
                    formula,
                    description: serde_json::Value::Null,
                    is_model,
                    should_be_model: Some(should_be_model),
                    children,
                })
            })
    })
}

/// Like [`arb_trace`], but `should_be_model` is absent on roughly a third
/// of the nodes, exercising the malformed-trace fallback paths.
pub fn arb_sparse_trace() -> impl Strategy<Value = Arc<Trace>> {
    arb_sparse_leaf().prop_recursive(5, 48, 4, |inner| {
        (
            arb_formula(),
            any::<bool>(),
            arb_expectation(),
            proptest::collection::vec(inner, 1..=4),
        )
            .prop_map(|(formula, is_model, should_be_model, children)| {
                Arc::new(Trace {
                    formula,
                    description: serde_json::Value::Null,
                    is_model,
                    should_be_model,
                    children,
                })
            })
    })
}

fn arb_formula() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,3}"
}

fn arb_expectation() -> impl Strategy<Value = Option<bool>> {
    prop_oneof![
        2 => any::<bool>().prop_map(Some),
        1 => Just(None),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Arc<Trace>> {
    (arb_formula(), any::<bool>(), any::<bool>()).prop_map(
        |(formula, is_model, should_be_model)| {
            Arc::new(Trace {
                formula,
                description: serde_json::Value::Null,
                is_model,
                should_be_model: Some(should_be_model),
                children: Vec::new(),
            })
        },
    )
}

fn arb_sparse_leaf() -> impl Strategy<Value = Arc<Trace>> {
    (arb_formula(), any::<bool>(), arb_expectation()).prop_map(
        |(formula, is_model, should_be_model)| {
            Arc::new(Trace {
                formula,
                description: serde_json::Value::Null,
                is_model,
                should_be_model,
                children: Vec::new(),
            })
        },
    )
}
