#![doc = include_str!("../README.md")]

//! Trace-tree engine for model-checker results.
//!
//! This crate flattens the checker's recursive evaluation trace into an
//! ordered, depth-annotated sequence, maintains expand/collapse state,
//! narrows the rendered list through the causal relevance filter, and glues
//! the three together in a controller the presentation layer drives.

pub mod errors;
pub mod expansion;
pub mod filter;
pub mod flatten;
pub mod tree;

pub use errors::{Notification, TreeError};
pub use flatten::{flatten, FlatNode};
pub use tree::{NodeView, TraceTree};
