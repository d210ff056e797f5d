#![doc = include_str!("../README.md")]

//! Model-checker wire types.
//!
//! This crate defines the JSON payload delivered by the checker service:
//! the recursive evaluation [`Trace`], the [`ModelCheckerResponse`]
//! envelope, and the [`Feedback`] mode. Everything here is read-only from
//! the engine's point of view: a response is decoded once and never
//! mutated afterwards.

pub mod trace;
#[cfg(any(test, feature = "proptest"))]
pub mod proptest_generators;

pub use trace::{Feedback, ModelCheckerResponse, Trace};
