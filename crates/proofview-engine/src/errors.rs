//! Recoverable failures and symbolic notifications raised by the engine.

use miette::Diagnostic;
use thiserror::Error;

/// Recoverable failures raised by structural tree operations.
///
/// Every failure path leaves the flat sequence in a valid, fully defined
/// state; the presentation layer always re-reads the render afterwards.
#[derive(Debug, Error, Diagnostic)]
pub enum TreeError {
    #[error("trace tree exceeds the maximum supported depth ({depth} > {limit})")]
    #[diagnostic(
        code(proofview::tree::depth_limit),
        help("the checker produced a pathologically deep trace; the collapsed root is shown instead")
    )]
    DepthLimitExceeded { depth: usize, limit: usize },
}

/// Symbolic user-facing notification emitted by the controller.
///
/// The engine never formats user-visible text; it emits stable keys and the
/// presentation layer decides how to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Auto-expansion hit the structural depth limit during load.
    ExpandError,
}

impl Notification {
    /// Stable key consumed by the notification channel.
    pub fn key(self) -> &'static str {
        match self {
            Notification::ExpandError => "result-tree.expand-error",
        }
    }
}
