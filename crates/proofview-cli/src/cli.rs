//! CLI argument definitions: the top-level `Cli` struct.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub(crate) const CLI_LONG_ABOUT: &str =
    "Render model-checker result traces as an indented, filterable tree.\n\n\
    Typical usage:\n  \
    1. proofview response.json\n  \
    2. proofview response.json --filter-causes\n  \
    3. proofview response.json --expand-all --format json\n\n\
    The response is the checker service's JSON payload; pass '-' to read it\n\
    from stdin. A response with feedback mode 'relevant' is fully expanded\n\
    on load, every other mode starts at the collapsed root.";

#[derive(Parser)]
#[command(name = "proofview")]
#[command(about = "Render model-checker result traces as an indented, filterable tree")]
#[command(long_about = CLI_LONG_ABOUT)]
#[command(version)]
pub(crate) struct Cli {
    /// Path to the model-checker response JSON ('-' reads stdin)
    pub(crate) response: PathBuf,

    /// Expand every node, regardless of the response's feedback mode
    #[arg(long)]
    pub(crate) expand_all: bool,

    /// Show only the causal chain: nodes whose actual-vs-expected outcome
    /// matches the root's polarity
    #[arg(long)]
    pub(crate) filter_causes: bool,

    /// Print the descendant block of the given node id instead of the tree
    #[arg(long, value_name = "NODE_ID")]
    pub(crate) descendants_of: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}
