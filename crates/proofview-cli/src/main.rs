#![doc = include_str!("../README.md")]

mod cli;
mod render;

use std::fs;
use std::io::Read;

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use tracing_subscriber::EnvFilter;

use proofview_api::ModelCheckerResponse;
use proofview_engine::{NodeView, TraceTree};

use crate::cli::{Cli, OutputFormat};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = read_response(&cli)?;
    let response: ModelCheckerResponse = serde_json::from_str(&raw)
        .into_diagnostic()
        .wrap_err("model-checker response is not valid JSON")?;

    let (mut tree, notifications) = TraceTree::load(response);
    for notification in notifications {
        tracing::warn!(
            key = notification.key(),
            "expanding the result tree failed; showing the collapsed root"
        );
    }

    if cli.expand_all {
        if let Err(error) = tree.expand_all() {
            tracing::warn!(
                key = proofview_engine::Notification::ExpandError.key(),
                %error,
                "expanding the result tree failed; showing the collapsed root"
            );
        }
    }
    if cli.filter_causes {
        tree.toggle_filter(true);
    }

    if let Some(node_id) = cli.descendants_of {
        let rows: Vec<NodeView> = tree.descendants(node_id).iter().map(NodeView::from).collect();
        emit(&cli, &rows, &tree)?;
        return Ok(());
    }

    let rows = tree.render();
    emit(&cli, &rows, &tree)
}

fn emit(cli: &Cli, rows: &[NodeView], tree: &TraceTree) -> miette::Result<()> {
    match cli.format {
        OutputFormat::Text => {
            print!(
                "{}",
                render::render_summary(rows.len(), tree.len(), tree.is_filtered())
            );
            print!("{}", render::render_text(rows));
        }
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "shown": rows.len(),
                "total": tree.len(),
                "filtered": tree.is_filtered(),
                "nodes": rows,
            });
            let rendered = serde_json::to_string_pretty(&doc).into_diagnostic()?;
            println!("{rendered}");
        }
    }
    Ok(())
}

fn read_response(cli: &Cli) -> miette::Result<String> {
    if cli.response.to_str() == Some("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .into_diagnostic()
            .wrap_err("failed to read the response from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(&cli.response)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read {}", cli.response.display()))
    }
}
