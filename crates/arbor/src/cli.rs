//! Command-line interface for the `arbor` binary

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::filter::LevelFilter;

use crate::annotator::Annotator;
use crate::config::{
    AnnotateConfig, FieldKeys, DEFAULT_CHILDREN_KEY, DEFAULT_ID_KEY, DEFAULT_NUM_LEAFS_KEY,
};
use crate::logging;
use crate::tree_file::{annotate_file, FileOutcome};

/// Annotate a d3 tree JSON file with per-node child counts and optional ids.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "arbor", version, about)]
pub struct Cli {
    /// Tree JSON file to read
    pub input: PathBuf,

    /// Where to write the annotated tree (defaults to overwriting INPUT)
    pub output: Option<PathBuf>,

    /// Also assign a unique pre-order `id` to every node
    #[arg(long)]
    pub ids: bool,

    /// Field holding a node's children
    #[arg(long, value_name = "KEY", default_value = DEFAULT_CHILDREN_KEY)]
    pub children_key: String,

    /// Field receiving the direct child count
    #[arg(long, value_name = "KEY", default_value = DEFAULT_NUM_LEAFS_KEY)]
    pub leaf_count_key: String,

    /// Field receiving the pre-order id
    #[arg(long, value_name = "KEY", default_value = DEFAULT_ID_KEY)]
    pub id_key: String,

    /// Print the annotation counts as JSON on stdout
    #[arg(long)]
    pub report: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// The annotation configuration selected by the flags.
    pub fn config(&self) -> AnnotateConfig {
        AnnotateConfig::new()
            .assign_ids(self.ids)
            .keys(FieldKeys::new(
                &self.children_key,
                &self.leaf_count_key,
                &self.id_key,
            ))
    }

    /// The log level selected by `-v`/`-q`.
    pub fn log_level(&self) -> LevelFilter {
        logging::level_for(self.verbose, self.quiet)
    }
}

/// Run one annotation job as described by the arguments.
pub fn run(cli: &Cli) -> anyhow::Result<FileOutcome> {
    let annotator = Annotator::new(cli.config());
    annotate_file(&cli.input, cli.output.as_deref(), &annotator)
        .with_context(|| format!("could not process {}", cli.input.display()))
}

/// Human-readable status lines for a finished job.
pub fn summary(cli: &Cli, outcome: &FileOutcome) -> anyhow::Result<Vec<String>> {
    let mut lines = vec![format!(
        "Done. Output written to {}",
        outcome.output.display()
    )];
    if cli.ids {
        lines.push(format!("Assigned ids to {} nodes", outcome.report.nodes));
    }
    if cli.report {
        lines.push(serde_json::to_string(&outcome.report)?);
    }
    Ok(lines)
}
