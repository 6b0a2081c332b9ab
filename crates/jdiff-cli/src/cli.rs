use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jdiff",
    about = "Side-by-side structural diff for JSON records",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Match leaves by path
    Smart,
    /// Mark every leaf if the documents differ
    Whole,
    /// Line diff of the pretty-printed documents
    Code,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two JSON documents
    Diff(DiffArgs),
    /// Compare the two sides of an audit change set
    Changes(ChangesArgs),
    /// Print the flattened lines of a document
    Flatten(FlattenArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    #[arg(long)]
    pub mode: Option<Mode>,
    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Args)]
pub struct ChangesArgs {
    pub file: PathBuf,
    #[arg(long)]
    pub mode: Option<Mode>,
    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Args)]
pub struct FlattenArgs {
    pub file: PathBuf,
}

/// Panel titles and the visible window.
#[derive(Args, Clone, Debug, Default)]
pub struct ViewArgs {
    #[arg(long)]
    pub old_title: Option<String>,
    #[arg(long)]
    pub new_title: Option<String>,
    /// First row to show
    #[arg(long)]
    pub offset: Option<usize>,
    /// Number of rows to show
    #[arg(long)]
    pub rows: Option<usize>,
}
