use clap::Parser;
use std::path::PathBuf;

use depinfo::application::dto::OutputFormat;
use depinfo::dependency_info::domain::LaunchMode;
use depinfo::dependency_info::policies::ScopePolicyPreset;

/// Reconcile declared build dependencies against the resolved application graph
#[derive(Parser, Debug)]
#[command(name = "depinfo")]
#[command(version)]
#[command(
    about = "Reconcile declared build dependencies against the resolved application graph",
    long_about = None
)]
pub struct Args {
    /// Path to the build model document exported by the build plugin
    #[arg(short, long, value_name = "FILE")]
    pub build_model: PathBuf,

    /// Launch mode: normal, test or dev (defaults to the build model's mode)
    #[arg(short = 'm', long = "mode", value_name = "MODE")]
    pub launch_mode: Option<LaunchMode>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to depinfo.config.yml next to the build model)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Resolve POMs from the local repository only
    #[arg(long)]
    pub offline: bool,

    /// Local Maven repository root (defaults to ~/.m2/repository)
    #[arg(long, value_name = "DIR")]
    pub local_repository: Option<PathBuf>,

    /// Remote Maven repository URL, tried in order.
    /// Can be specified multiple times: -r https://repo1 -r https://repo2
    #[arg(short = 'r', long = "repository", value_name = "URL")]
    pub repositories: Vec<String>,

    /// Configuration-to-scope table: compile-classpath or runtime-classpath
    #[arg(long, value_name = "POLICY")]
    pub scope_policy: Option<ScopePolicyPreset>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
