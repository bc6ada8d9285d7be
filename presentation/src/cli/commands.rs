//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for panel reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with all stages
    Full,
    /// Only the final integrated result
    Final,
    /// JSON output
    Json,
}

impl OutputFormat {
    /// Parse a config-file format string ("full", "final", "json")
    pub fn from_config(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "full" => Some(OutputFormat::Full),
            "final" => Some(OutputFormat::Final),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// CLI arguments for roundtable
#[derive(Parser, Debug)]
#[command(name = "roundtable")]
#[command(author, version, about = "Expert panel - A planner convenes weighted roles, experts deliberate, an integrator delivers one verdict")]
#[command(long_about = r#"
Roundtable convenes a panel of expert roles to work a task to a verdict.

The pipeline has four stages:
1. Plan: A planner reads the task and convenes weighted expert roles
2. Analyze: Every convened role analyzes the task in parallel
3. Critique: Each role reviews the full set of analyses
4. Integrate: An integrator reconciles the panel into one result

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./roundtable.toml   Project-level config
3. ~/.config/roundtable/config.toml   Global config

Example:
  roundtable "Should we capitalize or expense this migration project?"
  roundtable --planner gpt-5.2 --no-critique "Assess the Q3 revenue dip"
  roundtable -o json "Review the new lease accounting treatment" > report.json
"#)]
pub struct Cli {
    /// The task to put before the panel
    pub task: Option<String>,

    /// Model to use for the planner
    #[arg(long, value_name = "MODEL")]
    pub planner: Option<String>,

    /// Model to use for the integrator
    #[arg(long, value_name = "MODEL")]
    pub integrator: Option<String>,

    /// Skip the critique stage
    #[arg(long)]
    pub no_critique: bool,

    /// Abort on the first role failure instead of degrading
    #[arg(long)]
    pub abort_on_failure: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write a JSONL transcript to the given path
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}
