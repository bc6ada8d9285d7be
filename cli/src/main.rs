//! CLI entrypoint for Roundtable
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use roundtable_application::{FailurePolicy, RunPanelInput, RunPanelUseCase};
use roundtable_domain::Task;
use roundtable_infrastructure::{ConfigLoader, JsonlTranscriptLogger, OpenAiGateway};
use roundtable_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting Roundtable");

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // CLI model overrides
    if let Some(planner) = &cli.planner {
        config.models.planner = Some(planner.clone());
    }
    if let Some(integrator) = &cli.integrator {
        config.models.integrator = Some(integrator.clone());
    }

    // Surface config issues; fatal ones stop the run before any request
    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_fatal()) {
        warn!("config: {}", issue.message);
    }
    let fatal: Vec<_> = issues.iter().filter(|i| i.is_fatal()).collect();
    if !fatal.is_empty() {
        for issue in &fatal {
            eprintln!("config error: {}", issue.message);
        }
        bail!("configuration has {} fatal issue(s)", fatal.len());
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // Task is required
    let task = match cli.task {
        Some(t) => t,
        None => bail!("A task is required. Run with --help for usage."),
    };
    let Some(panel_task) = Task::try_new(task.as_str()) else {
        bail!("The task must not be blank.");
    };

    // === Dependency injection ===
    let (registry, _) = config.to_registry();
    let (policy, _) = config.panel.to_policy();
    let (settings, _) = config.gateway.to_settings();

    let policy = if cli.abort_on_failure {
        policy.with_partial_failure(FailurePolicy::Abort)
    } else {
        policy
    };

    let gateway = Arc::new(OpenAiGateway::new(settings)?);

    // Build input
    let mut input = RunPanelInput::new(panel_task).with_policy(policy);
    if cli.no_critique || !config.panel.critique {
        input = input.without_critique();
    }

    // Ctrl-C cancels the run and aborts outstanding invocations
    let cancellation = CancellationToken::new();
    {
        let token = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, cancelling run");
                token.cancel();
            }
        });
    }

    let mut use_case = RunPanelUseCase::new(gateway, registry).with_cancellation(cancellation);

    let transcript_path = cli.transcript.clone().or_else(|| {
        config
            .transcript
            .enabled
            .then(|| config.transcript.resolved_path())
    });
    if let Some(path) = transcript_path {
        match JsonlTranscriptLogger::new(&path) {
            Some(logger) => {
                info!("Writing transcript to {}", path.display());
                use_case = use_case.with_transcript(Arc::new(logger));
            }
            None => warn!("Could not open transcript file {}", path.display()),
        }
    }

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|                 Roundtable - Expert Panel                  |");
        println!("+============================================================+");
        println!();
        println!("Task: {}", task);
        println!();
    }

    // Execute with or without progress reporting
    let report = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    // Output results
    let format = cli
        .output
        .or_else(|| {
            config.output.format.as_deref().and_then(|s| {
                let parsed = OutputFormat::from_config(s);
                if parsed.is_none() {
                    warn!("Unknown output format '{}' in config, using final", s);
                }
                parsed
            })
        })
        .unwrap_or(OutputFormat::Final);

    let rendered = match format {
        OutputFormat::Full => ConsoleFormatter::format(&report),
        OutputFormat::Final => ConsoleFormatter::format_final_only(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };

    println!("{}", rendered);

    Ok(())
}
