mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use cli::output::OutputConfig;
use epub_build::BANNER;
use epub_build::command::{CommandLine, OUTPUT_FILE};
use epub_build::error::BuildError;
use epub_build::executor::Executor;
use epub_build::manifest::Manifest;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(output: &OutputConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(output.log_filter()));

    // stdout carries the banner and command line, so diagnostics go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!output.no_color),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = OutputConfig::from_global(cli.json, cli.verbose, cli.quiet, cli.no_color);
    init_tracing(&output);

    match run(&cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<BuildError>()
                .map_or(1, BuildError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli, output: &OutputConfig) -> Result<()> {
    if !output.json {
        output.line(BANNER)?;
    }

    let manifest = Manifest::book();
    let line = CommandLine::from_manifest(&manifest);

    if output.json {
        output.print_json(&line)?;
    } else {
        output.line(line.to_shell_string())?;
    }

    if cli.dry_run {
        return Ok(());
    }

    let executor = Executor {
        mode: cli.spawn_mode(),
        policy: cli.exit_policy(),
        working_dir: cli.directory.clone(),
    };
    let outcome = executor
        .run(&line)
        .with_context(|| format!("running {}", line.program()))?;

    if outcome.success() {
        output.status(&format!("Wrote {OUTPUT_FILE}"));
        output.detail(&format!("  Fragments: {}", manifest.len()));
    } else if outcome.status().is_some() {
        let exit = outcome
            .code()
            .map_or_else(|| "a signal".to_string(), |code| format!("code {code}"));
        output.detail(&format!("  {} exited with {exit}", line.program()));
    } else {
        output.detail(&format!("  {} could not be started", line.program()));
    }

    Ok(())
}
