mod logging;
mod outcome;

use clap::Parser;
use clap::error::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use hs_app::{AppResult, CancelToken, RunProgressEvent, RunReport, RunRequest};

use crate::outcome::Outcome;

const BANNER: &str = r"
 _____       _         _____ _
|  |  |_ _ _| |___ ___|   __|_|_____
|     | | | . |  _| . |__   | |     |
|__|__|_  |___|_| |___|_____|_|_|_|_|
      |___|
";

#[derive(Parser, Debug)]
#[command(name = "hs-cli")]
#[command(about = "HydroSim CLI - EPANET water-network runner", long_about = None)]
struct Cli {
    /// Path to the EPANET network file
    #[arg(value_name = "network.inp", num_args = 0..)]
    inputs: Vec<PathBuf>,

    /// Log level for hydrosim crates (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    let handler = ctrlc::set_handler(move || handler_token.cancel());

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if is_informational(&e) => e.exit(),
        Err(e) => return finish(Outcome::from_clap(&e)),
    };
    logging::init_logging(&cli.log_level);
    if let Err(e) = handler {
        tracing::warn!(error = %e, "could not install interrupt handler");
    }

    let program = std::env::args_os()
        .next()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hs-cli".to_string());

    let outcome = match invoke(&program, &cli, &cancel) {
        Ok(()) => Outcome::Success,
        Err(e) => Outcome::from_error(&e),
    };
    finish(outcome)
}

/// Help and version requests keep clap's own output and exit status.
fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

fn finish(outcome: Outcome) -> ExitCode {
    outcome.emit();
    ExitCode::from(outcome.exit_code())
}

fn invoke(program: &str, cli: &Cli, cancel: &CancelToken) -> AppResult<()> {
    let input = hs_app::parse_cmdline(program, &cli.inputs)?;

    println!("{BANNER}");

    let report = run_simulation(&input, cancel)?;
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn run_simulation(input: &Path, cancel: &CancelToken) -> AppResult<RunReport> {
    hs_app::run(
        &RunRequest { input },
        cancel,
        Some(&mut |event: RunProgressEvent| {
            tracing::info!(
                stage = event.stage.label(),
                elapsed_s = event.elapsed_wall_s,
                message = event.message.as_deref().unwrap_or(""),
                "progress"
            );
        }),
    )
}

fn print_report(report: &RunReport) {
    println!("Network: {}", report.input.display());
    println!(
        "  Nodes: {} ({} junctions, {} reservoirs, {} tanks)",
        report.node_count, report.counts.junctions, report.counts.reservoirs, report.counts.tanks
    );
    println!(
        "  Links: {} ({} pipes, {} pumps, {} valves)",
        report.link_count, report.counts.pipes, report.counts.pumps, report.counts.valves
    );

    if report.zones.is_empty() {
        println!("No zones found");
    } else {
        println!("Zones:");
        for zone in &report.zones {
            println!("  {zone:?}");
        }
    }
}
