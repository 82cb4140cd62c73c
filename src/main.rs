use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use pool_lpt::report::{render_summary, render_timeline};
use pool_lpt::scheduler::{ScheduleOutcome, ScheduleRequest, ScheduleSummary, ThreadPoolScheduler};

mod cli;

use cli::{Cli, Commands, OutputFormat};

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn demo_requests() -> Vec<ScheduleRequest> {
    vec![
        ScheduleRequest::new(2, 2).with_durations(vec![5.0, 3.0, 8.0, 6.0, 2.0]),
        ScheduleRequest::new(3, 3)
            .with_durations(vec![10.0, 5.0, 8.0, 3.0, 6.0, 4.0, 7.0, 2.0, 9.0, 1.0]),
    ]
}

fn load_request(path: &Path) -> Result<ScheduleRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request file {}", path.display()))
}

fn schedule(request: &ScheduleRequest) -> Result<ScheduleOutcome> {
    let scheduler =
        ThreadPoolScheduler::from_request(request).context("Failed to build scheduler")?;
    Ok(scheduler.run())
}

fn print_outcome(request: &ScheduleRequest, outcome: &ScheduleOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!();
            println!("Workers: {}", request.workers);
            println!("Threads per worker: {}", request.threads_per_worker);
            println!("Jobs: {:?}", request.durations);
            println!();
            print!("{}", render_timeline(&outcome.timetable, outcome.makespan));
            println!();
            print!("{}", render_summary(&outcome.timetable, outcome.makespan));
        }
        OutputFormat::Json => {
            let summary = ScheduleSummary::calculate(&outcome.timetable, outcome.makespan);
            let doc = serde_json::json!({
                "request": request,
                "outcome": outcome,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn run_application(cli: &Cli) -> Result<()> {
    let requests = match &cli.command {
        Commands::Run {
            workers,
            threads,
            input,
            durations,
        } => match input {
            Some(path) => vec![load_request(path)?],
            None => vec![ScheduleRequest::new(workers.unwrap_or(0), threads.unwrap_or(0))
                .with_durations(durations.clone())],
        },
        Commands::Demo => demo_requests(),
    };

    for request in &requests {
        info!(
            "Scheduling {} jobs on {}x{}",
            request.durations.len(),
            request.workers,
            request.threads_per_worker
        );
        let outcome = schedule(request)?;
        print_outcome(request, &outcome, cli.format)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    run_application(&cli).context("Application failed")?;

    Ok(())
}
