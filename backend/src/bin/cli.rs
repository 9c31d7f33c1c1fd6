//! HST interactive planner binary.
//!
//! Loads the room inventory and reservation ledger, prompts for the event
//! constraints (re-prompting on malformed input), generates the plan, and
//! writes the schedule report.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin hst
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use hst_rust::config::PlannerConfig;
use hst_rust::io::{InventoryLoader, LedgerLoader, ScheduleWriter};
use hst_rust::models::EventConstraints;
use hst_rust::parsing::constraints::{
    parse_attendees, parse_event_date, parse_event_duration, parse_event_time, InputError,
};
use hst_rust::scheduler::PhaseScheduler;

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let config = PlannerConfig::from_default_location().unwrap_or_default();
    info!(
        "using inventory {} and ledger {}",
        config.files.inventory.display(),
        config.files.ledger.display()
    );

    let inventory = InventoryLoader::load_from_file(&config.files.inventory)?;
    let ledger = LedgerLoader::load_from_file(&config.files.ledger)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let date = prompt_until(
        &mut input,
        "Enter the date of the event (yyyy-mm-dd): ",
        parse_event_date,
    )?;
    let start = prompt_until(
        &mut input,
        "Enter the start time of the event (hh:mm AM/PM): ",
        parse_event_time,
    )?;
    let duration = prompt_until(
        &mut input,
        "Enter the duration of the event (hh:mm): ",
        parse_event_duration,
    )?;
    let attendees = prompt_until(
        &mut input,
        "Enter the number of attendees: ",
        parse_attendees,
    )?;

    let constraints = EventConstraints::new(date, start, duration, attendees);
    println!(
        "Generating plan for {} at {}, with a duration of {} hours with {} attendees.",
        constraints.date, constraints.start, constraints.duration, constraints.attendees
    );

    let scheduler = PhaseScheduler::new(&inventory, &ledger, &constraints);
    let plan = scheduler.generate_plan()?;

    let stem = prompt_line(
        &mut input,
        "Please enter the name for the CSV file (without extension): ",
    )?;
    let stem = match stem.trim() {
        "" => config.files.output_stem.as_str(),
        entered => entered,
    };
    let file_name = PathBuf::from(format!("{}.csv", stem));
    ScheduleWriter::write_csv(&plan, &file_name)?;

    println!(
        "Your schedule plan has been generated! Check \"{}\" in this directory to see the schedule.",
        file_name.display()
    );
    Ok(())
}

/// Prompt repeatedly until `parse` accepts the entered line. There is no
/// retry limit; a closed input stream is the only way out besides success.
fn prompt_until<R, T, F>(input: &mut R, prompt: &str, parse: F) -> anyhow::Result<T>
where
    R: BufRead,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        match parse(&prompt_line(input, prompt)?) {
            Ok(value) => return Ok(value),
            Err(err) => println!("{}", err),
        }
    }
}

fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> anyhow::Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("failed to read input")?;
    if bytes == 0 {
        anyhow::bail!("input stream closed before the constraints were complete");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
