//! N-Queens solution counter
//!
//! Prints the number of solutions for one board size and the time the search
//! took.

use std::path::Path;
use std::process;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use log::info;

use queens::count_solutions;
use queens::timer::{with_timer, Stopwatch};

/// Exit status for a missing or malformed board size.
const USAGE_EXIT_CODE: i32 = 2;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board size, which is also the number of queens
    size: u32,

    /// Log search progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn usage() -> String {
    let program = std::env::args()
        .next()
        .as_deref()
        .and_then(|arg| Path::new(arg).file_name())
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());
    format!("Usage: ./{program} <queen size>")
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                println!("{}", usage());
                process::exit(USAGE_EXIT_CODE);
            }
        },
    };

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let _run = Stopwatch::start("queens run");
    let (count, elapsed) = with_timer(|| count_solutions(args.size));
    let count = count?;
    info!("size {} done in {:?}", args.size, elapsed);

    println!("Solution num = {count}");
    println!("elapsed time = {elapsed:?}");
    Ok(())
}
