//! Command-line front end: print the lines of a log whose timestamp is at or
//! after a cutoff given as a relative offset from now.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use timegrep::{cutoff_before_now, LayoutMatcher, LineFilter, SearchError};

/// Search a log for lines with recent timestamps.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Timestamp layout, e.g. "02/Jan/2006:15:04:05 -0700"
    #[arg(short, long)]
    layout: String,

    /// Days before now for the cutoff
    #[arg(short, long, default_value_t = 0)]
    days: i64,

    /// Hours before now for the cutoff
    #[arg(short = 'H', long, default_value_t = 0)]
    hours: i64,

    /// Minutes before now for the cutoff
    #[arg(short, long, default_value_t = 0)]
    minutes: i64,

    /// Log file to search, or "-" for standard input
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("timegrep: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), SearchError> {
    let matcher = LayoutMatcher::new(&args.layout)?;
    let cutoff = cutoff_before_now(args.days, args.hours, args.minutes);
    let filter = LineFilter::new(matcher, cutoff);

    let reader: Box<dyn BufRead> = if args.file.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(&args.file)?))
    };

    for line in reader.lines() {
        let line = line?;
        if filter.matches(&line) {
            println!("{line}");
        }
    }
    Ok(())
}
