use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use timed_quiz::{Quiz, DEFAULT_QUESTIONS_PATH, DEFAULT_TIME_LIMIT};

/// One day.
const MAX_TIME_LIMIT_SECS: u64 = 86_400;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Seconds allowed for each question
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_TIME_LIMIT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..=MAX_TIME_LIMIT_SECS)
    )]
    time_limit: u64,

    /// Print debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let quiz =
        Quiz::from_csv(&args.questions).with_time_limit(Duration::from_secs(args.time_limit));

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
