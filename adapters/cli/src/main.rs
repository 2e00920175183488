#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for listing, drawing and checking crossword levels.

mod answers;

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossword_core::{LevelId, LevelSummary};
use crossword_levels::JsonLevelStore;
use crossword_rendering::{RenderingBackend, TextBackend};
use crossword_system_puzzles::Puzzles;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::answers::{collect_submission, CellFill};

/// Exit status reported when a submission is wrong or incomplete.
const EXIT_REJECTED: u8 = 1;
/// Exit status reported when the command itself fails.
const EXIT_FAILURE: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "crossword", about = "Crossword level browser and answer checker")]
struct CliArgs {
    /// Level file to read; re-read on every command.
    #[arg(
        long,
        global = true,
        env = "CROSSWORD_LEVELS",
        default_value = "data/levels.json"
    )]
    levels: PathBuf,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, env = "CROSSWORD_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every level.
    Levels {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Draw a level's board and clues without revealing answers.
    Board {
        /// Identifier of the level.
        level: u32,
        /// Print the board view as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Check answers for a level.
    Verify {
        /// Identifier of the level.
        level: u32,
        /// JSON object mapping "x,y" to a letter; `-` reads standard input.
        #[arg(long, value_name = "PATH")]
        answers: Option<PathBuf>,
        /// Single cell entry such as `0,0=C` or `-1,2=C`; may be repeated.
        #[arg(
            long = "fill",
            value_name = "X,Y=LETTER",
            value_parser = CellFill::parse,
            allow_hyphen_values = true
        )]
        fills: Vec<CellFill>,
        /// Print the verification result as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the crossword command-line interface.
fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(&args.log_level);

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(args: CliArgs) -> Result<ExitCode> {
    let store = JsonLevelStore::new(args.levels);
    debug!(path = %store.path().display(), "using level file");
    let puzzles = Puzzles::new(store);
    let stdout = io::stdout();

    match args.command {
        Command::Levels { json } => {
            let summaries = puzzles.list_levels()?;
            if json {
                print_json(&summaries)?;
            } else {
                print_table(&mut stdout.lock(), &summaries)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Board { level, json } => {
            let view = puzzles.board(LevelId::new(level))?;
            if json {
                print_json(&view)?;
            } else {
                TextBackend::new(stdout.lock()).present_board(&view)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify {
            level,
            answers,
            fills,
            json,
        } => {
            let id = LevelId::new(level);
            let submission = collect_submission(answers.as_deref(), &fills)?;
            let result = puzzles.verify(id, &submission)?;
            if json {
                print_json(&result)?;
            } else {
                let view = puzzles.board(id)?;
                TextBackend::new(stdout.lock()).present_verdict(&view, &submission, &result)?;
            }
            Ok(if result.is_correct() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_REJECTED)
            })
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).context("failed to encode JSON output")?;
    writeln!(out).context("failed to write output")
}

fn print_table(out: &mut impl Write, summaries: &[LevelSummary]) -> Result<()> {
    for summary in summaries {
        writeln!(
            out,
            "{:>4}  {:<16} {}",
            summary.level_id.get(), summary.theme, summary.difficulty
        )
        .context("failed to write level list")?;
    }
    Ok(())
}
