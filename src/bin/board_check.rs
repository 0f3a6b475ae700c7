use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use queens_board::chess::piece::PieceKind;
use queens_board::config::BoardFile;
use queens_board::report::ConflictReport;

#[derive(Parser)]
#[command(name = "board_check")]
#[command(version)]
#[command(about = "Report rook or queen conflicts on a board file")]
struct Cli {
    /// Board file (JSON)
    file: PathBuf,

    /// Piece placed on every occupied cell
    #[arg(long, default_value = "queen")]
    piece: PieceKind,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Exit with status 2 if any conflict is found
    #[arg(long)]
    fail_on_conflict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<bool> {
    let file = BoardFile::load(&cli.file)?;
    let board = file
        .build()
        .with_context(|| format!("building board from {}", cli.file.display()))?;
    info!(size = board.size(), pieces = board.piece_count(), "loaded board");

    let report = ConflictReport::new(&board, cli.piece);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{board}");
        if report.has_conflicts {
            println!("{} conflicts:", cli.piece);
            for line in report.lines() {
                println!("  {line}");
            }
        } else {
            println!("no {} conflicts", cli.piece);
        }
    }
    Ok(report.has_conflicts)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(true) if cli.fail_on_conflict => ExitCode::from(2),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
