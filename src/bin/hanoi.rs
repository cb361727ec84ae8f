use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hanoi::builder::DEFAULT_MAX_DISKS;
use hanoi::{check, move_count, parse_moves, Move, PuzzleBuilder, Verdict};

/// Generate and validate Tower of Hanoi move sequences.
#[derive(Debug, Parser)]
#[command(name = "hanoi", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the optimal move sequence, one FROM->TO per line.
    Solve(SolveArgs),

    /// Validate a move sequence read from a file or stdin.
    Check(CheckArgs),

    /// Print the length of the optimal solution.
    Count {
        #[arg(allow_negative_numbers = true)]
        disks: i64,
    },
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// Number of disks. Zero or negative prints nothing.
    #[arg(allow_negative_numbers = true)]
    disks: i64,

    /// Label of the starting peg
    #[arg(long, default_value = "A")]
    source: String,

    /// Label of the destination peg
    #[arg(long, default_value = "C")]
    target: String,

    /// Label of the spare peg
    #[arg(long, default_value = "B")]
    auxiliary: String,

    #[command(flatten)]
    limit: LimitArgs,

    /// Print a JSON array of moves
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Number of disks, all starting on peg A.
    disks: usize,

    /// Read moves from this file instead of stdin
    #[arg(long, short)]
    input: Option<PathBuf>,

    #[command(flatten)]
    limit: LimitArgs,

    /// Read a JSON array of {"from", "to"} objects and print the verdict as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct LimitArgs {
    /// Refuse disk counts above this ceiling
    #[arg(long, default_value_t = DEFAULT_MAX_DISKS, conflicts_with = "unbounded")]
    max_disks: u32,

    /// Lift the disk-count ceiling
    #[arg(long)]
    unbounded: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(false)` when a checked sequence is invalid.
fn run(cli: Cli) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let ok = match cli.command {
        Commands::Solve(args) => {
            solve(&args, &mut out)?;
            true
        }
        Commands::Check(args) => {
            let input = read_input(args.input.as_ref())?;
            let verdict = check_input(&args, &input)?;
            writeln!(out, "{}", render_verdict(&verdict, args.json)?)?;
            verdict.ok
        }
        Commands::Count { disks } => {
            writeln!(out, "{}", move_count(disks))?;
            true
        }
    };

    out.flush()?;
    Ok(ok)
}

fn solve(args: &SolveArgs, out: &mut impl Write) -> Result<()> {
    let mut builder = PuzzleBuilder::new()
        .disks(args.disks)
        .pegs(
            args.source.clone(),
            args.target.clone(),
            args.auxiliary.clone(),
        )
        .max_disks(args.limit.max_disks);
    if args.limit.unbounded {
        builder = builder.unbounded();
    }
    let puzzle = builder.build()?;

    if args.json {
        serde_json::to_writer(&mut *out, &puzzle.solve())?;
        writeln!(out)?;
    } else {
        for mv in puzzle.iter() {
            writeln!(out, "{mv}")?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read moves from {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read moves from stdin")?;
            Ok(input)
        }
    }
}

fn check_input(args: &CheckArgs, input: &str) -> Result<Verdict> {
    if !args.limit.unbounded {
        ensure!(
            args.disks <= args.limit.max_disks as usize,
            "Disk count {} exceeds the ceiling of {}. Pass --max-disks or --unbounded",
            args.disks,
            args.limit.max_disks
        );
    }

    let moves: Vec<Move<String>> = if args.json {
        serde_json::from_str(input).context("Invalid JSON move list")?
    } else {
        parse_moves(input)?
    };

    Ok(check(args.disks, &moves))
}

fn render_verdict(verdict: &Verdict, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(verdict)?);
    }
    Ok(match &verdict.detail {
        None => "ok".to_string(),
        Some(detail) => format!("invalid: {detail}"),
    })
}
