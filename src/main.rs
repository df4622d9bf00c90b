//! Skyscraper Row Solver
//!
//! Lists every arrangement of a row of buildings with distinct heights that
//! shows the requested number of buildings from the near end and satisfies
//! positional height constraints. Run `skyscrapers repl` to explore a puzzle
//! one criterion at a time.

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use skyscrapers::format::{format_hints, format_json, format_report};
use skyscrapers::permutation::DEFAULT_BLOCKS;
use skyscrapers::{Configuration, ConstraintSpec, PuzzleError};

/// Solves a single row of a skyscraper puzzle.
#[derive(Parser)]
#[command(name = "skyscrapers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply the given criteria and print the remaining solutions.
    Solve(SolveArgs),
    /// Start an interactive session reading commands from stdin.
    Repl {
        /// Initial number of buildings in the row (1-5).
        #[arg(long, default_value_t = DEFAULT_BLOCKS)]
        blocks: usize,
    },
}

#[derive(clap::Args)]
struct SolveArgs {
    /// Number of buildings in the row (1-5).
    #[arg(long, default_value_t = DEFAULT_BLOCKS)]
    blocks: usize,
    /// Number of buildings that must be visible from the near end.
    #[arg(long)]
    visible: Option<usize>,
    /// Positional constraint such as `1>2` or `3!=1`; may be repeated.
    #[arg(long = "constraint", value_name = "SPEC")]
    constraints: Vec<ConstraintSpec>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Default for SolveArgs {
    fn default() -> Self {
        Self {
            blocks: DEFAULT_BLOCKS,
            visible: None,
            constraints: Vec::new(),
            format: OutputFormat::Text,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Solve(args)) => run_solve(&args),
        Some(Command::Repl { blocks }) => run_repl(blocks),
        // default: solve the default row with no criteria
        None => run_solve(&SolveArgs::default()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds a configuration from command-line criteria.
///
/// The visible count is applied first, then constraints in the order given.
fn configure(args: &SolveArgs) -> Result<Configuration, PuzzleError> {
    let mut view = Configuration::new();
    view.set_blocks(args.blocks)?;
    if let Some(visible) = args.visible {
        view.set_desired_visible(visible)?;
    }
    for spec in &args.constraints {
        view.apply(spec)?;
    }
    Ok(view)
}

fn run_solve(args: &SolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let view = configure(args)?;
    match args.format {
        OutputFormat::Text => print!("{}", format_report(&view)),
        OutputFormat::Json => println!("{}", format_json(&view)?),
    }
    Ok(())
}

/// One line typed into the interactive session.
#[derive(Parser)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Subcommand)]
enum ReplCommand {
    /// Start over with a new row length; clears all criteria.
    Blocks { count: usize },
    /// Keep only rows with this many visible buildings.
    Visible { count: usize },
    /// Keep only rows where POSITION OPERATOR VALUE holds, e.g. `constrain 1 > 2`.
    Constrain {
        position: usize,
        operator: String,
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },
    /// Print the criteria and the remaining solutions.
    Show,
    /// Print the heights still possible at each position.
    Hints,
    /// Print the current state as JSON.
    Json,
    /// Leave the session.
    #[command(alias = "exit")]
    Quit,
}

/// Outcome of a single interactive command.
enum Flow {
    Continue,
    Quit,
}

fn run_repl(blocks: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = Configuration::new();
    view.set_blocks(blocks)?;

    println!(
        "{} solutions for {} blocks. Type `help` for commands.",
        view.solutions().len(),
        view.blocks()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let parsed = match ReplLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) => {
                // clap renders its own help and usage errors
                print!("{}", e.render());
                continue;
            }
        };

        match execute(&mut view, parsed.command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                warn!(command = %line.trim(), "rejected command");
                println!("Error: {e}");
            }
        }
    }

    Ok(())
}

fn execute(
    view: &mut Configuration,
    command: ReplCommand,
) -> Result<Flow, Box<dyn std::error::Error>> {
    debug!(
        blocks = view.blocks(),
        remaining = view.solutions().len(),
        "executing command"
    );
    match command {
        ReplCommand::Blocks { count } => {
            view.set_blocks(count)?;
            println!("{} solutions", view.solutions().len());
        }
        ReplCommand::Visible { count } => {
            view.set_desired_visible(count)?;
            println!("{} solutions", view.solutions().len());
        }
        ReplCommand::Constrain {
            position,
            operator,
            value,
        } => {
            view.add_constraint(position, &operator, value)?;
            println!("{} solutions", view.solutions().len());
        }
        ReplCommand::Show => print!("{}", format_report(view)),
        ReplCommand::Hints => print!("{}", format_hints(view)),
        ReplCommand::Json => println!("{}", format_json(view)?),
        ReplCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
