// HexTTY: Time-Travel Hexagony Interpreter with Memory Visualization

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use hextty::grid::Grid;
use hextty::interpreter::constants::{DEFAULT_SNAPSHOT_LIMIT, DEFAULT_TUI_TICK_LIMIT};
use hextty::interpreter::engine::{Interpreter, RunOutcome};
use hextty::interpreter::io::{Input, Output};
use hextty::interpreter::trace::{has_markers, DebugLevel};
use hextty::ui::App;

#[derive(Parser, Debug)]
#[command(name = "hextty")]
#[command(version, about = "Hexagony interpreter with a time-travel debugger", long_about = None)]
struct Cli {
    /// Program file, or `-` to read the program from stdin
    #[arg(required_unless_present = "generate")]
    file: Option<PathBuf>,

    /// Program input, joined with NUL bytes; stdin is used when empty
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,

    /// Print an empty hexagon of the given size and exit
    #[arg(short, long, value_name = "SIZE", value_parser = clap::value_parser!(u32).range(1..))]
    generate: Option<u32>,

    /// Trace ticks on backtick-marked cells to stderr
    #[arg(short, long)]
    debug: bool,

    /// Trace every tick to stderr
    #[arg(short = 'D', long)]
    debug_all: bool,

    /// Open the time-travel debugger
    #[arg(short, long)]
    tui: bool,

    /// Ticks to record before opening the debugger
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TUI_TICK_LIMIT)]
    max_ticks: u64,

    /// Memory budget for recorded history, in bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_SNAPSHOT_LIMIT)]
    snapshot_limit: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(size) = cli.generate {
        println!("{}", Grid::new(size as usize));
        return Ok(());
    }

    let file = cli.file.as_deref().context("No file specified")?;
    let program_from_stdin = file == Path::new("-");
    let source = read_program(file, program_from_stdin)?;

    tracing::info!(file = %file.display(), bytes = source.len(), "loaded program");

    if cli.tui {
        let input = tui_input(&cli.args, program_from_stdin)?;
        return run_tui(&cli, &source, input);
    }

    let input = if !cli.args.is_empty() {
        Input::from_bytes(joined_args(&cli.args))
    } else if program_from_stdin {
        Input::empty()
    } else {
        Input::from_reader(io::stdin())
    };

    let level = DebugLevel::from_flags(cli.debug, cli.debug_all);
    if level == DebugLevel::Marked && !has_markers(&source) {
        tracing::warn!("--debug given but the program has no backtick-marked cells");
    }
    let mut interpreter =
        Interpreter::new(&source, input, level).with_output(Output::streaming(io::stdout()));
    interpreter.run()?;

    Ok(())
}

fn read_program(file: &Path, from_stdin: bool) -> Result<String> {
    if from_stdin {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read program from stdin")?;
        Ok(source)
    } else {
        fs::read_to_string(file).with_context(|| format!("File '{}' not found", file.display()))
    }
}

/// Arguments separated and terminated by NUL bytes
fn joined_args(args: &[String]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for arg in args {
        bytes.extend_from_slice(arg.as_bytes());
        bytes.push(0);
    }
    bytes
}

/// The debugger owns the terminal, so piped stdin is read up front
fn tui_input(args: &[String], program_from_stdin: bool) -> Result<Input> {
    if !args.is_empty() {
        return Ok(Input::from_bytes(joined_args(args)));
    }
    if program_from_stdin || io::stdin().is_terminal() {
        return Ok(Input::empty());
    }

    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read program input from stdin")?;
    Ok(Input::from_bytes(bytes))
}

fn run_tui(cli: &Cli, source: &str, input: Input) -> Result<()> {
    if cli.debug || cli.debug_all {
        tracing::warn!("debug trace is disabled in the debugger");
    }

    let mut interpreter =
        Interpreter::new(source, input, DebugLevel::Off).with_history(cli.snapshot_limit)?;

    // Record history up front, then start the debugger at tick 0
    let recording_error = match interpreter.run_for(cli.max_ticks) {
        Ok(RunOutcome::Halted) => {
            tracing::info!(
                snapshots = interpreter.total_snapshots(),
                "execution completed"
            );
            None
        }
        Ok(RunOutcome::TickLimitReached) => {
            tracing::info!(ticks = cli.max_ticks, "tick limit reached while recording");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "entering debugger with partial execution history");
            Some(e)
        }
    };

    if let Err(e) = interpreter.rewind_to_start() {
        tracing::warn!(error = %e, "failed to rewind to start");
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(interpreter);
    if let Some(e) = &recording_error {
        app = app.with_recording_error(e);
    }
    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Debugger failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_are_nul_terminated() {
        let args = vec!["ab".to_string(), "c".to_string()];
        assert_eq!(joined_args(&args), b"ab\0c\0");
        assert!(joined_args(&[]).is_empty());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["hextty", "-D", "prog.hxg", "x", "-y"]).unwrap();
        assert!(cli.debug_all);
        assert_eq!(cli.file, Some(PathBuf::from("prog.hxg")));
        assert_eq!(cli.args, vec!["x".to_string(), "-y".to_string()]);

        let cli = Cli::try_parse_from(["hextty", "-g", "3"]).unwrap();
        assert_eq!(cli.generate, Some(3));
        assert!(Cli::try_parse_from(["hextty", "-g", "0"]).is_err());
        assert!(Cli::try_parse_from(["hextty"]).is_err());
    }
}
