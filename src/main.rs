//! Atomizer CLI - text on stdin, one line of JSON on stdout
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments, mapping errors to exit codes and logging setup.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use atomizer::config::ConfigError;
use atomizer::{nlp, AtomizeError, Config, ModelError, SummaryResult, TextAtomizer};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// sysexits(3) codes
const EX_DATAERR: u8 = 65;
const EX_UNAVAILABLE: u8 = 69;
const EX_IOERR: u8 = 74;
const EX_CONFIG: u8 = 78;

#[derive(Parser)]
#[command(name = "atomizer")]
#[command(author, version, about = "Summarise text from stdin as one line of JSON", long_about = None)]
struct Cli {
    /// Read configuration from this file instead of atomizer.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the JSON Schema of the summary record
    Schema,
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Schema) => {
            let schema = schemars::schema_for!(SummaryResult);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "atomizer", &mut io::stdout());
        }
        None => atomize_stdin(cli.config.as_deref())?,
    }

    Ok(())
}

/// Default path: read everything from stdin and print the summary
fn atomize_stdin(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // The model has to be usable before any input is consumed
    let model = nlp::load(&config.model)?;
    let mut atomizer = TextAtomizer::new(model, &config);

    let content = read_stdin()?;
    let result = atomizer.summarize(&content)?;
    let line = result.to_json_line()?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line).context("failed to write summary")?;
    stdout.flush().context("failed to write summary")?;

    Ok(())
}

/// Read all of stdin, decoding invalid UTF-8 lossily
fn read_stdin() -> anyhow::Result<String> {
    if atty::is(atty::Stream::Stdin) {
        info!("reading text from the terminal, finish with Ctrl-D");
    }

    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("failed to read standard input")?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(
                valid_up_to = err.utf8_error().valid_up_to(),
                "input is not valid UTF-8, replacing invalid sequences"
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Log to stderr so stdout only ever carries the JSON line
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn report(err: &anyhow::Error) {
    colored::control::set_override(atty::is(atty::Stream::Stderr));
    eprintln!("{} {:#}", "error:".red().bold(), err);
}

/// Distinguish bad input from an unusable model or configuration
fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ConfigError>().is_some() {
        EX_CONFIG
    } else if err.downcast_ref::<ModelError>().is_some() {
        EX_UNAVAILABLE
    } else if err.downcast_ref::<AtomizeError>().is_some() {
        EX_DATAERR
    } else if err.downcast_ref::<io::Error>().is_some() {
        EX_IOERR
    } else {
        1
    }
}
