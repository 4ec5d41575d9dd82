use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use keybench_workload::KeyIndex;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, debug, info};

#[derive(Parser)]
#[command(
    name = "keybench",
    about = "Index a YCSB-style load trace, mapping each inserted key to its line number",
    version,
    author,
    long_about = "Reads a load trace of INSERT commands and builds an in-memory index from \
each key to the 0-based line it was inserted at, for use by a workload runner. The workload \
and large load file arguments are reserved for the runner and are not read."
)]
struct Cli {
    /// Path to the load trace to index
    load_file: PathBuf,

    /// Path to the workload (transaction) trace; reserved, not read
    workload_file: PathBuf,

    /// Path to the large load trace; reserved, not read
    large_load_file: PathBuf,

    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Echo each key to stdout as it is scanned
    #[arg(long)]
    print_keys: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Parse the command line, keeping the legacy harness contract: any
/// argument error other than `--help`/`--version` prints the usage to
/// STDOUT and exits with code 1.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("This program must take three arguments!");
            println!("keybench [load file] [workload file] [large load file]");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    debug!(
        "Workload file {} accepted but not read",
        cli.workload_file.display()
    );
    debug!(
        "Large load file {} accepted but not read",
        cli.large_load_file.display()
    );

    let index = if cli.print_keys {
        KeyIndex::from_path_with_observer(&cli.load_file, |key, _| println!("{key}"))
    } else {
        KeyIndex::from_path(&cli.load_file)
    }
    .with_context(|| format!("Failed to index load file {}", cli.load_file.display()))?;

    info!(
        "Indexed {} keys from {}",
        index.len(),
        cli.load_file.display()
    );

    Ok(())
}

fn main() -> ExitCode {
    let cli = parse_args();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
