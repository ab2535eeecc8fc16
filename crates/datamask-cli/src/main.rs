mod logging;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use datamask_core::{ColumnRef, Error as CoreError};
use datamask_process::{
    AnonymizationRun, DEFAULT_PROCESSOR, ProcessError, ProcessSettings, ProcessorRegistry,
    RunReport,
};
use logging::init_logging;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("process error: {0}")]
    Process(#[from] ProcessError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "datamask", version, about = "Datamask CLI")]
struct Cli {
    /// Append JSON log lines to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available processors.
    List(ListArgs),
    /// Apply a processor to values from the arguments or stdin.
    Process(ProcessArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Print a JSON array instead of one name per line.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ProcessArgs {
    /// Processor name.
    #[arg(long, short, default_value = DEFAULT_PROCESSOR)]
    processor: String,
    /// Source column as `schema.table.column`.
    #[arg(long, conflicts_with_all = ["schema", "table", "column"])]
    source: Option<String>,
    /// Schema of the source column.
    #[arg(long, default_value = "")]
    schema: String,
    /// Table of the source column.
    #[arg(long, default_value = "")]
    table: String,
    /// Name of the source column.
    #[arg(long, default_value = "")]
    column: String,
    /// TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for deterministic output (overrides the settings file).
    #[arg(long)]
    seed: Option<u64>,
    /// Print `{"input", "output"}` objects instead of bare values.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Values to process; stdin lines are used when none are given.
    #[arg(value_name = "VALUE")]
    values: Vec<String>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    match cli.command {
        Command::List(args) => run_list(args),
        Command::Process(args) => run_process(args),
    }
}

fn run_list(args: ListArgs) -> Result<(), CliError> {
    let registry = ProcessorRegistry::new();
    let mut out = io::stdout().lock();
    if args.json {
        writeln!(out, "{}", serde_json::to_string(&registry.names())?)?;
    } else {
        for name in registry.names() {
            writeln!(out, "{name}")?;
        }
    }
    Ok(())
}

fn run_process(args: ProcessArgs) -> Result<(), CliError> {
    let ProcessArgs {
        processor,
        source,
        schema,
        table,
        column,
        config,
        seed,
        json,
        values,
    } = args;

    let source = match source {
        Some(value) => ColumnRef::parse(&value)?,
        None => ColumnRef::new(schema, table, column),
    };

    let mut settings = match config {
        Some(path) => ProcessSettings::load(&path)?,
        None => ProcessSettings::default(),
    };
    if seed.is_some() {
        settings.seed = seed;
    }

    let registry = Arc::new(ProcessorRegistry::new());
    registry.lookup(&processor)?;
    let mut run = AnonymizationRun::new(registry, settings)?;

    let mut out = io::stdout().lock();
    let mut emit = |run: &mut AnonymizationRun, input: &str| -> Result<(), CliError> {
        let output = run.dispatch(&processor, &source, input)?;
        if json {
            writeln!(out, "{}", json!({ "input": input, "output": output }))?;
        } else {
            writeln!(out, "{output}")?;
        }
        Ok(())
    };

    if values.is_empty() {
        for line in io::stdin().lock().lines() {
            emit(&mut run, &line?)?;
        }
    } else {
        for value in &values {
            emit(&mut run, value)?;
        }
    }

    drop(out);
    let report = run.finish();
    write_report(&mut io::stderr().lock(), &report)
}

/// Summary line on stderr, so stdout carries only processed values.
fn write_report(writer: &mut impl Write, report: &RunReport) -> Result<(), CliError> {
    writeln!(writer, "run report: {}", serde_json::to_string(report)?)?;
    Ok(())
}
