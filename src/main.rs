use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use yamlpick::config::{Config, OutputFormat};
use yamlpick::diagnostics::Diagnostics;
use yamlpick::document::node::{dispose, dump_tree, Value};
use yamlpick::error::FatalError;
use yamlpick::file::loader::{load_document, load_document_from_stdin};
use yamlpick::query::{get, DuplicateKeyPolicy, Found};

/// yamlpick - pick values out of YAML documents
#[derive(Parser)]
#[command(name = "yamlpick")]
#[command(version)]
#[command(about = "Pick values out of YAML documents with compact path queries", long_about = None)]
struct Cli {
    /// YAML file to read (omit or use '-' to read stdin)
    file: Option<String>,

    /// Query such as '.servers[0].host' (omit to print the whole tree)
    query: Option<String>,

    /// Which entry a repeated dict key resolves to
    #[arg(short, long, value_enum)]
    policy: Option<DuplicateKeyPolicy>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Only report errors, not warnings
    #[arg(short, long)]
    quiet: bool,

    /// Config file to use instead of ~/.config/yamlpick/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    // CLI flags override config
    let quiet = cli.quiet || !config.show_diagnostics;
    init_tracing(quiet);

    match run(&cli, &config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if err.downcast_ref::<FatalError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_tracing(quiet: bool) {
    let default_level = if quiet { "error" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<ExitCode> {
    let policy = cli.policy.unwrap_or(config.duplicate_keys);
    let format = cli.output.unwrap_or(config.output);
    let mut diagnostics = Diagnostics::new();

    let tree = match cli.file.as_deref() {
        None | Some("-") => load_document_from_stdin(&mut diagnostics)?,
        Some(path) => load_document(path, &mut diagnostics)?,
    };

    let code = print_result(tree.as_ref(), cli.query.as_deref(), policy, format, &mut diagnostics);
    if let Some(tree) = tree {
        dispose(tree);
    }
    code
}

fn print_result(
    tree: Option<&Value>,
    query: Option<&str>,
    policy: DuplicateKeyPolicy,
    format: OutputFormat,
    diagnostics: &mut Diagnostics,
) -> Result<ExitCode> {
    let Some(query) = query else {
        if format == OutputFormat::Dump {
            println!("Parsed structure as:");
        }
        println!("{}", render(tree, format)?);
        return Ok(if tree.is_some() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    };

    match get(tree, query, policy, diagnostics) {
        Some(Found::Value(value)) => {
            println!("{}", render(Some(value), format)?);
            Ok(ExitCode::SUCCESS)
        }
        Some(Found::Absent) => {
            println!("{}", render(None, format)?);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

fn render(value: Option<&Value>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Dump => Ok(dump_tree(value)),
        OutputFormat::Raw => Ok(match value {
            Some(Value::String(text)) => text.clone(),
            other => dump_tree(other),
        }),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&value).context("Failed to render node as JSON")
        }
    }
}
