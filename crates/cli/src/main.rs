//! RISC-V simulator test-suite generator CLI.
//!
//! This binary provides a single entry point for the generator. It performs:
//! 1. **Generate:** Build the catalog and write the Makefile fragment (`tests.mk`).
//! 2. **List:** Print every selected test with its category, image, and output directory.
//! 3. **Report:** Check `PASS` artifacts in-process and print the `<passed>/<total> passed` summary.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rvtestgen_core::catalog::GroupId;
use rvtestgen_core::emit;
use rvtestgen_core::report::{Aggregator, FsProbe};
use rvtestgen_core::{Catalog, Config, GenError};

#[derive(Parser, Debug)]
#[command(
    name = "testgen",
    author,
    version,
    about = "Generate Makefile rules that run RISC-V tests on a simulator",
    long_about = "Compile the built-in riscv-tests and firmware catalogs into make rules.\n\nEach test becomes a rule producing <output-dir>/PASS; test-report, test-all, test-clean and test-run aggregate them.\n\nExamples:\n  testgen generate -o tests.mk\n  testgen generate --groups base,memory,atomic --stdout\n  testgen report --root ."
)]
struct Cli {
    /// Log more (repeat for trace output). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Selection {
    /// JSON configuration file; missing fields use the stock defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in groups to include, replacing the configured selection.
    #[arg(short, long, value_delimiter = ',')]
    groups: Option<Vec<GroupId>>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the rule file.
    Generate {
        #[command(flatten)]
        selection: Selection,

        /// Output path.
        #[arg(short, long, default_value = "tests.mk")]
        output: PathBuf,

        /// Print the rules instead of writing a file.
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Print the selected tests.
    List {
        #[command(flatten)]
        selection: Selection,

        /// Print descriptors as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check PASS artifacts now and print the aggregate. Exits 1 unless every test passed.
    Report {
        #[command(flatten)]
        selection: Selection,

        /// Directory the generated rules run from.
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            selection,
            output,
            stdout,
        } => cmd_generate(&selection, &output, stdout),
        Commands::List { selection, json } => cmd_list(&selection, json),
        Commands::Report { selection, root } => cmd_report(&selection, root),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("[!] {e}");
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads the configuration and applies the command-line group selection.
fn load_config(selection: &Selection) -> Result<Config, GenError> {
    let mut config = match &selection.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(groups) = &selection.groups {
        config.groups.clone_from(groups);
    }
    tracing::debug!(groups = ?config.groups, arch = %config.arch, "configuration loaded");
    Ok(config)
}

/// Renders the rule file; writes it to `output` or prints it.
fn cmd_generate(selection: &Selection, output: &Path, stdout: bool) -> Result<i32, GenError> {
    let config = load_config(selection)?;

    if stdout {
        let catalog = Catalog::from_config(&config)?;
        print!("{}", emit::render(&config, &catalog));
        return Ok(0);
    }

    let catalog = emit::generate(&config, output)?;
    println!("[*] {} rules written to {}", catalog.len(), output.display());
    Ok(0)
}

/// Prints one line per test, or the descriptors as JSON.
fn cmd_list(selection: &Selection, json: bool) -> Result<i32, GenError> {
    let config = load_config(selection)?;
    let catalog = Catalog::from_config(&config)?;

    if json {
        return match serde_json::to_string_pretty(catalog.descriptors()) {
            Ok(text) => {
                println!("{text}");
                Ok(0)
            }
            Err(e) => {
                eprintln!("[!] could not serialize catalog: {e}");
                Ok(1)
            }
        };
    }

    let mut out = io::stdout().lock();
    for (group, tests) in catalog.groups() {
        let line = format!("{group} ({} tests)", tests.len());
        if writeln!(out, "{line}").is_err() {
            return Ok(1);
        }
        for test in tests {
            let timeout = test
                .timeout()
                .map_or_else(|| "-".to_string(), |t| t.to_string());
            if writeln!(
                out,
                "  {:<24} {:<8} {:<8} {:<40} {}",
                test.name(),
                test.category().as_str(),
                timeout,
                test.output_dir(),
                test.binary_path()
            )
            .is_err()
            {
                return Ok(1);
            }
        }
    }
    Ok(0)
}

/// Probes every artifact under `root` and prints failures plus the aggregate.
fn cmd_report(selection: &Selection, root: PathBuf) -> Result<i32, GenError> {
    let config = load_config(selection)?;
    let catalog = Catalog::from_config(&config)?;
    let summary = Aggregator::new(&catalog).evaluate(&FsProbe::new(root));

    for failure in summary.failures() {
        println!("{} didn't pass", failure.artifact);
    }
    println!("{summary}");
    Ok(if summary.all_passed() { 0 } else { 1 })
}
