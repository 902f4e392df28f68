#![forbid(unsafe_code)]
//! Daily One-Pager command line

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use onepager::commands::{execute_generate, GenerateReport};
use onepager::config::{Config, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "onepager")]
#[command(about = "Generate today's reading page from a public-domain book")]
#[command(version)]
struct Cli {
    /// Config file path (defaults apply when it does not exist)
    #[arg(short, long, env = "ONEPAGER_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            println!(
                "{} Generated daily one-pager: {} - {} ({} words{})",
                style("✓").green(),
                style(&report.book.title).bold(),
                report.section_title,
                report.words,
                if report.fallback { ", fallback" } else { "" }
            );
            println!("  {}", report.output.display());
        }
        Err(err) => {
            eprintln!("{} {:#}", style("✗").red(), err);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<GenerateReport> {
    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    execute_generate(&config)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
