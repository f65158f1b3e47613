//! doxclean CLI - post-process doxide markdown for MkDocs Material.
//!
//! Rewrites every doxide-generated `.md` file under a docs directory in place:
//! strips `@author`/`@brief` tags, reindents admonitions, adds Material icons
//! to headings, trims function summary tables, flattens namespace lists, and
//! stamps the project version on the home page.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::CleanArgs;
use output::Output;

/// Clean doxide-generated markdown for MkDocs Material.
#[derive(Parser, Debug)]
#[command(name = "doxclean", version, about)]
struct Cli {
    #[command(flatten)]
    args: CleanArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.args.execute() {
        output.error(&format!("error: {err}"));
        std::process::exit(1);
    }
}
