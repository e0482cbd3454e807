//! CLI entrypoint.
//!
//! Parse arguments, dispatch to the library, and exit with an
//! appropriate status. For programmatic use, prefer the library API.

use clap::Parser;
use env_logger::Env;

mod cli;

fn main() {
    // warnings (odd coordinate counts) must be visible without RUST_LOG
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = cli::Cli::parse();
    if let Err(err) = cli::run(args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
