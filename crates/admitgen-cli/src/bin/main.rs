//! admitgen binary entry point.

use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = admitgen_cli::run_cli() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
