//! natsort binary entry point

use clap::Parser;
use natsort_cli::cli::SortArgs;

fn main() {
    let args = SortArgs::parse();
    if let Err(err) = args.execute() {
        log::error!("{err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
