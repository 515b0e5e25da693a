//! Categorist CLI binary.
//!
//! The `-v`/`-q` flags set the log level; `CATEGORIST_LOG` (same syntax as
//! `RUST_LOG`) refines it per module, e.g. `CATEGORIST_LOG=categorist::classifier=trace`.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;

use categorist::cli::args::*;
use categorist::cli::commands::*;

fn main() {
    let args = CategoristArgs::parse();

    Builder::new()
        .filter_level(args.log_level())
        .parse_env("CATEGORIST_LOG")
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
