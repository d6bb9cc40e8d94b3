//! `CoffeeTranslation` locale scraper binary

use std::process::ExitCode;

fn main() -> ExitCode {
    coffeelocale::cli::run_cli()
}
