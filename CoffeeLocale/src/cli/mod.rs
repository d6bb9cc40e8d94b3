//! `CoffeeLocale` CLI - scrape CLDR display names into `.i18n` files

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, CommandFactory, Parser};

use crate::config::ScraperConfig;
use crate::converter::{ConvertProgress, convert_cldr_to_i18n_with_progress};
use crate::error::Error;

#[derive(Parser, Debug)]
#[command(name = "coffee-locale-scraper")]
#[command(about = "Scrape CLDR language and country names into CoffeeTranslation files", long_about = None)]
#[command(disable_help_flag = true, args_override_self = true)]
struct Cli {
    /// The folder to write output files to.
    #[arg(long, value_name = "PATH")]
    language_path: Option<PathBuf>,

    /// The path storing CLDR definition files.
    #[arg(long, value_name = "PATH")]
    cldr_path: Option<PathBuf>,

    /// (Optional) Manually specify the name in the CLDR.
    #[arg(long, value_name = "NAME")]
    cldr_language_name: Option<String>,

    /// Shows this help menu.
    #[arg(short = 'h', long = "help", short_alias = '?', action = ArgAction::SetTrue)]
    help: bool,
}

impl Cli {
    /// Build the run configuration, or name the first missing required flag.
    fn into_config(self) -> Result<ScraperConfig, &'static str> {
        let language_path = self.language_path.ok_or("language-path")?;
        let cldr_path = self.cldr_path.ok_or("cldr-path")?;

        let config = ScraperConfig::new(language_path, cldr_path);
        Ok(match self.cldr_language_name {
            Some(name) => config.with_manual_name(name),
            None => config,
        })
    }
}

/// Run the scraper CLI with the process arguments
pub fn run_cli() -> ExitCode {
    run_cli_from(std::env::args_os())
}

/// Run the scraper CLI with explicit arguments (the first is the program name).
///
/// All console output goes to stderr. Missing required flags end the run
/// with a message and a success status; a missing CLDR file or malformed
/// data exits with status 1.
pub fn run_cli_from<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // Setup logging
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1));
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.help {
        eprintln!("{}", Cli::command().render_help());
    }

    eprintln!("CoffeeTranslation Locale Scraper version {}", crate::VERSION);

    if cli.help {
        return Ok(ExitCode::SUCCESS);
    }

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(flag) => {
            eprintln!("Must specify {flag} option. Exiting...");
            return Ok(ExitCode::SUCCESS);
        }
    };

    eprintln!("Using language folder path: {}", config.language_path.display());
    eprintln!("Using CLDR path: {}", config.cldr_path.display());
    if let Some(name) = &config.cldr_manual_name {
        eprintln!("Using manual CLDR language name: {name}");
    }

    let report = |p: &ConvertProgress| {
        tracing::debug!(
            "[{}/{}] {}: {}",
            p.current,
            p.total,
            p.phase.as_str(),
            p.message.as_deref().unwrap_or("")
        );
    };

    match convert_cldr_to_i18n_with_progress(&config, &report) {
        Ok(summary) => {
            tracing::info!(
                "Wrote {} languages to {} and {} countries to {}",
                summary.language_count,
                summary.language_file.display(),
                summary.country_count,
                summary.country_file.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ Error::SourceNotFound { .. }) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => {
            let context = failure_context(&err, &config.locale_name());
            Err(err).context(context)
        }
    }
}

/// Context line for a failed conversion: bad CLDR content is reported
/// differently from I/O trouble.
fn failure_context(err: &Error, locale_name: &str) -> String {
    if err.is_malformed() {
        format!("CLDR locale {locale_name} could not be read")
    } else {
        format!("failed to convert CLDR locale {locale_name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "coffee-locale-scraper",
            "--language-path",
            "lang/en-US",
            "--cldr-path=cldr",
            "--cldr-language-name",
            "en",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.language_path, PathBuf::from("lang/en-US"));
        assert_eq!(config.cldr_path, PathBuf::from("cldr"));
        assert_eq!(config.locale_name(), "en");
    }

    #[test]
    fn test_repeated_flag_last_wins() {
        let cli = Cli::try_parse_from([
            "coffee-locale-scraper",
            "--language-path",
            "lang/de",
            "--cldr-path",
            "old",
            "--language-path=lang/fr",
            "--cldr-path",
            "cldr",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.language_path, PathBuf::from("lang/fr"));
        assert_eq!(config.cldr_path, PathBuf::from("cldr"));
        assert_eq!(config.locale_name(), "fr");
    }

    #[test]
    fn test_unknown_argument_rejected() {
        let err = Cli::try_parse_from(["coffee-locale-scraper", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_aliases() {
        for flag in ["-h", "--help", "-?"] {
            let cli = Cli::try_parse_from(["coffee-locale-scraper", flag]).unwrap();
            assert!(cli.help, "{flag} should request help");
        }
    }

    #[test]
    fn test_missing_language_path_reported_first() {
        let cli = Cli::try_parse_from(["coffee-locale-scraper"]).unwrap();
        assert_eq!(cli.into_config().unwrap_err(), "language-path");

        let cli = Cli::try_parse_from(["coffee-locale-scraper", "--language-path", "x"]).unwrap();
        assert_eq!(cli.into_config().unwrap_err(), "cldr-path");
    }

    #[test]
    fn test_failure_context_by_error_kind() {
        let malformed = Error::MissingElement {
            path: "/ldml/identity/language".to_string(),
        };
        assert_eq!(
            failure_context(&malformed, "en_US"),
            "CLDR locale en_US could not be read"
        );

        let io = Error::Io(std::io::Error::other("disk full"));
        assert_eq!(
            failure_context(&io, "en_US"),
            "failed to convert CLDR locale en_US"
        );
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
