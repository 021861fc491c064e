//! CLI argument parsing module
//!
//! This module handles command-line argument parsing and application entry point.

use crate::browser::CookieExporter;
use crate::config::{Browser, ExportConfig, DEFAULT_OUTPUT};
use crate::error::Result;
use crate::exit_code::exit_code_for_error;
use crate::utils::FileUtils;
use clap::{Arg, ArgMatches, Command};
use std::io::{BufWriter, Write};

/// Main entry point for the CLI application
pub fn run() {
    let matches = create_app().get_matches();
    let config = build_config_from_args(&matches);
    let verbose = config.as_ref().map(|config| config.verbose).unwrap_or(false);
    crate::logging::init(if verbose { "debug" } else { "info" });

    let result = config.and_then(|config| run_with_config(&config));
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(exit_code_for_error(&e));
    }
}

/// Run an export described by `config`, returning the number of cookies written
pub fn run_with_config(config: &ExportConfig) -> Result<usize> {
    FileUtils::check_regular_file(&config.db_path)?;
    let browser = Browser::parse(&config.browser)?;
    FileUtils::ensure_absent(&config.output)?;

    let file = FileUtils::create_new(&config.output)?;
    let mut writer = BufWriter::new(file);
    let cookies = CookieExporter::new(browser).export(
        &config.db_path,
        config.domain_filter(),
        &mut writer,
    )?;
    writer.flush()?;

    log::info!("written {} cookies to {}", cookies, config.output.display());
    Ok(cookies)
}

/// Create the CLI application structure
pub fn create_app() -> Command {
    Command::new("cookie-export")
        .version(crate::VERSION)
        .about("Export Firefox cookies to a flat text file")
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("PATH")
                .env("COOKIE_EXPORT_DB")
                .help("Path to cookies database")
                .required(true),
        )
        .arg(
            Arg::new("browser")
                .long("browser")
                .value_name("NAME")
                .env("COOKIE_EXPORT_BROWSER")
                .help("Browser, one of: firefox")
                .required(true),
        )
        .arg(
            Arg::new("domain")
                .long("domain")
                .value_name("SUBSTRING")
                .help("Only export cookies whose host contains SUBSTRING"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("PATH")
                .help("Output path, must not exist yet")
                .default_value(DEFAULT_OUTPUT),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Build configuration from command line arguments
pub fn build_config_from_args(matches: &ArgMatches) -> Result<ExportConfig> {
    let db = matches
        .get_one::<String>("db")
        .map(String::as_str)
        .unwrap_or_default();
    let browser = matches
        .get_one::<String>("browser")
        .cloned()
        .unwrap_or_default();

    let mut config = ExportConfig::new(FileUtils::expand_path(db)?, browser);
    config.domain = matches.get_one::<String>("domain").cloned();
    if let Some(output) = matches.get_one::<String>("output") {
        config.output = FileUtils::expand_path(output)?;
    }
    config.verbose = matches.get_flag("verbose");

    Ok(config)
}
