//! CLI entry point.
//!
//! Thin collaborator around the library: parses flags into a [`Config`],
//! initializes logging, runs the batch and maps fatal errors to a
//! non-zero exit code.

use std::env;
use std::process::ExitCode;

use log::{error, info};

use catalog_scrape::{batch, Config};

const USAGE: &str = "\
catalog-scrape - extract structured product data from catalog pages

USAGE:
    catalog-scrape [OPTIONS]

OPTIONS:
    --single <ID>     Process exactly one product identifier
    --min <ID>        First identifier of the range (default 1)
    --max <ID>        Last identifier of the range (default 2100)
    --url <PREFIX>    Product page URL prefix; the identifier is appended
    --base-url <URL>  Origin prefix for image URLs (default: derived from --url)
    --cached          Reuse raw pages from the data/ cache when present
    --out <FILE>      Output file name inside out/ (default products.json)
    -h, --help        Show this help

Logging is controlled with RUST_LOG (default info).";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let config = match parse_args(env::args().skip(1)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("error: {msg}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let config = match config.validate() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match batch::run(&config) {
        Ok(report) => {
            info!(
                "finished: {} extracted, {} skipped, output {}",
                report.extracted,
                report.skipped,
                report.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("run aborted: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Parse CLI flags into a config. `Ok(None)` means help was requested.
fn parse_args(args: impl Iterator<Item = String>) -> Result<Option<Config>, String> {
    let mut config = Config::default();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "-h" | "--help" => return Ok(None),
            "--cached" => config.use_cache = true,
            "--single" => config.single = Some(parse_id(&flag, args.next())?),
            "--min" => config.min_id = parse_id(&flag, args.next())?,
            "--max" => config.max_id = parse_id(&flag, args.next())?,
            "--url" => config.url_template = take_value(&flag, args.next())?,
            "--base-url" => config.base_url = take_value(&flag, args.next())?,
            "--out" => config.output_file = take_value(&flag, args.next())?,
            other => return Err(format!("unknown flag {other:?}")),
        }
    }

    Ok(Some(config))
}

fn take_value(flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("{flag} expects a value"))
}

fn parse_id(flag: &str, value: Option<String>) -> Result<u64, String> {
    let value = take_value(flag, value)?;
    value
        .parse()
        .map_err(|_| format!("{flag} expects a numeric identifier, got {value:?}"))
}
