//! protoc-gen-doc - documentation generator plugin for protoc
//!
//! The host writes a code generator request to stdin and reads the response
//! from stdout. Documentation failures are reported inside the response;
//! this process exits non-zero only when the plugin protocol itself fails.

mod cli;
mod config;
mod error;
mod logging;
mod plugin;

use cli::Cli;
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use std::io::{Read, Write};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse_args();

    control::set_override(cli.use_color());

    match run(cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    if cli.list_formats {
        return list_formats();
    }

    let mut config = Config::load_with_file(cli.config.as_deref())?;
    config.merge_with_env();

    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let timer = Timer::new("generate");
    let _entered = timer.span().enter();

    let request = read_request(cli.request.as_deref())?;
    tracing::debug!(
        files = request.file_to_generate.len(),
        parameter = request.parameter(),
        "Decoded request"
    );

    let response = plugin::generate(&request, &config, cli.parameter.as_deref());
    write_response(&response)?;

    tracing::info!(
        failed = response.error.is_some(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Run finished"
    );
    Ok(())
}

fn list_formats() -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", protodoc_core::options::JSON_FORMAT)?;
    for format in protodoc_core::templates::builtin_formats() {
        writeln!(out, "{}", format)?;
    }
    Ok(())
}

fn read_request(path: Option<&Path>) -> Result<CodeGeneratorRequest> {
    let bytes = match path {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut bytes = Vec::new();
            std::io::stdin().lock().read_to_end(&mut bytes)?;
            bytes
        }
    };
    Ok(CodeGeneratorRequest::decode(bytes.as_slice())?)
}

fn write_response(response: &CodeGeneratorResponse) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(&response.encode_to_vec())?;
    out.flush()?;
    Ok(())
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config =
        LoggingConfig::for_run(cli.verbosity_level(), cli.quiet, &config.logging);
    logging_config.merge_with_env();

    logging::init_logging(logging_config)
}
