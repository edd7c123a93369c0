//! Command-line interface argument parsing
//!
//! The host runs the plugin without arguments; the flags here are for
//! running it by hand against a saved request.

use clap::Parser;
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// protoc-gen-doc - documentation generator plugin for protoc
///
/// Reads a code generator request on stdin and writes a response with one
/// documentation file on stdout.
#[derive(Parser, Debug)]
#[command(name = "protoc-gen-doc", version, author, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging on stderr (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a settings file (YAML or JSON)
    #[arg(short, long, env = "PROTODOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read the request from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Use PARAMETER instead of the parameter carried by the request
    #[arg(long, value_name = "PARAMETER")]
    pub parameter: Option<String>,

    /// Print the built-in output formats and exit
    #[arg(long)]
    pub list_formats: bool,

    /// Disable colored error output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used on stderr
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_from(["protoc-gen-doc"]);
        assert_eq!(cli.verbosity_level(), 0);
        assert!(cli.request.is_none());
        assert!(cli.parameter.is_none());
        assert!(!cli.list_formats);
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::parse_from(["protoc-gen-doc", "-vv"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["protoc-gen-doc", "--quiet"]);
        assert_eq!(cli.verbosity_level(), 0);

        assert!(Cli::try_parse_from(["protoc-gen-doc", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_manual_run_flags() {
        let cli = Cli::parse_from([
            "protoc-gen-doc",
            "--request",
            "req.bin",
            "--parameter",
            "markdown,README.md",
            "--no-color",
        ]);
        assert_eq!(cli.request, Some(PathBuf::from("req.bin")));
        assert_eq!(cli.parameter.as_deref(), Some("markdown,README.md"));
        assert!(!cli.use_color());
    }
}
