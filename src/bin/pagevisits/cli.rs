//! Command-line interface for the page-visit report.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Report page visits found in an HTTP access log.
#[derive(Debug, Parser)]
#[command(name = "pagevisits", version, about)]
pub struct Args {
    /// Access log to read; stdin when omitted.
    pub input: Option<PathBuf>,

    /// TOML config file overriding the built-in defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Discard this many entries before reporting.
    #[arg(long, default_value_t = 0)]
    pub skip: usize,

    /// Stop reading after this many entries.
    #[arg(long)]
    pub take: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How visits are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// "ADDR visited URL" lines.
    Text,
    /// One JSON object per line.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_read_stdin_with_no_limits() {
        let args = Args::parse_from(["pagevisits"]);
        assert!(args.input.is_none());
        assert_eq!(args.skip, 0);
        assert!(args.take.is_none());
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn limits_and_format_parse() {
        let args = Args::parse_from([
            "pagevisits",
            "access.log",
            "--skip",
            "2",
            "--take",
            "10",
            "--format",
            "json",
        ]);
        assert_eq!(args.input.as_deref(), Some(std::path::Path::new("access.log")));
        assert_eq!(args.skip, 2);
        assert_eq!(args.take, Some(10));
        assert_eq!(args.format, OutputFormat::Json);
    }
}
