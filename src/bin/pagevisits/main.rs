//! pagevisits — reports page visits found in an HTTP access log.
//!
//! Ordinary application logic (line reading, regex parsing, URL building,
//! rendering) supplied to the `xduce` protocol at its public boundary:
//!
//! ```text
//! log lines ──→ filter(is_page) ──→ map(parse) ──→ skip/take ──→ VisitSink
//! ```

mod cli;
mod config;
mod parse;
mod sink;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xduce::{filter, map, skip, take, transduce, Transformer};

use crate::cli::Args;
use crate::config::Config;
use crate::parse::LineParser;
use crate::sink::{Report, VisitSink};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };
    let parser = LineParser::new(&config)?;

    let report = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open '{}'", path.display()))?;
            run(BufReader::new(file), io::stdout().lock(), parser, &args)?
        }
        None => run(io::stdin().lock(), io::stdout().lock(), parser, &args)?,
    };

    info!(
        written = report.written,
        skipped = report.skipped,
        "report finished"
    );

    if let Some(err) = report.failed {
        return Err(err).context("writing the report failed");
    }
    Ok(())
}

/// Drive the visit pipeline from `input` into `out`.
fn run<R, W>(input: R, out: W, parser: LineParser, args: &Args) -> anyhow::Result<Report>
where
    R: BufRead,
    W: Write,
{
    let pages = parser.clone();
    let entries = parser;
    let pipeline = xduce::compose!(
        filter(move |line: &String| pages.is_page(line)),
        map(move |line: String| entries.parse(&line)),
        skip(args.skip),
        take(args.take.unwrap_or(usize::MAX)),
    );

    let sink = VisitSink::new(out, args.format);
    let seed = sink.init()?;

    Ok(transduce(
        pipeline,
        sink,
        seed,
        input.lines().map_while(Result::ok),
    ))
}

/// Initialize tracing to stderr so stdout stays clean for report output.
///
/// `RUST_LOG` overrides the default `info` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
