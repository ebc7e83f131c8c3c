//! Report sink — the stepper stage supplied to the transducer pipeline.

use std::io::{self, Write};

use tracing::debug;
use xduce::{Error, Step, Transformer};

use crate::cli::OutputFormat;
use crate::parse::{ParseError, Visit};

/// Counters accumulated over one report run.
#[derive(Debug, Default)]
pub struct Report {
    /// Visits rendered to the output.
    pub written: usize,
    /// Lines that matched the page filter but failed to parse.
    pub skipped: usize,
    /// The write error that ended the run early, if any.
    pub failed: Option<io::Error>,
}

/// Stepper that renders visits into a writer.
///
/// Parse failures are counted and skipped. A write failure means the sink is
/// gone, so the step signals [`Step::Done`] and the driver stops pulling
/// input.
#[derive(Debug)]
pub struct VisitSink<W> {
    out: W,
    format: OutputFormat,
}

impl<W> VisitSink<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }
}

impl<W: Write> VisitSink<W> {
    fn render(&mut self, visit: &Visit) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{} visited {}", visit.addr, visit.url),
            OutputFormat::Json => {
                let line = serde_json::to_string(visit).map_err(io::Error::other)?;
                writeln!(self.out, "{line}")
            }
        }
    }
}

impl<W: Write> Transformer<Result<Visit, ParseError>> for VisitSink<W> {
    type Acc = Report;

    fn init(&self) -> Result<Report, Error> {
        Ok(Report::default())
    }

    fn step(&mut self, mut report: Report, entry: Result<Visit, ParseError>) -> Step<Report> {
        match entry {
            Ok(visit) => match self.render(&visit) {
                Ok(()) => {
                    report.written += 1;
                    Step::Continue(report)
                }
                Err(err) => {
                    report.failed = Some(err);
                    Step::Done(report)
                }
            },
            Err(err) => {
                debug!(%err, "skipping unparseable line");
                report.skipped += 1;
                Step::Continue(report)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit() -> Visit {
        Visit {
            addr: "127.0.0.5".to_string(),
            url: "http://example.com/blog/".to_string(),
        }
    }

    #[test]
    fn renders_text_lines() {
        let mut sink = VisitSink::new(Vec::new(), OutputFormat::Text);
        let report = sink.step(Report::default(), Ok(visit())).into_inner();
        assert_eq!(report.written, 1);
        assert_eq!(
            String::from_utf8(sink.out).unwrap(),
            "127.0.0.5 visited http://example.com/blog/\n"
        );
    }

    #[test]
    fn renders_json_lines() {
        let mut sink = VisitSink::new(Vec::new(), OutputFormat::Json);
        let report = sink.step(Report::default(), Ok(visit())).into_inner();
        assert_eq!(report.written, 1);
        assert_eq!(
            String::from_utf8(sink.out).unwrap(),
            "{\"addr\":\"127.0.0.5\",\"url\":\"http://example.com/blog/\"}\n"
        );
    }

    #[test]
    fn counts_parse_failures_without_writing() {
        let mut sink = VisitSink::new(Vec::new(), OutputFormat::Text);
        let report = sink
            .step(Report::default(), Err(ParseError::Unmatched))
            .into_inner();
        assert_eq!(report.written, 0);
        assert_eq!(report.skipped, 1);
        assert!(sink.out.is_empty());
    }

    #[test]
    fn write_failure_ends_the_run() {
        struct ClosedSink;

        impl Write for ClosedSink {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = VisitSink::new(ClosedSink, OutputFormat::Text);
        let step = sink.step(Report::default(), Ok(visit()));
        assert!(step.is_done());
        let report = step.into_inner();
        assert_eq!(report.written, 0);
        assert!(report.failed.is_some());
    }

    #[test]
    fn init_provides_an_empty_report() {
        let sink = VisitSink::new(Vec::<u8>::new(), OutputFormat::Text);
        let report = sink.init().unwrap();
        assert_eq!(report.written, 0);
        assert_eq!(report.skipped, 0);
        assert!(report.failed.is_none());
    }
}
