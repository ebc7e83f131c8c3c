//! Access-log line parsing.

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;

/// One reportable page visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit {
    /// Client address from the log line.
    pub addr: String,
    /// Full URL of the visited page.
    pub url: String,
}

/// Errors from building the parser or parsing a line.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("line pattern needs two capture groups (address, request)")]
    MissingGroups,

    #[error("line does not match the access log format")]
    Unmatched,

    #[error("request has no target: '{request}'")]
    MissingTarget { request: String },
}

/// Splits access-log lines into [`Visit`]s.
#[derive(Debug, Clone)]
pub struct LineParser {
    line: Regex,
    base_url: String,
    page_marker: String,
    static_marker: String,
}

impl LineParser {
    pub fn new(config: &Config) -> Result<Self, ParseError> {
        let line = Regex::new(&config.line_pattern)?;
        // Group 0 is the whole match; we need address and request after it.
        if line.captures_len() < 3 {
            return Err(ParseError::MissingGroups);
        }

        Ok(Self {
            line,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_marker: "\"GET /".to_string(),
            static_marker: format!("\"GET {}", config.static_prefix),
        })
    }

    /// True for GET requests of anything that is not a static asset.
    pub fn is_page(&self, line: &str) -> bool {
        line.contains(&self.page_marker) && !line.contains(&self.static_marker)
    }

    /// Splits one log line into the client address and the visited URL.
    ///
    /// The request target is joined onto the configured base URL:
    /// `GET /blog/ HTTP/1.1` becomes `<base_url>/blog/`.
    pub fn parse(&self, line: &str) -> Result<Visit, ParseError> {
        let caps = self.line.captures(line).ok_or(ParseError::Unmatched)?;
        let addr = caps.get(1).ok_or(ParseError::Unmatched)?.as_str();
        let request = caps.get(2).ok_or(ParseError::Unmatched)?.as_str();

        let target = request
            .split(' ')
            .nth(1)
            .ok_or_else(|| ParseError::MissingTarget {
                request: request.to_string(),
            })?;

        Ok(Visit {
            addr: addr.to_string(),
            url: format!("{}{}", self.base_url, target),
        })
    }
}
