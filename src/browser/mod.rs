//! Browser cookie export module
//!
//! This module reads cookies out of a browser profile database and
//! writes them as flat text, one cookie per line.

use crate::config::Browser;
use crate::error::Result;
use std::fmt;
use std::io::Write;
use std::path::Path;

pub mod firefox;

/// Represents a browser cookie as it is exported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieRecord {
    pub host: String,
    pub include_subdomains: bool,
    pub path: String,
    pub is_secure: bool,
    /// Raw stored expiry, passed through untouched
    pub expiry: String,
    pub name: String,
    pub value: String,
}

impl fmt::Display for CookieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.host,
            flag(self.include_subdomains),
            self.path,
            flag(self.is_secure),
            self.expiry,
            self.name,
            self.value
        )
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Main interface for exporting browser cookies
pub struct CookieExporter {
    browser: Browser,
}

impl CookieExporter {
    /// Create a new cookie exporter for the given browser
    pub fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Export cookies from `db_path` into `out`, returning the number of lines written
    pub fn export<W: Write>(
        &self,
        db_path: &Path,
        domain_filter: Option<&str>,
        out: &mut W,
    ) -> Result<usize> {
        match self.browser {
            Browser::Firefox => firefox::export(db_path, domain_filter, out),
        }
    }
}

/// Write each record as one line, skipping rows that failed to scan
///
/// An outer error aborts the export; an inner error only drops its row.
pub(crate) fn write_records<I, E, W>(records: I, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = Result<std::result::Result<CookieRecord, E>>>,
    E: fmt::Display,
    W: Write,
{
    let mut count = 0;
    for record in records {
        match record? {
            Ok(record) => {
                writeln!(out, "{}", record)?;
                count += 1;
            }
            Err(e) => log::warn!("error reading row: {}", e),
        }
    }
    Ok(count)
}
