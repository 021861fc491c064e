//! Configuration management for cookie-export

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ExportError, Result};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "cookies.txt";

/// Browser types supported for cookie export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Firefox,
}

impl Browser {
    /// Parse a browser name, rejecting anything unsupported
    pub fn parse(name: &str) -> Result<Self> {
        name.parse::<Browser>()
            .map_err(|_| ExportError::Unsupported(format!("Unsupported browser: {}", name)))
    }
}

impl FromStr for Browser {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "firefox" => Ok(Browser::Firefox),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Browser::Firefox => "firefox",
        };
        write!(f, "{}", name)
    }
}

/// Export configuration, built once from the command line
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub db_path: PathBuf,
    pub browser: String,
    pub domain: Option<String>,
    pub output: PathBuf,
    pub verbose: bool,
}

impl ExportConfig {
    pub fn new(db_path: impl Into<PathBuf>, browser: impl Into<String>) -> Self {
        ExportConfig {
            db_path: db_path.into(),
            browser: browser.into(),
            domain: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            verbose: false,
        }
    }

    /// Domain filter, treating an empty string as no filter
    pub fn domain_filter(&self) -> Option<&str> {
        self.domain.as_deref().filter(|domain| !domain.is_empty())
    }
}
