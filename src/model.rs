use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::cli::{Cli, Language};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Month-name lexicons to consult; `None` consults every supported language.
    pub langs: Option<Vec<Language>>,
    /// Stop after this many dates; 0 keeps scanning to the end of the document.
    pub nth: usize,
    pub chunk_size: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            langs: None,
            nth: 0,
            chunk_size: 10,
        }
    }
}

impl From<&Cli> for ExtractOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            langs: if cli.langs.is_empty() {
                None
            } else {
                Some(cli.langs.clone())
            },
            nth: cli.nth,
            chunk_size: cli.chunk_size as usize,
        }
    }
}

/// A date-like snippet as it appeared in the document, paired with its calendar value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub snippet: String,
    pub date: NaiveDate,
}

impl DateMatch {
    pub fn new(snippet: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            snippet: snippet.into(),
            date,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }

    pub fn timestamp_string(&self) -> String {
        self.timestamp().format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}
