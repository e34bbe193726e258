use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "pdfdateextract",
    version,
    about = "Extracts all dates from pdf or the Nth"
)]
pub struct Cli {
    /// PDF file to scan.
    #[arg(value_name = "PDF_PATH")]
    pub pdf_path: PathBuf,

    /// Restrict month-name parsing to these languages (auto-detect when omitted).
    #[arg(long, value_enum, value_delimiter = ',')]
    pub langs: Vec<Language>,

    /// Report only the Nth date found (1-based); 0 reports every date.
    #[arg(long, default_value_t = 0)]
    pub nth: usize,

    /// Number of pages read and scanned per pass.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub chunk_size: u32,

    /// Mirror debug diagnostics to stderr.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Directory for the rotating log file.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, ValueEnum)]
pub enum Language {
    #[value(name = "en")]
    English,
    #[value(name = "fr")]
    French,
    #[value(name = "de")]
    German,
    #[value(name = "es")]
    Spanish,
    #[value(name = "it")]
    Italian,
    #[value(name = "pt")]
    Portuguese,
    #[value(name = "nl")]
    Dutch,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Self::English,
        Self::French,
        Self::German,
        Self::Spanish,
        Self::Italian,
        Self::Portuguese,
        Self::Dutch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
            Self::German => "de",
            Self::Spanish => "es",
            Self::Italian => "it",
            Self::Portuguese => "pt",
            Self::Dutch => "nl",
        }
    }
}
