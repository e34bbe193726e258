use std::cell::OnceCell;
use std::collections::HashSet;
use std::ops::{ControlFlow, Range};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use tracing::{debug, info};

use crate::cli::Language;
use crate::model::{DateMatch, ExtractOptions};
use crate::util::{command_available, strip_control_bytes};

mod candidates;
mod languages;
mod report;
mod resolver;
mod run;
mod source;

pub use run::run;

use candidates::*;
use languages::*;
use report::*;
use resolver::*;
use source::*;
