use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

pub const APP_NAME: &str = "pdfdateextract";

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

pub fn command_available(program: &str) -> bool {
    Command::new(program).arg("-v").output().is_ok()
}

/// Per-user log directory: the XDG state dir where the platform has one,
/// otherwise local application data, otherwise the temp dir.
pub fn default_log_directory() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_NAME)
        .join("log")
}

pub fn strip_control_bytes(raw: &str) -> String {
    raw.chars()
        .filter(|character| *character != '\u{000C}' && *character != '\u{0000}')
        .collect()
}
