use std::io::Write;

use super::*;

/// Writes either every match as a numbered line (`nth == 0`) or only the
/// timestamp of match number `nth`.
pub fn write_report<W: Write>(output: &mut W, matches: &[DateMatch], nth: usize) -> Result<()> {
    if matches.is_empty() {
        writeln!(output, "No dates found.")?;
        return Ok(());
    }

    if nth == 0 {
        for (index, date_match) in matches.iter().enumerate() {
            writeln!(
                output,
                "{}. '{}' -> {}",
                index + 1,
                date_match.snippet,
                date_match.timestamp_string()
            )?;
        }
        return Ok(());
    }

    match matches.get(nth - 1) {
        Some(date_match) => writeln!(output, "{}", date_match.timestamp_string())?,
        None => writeln!(
            output,
            "Error: requested #{} but only {} found",
            nth,
            matches.len()
        )?,
    }

    Ok(())
}
