use super::*;

const MONTH_WORD: &str = r"\p{L}[\p{L}\p{M}]*";

pub struct CandidateFinder {
    combined: Regex,
}

impl CandidateFinder {
    pub fn new() -> Result<Self> {
        let pattern = format!(
            r"\b(?:{dmy}|{ymd}|{day_month}|{month_day})\b",
            dmy = r"\d{1,2}[./-]\d{1,2}[./-]\d{2,4}",
            ymd = r"\d{4}[./-]\d{1,2}[./-]\d{1,2}",
            day_month = format!(r"\d{{1,2}}\s+{MONTH_WORD},?\s+\d{{4}}"),
            month_day = format!(r"{MONTH_WORD}\s+\d{{1,2}},?\s+\d{{4}}"),
        );

        Ok(Self {
            combined: Regex::new(&pattern).context("failed to compile date candidate regex")?,
        })
    }

    /// Distinct date-like snippets in first-seen order. Repeats within the
    /// same text block are dropped.
    pub fn find(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::<&str>::new();
        let mut candidates = Vec::new();

        for found in self.combined.find_iter(text) {
            let snippet = found.as_str();
            if seen.insert(snippet) {
                candidates.push(snippet.to_string());
            }
        }

        candidates
    }
}
