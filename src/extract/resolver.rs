use super::*;

/// Accumulates resolved dates and knows when the requested count is reached.
#[derive(Debug, Default)]
pub struct DateCollector {
    nth: usize,
    matches: Vec<DateMatch>,
}

impl DateCollector {
    pub fn new(nth: usize) -> Self {
        Self {
            nth,
            matches: Vec::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.nth > 0 && self.matches.len() >= self.nth
    }

    pub fn push(&mut self, date_match: DateMatch) -> ControlFlow<()> {
        self.matches.push(date_match);
        if self.is_done() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    pub fn found_count(&self) -> usize {
        self.matches.len()
    }

    pub fn into_matches(self) -> Vec<DateMatch> {
        self.matches
    }
}

pub struct DateResolver {
    numeric_dmy: Regex,
    numeric_ymd: Regex,
    numeric_short_year: Regex,
    languages: Vec<Language>,
}

impl DateResolver {
    pub fn new(languages: Option<&[Language]>) -> Result<Self> {
        Ok(Self {
            numeric_dmy: Regex::new(r"^(\d{1,2})[./-](\d{1,2})[./-](\d{4})$")
                .context("failed to compile day-month-year regex")?,
            numeric_ymd: Regex::new(r"^(\d{4})[./-](\d{1,2})[./-](\d{1,2})$")
                .context("failed to compile year-month-day regex")?,
            numeric_short_year: Regex::new(r"^(\d{1,2})[./-](\d{1,2})[./-](\d{2})$")
                .context("failed to compile two-digit-year regex")?,
            languages: languages
                .map(<[Language]>::to_vec)
                .unwrap_or_else(|| Language::ALL.to_vec()),
        })
    }

    /// Resolves candidates in order into `collector`, breaking as soon as the
    /// collector is full. Candidates that are not real dates are dropped.
    pub fn resolve_all(
        &self,
        candidates: &[String],
        collector: &mut DateCollector,
    ) -> ControlFlow<()> {
        for snippet in candidates {
            if collector.is_done() {
                return ControlFlow::Break(());
            }

            let Some(date) = self.resolve(snippet) else {
                debug!(snippet = %snippet, "candidate is not a date");
                continue;
            };

            if collector.push(DateMatch::new(snippet.as_str(), date)).is_break() {
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }

    /// All-numeric `D/M/YYYY` and `YYYY/M/D` are read positionally so that
    /// ambiguous dates always come out day-first; everything else goes
    /// through the month-name parser.
    pub fn resolve(&self, snippet: &str) -> Option<NaiveDate> {
        if let Some(captures) = self.numeric_dmy.captures(snippet) {
            return calendar_date(&captures[3], &captures[2], &captures[1]);
        }

        if let Some(captures) = self.numeric_ymd.captures(snippet) {
            return calendar_date(&captures[1], &captures[2], &captures[3]);
        }

        self.parse_textual(snippet)
    }

    fn parse_textual(&self, snippet: &str) -> Option<NaiveDate> {
        if let Some(captures) = self.numeric_short_year.captures(snippet) {
            let year = expand_two_digit_year(captures[3].parse().ok()?);
            let month = captures[2].parse().ok()?;
            let day = captures[1].parse().ok()?;
            return NaiveDate::from_ymd_opt(year, month, day);
        }

        let tokens = snippet
            .split(|character: char| character.is_whitespace() || character == ',')
            .filter(|token| !token.is_empty())
            .collect::<Vec<&str>>();
        let [first, second, year] = tokens.as_slice() else {
            return None;
        };

        let (day, month_word) = if is_ascii_number(first) {
            (*first, *second)
        } else {
            (*second, *first)
        };
        if !is_ascii_number(day) || year.len() != 4 || !is_ascii_number(year) {
            return None;
        }

        let month = month_number(month_word, &self.languages)?;
        NaiveDate::from_ymd_opt(year.parse().ok()?, month, day.parse().ok()?)
    }
}

fn calendar_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn is_ascii_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|character| character.is_ascii_digit())
}

/// `00..=68` land in the 2000s, `69..=99` in the 1900s.
fn expand_two_digit_year(short: i32) -> i32 {
    if short <= 68 { 2000 + short } else { 1900 + short }
}
