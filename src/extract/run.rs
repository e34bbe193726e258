use std::io::{self, Write};

use super::*;

pub fn run(pdf_path: &Path, options: &ExtractOptions) -> Result<()> {
    let matches = extract_dates(pdf_path, options)?;

    let mut output = io::BufWriter::new(io::stdout().lock());
    write_report(&mut output, &matches, options.nth)?;
    output.flush().context("failed to flush report")?;
    Ok(())
}

/// Opens `pdf_path` and collects dates in document order. Only a failure to
/// open the document is an error; unreadable pages and non-dates are skipped.
pub fn extract_dates(pdf_path: &Path, options: &ExtractOptions) -> Result<Vec<DateMatch>> {
    let document = PdfDocument::open(pdf_path)?;

    info!(
        path = %pdf_path.display(),
        page_count = document.page_count(),
        chunk_size = options.chunk_size,
        nth = options.nth,
        langs = %describe_languages(options.langs.as_deref()),
        "starting date extraction"
    );

    let matches = scan_document(&document, options)?;
    info!(found = matches.len(), "extraction complete");
    Ok(matches)
}

pub(super) fn scan_document(
    document: &PdfDocument,
    options: &ExtractOptions,
) -> Result<Vec<DateMatch>> {
    let finder = CandidateFinder::new()?;
    let resolver = DateResolver::new(options.langs.as_deref())?;
    let mut collector = DateCollector::new(options.nth);

    let chunk_size = options.chunk_size.max(1);
    let total = document.page_count();

    for start in (0..total).step_by(chunk_size) {
        let end = (start + chunk_size).min(total);
        let text = document.read_pages(start..end);
        if text.is_empty() {
            debug!(chunk_start = start + 1, chunk_end = end, "chunk has no text");
            continue;
        }

        let text = text.nfc().collect::<String>();
        let candidates = finder.find(&text);
        debug!(
            chunk_start = start + 1,
            chunk_end = end,
            candidates = candidates.len(),
            "scanned chunk"
        );

        if resolver.resolve_all(&candidates, &mut collector).is_break() {
            debug!(found = collector.found_count(), "requested date reached");
            break;
        }
    }

    Ok(collector.into_matches())
}

fn describe_languages(langs: Option<&[Language]>) -> String {
    match langs {
        Some(langs) => langs
            .iter()
            .map(|language| language.as_str())
            .collect::<Vec<&str>>()
            .join(","),
        None => "auto".to_string(),
    }
}
