use super::*;

/// One way of turning a page into text. Backends fail independently per page.
pub trait PageTextBackend {
    fn name(&self) -> &'static str;

    /// `Ok(None)` means the page has no text layer; that is not a failure.
    fn page_text(&self, page_index: usize) -> Result<Option<String>>;
}

pub struct LopdfBackend {
    document: lopdf::Document,
    page_numbers: Vec<u32>,
}

impl LopdfBackend {
    pub fn load(pdf_path: &Path) -> Result<Self> {
        let document = lopdf::Document::load(pdf_path)
            .map_err(|err| anyhow!("failed to open PDF {}: {}", pdf_path.display(), err))?;
        let page_numbers = document.get_pages().into_keys().collect();
        Ok(Self {
            document,
            page_numbers,
        })
    }

    pub fn page_count(&self) -> usize {
        self.page_numbers.len()
    }
}

impl PageTextBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn page_text(&self, page_index: usize) -> Result<Option<String>> {
        let Some(page_number) = self.page_numbers.get(page_index).copied() else {
            bail!("page index {} outside page tree", page_index);
        };
        let text = self
            .document
            .extract_text(&[page_number])
            .map_err(|err| anyhow!("lopdf failed on page {}: {}", page_number, err))?;
        Ok(Some(text))
    }
}

/// Extracts the whole document with `pdf-extract` on first use, then serves
/// pages from that result.
pub struct PdfExtractBackend {
    pdf_path: PathBuf,
    pages: OnceCell<std::result::Result<Vec<String>, String>>,
}

impl PdfExtractBackend {
    pub fn new(pdf_path: &Path) -> Self {
        Self {
            pdf_path: pdf_path.to_path_buf(),
            pages: OnceCell::new(),
        }
    }

    fn load_pages(&self) -> std::result::Result<Vec<String>, String> {
        let bytes = std::fs::read(&self.pdf_path)
            .map_err(|err| format!("failed to read {}: {}", self.pdf_path.display(), err))?;
        // pdf-extract panics on some malformed inputs; keep that a page-level failure.
        let extracted = std::panic::catch_unwind(|| {
            pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|err| err.to_string())
        });
        match extracted {
            Ok(result) => result,
            Err(_) => Err("pdf-extract panicked while parsing".to_string()),
        }
    }
}

impl PageTextBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn page_text(&self, page_index: usize) -> Result<Option<String>> {
        let pages = self
            .pages
            .get_or_init(|| self.load_pages())
            .as_ref()
            .map_err(|message| anyhow!("pdf-extract failed: {}", message))?;
        let Some(text) = pages.get(page_index) else {
            bail!("pdf-extract produced no page {}", page_index + 1);
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text.clone()))
    }
}

pub struct PdftotextBackend {
    pdf_path: PathBuf,
}

impl PdftotextBackend {
    pub fn new(pdf_path: &Path) -> Self {
        Self {
            pdf_path: pdf_path.to_path_buf(),
        }
    }
}

impl PageTextBackend for PdftotextBackend {
    fn name(&self) -> &'static str {
        "pdftotext"
    }

    fn page_text(&self, page_index: usize) -> Result<Option<String>> {
        let page_number = (page_index + 1).to_string();
        let output = Command::new("pdftotext")
            .arg("-enc")
            .arg("UTF-8")
            .arg("-f")
            .arg(&page_number)
            .arg("-l")
            .arg(&page_number)
            .arg(&self.pdf_path)
            .arg("-")
            .output()
            .with_context(|| {
                format!("failed to execute pdftotext for {}", self.pdf_path.display())
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "pdftotext returned non-zero exit status for {} page {}: {}",
                self.pdf_path.display(),
                page_number,
                stderr.trim()
            );
        }

        let text = strip_control_bytes(&String::from_utf8_lossy(&output.stdout));
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(text))
    }
}

/// An opened PDF: its page count plus the backends to try for each page, in order.
pub struct PdfDocument {
    page_count: usize,
    backends: Vec<Box<dyn PageTextBackend>>,
}

impl PdfDocument {
    pub fn open(pdf_path: &Path) -> Result<Self> {
        let primary = LopdfBackend::load(pdf_path)?;
        let page_count = primary.page_count();

        let mut backends: Vec<Box<dyn PageTextBackend>> = vec![
            Box::new(primary),
            Box::new(PdfExtractBackend::new(pdf_path)),
        ];
        if command_available("pdftotext") {
            backends.push(Box::new(PdftotextBackend::new(pdf_path)));
        }

        let document = Self::with_backends(page_count, backends);
        debug!(backends = %document.backend_names().join(","), "page backends ready");
        Ok(document)
    }

    pub fn with_backends(page_count: usize, backends: Vec<Box<dyn PageTextBackend>>) -> Self {
        Self {
            page_count,
            backends,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|backend| backend.name()).collect()
    }

    /// Reads a chunk of pages and joins their text with newlines. Pages that
    /// every backend fails on are left out.
    pub fn read_pages(&self, pages: Range<usize>) -> String {
        let mut texts = Vec::with_capacity(pages.len());
        for page_index in pages {
            if let Some(text) = self.read_page(page_index) {
                texts.push(text);
            }
        }
        texts.join("\n")
    }

    fn read_page(&self, page_index: usize) -> Option<String> {
        for backend in &self.backends {
            match backend.page_text(page_index) {
                Ok(text) => return Some(text.unwrap_or_default()),
                Err(err) => {
                    debug!(
                        page = page_index + 1,
                        backend = backend.name(),
                        error = %format!("{err:#}"),
                        "page text extraction failed"
                    );
                }
            }
        }

        debug!(page = page_index + 1, "skipping page; no backend produced text");
        None
    }
}
