//! Reading the text of a transcript document.

use std::path::Path;

use anyhow::{Context, Result};
use pdfium_render::prelude::*;

/// Source of the text on the first page of a document.
pub trait TextSource {
    fn first_page_text(&self, path: &Path) -> Result<String>;
}

/// [TextSource] for PDF files, backed by the Pdfium shared library.
pub struct PdfiumTextSource {
    pdfium: Pdfium,
}

impl PdfiumTextSource {
    /// Binds to the Pdfium library in `library_dir`, or in the system library path if not given.
    pub fn bind(library_dir: Option<&Path>) -> Result<Self> {
        let bindings = match library_dir {
            Some(dir) => {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
                    .with_context(|| format!("binding to Pdfium library in {dir:?}"))?
            }
            None => Pdfium::bind_to_system_library()
                .with_context(|| "binding to system Pdfium library")?,
        };
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl TextSource for PdfiumTextSource {
    fn first_page_text(&self, path: &Path) -> Result<String> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .with_context(|| format!("opening PDF {path:?}"))?;
        let page = document
            .pages()
            .first()
            .with_context(|| format!("reading first page of {path:?}"))?;
        let text = page
            .text()
            .with_context(|| format!("extracting text from {path:?}"))?
            .all();
        log::debug!("Extracted {} characters from {path:?}.", text.len());
        Ok(text)
    }
}

/// Splits extracted text into lines, without trailing whitespace.
pub fn text_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim_end().to_string()).collect()
}
