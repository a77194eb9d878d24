use crate::config::Config;
use crate::error::{Error, Result};
use pdfium_render::prelude::Pdfium;

/// Extracted text shorter than this cannot support meaningful questions.
const MIN_TEXT_CHARS: usize = 50;

/// Validates and extracts text from uploaded PDF files. Size is checked
/// before extraction; extracted text is truncated to a configured
/// character cap.
#[derive(Clone)]
pub struct PdfService {
    max_file_size: usize,
    max_chars: usize,
}

impl PdfService {
    pub fn new(config: &Config) -> Self {
        Self {
            max_file_size: config.max_file_size,
            max_chars: config.max_pdf_chars,
        }
    }

    /// Pre-extraction checks on the upload itself.
    pub fn validate_file(&self, filename: &str, size_bytes: usize) -> Result<()> {
        if !filename.to_lowercase().ends_with(".pdf") {
            return Err(Error::Content("Only PDF files are supported".to_string()));
        }

        if size_bytes > self.max_file_size {
            return Err(Error::Content(format!(
                "File size exceeds maximum limit of {} bytes",
                self.max_file_size
            )));
        }

        Ok(())
    }

    /// Extracts text from the PDF bytes. Pages whose text cannot be read
    /// are skipped; the document as a whole fails only when it cannot be
    /// opened or yields no usable text.
    pub fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        tracing::info!("Starting PDF text extraction");

        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| Error::Content(format!("Failed to load PDF library: {}", e)))?;
        let pdfium = Pdfium::new(bindings);

        let document = pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .map_err(|e| Error::Content(format!("Failed to read PDF document: {}", e)))?;

        let mut text = String::new();
        for (page_index, page) in document.pages().iter().enumerate() {
            match page.text() {
                Ok(page_text) => {
                    text.push_str(&page_text.all());
                    text.push('\n');
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to extract text from page {}: {}",
                        page_index + 1,
                        e
                    );
                }
            }
        }

        let text = self.sanitize_extracted(&text)?;
        tracing::info!("Successfully extracted {} characters from PDF", text.chars().count());
        Ok(text)
    }

    fn sanitize_extracted(&self, text: &str) -> Result<String> {
        let text = text.trim();

        if text.is_empty() {
            return Err(Error::Content(
                "No text could be extracted from the PDF".to_string(),
            ));
        }

        let char_count = text.chars().count();
        if char_count < MIN_TEXT_CHARS {
            return Err(Error::Content(
                "PDF content is too short to generate meaningful questions".to_string(),
            ));
        }

        if char_count > self.max_chars {
            tracing::info!("PDF content truncated to {} characters", self.max_chars);
            return Ok(text.chars().take(self.max_chars).collect());
        }

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> PdfService {
        PdfService {
            max_file_size: 10 * 1024 * 1024,
            max_chars: 8000,
        }
    }

    #[test]
    fn test_validate_rejects_non_pdf_extension() {
        let service = test_service();
        assert!(matches!(
            service.validate_file("notes.txt", 1024),
            Err(Error::Content(_))
        ));
        assert!(matches!(
            service.validate_file("report", 1024),
            Err(Error::Content(_))
        ));
    }

    #[test]
    fn test_validate_accepts_uppercase_extension() {
        let service = test_service();
        assert!(service.validate_file("REPORT.PDF", 1024).is_ok());
    }

    #[test]
    fn test_validate_rejects_oversize_file() {
        let service = test_service();
        assert!(matches!(
            service.validate_file("big.pdf", 11 * 1024 * 1024),
            Err(Error::Content(_))
        ));
        assert!(service.validate_file("fits.pdf", 10 * 1024 * 1024).is_ok());
    }

    #[test]
    fn test_sanitize_rejects_empty_text() {
        let service = test_service();
        assert!(matches!(
            service.sanitize_extracted("   \n  "),
            Err(Error::Content(_))
        ));
    }

    #[test]
    fn test_sanitize_rejects_too_short_text() {
        let service = test_service();
        assert!(matches!(
            service.sanitize_extracted("too short to question"),
            Err(Error::Content(_))
        ));
    }

    #[test]
    fn test_sanitize_passes_text_under_cap() {
        let service = test_service();
        let text = "a".repeat(200);
        assert_eq!(service.sanitize_extracted(&text).unwrap(), text);
    }

    #[test]
    fn test_sanitize_truncates_to_exact_cap() {
        let service = PdfService {
            max_file_size: 10 * 1024 * 1024,
            max_chars: 100,
        };
        let text = "b".repeat(250);
        let sanitized = service.sanitize_extracted(&text).unwrap();
        assert_eq!(sanitized.chars().count(), 100);
    }

    #[test]
    fn test_sanitize_truncates_multibyte_on_char_boundary() {
        let service = PdfService {
            max_file_size: 10 * 1024 * 1024,
            max_chars: 60,
        };
        let text = "ü".repeat(80);
        let sanitized = service.sanitize_extracted(&text).unwrap();
        assert_eq!(sanitized.chars().count(), 60);
        assert!(sanitized.chars().all(|c| c == 'ü'));
    }
}
