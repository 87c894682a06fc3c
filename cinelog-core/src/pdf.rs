//! PDF export adapter.

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::debug;

use cinelog_model::MediaRecord;

use crate::error::{CatalogError, Result};
use crate::ports::PdfRenderer;

/// Renders a one-page A4 sheet with the record's Title, Year and Type
/// as styled text blocks.
#[derive(Debug, Clone, Default)]
pub struct SheetRenderer;

impl SheetRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PdfRenderer for SheetRenderer {
    fn render(&self, record: &MediaRecord) -> Result<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            &record.title,
            Mm(210.0),
            Mm(297.0),
            "content",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|err| CatalogError::Export(err.to_string()))?;

        let content = doc.get_page(page).get_layer(layer);
        content.use_text(&record.title, 18.0, Mm(20.0), Mm(260.0), &font);
        content.use_text(&record.year, 13.0, Mm(20.0), Mm(246.0), &font);
        content.use_text(
            &record.media_type,
            13.0,
            Mm(20.0),
            Mm(236.0),
            &font,
        );

        let bytes = doc
            .save_to_bytes()
            .map_err(|err| CatalogError::Export(err.to_string()))?;
        debug!(size = bytes.len(), "rendered media sheet");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_non_empty_pdf() {
        let record = MediaRecord::new(
            "The Matrix".into(),
            "1999".into(),
            "movie".into(),
        );
        let bytes = SheetRenderer::new().render(&record).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
