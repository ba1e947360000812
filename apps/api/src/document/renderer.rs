//! Document Renderer: turns an uploaded PDF into the single page payload sent to the model.
//!
//! Flow: bytes → `PageRasterizer` (page index 0 only) → RGB bitmap → JPEG → base64.
//!
//! The rasterizer is a trait so the pipeline can run without the PDFium library.
//! `AppState` holds a `DocumentRenderer`, which wraps an `Arc<dyn PageRasterizer>`.

use std::sync::Arc;

use anyhow::anyhow;
use bytes::Bytes;
use image::RgbImage;
use thiserror::Error;
use tracing::debug;

use crate::document::page_image::PageImage;
use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not parse PDF: {0}")]
    Parse(String),

    #[error("PDF contains no pages")]
    EmptyDocument,

    #[error("could not encode page image: {0}")]
    Encode(String),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Parse(msg) => AppError::DocumentParse(msg),
            RenderError::EmptyDocument => AppError::EmptyDocument,
            RenderError::Encode(msg) => AppError::Internal(anyhow!("page encoding failed: {msg}")),
        }
    }
}

/// Rasterizes the first page of a PDF byte stream.
///
/// Implementations must read page index 0 only, whatever the page count, and
/// must return `RenderError::EmptyDocument` for a document with no pages.
pub trait PageRasterizer: Send + Sync {
    fn rasterize_first_page(&self, document: &[u8]) -> Result<RgbImage, RenderError>;
}

/// Renders the first page of `document` into a `PageImage`.
/// Either a complete payload is returned or an error; never a partial image.
pub fn render_first_page(
    rasterizer: &dyn PageRasterizer,
    document: &[u8],
) -> Result<PageImage, RenderError> {
    let bitmap = rasterizer.rasterize_first_page(document)?;
    debug!(
        "Rasterized first page: {}x{} px",
        bitmap.width(),
        bitmap.height()
    );
    PageImage::from_bitmap(&bitmap)
}

/// Async front for `render_first_page`. Runs on the blocking pool.
#[derive(Clone)]
pub struct DocumentRenderer {
    rasterizer: Arc<dyn PageRasterizer>,
}

impl DocumentRenderer {
    pub fn new(rasterizer: Arc<dyn PageRasterizer>) -> Self {
        Self { rasterizer }
    }

    pub async fn render_first_page(&self, document: Bytes) -> Result<PageImage, AppError> {
        let rasterizer = Arc::clone(&self.rasterizer);
        let image = tokio::task::spawn_blocking(move || {
            render_first_page(rasterizer.as_ref(), &document)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow!("render task failed: {e}")))??;
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    /// Stand-in for PDFium. A "document" is one byte per page holding that page's grey level.
    /// A leading `!` marks the input as unparsable.
    struct GreyPageRasterizer;

    impl PageRasterizer for GreyPageRasterizer {
        fn rasterize_first_page(&self, document: &[u8]) -> Result<RgbImage, RenderError> {
            match document.first() {
                None => Err(RenderError::EmptyDocument),
                Some(b'!') => Err(RenderError::Parse("not a PDF".to_string())),
                Some(&grey) => Ok(RgbImage::from_pixel(24, 12, Rgb([grey, grey, grey]))),
            }
        }
    }

    #[test]
    fn test_output_is_independent_of_later_pages() {
        let single = render_first_page(&GreyPageRasterizer, &[40]).unwrap();
        let multi = render_first_page(&GreyPageRasterizer, &[40, 200, 90]).unwrap();
        assert_eq!(single, multi);
    }

    #[test]
    fn test_render_is_idempotent() {
        let doc: [u8; 2] = [120, 30];
        let first = render_first_page(&GreyPageRasterizer, &doc).unwrap();
        let second = render_first_page(&GreyPageRasterizer, &doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_document_is_an_error() {
        let err = render_first_page(&GreyPageRasterizer, &[]).unwrap_err();
        assert!(matches!(err, RenderError::EmptyDocument));
    }

    #[test]
    fn test_parse_failure_is_an_error() {
        let err = render_first_page(&GreyPageRasterizer, b"!garbage").unwrap_err();
        assert!(matches!(err, RenderError::Parse(_)));
    }

    #[test]
    fn test_render_errors_map_to_app_errors() {
        assert!(matches!(
            AppError::from(RenderError::EmptyDocument),
            AppError::EmptyDocument
        ));
        assert!(matches!(
            AppError::from(RenderError::Parse("xref".to_string())),
            AppError::DocumentParse(_)
        ));
        assert!(matches!(
            AppError::from(RenderError::Encode("zero-size".to_string())),
            AppError::Internal(_)
        ));
    }

    #[tokio::test]
    async fn test_document_renderer_runs_on_blocking_pool() {
        let renderer = DocumentRenderer::new(Arc::new(GreyPageRasterizer));
        let image = renderer
            .render_first_page(Bytes::from_static(&[77, 1]))
            .await
            .unwrap();
        assert_eq!(image.mime_type(), "image/jpeg");
        assert!(!image.data().is_empty());
    }

    #[tokio::test]
    async fn test_document_renderer_surfaces_parse_error() {
        let renderer = DocumentRenderer::new(Arc::new(GreyPageRasterizer));
        let err = renderer
            .render_first_page(Bytes::from_static(b"!nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DocumentParse(_)));
    }
}
