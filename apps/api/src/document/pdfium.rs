//! PDFium-backed rasterizer.
//!
//! Tests that load the shared library are `#[ignore]`d. Run them with
//! `PDFIUM_LIBRARY_PATH=/path/to/pdfium/lib cargo test -- --ignored`.

use anyhow::{anyhow, Result};
use image::RgbImage;
use pdfium_render::prelude::*;
use tracing::info;

use crate::document::page_image::rgba_to_rgb;
use crate::document::renderer::{PageRasterizer, RenderError};

/// One pixel per PDF point (72 DPI): the rasterizer's native resolution.
const NATIVE_SCALE: f32 = 1.0;

pub struct PdfiumRasterizer {
    pdfium: Pdfium,
}

impl PdfiumRasterizer {
    /// Binds to the PDFium shared library.
    ///
    /// Searches, in order:
    /// 1. `library_dir` (from `PDFIUM_LIBRARY_PATH`), or the current directory when unset
    /// 2. System library paths
    pub fn bind(library_dir: Option<&str>) -> Result<Self> {
        let dir = library_dir.unwrap_or("./");
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| {
                anyhow!("Failed to load PDFium library (searched '{dir}' and system paths): {e:?}")
            })?;

        info!("PDFium library bound");
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl PageRasterizer for PdfiumRasterizer {
    fn rasterize_first_page(&self, document: &[u8]) -> Result<RgbImage, RenderError> {
        // The document, page and bitmap handles are all released when they drop,
        // on success and error paths alike.
        let pdf = self
            .pdfium
            .load_pdf_from_byte_slice(document, None)
            .map_err(|e| RenderError::Parse(format!("{e:?}")))?;

        let pages = pdf.pages();
        if pages.len() == 0 {
            return Err(RenderError::EmptyDocument);
        }

        let page = pages
            .get(0)
            .map_err(|e| RenderError::Parse(format!("page 1: {e:?}")))?;

        let bitmap = page
            .render_with_config(&PdfRenderConfig::new().scale_page_by_factor(NATIVE_SCALE))
            .map_err(|e| RenderError::Parse(format!("page 1 render: {e:?}")))?;

        let width = u32::try_from(bitmap.width())
            .map_err(|_| RenderError::Encode("negative bitmap width".to_string()))?;
        let height = u32::try_from(bitmap.height())
            .map_err(|_| RenderError::Encode("negative bitmap height".to_string()))?;

        rgba_to_rgb(width, height, &bitmap.as_rgba_bytes())
    }
}
