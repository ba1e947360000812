// Document Renderer: uploaded PDF bytes → first page → JPEG → base64 payload.
// PDFium is synchronous and CPU-bound, so rendering runs inside tokio::task::spawn_blocking.

pub mod page_image;
pub mod pdfium;
pub mod renderer;

// Re-export the public API consumed by the evaluation shell and main.
pub use page_image::PageImage;
pub use pdfium::PdfiumRasterizer;
pub use renderer::{render_first_page, DocumentRenderer, PageRasterizer, RenderError};
