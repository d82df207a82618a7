//! Rendering-surface seam
//!
//! The core never draws pixels itself; it asks the presentation layer's
//! surface for a raster snapshot of the rendered letter and paginates that.

use async_trait::async_trait;

use crate::error::ExportError;

/// A raster snapshot of the rendered document region
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub width_px: u32,
    pub height_px: u32,
    /// Encoded image bytes, opaque to the pipeline
    pub data: Vec<u8>,
}

/// A visual canvas the export pipeline can snapshot. Capture may suspend
/// while the surface rasterizes; it is the only suspension point in the
/// system.
#[async_trait]
pub trait RenderSurface: Send + Sync {
    /// Snapshot the surface at the given oversampling scale
    async fn capture(&self, scale: f64) -> Result<RasterImage, ExportError>;
}

/// Headless surface that measures plain text with fixed line metrics.
///
/// Used by the CLI and tests where no real canvas exists: the "raster" is
/// the UTF-8 text itself, sized at a nominal 800 px column width and 24 px
/// line height before oversampling.
pub struct TextMeasureSurface {
    text: String,
}

const COLUMN_WIDTH_PX: u32 = 800;
const LINE_HEIGHT_PX: u32 = 24;

impl TextMeasureSurface {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl RenderSurface for TextMeasureSurface {
    async fn capture(&self, scale: f64) -> Result<RasterImage, ExportError> {
        let line_count = self.text.lines().count() as u32;
        Ok(RasterImage {
            width_px: (COLUMN_WIDTH_PX as f64 * scale) as u32,
            height_px: ((line_count * LINE_HEIGHT_PX) as f64 * scale) as u32,
            data: self.text.clone().into_bytes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_text_surface_scales_with_content() {
        let short = TextMeasureSurface::new("one\ntwo")
            .capture(2.0)
            .await
            .unwrap();
        let long = TextMeasureSurface::new("one\ntwo\nthree\nfour")
            .capture(2.0)
            .await
            .unwrap();

        assert_eq!(short.width_px, long.width_px);
        assert!(long.height_px > short.height_px);
    }

    #[tokio::test]
    async fn test_fractional_scale_applies_to_both_axes() {
        let surface = TextMeasureSurface::new("one\ntwo\nthree\nfour");
        let image = surface.capture(1.5).await.unwrap();

        assert_eq!(image.width_px, (COLUMN_WIDTH_PX as f64 * 1.5) as u32);
        assert_eq!(image.height_px, (4.0 * LINE_HEIGHT_PX as f64 * 1.5) as u32);
    }
}
