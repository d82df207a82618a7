//! Export pipeline: capture, scale, paginate, name
//!
//! Captures the rendering surface at a 2x oversampling scale for print
//! fidelity, scales the raster to a fixed page width, and slices it into
//! pages by shifting the same full image upward one page-height per page.
//! One export runs at a time; the in-flight flag is cleared on every exit
//! path, so a failed run never leaves a partial artifact or a stuck flag.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDate;
use log::info;

use crate::error::ExportError;
use super::raster::{RasterImage, RenderSurface};

/// Output page width, A4 portrait, millimeters
pub const PAGE_WIDTH_MM: f64 = 210.0;

/// Output page height, A4 portrait, millimeters
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// Oversampling scale applied at capture time
pub const CAPTURE_SCALE: f64 = 2.0;

/// Placement of the full document image on one output page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSlice {
    /// 1-based page number
    pub page_number: u32,

    /// Vertical offset of the image on this page, millimeters. Page 1 is
    /// at 0; page k shifts the image up by (k-1) page heights so each page
    /// exposes a different slice.
    pub image_offset_mm: f64,
}

/// A named, paginated output built from one raster snapshot. Handed to the
/// presentation layer for delivery; the core does not persist it.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    /// `LOI_<sanitized-address>_<ISO-date>`
    pub name: String,
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    /// Image width on the page; fixed at the page width
    pub image_width_mm: f64,
    /// Proportional height from the raster's aspect ratio
    pub image_height_mm: f64,
    pub image: RasterImage,
    pub pages: Vec<PageSlice>,
}

impl ExportArtifact {
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }
}

/// One-at-a-time export coordinator
pub struct ExportPipeline {
    in_flight: AtomicBool,
}

impl ExportPipeline {
    pub fn new() -> Self {
        Self {
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether an export is currently running; callers should disable the
    /// trigger while true
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Rasterize the surface and build the paginated artifact.
    ///
    /// A second request while one is in flight is rejected with
    /// [`ExportError::ExportInProgress`]. All-or-nothing: on failure no
    /// artifact is produced and the flag is cleared.
    pub async fn export(
        &self,
        surface: &dyn RenderSurface,
        property_address: &str,
        export_date: NaiveDate,
    ) -> Result<ExportArtifact, ExportError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ExportError::ExportInProgress);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let image = surface.capture(CAPTURE_SCALE).await?;
        if image.width_px == 0 || image.height_px == 0 {
            return Err(ExportError::EmptySurface);
        }

        let image_height_mm = image.height_px as f64 * PAGE_WIDTH_MM / image.width_px as f64;
        let page_count = (image_height_mm / PAGE_HEIGHT_MM).ceil().max(1.0) as u32;
        let pages = (0..page_count)
            .map(|i| PageSlice {
                page_number: i + 1,
                image_offset_mm: -(i as f64) * PAGE_HEIGHT_MM,
            })
            .collect();

        let name = artifact_name(property_address, export_date);
        info!("exported '{name}' ({page_count} page(s), {image_height_mm:.1} mm)");

        Ok(ExportArtifact {
            name,
            page_width_mm: PAGE_WIDTH_MM,
            page_height_mm: PAGE_HEIGHT_MM,
            image_width_mm: PAGE_WIDTH_MM,
            image_height_mm,
            image,
            pages,
        })
    }
}

impl Default for ExportPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the in-flight flag on every exit path
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// `LOI_<address with non-alphanumerics replaced by _>_<ISO date>`
pub fn artifact_name(property_address: &str, export_date: NaiveDate) -> String {
    let sanitized: String = property_address
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("LOI_{}_{}", sanitized, export_date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Surface reporting fixed pixel dimensions
    struct StubSurface {
        width_px: u32,
        height_px: u32,
    }

    #[async_trait]
    impl RenderSurface for StubSurface {
        async fn capture(&self, _scale: f64) -> Result<RasterImage, ExportError> {
            Ok(RasterImage {
                width_px: self.width_px,
                height_px: self.height_px,
                data: Vec::new(),
            })
        }
    }

    struct FailingSurface;

    #[async_trait]
    impl RenderSurface for FailingSurface {
        async fn capture(&self, _scale: f64) -> Result<RasterImage, ExportError> {
            Err(ExportError::CaptureFailed("canvas detached".to_string()))
        }
    }

    /// Yields once before capturing, so a concurrent export can observe the
    /// in-flight flag
    struct YieldingSurface;

    #[async_trait]
    impl RenderSurface for YieldingSurface {
        async fn capture(&self, _scale: f64) -> Result<RasterImage, ExportError> {
            tokio::task::yield_now().await;
            Ok(RasterImage {
                width_px: 100,
                height_px: 100,
                data: Vec::new(),
            })
        }
    }

    fn export_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[tokio::test]
    async fn test_single_page_fits() {
        let pipeline = ExportPipeline::new();
        // Aspect ratio 1:1 -> 210 mm tall, under one page
        let surface = StubSurface {
            width_px: 1600,
            height_px: 1600,
        };

        let artifact = pipeline.export(&surface, "addr", export_date()).await.unwrap();
        assert_eq!(artifact.page_count(), 1);
        assert_eq!(artifact.pages[0].image_offset_mm, 0.0);
        assert_eq!(artifact.image_width_mm, PAGE_WIDTH_MM);
    }

    #[tokio::test]
    async fn test_pagination_is_ceil_of_height_ratio() {
        let pipeline = ExportPipeline::new();
        // 210 mm wide and 4x as tall -> 840 mm -> ceil(840/297) = 3 pages
        let surface = StubSurface {
            width_px: 1000,
            height_px: 4000,
        };

        let artifact = pipeline.export(&surface, "addr", export_date()).await.unwrap();
        assert_eq!(artifact.page_count(), 3);
        // First page never shifted; later pages shift by page-height multiples
        assert_eq!(artifact.pages[0].image_offset_mm, 0.0);
        assert_eq!(artifact.pages[1].image_offset_mm, -PAGE_HEIGHT_MM);
        assert_eq!(artifact.pages[2].image_offset_mm, -2.0 * PAGE_HEIGHT_MM);
    }

    #[tokio::test]
    async fn test_artifact_name_sanitized() {
        let name = artifact_name("123 Main St, Orlando, FL 32801", export_date());
        assert_eq!(name, "LOI_123_Main_St__Orlando__FL_32801_2026-08-30");
    }

    #[tokio::test]
    async fn test_concurrent_export_rejected() {
        let pipeline = ExportPipeline::new();
        let surface = YieldingSurface;

        let (first, second) = tokio::join!(
            pipeline.export(&surface, "addr", export_date()),
            pipeline.export(&surface, "addr", export_date()),
        );

        assert!(first.is_ok());
        assert!(matches!(second, Err(ExportError::ExportInProgress)));
    }

    #[tokio::test]
    async fn test_flag_cleared_after_failure() {
        let pipeline = ExportPipeline::new();

        let failed = pipeline.export(&FailingSurface, "addr", export_date()).await;
        assert!(matches!(failed, Err(ExportError::CaptureFailed(_))));
        assert!(!pipeline.is_in_flight());

        // A later export goes through
        let surface = StubSurface {
            width_px: 100,
            height_px: 100,
        };
        assert!(pipeline.export(&surface, "addr", export_date()).await.is_ok());
    }

    #[tokio::test]
    async fn test_empty_surface_rejected() {
        let pipeline = ExportPipeline::new();
        let surface = StubSurface {
            width_px: 0,
            height_px: 0,
        };
        assert!(matches!(
            pipeline.export(&surface, "addr", export_date()).await,
            Err(ExportError::EmptySurface)
        ));
        assert!(!pipeline.is_in_flight());
    }
}
