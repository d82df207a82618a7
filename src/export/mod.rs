//! Export pipeline: rasterize the composed letter and paginate it into a
//! fixed-page-size artifact

pub mod pipeline;
pub mod raster;

pub use pipeline::{
    artifact_name, ExportArtifact, ExportPipeline, PageSlice, CAPTURE_SCALE, PAGE_HEIGHT_MM,
    PAGE_WIDTH_MM,
};
pub use raster::{RasterImage, RenderSurface, TextMeasureSurface};
