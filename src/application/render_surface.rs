// Rendering engine boundary - declarative input, pointer hits, raster output
use crate::domain::chart::ChartConfig;

/// One plotted element hit by a pointer event, as reported by the engine.
/// Indices point into the dataset array the engine was last given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHit {
    pub dataset_index: usize,
    pub point_index: usize,
}

/// Handle to the engine's drawing surface. The shell that mounts the
/// component owns one and passes it in explicitly where needed; the
/// component never looks a surface up globally.
pub trait RenderSurface: Send + Sync {
    /// Replace the rendered chart with this configuration.
    fn render(&self, config: &ChartConfig);

    /// PNG encoding of the current raster, if anything has been rendered.
    fn snapshot_png(&self) -> Option<Vec<u8>>;
}
