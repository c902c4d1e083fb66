// Console adapters - overlay and surface stand-ins used by the demo shell
use crate::application::overlay_host::OverlayHost;
use crate::application::render_surface::RenderSurface;
use crate::domain::chart::ChartConfig;
use std::sync::Mutex;

/// Overlay host that reports show/hide on the log instead of a dialog.
pub struct ConsoleOverlay;

impl OverlayHost for ConsoleOverlay {
    fn show(&self, title: &str, body: &str) {
        tracing::info!("{}: {}", title, body.replace('\n', "; "));
    }

    fn hide(&self) {
        tracing::info!("Overlay closed");
    }
}

/// Surface that records the last configuration it was asked to draw. It has
/// no raster, so exports against it are no-ops.
#[derive(Default)]
pub struct HeadlessSurface {
    last_config: Mutex<Option<ChartConfig>>,
}

impl HeadlessSurface {
    pub fn last_config(&self) -> Option<ChartConfig> {
        self.last_config.lock().unwrap().clone()
    }
}

impl RenderSurface for HeadlessSurface {
    fn render(&self, config: &ChartConfig) {
        tracing::debug!(
            "Rendering {} point(s) with {} bucketing",
            config.datasets.iter().map(|d| d.points.len()).sum::<usize>(),
            config.x_axis.unit.unit()
        );
        *self.last_config.lock().unwrap() = Some(config.clone());
    }

    fn snapshot_png(&self) -> Option<Vec<u8>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{Granularity, TimeAxis, ValueAxis, ZoomOptions};

    #[test]
    fn test_headless_surface_keeps_last_config() {
        let surface = HeadlessSurface::default();
        assert!(surface.last_config().is_none());

        let config = ChartConfig {
            title: "Time Scale".to_string(),
            datasets: Vec::new(),
            x_axis: TimeAxis::bucketed(Granularity::Day),
            y_axis: ValueAxis::from_zero(),
            zoom: ZoomOptions::x_only(),
        };
        surface.render(&config);

        assert_eq!(surface.last_config(), Some(config));
        assert!(surface.snapshot_png().is_none());
    }
}
