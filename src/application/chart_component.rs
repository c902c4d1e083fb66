// Time-series chart component - display state, interactions, render configuration
use crate::application::overlay_host::OverlayHost;
use crate::application::render_surface::{ChartHit, RenderSurface};
use crate::application::sample_repository::SampleRepository;
use crate::domain::chart::{ChartConfig, DatasetConfig, Granularity, TimeAxis, ValueAxis, ZoomOptions};
use crate::domain::sample::{points_from_payload, LoadError, Point};
use crate::domain::series::Series;
use std::path::Path;
use std::sync::Arc;

/// Fixed title of the point-detail overlay.
const OVERLAY_TITLE: &str = "Data Point Details";
/// Fixed file name of the exported raster.
const EXPORT_FILE_NAME: &str = "chart.png";

/// The chart component. Owns the loaded series, the selected granularity,
/// the load error and the overlay selection; all mutation goes through the
/// interaction methods below, and there is no concurrent writer.
pub struct TimeSeriesChart {
    title: String,
    series: Series,
    granularity: Granularity,
    error: Option<LoadError>,
    selected: Option<Point>,
    overlay_visible: bool,
    overlay: Arc<dyn OverlayHost>,
}

impl TimeSeriesChart {
    /// Mount the component: fetch the payload exactly once and await the
    /// result before the first render. The repository handle is not kept,
    /// so remounting is the only way to load again.
    pub async fn mount(
        title: impl Into<String>,
        series: Series,
        repository: &dyn SampleRepository,
        overlay: Arc<dyn OverlayHost>,
    ) -> Self {
        let mut chart = Self {
            title: title.into(),
            series,
            granularity: Granularity::default(),
            error: None,
            selected: None,
            overlay_visible: false,
            overlay,
        };
        chart.load(repository).await;
        chart
    }

    async fn load(&mut self, repository: &dyn SampleRepository) {
        match repository.fetch_payload().await {
            Ok(payload) => match points_from_payload(&payload) {
                Ok(points) => {
                    self.series.replace_data(points);
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    self.error = Some(e);
                }
            },
            Err(e) => {
                tracing::error!("Error fetching data: {}", e);
                self.error = Some(LoadError::Fetch);
            }
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Why the chart is not rendered, when it is not.
    pub fn error(&self) -> Option<LoadError> {
        self.error
    }

    /// Value copy of the point behind the open overlay.
    pub fn selected_point(&self) -> Option<Point> {
        self.selected
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Switch the x-axis bucketing unit. Pure state change: no refetch and
    /// no effect on the series or the selection.
    pub fn change_granularity(&mut self, unit: Granularity) {
        self.granularity = unit;
    }

    /// React to a pointer click reported by the rendering engine. The first
    /// hit wins; indices are bounds-checked even though the engine only
    /// reports indices into the data it was given.
    pub fn handle_chart_click(&mut self, hits: &[ChartHit]) {
        let Some(hit) = hits.first() else {
            return;
        };
        if hit.dataset_index != 0 {
            tracing::warn!("Ignoring click on unknown dataset {}", hit.dataset_index);
            return;
        }
        let Some(point) = self.series.data.get(hit.point_index).copied() else {
            tracing::warn!("Ignoring click on out-of-range point {}", hit.point_index);
            return;
        };
        self.selected = Some(point);
        self.overlay_visible = true;
        self.overlay.show(OVERLAY_TITLE, &detail_body(&point));
    }

    /// Dismiss the detail overlay and forget the selection. Safe to call
    /// when the overlay is already closed.
    pub fn close_overlay(&mut self) {
        self.selected = None;
        self.overlay_visible = false;
        self.overlay.hide();
    }

    /// Write the engine's current raster to `chart.png` in `out_dir`. A pure
    /// side effect: export never changes display state, and it quietly does
    /// nothing when there is no rendered chart to read.
    pub fn export_image(&self, surface: &dyn RenderSurface, out_dir: &Path) {
        if self.error.is_some() {
            tracing::debug!("Skipping export: chart is in error state");
            return;
        }
        let Some(png) = surface.snapshot_png() else {
            tracing::debug!("Skipping export: no rendered chart surface");
            return;
        };
        let path = out_dir.join(EXPORT_FILE_NAME);
        match std::fs::write(&path, png) {
            Ok(()) => tracing::info!("Exported chart to {}", path.display()),
            Err(e) => tracing::warn!("Chart export to {} failed: {}", path.display(), e),
        }
    }

    /// Build the declarative configuration for the rendering engine. Returns
    /// None in error state, or when validation left nothing to plot.
    pub fn render_config(&self) -> Option<ChartConfig> {
        if self.error.is_some() || self.series.data.is_empty() {
            return None;
        }
        Some(ChartConfig {
            title: self.title.clone(),
            datasets: vec![DatasetConfig::from_series(&self.series)],
            x_axis: TimeAxis::bucketed(self.granularity),
            y_axis: ValueAxis::from_zero(),
            zoom: ZoomOptions::x_only(),
        })
    }
}

/// Overlay body for one selected point: its timestamp in default string
/// form and its numeric value.
fn detail_body(point: &Point) -> String {
    format!("Timestamp: {}\nValue: {}", point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct StaticRepository(Result<Value, String>);

    #[async_trait]
    impl SampleRepository for StaticRepository {
        async fn fetch_payload(&self) -> anyhow::Result<Value> {
            match &self.0 {
                Ok(payload) => Ok(payload.clone()),
                Err(message) => Err(anyhow::anyhow!(message.clone())),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum OverlayCall {
        Show(String, String),
        Hide,
    }

    #[derive(Default)]
    struct RecordingOverlay {
        calls: Mutex<Vec<OverlayCall>>,
    }

    impl RecordingOverlay {
        fn calls(&self) -> Vec<OverlayCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl OverlayHost for RecordingOverlay {
        fn show(&self, title: &str, body: &str) {
            self.calls
                .lock()
                .unwrap()
                .push(OverlayCall::Show(title.to_string(), body.to_string()));
        }

        fn hide(&self) {
            self.calls.lock().unwrap().push(OverlayCall::Hide);
        }
    }

    struct StubSurface {
        png: Option<Vec<u8>>,
    }

    impl RenderSurface for StubSurface {
        fn render(&self, _config: &ChartConfig) {}

        fn snapshot_png(&self) -> Option<Vec<u8>> {
            self.png.clone()
        }
    }

    fn sample_payload() -> Value {
        json!([
            { "timestamp": "2024-01-01T00:00:00Z", "value": 5 },
            { "timestamp": "2024-01-02T00:00:00Z", "value": 7 }
        ])
    }

    fn sample_series() -> Series {
        Series::styled("Sample Data", "rgba(75,192,192,1)", "rgba(75,192,192,0.2)")
    }

    async fn mounted(payload: Value) -> (TimeSeriesChart, Arc<RecordingOverlay>) {
        let overlay = Arc::new(RecordingOverlay::default());
        let repository = StaticRepository(Ok(payload));
        let chart =
            TimeSeriesChart::mount("Time Scale", sample_series(), &repository, overlay.clone())
                .await;
        (chart, overlay)
    }

    #[tokio::test]
    async fn test_mount_populates_series_in_order() {
        let (chart, _) = mounted(sample_payload()).await;

        assert_eq!(chart.error(), None);
        assert_eq!(chart.granularity(), Granularity::Day);
        assert_eq!(chart.series().data.len(), 2);
        assert_eq!(chart.series().data[0].y, 5.0);
        assert_eq!(chart.series().data[1].y, 7.0);
        assert_eq!(chart.series().label, "Sample Data");
        assert_eq!(chart.selected_point(), None);
        assert!(!chart.overlay_visible());
    }

    #[tokio::test]
    async fn test_mount_empty_payload_sets_format_error() {
        let (chart, _) = mounted(json!([])).await;

        assert_eq!(chart.error(), Some(LoadError::UnexpectedFormat));
        assert_eq!(
            chart.error().unwrap().to_string(),
            "Data is not in expected format or empty"
        );
        assert!(chart.render_config().is_none());
    }

    #[tokio::test]
    async fn test_mount_non_array_payload_sets_format_error() {
        let (chart, _) = mounted(json!({ "rows": [] })).await;
        assert_eq!(chart.error(), Some(LoadError::UnexpectedFormat));
        assert!(chart.render_config().is_none());
    }

    #[tokio::test]
    async fn test_all_samples_dropped_leaves_empty_series_unrendered() {
        let (chart, _) = mounted(json!([{ "timestamp": "nope", "value": 5 }])).await;

        assert_eq!(chart.error(), None);
        assert!(chart.series().data.is_empty());
        assert!(chart.render_config().is_none());
    }

    #[tokio::test]
    async fn test_mount_fetch_failure_sets_fetch_error() {
        let overlay = Arc::new(RecordingOverlay::default());
        let repository = StaticRepository(Err("connection refused".to_string()));
        let chart =
            TimeSeriesChart::mount("Time Scale", sample_series(), &repository, overlay).await;

        assert_eq!(chart.error(), Some(LoadError::Fetch));
        assert_eq!(chart.error().unwrap().to_string(), "Error fetching data");
        assert!(chart.render_config().is_none());
    }

    #[tokio::test]
    async fn test_change_granularity_is_idempotent_and_isolated() {
        let (mut chart, _) = mounted(sample_payload()).await;
        chart.handle_chart_click(&[ChartHit {
            dataset_index: 0,
            point_index: 0,
        }]);
        let selected = chart.selected_point();
        let data = chart.series().data.clone();

        chart.change_granularity(Granularity::Month);
        chart.change_granularity(Granularity::Month);

        assert_eq!(chart.granularity(), Granularity::Month);
        assert_eq!(chart.series().data, data);
        assert_eq!(chart.selected_point(), selected);
    }

    #[tokio::test]
    async fn test_click_with_no_hits_is_a_no_op() {
        let (mut chart, overlay) = mounted(sample_payload()).await;

        chart.handle_chart_click(&[]);

        assert_eq!(chart.selected_point(), None);
        assert!(!chart.overlay_visible());
        assert!(overlay.calls().is_empty());
    }

    #[tokio::test]
    async fn test_click_opens_overlay_with_point_details() {
        let (mut chart, overlay) = mounted(sample_payload()).await;

        chart.handle_chart_click(&[ChartHit {
            dataset_index: 0,
            point_index: 1,
        }]);

        assert!(chart.overlay_visible());
        assert_eq!(chart.selected_point(), Some(chart.series().data[1]));
        let calls = overlay.calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            OverlayCall::Show(title, body) => {
                assert_eq!(title, "Data Point Details");
                assert!(body.contains("Value: 7"));
                assert!(body.contains("2024-01-02"));
            }
            other => panic!("unexpected overlay call: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_click_out_of_range_is_a_no_op() {
        let (mut chart, overlay) = mounted(sample_payload()).await;

        chart.handle_chart_click(&[ChartHit {
            dataset_index: 0,
            point_index: 9,
        }]);
        chart.handle_chart_click(&[ChartHit {
            dataset_index: 3,
            point_index: 0,
        }]);

        assert_eq!(chart.selected_point(), None);
        assert!(!chart.overlay_visible());
        assert!(overlay.calls().is_empty());
    }

    #[tokio::test]
    async fn test_close_overlay_clears_selection_and_is_idempotent() {
        let (mut chart, overlay) = mounted(sample_payload()).await;
        chart.handle_chart_click(&[ChartHit {
            dataset_index: 0,
            point_index: 0,
        }]);

        chart.close_overlay();
        assert_eq!(chart.selected_point(), None);
        assert!(!chart.overlay_visible());

        chart.close_overlay();
        assert_eq!(chart.selected_point(), None);
        assert!(!chart.overlay_visible());
        assert_eq!(overlay.calls().last(), Some(&OverlayCall::Hide));
    }

    #[tokio::test]
    async fn test_render_config_reflects_state() {
        let (mut chart, _) = mounted(sample_payload()).await;
        chart.change_granularity(Granularity::Week);

        let config = chart.render_config().expect("chart should render");

        assert_eq!(config.title, "Time Scale");
        assert_eq!(config.datasets.len(), 1);
        assert_eq!(config.datasets[0].label, "Sample Data");
        assert_eq!(config.datasets[0].points.len(), 2);
        assert_eq!(config.x_axis.unit, Granularity::Week);
        assert!(config.y_axis.begin_at_zero);
        assert_eq!(config.zoom, ZoomOptions::x_only());
    }

    #[tokio::test]
    async fn test_export_writes_png_snapshot() {
        let (chart, _) = mounted(sample_payload()).await;
        let surface = StubSurface {
            png: Some(vec![0x89, b'P', b'N', b'G']),
        };
        let out_dir = std::env::temp_dir().join(format!("chart-export-{}", std::process::id()));
        std::fs::create_dir_all(&out_dir).unwrap();

        chart.export_image(&surface, &out_dir);

        let exported = std::fs::read(out_dir.join("chart.png")).unwrap();
        assert_eq!(exported, vec![0x89, b'P', b'N', b'G']);
        std::fs::remove_dir_all(&out_dir).unwrap();
    }

    #[tokio::test]
    async fn test_export_without_raster_is_a_no_op() {
        let (chart, _) = mounted(sample_payload()).await;
        let out_dir =
            std::env::temp_dir().join(format!("chart-export-none-{}", std::process::id()));
        std::fs::create_dir_all(&out_dir).unwrap();

        chart.export_image(&StubSurface { png: None }, &out_dir);

        assert!(!out_dir.join("chart.png").exists());
        std::fs::remove_dir_all(&out_dir).unwrap();
    }

    #[tokio::test]
    async fn test_export_in_error_state_is_a_no_op() {
        let (chart, _) = mounted(json!([])).await;
        let surface = StubSurface {
            png: Some(vec![1, 2, 3]),
        };
        let out_dir =
            std::env::temp_dir().join(format!("chart-export-err-{}", std::process::id()));
        std::fs::create_dir_all(&out_dir).unwrap();

        chart.export_image(&surface, &out_dir);

        assert!(!out_dir.join("chart.png").exists());
        std::fs::remove_dir_all(&out_dir).unwrap();
    }
}
