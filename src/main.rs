// Main entry point - wires the chart component to its collaborators
use std::path::Path;
use std::sync::Arc;

use timescale_explorer::application::chart_component::TimeSeriesChart;
use timescale_explorer::application::render_surface::RenderSurface;
use timescale_explorer::domain::chart::Granularity;
use timescale_explorer::domain::series::Series;
use timescale_explorer::infrastructure::config::load_chart_settings;
use timescale_explorer::infrastructure::console::{ConsoleOverlay, HeadlessSurface};
use timescale_explorer::infrastructure::engine_registry::ensure_engine_registered;
use timescale_explorer::infrastructure::http_repository::HttpSampleRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let settings = load_chart_settings()?;

    // Rendering engine components register once per process
    ensure_engine_registered();

    // Data access (infrastructure layer)
    let repository = HttpSampleRepository::new(settings.source.base_url);

    // Mount the component; the payload is fetched exactly once here
    let series = Series::styled(
        settings.display.label,
        settings.display.border_color,
        settings.display.background_color,
    );
    let overlay = Arc::new(ConsoleOverlay);
    let chart = TimeSeriesChart::mount(settings.display.title, series, &repository, overlay).await;

    match chart.render_config() {
        Some(config) => {
            let surface = HeadlessSurface::default();
            surface.render(&config);
            println!(
                "{}: loaded {} point(s); granularity options: {}",
                chart.title(),
                chart.series().data.len(),
                Granularity::ALL.map(|g| g.label()).join(", ")
            );
            chart.export_image(&surface, Path::new("."));
        }
        None => match chart.error() {
            // The shell shows the error view in place of the chart
            Some(e) => eprintln!("Error: {}", e),
            None => eprintln!("Nothing to plot"),
        },
    }

    Ok(())
}
