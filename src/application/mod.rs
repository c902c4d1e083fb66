// Application layer - the chart component and its capability seams
pub mod chart_component;
pub mod overlay_host;
pub mod render_surface;
pub mod sample_repository;
