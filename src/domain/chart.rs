// Chart presentation model - granularity and the declarative render configuration
use super::sample::Point;
use super::series::Series;

/// X-axis bucketing unit. Controls axis labeling density only; the series
/// itself is never filtered or resampled by a granularity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    pub const ALL: [Granularity; 4] = [
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Year,
    ];

    /// Value token understood by the rendering engine's time axis.
    pub fn unit(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }

    /// Display label for the granularity selector.
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Day => "Daily",
            Granularity::Week => "Weekly",
            Granularity::Month => "Monthly",
            Granularity::Year => "Yearly",
        }
    }

    /// Parse the value token emitted by the selector control.
    pub fn from_unit(unit: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.unit() == unit)
    }
}

/// Grid and tick styling for one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisStyle {
    pub grid_color: String,
    pub tick_color: String,
    pub tick_font_size: u32,
}

impl AxisStyle {
    fn with_grid(grid_color: &str) -> Self {
        Self {
            grid_color: grid_color.to_string(),
            tick_color: "black".to_string(),
            tick_font_size: 18,
        }
    }
}

/// Time axis bucketed at the selected granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAxis {
    pub unit: Granularity,
    pub style: AxisStyle,
}

impl TimeAxis {
    pub fn bucketed(unit: Granularity) -> Self {
        Self {
            unit,
            style: AxisStyle::with_grid("rgba(255, 0, 0, 0.1)"),
        }
    }
}

/// Value axis anchored at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueAxis {
    pub begin_at_zero: bool,
    pub style: AxisStyle,
}

impl ValueAxis {
    pub fn from_zero() -> Self {
        Self {
            begin_at_zero: true,
            style: AxisStyle::with_grid("rgba(0, 255, 0, 0.1)"),
        }
    }
}

/// Which plot dimension a gesture applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureDimension {
    X,
    Y,
    Xy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanOptions {
    pub enabled: bool,
    pub mode: GestureDimension,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelZoomOptions {
    pub enabled: bool,
    pub mode: GestureDimension,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomOptions {
    pub pan: PanOptions,
    pub wheel: WheelZoomOptions,
}

impl ZoomOptions {
    /// Drag-pan and wheel-zoom, both restricted to the time dimension.
    pub fn x_only() -> Self {
        Self {
            pan: PanOptions {
                enabled: true,
                mode: GestureDimension::X,
            },
            wheel: WheelZoomOptions {
                enabled: true,
                mode: GestureDimension::X,
            },
        }
    }
}

/// One dataset as the rendering engine expects it.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub label: String,
    pub border_color: String,
    pub background_color: String,
    pub points: Vec<Point>,
}

impl DatasetConfig {
    pub fn from_series(series: &Series) -> Self {
        Self {
            label: series.label.clone(),
            border_color: series.border_color.clone(),
            background_color: series.background_color.clone(),
            points: series.data.clone(),
        }
    }
}

/// The declarative configuration handed to the rendering engine: datasets,
/// scales and interaction plugins. The engine draws; the component never
/// touches the canvas except for reading the export raster.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub datasets: Vec<DatasetConfig>,
    pub x_axis: TimeAxis,
    pub y_axis: ValueAxis,
    pub zoom: ZoomOptions,
}
