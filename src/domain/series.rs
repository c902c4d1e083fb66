// Series domain model - the plotted dataset and its display metadata
use super::sample::Point;

/// The ordered collection of points currently plotted, plus the display
/// metadata that survives data replacement. The order is insertion order
/// from the source payload; the chart never re-sorts it.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub border_color: String,
    pub background_color: String,
    pub data: Vec<Point>,
}

impl Series {
    /// An empty series carrying only display metadata. Data arrives later,
    /// replaced wholesale on a successful load.
    pub fn styled(
        label: impl Into<String>,
        border_color: impl Into<String>,
        background_color: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            border_color: border_color.into(),
            background_color: background_color.into(),
            data: Vec::new(),
        }
    }

    /// Replace the plotted points, keeping label and colors.
    pub fn replace_data(&mut self, data: Vec<Point>) {
        self.data = data;
    }
}
