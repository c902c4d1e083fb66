// Settings for the chart shell - data source location and display metadata
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub source: SourceSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            label: default_label(),
            border_color: default_border_color(),
            background_color: default_background_color(),
        }
    }
}

fn default_title() -> String {
    "Time Scale".to_string()
}

fn default_label() -> String {
    "Sample Data".to_string()
}

fn default_border_color() -> String {
    "rgba(75,192,192,1)".to_string()
}

fn default_background_color() -> String {
    "rgba(75,192,192,0.2)".to_string()
}

pub fn load_chart_settings() -> anyhow::Result<ChartSettings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/chart"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
