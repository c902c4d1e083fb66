// Domain layer - chart data and presentation models
pub mod chart;
pub mod sample;
pub mod series;
