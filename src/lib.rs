// Library entry point - exposes the chart component and its adapters
pub mod application;
pub mod domain;
pub mod infrastructure;
