mod chart;
pub use chart::RadarChart;

pub mod geometry;
