//! Charts module - force series, projection and drawing

mod plotter;
mod projector;
mod series;

pub use plotter::ChartPlotter;
pub use projector::ChartProjector;
pub use series::{LineSeries, SeriesConfig, SeriesSink};
