// Engine library root
// Synthetic price series for the technical-analysis panel and the view state
// that drives regeneration on selection changes.

pub mod config;
pub mod error;
pub mod generator;
pub mod indicators;
pub mod state;

pub use config::DashboardSettings;
pub use error::EngineError;
pub use generator::SeriesGenerator;
pub use state::{IndicatorView, ViewSnapshot};
