// Technical indicators computed over a generated series
pub mod sma;

pub use sma::Sma;

use serde_json::Value;
use shared::models::SamplePoint;

// Common trait for all indicators
pub trait IndicatorCalculator: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Parameters used for this indicator instance
    fn calculate(&self, data: &[SamplePoint]) -> Vec<f64>; // NaN where the indicator is not yet defined
}
