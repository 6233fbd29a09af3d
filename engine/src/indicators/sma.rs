// Simple Moving Average (SMA) over sample prices
use super::IndicatorCalculator;
use crate::error::EngineError;
use serde_json::Value;
use shared::models::SamplePoint;

pub struct Sma {
    name: String,
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Result<Self, EngineError> {
        if period == 0 {
            return Err(EngineError::IndicatorError(
                "SMA period must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            name: format!("SMA({})", period),
            period,
        })
    }
}

impl IndicatorCalculator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "period": self.period })
    }

    fn calculate(&self, data: &[SamplePoint]) -> Vec<f64> {
        if data.len() < self.period {
            return vec![f64::NAN; data.len()];
        }

        let mut results = vec![f64::NAN; self.period - 1]; // No SMA for initial period

        // Calculate sum for the first window
        let mut sum: f64 = data.iter().take(self.period).map(|p| p.price).sum();
        results.push(sum / self.period as f64);

        // Slide the window
        for i in self.period..data.len() {
            sum = sum - data[i - self.period].price + data[i].price;
            results.push(sum / self.period as f64);
        }
        results
    }
}
