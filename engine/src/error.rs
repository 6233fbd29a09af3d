use shared::ParseTimeframeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown instrument code: {0}")]
    InvalidInstrumentCode(String),

    #[error("Invalid timeframe: {0}")]
    InvalidTimeframe(String),

    #[error("Degenerate parameters for '{code}': base price {base_price} and volatility {volatility} must both be positive")]
    DegenerateParameters {
        code: String,
        base_price: f64,
        volatility: f64,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Configuration format error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Indicator calculation error: {0}")]
    IndicatorError(String),

    #[error("Series time range error: {0}")]
    TimeRangeError(String),
}

impl From<ParseTimeframeError> for EngineError {
    fn from(err: ParseTimeframeError) -> Self {
        EngineError::InvalidTimeframe(err.0)
    }
}
