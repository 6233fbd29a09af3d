// Data model shared by the engine and any rendering surface that consumes it.
pub mod models;
pub mod utils;

pub use models::{
    Direction, IndicatorReading, Instrument, ParseTimeframeError, PriceSummary, SamplePoint,
    Series, Signal, Timeframe,
};
