// Numeric and label helpers shared across the engine and display code.
use crate::models::Timeframe;
use chrono::{DateTime, FixedOffset};

/// Number of decimals kept for stored prices.
pub const PRICE_DECIMALS: i32 = 5;

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn round_price(value: f64) -> f64 {
    round_to(value, PRICE_DECIMALS)
}

/// `DD/MM` for daily bars, 24-hour `HH:MM` otherwise, read in the
/// timestamp's own offset.
pub fn format_label(timestamp: &DateTime<FixedOffset>, timeframe: Timeframe) -> String {
    if timeframe.uses_date_labels() {
        timestamp.format("%d/%m").to_string()
    } else {
        timestamp.format("%H:%M").to_string()
    }
}
