use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A tradable pair together with the parameters used to simulate its price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub code: String,
    pub base_price: f64,
    pub volatility: f64,
}

impl Instrument {
    pub fn new(code: impl Into<String>, base_price: f64, volatility: f64) -> Self {
        Self {
            code: code.into(),
            base_price,
            volatility,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Timeframe {
    #[serde(rename = "1M")]
    Minute1,
    #[serde(rename = "5M")]
    Minute5,
    #[serde(rename = "15M")]
    Minute15,
    #[serde(rename = "1H")]
    #[default]
    Hour1,
    #[serde(rename = "4H")]
    Hour4,
    #[serde(rename = "1D")]
    Day1,
}

impl Timeframe {
    /// Every supported timeframe, shortest first.
    pub const ALL: [Timeframe; 6] = [
        Timeframe::Minute1,
        Timeframe::Minute5,
        Timeframe::Minute15,
        Timeframe::Hour1,
        Timeframe::Hour4,
        Timeframe::Day1,
    ];

    /// Spacing between two consecutive sample points.
    pub fn minutes(self) -> i64 {
        match self {
            Timeframe::Minute1 => 1,
            Timeframe::Minute5 => 5,
            Timeframe::Minute15 => 15,
            Timeframe::Hour1 => 60,
            Timeframe::Hour4 => 240,
            Timeframe::Day1 => 1440,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::Minute1 => "1M",
            Timeframe::Minute5 => "5M",
            Timeframe::Minute15 => "15M",
            Timeframe::Hour1 => "1H",
            Timeframe::Hour4 => "4H",
            Timeframe::Day1 => "1D",
        }
    }

    /// Daily bars are labelled by calendar day, everything else by clock time.
    pub fn uses_date_labels(self) -> bool {
        matches!(self, Timeframe::Day1)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown timeframe '{0}', expected one of 1M, 5M, 15M, 1H, 4H, 1D")]
pub struct ParseTimeframeError(pub String);

impl FromStr for Timeframe {
    type Err = ParseTimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.as_str() == s.trim())
            .ok_or_else(|| ParseTimeframeError(s.to_string()))
    }
}

/// One generated chart sample. `sma_short`/`sma_long` are overlay values
/// drawn near `price`, not averages over the series. `timestamp` carries the
/// display zone's offset at that instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub timestamp: DateTime<FixedOffset>,
    pub label: String,
    pub price: f64,
    pub sma_short: f64,
    pub sma_long: f64,
}

/// Points of one generation run, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<SamplePoint>,
}

impl Series {
    pub fn new(points: Vec<SamplePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&SamplePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SamplePoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SamplePoint> {
        self.points.iter()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a SamplePoint;
    type IntoIter = std::slice::Iter<'a, SamplePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// A flat move counts as up.
    pub fn from_change(percent_change: f64) -> Self {
        if percent_change >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// Headline numbers derived from a series; never stored apart from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub current_price: f64,
    pub reference_price: f64,
    pub percent_change: f64,
    pub direction: Direction,
}

impl PriceSummary {
    /// Compares the last point against the first. An empty series falls back
    /// to `fallback_price` at both ends, i.e. a flat change.
    pub fn derive(series: &Series, fallback_price: f64) -> Self {
        let current_price = series.last().map_or(fallback_price, |p| p.price);
        let reference_price = series.first().map_or(fallback_price, |p| p.price);

        let percent_change = if reference_price == 0.0 {
            0.0
        } else {
            (current_price - reference_price) / reference_price * 100.0
        };

        Self {
            current_price,
            reference_price,
            percent_change,
            direction: Direction::from_change(percent_change),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Bullish,
    Bearish,
    Neutral,
    Trending,
}

/// A fixed readout shown next to the chart, e.g. "RSI (14)" at 58.4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub name: String,
    pub value: String,
    pub signal: Signal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(price: f64) -> SamplePoint {
        SamplePoint {
            timestamp: DateTime::parse_from_rfc3339("2024-03-01T12:00:00+00:00").unwrap(),
            label: "12:00".to_string(),
            price,
            sma_short: price,
            sma_long: price,
        }
    }

    #[test]
    fn test_timeframe_parse_and_display() {
        for tf in Timeframe::ALL {
            assert_eq!(tf.to_string().parse::<Timeframe>().unwrap(), tf);
        }
        assert_eq!(" 4H ".parse::<Timeframe>().unwrap(), Timeframe::Hour4);
        assert_eq!(
            "30M".parse::<Timeframe>(),
            Err(ParseTimeframeError("30M".to_string()))
        );
    }

    #[test]
    fn test_timeframe_default_is_hourly() {
        assert_eq!(Timeframe::default(), Timeframe::Hour1);
    }

    #[test]
    fn test_timeframe_minutes() {
        let minutes: Vec<i64> = Timeframe::ALL.iter().map(|tf| tf.minutes()).collect();
        assert_eq!(minutes, vec![1, 5, 15, 60, 240, 1440]);
        assert!(Timeframe::Day1.uses_date_labels());
        assert!(!Timeframe::Hour4.uses_date_labels());
    }

    #[test]
    fn test_timeframe_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Timeframe::Minute15).unwrap(), "\"15M\"");
        let tf: Timeframe = serde_json::from_str("\"1D\"").unwrap();
        assert_eq!(tf, Timeframe::Day1);
    }

    #[test]
    fn test_summary_empty_series_falls_back() {
        let summary = PriceSummary::derive(&Series::default(), 1.0847);
        assert_eq!(summary.current_price, 1.0847);
        assert_eq!(summary.reference_price, 1.0847);
        assert_eq!(summary.percent_change, 0.0);
        assert_eq!(summary.direction, Direction::Up);
    }

    #[test]
    fn test_summary_flat_is_up() {
        let series = Series::new(vec![point(1.2), point(1.5), point(1.2)]);
        let summary = PriceSummary::derive(&series, 9.9);
        assert_eq!(summary.percent_change, 0.0);
        assert_eq!(summary.direction, Direction::Up);
    }

    #[test]
    fn test_summary_down_move() {
        let series = Series::new(vec![point(200.0), point(190.0)]);
        let summary = PriceSummary::derive(&series, 1.0);
        assert_eq!(summary.current_price, 190.0);
        assert_eq!(summary.reference_price, 200.0);
        assert!((summary.percent_change + 5.0).abs() < 1e-9);
        assert_eq!(summary.direction, Direction::Down);
    }

    #[test]
    fn test_summary_zero_reference_is_flat() {
        let series = Series::new(vec![point(0.0), point(0.5)]);
        let summary = PriceSummary::derive(&series, 1.0);
        assert_eq!(summary.percent_change, 0.0);
    }

    #[test]
    fn test_signal_and_direction_serde() {
        assert_eq!(serde_json::to_string(&Signal::Trending).unwrap(), "\"trending\"");
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
    }
}
