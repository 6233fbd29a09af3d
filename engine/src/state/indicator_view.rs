// Holds the selected instrument and timeframe, owns the live series and
// derives the headline numbers a chart surface displays.
//
// Every selection change builds the replacement series first and only then
// swaps it in, so a failed change leaves the previous state untouched.

use crate::config::DashboardSettings;
use crate::error::EngineError;
use crate::generator::{
    Clock, RandomSource, SeriesGenerator, SystemClock, SystemRandom,
};
use crate::indicators::{IndicatorCalculator, Sma};
use serde::Serialize;
use shared::models::{
    Direction, IndicatorReading, Instrument, PriceSummary, Series, Timeframe,
};

/// Read-only copy of everything a rendering surface needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub instrument: Instrument,
    pub timeframe: Timeframe,
    pub overlay_visible: bool,
    pub summary: PriceSummary,
    pub series: Series,
}

pub struct IndicatorView<R = SystemRandom, C = SystemClock> {
    settings: DashboardSettings,
    generator: SeriesGenerator<R, C>,
    selected: usize,
    timeframe: Timeframe,
    overlay_visible: bool,
    series: Series,
}

impl IndicatorView<SystemRandom, SystemClock> {
    pub fn with_system_sources(settings: DashboardSettings) -> Result<Self, EngineError> {
        Self::new(settings, SystemRandom::new(), SystemClock)
    }
}

impl<R: RandomSource, C: Clock> IndicatorView<R, C> {
    /// Starts on the first configured instrument with the configured
    /// default timeframe and overlay visibility.
    pub fn new(settings: DashboardSettings, rng: R, clock: C) -> Result<Self, EngineError> {
        settings.validate()?;

        let mut generator = SeriesGenerator::new(rng, clock);
        let timeframe = settings.default_timeframe;
        let series = generator.generate_for(&settings.instruments[0], settings.point_count, timeframe)?;

        tracing::info!(
            instrument = %settings.instruments[0].code,
            timeframe = %timeframe,
            points = series.len(),
            "Indicator view initialised"
        );

        Ok(Self {
            overlay_visible: settings.show_overlay,
            settings,
            generator,
            selected: 0,
            timeframe,
            series,
        })
    }

    /// Switches to another configured instrument. Unknown codes are
    /// rejected and the current selection and series are kept.
    pub fn select_instrument(&mut self, code: &str) -> Result<(), EngineError> {
        let Some(index) = self.settings.instruments.iter().position(|i| i.code == code) else {
            tracing::warn!(instrument = %code, "Rejected selection of unknown instrument");
            return Err(EngineError::InvalidInstrumentCode(code.to_string()));
        };
        if index == self.selected {
            return Ok(());
        }

        let series = self.generator.generate_for(
            &self.settings.instruments[index],
            self.settings.point_count,
            self.timeframe,
        )?;
        self.selected = index;
        self.series = series;

        tracing::info!(instrument = %code, timeframe = %self.timeframe, "Instrument selected");
        Ok(())
    }

    /// Parses a timeframe label such as "15M" and switches to it.
    pub fn select_timeframe(&mut self, label: &str) -> Result<Timeframe, EngineError> {
        let timeframe = label.parse::<Timeframe>().map_err(|e| {
            tracing::warn!(timeframe = %label, "Rejected selection of unknown timeframe");
            EngineError::from(e)
        })?;
        self.set_timeframe(timeframe)?;
        Ok(timeframe)
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> Result<(), EngineError> {
        if timeframe == self.timeframe {
            return Ok(());
        }

        let series = self.generator.generate_for(
            &self.settings.instruments[self.selected],
            self.settings.point_count,
            timeframe,
        )?;
        self.timeframe = timeframe;
        self.series = series;

        tracing::info!(
            instrument = %self.selected_instrument().code,
            timeframe = %timeframe,
            "Timeframe selected"
        );
        Ok(())
    }

    /// Flips overlay visibility and returns the new value. The series is
    /// left as is.
    pub fn toggle_overlay(&mut self) -> bool {
        self.overlay_visible = !self.overlay_visible;
        tracing::debug!(overlay_visible = self.overlay_visible, "Overlay toggled");
        self.overlay_visible
    }

    pub fn set_overlay_visible(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn selected_instrument(&self) -> &Instrument {
        &self.settings.instruments[self.selected]
    }

    pub fn selected_timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn summary(&self) -> PriceSummary {
        PriceSummary::derive(&self.series, self.selected_instrument().base_price)
    }

    pub fn current_price(&self) -> f64 {
        self.summary().current_price
    }

    pub fn reference_price(&self) -> f64 {
        self.summary().reference_price
    }

    pub fn percent_change(&self) -> f64 {
        self.summary().percent_change
    }

    pub fn direction(&self) -> Direction {
        self.summary().direction
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.settings.instruments
    }

    pub fn timeframes(&self) -> &'static [Timeframe] {
        &Timeframe::ALL
    }

    pub fn indicator_readings(&self) -> &[IndicatorReading] {
        &self.settings.indicator_readings
    }

    /// Rolling average of the generated prices. This is separate from the
    /// overlay values stored on each point.
    pub fn rolling_sma(&self, period: usize) -> Result<Vec<f64>, EngineError> {
        let sma = Sma::new(period)?;
        Ok(sma.calculate(self.series.points()))
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            instrument: self.selected_instrument().clone(),
            timeframe: self.timeframe,
            overlay_visible: self.overlay_visible,
            summary: self.summary(),
            series: self.series.clone(),
        }
    }
}
