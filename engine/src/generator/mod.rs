// Synthetic price series generation.
pub mod clock;
pub mod random;

pub use clock::{Clock, FixedClock, SystemClock};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, SystemRandom};

use crate::error::EngineError;
use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use shared::models::{Instrument, SamplePoint, Series, Timeframe};
use shared::utils::{format_label, round_price};

/// Lower end of the per-step perturbation, in units of volatility. The step
/// range is `[-0.48, 0.52)`, which gives the walk a slight upward drift.
pub const DRIFT_OFFSET: f64 = 0.48;

/// Code reported in errors when generating outside of an instrument.
const AD_HOC_CODE: &str = "ad-hoc";

/// Upper bound on the up-front allocation for one series.
const MAX_PREALLOCATED_POINTS: usize = 4096;

/// Random-walk generator with an injected random source and clock.
pub struct SeriesGenerator<R, C> {
    rng: R,
    clock: C,
}

impl<R: RandomSource, C: Clock> SeriesGenerator<R, C> {
    pub fn new(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    /// Generates `count` points ending at the clock's current time.
    pub fn generate(
        &mut self,
        base_price: f64,
        volatility: f64,
        count: usize,
        timeframe: Timeframe,
    ) -> Result<Series, EngineError> {
        let now = self.clock.now();
        generate_series(
            AD_HOC_CODE,
            base_price,
            volatility,
            count,
            timeframe,
            now,
            &mut self.rng,
        )
    }

    pub fn generate_for(
        &mut self,
        instrument: &Instrument,
        count: usize,
        timeframe: Timeframe,
    ) -> Result<Series, EngineError> {
        let now = self.clock.now();
        generate_series(
            &instrument.code,
            instrument.base_price,
            instrument.volatility,
            count,
            timeframe,
            now,
            &mut self.rng,
        )
    }
}

/// Rejects prices or volatilities that are non-positive or not finite.
pub fn validate_parameters(code: &str, base_price: f64, volatility: f64) -> Result<(), EngineError> {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if usable(base_price) && usable(volatility) {
        Ok(())
    } else {
        Err(EngineError::DegenerateParameters {
            code: code.to_string(),
            base_price,
            volatility,
        })
    }
}

fn generate_series<R: RandomSource, Tz: TimeZone>(
    code: &str,
    base_price: f64,
    volatility: f64,
    count: usize,
    timeframe: Timeframe,
    now: DateTime<Tz>,
    mut rng: R,
) -> Result<Series, EngineError> {
    validate_parameters(code, base_price, volatility)?;

    // The oldest point bounds the whole window, so check it before any work.
    if count > 0 {
        step_timestamp(&now, count - 1, timeframe)?;
    }

    let mut price = base_price;
    let mut points = Vec::with_capacity(count.min(MAX_PREALLOCATED_POINTS));

    for step in 0..count {
        price += (rng.next_unit() - DRIFT_OFFSET) * volatility;

        let timestamp = step_timestamp(&now, count - 1 - step, timeframe)?;
        let sma_short = round_price(price + rng.next_unit() * volatility);
        let sma_long = round_price(price + rng.next_unit() * volatility);

        points.push(SamplePoint {
            label: format_label(&timestamp, timeframe),
            timestamp,
            price: round_price(price),
            sma_short,
            sma_long,
        });
    }

    tracing::debug!(
        instrument = %code,
        timeframe = %timeframe,
        points = points.len(),
        "Generated price series"
    );

    Ok(Series::new(points))
}

/// Instant `steps_back` intervals before `now`, expressed with the offset
/// the clock's zone has at that instant. The subtraction happens on the
/// absolute instant, so daylight-saving shifts move the wall-clock labels.
fn step_timestamp<Tz: TimeZone>(
    now: &DateTime<Tz>,
    steps_back: usize,
    timeframe: Timeframe,
) -> Result<DateTime<FixedOffset>, EngineError> {
    i64::try_from(steps_back)
        .ok()
        .and_then(|steps| steps.checked_mul(timeframe.minutes()))
        .and_then(Duration::try_minutes)
        .and_then(|offset| now.clone().checked_sub_signed(offset))
        .map(|at| at.fixed_offset())
        .ok_or_else(|| {
            EngineError::TimeRangeError(format!(
                "{} points of {} reach outside the representable time range",
                steps_back + 1,
                timeframe
            ))
        })
}
