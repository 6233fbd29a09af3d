use chrono::{DateTime, Local, TimeZone, Utc};

/// Source of the instant a series ends at. Labels are rendered in the
/// clock's time zone.
pub trait Clock {
    type Tz: TimeZone;

    fn now(&self) -> DateTime<Self::Tz>;
}

/// Current instant in the machine's local zone, matching what a user sees
/// on screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone = Utc>(pub DateTime<Tz>);

impl<Tz: TimeZone> Clock for FixedClock<Tz> {
    type Tz = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.0.clone()
    }
}
