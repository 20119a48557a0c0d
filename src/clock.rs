use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::timezone::event_timezone;

/// A point in time with no local-zone ambiguity.
///
/// Internally a UTC timestamp, so comparisons and ordering are meaningful
/// regardless of the host's locale or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbsoluteInstant(DateTime<Utc>);

impl AbsoluteInstant {
    /// The underlying UTC timestamp.
    pub fn into_utc(self) -> DateTime<Utc> {
        self.0
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for AbsoluteInstant {
    fn from(dt: DateTime<Z>) -> Self {
        Self(dt.with_timezone(&Utc))
    }
}

/// Boundary normalization for unmarked timestamps: a wall-clock value with
/// no zone tag (as stored event fields are) is force-interpreted as UTC
/// rather than rejected. This avoids surprises when upstream data sources
/// omit zone metadata.
impl From<NaiveDateTime> for AbsoluteInstant {
    fn from(naive: NaiveDateTime) -> Self {
        Self(Utc.from_utc_datetime(&naive))
    }
}

/// Returns the current instant as an unambiguous UTC timestamp.
pub fn now_utc() -> AbsoluteInstant {
    AbsoluteInstant(Utc::now())
}

/// Converts an absolute instant into the wall-clock date and time an
/// observer in the event reference timezone would see.
///
/// Accepts anything convertible into [`AbsoluteInstant`], including naive
/// timestamps, which are treated as UTC. Total: cannot fail at runtime.
pub fn to_event_local(instant: impl Into<AbsoluteInstant>) -> NaiveDateTime {
    let instant = instant.into();
    instant.0.with_timezone(&event_timezone()).naive_local()
}

/// Returns "now" expressed in the event reference timezone.
pub fn event_now() -> NaiveDateTime {
    to_event_local(now_utc())
}

/// Returns "today" (date only) in the event reference timezone.
pub fn event_today() -> NaiveDate {
    event_now().date()
}
