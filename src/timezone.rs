use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Identifier candidates for the event reference timezone, tried in order.
///
/// The Windows-style id comes first for parity with hosts that only know
/// that naming, then the IANA name used on Linux/macOS. Both describe the
/// same geographic zone (South Africa, UTC+2, no seasonal shifts).
const EVENT_TIMEZONE_CANDIDATES: &[&str] =
    &["South Africa Standard Time", "Africa/Johannesburg"];

static EVENT_TIMEZONE: OnceLock<Tz> = OnceLock::new();

/// Returns the timezone used to interpret event wall-clock values.
///
/// Resolution runs at most once per process; every later call returns the
/// cached value. This never fails: if no candidate identifier resolves,
/// the result is UTC.
pub fn event_timezone() -> Tz {
    *EVENT_TIMEZONE.get_or_init(|| resolve_from_candidates(EVENT_TIMEZONE_CANDIDATES))
}

/// Walks the candidate identifiers in order and returns the first zone
/// that resolves, or UTC when none does.
pub(crate) fn resolve_from_candidates(candidates: &[&str]) -> Tz {
    for id in candidates {
        match lookup_timezone(id) {
            Ok(tz) => {
                debug!("Resolved event timezone '{}' from id '{}'", tz.name(), id);
                return tz;
            }
            Err(e) => {
                debug!("Timezone id '{}' not available: {}", id, e);
            }
        }
    }

    // Still deterministic, but reported local times may differ from the
    // expected South Africa wall clock.
    warn!("No event timezone candidate resolved, falling back to UTC");
    Tz::UTC
}

fn lookup_timezone(id: &str) -> Result<Tz> {
    id.parse::<Tz>()
        .map_err(|e| anyhow!("timezone '{}' not found: {}", id, e))
}
