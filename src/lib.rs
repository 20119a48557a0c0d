//! # Event Clock
//!
//! Centralized clock helpers so event start/end dates and times are
//! interpreted consistently across the application.
//!
//! Event StartDate/EndDate/StartTime/EndTime are stored without timezone
//! context (local "wall clock" values). The application is South
//! Africa-focused, so those values are interpreted in South Africa local
//! time for lifecycle decisions ("is this event happening now/today"),
//! no matter which timezone the host server runs in.
//!
//! ## Features
//! - Current instant as an unambiguous UTC timestamp
//! - Conversion of any absolute instant into event-local wall-clock time
//! - Reference timezone resolved once per process via an ordered fallback
//!   chain (Windows id, then IANA id, then UTC)

/// Clock readings and event-local conversion
pub mod clock;
/// Reference timezone resolution and process-wide caching
pub mod timezone;
