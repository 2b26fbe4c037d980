//! Fixture components for testing.
//!
//! Available behind the `test-utils` feature flag.

mod clock;
mod logger;

pub use clock::FixedClock;
pub use logger::Logger;
