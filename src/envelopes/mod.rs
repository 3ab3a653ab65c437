//! Envelopes for shaping amplitude over time.

mod breakpoint;

pub use breakpoint::BreakpointEnvelope;
