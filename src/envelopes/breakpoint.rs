//! Piecewise-linear envelope defined by (time, level) breakpoints.

use crate::signals::time_at;
use crate::{AudioSignal, Signal};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    end_time: f64,
    end_level: f64,
}

/// Linear interpolation between `from` and `to` at position `t` in [0, 1].
///
/// Equal endpoints return `from` unchanged, so held segments stay exact.
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    if from == to {
        return from;
    }
    let t = t.clamp(0.0, 1.0);
    from * (1.0 - t) + to * t
}

/// A time-driven envelope built from breakpoints.
///
/// The envelope starts at `initial_level` at t = 0 and ramps linearly through
/// each breakpoint in order. Past the final breakpoint it holds the last
/// level. The output is never negative.
///
/// # Examples
///
/// ```
/// use signal_fixtures::envelopes::BreakpointEnvelope;
///
/// // 0.1 s attack, 0.2 s decay to 0.7, sustain until 2.5 s, 0.5 s release
/// let env = BreakpointEnvelope::<44100>::new(0.0)
///     .ramp_to(0.1, 1.0)
///     .ramp_to(0.3, 0.7)
///     .hold_until(2.5)
///     .ramp_to(3.0, 0.0);
///
/// assert_eq!(env.level_at(0.05), 0.5);
/// assert_eq!(env.level_at(1.0), 0.7);
/// assert_eq!(env.level_at(4.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct BreakpointEnvelope<const SAMPLE_RATE: u32> {
    initial_level: f64,
    segments: Vec<Segment>,
    index: u64,
}

impl<const SAMPLE_RATE: u32> BreakpointEnvelope<SAMPLE_RATE> {
    /// Creates an envelope sitting at `initial_level` with no segments.
    pub fn new(initial_level: f64) -> Self {
        Self {
            initial_level,
            segments: Vec::new(),
            index: 0,
        }
    }

    /// Appends a linear ramp reaching `level` at absolute time `time` seconds.
    pub fn ramp_to(mut self, time: f64, level: f64) -> Self {
        self.segments.push(Segment {
            end_time: time,
            end_level: level,
        });
        self
    }

    /// Holds the current final level until `time` seconds.
    pub fn hold_until(self, time: f64) -> Self {
        let level = self.final_level();
        self.ramp_to(time, level)
    }

    /// Level the envelope settles at after its last breakpoint.
    pub fn final_level(&self) -> f64 {
        self.segments
            .last()
            .map_or(self.initial_level, |s| s.end_level)
    }

    /// Time of the last breakpoint in seconds.
    pub fn duration(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.end_time)
    }

    /// Envelope level at time `t` seconds, clamped to be non-negative.
    pub fn level_at(&self, t: f64) -> f64 {
        let mut start_time = 0.0;
        let mut start_level = self.initial_level;
        for segment in &self.segments {
            if t < segment.end_time {
                let span = segment.end_time - start_time;
                let level = if span > 0.0 {
                    lerp(start_level, segment.end_level, (t - start_time) / span)
                } else {
                    start_level
                };
                return level.max(0.0);
            }
            start_time = segment.end_time;
            start_level = segment.end_level;
        }
        start_level.max(0.0)
    }

    /// Rewinds the envelope to t = 0.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl<const SAMPLE_RATE: u32> Signal for BreakpointEnvelope<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let level = self.level_at(time_at(self.index, SAMPLE_RATE));
        self.index += 1;
        level
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for BreakpointEnvelope<SAMPLE_RATE> {}
