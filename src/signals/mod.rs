//! Signal processing types and traits.
//!
//! This module provides the core abstractions every generator builds on:
//! - `Signal` trait for all sample sources
//! - `AudioSignal` trait binding a signal to a sample rate at the type level
//! - `AudioSignalExt` trait for rendering a signal into a finite sample sequence
//! - `ConstantSignal` for fixed values (silence is `ConstantSignal(0.0)`)

mod audio;
mod signal;

pub use audio::{AudioSignal, AudioSignalExt, frame_count, time_at};
pub use signal::{ConstantSignal, Signal};
