//! The fixed battery of fixture assets and the batch loop that writes them.

use crate::asset::AudioAsset;
use crate::error::Result;
use crate::signals::AudioSignalExt;
use crate::voices::{self, HarmonicVoice, SpeechLike};
use crate::{ConstantSignal, LogSweep, MultiToneOscillator, SineOscillator, WhiteNoise, wav};
use std::path::{Path, PathBuf};
use tracing::info;

/// Sample rate of every catalog asset.
pub const SAMPLE_RATE: u32 = 44100;

/// Seed for every noise-bearing catalog generator.
pub const DEFAULT_SEED: u64 = 42;

/// Where the binary writes the fixtures, relative to the working directory.
pub const OUTPUT_DIR: &str = "assets/test_samples";

/// Parameters of one generator invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorConfig {
    Tone {
        frequency: f64,
        amplitude: f64,
        duration: f64,
    },
    Sweep {
        start: f64,
        end: f64,
        amplitude: f64,
        duration: f64,
    },
    Voice {
        fundamental: f64,
        harmonics: u32,
        breath: f64,
        gain: f64,
        duration: f64,
        seed: u64,
    },
    Silence {
        duration: f64,
    },
    MultiTone {
        frequencies: &'static [f64],
        amplitude: f64,
        duration: f64,
    },
    Chord {
        frequencies: [f64; 3],
        gain: f64,
        duration: f64,
    },
    Noise {
        amplitude: f64,
        duration: f64,
        seed: u64,
    },
    Speech {
        duration: f64,
        seed: u64,
    },
}

impl GeneratorConfig {
    /// Number of interleaved channels this generator produces.
    pub fn channels(&self) -> u16 {
        match self {
            GeneratorConfig::MultiTone { frequencies, .. } => frequencies.len() as u16,
            _ => 1,
        }
    }

    /// Requested length in seconds.
    pub fn duration(&self) -> f64 {
        match *self {
            GeneratorConfig::Tone { duration, .. }
            | GeneratorConfig::Sweep { duration, .. }
            | GeneratorConfig::Voice { duration, .. }
            | GeneratorConfig::Silence { duration }
            | GeneratorConfig::MultiTone { duration, .. }
            | GeneratorConfig::Chord { duration, .. }
            | GeneratorConfig::Noise { duration, .. }
            | GeneratorConfig::Speech { duration, .. } => duration,
        }
    }

    /// Runs the generator at `SAMPLE_RATE`.
    pub fn generate(&self) -> Vec<f64> {
        match *self {
            GeneratorConfig::Tone {
                frequency,
                amplitude,
                duration,
            } => SineOscillator::<SAMPLE_RATE>::new(frequency, amplitude).render(duration),
            GeneratorConfig::Sweep {
                start,
                end,
                amplitude,
                duration,
            } => LogSweep::<SAMPLE_RATE>::new(start, end, duration, amplitude).render(duration),
            GeneratorConfig::Voice {
                fundamental,
                harmonics,
                breath,
                gain,
                duration,
                seed,
            } => HarmonicVoice::<SAMPLE_RATE>::seeded(fundamental, harmonics, breath, gain, seed)
                .render(duration),
            GeneratorConfig::Silence { duration } => {
                ConstantSignal::<SAMPLE_RATE>::silence().render(duration)
            }
            GeneratorConfig::MultiTone {
                frequencies,
                amplitude,
                duration,
            } => MultiToneOscillator::<SAMPLE_RATE>::new(frequencies, amplitude).render(duration),
            GeneratorConfig::Chord {
                frequencies,
                gain,
                duration,
            } => voices::chord::<SAMPLE_RATE>(frequencies, voices::chord_envelope(), gain)
                .render(duration),
            GeneratorConfig::Noise {
                amplitude,
                duration,
                seed,
            } => WhiteNoise::<SAMPLE_RATE, _>::seeded(amplitude, seed).render(duration),
            GeneratorConfig::Speech { duration, seed } => {
                SpeechLike::<SAMPLE_RATE>::seeded(seed).render(duration)
            }
        }
    }
}

/// One catalog entry: what to generate and where it goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixtureSpec {
    pub file_name: &'static str,
    pub description: &'static str,
    pub generator: GeneratorConfig,
}

impl FixtureSpec {
    /// Generates the samples and wraps them with their metadata.
    pub fn render(&self) -> AudioAsset {
        AudioAsset::new(
            self.file_name,
            self.generator.channels(),
            SAMPLE_RATE,
            self.generator.generate(),
        )
    }
}

/// The fixture battery, in the order it is written.
pub static CATALOG: [FixtureSpec; 8] = [
    FixtureSpec {
        file_name: "sine_440hz_1s.wav",
        description: "Pure 440Hz sine wave",
        generator: GeneratorConfig::Tone {
            frequency: 440.0,
            amplitude: 0.8,
            duration: 1.0,
        },
    },
    FixtureSpec {
        file_name: "sine_sweep_5s.wav",
        description: "Logarithmic sweep 20Hz-20kHz",
        generator: GeneratorConfig::Sweep {
            start: 20.0,
            end: 20000.0,
            amplitude: 0.8,
            duration: 5.0,
        },
    },
    FixtureSpec {
        file_name: "voice_simulated_3s.wav",
        description: "150Hz harmonic voice with breath noise",
        generator: GeneratorConfig::Voice {
            fundamental: 150.0,
            harmonics: 7,
            breath: 0.05,
            gain: 0.15,
            duration: 3.0,
            seed: DEFAULT_SEED,
        },
    },
    FixtureSpec {
        file_name: "silence_1s.wav",
        description: "Digital silence",
        generator: GeneratorConfig::Silence { duration: 1.0 },
    },
    FixtureSpec {
        file_name: "stereo_tone_2s.wav",
        description: "440Hz left, 880Hz right",
        generator: GeneratorConfig::MultiTone {
            frequencies: &[440.0, 880.0],
            amplitude: 0.8,
            duration: 2.0,
        },
    },
    FixtureSpec {
        file_name: "complex_chord_3s.wav",
        description: "C major chord with envelope",
        generator: GeneratorConfig::Chord {
            frequencies: voices::MAJOR_TRIAD_C4,
            gain: 0.25,
            duration: 3.0,
        },
    },
    FixtureSpec {
        file_name: "noise_white_2s.wav",
        description: "White noise",
        generator: GeneratorConfig::Noise {
            amplitude: 0.8,
            duration: 2.0,
            seed: DEFAULT_SEED,
        },
    },
    FixtureSpec {
        file_name: "speech_like_5s.wav",
        description: "Formant-shaped speech-like signal",
        generator: GeneratorConfig::Speech {
            duration: 5.0,
            seed: DEFAULT_SEED,
        },
    },
];

/// Looks up a catalog entry by file name.
pub fn find(file_name: &str) -> Option<&'static FixtureSpec> {
    CATALOG.iter().find(|spec| spec.file_name == file_name)
}

/// Outcome of writing one fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenFixture {
    pub path: PathBuf,
    pub description: &'static str,
    pub frames: usize,
    pub channels: u16,
}

/// Renders and writes every catalog entry into `out_dir`, in order.
///
/// Stops at the first error; files written before it stay on disk.
pub fn generate_all(out_dir: &Path) -> Result<Vec<WrittenFixture>> {
    info!("Generating {} fixtures into {}", CATALOG.len(), out_dir.display());
    let mut written = Vec::with_capacity(CATALOG.len());
    for spec in &CATALOG {
        let asset = spec.render();
        let path = wav::write_asset(&asset, out_dir)?;
        info!(
            "  {} - {} ({} frames, {}ch)",
            spec.file_name,
            spec.description,
            asset.frames(),
            asset.channels
        );
        written.push(WrittenFixture {
            path,
            description: spec.description,
            frames: asset.frames(),
            channels: asset.channels,
        });
    }
    Ok(written)
}
