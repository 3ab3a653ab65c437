//! Audio asset descriptor: the writer's sole input.

/// A named block of samples plus the metadata needed to encode it.
///
/// Channel count and sample rate are declared, never inferred from the
/// samples. Multi-channel samples are interleaved frame by frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioAsset {
    pub file_name: String,
    pub channels: u16,
    pub sample_rate: u32,
    pub samples: Vec<f64>,
}

impl AudioAsset {
    /// Describes interleaved samples with `channels` channels.
    pub fn new(
        file_name: impl Into<String>,
        channels: u16,
        sample_rate: u32,
        samples: Vec<f64>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            channels,
            sample_rate,
            samples,
        }
    }

    /// Describes single-channel samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use signal_fixtures::AudioAsset;
    ///
    /// let asset = AudioAsset::mono("click.wav", 44100, vec![0.0, 1.0, 0.0]);
    /// assert_eq!(asset.frames(), 3);
    /// assert!(asset.is_well_formed());
    /// ```
    pub fn mono(file_name: impl Into<String>, sample_rate: u32, samples: Vec<f64>) -> Self {
        Self::new(file_name, 1, sample_rate, samples)
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// True when the samples divide into whole frames.
    pub fn is_well_formed(&self) -> bool {
        self.channels > 0 && self.samples.len() % self.channels as usize == 0
    }

    /// Samples of a single channel, de-interleaved.
    ///
    /// Empty when `channel` is not below the declared channel count.
    pub fn channel(&self, channel: u16) -> impl Iterator<Item = f64> + '_ {
        let frames = if channel < self.channels {
            self.frames()
        } else {
            0
        };
        self.samples
            .iter()
            .skip(channel as usize)
            .step_by(self.channels.max(1) as usize)
            .take(frames)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stereo_frames() {
        let asset = AudioAsset::new("s.wav", 2, 44100, vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(asset.frames(), 2);
        assert!(asset.is_well_formed());
        assert_eq!(asset.channel(0).collect::<Vec<_>>(), vec![0.1, 0.3]);
        assert_eq!(asset.channel(1).collect::<Vec<_>>(), vec![0.2, 0.4]);
    }

    #[test]
    fn test_out_of_range_channel_is_empty() {
        let stereo = AudioAsset::new("s.wav", 2, 44100, vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(stereo.channel(2).count(), 0);
        assert_eq!(stereo.channel(3).count(), 0);

        let mono = AudioAsset::mono("m.wav", 44100, vec![0.1, 0.2, 0.3]);
        assert_eq!(mono.channel(0).count(), 3);
        assert_eq!(mono.channel(1).count(), 0);

        let empty = AudioAsset::new("z.wav", 0, 44100, vec![0.5]);
        assert_eq!(empty.channel(0).count(), 0);
    }

    #[test]
    fn test_partial_frame_is_malformed() {
        let asset = AudioAsset::new("s.wav", 2, 44100, vec![0.1, 0.2, 0.3]);
        assert!(!asset.is_well_formed());
    }

    #[test]
    fn test_zero_channels_is_malformed() {
        let asset = AudioAsset::new("s.wav", 0, 44100, vec![]);
        assert!(!asset.is_well_formed());
        assert_eq!(asset.frames(), 0);
    }

    #[test]
    fn test_duration() {
        let asset = AudioAsset::mono("m.wav", 44100, vec![0.0; 22050]);
        assert_eq!(asset.duration(), 0.5);
    }

    #[test]
    fn test_empty_is_well_formed() {
        let asset = AudioAsset::mono("m.wav", 44100, Vec::new());
        assert!(asset.is_well_formed());
        assert_eq!(asset.frames(), 0);
    }
}
