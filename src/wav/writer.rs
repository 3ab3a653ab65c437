//! Serializes assets into WAVE files.

use super::{quantize, wav_spec};
use crate::asset::AudioAsset;
use crate::error::{Error, Result};
use hound::WavWriter;
use std::fs;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Largest channel count that still gets the plain 44-byte PCM header.
const MAX_CHANNELS: u16 = 2;

fn check_frames(asset: &AudioAsset) -> Result<()> {
    if !asset.is_well_formed() {
        return Err(Error::FrameMismatch {
            samples: asset.samples.len(),
            channels: asset.channels,
        });
    }
    if asset.channels > MAX_CHANNELS {
        return Err(Error::UnsupportedChannels {
            channels: asset.channels,
        });
    }
    Ok(())
}

fn write_samples<W: Write + Seek>(mut writer: WavWriter<W>, samples: &[f64]) -> Result<()> {
    for &sample in samples {
        writer.write_sample(quantize(sample))?;
    }
    // Patches the RIFF and data lengths into the header and flushes
    writer.finalize()?;
    Ok(())
}

/// Encodes `asset` into any seekable sink.
///
/// # Examples
///
/// ```
/// use signal_fixtures::{AudioAsset, wav};
/// use std::io::Cursor;
///
/// let asset = AudioAsset::mono("blip.wav", 8000, vec![0.0, 0.5, -0.5]);
/// let mut buffer = Cursor::new(Vec::new());
/// wav::encode(&asset, &mut buffer).unwrap();
///
/// let bytes = buffer.into_inner();
/// assert_eq!(&bytes[0..4], b"RIFF");
/// assert_eq!(&bytes[8..12], b"WAVE");
/// ```
pub fn encode<W: Write + Seek>(asset: &AudioAsset, sink: W) -> Result<()> {
    check_frames(asset)?;
    let writer = WavWriter::new(sink, wav_spec(asset.channels, asset.sample_rate))?;
    write_samples(writer, &asset.samples)
}

/// Writes `asset` to `dir/asset.file_name` and returns the full path.
///
/// Creates `dir` and its parents if needed and replaces an existing file of
/// the same name. The file is finalized and closed before this returns, on
/// both success and error.
pub fn write_asset(asset: &AudioAsset, dir: &Path) -> Result<PathBuf> {
    check_frames(asset)?;
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(&asset.file_name);
    debug!(
        "Writing {} ({} samples, {} Hz)",
        path.display(),
        asset.samples.len(),
        asset.sample_rate
    );
    let writer = WavWriter::create(&path, wav_spec(asset.channels, asset.sample_rate))?;
    write_samples(writer, &asset.samples)?;
    Ok(path)
}
