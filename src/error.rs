use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("{samples} samples cannot be split into frames of {channels} channels")]
    FrameMismatch { samples: usize, channels: u16 },

    #[error("{channels} channels is not supported; PCM WAVE output holds at most 2")]
    UnsupportedChannels { channels: u16 },
}

pub type Result<T> = std::result::Result<T, Error>;
