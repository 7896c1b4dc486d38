//! Decoded audio frames.

use crate::pcm::{self, Format};

/// One decoded frame of interleaved signed 16-bit samples.
///
/// The sample buffer holds exactly `nb_samples * channels` samples, i.e.
/// `2 * channels * nb_samples` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFrame {
    samples: Vec<i16>,
    nb_samples: usize,
    format: Format,
    pts: Option<i64>,
}

impl AudioFrame {
    /// Wraps a populated sample buffer.
    ///
    /// `samples` must hold `nb_samples * format.channels` values.
    pub fn new(samples: Vec<i16>, nb_samples: usize, format: Format) -> Self {
        debug_assert_eq!(samples.len(), nb_samples * format.channels as usize);
        Self {
            samples,
            nb_samples,
            format,
            pts: None,
        }
    }

    pub(crate) fn with_pts(mut self, pts: Option<i64>) -> Self {
        self.pts = pts;
        self
    }

    /// Samples per channel.
    pub fn nb_samples(&self) -> usize {
        self.nb_samples
    }

    pub fn channels(&self) -> u16 {
        self.format.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Presentation timestamp copied from the packet that completed the frame.
    pub fn pts(&self) -> Option<i64> {
        self.pts
    }

    /// Interleaved samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Size of the sample data in bytes.
    pub fn byte_len(&self) -> usize {
        self.format.bytes_for(self.nb_samples)
    }

    /// Returns the samples as little-endian bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        pcm::samples_to_le_bytes(&self.samples)
    }
}
