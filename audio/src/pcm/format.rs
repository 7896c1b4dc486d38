//! PCM layout of decoded audio.

/// Sample encoding of decoded frames.
///
/// The FDK decoder always produces interleaved signed 16-bit samples, so this
/// is the only variant. It exists so the codec context can advertise the
/// format the way a host framework expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleFormat {
    /// Signed 16-bit, native endian in memory, little-endian when serialized.
    #[default]
    S16,
}

impl SampleFormat {
    /// Returns the number of bytes per sample.
    pub const fn bytes(&self) -> usize {
        match self {
            SampleFormat::S16 => 2,
        }
    }
}

/// Describes interleaved 16-bit PCM audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
}

impl Format {
    /// Creates a new format.
    pub const fn new(sample_rate: u32, channels: u16) -> Self {
        Self { sample_rate, channels }
    }

    /// Returns the number of bytes per sample frame (one sample per channel).
    pub fn sample_bytes(&self) -> usize {
        SampleFormat::S16.bytes() * self.channels as usize
    }

    /// Returns the number of bytes needed for `nb_samples` samples per channel.
    pub fn bytes_for(&self, nb_samples: usize) -> usize {
        self.sample_bytes() * nb_samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_format() {
        assert_eq!(SampleFormat::S16.bytes(), 2);
        assert_eq!(SampleFormat::default(), SampleFormat::S16);
    }

    #[test]
    fn test_format_sample_bytes() {
        assert_eq!(Format::new(48000, 1).sample_bytes(), 2);
        assert_eq!(Format::new(48000, 2).sample_bytes(), 4);
        assert_eq!(Format::new(48000, 6).sample_bytes(), 12);
    }

    #[test]
    fn test_bytes_for() {
        // 1024 samples of stereo s16 = 4096 bytes
        assert_eq!(Format::new(44100, 2).bytes_for(1024), 4096);
    }
}
