//! PCM (Pulse Code Modulation) audio format handling.
//!
//! Decoded AAC is always interleaved signed 16-bit PCM. [`Format`] carries the
//! sample rate and channel count negotiated with the decoder and does the
//! byte arithmetic that buffer sizing relies on.

mod format;

pub use format::{Format, SampleFormat};

/// Converts interleaved samples to little-endian bytes.
pub fn samples_to_le_bytes(samples: &[i16]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}
