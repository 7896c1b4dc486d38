//! Output buffer acquisition (the host's `get_buffer` callback).

use super::error::CodecError;
use crate::pcm::SampleFormat;

/// Supplies sample buffers for decoded frames.
pub trait BufferAllocator: Send {
    /// Returns a zeroed buffer of `nb_samples * channels` interleaved samples.
    fn get_buffer(&mut self, nb_samples: usize, channels: usize) -> Result<Vec<i16>, CodecError>;
}

/// Allocates from the heap, reporting failure instead of aborting.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAllocator;

impl BufferAllocator for DefaultAllocator {
    fn get_buffer(&mut self, nb_samples: usize, channels: usize) -> Result<Vec<i16>, CodecError> {
        alloc_samples(nb_samples.saturating_mul(channels))
    }
}

/// Refuses buffers larger than a fixed number of bytes.
#[derive(Debug, Clone, Copy)]
pub struct LimitedAllocator {
    max_bytes: usize,
}

impl LimitedAllocator {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }
}

impl BufferAllocator for LimitedAllocator {
    fn get_buffer(&mut self, nb_samples: usize, channels: usize) -> Result<Vec<i16>, CodecError> {
        let len = nb_samples.saturating_mul(channels);
        let bytes = len.saturating_mul(SampleFormat::S16.bytes());
        if bytes > self.max_bytes {
            return Err(CodecError::Allocation { bytes });
        }
        alloc_samples(len)
    }
}

/// Allocates `len` zeroed samples with a fallible reservation.
pub(crate) fn alloc_samples(len: usize) -> Result<Vec<i16>, CodecError> {
    let bytes = len.saturating_mul(SampleFormat::S16.bytes());
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| CodecError::Allocation { bytes })?;
    buf.resize(len, 0);
    Ok(buf)
}
