//! Per-stream codec context shared between the host and a decoder plugin.

use std::fmt;

use super::buffer::{BufferAllocator, DefaultAllocator};
use super::error::CodecError;
use super::fdkaac::StreamInfo;
use crate::pcm::{Format, SampleFormat};

/// Stream parameters and host services for one decoder instance.
///
/// The host fills in extradata (and optionally a channel count hint) before
/// `init`; the decoder publishes the negotiated parameters back here.
pub struct CodecContext {
    extradata: Vec<u8>,
    channels: usize,
    sample_rate: u32,
    frame_size: usize,
    sample_format: Option<SampleFormat>,
    allocator: Box<dyn BufferAllocator>,
}

impl CodecContext {
    /// Creates an empty context using [`DefaultAllocator`].
    pub fn new() -> Self {
        Self {
            extradata: Vec::new(),
            channels: 0,
            sample_rate: 0,
            frame_size: 0,
            sample_format: None,
            allocator: Box::new(DefaultAllocator),
        }
    }

    /// Sets side-band codec configuration (e.g. an AudioSpecificConfig).
    pub fn with_extradata(mut self, extradata: Vec<u8>) -> Self {
        self.extradata = extradata;
        self
    }

    /// Sets the channel count announced by the container, if any.
    pub fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }

    /// Replaces the buffer allocator.
    pub fn with_allocator(mut self, allocator: Box<dyn BufferAllocator>) -> Self {
        self.allocator = allocator;
        self
    }

    pub fn extradata(&self) -> &[u8] {
        &self.extradata
    }

    /// Channel count, 0 while unknown.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Sample rate in Hz, 0 while unknown.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Samples per channel per frame, 0 while unknown.
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Output sample format, set by the decoder on init.
    pub fn sample_format(&self) -> Option<SampleFormat> {
        self.sample_format
    }

    /// PCM format once both sample rate and channel count are known.
    pub fn format(&self) -> Option<Format> {
        if self.sample_rate == 0 || self.channels == 0 {
            return None;
        }
        Some(Format::new(self.sample_rate, self.channels as u16))
    }

    /// Requests an output buffer from the host allocator.
    pub fn get_buffer(&mut self, nb_samples: usize, channels: usize) -> Result<Vec<i16>, CodecError> {
        self.allocator.get_buffer(nb_samples, channels)
    }

    pub(crate) fn set_sample_format(&mut self, format: SampleFormat) {
        self.sample_format = Some(format);
    }

    pub(crate) fn apply_stream_info(&mut self, info: &StreamInfo) {
        self.channels = info.num_channels as usize;
        self.sample_rate = info.sample_rate as u32;
        self.frame_size = info.frame_size as usize;
    }
}

impl Default for CodecContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CodecContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecContext")
            .field("extradata_len", &self.extradata.len())
            .field("channels", &self.channels)
            .field("sample_rate", &self.sample_rate)
            .field("frame_size", &self.frame_size)
            .field("sample_format", &self.sample_format)
            .finish_non_exhaustive()
    }
}
