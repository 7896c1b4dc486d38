//! Boundary between the adapter and the external AAC decoder library.
//!
//! The adapter never decodes audio itself. Everything it needs from the
//! library goes through [`AacEngine`] (create a decoder instance) and
//! [`AacHandle`] (drive one instance). The native implementation lives in
//! `native.rs`; tests drive the adapter with scripted engines.

use super::status::EngineError;

/// Transport framing of the compressed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Raw access units; framing comes from side-band configuration.
    Raw,
    /// Self-framed ADTS stream.
    Adts,
}

impl Transport {
    /// Picks the transport for a stream: raw when side-band configuration is
    /// available, self-framed ADTS otherwise.
    pub fn for_extradata(extradata: &[u8]) -> Self {
        if extradata.is_empty() {
            Transport::Adts
        } else {
            Transport::Raw
        }
    }
}

/// Stream parameters reported by the library (`CStreamInfo`).
///
/// Only `sample_rate`, `num_channels` and `frame_size` drive the adapter; the
/// rest is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamInfo {
    /// Output sample rate, including SBR upsampling.
    pub sample_rate: i32,
    /// Number of output channels.
    pub num_channels: i32,
    /// Output samples per channel per frame.
    pub frame_size: i32,
    /// Sample rate of the core AAC stream.
    pub aac_sample_rate: i32,
    /// MPEG-4 audio object type.
    pub audio_object_type: i32,
    /// Channel configuration signalled in the stream.
    pub channel_config: i32,
    /// Instantaneous bit rate.
    pub bit_rate: i32,
    /// Core samples per frame (1024, 960, 512 or 480).
    pub aac_samples_per_frame: i32,
}

impl StreamInfo {
    /// Reports whether the library has locked onto valid stream parameters.
    ///
    /// Stricter than the library's own rule, which only looks at
    /// `sample_rate`: the channel count and frame size size every output
    /// buffer, so a zero in either is treated as not ready too.
    pub fn is_initialized(&self) -> bool {
        self.sample_rate > 0 && self.num_channels > 0 && self.frame_size > 0
    }
}

/// Creates decoder instances.
pub trait AacEngine: Send {
    /// Decoder instance type.
    type Handle: AacHandle;

    /// Opens a decoder for the given transport. Returns `None` when the
    /// library cannot allocate an instance.
    fn open(&self, transport: Transport) -> Option<Self::Handle>;
}

/// One open decoder instance. Dropping the handle closes it.
pub trait AacHandle: Send {
    /// Pushes side-band configuration (an AudioSpecificConfig record).
    fn config_raw(&mut self, config: &[u8]) -> Result<(), EngineError>;

    /// Copies compressed bytes into the bit reservoir.
    ///
    /// Returns the number of trailing bytes the reservoir could not take.
    fn fill(&mut self, data: &[u8]) -> Result<usize, EngineError>;

    /// Decodes one frame of interleaved 16-bit samples into `pcm`.
    fn decode_frame(&mut self, pcm: &mut [i16]) -> Result<(), EngineError>;

    /// Returns the current stream parameters, if the library has any.
    fn stream_info(&self) -> Option<StreamInfo>;
}
