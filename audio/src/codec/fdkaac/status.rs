//! Errors reported by libfdk-aac and their mapping onto codec errors.

use std::fmt;

use fdk_aac::dec::DecoderError;

use crate::codec::error::CodecError;

/// A failed library call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The bit reservoir does not hold a complete frame yet.
    NotEnoughBits,
    /// The transport layer lost frame synchronization.
    TransportSync,
    /// The output buffer cannot hold the decoded frame.
    OutputBufferTooSmall,
    /// Any other library error, by its message.
    Library(&'static str),
}

impl EngineError {
    /// Reports whether the decoder merely needs more input bits.
    pub fn is_not_enough_bits(&self) -> bool {
        *self == EngineError::NotEnoughBits
    }

    /// Maps the error of a decode call.
    ///
    /// Not enough bits is not a failure; every other error, known or not,
    /// becomes [`CodecError::Decode`].
    pub fn into_frame_status(self) -> Result<FrameStatus, CodecError> {
        if self.is_not_enough_bits() {
            Ok(FrameStatus::NeedMoreData)
        } else {
            Err(CodecError::Decode(self))
        }
    }
}

impl From<DecoderError> for EngineError {
    fn from(err: DecoderError) -> Self {
        match err {
            DecoderError::NOT_ENOUGH_BITS => EngineError::NotEnoughBits,
            DecoderError::TRANSPORT_SYNC_ERROR => EngineError::TransportSync,
            other => EngineError::Library(other.message()),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NotEnoughBits => f.write_str("not enough bits"),
            EngineError::TransportSync => f.write_str("transport sync error"),
            EngineError::OutputBufferTooSmall => f.write_str("output buffer too small"),
            EngineError::Library(message) => f.write_str(message),
        }
    }
}

/// Outcome of a decode call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// A frame was written to the output buffer.
    Decoded,
    /// The bit reservoir does not hold a complete frame yet.
    NeedMoreData,
}
