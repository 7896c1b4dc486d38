//! Decoder plugin interface.

use thiserror::Error;

use super::context::CodecContext;
use super::descriptor::CodecDescriptor;
use super::error::{CodecError, ErrorKind};
use super::frame::AudioFrame;
use super::packet::Packet;

/// Result of feeding one packet to a decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Bytes of the packet the decoder took. The caller re-sends the rest.
    pub consumed: usize,
    /// The produced frame, or `None` when the decoder needs more data.
    pub frame: Option<AudioFrame>,
}

/// A packet the decoder failed on.
///
/// The library may already hold part of the packet in its bit reservoir when
/// a later step fails. Those `consumed` bytes must not be sent again.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct DecodeError {
    pub consumed: usize,
    #[source]
    pub error: CodecError,
}

impl DecodeError {
    pub fn new(consumed: usize, error: CodecError) -> Self {
        Self { consumed, error }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    pub fn is_recoverable(&self) -> bool {
        self.error.is_recoverable()
    }
}

/// Nothing of the packet was taken.
impl From<CodecError> for DecodeError {
    fn from(error: CodecError) -> Self {
        Self::new(0, error)
    }
}

/// A decoder plugin driven by the host, one packet per call.
///
/// Calls on one instance are serialized by the host; independent streams use
/// independent instances.
pub trait Decoder: Send {
    /// Registration record of the implementation.
    fn descriptor(&self) -> &'static CodecDescriptor;

    /// Prepares the decoder using the context's extradata and hints.
    fn init(&mut self, ctx: &mut CodecContext) -> Result<(), CodecError>;

    /// Feeds one packet and returns at most one frame.
    fn decode(&mut self, ctx: &mut CodecContext, packet: &Packet) -> Result<Decoded, DecodeError>;

    /// Releases decoder resources. Safe to call more than once.
    fn close(&mut self, ctx: &mut CodecContext) -> Result<(), CodecError>;
}
