//! Codec plugin interface and decoder implementations.
//!
//! The host side of the interface:
//!
//! - [`Decoder`]: init / decode one packet / close
//! - [`CodecContext`]: extradata, negotiated stream parameters, and the
//!   [`BufferAllocator`] frames are obtained from
//! - [`Packet`] and [`AudioFrame`]: compressed input and 16-bit PCM output
//! - [`CodecDescriptor`] and [`Registry`]: registration and lookup
//! - [`StreamDecoder`]: drives a decoder with an unframed byte stream
//!
//! Implementations:
//!
//! - `fdkaac`: AAC through the Fraunhofer FDK AAC library

mod buffer;
mod context;
mod decoder;
mod descriptor;
mod error;
mod frame;
mod packet;
mod registry;
mod stream;

pub mod fdkaac;

pub use buffer::{BufferAllocator, DefaultAllocator, LimitedAllocator};
pub use context::CodecContext;
pub use decoder::{DecodeError, Decoded, Decoder};
pub use descriptor::{Capabilities, CodecDescriptor, CodecId, CodecOption, MediaType};
pub use error::{CodecError, ErrorKind};
pub use frame::AudioFrame;
pub use packet::Packet;
pub use registry::{DecoderFactory, Registry};
pub use stream::StreamDecoder;
