//! AAC decoding through libfdk-aac, exposed as a codec plugin.
//!
//! This crate provides:
//!
//! - `codec`: the decoder plugin interface (context, packets, frames,
//!   buffer allocation, registration) and the `libfdk_aac` decoder adapter
//! - `pcm`: the 16-bit PCM format decoded frames are delivered in
//!
//! The adapter forwards compressed packets to the external library and
//! converts what comes back: decoded samples, stream parameters and errors.
//! The library itself is built and bound by the `fdk-aac` crate.
//!
//! # Example
//!
//! ```rust
//! use aacbridge_audio::codec::{CodecContext, Registry};
//!
//! let registry = Registry::with_defaults();
//! for desc in registry.descriptors() {
//!     println!("{}: {}", desc.name, desc.long_name);
//! }
//!
//! // Raw AAC needs its AudioSpecificConfig up front.
//! let ctx = CodecContext::new().with_extradata(vec![0x12, 0x10]);
//! assert_eq!(ctx.extradata().len(), 2);
//! ```

pub mod codec;
pub mod pcm;

pub use codec::{AudioFrame, CodecContext, CodecError, Decoder, Packet, Registry};
pub use pcm::Format;
