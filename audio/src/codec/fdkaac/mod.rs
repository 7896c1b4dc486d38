//! AAC decoding through the Fraunhofer FDK AAC library.
//!
//! This module does not decode AAC itself. It adapts the library's decoder
//! API to the [`Decoder`](crate::codec::Decoder) plugin interface:
//!
//! - [`DecoderSession`] opens the library handle, picks the transport
//!   (raw when extradata is present, ADTS otherwise), pushes the side-band
//!   configuration and resolves stream parameters once.
//! - [`FdkAacDecoder`] runs the per-packet loop: fill the bit reservoir,
//!   decode into a host buffer (or a scratch buffer while the channel count
//!   is unknown), and hand back one 16-bit PCM frame.
//! - [`EngineError`] classifies the library's errors and maps them to
//!   [`CodecError`](crate::codec::CodecError).
//!
//! [`FdkEngine`] drives the library through the `fdk-aac` crate.
//!
//! # Example
//!
//! ```ignore
//! use aacbridge_audio::codec::{CodecContext, Decoder, Packet};
//! use aacbridge_audio::codec::fdkaac::{FdkAacDecoder, FdkEngine};
//!
//! let mut ctx = CodecContext::new();
//! let mut decoder = FdkAacDecoder::new(FdkEngine);
//! decoder.init(&mut ctx)?;
//!
//! let decoded = decoder.decode(&mut ctx, &Packet::new(adts_bytes))?;
//! if let Some(frame) = decoded.frame {
//!     println!("{} samples at {} Hz", frame.nb_samples(), frame.sample_rate());
//! }
//! ```

mod decoder;
mod engine;
mod native;
mod session;
mod status;

#[cfg(test)]
pub(crate) mod script;

pub use decoder::*;
pub use engine::*;
pub use native::{FdkEngine, FdkHandle};
pub use session::*;
pub use status::*;
