//! `libfdk_aac` decoder plugin: the per-packet frame adapter loop.

use super::engine::{AacEngine, AacHandle, StreamInfo};
use super::session::DecoderSession;
use super::status::{EngineError, FrameStatus};
use crate::codec::buffer::alloc_samples;
use crate::codec::context::CodecContext;
use crate::codec::decoder::{DecodeError, Decoded, Decoder};
use crate::codec::descriptor::{Capabilities, CodecDescriptor, CodecId, MediaType};
use crate::codec::error::CodecError;
use crate::codec::frame::AudioFrame;
use crate::codec::packet::Packet;
use crate::pcm::{Format, SampleFormat};

/// Size of the stand-in output buffer used while the channel count is
/// unknown. Covers the largest frame the library emits.
pub const SCRATCH_BUFFER_BYTES: usize = 50 * 1024;

/// Samples per channel requested for a direct buffer before the frame size
/// is known.
pub const BOOTSTRAP_FRAME_SAMPLES: usize = 2048;

/// Registration record of the decoder.
pub static DESCRIPTOR: CodecDescriptor = CodecDescriptor {
    name: "libfdk_aac",
    long_name: "Fraunhofer FDK AAC",
    media_type: MediaType::Audio,
    codec_id: CodecId::Aac,
    capabilities: Capabilities::DR1,
    options: &[],
};

/// AAC decoder plugin backed by an external engine.
pub struct FdkAacDecoder<E: AacEngine> {
    engine: E,
    session: Option<DecoderSession<E::Handle>>,
}

impl<E: AacEngine> FdkAacDecoder<E> {
    pub fn new(engine: E) -> Self {
        Self { engine, session: None }
    }

    /// The open session, if `init` succeeded and `close` was not called.
    pub fn session(&self) -> Option<&DecoderSession<E::Handle>> {
        self.session.as_ref()
    }

    /// Stream parameters resolved so far.
    pub fn stream_info(&self) -> Option<&StreamInfo> {
        self.session.as_ref().and_then(|s| s.stream_info())
    }
}

impl<E: AacEngine> Decoder for FdkAacDecoder<E> {
    fn descriptor(&self) -> &'static CodecDescriptor {
        &DESCRIPTOR
    }

    fn init(&mut self, ctx: &mut CodecContext) -> Result<(), CodecError> {
        // Re-initialising replaces any previous session.
        self.session = None;
        let session = DecoderSession::open(&self.engine, ctx.extradata())?;
        self.session = Some(session);
        ctx.set_sample_format(SampleFormat::S16);
        Ok(())
    }

    fn decode(&mut self, ctx: &mut CodecContext, packet: &Packet) -> Result<Decoded, DecodeError> {
        let session = self.session.as_mut().ok_or(CodecError::Closed)?;

        let remaining = session.fill(packet.data())?;
        let consumed = packet.len() - remaining;

        // From here on the reservoir owns `consumed` bytes of the packet.
        decode_filled(session, ctx, packet)
            .map(|frame| Decoded { consumed, frame })
            .map_err(|error| DecodeError::new(consumed, error))
    }

    fn close(&mut self, _ctx: &mut CodecContext) -> Result<(), CodecError> {
        if let Some(mut session) = self.session.take() {
            session.close();
        }
        Ok(())
    }
}

fn decode_filled<H: AacHandle>(
    session: &mut DecoderSession<H>,
    ctx: &mut CodecContext,
    packet: &Packet,
) -> Result<Option<AudioFrame>, CodecError> {
    let mut output = OutputBuffer::select(ctx, session.stream_info())?;
    if session.decode_frame(output.samples_mut())? == FrameStatus::NeedMoreData {
        return Ok(None);
    }

    let info = match session.stream_info() {
        Some(info) => *info,
        None => {
            let info = session.resolve_stream_info()?;
            ctx.apply_stream_info(&info);
            info
        }
    };

    let frame = output.into_frame(ctx, &info)?.with_pts(packet.pts());
    Ok(Some(frame))
}

/// Where the library writes the next frame.
enum OutputBuffer {
    /// Host-allocated buffer, used once the channel count is known.
    Direct(Vec<i16>),
    /// Fixed-size stand-in, used while nothing about the stream is known.
    Scratch(Vec<i16>),
}

impl OutputBuffer {
    fn select(ctx: &mut CodecContext, resolved: Option<&StreamInfo>) -> Result<Self, CodecError> {
        let channels = ctx.channels();
        if channels == 0 {
            let len = SCRATCH_BUFFER_BYTES / SampleFormat::S16.bytes();
            return alloc_samples(len).map(OutputBuffer::Scratch);
        }

        let nb_samples = match resolved {
            Some(info) => info.frame_size as usize,
            None => BOOTSTRAP_FRAME_SAMPLES,
        };
        ctx.get_buffer(nb_samples, channels)
            .inspect_err(|err| tracing::error!("fdkaac: get_buffer failed: {}", err))
            .map(OutputBuffer::Direct)
    }

    fn samples_mut(&mut self) -> &mut [i16] {
        match self {
            OutputBuffer::Direct(buf) | OutputBuffer::Scratch(buf) => buf,
        }
    }

    /// Turns the decoded samples into a frame of exactly
    /// `num_channels * frame_size` samples.
    fn into_frame(self, ctx: &mut CodecContext, info: &StreamInfo) -> Result<AudioFrame, CodecError> {
        let channels = info.num_channels as usize;
        let frame_size = info.frame_size as usize;
        let len = channels * frame_size;
        let format = Format::new(info.sample_rate as u32, channels as u16);

        let samples = match self {
            OutputBuffer::Direct(mut buf) => {
                if buf.len() < len {
                    tracing::error!(have = buf.len(), need = len, "fdkaac: output buffer too small");
                    return Err(CodecError::Decode(EngineError::OutputBufferTooSmall));
                }
                buf.truncate(len);
                buf
            }
            OutputBuffer::Scratch(scratch) => {
                if scratch.len() < len {
                    tracing::error!(have = scratch.len(), need = len, "fdkaac: scratch buffer too small");
                    return Err(CodecError::Decode(EngineError::OutputBufferTooSmall));
                }
                let mut buf = ctx
                    .get_buffer(frame_size, channels)
                    .inspect_err(|err| tracing::error!("fdkaac: get_buffer failed: {}", err))?;
                if buf.len() < len {
                    return Err(CodecError::Allocation { bytes: len * SampleFormat::S16.bytes() });
                }
                buf.truncate(len);
                buf.copy_from_slice(&scratch[..len]);
                buf
            }
        };

        Ok(AudioFrame::new(samples, frame_size, format))
    }
}
