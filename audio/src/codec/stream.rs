//! Feeding an unframed byte stream through a decoder.

use super::context::CodecContext;
use super::decoder::Decoder;
use super::descriptor::CodecDescriptor;
use super::error::CodecError;
use super::frame::AudioFrame;
use super::packet::Packet;

/// Drives a [`Decoder`] with arbitrarily sized chunks of input.
///
/// Each call to [`push`](Self::push) keeps decoding until the decoder asks
/// for more data, re-sending whatever part of the input the decoder did not
/// take. When the decoder rejects a packet the error is returned and only
/// the bytes it took are dropped; the stream stays usable for recoverable
/// errors.
pub struct StreamDecoder {
    decoder: Box<dyn Decoder>,
    ctx: CodecContext,
    pending: Vec<u8>,
    frames: u64,
}

impl StreamDecoder {
    /// Initializes `decoder` with `ctx`.
    pub fn open(mut decoder: Box<dyn Decoder>, mut ctx: CodecContext) -> Result<Self, CodecError> {
        decoder.init(&mut ctx)?;
        Ok(Self {
            decoder,
            ctx,
            pending: Vec::new(),
            frames: 0,
        })
    }

    pub fn descriptor(&self) -> &'static CodecDescriptor {
        self.decoder.descriptor()
    }

    /// Codec context, holding the negotiated stream parameters.
    pub fn context(&self) -> &CodecContext {
        &self.ctx
    }

    /// Bytes waiting to be re-sent.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of frames produced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Feeds `data` and passes every frame that becomes available to
    /// `on_frame`.
    pub fn push<F>(&mut self, data: &[u8], on_frame: F) -> Result<(), CodecError>
    where
        F: FnMut(AudioFrame),
    {
        self.pending.extend_from_slice(data);
        self.drain(on_frame)
    }

    /// Decodes the frames still buffered inside the decoder at end of input,
    /// then closes it.
    pub fn finish<F>(&mut self, on_frame: F) -> Result<(), CodecError>
    where
        F: FnMut(AudioFrame),
    {
        let drained = self.drain(on_frame);
        let closed = self.decoder.close(&mut self.ctx);
        drained.and(closed)
    }

    fn drain<F>(&mut self, mut on_frame: F) -> Result<(), CodecError>
    where
        F: FnMut(AudioFrame),
    {
        loop {
            let packet = Packet::from(&self.pending[..]);
            let decoded = match self.decoder.decode(&mut self.ctx, &packet) {
                Ok(decoded) => decoded,
                Err(err) => {
                    // The decoder keeps the bytes it took; the rest is re-sent
                    // with the next push.
                    let consumed = err.consumed.min(self.pending.len());
                    tracing::warn!(
                        consumed,
                        pending = self.pending.len() - consumed,
                        "stream: packet rejected: {}",
                        err
                    );
                    self.pending.drain(..consumed);
                    return Err(err.error);
                }
            };

            let consumed = decoded.consumed.min(self.pending.len());
            self.pending.drain(..consumed);

            match decoded.frame {
                Some(frame) => {
                    self.frames += 1;
                    on_frame(frame);
                }
                None => return Ok(()),
            }
        }
    }
}
