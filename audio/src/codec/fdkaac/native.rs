//! libfdk-aac backed engine.

use fdk_aac::dec;

use super::engine::{AacEngine, AacHandle, StreamInfo, Transport};
use super::status::EngineError;

/// Opens decoder instances of libfdk-aac.
#[derive(Debug, Clone, Copy, Default)]
pub struct FdkEngine;

impl AacEngine for FdkEngine {
    type Handle = FdkHandle;

    fn open(&self, transport: Transport) -> Option<FdkHandle> {
        let transport = match transport {
            Transport::Raw => dec::Transport::Raw,
            Transport::Adts => dec::Transport::Adts,
        };
        Some(FdkHandle {
            decoder: dec::Decoder::new(transport),
        })
    }
}

/// An open libfdk-aac decoder instance. Dropping it closes the library handle.
pub struct FdkHandle {
    decoder: dec::Decoder,
}

// Safety: The handle is owned by exactly one session and never shared.
unsafe impl Send for FdkHandle {}

impl AacHandle for FdkHandle {
    fn config_raw(&mut self, config: &[u8]) -> Result<(), EngineError> {
        self.decoder.config_raw(config).map_err(EngineError::from)
    }

    fn fill(&mut self, data: &[u8]) -> Result<usize, EngineError> {
        let consumed = self.decoder.fill(data).map_err(EngineError::from)?;
        Ok(data.len().saturating_sub(consumed))
    }

    fn decode_frame(&mut self, pcm: &mut [i16]) -> Result<(), EngineError> {
        self.decoder.decode_frame(pcm).map_err(EngineError::from)
    }

    fn stream_info(&self) -> Option<StreamInfo> {
        let info = self.decoder.stream_info();
        Some(StreamInfo {
            sample_rate: info.sampleRate as i32,
            num_channels: info.numChannels as i32,
            frame_size: info.frameSize as i32,
            aac_sample_rate: info.aacSampleRate as i32,
            audio_object_type: info.aot as i32,
            channel_config: info.channelConfig as i32,
            bit_rate: info.bitRate as i32,
            aac_samples_per_frame: info.aacSamplesPerFrame as i32,
        })
    }
}
