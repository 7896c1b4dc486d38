//! Decoder session: handle lifecycle and stream info resolution.

use super::engine::{AacEngine, AacHandle, StreamInfo, Transport};
use super::status::FrameStatus;
use crate::codec::error::CodecError;

/// Whether the session has locked onto stream parameters yet.
///
/// Moves from `Unresolved` to `Resolved` once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Unresolved,
    Resolved(StreamInfo),
}

/// One open decoder instance of the external library.
///
/// A session is `Send` but is never shared: each stream gets its own.
pub struct DecoderSession<H: AacHandle> {
    handle: Option<H>,
    transport: Transport,
    state: StreamState,
}

impl<H: AacHandle> DecoderSession<H> {
    /// Opens a session and pushes side-band configuration.
    ///
    /// Non-empty `extradata` selects raw mode and empty extradata selects
    /// ADTS. Extradata is pushed before any audio data; if the library
    /// rejects it the handle is closed and [`CodecError::Configuration`] is
    /// returned.
    pub fn open<E>(engine: &E, extradata: &[u8]) -> Result<Self, CodecError>
    where
        E: AacEngine<Handle = H>,
    {
        let transport = Transport::for_extradata(extradata);
        tracing::debug!(?transport, extradata_len = extradata.len(), "fdkaac: opening decoder");

        let handle = engine.open(transport).ok_or(CodecError::OpenFailed)?;
        let mut session = Self {
            handle: Some(handle),
            transport,
            state: StreamState::Unresolved,
        };

        if !extradata.is_empty() {
            if let Err(err) = session.handle_mut()?.config_raw(extradata) {
                tracing::warn!("fdkaac: unable to set extradata: {}", err);
                session.close();
                return Err(CodecError::Configuration(err));
            }
        }

        Ok(session)
    }

    /// Releases the library handle. Calling it again is a no-op.
    pub fn close(&mut self) {
        if self.handle.take().is_some() {
            tracing::debug!("fdkaac: decoder closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    /// The resolved stream parameters, if any.
    pub fn stream_info(&self) -> Option<&StreamInfo> {
        match &self.state {
            StreamState::Resolved(info) => Some(info),
            StreamState::Unresolved => None,
        }
    }

    /// Pushes compressed bytes into the bit reservoir and returns how many
    /// trailing bytes were not taken.
    pub fn fill(&mut self, data: &[u8]) -> Result<usize, CodecError> {
        match self.handle_mut()?.fill(data) {
            Ok(remaining) => Ok(remaining.min(data.len())),
            Err(err) => {
                tracing::error!("fdkaac: fill failed: {}", err);
                Err(CodecError::Fill(err))
            }
        }
    }

    /// Decodes one frame into `pcm`.
    pub fn decode_frame(&mut self, pcm: &mut [i16]) -> Result<FrameStatus, CodecError> {
        match self.handle_mut()?.decode_frame(pcm) {
            Ok(()) => Ok(FrameStatus::Decoded),
            Err(err) => err.into_frame_status().inspect_err(|_| {
                tracing::error!("fdkaac: decode failed: {}", err);
            }),
        }
    }

    /// Queries the library for stream parameters.
    ///
    /// Once a query succeeds the result is cached and returned unchanged by
    /// every later call.
    pub fn resolve_stream_info(&mut self) -> Result<StreamInfo, CodecError> {
        if let StreamState::Resolved(info) = self.state {
            return Ok(info);
        }

        let Some(info) = self.handle_ref()?.stream_info() else {
            tracing::error!("fdkaac: unable to get stream info");
            return Err(CodecError::NotAvailable);
        };
        if !info.is_initialized() {
            tracing::error!(
                sample_rate = info.sample_rate,
                channels = info.num_channels,
                frame_size = info.frame_size,
                "fdkaac: stream info not initialized"
            );
            return Err(CodecError::NotReady);
        }

        tracing::debug!(
            sample_rate = info.sample_rate,
            channels = info.num_channels,
            frame_size = info.frame_size,
            aot = info.audio_object_type,
            "fdkaac: stream info resolved"
        );
        self.state = StreamState::Resolved(info);
        Ok(info)
    }

    fn handle_mut(&mut self) -> Result<&mut H, CodecError> {
        self.handle.as_mut().ok_or(CodecError::Closed)
    }

    fn handle_ref(&self) -> Result<&H, CodecError> {
        self.handle.as_ref().ok_or(CodecError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::fdkaac::script::{Script, ScriptedEngine, stereo_info};
    use crate::codec::fdkaac::EngineError;

    #[test]
    fn test_open_without_extradata_selects_adts() {
        let (engine, calls) = ScriptedEngine::new(Script::new());
        let session = DecoderSession::open(&engine, &[]).unwrap();

        assert!(session.is_open());
        assert_eq!(session.transport(), Transport::Adts);
        let calls = calls.lock().unwrap();
        assert_eq!(calls.opened, vec![Transport::Adts]);
        assert!(calls.configs.is_empty());
    }

    #[test]
    fn test_open_with_extradata_selects_raw_and_configures() {
        let (engine, calls) = ScriptedEngine::new(Script::new());
        let session = DecoderSession::open(&engine, &[0x12, 0x10]).unwrap();

        assert_eq!(session.transport(), Transport::Raw);
        let calls = calls.lock().unwrap();
        assert_eq!(calls.opened, vec![Transport::Raw]);
        assert_eq!(calls.configs, vec![vec![0x12, 0x10]]);
        assert!(calls.fills.is_empty());
    }

    #[test]
    fn test_config_rejected_closes_handle() {
        let script = Script::new().config_error(EngineError::Library("unsupported audio object type"));
        let (engine, calls) = ScriptedEngine::new(script);

        let err = DecoderSession::open(&engine, &[0xf8]).err().unwrap();
        assert!(matches!(err, CodecError::Configuration(EngineError::Library(_))));
        assert_eq!(calls.lock().unwrap().closed, 1);
    }

    #[test]
    fn test_open_failure() {
        let (engine, calls) = ScriptedEngine::new(Script::new().fail_open());
        let err = DecoderSession::open(&engine, &[]).err().unwrap();
        assert!(matches!(err, CodecError::OpenFailed));
        assert_eq!(calls.lock().unwrap().closed, 0);
    }

    #[test]
    fn test_close_is_idempotent() {
        let (engine, calls) = ScriptedEngine::new(Script::new());
        let mut session = DecoderSession::open(&engine, &[]).unwrap();

        session.close();
        session.close();
        assert!(!session.is_open());
        assert_eq!(calls.lock().unwrap().closed, 1);

        drop(session);
        assert_eq!(calls.lock().unwrap().closed, 1);
    }

    #[test]
    fn test_drop_closes_handle() {
        let (engine, calls) = ScriptedEngine::new(Script::new());
        let session = DecoderSession::open(&engine, &[]).unwrap();
        drop(session);
        assert_eq!(calls.lock().unwrap().closed, 1);
    }

    #[test]
    fn test_calls_after_close() {
        let (engine, _calls) = ScriptedEngine::new(Script::new());
        let mut session = DecoderSession::open(&engine, &[]).unwrap();
        session.close();

        assert!(matches!(session.fill(&[1]), Err(CodecError::Closed)));
        assert!(matches!(session.decode_frame(&mut [0; 4]), Err(CodecError::Closed)));
        assert!(matches!(session.resolve_stream_info(), Err(CodecError::Closed)));
    }

    #[test]
    fn test_fill_remaining() {
        let script = Script::new().fill(Ok(3));
        let (engine, _calls) = ScriptedEngine::new(script);
        let mut session = DecoderSession::open(&engine, &[]).unwrap();

        assert_eq!(session.fill(&[0; 10]).unwrap(), 3);
    }

    #[test]
    fn test_fill_remaining_is_clamped() {
        let script = Script::new().fill(Ok(100));
        let (engine, _calls) = ScriptedEngine::new(script);
        let mut session = DecoderSession::open(&engine, &[]).unwrap();

        assert_eq!(session.fill(&[0; 10]).unwrap(), 10);
    }

    #[test]
    fn test_fill_rejected() {
        let script = Script::new().fill(Err(EngineError::Library("invalid handle")));
        let (engine, _calls) = ScriptedEngine::new(script);
        let mut session = DecoderSession::open(&engine, &[]).unwrap();

        let err = session.fill(&[0; 10]).unwrap_err();
        assert!(matches!(err, CodecError::Fill(EngineError::Library("invalid handle"))));
    }

    #[test]
    fn test_resolve_not_available() {
        let (engine, _calls) = ScriptedEngine::new(Script::new().no_stream_info());
        let mut session = DecoderSession::open(&engine, &[]).unwrap();

        assert!(matches!(session.resolve_stream_info(), Err(CodecError::NotAvailable)));
        assert_eq!(session.state(), StreamState::Unresolved);
    }

    #[test]
    fn test_resolve_not_ready() {
        let (engine, _calls) = ScriptedEngine::new(Script::new());
        let mut session = DecoderSession::open(&engine, &[]).unwrap();

        assert!(matches!(session.resolve_stream_info(), Err(CodecError::NotReady)));
        assert!(session.stream_info().is_none());
    }

    #[test]
    fn test_resolve_is_stable() {
        let script = Script::new().frame(stereo_info(44100, 1024), vec![1; 2048]).frame(
            stereo_info(22050, 2048),
            vec![2; 4096],
        );
        let (engine, _calls) = ScriptedEngine::new(script);
        let mut session = DecoderSession::open(&engine, &[]).unwrap();

        let mut pcm = vec![0i16; 8192];
        assert_eq!(session.decode_frame(&mut pcm).unwrap(), FrameStatus::Decoded);
        let first = session.resolve_stream_info().unwrap();
        assert_eq!(first.sample_rate, 44100);

        // The library now reports different parameters; the session keeps the
        // snapshot it resolved first.
        assert_eq!(session.decode_frame(&mut pcm).unwrap(), FrameStatus::Decoded);
        let second = session.resolve_stream_info().unwrap();
        assert_eq!(first, second);
        assert_eq!(session.state(), StreamState::Resolved(first));
    }
}
