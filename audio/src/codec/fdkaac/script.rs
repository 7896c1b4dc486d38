//! Scripted engine for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::engine::{AacEngine, AacHandle, StreamInfo, Transport};
use super::status::EngineError;

pub(crate) fn stereo_info(sample_rate: i32, frame_size: i32) -> StreamInfo {
    StreamInfo {
        sample_rate,
        num_channels: 2,
        frame_size,
        aac_sample_rate: sample_rate,
        audio_object_type: 2,
        channel_config: 2,
        bit_rate: 128_000,
        aac_samples_per_frame: frame_size,
    }
}

enum Step {
    Frame(StreamInfo, Vec<i16>),
    Decoded,
    Error(EngineError),
}

/// What the engine answers, call by call. Unscripted fills take everything,
/// unscripted decodes report not enough bits.
pub(crate) struct Script {
    open_fails: bool,
    config_error: Option<EngineError>,
    fills: VecDeque<Result<usize, EngineError>>,
    steps: VecDeque<Step>,
    initial_info: Option<StreamInfo>,
}

impl Script {
    pub(crate) fn new() -> Self {
        Self {
            open_fails: false,
            config_error: None,
            fills: VecDeque::new(),
            steps: VecDeque::new(),
            initial_info: Some(StreamInfo::default()),
        }
    }

    pub(crate) fn fail_open(mut self) -> Self {
        self.open_fails = true;
        self
    }

    pub(crate) fn config_error(mut self, err: EngineError) -> Self {
        self.config_error = Some(err);
        self
    }

    pub(crate) fn fill(mut self, result: Result<usize, EngineError>) -> Self {
        self.fills.push_back(result);
        self
    }

    pub(crate) fn frame(mut self, info: StreamInfo, samples: Vec<i16>) -> Self {
        self.steps.push_back(Step::Frame(info, samples));
        self
    }

    /// A decode that succeeds without touching the output or stream info.
    pub(crate) fn decoded(mut self) -> Self {
        self.steps.push_back(Step::Decoded);
        self
    }

    pub(crate) fn error(mut self, err: EngineError) -> Self {
        self.steps.push_back(Step::Error(err));
        self
    }

    pub(crate) fn no_stream_info(mut self) -> Self {
        self.initial_info = None;
        self
    }
}

/// Everything the adapter asked the engine to do.
#[derive(Debug, Default)]
pub(crate) struct Calls {
    pub opened: Vec<Transport>,
    pub configs: Vec<Vec<u8>>,
    pub fills: Vec<Vec<u8>>,
    pub decode_capacities: Vec<usize>,
    pub closed: usize,
}

pub(crate) struct ScriptedEngine {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Calls>>,
}

impl ScriptedEngine {
    pub(crate) fn new(script: Script) -> (Self, Arc<Mutex<Calls>>) {
        let calls = Arc::new(Mutex::new(Calls::default()));
        let engine = Self {
            script: Arc::new(Mutex::new(script)),
            calls: calls.clone(),
        };
        (engine, calls)
    }
}

impl AacEngine for ScriptedEngine {
    type Handle = ScriptedHandle;

    fn open(&self, transport: Transport) -> Option<ScriptedHandle> {
        self.calls.lock().unwrap().opened.push(transport);
        let script = self.script.lock().unwrap();
        if script.open_fails {
            return None;
        }
        Some(ScriptedHandle {
            info: script.initial_info,
            script: self.script.clone(),
            calls: self.calls.clone(),
        })
    }
}

pub(crate) struct ScriptedHandle {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Calls>>,
    info: Option<StreamInfo>,
}

impl AacHandle for ScriptedHandle {
    fn config_raw(&mut self, config: &[u8]) -> Result<(), EngineError> {
        self.calls.lock().unwrap().configs.push(config.to_vec());
        match self.script.lock().unwrap().config_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fill(&mut self, data: &[u8]) -> Result<usize, EngineError> {
        self.calls.lock().unwrap().fills.push(data.to_vec());
        self.script.lock().unwrap().fills.pop_front().unwrap_or(Ok(0))
    }

    /// A frame step writes its samples and reports its info. The info is
    /// not checked against the sample count.
    fn decode_frame(&mut self, pcm: &mut [i16]) -> Result<(), EngineError> {
        self.calls.lock().unwrap().decode_capacities.push(pcm.len());
        match self.script.lock().unwrap().steps.pop_front() {
            Some(Step::Frame(info, samples)) => {
                if samples.len() > pcm.len() {
                    return Err(EngineError::OutputBufferTooSmall);
                }
                pcm[..samples.len()].copy_from_slice(&samples);
                self.info = Some(info);
                Ok(())
            }
            Some(Step::Decoded) => Ok(()),
            Some(Step::Error(err)) => Err(err),
            None => Err(EngineError::NotEnoughBits),
        }
    }

    fn stream_info(&self) -> Option<StreamInfo> {
        self.info
    }
}

impl Drop for ScriptedHandle {
    fn drop(&mut self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.closed += 1;
        }
    }
}
