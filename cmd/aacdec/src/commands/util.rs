//! Utility functions for CLI commands.

use aacbridge_audio::codec::{CodecContext, CodecId, Registry, StreamDecoder};
use aacbridge_cli::{Config, Output, OutputFormat, Preset, load_config};
use clap::Args;

use crate::Cli;

const APP_NAME: &str = "aacdec";

/// Bytes read from the input per push when neither flag nor preset set one.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Gets the global configuration.
pub fn get_config(cli: &Cli) -> anyhow::Result<Config> {
    load_config(APP_NAME, cli.config.as_deref())
}

/// Gets the preset to use: the one named with -p, else the current one,
/// else an empty preset.
pub fn get_preset(cli: &Cli) -> anyhow::Result<Preset> {
    let cfg = get_config(cli)?;
    Ok(cfg.resolve_preset(cli.preset.as_deref())?.cloned().unwrap_or_default())
}

/// Structured output to stdout in the format selected by --json.
pub fn output(cli: &Cli) -> Output {
    Output::new(OutputFormat::from_json_flag(cli.json), None)
}

pub fn print_success(msg: &str) {
    eprintln!("✓ {}", msg);
}

/// Stream parameters shared by commands that decode.
///
/// Input is read in arbitrary chunks, so it must carry its own framing:
/// only ADTS is accepted. Raw access units need a container that delimits
/// them, which aacdec does not parse.
#[derive(Args, Debug, Clone, Default)]
pub struct StreamArgs {
    /// Channel count, when known ahead of decoding
    #[arg(long)]
    pub channels: Option<usize>,

    /// Bytes read from the input per decode call
    #[arg(long)]
    pub chunk_size: Option<usize>,
}

/// Stream parameters after applying flags over the preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSettings {
    pub channels: usize,
    pub chunk_size: usize,
}

impl StreamArgs {
    pub fn resolve(&self, preset: &Preset) -> anyhow::Result<StreamSettings> {
        let chunk_size = self
            .chunk_size
            .or(Some(preset.chunk_size).filter(|&n| n > 0))
            .unwrap_or(DEFAULT_CHUNK_SIZE);
        if chunk_size == 0 {
            anyhow::bail!("chunk size must be positive");
        }

        Ok(StreamSettings {
            channels: self.channels.unwrap_or(preset.channels),
            chunk_size,
        })
    }
}

impl StreamSettings {
    /// Instantiates the registered AAC decoder for an ADTS stream.
    pub fn open(&self) -> anyhow::Result<StreamDecoder> {
        let registry = Registry::with_defaults();
        let decoder = registry.find_decoder_by_id(CodecId::Aac)?;

        let mut ctx = CodecContext::new();
        if self.channels > 0 {
            ctx = ctx.with_channels(self.channels);
        }

        tracing::debug!(
            decoder = decoder.descriptor().name,
            channels = self.channels,
            "opening decoder"
        );
        Ok(StreamDecoder::open(decoder, ctx)?)
    }
}
