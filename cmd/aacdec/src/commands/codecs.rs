//! Codecs command.

use aacbridge_audio::codec::{CodecId, MediaType, Registry};
use clap::Args;
use serde::Serialize;

use super::output;
use crate::Cli;

/// List the decoders compiled into this binary.
#[derive(Args)]
pub struct CodecsCommand {}

#[derive(Debug, Serialize)]
struct CodecEntry {
    name: &'static str,
    long_name: &'static str,
    media_type: MediaType,
    codec_id: CodecId,
    capabilities: Vec<&'static str>,
}

impl CodecsCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let registry = Registry::with_defaults();
        let entries: Vec<CodecEntry> = registry
            .descriptors()
            .map(|d| CodecEntry {
                name: d.name,
                long_name: d.long_name,
                media_type: d.media_type,
                codec_id: d.codec_id,
                capabilities: d.capabilities.names(),
            })
            .collect();
        output(cli).write(&entries)
    }
}
