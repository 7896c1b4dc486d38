//! Info command.

use std::fs::File;
use std::io::{BufReader, Read};

use clap::Args;
use serde::Serialize;

use super::{StreamArgs, get_preset, output};
use crate::Cli;

/// Decode until the first frame and print the stream parameters.
#[derive(Args)]
pub struct InfoCommand {
    /// Input ADTS file
    input: String,

    #[command(flatten)]
    stream: StreamArgs,
}

#[derive(Debug, Serialize)]
struct StreamReport {
    decoder: &'static str,
    transport: &'static str,
    sample_rate: u32,
    channels: usize,
    frame_size: usize,
    sample_format: &'static str,
    bytes_read: u64,
}

impl InfoCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let preset = get_preset(cli)?;
        let settings = self.stream.resolve(&preset)?;
        let mut stream = settings.open()?;

        let input = File::open(&self.input)
            .map_err(|e| anyhow::anyhow!("failed to open {}: {}", self.input, e))?;
        let mut reader = BufReader::new(input);
        let mut buf = vec![0u8; settings.chunk_size];
        let mut bytes_read = 0u64;

        while stream.frames() == 0 {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            bytes_read += n as u64;
            if let Err(err) = stream.push(&buf[..n], |_| {}) {
                if !err.is_recoverable() {
                    return Err(err.into());
                }
            }
        }
        if stream.frames() == 0 {
            stream.finish(|_| {})?;
        }

        let ctx = stream.context();
        if ctx.sample_rate() == 0 {
            anyhow::bail!("no decodable frame in {}", self.input);
        }

        let report = StreamReport {
            decoder: stream.descriptor().name,
            transport: "adts",
            sample_rate: ctx.sample_rate(),
            channels: ctx.channels(),
            frame_size: ctx.frame_size(),
            sample_format: "s16",
            bytes_read,
        };
        output(cli).write(&report)
    }
}
