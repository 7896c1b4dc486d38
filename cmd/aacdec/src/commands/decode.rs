//! Decode command.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use aacbridge_audio::codec::{AudioFrame, StreamDecoder};
use aacbridge_cli::{AudioFileFormat, AudioFileWriter, Preset};
use clap::Args;
use serde::Serialize;

use super::{StreamArgs, get_preset, output, print_success};
use crate::Cli;

/// Decode an AAC stream to interleaved s16le PCM or WAV.
///
/// The input is read in chunks and fed to the decoder as it arrives.
/// Packets the decoder rejects are logged and skipped.
#[derive(Args)]
pub struct DecodeCommand {
    /// Input ADTS file
    input: String,

    /// Output file
    #[arg(short = 'o', long)]
    output: String,

    /// Output format: pcm or wav (default: from preset or file extension)
    #[arg(long)]
    format: Option<String>,

    #[command(flatten)]
    stream: StreamArgs,
}

#[derive(Debug, Default, Serialize)]
struct DecodeSummary {
    input: String,
    output: String,
    format: &'static str,
    frames: u64,
    samples_per_channel: u64,
    sample_rate: u32,
    channels: u16,
    duration_ms: u64,
    data_bytes: u64,
    rejected_packets: u64,
}

impl DecodeCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let preset = get_preset(cli)?;
        let settings = self.stream.resolve(&preset)?;
        let format = self.output_format(&preset)?;

        let mut stream = settings.open()?;
        let input = File::open(&self.input)
            .map_err(|e| anyhow::anyhow!("failed to open {}: {}", self.input, e))?;
        let out = File::create(&self.output)
            .map_err(|e| anyhow::anyhow!("failed to create {}: {}", self.output, e))?;

        let mut sink = Sink {
            writer: AudioFileWriter::new(BufWriter::new(out), format),
            summary: DecodeSummary {
                input: self.input.clone(),
                output: self.output.clone(),
                format: format.extension(),
                ..Default::default()
            },
        };

        let mut reader = BufReader::new(input);
        let mut buf = vec![0u8; settings.chunk_size];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            sink.push(&mut stream, &buf[..n])?;
        }

        sink.finish(&mut stream)?;

        let data_bytes = sink.writer.data_bytes();
        sink.writer.finish()?;

        let mut summary = sink.summary;
        summary.data_bytes = data_bytes;
        if summary.sample_rate > 0 {
            summary.duration_ms = summary.samples_per_channel * 1000 / summary.sample_rate as u64;
        }
        print_success(&format!(
            "Decoded {} frames to {}",
            summary.frames, summary.output
        ));
        output(cli).write(&summary)
    }

    fn output_format(&self, preset: &Preset) -> anyhow::Result<AudioFileFormat> {
        if let Some(name) = self.format.as_deref() {
            return AudioFileFormat::from_name(name)
                .ok_or_else(|| anyhow::anyhow!("unsupported output format '{}'", name));
        }
        if let Some(format) = preset.output_format()? {
            return Ok(format);
        }

        // Unknown extensions fall back to raw PCM.
        Ok(Path::new(&self.output)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(AudioFileFormat::from_name)
            .unwrap_or(AudioFileFormat::Pcm))
    }
}

struct Sink {
    writer: AudioFileWriter<BufWriter<File>>,
    summary: DecodeSummary,
}

impl Sink {
    fn push(&mut self, stream: &mut StreamDecoder, data: &[u8]) -> anyhow::Result<()> {
        let mut frames = Vec::new();
        match stream.push(data, |frame| frames.push(frame)) {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => {
                self.summary.rejected_packets += 1;
            }
            Err(err) => return Err(err.into()),
        }
        self.write_all(frames)
    }

    /// Drains the frames still held by the decoder.
    fn finish(&mut self, stream: &mut StreamDecoder) -> anyhow::Result<()> {
        let mut frames = Vec::new();
        match stream.finish(|frame| frames.push(frame)) {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => {
                self.summary.rejected_packets += 1;
            }
            Err(err) => return Err(err.into()),
        }
        self.write_all(frames)
    }

    fn write_all(&mut self, frames: Vec<AudioFrame>) -> anyhow::Result<()> {
        for frame in frames {
            self.writer
                .write_frame(frame.sample_rate(), frame.channels(), &frame.to_le_bytes())?;

            let s = &mut self.summary;
            s.frames += 1;
            s.samples_per_channel += frame.nb_samples() as u64;
            s.sample_rate = frame.sample_rate();
            s.channels = frame.channels();
        }
        Ok(())
    }
}
