//! Writing decoded 16-bit PCM to raw or WAV files.

use std::io::{self, Seek, SeekFrom, Write};

const RIFF_MAGIC: &[u8; 4] = b"RIFF";
const WAVE_MAGIC: &[u8; 4] = b"WAVE";
const FMT_CHUNK: &[u8; 4] = b"fmt ";
const DATA_CHUNK: &[u8; 4] = b"data";

const FORMAT_TAG_PCM: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
/// Bytes from the start of the file to the first sample.
const HEADER_LEN: u64 = 44;

/// Container written around the samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFileFormat {
    /// Headerless interleaved s16le.
    #[default]
    Pcm,
    /// RIFF/WAVE, 16-bit integer PCM.
    Wav,
}

impl AudioFileFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pcm" | "raw" | "s16le" => Some(AudioFileFormat::Pcm),
            "wav" | "wave" => Some(AudioFileFormat::Wav),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            AudioFileFormat::Pcm => "pcm",
            AudioFileFormat::Wav => "wav",
        }
    }
}

/// Writes frames of interleaved s16le samples.
///
/// For WAV the header is written with the first frame, since the stream
/// parameters are only known once decoding has started, and the chunk
/// sizes are patched in [`finish`](Self::finish).
pub struct AudioFileWriter<W: Write + Seek> {
    inner: W,
    format: AudioFileFormat,
    stream: Option<(u32, u16)>,
    data_bytes: u64,
}

impl<W: Write + Seek> AudioFileWriter<W> {
    pub fn new(inner: W, format: AudioFileFormat) -> Self {
        Self {
            inner,
            format,
            stream: None,
            data_bytes: 0,
        }
    }

    /// Bytes of sample data written so far.
    pub fn data_bytes(&self) -> u64 {
        self.data_bytes
    }

    /// Appends one frame. All frames must share sample rate and channel count.
    pub fn write_frame(&mut self, sample_rate: u32, channels: u16, pcm: &[u8]) -> io::Result<()> {
        match self.stream {
            None => {
                if self.format == AudioFileFormat::Wav {
                    self.write_header(sample_rate, channels)?;
                }
                self.stream = Some((sample_rate, channels));
            }
            Some(stream) if stream != (sample_rate, channels) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "wav: stream changed from {} Hz/{} ch to {} Hz/{} ch",
                        stream.0, stream.1, sample_rate, channels
                    ),
                ));
            }
            Some(_) => {}
        }

        self.inner.write_all(pcm)?;
        self.data_bytes += pcm.len() as u64;
        Ok(())
    }

    /// Fixes up the WAV chunk sizes and returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.format == AudioFileFormat::Wav && self.stream.is_some() {
            let data_len = u32::try_from(self.data_bytes)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "wav: data exceeds 4 GiB"))?;
            let riff_len = data_len.saturating_add((HEADER_LEN - 8) as u32);

            self.inner.seek(SeekFrom::Start(4))?;
            self.inner.write_all(&riff_len.to_le_bytes())?;
            self.inner.seek(SeekFrom::Start(HEADER_LEN - 4))?;
            self.inner.write_all(&data_len.to_le_bytes())?;
            self.inner.seek(SeekFrom::End(0))?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn write_header(&mut self, sample_rate: u32, channels: u16) -> io::Result<()> {
        let block_align = channels * (BITS_PER_SAMPLE / 8);
        let byte_rate = sample_rate * block_align as u32;

        let w = &mut self.inner;
        w.write_all(RIFF_MAGIC)?;
        w.write_all(&0u32.to_le_bytes())?;
        w.write_all(WAVE_MAGIC)?;

        w.write_all(FMT_CHUNK)?;
        w.write_all(&16u32.to_le_bytes())?;
        w.write_all(&FORMAT_TAG_PCM.to_le_bytes())?;
        w.write_all(&channels.to_le_bytes())?;
        w.write_all(&sample_rate.to_le_bytes())?;
        w.write_all(&byte_rate.to_le_bytes())?;
        w.write_all(&block_align.to_le_bytes())?;
        w.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

        w.write_all(DATA_CHUNK)?;
        w.write_all(&0u32.to_le_bytes())?;
        Ok(())
    }
}
