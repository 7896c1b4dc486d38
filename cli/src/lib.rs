//! CLI utilities for aacbridge.
//!
//! This crate provides the pieces shared by the command-line tools: decode
//! presets stored as YAML, structured output, and PCM/WAV file writing.

pub mod config;
pub mod output;
pub mod wav;

pub use config::{Config, Preset, load_config};
pub use output::{Output, OutputFormat};
pub use wav::{AudioFileFormat, AudioFileWriter};
