//! CLI commands module.

mod codecs;
mod config;
mod decode;
mod info;
mod util;

pub use codecs::CodecsCommand;
pub use config::ConfigCommand;
pub use decode::DecodeCommand;
pub use info::InfoCommand;

pub(crate) use util::*;
