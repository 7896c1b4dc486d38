//! Codec registration records.

use serde::Serialize;

/// Kind of media a codec handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Audio,
}

/// Compressed format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecId {
    Aac,
}

/// Capability flags advertised by a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities(u32);

impl Capabilities {
    pub const NONE: Self = Self(0);
    /// Output buffers come from the host allocator (direct rendering).
    pub const DR1: Self = Self(1 << 1);

    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Names of the set flags.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::DR1) {
            names.push("dr1");
        }
        names
    }
}

/// A user-settable codec option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOption {
    pub name: &'static str,
    pub help: &'static str,
    pub default: &'static str,
}

/// Static description of a codec implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecDescriptor {
    /// Short unique name used for lookup.
    pub name: &'static str,
    /// Human readable name.
    pub long_name: &'static str,
    pub media_type: MediaType,
    pub codec_id: CodecId,
    pub capabilities: Capabilities,
    pub options: &'static [CodecOption],
}
