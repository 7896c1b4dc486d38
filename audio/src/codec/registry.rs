//! Decoder lookup by name or codec id.

use std::fmt;

use super::decoder::Decoder;
use super::descriptor::{CodecDescriptor, CodecId};
use super::error::CodecError;

/// Builds a fresh decoder instance.
pub type DecoderFactory = Box<dyn Fn() -> Box<dyn Decoder> + Send + Sync>;

struct Entry {
    descriptor: &'static CodecDescriptor,
    factory: DecoderFactory,
}

/// Registered decoder implementations.
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Creates a registry holding the decoders of this crate: `libfdk_aac`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.entries.push(Entry {
            descriptor: &super::fdkaac::DESCRIPTOR,
            factory: Box::new(|| -> Box<dyn Decoder> {
                Box::new(super::fdkaac::FdkAacDecoder::new(super::fdkaac::FdkEngine))
            }),
        });
        registry
    }

    /// Adds a decoder. Names must be unique.
    pub fn register<F>(&mut self, descriptor: &'static CodecDescriptor, factory: F) -> Result<(), CodecError>
    where
        F: Fn() -> Box<dyn Decoder> + Send + Sync + 'static,
    {
        if self.descriptor(descriptor.name).is_some() {
            return Err(CodecError::AlreadyRegistered(descriptor.name.to_string()));
        }
        self.entries.push(Entry {
            descriptor,
            factory: Box::new(factory),
        });
        Ok(())
    }

    /// Returns the descriptor registered under `name`.
    pub fn descriptor(&self, name: &str) -> Option<&'static CodecDescriptor> {
        self.entries
            .iter()
            .find(|e| e.descriptor.name == name)
            .map(|e| e.descriptor)
    }

    /// Instantiates the decoder registered under `name`.
    pub fn find_decoder(&self, name: &str) -> Result<Box<dyn Decoder>, CodecError> {
        self.entries
            .iter()
            .find(|e| e.descriptor.name == name)
            .map(|e| (e.factory)())
            .ok_or_else(|| CodecError::DecoderNotFound(name.to_string()))
    }

    /// Instantiates the first decoder registered for `id`.
    pub fn find_decoder_by_id(&self, id: CodecId) -> Result<Box<dyn Decoder>, CodecError> {
        self.entries
            .iter()
            .find(|e| e.descriptor.codec_id == id)
            .map(|e| (e.factory)())
            .ok_or_else(|| CodecError::DecoderNotFound(format!("{:?}", id).to_lowercase()))
    }

    /// Registered descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static CodecDescriptor> + '_ {
        self.entries.iter().map(|e| e.descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.descriptor.name))
            .finish()
    }
}
