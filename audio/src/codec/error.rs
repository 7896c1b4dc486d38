use thiserror::Error;

use super::fdkaac::EngineError;

/// Errors returned by codec plugins.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("fdkaac: unable to open decoder")]
    OpenFailed,

    #[error("fdkaac: unable to set extradata: {0}")]
    Configuration(EngineError),

    #[error("fdkaac: fill failed: {0}")]
    Fill(EngineError),

    #[error("fdkaac: decode failed: {0}")]
    Decode(EngineError),

    #[error("fdkaac: unable to get stream info")]
    NotAvailable,

    #[error("fdkaac: stream info not initialized")]
    NotReady,

    #[error("codec: buffer allocation of {bytes} bytes failed")]
    Allocation { bytes: usize },

    #[error("codec: decoder is not open")]
    Closed,

    #[error("codec: decoder {0:?} not registered")]
    DecoderNotFound(String),

    #[error("codec: decoder {0:?} already registered")]
    AlreadyRegistered(String),
}

/// How a host framework should treat a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The packet was rejected. The session stays usable.
    InvalidData,
    /// Decoder setup failed. Initialization is aborted.
    Configuration,
    /// Stream parameters are not known yet. Retry with more data.
    NotReady,
    /// A buffer could not be obtained. Only the current call is aborted.
    OutOfMemory,
    /// The decoder is not in a state that accepts the call.
    InvalidState,
}

impl CodecError {
    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::Fill(_) | CodecError::Decode(_) => ErrorKind::InvalidData,
            CodecError::OpenFailed | CodecError::Configuration(_) => ErrorKind::Configuration,
            CodecError::NotAvailable | CodecError::NotReady => ErrorKind::NotReady,
            CodecError::Allocation { .. } => ErrorKind::OutOfMemory,
            CodecError::Closed
            | CodecError::DecoderNotFound(_)
            | CodecError::AlreadyRegistered(_) => ErrorKind::InvalidState,
        }
    }

    /// Reports whether the decoder can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidData | ErrorKind::NotReady | ErrorKind::OutOfMemory
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(CodecError::Fill(EngineError::Library("unknown error")).kind(), ErrorKind::InvalidData);
        assert_eq!(CodecError::Decode(EngineError::Library("crc error")).kind(), ErrorKind::InvalidData);
        assert_eq!(
            CodecError::Configuration(EngineError::Library("unsupported audio object type")).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(CodecError::OpenFailed.kind(), ErrorKind::Configuration);
        assert_eq!(CodecError::NotAvailable.kind(), ErrorKind::NotReady);
        assert_eq!(CodecError::NotReady.kind(), ErrorKind::NotReady);
        assert_eq!(CodecError::Allocation { bytes: 8 }.kind(), ErrorKind::OutOfMemory);
        assert_eq!(CodecError::Closed.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_recoverable() {
        assert!(CodecError::Decode(EngineError::TransportSync).is_recoverable());
        assert!(CodecError::NotReady.is_recoverable());
        assert!(!CodecError::Configuration(EngineError::Library("unknown error")).is_recoverable());
        assert!(!CodecError::Closed.is_recoverable());
    }

    #[test]
    fn test_display() {
        let err = CodecError::Fill(EngineError::TransportSync);
        assert_eq!(err.to_string(), "fdkaac: fill failed: transport sync error");

        let err = CodecError::Allocation { bytes: 51200 };
        assert!(err.to_string().contains("51200"));
    }
}
