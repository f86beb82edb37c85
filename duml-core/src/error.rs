//! Error types for duml-core

/// Result type alias for duml operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core codec errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Buffer is shorter than the minimum frame
    #[error("Buffer too small: expected at least {expected} bytes, got {actual} bytes")]
    TooSmall {
        expected: usize,
        actual: usize,
    },

    /// First byte is not the frame magic
    #[error("Unexpected magic identifier: 0x{0:02X}")]
    BadMagic(u8),

    /// Declared length runs past the end of the buffer
    #[error("Packet length {declared} larger than provided buffer ({actual} bytes)")]
    LengthExceedsBuffer {
        declared: usize,
        actual: usize,
    },

    /// Declared length cannot describe a well-formed frame
    #[error("Packet length {declared} out of range ({min}..={max})")]
    LengthOutOfRange {
        declared: usize,
        min: usize,
        max: usize,
    },

    /// Payload does not fit in the 10-bit length field
    #[error("Payload too large: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge {
        size: usize,
        max: usize,
    },

    /// Caller tried to swap the serialized buffer out from under the fields
    #[error("Cannot directly modify the raw buffer, either modify members or create new packet from a buffer")]
    ImmutableRawBuffer,

    /// Hex input could not be turned into bytes
    #[error("Malformed hex input: {0}")]
    MalformedHex(#[from] hex::FromHexError),
}

impl Error {
    /// Check if the input bytes do not form a frame at all
    pub fn is_framing_error(&self) -> bool {
        matches!(
            self,
            Self::TooSmall { .. }
                | Self::BadMagic(_)
                | Self::LengthExceedsBuffer { .. }
                | Self::LengthOutOfRange { .. }
        )
    }

    /// Check if the error came from caller-supplied input rather than API misuse
    pub fn is_input_error(&self) -> bool {
        self.is_framing_error() || matches!(self, Self::MalformedHex(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framing_classification() {
        assert!(Error::TooSmall { expected: 13, actual: 3 }.is_framing_error());
        assert!(Error::BadMagic(0x56).is_framing_error());
        assert!(!Error::ImmutableRawBuffer.is_framing_error());
        assert!(!Error::PayloadTooLarge { size: 2000, max: 1010 }.is_input_error());
    }

    #[test]
    fn test_malformed_hex_is_input_error() {
        let err = Error::from(hex::FromHexError::OddLength);
        assert!(err.is_input_error());
        assert!(!err.is_framing_error());
    }

    #[test]
    fn test_immutable_raw_message() {
        assert_eq!(
            Error::ImmutableRawBuffer.to_string(),
            "Cannot directly modify the raw buffer, either modify members or create new packet from a buffer"
        );
    }
}
