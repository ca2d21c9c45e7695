use thiserror::Error;

/// Result type alias for DC42 operations
pub type Result<T> = std::result::Result<T, Dc42Error>;

/// Errors that can occur when working with DC42 image files
#[derive(Debug, Error)]
pub enum Dc42Error {
    /// I/O error occurred while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is shorter than the fixed 84-byte header
    #[error("Truncated header: got {len} bytes, need 84")]
    TruncatedHeader {
        /// Number of bytes actually available
        len: usize,
    },

    /// Signature bytes at offset 0x52 are not 0x01 0x00
    #[error("Not a DC42 disk image: signature bytes {found:02X?}, expected [01, 00]")]
    NotDc42Image {
        /// The two bytes found at the signature offset
        found: [u8; 2],
    },

    /// File is shorter than the regions its header declares
    #[error("Truncated image: header declares {expected} bytes, file has {actual}")]
    TruncatedImage {
        /// Total size the header describes (header + data + tags)
        expected: u64,
        /// Actual file size
        actual: u64,
    },

    /// Could not reserve the staging buffer for a whole-file operation
    #[error("Could not allocate {bytes} bytes for the image buffer")]
    Allocation {
        /// Requested buffer size
        bytes: usize,
    },

    /// Source volume failed its signature check on the creation path
    #[error("Unrecognized source volume: signature {found:04X} at offset {offset:#05X}, expected {expected:04X}")]
    UnrecognizedSource {
        /// Offset of the signature within the raw image
        offset: usize,
        /// Signature value the source layout requires
        expected: u16,
        /// Signature value actually present
        found: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_header_display() {
        let err = Dc42Error::TruncatedHeader { len: 12 };
        assert_eq!(err.to_string(), "Truncated header: got 12 bytes, need 84");
    }

    #[test]
    fn test_not_dc42_display() {
        let err = Dc42Error::NotDc42Image { found: [0x4D, 0x56] };
        assert_eq!(
            err.to_string(),
            "Not a DC42 disk image: signature bytes [4D, 56], expected [01, 00]"
        );
    }

    #[test]
    fn test_unrecognized_source_display() {
        let err = Dc42Error::UnrecognizedSource {
            offset: 0x400,
            expected: 0x4244,
            found: 0x0000,
        };
        assert_eq!(
            err.to_string(),
            "Unrecognized source volume: signature 0000 at offset 0x400, expected 4244"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Dc42Error::from(io);
        assert!(matches!(err, Dc42Error::Io(_)));
    }
}
