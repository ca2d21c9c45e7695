/// DC42 header parsing and serialization

use crate::error::{Dc42Error, Result};
use crate::format::constants::*;
use crate::format::{DiskEncoding, DiskFormat};
use std::fmt;

/// Bounds-checked image name, at most 63 bytes.
///
/// The on-disk field is a 1-byte length followed by a fixed 63-byte
/// payload; names are stored as raw bytes because old images are not
/// guaranteed to hold valid UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageName {
    bytes: Vec<u8>,
}

impl ImageName {
    /// Create a name from a string, truncating at 63 bytes
    pub fn new(name: &str) -> Self {
        Self::from_bytes(name.as_bytes())
    }

    /// Create a name from raw bytes, truncating at 63 bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len().min(NAME_MAX);
        Self {
            bytes: bytes[..len].to_vec(),
        }
    }

    /// Length of the name in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Is the name empty?
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw bytes of the name
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

/// Parsed DC42 container header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dc42Header {
    /// Stored image name
    pub name: ImageName,
    /// Size of the data region in bytes
    pub data_size: u32,
    /// Size of the tag region in bytes (0 when absent)
    pub tag_size: u32,
    /// Stored checksum of the data region
    pub data_checksum: u32,
    /// Stored checksum of the tag region
    pub tag_checksum: u32,
    /// Physical sector encoding
    pub encoding: DiskEncoding,
    /// Logical volume format
    pub format: DiskFormat,
    /// Container signature, canonically 0x0100
    pub signature: u16,
}

impl Dc42Header {
    /// Decode the fixed 84-byte header from the start of a container.
    ///
    /// Fails with [`Dc42Error::TruncatedHeader`] when fewer than 84 bytes
    /// are available and with [`Dc42Error::NotDc42Image`] when the
    /// signature bytes at offset 0x52 are not 0x01 0x00; callers must not
    /// proceed to checksum work after either failure. A name length byte
    /// above 63 is clamped to 63.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(Dc42Error::TruncatedHeader { len: bytes.len() });
        }

        let signature = [bytes[SIGNATURE_OFFSET], bytes[SIGNATURE_OFFSET + 1]];
        if signature != DC42_SIGNATURE.to_be_bytes() {
            return Err(Dc42Error::NotDc42Image { found: signature });
        }

        let name_len = (bytes[NAME_LENGTH_OFFSET] as usize).min(NAME_MAX);
        let name = ImageName::from_bytes(&bytes[NAME_OFFSET..NAME_OFFSET + name_len]);

        Ok(Self {
            name,
            data_size: read_u32(bytes, DATA_SIZE_OFFSET),
            tag_size: read_u32(bytes, TAG_SIZE_OFFSET),
            data_checksum: read_u32(bytes, DATA_CHECKSUM_OFFSET),
            tag_checksum: read_u32(bytes, TAG_CHECKSUM_OFFSET),
            encoding: DiskEncoding::from(bytes[ENCODING_OFFSET]),
            format: DiskFormat::from(bytes[FORMAT_OFFSET]),
            signature: u16::from_be_bytes(signature),
        })
    }

    /// Serialize to the fixed 84-byte big-endian layout, the exact
    /// inverse of [`Dc42Header::decode`]
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];

        buf[NAME_LENGTH_OFFSET] = self.name.len() as u8;
        buf[NAME_OFFSET..NAME_OFFSET + self.name.len()].copy_from_slice(self.name.as_bytes());

        write_u32(&mut buf, DATA_SIZE_OFFSET, self.data_size);
        write_u32(&mut buf, TAG_SIZE_OFFSET, self.tag_size);
        write_u32(&mut buf, DATA_CHECKSUM_OFFSET, self.data_checksum);
        write_u32(&mut buf, TAG_CHECKSUM_OFFSET, self.tag_checksum);

        buf[ENCODING_OFFSET] = self.encoding.code();
        buf[FORMAT_OFFSET] = self.format.code();
        buf[SIGNATURE_OFFSET..SIGNATURE_OFFSET + 2].copy_from_slice(&self.signature.to_be_bytes());

        buf
    }

    /// Total container size the header describes (header + data + tags)
    pub fn total_size(&self) -> u64 {
        HEADER_SIZE as u64 + self.data_size as u64 + self.tag_size as u64
    }
}

/// Overwrite only the two stored checksum fields in a container buffer.
///
/// Writes exactly 8 bytes at the fixed checksum offsets and leaves every
/// other byte of the buffer untouched, which is the contract the repair
/// path relies on.
pub fn patch_checksums(buf: &mut [u8], data_checksum: u32, tag_checksum: u32) {
    write_u32(buf, DATA_CHECKSUM_OFFSET, data_checksum);
    write_u32(buf, TAG_CHECKSUM_OFFSET, tag_checksum);
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn write_u32(bytes: &mut [u8], offset: usize, value: u32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}
