/// DC42 image container

use crate::checksum::{checksum, tag_checksum};
use crate::error::{Dc42Error, Result};
use crate::format::constants::HEADER_SIZE;
use crate::header::{patch_checksums, Dc42Header};
use std::path::Path;

/// Stored vs freshly computed checksums for both regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumReport {
    /// Checksum stored in the header for the data region
    pub stored_data: u32,
    /// Checksum computed over the data region
    pub computed_data: u32,
    /// Checksum stored in the header for the tag region
    pub stored_tag: u32,
    /// Checksum computed over the tag region
    pub computed_tag: u32,
}

impl ChecksumReport {
    /// Does the data region match its stored checksum?
    pub fn data_matches(&self) -> bool {
        self.stored_data == self.computed_data
    }

    /// Does the tag region match its stored checksum?
    pub fn tag_matches(&self) -> bool {
        self.stored_tag == self.computed_tag
    }

    /// Do both regions match their stored checksums?
    pub fn matches(&self) -> bool {
        self.data_matches() && self.tag_matches()
    }
}

/// In-memory DC42 container: the decoded header plus the full file bytes.
///
/// The whole container is staged in one buffer for the duration of a
/// workflow, so a repair can patch the two checksum fields in place and
/// rewrite the file without touching any other byte.
#[derive(Debug, Clone)]
pub struct Dc42Image {
    pub(crate) header: Dc42Header,
    pub(crate) bytes: Vec<u8>,
}

impl Dc42Image {
    /// Open a DC42 file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::io::reader::read_image(path)
    }

    /// Decode a DC42 container from a byte buffer.
    ///
    /// The buffer must hold at least the 84-byte header plus the data
    /// and tag regions the header declares; trailing bytes beyond that
    /// are carried along untouched.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let header = Dc42Header::decode(&bytes)?;
        let expected = header.total_size();
        if (bytes.len() as u64) < expected {
            return Err(Dc42Error::TruncatedImage {
                expected,
                actual: bytes.len() as u64,
            });
        }
        Ok(Self { header, bytes })
    }

    /// The decoded header
    pub fn header(&self) -> &Dc42Header {
        &self.header
    }

    /// The data region
    pub fn data(&self) -> &[u8] {
        &self.bytes[HEADER_SIZE..HEADER_SIZE + self.header.data_size as usize]
    }

    /// The tag region (empty when the header declares none)
    pub fn tags(&self) -> &[u8] {
        let start = HEADER_SIZE + self.header.data_size as usize;
        &self.bytes[start..start + self.header.tag_size as usize]
    }

    /// Raw bytes of the whole container
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Recompute both checksums and compare them with the stored values
    pub fn verify(&self) -> ChecksumReport {
        ChecksumReport {
            stored_data: self.header.data_checksum,
            computed_data: checksum(self.data()),
            stored_tag: self.header.tag_checksum,
            computed_tag: tag_checksum(self.tags()),
        }
    }

    /// Overwrite the two stored checksum fields with freshly computed
    /// values, leaving every other byte of the container untouched
    pub fn update_checksums(&mut self) {
        let data_checksum = checksum(self.data());
        let tag_checksum = tag_checksum(self.tags());
        patch_checksums(&mut self.bytes, data_checksum, tag_checksum);
        self.header.data_checksum = data_checksum;
        self.header.tag_checksum = tag_checksum;
    }

    /// Write the container back to disk from its staged buffer
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::io::writer::write_image(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::constants::{DATA_CHECKSUM_OFFSET, DC42_SIGNATURE};
    use crate::format::{DiskEncoding, DiskFormat};
    use crate::header::ImageName;

    fn build_container(data: &[u8], tags: &[u8]) -> Vec<u8> {
        let header = Dc42Header {
            name: ImageName::new("Test Disk"),
            data_size: data.len() as u32,
            tag_size: tags.len() as u32,
            data_checksum: checksum(data),
            tag_checksum: tag_checksum(tags),
            encoding: DiskEncoding::GcrSingleSided,
            format: DiskFormat::MacintoshLisa400K,
            signature: DC42_SIGNATURE,
        };
        let mut bytes = header.encode().to_vec();
        bytes.extend_from_slice(data);
        bytes.extend_from_slice(tags);
        bytes
    }

    #[test]
    fn test_regions() {
        let data = [0x11u8; 8];
        let tags = [0x22u8; 16];
        let image = Dc42Image::from_bytes(build_container(&data, &tags)).unwrap();

        assert_eq!(image.data(), &data);
        assert_eq!(image.tags(), &tags);
        assert_eq!(image.header().data_size, 8);
        assert_eq!(image.header().tag_size, 16);
    }

    #[test]
    fn test_verify_matching() {
        let image = Dc42Image::from_bytes(build_container(&[0x00, 0x01, 0x00, 0x02], &[])).unwrap();
        let report = image.verify();
        assert_eq!(report.computed_data, 0x4000_0001);
        assert!(report.matches());
    }

    #[test]
    fn test_verify_mismatch() {
        let mut bytes = build_container(&[0x00, 0x01, 0x00, 0x02], &[]);
        bytes[DATA_CHECKSUM_OFFSET] ^= 0xFF;
        let image = Dc42Image::from_bytes(bytes).unwrap();

        let report = image.verify();
        assert!(!report.data_matches());
        assert!(report.tag_matches());
        assert!(!report.matches());
    }

    #[test]
    fn test_update_checksums_is_partial_overwrite() {
        let mut bytes = build_container(&[0x00, 0x01, 0x00, 0x02], &[0x33; 14]);
        bytes[DATA_CHECKSUM_OFFSET] ^= 0xFF;
        let before = bytes.clone();

        let mut image = Dc42Image::from_bytes(bytes).unwrap();
        image.update_checksums();
        assert!(image.verify().matches());

        let after = image.as_bytes();
        assert_eq!(before.len(), after.len());
        for (offset, (a, b)) in before.iter().zip(after.iter()).enumerate() {
            if (DATA_CHECKSUM_OFFSET..DATA_CHECKSUM_OFFSET + 8).contains(&offset) {
                continue;
            }
            assert_eq!(a, b, "byte {:#06X} changed", offset);
        }
    }

    #[test]
    fn test_update_checksums_is_idempotent() {
        let mut image = Dc42Image::from_bytes(build_container(&[0xAB; 32], &[])).unwrap();
        image.update_checksums();
        let first = image.as_bytes().to_vec();
        image.update_checksums();
        assert_eq!(image.as_bytes(), first.as_slice());
    }

    #[test]
    fn test_truncated_regions_rejected() {
        let mut bytes = build_container(&[0x00; 16], &[]);
        bytes.truncate(bytes.len() - 4);
        let result = Dc42Image::from_bytes(bytes);
        assert!(matches!(
            result,
            Err(Dc42Error::TruncatedImage {
                expected: 100,
                actual: 96,
            })
        ));
    }

    #[test]
    fn test_trailing_bytes_preserved() {
        let mut bytes = build_container(&[0x00; 4], &[]);
        bytes.extend_from_slice(b"trailing");
        let image = Dc42Image::from_bytes(bytes.clone()).unwrap();
        assert_eq!(image.as_bytes(), bytes.as_slice());
    }
}
