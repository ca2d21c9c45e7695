/// Wrapping raw sector dumps into DC42 containers

use crate::checksum::checksum;
use crate::error::{Dc42Error, Result};
use crate::format::constants::DC42_SIGNATURE;
use crate::format::{encoding_for_size, DiskEncoding, DiskFormat};
use crate::header::{Dc42Header, ImageName};
use std::path::{Path, PathBuf};

/// Suffix appended to the embedded volume name for the output file
pub const OUTPUT_SUFFIX: &str = "-dc42.img";

/// Fixed-offset probe describing where a source volume keeps its
/// signature and volume name within a raw sector dump.
///
/// Kept as a value rather than hardcoded offsets so further source
/// layouts can be added without touching the creation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLayout {
    /// Offset of the 2-byte big-endian volume signature
    pub signature_offset: usize,
    /// Signature value a matching volume carries
    pub signature: u16,
    /// Offset of the embedded volume name
    pub name_offset: usize,
    /// Maximum name bytes taken from the source
    pub name_max: usize,
}

impl SourceLayout {
    /// HFS volume layout: the Master Directory Block sits at byte 0x400
    /// with signature 0x4244, and the volume name field starts at 0x425
    /// with at most 27 bytes.
    pub const fn hfs_volume() -> Self {
        Self {
            signature_offset: 0x400,
            signature: 0x4244,
            name_offset: 0x425,
            name_max: 27,
        }
    }

    /// Check the source signature, failing with
    /// [`Dc42Error::UnrecognizedSource`] on any mismatch
    pub fn check_signature(&self, raw: &[u8]) -> Result<()> {
        let found = match raw.get(self.signature_offset..self.signature_offset + 2) {
            Some(bytes) => u16::from_be_bytes([bytes[0], bytes[1]]),
            None => 0,
        };
        if found != self.signature {
            return Err(Dc42Error::UnrecognizedSource {
                offset: self.signature_offset,
                expected: self.signature,
                found,
            });
        }
        Ok(())
    }

    /// Extract the embedded volume name, bounded by the first NUL byte,
    /// the layout's maximum, and the end of the buffer
    pub fn volume_name(&self, raw: &[u8]) -> ImageName {
        let start = self.name_offset.min(raw.len());
        let end = (self.name_offset + self.name_max).min(raw.len());
        let field = &raw[start..end];
        let len = field.iter().position(|&b| b == 0).unwrap_or(field.len());
        ImageName::from_bytes(&field[..len])
    }
}

/// A creation plan: the synthesized header plus derived output details
#[derive(Debug, Clone)]
pub struct ImagePlan {
    /// Header to be written ahead of the raw payload
    pub header: Dc42Header,
    /// Whether the raw size mapped to a known encoding/format pair
    pub size_recognized: bool,
    /// Output file name derived from the embedded volume name
    pub output_name: String,
}

/// Build a creation plan for a raw, untagged sector dump.
///
/// Validates the source signature, extracts the embedded volume name,
/// infers encoding and format from the raw length, and computes the
/// data checksum over the whole payload. An unrecognized length is not
/// an error: encoding and format stay at byte 0 and the plan is flagged
/// so the caller can warn.
pub fn plan_image(raw: &[u8], layout: &SourceLayout) -> Result<ImagePlan> {
    layout.check_signature(raw)?;
    let name = layout.volume_name(raw);

    let (encoding, format, size_recognized) = match encoding_for_size(raw.len() as u64) {
        Some((encoding, format)) => (encoding, format, true),
        None => (DiskEncoding::from(0x00), DiskFormat::from(0x00), false),
    };

    let output_name = format!("{}{}", name, OUTPUT_SUFFIX);
    let header = Dc42Header {
        name,
        data_size: raw.len() as u32,
        tag_size: 0,
        data_checksum: checksum(raw),
        tag_checksum: 0,
        encoding,
        format,
        signature: DC42_SIGNATURE,
    };

    Ok(ImagePlan {
        header,
        size_recognized,
        output_name,
    })
}

/// Wrap a raw sector dump into a new DC42 container.
///
/// Reads the dump, plans the header, and writes
/// `<volume-name>-dc42.img` under `output_dir`. Returns the plan and
/// the path of the file written.
pub fn wrap_file<P, Q>(input: P, layout: &SourceLayout, output_dir: Q) -> Result<(ImagePlan, PathBuf)>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let raw = crate::io::reader::read_raw(input)?;
    let plan = plan_image(&raw, layout)?;
    let output = output_dir.as_ref().join(&plan.output_name);
    crate::io::writer::write_new_image(&plan.header, &raw, &output)?;
    Ok((plan, output))
}
