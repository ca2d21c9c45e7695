/// DC42 format enumerations and constants

/// Format constants
pub mod constants;

pub use constants::*;

/// Physical sector encoding of the imaged disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskEncoding {
    /// GCR single-sided double density (400K)
    GcrSingleSided,
    /// GCR double-sided double density (800K)
    GcrDoubleSided,
    /// MFM double-sided double density (720K)
    MfmDoubleSided,
    /// MFM double-sided high density (1440K)
    MfmHighDensity,
    /// Any other encoding byte, passed through unchanged
    Unknown(u8),
}

impl DiskEncoding {
    /// Get the on-disk byte value for this encoding
    pub fn code(&self) -> u8 {
        match self {
            DiskEncoding::GcrSingleSided => 0x00,
            DiskEncoding::GcrDoubleSided => 0x01,
            DiskEncoding::MfmDoubleSided => 0x02,
            DiskEncoding::MfmHighDensity => 0x03,
            DiskEncoding::Unknown(code) => *code,
        }
    }

    /// Get a human-readable name for this encoding
    pub fn name(&self) -> &'static str {
        match self {
            DiskEncoding::GcrSingleSided => "GCR single-sided double density 400K",
            DiskEncoding::GcrDoubleSided => "GCR double-sided double density 800K",
            DiskEncoding::MfmDoubleSided => "MFM double-sided double density 720K",
            DiskEncoding::MfmHighDensity => "MFM double-sided high density 1440K",
            DiskEncoding::Unknown(_) => "unknown",
        }
    }
}

impl From<u8> for DiskEncoding {
    fn from(code: u8) -> Self {
        match code {
            0x00 => DiskEncoding::GcrSingleSided,
            0x01 => DiskEncoding::GcrDoubleSided,
            0x02 => DiskEncoding::MfmDoubleSided,
            0x03 => DiskEncoding::MfmHighDensity,
            other => DiskEncoding::Unknown(other),
        }
    }
}

/// Logical volume format of the imaged disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskFormat {
    /// Macintosh or Lisa 400K volume
    MacintoshLisa400K,
    /// Macintosh 800K volume
    Macintosh800K,
    /// ProDOS 800K volume
    ProDos800K,
    /// Any other format byte, passed through unchanged
    Unknown(u8),
}

impl DiskFormat {
    /// Get the on-disk byte value for this format
    pub fn code(&self) -> u8 {
        match self {
            DiskFormat::MacintoshLisa400K => 0x02,
            DiskFormat::Macintosh800K => 0x22,
            DiskFormat::ProDos800K => 0x24,
            DiskFormat::Unknown(code) => *code,
        }
    }

    /// Get a human-readable name for this format
    pub fn name(&self) -> &'static str {
        match self {
            DiskFormat::MacintoshLisa400K => "Macintosh/Lisa 400K",
            DiskFormat::Macintosh800K => "Macintosh 800K",
            DiskFormat::ProDos800K => "ProDOS 800K",
            DiskFormat::Unknown(_) => "unknown",
        }
    }
}

impl From<u8> for DiskFormat {
    fn from(code: u8) -> Self {
        match code {
            0x02 => DiskFormat::MacintoshLisa400K,
            0x22 => DiskFormat::Macintosh800K,
            0x24 => DiskFormat::ProDos800K,
            other => DiskFormat::Unknown(other),
        }
    }
}

/// Infer the encoding/format pair from the byte length of a raw sector dump
///
/// Only the four classic floppy capacities are recognized; any other
/// length returns `None` and the caller decides how to proceed.
pub fn encoding_for_size(len: u64) -> Option<(DiskEncoding, DiskFormat)> {
    match len {
        1_474_560 => Some((DiskEncoding::MfmHighDensity, DiskFormat::Macintosh800K)),
        819_200 => Some((DiskEncoding::GcrDoubleSided, DiskFormat::Macintosh800K)),
        737_280 => Some((DiskEncoding::MfmDoubleSided, DiskFormat::Macintosh800K)),
        409_600 => Some((DiskEncoding::GcrSingleSided, DiskFormat::MacintoshLisa400K)),
        _ => None,
    }
}
