/// DC42 file reader

use crate::error::{Dc42Error, Result};
use crate::image::Dc42Image;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a DC42 file, staging the whole container in memory.
///
/// Decodes and validates the header and checks that the file actually
/// holds the data and tag regions the header declares.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Dc42Image> {
    let bytes = read_raw(path)?;
    Dc42Image::from_bytes(bytes)
}

/// Read a whole file into a staged buffer.
///
/// The buffer is reserved with a fallible allocation so an oversized
/// file surfaces as [`Dc42Error::Allocation`] instead of aborting, and
/// before any write-side file handle exists.
pub fn read_raw<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len() as usize;

    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Dc42Error::Allocation { bytes: len })?;
    file.read_to_end(&mut buf)?;

    Ok(buf)
}
