/// DC42 file writer

use crate::error::{Dc42Error, Result};
use crate::format::constants::HEADER_SIZE;
use crate::header::Dc42Header;
use crate::image::Dc42Image;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Rewrite a DC42 container from its staged buffer.
///
/// The file is opened for writing only once the buffer is fully staged,
/// and the whole container goes out in a single write.
pub fn write_image<P: AsRef<Path>>(image: &Dc42Image, path: P) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(image.as_bytes())?;
    Ok(())
}

/// Write a new container: encoded header followed by the raw payload.
///
/// Header and payload are assembled into one buffer and written with a
/// single call, so a failure to create the destination leaves no partial
/// file behind.
pub fn write_new_image<P: AsRef<Path>>(
    header: &Dc42Header,
    payload: &[u8],
    path: P,
) -> Result<()> {
    let total = HEADER_SIZE + payload.len();
    let mut buf = Vec::new();
    buf.try_reserve_exact(total)
        .map_err(|_| Dc42Error::Allocation { bytes: total })?;
    buf.extend_from_slice(&header.encode());
    buf.extend_from_slice(payload);

    let mut file = File::create(path)?;
    file.write_all(&buf)?;
    Ok(())
}
