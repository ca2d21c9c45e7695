/*!
# dc42manager

A Rust library for verifying and creating Disk Copy 4.2 (DC42) disk
image files.

## Features

- Parse and serialize the fixed 84-byte DC42 header
- Compute the DC42 rolling checksum over the data and tag regions
- Verify stored checksums and repair them in place
- Wrap raw HFS volume dumps into new DC42 containers
- Idiomatic Rust API with comprehensive error handling

## Quick Start

```rust,no_run
use dc42manager::Dc42Image;

// Open an existing DC42 image
let mut image = Dc42Image::open("disk.img")?;

// Compare stored and computed checksums
let report = image.verify();

if !report.matches() {
    // Patch the two stored checksum fields and rewrite the file
    image.update_checksums();
    image.save("disk.img")?;
}
# Ok::<(), dc42manager::Dc42Error>(())
```

## DC42 Containers

A DC42 file is an 84-byte big-endian header followed by a data region
and an optional tag region. Each region carries an independent rolling
checksum in the header; the first 12 tag bytes are reserved and never
checksummed.

## Modules

- `checksum`: DC42 rolling checksum
- `create`: Wrapping raw sector dumps into DC42 containers
- `error`: Error types and Result alias
- `format`: Format enumerations and header layout constants
- `header`: Header parsing and serialization
- `image`: In-memory DC42 container
- `io`: I/O operations for reading and writing DC42 files
*/

#![warn(missing_docs)]

/// DC42 rolling checksum
pub mod checksum;
/// Wrapping raw sector dumps into DC42 containers
pub mod create;
/// Error types and Result alias
pub mod error;
/// DC42 format enumerations and constants
pub mod format;
/// DC42 header parsing and serialization
pub mod header;
/// In-memory DC42 container
pub mod image;
/// I/O operations for reading and writing DC42 files
pub mod io;

// Re-export common types
pub use checksum::{checksum, tag_checksum};
pub use create::{plan_image, wrap_file, ImagePlan, SourceLayout, OUTPUT_SUFFIX};
pub use error::{Dc42Error, Result};
pub use format::{encoding_for_size, DiskEncoding, DiskFormat};
pub use header::{patch_checksums, Dc42Header, ImageName};
pub use image::{ChecksumReport, Dc42Image};
