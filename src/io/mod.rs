/// I/O operations for reading and writing DC42 files

/// Reader implementation for DC42 files
pub mod reader;
/// Writer implementation for DC42 files
pub mod writer;

pub use reader::{read_image, read_raw};
pub use writer::{write_image, write_new_image};
