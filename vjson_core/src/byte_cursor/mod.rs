//! Byte-level cursor used by the object scanner.
//! It re-exports the `cursor` module for use in parsing flat JSON objects.

mod cursor;

pub use cursor::*;
