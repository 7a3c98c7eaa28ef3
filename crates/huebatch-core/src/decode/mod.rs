//! Image decoding pipeline for Huebatch.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG files into RGBA pixel data
//! - Normalizing every decoded image to RGBA (missing alpha becomes opaque)
//! - Honoring the EXIF orientation tag on JPEG input
//!
//! All operations are synchronous and run on the calling thread.

mod reader;
mod types;

pub use reader::{decode_bytes, load_image};
pub use types::{DecodeError, RgbaData};
