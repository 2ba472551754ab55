//! Raster decoding for Mediaconv.
//!
//! This module turns an encoded image file into a [`SourceImage`]: an 8-bit
//! RGBA pixel buffer at the image's natural (displayed) dimensions.
//!
//! - The container format is sniffed from the bytes, never from the declared
//!   content type.
//! - EXIF orientation is applied, so a portrait photo stored sideways decodes
//!   upright, the same way a browser draws it.
//! - Whether the source carried an alpha channel is remembered, so encoders
//!   can keep RGB sources RGB.
//!
//! # Examples
//!
//! ```ignore
//! use mediaconv_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod raster;
mod types;

pub use raster::{decode_image, get_orientation};
pub use types::{DecodeError, Orientation, SourceImage};
