//! Image encoding for Mediaconv.
//!
//! This module provides functionality for:
//! - Encoding pixel buffers to PNG, JPEG and WEBP
//! - Flattening transparency onto a white background for alpha-less targets
//! - The [`TargetFormat`] and [`Quality`] parameters of the re-encoder
//!
//! # Examples
//!
//! ```ignore
//! use mediaconv_core::encode::{encode_jpeg, flatten_onto_white};
//!
//! let rgba = vec![0u8; 100 * 100 * 4]; // Fully transparent
//! let rgb = flatten_onto_white(&rgba);
//! let jpeg_bytes = encode_jpeg(&rgb, 100, 100, 92).unwrap();
//! ```

mod flatten;
mod raster;
mod types;

pub use flatten::flatten_onto_white;
pub use raster::{encode_jpeg, encode_png, encode_webp, EncodeError, PixelLayout};
pub use types::{Quality, TargetFormat, UnknownFormatError};
