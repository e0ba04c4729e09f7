/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Float Map (PFM) decoder and encoder
//!
//! PFM stores uncompressed 32 bit IEEE-754 floats behind a short text header
//!
//! ```text
//! PF
//! 640 480
//! -1.0
//! <width * height * 3 floats, bottom row first>
//! ```
//!
//! `PF` files hold RGB triplets and `Pf` files a single grayscale sample per pixel.
//! The sign of the scale factor on the third line gives the byte order of the floats,
//! negative means little endian, anything else big endian.
//!
//! # Features
//! - No unsafe
//! - Reads from in memory buffers and files through [`ZByteReaderTrait`](zune_core::bytestream::ZByteReaderTrait)
//! - Decodes into a 16 byte aligned [`Raster`] or a caller provided buffer
//! - Fuzz tested decoder
//!
//! # Usage notes
//! Decoded images are always RGB, top to bottom. Grayscale files have their sample copied into
//! all three channels. The scale factor magnitude is reported in the header but never applied
//! to pixel values.
//!
//! The encoder always writes `PF`, little endian floats and a scale factor of `-1.0`.
//!
//! # Example
//! ```
//! use zune_pfm::{decode_bytes, Raster, PfmEncoder};
//! use zune_core::options::EncoderOptions;
//! use zune_core::colorspace::ColorSpace;
//! use zune_core::bit_depth::BitDepth;
//!
//! let raster = Raster::from_slice(1, 2, &[0.0, 0.5, 1.0, 1.0, 0.5, 0.0]).unwrap();
//! let options = EncoderOptions::new(1, 2, ColorSpace::RGB, BitDepth::Float32);
//!
//! let mut file = vec![];
//! PfmEncoder::new(raster.as_slice(), options).encode(&mut file).unwrap();
//!
//! assert_eq!(decode_bytes(&file).unwrap(), raster);
//! ```
#![forbid(unsafe_code)]
pub extern crate zune_core;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub use decoder::PfmDecoder;
pub use encoder::PfmEncoder;
pub use errors::{PfmDecodeErrors, PfmEncodeErrors, RasterError};
pub use header::{swap_f32_bytes, PfmHeader, PfmMagic};
pub use raster::Raster;
use zune_core::bytestream::ZCursor;
use zune_core::log::trace;
use zune_core::options::{DecoderOptions, EncoderOptions};

mod decoder;
mod encoder;
mod errors;
mod header;
mod raster;

/// Options for the path and slice helpers, any dimension the header
/// declares is accepted as long as the raster can be allocated
fn unlimited_options() -> DecoderOptions {
    DecoderOptions::default()
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX)
}

/// Read and decode the PFM file at `path`
///
/// Unlike [`PfmDecoder::new`], no width or height limit applies, use
/// [`PfmDecoder::new_with_options`] to bound untrusted input.
///
/// # Errors
/// - `Io` if the file cannot be opened
/// - Any header or payload error from [`PfmDecoder::decode`]
pub fn decode<P: AsRef<Path>>(path: P) -> Result<Raster, PfmDecodeErrors> {
    let path = path.as_ref();
    trace!("Decoding {}", path.display());

    let file = File::open(path)?;

    PfmDecoder::new_with_options(BufReader::new(file), unlimited_options()).decode()
}

/// Decode a PFM file already held in memory
///
/// Dimension limits are lifted as in [`decode`].
pub fn decode_bytes(data: &[u8]) -> Result<Raster, PfmDecodeErrors> {
    PfmDecoder::new_with_options(ZCursor::new(data), unlimited_options()).decode()
}

/// Encode `width * height` RGB pixels, top row first, as a PFM file at `path`
///
/// The input is validated before the file is created, so a bad call
/// leaves nothing behind on disk.
///
/// # Returns
/// The number of bytes written
pub fn encode<P: AsRef<Path>>(
    path: P, width: usize, height: usize, data: &[f32]
) -> Result<usize, PfmEncodeErrors> {
    let path = path.as_ref();
    let options = EncoderOptions::default()
        .set_width(width)
        .set_height(height);
    let encoder = PfmEncoder::new(data, options);

    encoder.validate()?;

    trace!("Encoding into {}", path.display());

    let mut writer = BufWriter::new(File::create(path)?);

    encoder.encode(&mut writer)
}

/// Encode a [`Raster`] as a PFM file at `path`
pub fn encode_raster<P: AsRef<Path>>(path: P, raster: &Raster) -> Result<usize, PfmEncodeErrors> {
    encode(path, raster.width(), raster.height(), raster.as_slice())
}
