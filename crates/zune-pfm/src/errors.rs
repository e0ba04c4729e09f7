/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZByteIoError;
use zune_core::colorspace::ColorSpace;

/// PFM decoding errors
pub enum PfmDecodeErrors {
    /// The input file could not be opened
    Io(std::io::Error),
    /// The byte source failed while we were reading from it
    IoErrors(ZByteIoError),
    /// Magic bytes are neither `PF` nor `Pf`
    InvalidMagicBytes([u8; 2]),
    /// Width, height or scale factor could not be parsed
    InvalidHeader(String),
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// Too large dimensions for a given dimension
    TooLargeDimensions(&'static str, usize, usize),
    /// The raster could not be allocated, contains the requested size in bytes
    AllocationFailed(usize),
    /// The payload ended early.
    ///
    /// Contains the number of floats the header declares and the
    /// number of complete floats actually present
    TruncatedData(usize, usize),
    /// The output array is too small to contain the whole
    /// image
    TooSmallOutputArray(usize, usize)
}

impl Debug for PfmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PfmDecodeErrors::Io(err) => {
                writeln!(f, "Cannot open input: {err}")
            }
            PfmDecodeErrors::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
            PfmDecodeErrors::InvalidMagicBytes(magic) => {
                writeln!(
                    f,
                    "Invalid magic bytes {:?}, expected PF or Pf",
                    String::from_utf8_lossy(magic)
                )
            }
            PfmDecodeErrors::InvalidHeader(reason) => {
                writeln!(f, "Invalid header, reason: {reason}")
            }
            PfmDecodeErrors::ZeroDimensions(width, height) => {
                writeln!(f, "Image dimensions {width}x{height} contain a zero")
            }
            PfmDecodeErrors::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            PfmDecodeErrors::AllocationFailed(size) => {
                writeln!(f, "Cannot allocate {size} bytes for the image")
            }
            PfmDecodeErrors::TruncatedData(expected, found) => {
                writeln!(
                    f,
                    "Truncated pixel data, expected {expected} floats but found {found}"
                )
            }
            PfmDecodeErrors::TooSmallOutputArray(expected, found) => {
                writeln!(f, "Too small of an output array, expected array of at least length {} but found {}", expected, found)
            }
        }
    }
}

impl Display for PfmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PfmDecodeErrors {}

impl From<std::io::Error> for PfmDecodeErrors {
    fn from(value: std::io::Error) -> Self {
        PfmDecodeErrors::Io(value)
    }
}

impl From<ZByteIoError> for PfmDecodeErrors {
    fn from(value: ZByteIoError) -> Self {
        PfmDecodeErrors::IoErrors(value)
    }
}

impl From<RasterError> for PfmDecodeErrors {
    fn from(value: RasterError) -> Self {
        match value {
            RasterError::ZeroDimensions(width, height) => {
                PfmDecodeErrors::ZeroDimensions(width, height)
            }
            RasterError::AllocationFailed(size) => PfmDecodeErrors::AllocationFailed(size),
            RasterError::Overflow(width, height) => PfmDecodeErrors::InvalidHeader(format!(
                "Dimensions {width}x{height} overflow the address space"
            )),
            RasterError::WrongLength(expected, found) => {
                PfmDecodeErrors::TooSmallOutputArray(expected, found)
            }
        }
    }
}

/// PFM encoding errors
pub enum PfmEncodeErrors {
    /// The output file could not be created
    Io(std::io::Error),
    /// The sink failed while we were writing into it
    IoErrors(ZByteIoError),
    /// The input size was expected to be of a certain size but isn't
    WrongInputSize(usize, usize),
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// The colorspace provided by user is not supported by PFM
    UnsupportedColorspace(ColorSpace),
    /// The bit depth provided by the user is not `Float32`
    UnsupportedBitDepth(BitDepth),
    /// Generic message
    Static(&'static str)
}

impl Debug for PfmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PfmEncodeErrors::Io(err) => writeln!(f, "Cannot create output: {err}"),
            PfmEncodeErrors::IoErrors(err) => writeln!(f, "I/O error {:?}", err),
            PfmEncodeErrors::WrongInputSize(expected, found) => {
                writeln!(f, "Input array length {found} doesn't match {expected}")
            }
            PfmEncodeErrors::ZeroDimensions(width, height) => {
                writeln!(f, "Image dimensions {width}x{height} contain a zero")
            }
            PfmEncodeErrors::UnsupportedColorspace(color) => {
                writeln!(f, "Unsupported colorspace {color:?} for PFM, only RGB f32 data can be encoded")
            }
            PfmEncodeErrors::UnsupportedBitDepth(depth) => {
                writeln!(f, "Unsupported bit depth {depth:?}, PFM stores Float32 samples")
            }
            PfmEncodeErrors::Static(err) => writeln!(f, "{}", err)
        }
    }
}

impl Display for PfmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PfmEncodeErrors {}

impl From<std::io::Error> for PfmEncodeErrors {
    fn from(value: std::io::Error) -> Self {
        PfmEncodeErrors::Io(value)
    }
}

impl From<ZByteIoError> for PfmEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        PfmEncodeErrors::IoErrors(value)
    }
}

/// Errors from constructing a [`Raster`](crate::Raster)
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RasterError {
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// `width * height * 3` does not fit in a usize
    Overflow(usize, usize),
    /// The allocator refused the request, contains the requested size in bytes
    AllocationFailed(usize),
    /// A source slice does not hold exactly `width * height * 3` floats
    WrongLength(usize, usize)
}

impl Display for RasterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            RasterError::ZeroDimensions(width, height) => {
                write!(f, "Raster dimensions {width}x{height} contain a zero")
            }
            RasterError::Overflow(width, height) => {
                write!(f, "Raster dimensions {width}x{height} overflow")
            }
            RasterError::AllocationFailed(size) => {
                write!(f, "Cannot allocate {size} bytes for a raster")
            }
            RasterError::WrongLength(expected, found) => {
                write!(f, "Expected {expected} floats but found {found}")
            }
        }
    }
}

impl std::error::Error for RasterError {}
