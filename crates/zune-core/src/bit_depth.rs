/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth and byte order information

/// The image bit depth.
///
/// Float maps only ever carry [`Float32`](BitDepth::Float32) samples,
/// the other depths exist so callers can describe what they
/// hold and get a sensible error back from an encoder.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum BitDepth {
    /// Eight bit depth, stored in a [`u8`]
    Eight,
    /// Sixteen bit depth, stored in a [`u16`]
    Sixteen,
    /// Floating point depth, stored in an [`f32`]
    ///
    /// Values are not clamped to any range.
    Float32,
    /// Bit depth information is unknown
    #[default]
    Unknown
}

impl BitDepth {
    /// Get the number of bytes needed to store a single sample
    /// of this depth
    ///
    /// ```
    /// use zune_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::Float32.size_of(), 4);
    /// assert_eq!(BitDepth::Unknown.size_of(), 0);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2,
            Self::Float32 => 4,
            Self::Unknown => 0
        }
    }
}

/// Byte order of multi-byte samples
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ByteEndian {
    /// Little endian, least significant byte first
    LE,
    /// Big endian, most significant byte first
    BE
}

impl ByteEndian {
    /// The byte order of the machine we are compiled for
    pub const fn native() -> ByteEndian {
        if cfg!(target_endian = "big") {
            ByteEndian::BE
        } else {
            ByteEndian::LE
        }
    }
}
