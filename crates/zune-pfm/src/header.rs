/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Display, Formatter};

use zune_core::bit_depth::ByteEndian;
use zune_core::colorspace::ColorSpace;

/// The two PFM variants
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PfmMagic {
    /// `PF`, three floats per pixel
    Color,
    /// `Pf`, one float per pixel
    Grayscale
}

impl PfmMagic {
    /// Match the first two bytes of a file
    pub const fn from_bytes(magic: [u8; 2]) -> Option<PfmMagic> {
        match magic {
            [b'P', b'F'] => Some(PfmMagic::Color),
            [b'P', b'f'] => Some(PfmMagic::Grayscale),
            _ => None
        }
    }

    pub const fn to_bytes(self) -> [u8; 2] {
        match self {
            PfmMagic::Color => *b"PF",
            PfmMagic::Grayscale => *b"Pf"
        }
    }

    /// Number of floats stored per pixel in the file
    pub const fn source_components(self) -> usize {
        match self {
            PfmMagic::Color => 3,
            PfmMagic::Grayscale => 1
        }
    }

    /// Colorspace of the stored samples
    pub const fn colorspace(self) -> ColorSpace {
        match self {
            PfmMagic::Color => ColorSpace::RGB,
            PfmMagic::Grayscale => ColorSpace::Luma
        }
    }
}

impl Display for PfmMagic {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PfmMagic::Color => write!(f, "PF"),
            PfmMagic::Grayscale => write!(f, "Pf")
        }
    }
}

/// A parsed PFM header
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PfmHeader {
    pub(crate) magic:        PfmMagic,
    pub(crate) width:        usize,
    pub(crate) height:       usize,
    pub(crate) scale_factor: f32
}

impl PfmHeader {
    pub const fn magic(&self) -> PfmMagic {
        self.magic
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// The scale factor exactly as written, sign included
    pub const fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Byte order of the float payload
    ///
    /// A scale factor that is not `>= 0.0` (negative or NaN) means little endian,
    /// anything else big endian.
    pub fn payload_endian(&self) -> ByteEndian {
        if self.scale_factor >= 0.0 {
            ByteEndian::BE
        } else {
            ByteEndian::LE
        }
    }

    /// Whether payload floats must be byte swapped after being
    /// read in native order
    pub fn needs_byte_swap(&self) -> bool {
        (self.scale_factor >= 0.0) ^ (ByteEndian::native() == ByteEndian::BE)
    }

    /// Number of floats the payload holds
    pub fn payload_floats(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)?
            .checked_mul(self.magic.source_components())
    }
}

/// Reverse the bytes of an `f32`, `[b0,b1,b2,b3] -> [b3,b2,b1,b0]`.
///
/// Works on the bit pattern, the value is never converted numerically,
/// so NaN payloads survive a double swap untouched.
#[inline(always)]
pub fn swap_f32_bytes(value: f32) -> f32 {
    f32::from_bits(value.to_bits().swap_bytes())
}

#[cfg(test)]
mod tests {
    use zune_core::bit_depth::ByteEndian;

    use super::{swap_f32_bytes, PfmHeader, PfmMagic};

    fn header(scale_factor: f32) -> PfmHeader {
        PfmHeader {
            magic: PfmMagic::Color,
            width: 4,
            height: 2,
            scale_factor
        }
    }

    #[test]
    fn magic_bytes() {
        assert_eq!(PfmMagic::from_bytes(*b"PF"), Some(PfmMagic::Color));
        assert_eq!(PfmMagic::from_bytes(*b"Pf"), Some(PfmMagic::Grayscale));
        assert_eq!(PfmMagic::from_bytes(*b"PX"), None);
        assert_eq!(PfmMagic::from_bytes(*b"pF"), None);
        assert_eq!(PfmMagic::Grayscale.to_bytes(), *b"Pf");
        assert_eq!(PfmMagic::Color.to_string(), "PF");
    }

    #[test]
    fn scale_sign_selects_endian() {
        assert_eq!(header(-1.0).payload_endian(), ByteEndian::LE);
        assert_eq!(header(1.0).payload_endian(), ByteEndian::BE);
        // zero is not negative
        assert_eq!(header(0.0).payload_endian(), ByteEndian::BE);
    }

    #[test]
    fn swap_decision_follows_host() {
        if cfg!(target_endian = "little") {
            assert!(header(1.0).needs_byte_swap());
            assert!(!header(-1.0).needs_byte_swap());
        } else {
            assert!(!header(1.0).needs_byte_swap());
            assert!(header(-1.0).needs_byte_swap());
        }
    }

    #[test]
    fn swap_reverses_bytes() {
        let value = f32::from_bits(0x1122_3344);
        assert_eq!(swap_f32_bytes(value).to_bits(), 0x4433_2211);
        assert_eq!(swap_f32_bytes(swap_f32_bytes(1.5)), 1.5);
    }

    #[test]
    fn payload_size() {
        assert_eq!(header(-1.0).payload_floats(), Some(24));
        let gray = PfmHeader {
            magic: PfmMagic::Grayscale,
            ..header(-1.0)
        };
        assert_eq!(gray.payload_floats(), Some(8));
    }
}
