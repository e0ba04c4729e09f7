/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image colorspace information

/// Colorspaces a float map can be stored in or expanded to
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Red, Green , Blue
    RGB,
    /// Grayscale colorspace
    Luma,
    /// The colorspace is unknown
    #[default]
    Unknown
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    ///
    /// ```
    /// use zune_core::colorspace::ColorSpace;
    /// assert_eq!(ColorSpace::RGB.num_components(), 3);
    /// assert_eq!(ColorSpace::Luma.num_components(), 1);
    /// ```
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::Luma => 1,
            Self::Unknown => 0
        }
    }

    pub const fn is_grayscale(&self) -> bool {
        matches!(self, Self::Luma)
    }
}
