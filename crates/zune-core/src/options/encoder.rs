/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bit_depth::BitDepth;
use crate::colorspace::ColorSpace;

/// Options shared by encoders
///
/// Describes the pixels handed to the encoder.
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace,
    depth:      BitDepth
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width:      0,
            height:     0,
            colorspace: ColorSpace::RGB,
            depth:      BitDepth::Float32
        }
    }
}

impl EncoderOptions {
    /// Create  new encode options
    ///
    /// # Arguments
    ///
    /// * `width`: Image width
    /// * `height`: Image height
    /// * `colorspace`:  Image colorspaces
    /// * `depth`: Image depth
    ///
    /// returns: EncoderOptions
    pub const fn new(
        width: usize, height: usize, colorspace: ColorSpace, depth: BitDepth
    ) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            colorspace,
            depth
        }
    }
    /// Get the width for which the image will be encoded in
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get height for which the image will be encoded in
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Get the depth for which the image will be encoded in
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Get the colorspace for which the image will be encoded in
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Set the width for which the image will be encoded in
    pub const fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the height for which the image will be encoded in
    pub const fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the depth for which the image will be encoded in
    pub const fn set_depth(mut self, depth: BitDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Set the colorspace for which the image will be encoded in
    pub const fn set_colorspace(mut self, colorspace: ColorSpace) -> Self {
        self.colorspace = colorspace;
        self
    }
}
