/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Portable Float Map encoder

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteWriterTrait, ZWriter};
use zune_core::colorspace::ColorSpace;
use zune_core::log::trace;
use zune_core::options::EncoderOptions;

use crate::errors::PfmEncodeErrors;
use crate::header::PfmMagic;

/// Upper bound on the size of the text header we emit
const HEADER_SIZE_LIMIT: usize = 64;

/// A PFM encoder
///
/// Data is expected to be in `f32`, top to bottom, and its size should be
/// `width*height*3`.
///
/// Output is always a color (`PF`) file with a scale factor of `-1.0`
/// and little endian floats, regardless of the host byte order.
pub struct PfmEncoder<'a> {
    data:    &'a [f32],
    options: EncoderOptions
}

impl<'a> PfmEncoder<'a> {
    /// Create a new PFM encoder context that can encode
    /// the provided data
    ///
    /// # Arguments
    ///  - `data`: Data to encode
    ///  - `options`: Contains metadata for data, including width and height
    pub fn new(data: &'a [f32], options: EncoderOptions) -> PfmEncoder<'a> {
        Self { data, options }
    }

    /// Exact number of bytes the payload takes plus room for the header
    ///
    /// Returns `None` if the size overflows a usize
    pub fn expected_buffer_size(&self) -> Option<usize> {
        self.options
            .width()
            .checked_mul(self.options.height())?
            .checked_mul(3 * 4)?
            .checked_add(HEADER_SIZE_LIMIT)
    }

    /// Check that the data and options describe something we can write
    ///
    /// [`encode`](Self::encode) runs this before a single byte
    /// reaches the sink.
    pub fn validate(&self) -> Result<(), PfmEncodeErrors> {
        let (width, height) = (self.options.width(), self.options.height());

        if width == 0 || height == 0 {
            return Err(PfmEncodeErrors::ZeroDimensions(width, height));
        }
        if self.options.colorspace() != ColorSpace::RGB {
            return Err(PfmEncodeErrors::UnsupportedColorspace(
                self.options.colorspace()
            ));
        }
        if self.options.depth() != BitDepth::Float32 {
            return Err(PfmEncodeErrors::UnsupportedBitDepth(self.options.depth()));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(3))
            .ok_or(PfmEncodeErrors::Static("overflow detected"))?;

        let found = self.data.len();

        if expected != found {
            return Err(PfmEncodeErrors::WrongInputSize(expected, found));
        }
        if self.expected_buffer_size().is_none() {
            return Err(PfmEncodeErrors::Static("overflow detected"));
        }
        Ok(())
    }

    /// Encode into a sink
    ///
    /// Rows are written bottom to top as the format requires, each float as
    /// four little endian bytes.
    ///
    /// # Arguments:
    /// - out: The output buffer to write bytes into
    ///
    /// # Returns
    /// - Ok(usize):  The number of bytes written into out
    /// - Err(PfmEncodeErrors): An error if something occurred, the sink may
    ///   hold a partial file in that case
    ///
    /// # Examples
    /// - Encode a black image of 10x10
    ///```
    /// use zune_core::bit_depth::BitDepth;
    /// use zune_core::colorspace::ColorSpace;
    /// use zune_core::options::EncoderOptions;
    /// use zune_pfm::PfmEncoder;
    /// let w = 10;
    /// let h = 10;
    /// let data = vec![0.0_f32; w * h * 3];
    /// let opts = EncoderOptions::new(w, h, ColorSpace::RGB, BitDepth::Float32);
    /// let encoder = PfmEncoder::new(&data, opts);
    ///
    /// let mut output = Vec::with_capacity(encoder.expected_buffer_size().unwrap());
    /// let size = encoder.encode(&mut output).unwrap();
    /// assert_eq!(size, output.len());
    /// assert!(output.starts_with(b"PF\n10 10\n-1.0\n"));
    ///```
    pub fn encode<T: ZByteWriterTrait>(&self, out: T) -> Result<usize, PfmEncodeErrors> {
        self.validate()?;

        let width = self.options.width();
        let height = self.options.height();

        let mut writer = ZWriter::new(out);

        let size = self
            .expected_buffer_size()
            .ok_or(PfmEncodeErrors::Static("overflow detected"))?;
        writer.reserve(size)?;

        let header = format!("{}\n{} {}\n-1.0\n", PfmMagic::Color, width, height);
        writer.write_all(header.as_bytes())?;

        trace!("Encoding {}x{} PFM, header {} bytes", width, height, header.len());

        let scanline_stride = width * 3;
        let mut out_scanline = vec![0_u8; scanline_stride * 4];

        // bottom row first
        for scanline in self.data.chunks_exact(scanline_stride).rev() {
            for (value, out) in scanline.iter().zip(out_scanline.chunks_exact_mut(4)) {
                out.copy_from_slice(&value.to_le_bytes());
            }
            writer.write_all(&out_scanline)?;
        }
        writer.flush()?;

        Ok(writer.bytes_written())
    }
}
