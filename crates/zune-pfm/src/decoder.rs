/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::{ZByteReaderTrait, ZReader};
use zune_core::colorspace::ColorSpace;
use zune_core::log::{trace, warn};
use zune_core::options::DecoderOptions;

use crate::errors::PfmDecodeErrors;
use crate::header::{swap_f32_bytes, PfmHeader, PfmMagic};
use crate::raster::{flip_rows, Raster};

/// Longest scale factor token we accept
const MAX_SCALE_LENGTH: usize = 63;

/// A Portable Float Map decoder
///
/// Decodes both `PF` (color) and `Pf` (grayscale) files into
/// packed RGB `f32` pixels, grayscale samples are copied into all three channels.
///
/// The output is top to bottom, the decoder undoes the bottom to top
/// row order of the file.
pub struct PfmDecoder<T: ZByteReaderTrait> {
    buf:     ZReader<T>,
    options: DecoderOptions,
    header:  Option<PfmHeader>
}

impl<T> PfmDecoder<T>
where
    T: ZByteReaderTrait
{
    /// Create a new PFM decoder with default options
    ///
    /// # Arguments
    ///
    /// * `data`: PFM file contents
    ///
    /// # Examples
    ///
    /// ```
    /// use zune_core::bytestream::ZCursor;
    /// use zune_pfm::PfmDecoder;
    ///
    /// let mut decoder = PfmDecoder::new(ZCursor::new(b"NOT VALID PFM"));
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: T) -> PfmDecoder<T> {
        Self::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new PFM decoder with the specified options
    ///
    /// # Arguments
    ///
    /// * `data`: PFM file contents
    /// * `options`: Decoder options that influence how decoding occurs
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::io::BufReader;
    /// use zune_core::options::DecoderOptions;
    /// use zune_pfm::PfmDecoder;
    ///
    /// let file = std::fs::File::open("sample.pfm").unwrap();
    /// // refuse anything wider than 50 pixels
    /// let options = DecoderOptions::default().set_max_width(50);
    /// let decoder = PfmDecoder::new_with_options(BufReader::new(file), options);
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> PfmDecoder<T> {
        PfmDecoder {
            buf: ZReader::new(data),
            options,
            header: None
        }
    }

    /// Decode the PFM header
    ///
    /// Calling this more than once is a no-op, the parsed
    /// values are available from [`header`](Self::header) afterwards.
    pub fn decode_headers(&mut self) -> Result<(), PfmDecodeErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        let mut magic_bytes = [0_u8; 2];

        let read = self.buf.read_fill_bytes(&mut magic_bytes)?;

        if read != magic_bytes.len() {
            return Err(PfmDecodeErrors::InvalidHeader(format!(
                "Expected at least 2 bytes in header but stream has {read}"
            )));
        }
        let magic =
            PfmMagic::from_bytes(magic_bytes).ok_or(PfmDecodeErrors::InvalidMagicBytes(magic_bytes))?;

        self.skip_spaces()?;
        let width = self.read_integer("width")?;
        self.skip_spaces()?;
        let height = self.read_integer("height")?;
        self.skip_spaces()?;
        let scale_factor = self.read_scale_factor()?;

        // a single whitespace byte separates the header from the payload,
        // the payload itself may start with bytes that look like spaces
        if !self.buf.eof()? {
            let terminator = self.buf.read_u8_err()?;

            if !terminator.is_ascii_whitespace() {
                return Err(PfmDecodeErrors::InvalidHeader(format!(
                    "Expected whitespace after scale factor but found byte {terminator:#04x}"
                )));
            }
            if terminator == b'\r' && !self.buf.eof()? {
                // peek, the byte belongs to the payload either way
                if self.buf.read_u8() == b'\n' {
                    warn!("Header ends in CRLF, the LF is read as the first payload byte");
                }
                self.buf.rewind(1)?;
            }
        }

        if width == 0 || height == 0 {
            return Err(PfmDecodeErrors::ZeroDimensions(width, height));
        }
        if width > self.options.get_max_width() {
            return Err(PfmDecodeErrors::TooLargeDimensions(
                "width",
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PfmDecodeErrors::TooLargeDimensions(
                "height",
                self.options.get_max_height(),
                height
            ));
        }
        if width.checked_mul(height).and_then(|x| x.checked_mul(3)).is_none() {
            return Err(PfmDecodeErrors::InvalidHeader(format!(
                "Dimensions {width}x{height} overflow the address space"
            )));
        }
        if self.options.get_strict_mode() && (scale_factor == 0.0 || !scale_factor.is_finite()) {
            return Err(PfmDecodeErrors::InvalidHeader(format!(
                "Scale factor {scale_factor} does not encode a byte order"
            )));
        }

        let header = PfmHeader {
            magic,
            width,
            height,
            scale_factor
        };

        trace!("Magic: {}", magic);
        trace!("Width: {}", width);
        trace!("Height: {}", height);
        trace!("Scale factor: {}", scale_factor);
        trace!(
            "Payload endian: {:?}, swap bytes: {}",
            header.payload_endian(),
            header.needs_byte_swap()
        );

        self.header = Some(header);

        Ok(())
    }

    /// Return the parsed header or `None` if headers
    /// haven't been decoded
    pub const fn header(&self) -> Option<PfmHeader> {
        self.header
    }

    /// Get image dimensions as a tuple of width and height
    /// or `None` if the image hasn't been decoded.
    ///
    /// # Returns
    /// - `Some(width,height)`: Image dimensions
    /// -  None : The image headers haven't been decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header.map(|h| (h.width, h.height))
    }

    /// Return the input colorspace of the image
    ///
    /// This is the colorspace of the file, output is always RGB.
    ///
    /// # Returns
    /// -`Some(Colorspace)`: Input colorspace
    /// - None : Indicates the headers weren't decoded
    pub fn colorspace(&self) -> Option<ColorSpace> {
        self.header.map(|h| h.magic.colorspace())
    }

    /// Return the bit depth of decoded samples or `None` if
    /// the headers weren't decoded
    pub fn depth(&self) -> Option<BitDepth> {
        self.header.map(|_| BitDepth::Float32)
    }

    /// Return the number of floats required to hold a decoded image
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the image headers were not decoded
    pub fn output_buffer_size(&self) -> Option<usize> {
        let header = self.header?;
        header.width.checked_mul(header.height)?.checked_mul(3)
    }

    /// Decode a PFM file into a newly allocated raster
    ///
    /// # Returns
    /// - `Ok(Raster)`: Top to bottom RGB pixels
    /// - `Err(PfmDecodeErrors)`: Indicates an unrecoverable
    ///  error occurred during decoding, no partial image is returned.
    pub fn decode(&mut self) -> Result<Raster, PfmDecodeErrors> {
        self.decode_headers()?;

        let (width, height) = self
            .dimensions()
            .ok_or(PfmDecodeErrors::InvalidHeader("Headers not decoded".to_string()))?;

        let mut raster = Raster::new(width, height)?;

        self.decode_into(raster.as_mut_slice())?;

        Ok(raster)
    }

    /// Decode into a pre-allocated buffer
    ///
    /// It is an error if the buffer size is smaller than
    /// [`output_buffer_size()`](Self::output_buffer_size)
    ///
    /// If the buffer is bigger than expected, we ignore the end padding floats
    ///
    /// # Example
    ///
    /// ```
    /// use zune_core::bytestream::ZCursor;
    /// use zune_pfm::PfmDecoder;
    ///
    /// let mut file = b"Pf\n1 1\n-1.0\n".to_vec();
    /// file.extend_from_slice(&0.25_f32.to_le_bytes());
    ///
    /// let mut decoder = PfmDecoder::new(ZCursor::new(file));
    /// decoder.decode_headers().unwrap();
    ///
    /// let mut out = vec![0.0; decoder.output_buffer_size().unwrap()];
    /// decoder.decode_into(&mut out).unwrap();
    /// assert_eq!(out, [0.25, 0.25, 0.25]);
    /// ```
    pub fn decode_into(&mut self, buffer: &mut [f32]) -> Result<(), PfmDecodeErrors> {
        self.decode_headers()?;

        let header = self
            .header
            .ok_or(PfmDecodeErrors::InvalidHeader("Headers not decoded".to_string()))?;

        let output_size = self
            .output_buffer_size()
            .ok_or(PfmDecodeErrors::InvalidHeader("Dimensions overflow".to_string()))?;

        if buffer.len() < output_size {
            return Err(PfmDecodeErrors::TooSmallOutputArray(
                output_size,
                buffer.len()
            ));
        }
        let output = &mut buffer[..output_size];
        let swap = header.needs_byte_swap();

        match header.magic {
            PfmMagic::Color => self.read_color(output, swap)?,
            PfmMagic::Grayscale => self.read_grayscale(output, header.width, swap)?
        }
        // file rows run bottom to top
        flip_rows(output, header.width * 3, header.height);

        if !self.buf.eof()? {
            warn!("Ignoring bytes after the end of the pixel data");
        }

        Ok(())
    }

    /// Read all `width * height * 3` floats in one go straight into the output
    fn read_color(&mut self, output: &mut [f32], swap: bool) -> Result<(), PfmDecodeErrors> {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(output);

        let read = self.buf.read_fill_bytes(bytes)?;

        if read != bytes.len() {
            return Err(PfmDecodeErrors::TruncatedData(output.len(), read / 4));
        }
        if swap {
            output.iter_mut().for_each(|x| *x = swap_f32_bytes(*x));
        }
        Ok(())
    }

    /// Read one float per pixel and spread it over R, G and B
    fn read_grayscale(
        &mut self, output: &mut [f32], width: usize, swap: bool
    ) -> Result<(), PfmDecodeErrors> {
        let expected = output.len() / 3;
        // single width scanline of source floats
        let mut scanline = vec![0_u8; width * 4];

        for (y, out_scanline) in output.chunks_exact_mut(width * 3).enumerate() {
            let read = self.buf.read_fill_bytes(&mut scanline)?;

            if read != scanline.len() {
                return Err(PfmDecodeErrors::TruncatedData(expected, y * width + read / 4));
            }

            for (sample, pixel) in scanline
                .chunks_exact(4)
                .zip(out_scanline.chunks_exact_mut(3))
            {
                let mut value = f32::from_ne_bytes([sample[0], sample[1], sample[2], sample[3]]);

                if swap {
                    value = swap_f32_bytes(value);
                }
                pixel.fill(value);
            }
        }
        Ok(())
    }

    /// Skip whitespace until we hit a byte that isn't a space
    /// or we reach eof
    fn skip_spaces(&mut self) -> Result<(), PfmDecodeErrors> {
        while !self.buf.eof()? {
            let byte = self.buf.read_u8();

            if !byte.is_ascii_whitespace() {
                // go back one step, we hit something that is not a space
                self.buf.rewind(1)?;
                break;
            }
        }
        Ok(())
    }

    /// Read an unsigned decimal integer
    fn read_integer(&mut self, name: &'static str) -> Result<usize, PfmDecodeErrors> {
        let mut value = 0_usize;
        let mut digits = 0;

        while !self.buf.eof()? {
            let byte = self.buf.read_u8();

            if !byte.is_ascii_digit() {
                self.buf.rewind(1)?;
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|x| x.checked_add(usize::from(byte - b'0')))
                .ok_or_else(|| {
                    PfmDecodeErrors::InvalidHeader(format!("Image {name} is too large to represent"))
                })?;
            digits += 1;
        }
        if digits == 0 {
            return Err(PfmDecodeErrors::InvalidHeader(format!(
                "Expected a decimal image {name}"
            )));
        }
        Ok(value)
    }

    /// Read the scale factor token and parse it as a float.
    ///
    /// `str::parse` only knows `.` as a decimal separator, whatever
    /// the process locale says.
    fn read_scale_factor(&mut self) -> Result<f32, PfmDecodeErrors> {
        let mut token = [0_u8; MAX_SCALE_LENGTH];
        let mut length = 0;

        while !self.buf.eof()? {
            let byte = self.buf.read_u8();

            if byte.is_ascii_whitespace() {
                self.buf.rewind(1)?;
                break;
            }
            if length == MAX_SCALE_LENGTH {
                return Err(PfmDecodeErrors::InvalidHeader(format!(
                    "Scale factor longer than {MAX_SCALE_LENGTH} bytes"
                )));
            }
            token[length] = byte;
            length += 1;
        }
        if length == 0 {
            return Err(PfmDecodeErrors::InvalidHeader(
                "Missing scale factor".to_string()
            ));
        }
        let text = core::str::from_utf8(&token[..length]).map_err(|_| {
            PfmDecodeErrors::InvalidHeader("Scale factor is not valid UTF-8".to_string())
        })?;

        text.parse::<f32>().map_err(|e| {
            PfmDecodeErrors::InvalidHeader(format!("Cannot parse scale factor `{text}`: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use zune_core::bytestream::ZCursor;
    use zune_core::options::DecoderOptions;

    use crate::errors::PfmDecodeErrors;
    use crate::PfmDecoder;

    fn headers(data: &[u8]) -> Result<PfmDecoder<ZCursor<&[u8]>>, PfmDecodeErrors> {
        let mut decoder = PfmDecoder::new(ZCursor::new(data));
        decoder.decode_headers()?;
        Ok(decoder)
    }

    #[test]
    fn parses_header_fields() {
        let decoder = headers(b"PF\n640 480\n-1.0\n").unwrap();
        let header = decoder.header().unwrap();

        assert_eq!(decoder.dimensions(), Some((640, 480)));
        assert_eq!(header.scale_factor(), -1.0);
        assert_eq!(decoder.output_buffer_size(), Some(640 * 480 * 3));
    }

    #[test]
    fn tolerates_extra_header_whitespace() {
        let decoder = headers(b"Pf  \t3\r\n  2 \n 0.5\n").unwrap();
        assert_eq!(decoder.dimensions(), Some((3, 2)));
        assert_eq!(decoder.header().unwrap().scale_factor(), 0.5);
    }

    #[test]
    fn scale_factor_forms() {
        for (text, expected) in [("1", 1.0_f32), ("-0.003921", -0.003921), ("+2e1", 20.0)] {
            let file = format!("PF\n1 1\n{text}\n");
            let decoder = headers(file.as_bytes()).unwrap();
            assert_eq!(decoder.header().unwrap().scale_factor(), expected);
        }
    }

    #[test]
    fn comma_decimal_separator_rejected() {
        let err = headers(b"PF\n1 1\n-1,0\n").err().unwrap();
        assert!(matches!(err, PfmDecodeErrors::InvalidHeader(_)));
    }

    #[test]
    fn overlong_scale_factor_rejected() {
        let file = format!("PF\n1 1\n-1.{}\n", "0".repeat(80));
        let err = headers(file.as_bytes()).err().unwrap();
        assert!(matches!(err, PfmDecodeErrors::InvalidHeader(_)));
    }

    #[test]
    fn missing_dimension_rejected() {
        let err = headers(b"PF\nabc 1\n-1.0\n").err().unwrap();
        assert!(matches!(err, PfmDecodeErrors::InvalidHeader(_)));
    }

    #[test]
    fn huge_dimension_rejected() {
        let err = headers(b"PF\n99999999999999999999999 1\n-1.0\n").err().unwrap();
        assert!(matches!(err, PfmDecodeErrors::InvalidHeader(_)));
    }

    #[test]
    fn limits_respected() {
        let options = DecoderOptions::default().set_max_height(10);
        let mut decoder =
            PfmDecoder::new_with_options(ZCursor::new(b"PF\n1 11\n-1.0\n"), options);

        let err = decoder.decode_headers().unwrap_err();
        assert!(matches!(err, PfmDecodeErrors::TooLargeDimensions("height", 10, 11)));
    }

    #[test]
    fn strict_mode_rejects_zero_scale() {
        let options = DecoderOptions::default().set_strict_mode(true);
        let mut decoder = PfmDecoder::new_with_options(ZCursor::new(b"PF\n1 1\n0.0\n"), options);
        assert!(decoder.decode_headers().is_err());

        // lenient by default, zero reads as big endian
        let decoder = headers(b"PF\n1 1\n0.0\n").unwrap();
        assert_eq!(decoder.header().unwrap().scale_factor(), 0.0);
    }

    #[test]
    fn strict_mode_rejects_non_finite_scale() {
        for scale in ["nan", "NaN", "inf", "-inf", "infinity"] {
            let file = format!("PF\n1 1\n{scale}\n");
            let options = DecoderOptions::default().set_strict_mode(true);
            let mut decoder = PfmDecoder::new_with_options(ZCursor::new(file.as_bytes()), options);

            let err = decoder.decode_headers().unwrap_err();
            assert!(matches!(err, PfmDecodeErrors::InvalidHeader(_)), "{scale}");

            // accepted when not strict
            assert!(headers(file.as_bytes()).is_ok(), "{scale}");
        }
    }

    #[test]
    fn crlf_header_keeps_lf_in_payload() {
        let mut file = b"PF\n1 1\n-1.0\r\n".to_vec();
        file.extend_from_slice(&[0; 11]);

        let mut decoder = PfmDecoder::new(ZCursor::new(&file));
        let raster = decoder.decode().unwrap();

        // only the CR terminates the header
        assert_eq!(raster.as_slice()[0].to_le_bytes(), [b'\n', 0, 0, 0]);
    }

    #[test]
    fn short_magic() {
        let err = headers(b"P").err().unwrap();
        assert!(matches!(err, PfmDecodeErrors::InvalidHeader(_)));
    }

    #[test]
    fn nothing_before_decode() {
        let decoder = PfmDecoder::new(ZCursor::new(b"PF\n1 1\n-1.0\n"));
        assert!(decoder.header().is_none());
        assert!(decoder.dimensions().is_none());
        assert!(decoder.colorspace().is_none());
        assert!(decoder.depth().is_none());
        assert!(decoder.output_buffer_size().is_none());
    }
}
