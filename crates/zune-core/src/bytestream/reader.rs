/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::Formatter;

pub(crate) mod std_readers;
pub(crate) mod zcursor;
use crate::bytestream::ZByteReaderTrait;

/// Enumeration of possible methods to seek within an I/O object.
///
/// It is analogous to the [SeekFrom](std::io::SeekFrom) in the std library but
/// it's here to allow this to work in no-std crates
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub enum ZSeekFrom {
    /// Sets the offset to the provided number of bytes.
    Start(u64),

    /// Sets the offset to the size of this object plus the specified number of
    /// bytes.
    End(i64),

    /// Sets the offset to the current position plus the specified number of
    /// bytes.
    Current(i64)
}

impl ZSeekFrom {
    /// Convert to [SeekFrom](std::io::SeekFrom) from the `std::io` library
    #[cfg(feature = "std")]
    pub(crate) fn to_std_seek(self) -> std::io::SeekFrom {
        match self {
            ZSeekFrom::Start(pos) => std::io::SeekFrom::Start(pos),
            ZSeekFrom::End(pos) => std::io::SeekFrom::End(pos),
            ZSeekFrom::Current(pos) => std::io::SeekFrom::Current(pos)
        }
    }
}

/// Errors raised by byte sources and sinks
pub enum ZByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    TryFromIntError(core::num::TryFromIntError),
    // requested, read
    NotEnoughBytes(usize, usize),
    Generic(&'static str),
    SeekError(&'static str)
}

impl core::fmt::Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            ZByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ZByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {}", err)
            }
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
            ZByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
        }
    }
}

impl core::fmt::Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}

impl From<core::num::TryFromIntError> for ZByteIoError {
    fn from(value: core::num::TryFromIntError) -> Self {
        ZByteIoError::TryFromIntError(value)
    }
}

/// A byte reader wrapping any [`ZByteReaderTrait`] source
pub struct ZReader<T: ZByteReaderTrait> {
    inner: T
}

impl<T: ZByteReaderTrait> ZReader<T> {
    pub fn new(source: T) -> ZReader<T> {
        ZReader { inner: source }
    }
    #[inline(always)]
    pub fn skip(&mut self, num: usize) -> Result<u64, ZByteIoError> {
        self.inner.z_seek(ZSeekFrom::Current(i64::try_from(num)?))
    }
    #[inline(always)]
    pub fn rewind(&mut self, num: usize) -> Result<u64, ZByteIoError> {
        self.inner.z_seek(ZSeekFrom::Current(-i64::try_from(num)?))
    }
    /// Read a single byte, returning `0` at the end of the stream
    #[inline(always)]
    pub fn read_u8(&mut self) -> u8 {
        self.inner.read_byte_no_error()
    }
    #[inline(always)]
    pub fn read_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        let mut buf = [0];
        self.inner.read_exact_bytes(&mut buf)?;
        Ok(buf[0])
    }
    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, ZByteIoError> {
        self.inner.is_eof()
    }
    #[inline(always)]
    pub fn position(&mut self) -> Result<u64, ZByteIoError> {
        self.inner.z_position()
    }

    /// Read into `buf` until it is full or the source runs dry
    ///
    /// Unlike [`read_u8_err`](Self::read_u8_err), running out of
    /// input is not an error, the caller gets the number of bytes that made
    /// it into `buf` and decides what a short count means.
    pub fn read_fill_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let mut filled = 0;

        while filled < buf.len() {
            let read = self.inner.read_bytes(&mut buf[filled..])?;

            if read == 0 {
                break;
            }
            filled += read;
        }
        Ok(filled)
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::{ZCursor, ZReader};

    #[test]
    fn fill_bytes_stops_at_end() {
        let mut reader = ZReader::new(ZCursor::new([1_u8, 2, 3]));
        let mut buf = [0_u8; 5];

        let read = reader.read_fill_bytes(&mut buf).unwrap();

        assert_eq!(read, 3);
        assert_eq!(&buf[..3], &[1, 2, 3]);
        assert!(reader.eof().unwrap());
    }

    #[test]
    fn rewind_and_skip() {
        let mut reader = ZReader::new(ZCursor::new(b"PF\n"));

        assert_eq!(reader.read_u8(), b'P');
        reader.rewind(1).unwrap();
        assert_eq!(reader.read_u8_err().unwrap(), b'P');
        reader.skip(1).unwrap();
        assert_eq!(reader.position().unwrap(), 2);
        assert_eq!(reader.read_u8(), b'\n');
        // past the end reads return zero
        assert_eq!(reader.read_u8(), 0);
        assert!(reader.read_u8_err().is_err());
    }
}
