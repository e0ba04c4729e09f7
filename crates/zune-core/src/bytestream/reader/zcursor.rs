/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteReaderTrait, ZSeekFrom};

/// An in-memory byte source
///
/// Wraps anything that can be viewed as a byte slice, e.g `&[u8]`,
/// `Vec<u8>` or `[u8; N]`.
///
/// ```
/// use zune_core::bytestream::{ZCursor, ZReader};
/// let mut reader = ZReader::new(ZCursor::new(b"Pf"));
/// assert_eq!(reader.read_u8(), b'P');
/// ```
pub struct ZCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZCursor<T> {
    pub fn new(buffer: T) -> ZCursor<T> {
        ZCursor {
            stream:   buffer,
            position: 0
        }
    }
    /// Return the wrapped buffer
    pub fn into_inner(self) -> T {
        self.stream
    }

    fn len(&self) -> usize {
        self.stream.as_ref().len()
    }
}

impl<T: AsRef<[u8]>> ZByteReaderTrait for ZCursor<T> {
    #[inline(always)]
    fn read_byte_no_error(&mut self) -> u8 {
        match self.stream.as_ref().get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let remaining = self.len().saturating_sub(self.position);

        if remaining < buf.len() {
            // leave position untouched on failure
            return Err(ZByteIoError::NotEnoughBytes(buf.len(), remaining));
        }
        self.read_bytes(buf)?;
        Ok(())
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        let len = self.len();
        let start = core::cmp::min(self.position, len);
        let end = core::cmp::min(self.position.saturating_add(buf.len()), len);

        let slice = &self.stream.as_ref()[start..end];
        buf[..slice.len()].copy_from_slice(slice);

        self.position = end;

        Ok(end - start)
    }

    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        let new_position = match from {
            ZSeekFrom::Start(position) => i64::try_from(position)?,
            ZSeekFrom::End(position) => i64::try_from(self.len())? + position,
            ZSeekFrom::Current(position) => i64::try_from(self.position)? + position
        };
        if new_position < 0 {
            return Err(ZByteIoError::SeekError("Cannot seek before byte 0"));
        }
        self.position = usize::try_from(new_position)?;

        Ok(self.position as u64)
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ZByteIoError> {
        Ok(self.position >= self.len())
    }

    #[inline(always)]
    fn z_position(&mut self) -> Result<u64, ZByteIoError> {
        Ok(self.position as u64)
    }
}
