/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "std")]

use std::io::{BufRead, BufReader, Read, Seek};

use crate::bytestream::reader::{ZByteIoError, ZSeekFrom};
use crate::bytestream::ZByteReaderTrait;

impl<T: Read + Seek> ZByteReaderTrait for BufReader<T> {
    #[inline(always)]
    fn read_byte_no_error(&mut self) -> u8 {
        let mut buf = [0];
        match self.read_exact(&mut buf) {
            Ok(()) => buf[0],
            Err(_) => 0
        }
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        self.read_exact(buf).map_err(ZByteIoError::from)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ZByteIoError> {
        loop {
            match self.read(buf) {
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                result => return result.map_err(ZByteIoError::from)
            }
        }
    }

    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        match from {
            // keeps the internal buffer when we only move a few bytes,
            // header parsing rewinds one byte at a time
            ZSeekFrom::Current(offset) => {
                self.seek_relative(offset)?;
                self.stream_position().map_err(ZByteIoError::from)
            }
            _ => self.seek(from.to_std_seek()).map_err(ZByteIoError::from)
        }
    }

    fn is_eof(&mut self) -> Result<bool, ZByteIoError> {
        self.fill_buf()
            .map(|b| b.is_empty())
            .map_err(ZByteIoError::from)
    }

    fn z_position(&mut self) -> Result<u64, ZByteIoError> {
        self.stream_position().map_err(ZByteIoError::from)
    }
}
