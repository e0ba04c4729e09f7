/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sinks the writer trait is implemented for

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

// With std, every io::Write is a sink, `&mut Vec<u8>` included.
#[cfg(feature = "std")]
impl<W: std::io::Write> ZByteWriterTrait for W {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.write_all(buf).map_err(ZByteIoError::StdIoError)
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        self.flush().map_err(ZByteIoError::StdIoError)
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ZByteIoError> {
        Ok(())
    }
}

#[cfg(not(feature = "std"))]
impl ZByteWriterTrait for &mut alloc::vec::Vec<u8> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError> {
        self.try_reserve(size)
            .map_err(|_| ZByteIoError::Generic("Cannot reserve space in the sink"))
    }
}
