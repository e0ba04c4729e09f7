/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! Codecs never talk to files or buffers directly, they go through
//! [`ZReader`] and [`ZWriter`], which wrap anything implementing
//! [`ZByteReaderTrait`] or [`ZByteWriterTrait`].
//!
//! Implementations are provided for
//! - [`ZCursor`], an in-memory source over anything that is `AsRef<[u8]>`
//! - `BufReader<T: Read + Seek>` (with the `std` feature)
//! - `&mut Vec<u8>` always, and any `std::io::Write` with the `std` feature
pub use reader::{ZByteIoError, ZReader, ZSeekFrom};
pub use reader::zcursor::ZCursor;
pub use traits::{ZByteReaderTrait, ZByteWriterTrait};
pub use writer::ZWriter;

mod reader;
mod traits;
mod writer;
