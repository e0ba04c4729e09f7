/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the float map codec
//!
//! This crate provides the plumbing the decoder and encoder
//! in `zune-pfm` are built on.
//!
//! It currently contains
//!
//! - A byte reader and writer abstraction over in-memory buffers and `std::io` types
//! - Colorspace and bit depth information describing pixels
//! - Decoder and encoder options
//! - A logging facade that compiles to nothing unless the `log` feature is on
//!
//! The crate is `#[no_std]` unless the `std` feature is enabled, `alloc` is always needed.
//!
//! # Features
//!  - `std`: Implements the reader and writer traits for `std::io` types.
//!
//!  - `log`: Routes the [`log`] module macros to the `log` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
pub mod colorspace;
#[cfg(feature = "log")]
pub use log;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
