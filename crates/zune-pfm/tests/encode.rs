/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;
use zune_pfm::{PfmEncodeErrors, PfmEncoder, Raster};

/// A sink that refuses to hold more than `limit` bytes
struct LimitedSink {
    data:  Vec<u8>,
    limit: usize
}

impl Write for LimitedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let space = self.limit - self.data.len();
        if space == 0 {
            return Err(std::io::Error::new(ErrorKind::WriteZero, "sink full"));
        }
        let length = space.min(buf.len());
        self.data.extend_from_slice(&buf[..length]);
        Ok(length)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("zune-pfm-{}-{name}.pfm", std::process::id()))
}

#[test]
fn two_pixel_layout() {
    let path = temp_file("two-pixel");
    let data = [1.0_f32, 0.5, 0.0, 0.0, 0.5, 1.0];

    let written = zune_pfm::encode(&path, 2, 1, &data).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut expected = b"PF\n2 1\n-1.0\n".to_vec();
    data.iter()
        .for_each(|x| expected.extend_from_slice(&x.to_le_bytes()));

    assert_eq!(written, expected.len());
    assert_eq!(bytes, expected);
}

#[test]
fn bottom_row_written_first() {
    let path = temp_file("bottom-row");
    let raster = Raster::from_slice(1, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

    zune_pfm::encode_raster(&path, &raster).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let payload = &bytes[b"PF\n1 2\n-1.0\n".len()..];
    let floats: Vec<f32> = payload
        .chunks_exact(4)
        .map(|x| f32::from_le_bytes([x[0], x[1], x[2], x[3]]))
        .collect();

    assert_eq!(floats, [4.0, 5.0, 6.0, 1.0, 2.0, 3.0]);
}

#[test]
fn wrong_size_creates_no_file() {
    let path = temp_file("wrong-size");

    let err = zune_pfm::encode(&path, 2, 2, &[0.0; 11]).unwrap_err();

    assert!(matches!(err, PfmEncodeErrors::WrongInputSize(12, 11)));
    assert!(!path.exists());
}

#[test]
fn zero_dimensions() {
    let err = zune_pfm::encode(temp_file("zero"), 0, 0, &[]).unwrap_err();
    assert!(matches!(err, PfmEncodeErrors::ZeroDimensions(0, 0)));
}

#[test]
fn unwritable_destination() {
    let path = std::env::temp_dir()
        .join(format!("zune-pfm-no-such-dir-{}", std::process::id()))
        .join("out.pfm");

    let err = zune_pfm::encode(path, 1, 1, &[0.0; 3]).unwrap_err();
    assert!(matches!(err, PfmEncodeErrors::Io(ref e) if e.kind() == ErrorKind::NotFound));
}

#[test]
fn overwrites_existing_file() {
    let path = temp_file("overwrite");
    std::fs::write(&path, vec![0xAA_u8; 4096]).unwrap();

    let written = zune_pfm::encode(&path, 1, 1, &[0.0; 3]).unwrap();
    let length = std::fs::metadata(&path).unwrap().len();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(length, written as u64);
}

#[test]
fn failed_row_write_stops_encoding() {
    let header = b"PF\n2 3\n-1.0\n";
    let row_bytes = 2 * 3 * 4;
    // room for the header, one row and part of the next
    let mut sink = LimitedSink {
        data:  vec![],
        limit: header.len() + row_bytes + 5
    };
    let data: Vec<f32> = (0..2 * 3 * 3).map(|x| x as f32).collect();
    let options = EncoderOptions::new(2, 3, ColorSpace::RGB, BitDepth::Float32);

    let err = PfmEncoder::new(&data, options)
        .encode(&mut sink)
        .unwrap_err();

    assert!(matches!(err, PfmEncodeErrors::IoErrors(_)));
    assert_eq!(&sink.data[..header.len()], header);
    // the bottom row made it out, nothing from the row after the failure did
    let first_row: Vec<u8> = data[12..]
        .iter()
        .flat_map(|x| x.to_le_bytes())
        .collect();
    assert_eq!(&sink.data[header.len()..header.len() + row_bytes], &first_row[..]);
    assert!(sink.data.len() < header.len() + 2 * row_bytes);
}
