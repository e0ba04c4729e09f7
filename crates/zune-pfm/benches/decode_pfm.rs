/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use zune_pfm::{decode_bytes, Raster};

const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;

/// Build a PFM file of a horizontal gradient in memory
fn make_pfm(magic: &str, scale: &str, components: usize, big_endian: bool) -> Vec<u8> {
    let mut data = format!("{magic}\n{WIDTH} {HEIGHT}\n{scale}\n").into_bytes();

    for _ in 0..HEIGHT {
        for x in 0..WIDTH * components {
            let value = x as f32 / (WIDTH * components) as f32;

            if big_endian {
                data.extend_from_slice(&value.to_be_bytes());
            } else {
                data.extend_from_slice(&value.to_le_bytes());
            }
        }
    }
    data
}

fn decode_zune_pfm(data: &[u8]) -> Raster {
    decode_bytes(data).unwrap()
}

fn bench_decode(c: &mut Criterion) {
    let inputs = [
        ("color little endian", make_pfm("PF", "-1.0", 3, false)),
        ("color big endian", make_pfm("PF", "1.0", 3, true)),
        ("grayscale", make_pfm("Pf", "-1.0", 1, false))
    ];

    let mut group = c.benchmark_group("pfm: Simple decode");

    for (name, data) in &inputs {
        group.throughput(Throughput::Bytes(data.len() as u64));

        group.bench_function(*name, |b| {
            b.iter(|| black_box(decode_zune_pfm(data.as_slice())))
        });
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_decode);

criterion_main!(benches);
