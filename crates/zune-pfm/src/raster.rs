/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Owned RGB float storage

use bytemuck::{Pod, Zeroable};

use crate::errors::RasterError;

/// Four floats on a 16 byte boundary, the unit raster storage is allocated in
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
#[repr(C, align(16))]
struct Lane([f32; 4]);

const LANE_WIDTH: usize = 4;

/// A packed RGB `f32` image
///
/// Pixels are stored row major, three floats per pixel in R,G,B order,
/// row 0 is the top of the image.
///
/// The backing storage always starts on a 16 byte boundary and holds
/// exactly `width * height * 3` floats.
#[derive(Clone, Debug)]
pub struct Raster {
    width:  usize,
    height: usize,
    // number of floats in use, lanes may carry up to 3 floats of padding
    length: usize,
    lanes:  Vec<Lane>
}

impl Raster {
    /// Allocate a zero filled raster
    ///
    /// # Errors
    /// - `ZeroDimensions` if either dimension is zero
    /// - `Overflow` if `width * height * 3` does not fit a usize
    /// - `AllocationFailed` if the allocator refuses the request
    pub fn new(width: usize, height: usize) -> Result<Raster, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroDimensions(width, height));
        }
        let length = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(3))
            .ok_or(RasterError::Overflow(width, height))?;

        let num_lanes = length.div_ceil(LANE_WIDTH);

        let mut lanes = Vec::new();
        lanes
            .try_reserve_exact(num_lanes)
            .map_err(|_| RasterError::AllocationFailed(length.saturating_mul(4)))?;
        lanes.resize(num_lanes, Lane::zeroed());

        Ok(Raster {
            width,
            height,
            length,
            lanes
        })
    }

    /// Copy `data` into a new raster
    ///
    /// `data` must hold exactly `width * height * 3` floats.
    ///
    /// ```
    /// use zune_pfm::Raster;
    /// let raster = Raster::from_slice(2, 1, &[1.0, 0.5, 0.0, 0.0, 0.5, 1.0]).unwrap();
    /// assert_eq!(raster.pixel(1, 0), [0.0, 0.5, 1.0]);
    /// ```
    pub fn from_slice(width: usize, height: usize, data: &[f32]) -> Result<Raster, RasterError> {
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(3))
            .ok_or(RasterError::Overflow(width, height))?;

        if expected != data.len() {
            return Err(RasterError::WrongLength(expected, data.len()));
        }
        let mut raster = Raster::new(width, height)?;
        raster.as_mut_slice().copy_from_slice(data);

        Ok(raster)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of floats in a single row
    pub const fn stride(&self) -> usize {
        self.width * 3
    }

    pub fn as_slice(&self) -> &[f32] {
        &bytemuck::cast_slice::<Lane, f32>(&self.lanes)[..self.length]
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut bytemuck::cast_slice_mut::<Lane, f32>(&mut self.lanes)[..self.length]
    }

    /// Return row `y` as `width * 3` floats
    ///
    /// # Panics
    /// If `y >= height`
    pub fn row(&self, y: usize) -> &[f32] {
        let stride = self.stride();
        &self.as_slice()[y * stride..(y + 1) * stride]
    }

    /// Return row `y` mutably
    ///
    /// # Panics
    /// If `y >= height`
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let stride = self.stride();
        &mut self.as_mut_slice()[y * stride..(y + 1) * stride]
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[f32]> + '_ {
        self.as_slice().chunks_exact(self.stride())
    }

    /// Return the R,G,B values at `(x, y)`
    ///
    /// # Panics
    /// If the coordinate lies outside the image
    pub fn pixel(&self, x: usize, y: usize) -> [f32; 3] {
        assert!(x < self.width, "x {x} out of bounds for width {}", self.width);
        let row = self.row(y);
        [row[x * 3], row[x * 3 + 1], row[x * 3 + 2]]
    }

    /// Mirror the image top to bottom in place
    pub fn flip_vertically(&mut self) {
        let (stride, height) = (self.stride(), self.height);
        flip_rows(self.as_mut_slice(), stride, height);
    }

    /// Copy the pixels out into a plain vector
    pub fn into_vec(self) -> Vec<f32> {
        self.as_slice().to_vec()
    }
}

impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.as_slice() == other.as_slice()
    }
}

/// Swap row `j` with row `height - 1 - j` for the top half of the image
pub(crate) fn flip_rows(data: &mut [f32], stride: usize, height: usize) {
    for j in 0..height / 2 {
        let (top, bottom) = data.split_at_mut((height - 1 - j) * stride);
        top[j * stride..(j + 1) * stride].swap_with_slice(&mut bottom[..stride]);
    }
}
