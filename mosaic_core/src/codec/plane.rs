/*!
# `Mosaic` - Planes and Tiles
*/

use crate::{
	Failure,
	MosaicError,
};
use std::ops::Deref;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Padding Mode.
///
/// Planes are padded out to a whole number of tiles before partitioning. The
/// padding is always cropped away again during reassembly, but it still feeds
/// the transform, so the choice shows up as different boundary artifacts.
pub enum Padding {
	/// # Zero-Fill.
	Zero,

	/// # Edge Replication.
	///
	/// Repeat the last row and column outward.
	Edge,
}



#[derive(Debug, Clone, PartialEq)]
/// # Channel Plane.
///
/// A single channel of an image as row-major floats.
pub struct Plane {
	/// # Samples.
	data: Vec<f32>,

	/// # Width.
	width: usize,

	/// # Height.
	height: usize,
}

impl Deref for Plane {
	type Target = [f32];

	#[inline]
	fn deref(&self) -> &Self::Target { &self.data }
}

impl Plane {
	/// # New.
	///
	/// ## Errors
	///
	/// An error is returned if either dimension is zero or the buffer length
	/// does not match them.
	pub fn new(data: Vec<f32>, width: usize, height: usize) -> Result<Self, MosaicError> {
		if
			width != 0 &&
			height != 0 &&
			width.checked_mul(height).is_some_and(|len| len == data.len())
		{
			Ok(Self { data, width, height })
		}
		else { Err(Failure::PlaneShape.into()) }
	}

	#[inline]
	/// # From Parts (Unchecked).
	pub(crate) const fn from_parts(data: Vec<f32>, width: usize, height: usize) -> Self {
		Self { data, width, height }
	}
}

/// ## Getters.
impl Plane {
	#[inline]
	#[must_use]
	/// # Width.
	pub const fn width(&self) -> usize { self.width }

	#[inline]
	#[must_use]
	/// # Height.
	pub const fn height(&self) -> usize { self.height }

	#[must_use]
	/// # Sample.
	pub fn get(&self, x: usize, y: usize) -> Option<f32> {
		if x < self.width { self.row(y)?.get(x).copied() }
		else { None }
	}

	#[must_use]
	/// # Row.
	pub fn row(&self, y: usize) -> Option<&[f32]> {
		let start = y.checked_mul(self.width)?;
		self.data.get(start..start + self.width)
	}
}

/// ## Partitioning.
impl Plane {
	#[must_use]
	/// # Pad.
	///
	/// Return a copy of the plane grown to the next multiple of `size` in
	/// each direction. If the plane already fits, the copy is exact.
	pub fn pad(&self, size: usize, padding: Padding) -> Self {
		let size = size.max(1);
		let width = self.width.div_ceil(size) * size;
		let height = self.height.div_ceil(size) * size;
		if width == self.width && height == self.height { return self.clone(); }

		let mut data = Vec::with_capacity(width * height);
		for row in self.data.chunks_exact(self.width) {
			data.extend_from_slice(row);
			let fill = match padding {
				Padding::Zero => 0.0,
				Padding::Edge => row[self.width - 1],
			};
			data.resize(data.len() + width - self.width, fill);
		}

		// Extra rows.
		let last = data.len() - width;
		for _ in self.height..height {
			match padding {
				Padding::Zero => data.resize(data.len() + width, 0.0),
				Padding::Edge => data.extend_from_within(last..last + width),
			}
		}

		Self { data, width, height }
	}

	#[must_use]
	/// # Partition.
	///
	/// Pad the plane for `size`, then split it into square tiles in
	/// row-major order.
	pub fn partition(&self, size: usize, padding: Padding) -> Vec<Tile> {
		self.pad(size, padding).tiles(size)
	}

	#[allow(clippy::integer_division)] // Partial tiles are skipped.
	#[must_use]
	/// # Tiles.
	///
	/// Split the plane into square tiles in row-major order. Any partial
	/// tiles along the right and bottom edges are skipped, so this should
	/// only be called on planes that have already been padded.
	pub fn tiles(&self, size: usize) -> Vec<Tile> {
		if size == 0 { return Vec::new(); }

		let cols = self.width / size;
		let rows = self.height / size;
		let mut out = Vec::with_capacity(cols * rows);
		for ty in 0..rows {
			for tx in 0..cols {
				let mut data = Vec::with_capacity(size * size);
				for y in ty * size..(ty + 1) * size {
					let start = y * self.width + tx * size;
					data.extend_from_slice(&self.data[start..start + size]);
				}
				out.push(Tile { data, size });
			}
		}

		out
	}

	/// # Reassemble.
	///
	/// This is the inverse of [`Plane::partition`]: write the tiles back in
	/// row-major order, then crop away the padding so the result is exactly
	/// `width` by `height`.
	///
	/// ## Errors
	///
	/// An error is returned if the tile count does not cover the padded plane
	/// or any tile has the wrong size.
	pub fn reassemble(tiles: &[Tile], width: usize, height: usize, size: usize)
	-> Result<Self, MosaicError> {
		if width == 0 || height == 0 || size == 0 {
			return Err(Failure::PlaneShape.into());
		}

		let cols = width.div_ceil(size);
		let rows = height.div_ceil(size);
		if cols.checked_mul(rows) != Some(tiles.len()) {
			return Err(Failure::TileCount.into());
		}
		if tiles.iter().any(|t| t.size != size || t.data.len() != size * size) {
			return Err(Failure::TileShape.into());
		}

		let mut data = Vec::with_capacity(width * height);
		for (ty, band) in tiles.chunks_exact(cols).enumerate() {
			for r in 0..size {
				if ty * size + r == height { break; }
				for tile in band {
					data.extend_from_slice(&tile.data[r * size..(r + 1) * size]);
				}
				// Crop the right edge.
				data.truncate(data.len() - (cols * size - width));
			}
		}

		Ok(Self { data, width, height })
	}

	/// # Clamp.
	///
	/// Pin every sample to `0..=255`.
	pub fn clamp(&mut self) {
		for v in &mut self.data { *v = super::color::clamp(*v); }
	}
}



#[derive(Debug, Clone, PartialEq)]
/// # Tile.
///
/// A square, row-major block of samples.
pub struct Tile {
	/// # Samples.
	data: Vec<f32>,

	/// # Size.
	size: usize,
}

impl Deref for Tile {
	type Target = [f32];

	#[inline]
	fn deref(&self) -> &Self::Target { &self.data }
}

impl Tile {
	/// # New.
	///
	/// ## Errors
	///
	/// The buffer must hold exactly `size * size` samples.
	pub fn new(data: Vec<f32>, size: usize) -> Result<Self, MosaicError> {
		if size != 0 && size.checked_mul(size) == Some(data.len()) {
			Ok(Self { data, size })
		}
		else { Err(Failure::TileShape.into()) }
	}

	#[inline]
	/// # From Parts (Unchecked).
	pub(crate) const fn from_parts(data: Vec<f32>, size: usize) -> Self {
		Self { data, size }
	}

	#[inline]
	#[must_use]
	/// # Size.
	///
	/// The length of one side.
	pub const fn size(&self) -> usize { self.size }

	#[must_use]
	/// # Sample.
	pub fn get(&self, row: usize, col: usize) -> Option<f32> {
		if row < self.size && col < self.size { self.data.get(row * self.size + col).copied() }
		else { None }
	}
}
