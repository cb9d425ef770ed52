/*!
# `Mosaic` - Quantization
*/

use crate::{
	Failure,
	MosaicError,
	Quality,
	Tile,
};
use std::ops::Deref;



/// # Base Luma Table.
///
/// This is the Annex K luminance table with its single `121` pulled down to
/// `120` so every entry sits in `10..=120`.
const LUMA: [u8; 64] = [
	16, 11, 10, 16,  24,  40,  51,  61,
	12, 12, 14, 19,  26,  58,  60,  55,
	14, 13, 16, 24,  40,  57,  69,  56,
	14, 17, 22, 29,  51,  87,  80,  62,
	18, 22, 37, 56,  68, 109, 103,  77,
	24, 35, 55, 64,  81, 104, 113,  92,
	49, 64, 78, 87, 103, 120, 120, 101,
	72, 92, 95, 98, 112, 100, 103,  99,
];

/// # Base Chroma Table.
const CHROMA: [u8; 64] = [
	17, 18, 24, 47, 99, 99, 99, 99,
	18, 21, 26, 66, 99, 99, 99, 99,
	24, 26, 56, 99, 99, 99, 99, 99,
	47, 66, 99, 99, 99, 99, 99, 99,
	99, 99, 99, 99, 99, 99, 99, 99,
	99, 99, 99, 99, 99, 99, 99, 99,
	99, 99, 99, 99, 99, 99, 99, 99,
	99, 99, 99, 99, 99, 99, 99, 99,
];

/// # Base Table Size.
const BASE: usize = 8;



#[derive(Debug, Clone, PartialEq)]
/// # Quantization Matrix.
///
/// A square table of divisors, one per DCT coefficient, derived from one of
/// the base tables and a [`Quality`]. Every entry is at least `1`.
///
/// Tiles larger (or smaller) than the 8x8 base tables use a nearest-neighbor
/// resampling of them, so a 16x16 matrix repeats each base entry over a 2x2
/// block.
pub struct QuantMatrix {
	/// # Divisors.
	data: Vec<f32>,

	/// # Size.
	size: usize,
}

impl Deref for QuantMatrix {
	type Target = [f32];

	#[inline]
	fn deref(&self) -> &Self::Target { &self.data }
}

/// ## Instantiation.
impl QuantMatrix {
	#[allow(clippy::integer_division)] // Nearest-neighbor mapping.
	#[must_use]
	/// # New.
	///
	/// Scale the luma or chroma base table by the quality factor, resampled
	/// to `size`.
	pub fn new(quality: Quality, size: usize, chroma: bool) -> Self {
		let size = size.max(1);
		let base = if chroma { &CHROMA } else { &LUMA };
		let factor = quality.factor();

		let mut data = Vec::with_capacity(size * size);
		for r in 0..size {
			let br = r * BASE / size;
			for c in 0..size {
				let bc = c * BASE / size;
				data.push((f32::from(base[br * BASE + bc]) * factor).max(1.0));
			}
		}

		Self { data, size }
	}

	#[inline]
	#[must_use]
	/// # Luma.
	pub fn luma(quality: Quality, size: usize) -> Self { Self::new(quality, size, false) }

	#[inline]
	#[must_use]
	/// # Chroma.
	pub fn chroma(quality: Quality, size: usize) -> Self { Self::new(quality, size, true) }
}

/// ## Getters.
impl QuantMatrix {
	#[inline]
	#[must_use]
	/// # Size.
	pub const fn size(&self) -> usize { self.size }

	#[must_use]
	/// # Entry.
	pub fn get(&self, row: usize, col: usize) -> Option<f32> {
		if row < self.size && col < self.size { self.data.get(row * self.size + col).copied() }
		else { None }
	}
}

/// ## Quantization.
impl QuantMatrix {
	#[allow(clippy::cast_possible_truncation)] // DCT coefficients are small.
	/// # Quantize.
	///
	/// Divide each coefficient by its matrix entry and round to the nearest
	/// integer. This is where the information is lost.
	///
	/// ## Errors
	///
	/// The tile must be the same size as the matrix.
	pub fn quantize(&self, coeffs: &Tile) -> Result<Vec<i32>, MosaicError> {
		if coeffs.size() != self.size || coeffs.len() != self.data.len() {
			return Err(Failure::MatrixShape.into());
		}

		Ok(
			coeffs.iter()
				.zip(&self.data)
				.map(|(c, m)| (c / m).round() as i32)
				.collect()
		)
	}

	#[allow(clippy::cast_precision_loss)] // Values are small.
	/// # Dequantize.
	///
	/// Multiply each quantized value by its matrix entry.
	///
	/// ## Errors
	///
	/// The slice must have one value per matrix entry.
	pub fn dequantize(&self, ints: &[i32]) -> Result<Tile, MosaicError> {
		if ints.len() != self.data.len() { return Err(Failure::MatrixShape.into()); }

		let data = ints.iter()
			.zip(&self.data)
			.map(|(&i, m)| i as f32 * m)
			.collect();
		Ok(Tile::from_parts(data, self.size))
	}
}
