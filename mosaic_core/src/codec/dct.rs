/*!
# `Mosaic` - Discrete Cosine Transform

The forward transform is a separable, orthonormal 2-D DCT-II; the inverse is
the matching DCT-III. Because the basis is orthonormal, the inverse is just
the transpose, and the pair round-trips exactly (give or take float noise).
*/

use crate::{
	Failure,
	MosaicError,
	Tile,
};
use std::{
	borrow::Cow,
	f64::consts::PI,
	sync::LazyLock,
};



/// # 8x8 Basis.
static BASIS_8: LazyLock<Vec<f32>> = LazyLock::new(|| basis(8));

/// # 16x16 Basis.
static BASIS_16: LazyLock<Vec<f32>> = LazyLock::new(|| basis(16));



/// # Forward DCT.
///
/// Transform a tile of samples into frequency coefficients, with the DC term
/// at `(0, 0)`.
///
/// ## Errors
///
/// An error is returned if the input or output contains NaN or infinity.
pub fn forward(tile: &Tile) -> Result<Tile, MosaicError> {
	transform(tile, false)
}

/// # Inverse DCT.
///
/// Transform a tile of frequency coefficients back into samples.
///
/// ## Errors
///
/// An error is returned if the input or output contains NaN or infinity.
pub fn inverse(tile: &Tile) -> Result<Tile, MosaicError> {
	transform(tile, true)
}



/// # Basis Matrix.
///
/// Row `u`, column `i` holds `α(u)·cos((2i+1)uπ/2N)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn basis(n: usize) -> Vec<f32> {
	let nf = n as f64;
	let a0 = (1.0 / nf).sqrt();
	let a1 = (2.0 / nf).sqrt();

	let mut out = Vec::with_capacity(n * n);
	for u in 0..n {
		let alpha = if u == 0 { a0 } else { a1 };
		for i in 0..n {
			let angle = (2.0 * i as f64 + 1.0) * u as f64 * PI / (2.0 * nf);
			out.push((alpha * angle.cos()) as f32);
		}
	}
	out
}

/// # Basis For Size.
fn basis_for(n: usize) -> Cow<'static, [f32]> {
	match n {
		8 => Cow::Borrowed(BASIS_8.as_slice()),
		16 => Cow::Borrowed(BASIS_16.as_slice()),
		_ => Cow::Owned(basis(n)),
	}
}

/// # Transform.
///
/// Forward computes `C·X·Cᵀ`; inverse computes `Cᵀ·X·C`. Either way it is
/// done as two one-dimensional passes, rows then columns.
fn transform(tile: &Tile, inverse: bool) -> Result<Tile, MosaicError> {
	let n = tile.size();
	if n == 0 || tile.len() != n * n { return Err(Failure::TileShape.into()); }
	if tile.iter().any(|v| ! v.is_finite()) { return Err(Failure::NonFinite.into()); }

	let c = basis_for(n);
	let m = |a: usize, b: usize| if inverse { c[b * n + a] } else { c[a * n + b] };

	// Rows.
	let mut tmp = vec![0.0_f32; n * n];
	for (src, dst) in tile.chunks_exact(n).zip(tmp.chunks_exact_mut(n)) {
		for (k, d) in dst.iter_mut().enumerate() {
			*d = src.iter().enumerate().fold(0.0, |acc, (j, &x)| m(k, j).mul_add(x, acc));
		}
	}

	// Columns.
	let mut out = vec![0.0_f32; n * n];
	for k in 0..n {
		for col in 0..n {
			out[k * n + col] = (0..n).fold(0.0, |acc, i| m(k, i).mul_add(tmp[i * n + col], acc));
		}
	}

	if out.iter().all(|v| v.is_finite()) { Ok(Tile::from_parts(out, n)) }
	else { Err(Failure::NonFinite.into()) }
}



#[cfg(test)]
mod tests {
	use super::*;

	#[allow(clippy::cast_precision_loss)]
	fn pattern(n: usize, seed: usize) -> Tile {
		let data = (0..n * n).map(|i| ((i * 37 + seed * 11) % 256) as f32).collect();
		Tile::new(data, n).expect("Bad tile.")
	}

	#[test]
	fn t_round_trip() {
		for n in [4, 8, 16] {
			for seed in 0..5 {
				let tile = pattern(n, seed);
				let coeffs = forward(&tile).expect("Forward failed.");
				let back = inverse(&coeffs).expect("Inverse failed.");
				for (a, b) in tile.iter().zip(back.iter()) {
					assert!((a - b).abs() < 1e-2, "{n}x{n}: {a} != {b}");
				}
			}
		}
	}

	#[test]
	fn t_dc() {
		// A flat tile has all of its energy in the DC term, which for the
		// orthonormal scaling is N times the value.
		for n in [8, 16] {
			let tile = Tile::new(vec![100.0; n * n], n).expect("Bad tile.");
			let coeffs = forward(&tile).expect("Forward failed.");
			#[allow(clippy::cast_precision_loss)]
			let expected = 100.0 * n as f32;
			assert!((coeffs[0] - expected).abs() < 1e-2);
			assert!(coeffs[1..].iter().all(|v| v.abs() < 1e-2));
		}
	}

	#[test]
	fn t_energy() {
		// Orthonormal transforms preserve the sum of squares.
		let tile = pattern(8, 3);
		let coeffs = forward(&tile).expect("Forward failed.");
		let a: f64 = tile.iter().map(|&v| f64::from(v).powi(2)).sum();
		let b: f64 = coeffs.iter().map(|&v| f64::from(v).powi(2)).sum();
		assert!((a - b).abs() / a < 1e-4);
	}

	#[test]
	fn t_basis() {
		// Cached and ad hoc bases agree.
		assert_eq!(basis_for(8).as_ref(), basis(8).as_slice());
		assert_eq!(basis_for(16).as_ref(), basis(16).as_slice());
	}

	#[test]
	fn t_non_finite() {
		let mut data = vec![0.0; 64];
		data[9] = f32::NAN;
		let tile = Tile::new(data, 8).expect("Bad tile.");
		assert_eq!(forward(&tile), Err(MosaicError::CompressionFailure(Failure::NonFinite)));
		assert_eq!(inverse(&tile), Err(MosaicError::CompressionFailure(Failure::NonFinite)));
	}
}
