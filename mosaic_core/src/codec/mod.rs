/*!
# `Mosaic` - Compression Pipeline

Both profiles share one pipeline. For each of the three color planes:

1. Pad to a whole number of tiles and partition;
2. (WebP) Predict each tile from its neighbors and keep the residual;
3. DCT, quantize, dequantize, inverse DCT;
4. (WebP) Add the prediction back;
5. Reassemble, crop, and clamp.

Tiles are processed in parallel, but always reassembled in row-major order,
so the output is deterministic.
*/

pub(super) mod color;
pub mod dct;
pub(super) mod plane;
pub(super) mod predict;
pub(super) mod quant;

use crate::{
	Image,
	Input,
	MosaicError,
	Plane,
	Prediction,
	PredictionMode,
	Profile,
	QuantMatrix,
	Quality,
	Tile,
	validate,
};
use rayon::prelude::*;



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Compression Stats.
///
/// A tally of what the pipeline did, returned by [`compress_with_stats`].
pub struct Stats {
	/// # Prediction Mode Counts.
	modes: [usize; 4],

	/// # Tiles Per Plane.
	tiles: [usize; 3],
}

/// ## Getters.
impl Stats {
	#[must_use]
	/// # Mode Count.
	///
	/// Return the number of tiles (across all planes) that used the given
	/// prediction mode. This is always zero for the JPEG profile.
	pub const fn mode(&self, mode: PredictionMode) -> usize { self.modes[mode.index()] }

	#[must_use]
	/// # Predicted Tiles.
	pub const fn predicted(&self) -> usize {
		self.modes[0] + self.modes[1] + self.modes[2] + self.modes[3]
	}

	#[must_use]
	/// # Tiles.
	///
	/// Return the number of tiles the given plane (`0` for luma, `1` and `2`
	/// for chroma) was split into, padding included.
	pub fn tiles(&self, plane: usize) -> usize {
		self.tiles.get(plane).copied().unwrap_or(0)
	}

	#[must_use]
	/// # Total Tiles.
	pub const fn total_tiles(&self) -> usize {
		self.tiles[0] + self.tiles[1] + self.tiles[2]
	}
}



/// # Compress.
///
/// Run an image through the block-transform pipeline for the given profile
/// and quality, returning the reconstructed RGB image. The output always has
/// the same dimensions as the input.
///
/// Quality may be any integer (or integer string) between `1` and `100`.
///
/// ## Examples
///
/// ```
/// use mosaic_core::{ColorKind, Input, Profile};
///
/// let px = vec![200_u8; 16 * 16 * 3];
/// let input = Input::new(&px, 16, 16, ColorKind::Rgb);
/// let out = mosaic_core::compress(Some(&input), Profile::Webp, 90).unwrap();
/// assert_eq!((out.width(), out.height()), (16, 16));
/// ```
///
/// ## Errors
///
/// Bad input or quality values are rejected as [`MosaicError::InvalidInput`]
/// before any work begins. Anything that goes wrong afterward is returned as
/// [`MosaicError::CompressionFailure`].
pub fn compress<Q>(input: Option<&Input<'_>>, profile: Profile, quality: Q)
-> Result<Image, MosaicError>
where Q: TryInto<Quality> {
	compress_with_stats(input, profile, quality).map(|(img, _)| img)
}

/// # Compress (With Stats).
///
/// Same as [`compress`], but also return a [`Stats`] summary of the tiles
/// and prediction modes.
///
/// ## Errors
///
/// See [`compress`].
pub fn compress_with_stats<Q>(input: Option<&Input<'_>>, profile: Profile, quality: Q)
-> Result<(Image, Stats), MosaicError>
where Q: TryInto<Quality> {
	let (img, quality) = validate(input, quality)?;
	compress_image(&img, profile, quality)
}

/// # Compress (Pre-Validated).
///
/// Same as [`compress_with_stats`], but for an [`Image`] that has already
/// been through [`validate`](crate::validate). This lets callers running
/// several profiles against one source validate it just once.
///
/// ## Errors
///
/// Returns [`MosaicError::CompressionFailure`] if any pipeline stage fails.
pub fn compress_image(img: &Image, profile: Profile, quality: Quality)
-> Result<(Image, Stats), MosaicError> {
	let space = profile.color_space();
	let [a, b, c] = space.split(img);

	let mut stats = Stats::default();
	let planes = [
		compress_plane(&a, 0, profile, quality, &mut stats)?,
		compress_plane(&b, 1, profile, quality, &mut stats)?,
		compress_plane(&c, 2, profile, quality, &mut stats)?,
	];

	let out = space.merge(&planes)?;
	Ok((out, stats))
}



#[allow(clippy::integer_division)] // Tile coordinates.
/// # Compress Plane.
fn compress_plane(
	plane: &Plane,
	idx: usize,
	profile: Profile,
	quality: Quality,
	stats: &mut Stats,
) -> Result<Plane, MosaicError> {
	let size = profile.tile_size(idx);
	let matrix = QuantMatrix::new(quality, size, idx != 0);
	let padded = plane.pad(size, profile.padding());
	let cols = padded.width() / size;
	let predicts = profile.predicts();

	let coded = padded.tiles(size)
		.par_iter()
		.enumerate()
		.map(|(i, tile)| -> Result<(Tile, Option<PredictionMode>), MosaicError> {
			if predicts {
				let (top, left) = predict::edges(&padded, (i % cols) * size, (i / cols) * size, size);
				let p = Prediction::select(tile, &top, &left)?;
				let residual = code_tile(p.residual(), &matrix)?;
				Ok((p.reconstruct(&residual)?, Some(p.mode())))
			}
			else { Ok((code_tile(tile, &matrix)?, None)) }
		})
		.collect::<Result<Vec<_>, MosaicError>>()?;

	stats.tiles[idx] = coded.len();
	let tiles: Vec<Tile> = coded.into_iter()
		.map(|(tile, mode)| {
			if let Some(mode) = mode { stats.modes[mode.index()] += 1; }
			tile
		})
		.collect();

	let mut out = Plane::reassemble(&tiles, plane.width(), plane.height(), size)?;
	out.clamp();
	Ok(out)
}

/// # Code Tile.
///
/// Run one tile through the lossy transform round trip.
fn code_tile(tile: &Tile, matrix: &QuantMatrix) -> Result<Tile, MosaicError> {
	let coeffs = dct::forward(tile)?;
	let ints = matrix.quantize(&coeffs)?;
	dct::inverse(&matrix.dequantize(&ints)?)
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		ColorKind,
		InputIssue,
	};

	/// # Noisy Test Image.
	fn noisy(width: usize, height: usize) -> Vec<u8> {
		let mut seed: u32 = 0xDEAD_BEEF;
		(0..width * height * 3)
			.map(|_| {
				seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
				(seed >> 16).to_le_bytes()[0]
			})
			.collect()
	}

	/// # Solid Test Image.
	fn solid(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
		rgb.repeat(width * height)
	}

	#[test]
	fn t_dimensions() {
		for (w, h) in [(1, 1), (3, 5), (8, 8), (17, 9), (33, 20), (16, 48)] {
			let px = noisy(w, h);
			let input = Input::new(&px, w, h, ColorKind::Rgb);
			for profile in Profile::ALL {
				let out = compress(Some(&input), profile, 75).expect("Compression failed.");
				assert_eq!((out.width(), out.height()), (w, h), "{profile}");
				assert_eq!(out.len(), w * h * 3);
			}
		}
	}

	#[test]
	fn t_validation_boundary() {
		let px = solid(10, 10, [10, 20, 30]);
		let input = Input::new(&px, 10, 10, ColorKind::Rgb);
		for profile in Profile::ALL {
			assert_eq!(
				compress(None, profile, 85).map(|_| ()),
				Err(MosaicError::InvalidInput(InputIssue::NoImage)),
			);
			for q in [0, 101] {
				assert_eq!(
					compress(Some(&input), profile, q).map(|_| ()),
					Err(MosaicError::InvalidInput(InputIssue::Quality)),
				);
			}
			assert!(compress(Some(&input), profile, 1).is_ok());
			assert!(compress(Some(&input), profile, 100).is_ok());
		}
	}

	#[test]
	fn t_every_quality() {
		// Everything comes back as bytes, but make sure no quality trips over
		// a non-finite value or a bad shape on the way there.
		let px = noisy(20, 12);
		let input = Input::new(&px, 20, 12, ColorKind::Rgb);
		for profile in Profile::ALL {
			for q in 1..=100_u8 {
				let out = compress(Some(&input), profile, q);
				assert!(out.is_ok(), "{profile} {q}");
			}
		}
	}

	#[test]
	fn t_solid_red() {
		let px = solid(100, 100, [255, 0, 0]);
		let input = Input::new(&px, 100, 100, ColorKind::Rgb);
		let src = Image::from_parts(px.clone(), 100, 100).expect("Bad image.");

		let hi = compress(Some(&input), Profile::Jpeg, 85).expect("Compression failed.");
		assert_eq!((hi.width(), hi.height()), (100, 100));
		let hi_diff = src.mean_abs_diff(&hi).expect("Size mismatch.");
		assert!(hi_diff < 10.0, "{hi_diff}");

		let lo = compress(Some(&input), Profile::Jpeg, 1).expect("Compression failed.");
		assert_eq!((lo.width(), lo.height()), (100, 100));
		let lo_diff = src.mean_abs_diff(&lo).expect("Size mismatch.");
		assert!(hi_diff < lo_diff, "{hi_diff} vs {lo_diff}");
	}

	#[test]
	fn t_solid_webp() {
		// Flat tiles after the first are predicted exactly from their
		// neighbors, leaving nothing to lose.
		let px = solid(100, 100, [200, 60, 40]);
		let input = Input::new(&px, 100, 100, ColorKind::Rgb);
		let src = Image::from_parts(px.clone(), 100, 100).expect("Bad image.");

		let (out, stats) = compress_with_stats(Some(&input), Profile::Webp, 85)
			.expect("Compression failed.");
		let diff = src.mean_abs_diff(&out).expect("Size mismatch.");
		assert!(diff < 10.0, "{diff}");
		assert!(stats.mode(PredictionMode::Horizontal) > 0);
	}

	#[test]
	fn t_quality_trend() {
		// Higher qualities should get closer to the source, at least on
		// average.
		let px = noisy(48, 48);
		let input = Input::new(&px, 48, 48, ColorKind::Rgb);
		let src = Image::from_parts(px.clone(), 48, 48).expect("Bad image.");
		for profile in Profile::ALL {
			let diff = |q: u8| {
				let out = compress(Some(&input), profile, q).expect("Compression failed.");
				src.mean_abs_diff(&out).expect("Size mismatch.")
			};
			let (q10, q50, q100) = (diff(10), diff(50), diff(100));
			assert!(q100 < q50 && q50 < q10, "{profile}: {q10} {q50} {q100}");
		}
	}

	#[test]
	fn t_stats() {
		let px = noisy(100, 100);
		let input = Input::new(&px, 100, 100, ColorKind::Rgb);

		let (_, stats) = compress_with_stats(Some(&input), Profile::Jpeg, 85)
			.expect("Compression failed.");
		assert_eq!(stats.tiles(0), 169);
		assert_eq!(stats.tiles(1), 169);
		assert_eq!(stats.tiles(2), 169);
		assert_eq!(stats.tiles(3), 0);
		assert_eq!(stats.predicted(), 0);

		let (_, stats) = compress_with_stats(Some(&input), Profile::Webp, 85)
			.expect("Compression failed.");
		assert_eq!(stats.tiles(0), 49);
		assert_eq!(stats.tiles(1), 169);
		assert_eq!(stats.tiles(2), 169);
		assert_eq!(stats.total_tiles(), 49 + 169 * 2);
		assert_eq!(stats.predicted(), stats.total_tiles());
		let sum: usize = PredictionMode::ALL.iter().map(|&m| stats.mode(m)).sum();
		assert_eq!(sum, stats.predicted());
	}

	#[test]
	fn t_compress_image() {
		let px = noisy(21, 13);
		let input = Input::new(&px, 21, 13, ColorKind::Rgb);
		let (src, quality) = validate(Some(&input), 70).expect("Validation failed.");
		for profile in Profile::ALL {
			let a = compress_with_stats(Some(&input), profile, 70).expect("Compression failed.");
			let b = compress_image(&src, profile, quality).expect("Compression failed.");
			assert_eq!(a, b);
		}

		// The source is left alone.
		assert_eq!(&*src, px.as_slice());
	}

	#[test]
	fn t_deterministic() {
		let px = noisy(37, 29);
		let input = Input::new(&px, 37, 29, ColorKind::Rgb);
		for profile in Profile::ALL {
			let a = compress_with_stats(Some(&input), profile, 60).expect("Compression failed.");
			let b = compress_with_stats(Some(&input), profile, 60).expect("Compression failed.");
			assert_eq!(a, b);
		}
	}

	#[test]
	fn t_grey_input() {
		let px = vec![128_u8; 24 * 24];
		let input = Input::new(&px, 24, 24, ColorKind::Grey);
		for profile in Profile::ALL {
			let out = compress(Some(&input), profile, 90).expect("Compression failed.");
			assert_eq!(out.len(), 24 * 24 * 3);
			assert!(out.iter().all(|&v| v.abs_diff(128) <= 3));
		}
	}
}
