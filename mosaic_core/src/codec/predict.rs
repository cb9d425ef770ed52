/*!
# `Mosaic` - Spatial Prediction

Each tile in the WebP-like profile is predicted from the row of samples just
above it and the column just to its left, using whichever of four simple
extrapolations fits best. Only the residual is transform coded.

The edges are read from the padded _source_ plane rather than from already
reconstructed tiles, so every tile can be handled independently.
*/

use crate::{
	Failure,
	MosaicError,
	Plane,
	Tile,
};
use std::fmt;
use super::color::clamp;



#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
/// # Prediction Mode.
///
/// When two modes fit equally well, the one listed first wins.
pub enum PredictionMode {
	/// # Horizontal.
	///
	/// Each row repeats the sample to its left.
	Horizontal,

	/// # Vertical.
	///
	/// Each column repeats the sample above it.
	Vertical,

	/// # DC.
	///
	/// Every sample is the mean of both edges.
	Dc,

	/// # True Motion.
	///
	/// `left + top - corner`, clipped to `0..=255`.
	TrueMotion,
}

impl fmt::Display for PredictionMode {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PredictionMode {
	/// # All Modes (In Tie-Break Order).
	pub const ALL: [Self; 4] = [Self::Horizontal, Self::Vertical, Self::Dc, Self::TrueMotion];

	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Horizontal => "H",
			Self::Vertical => "V",
			Self::Dc => "DC",
			Self::TrueMotion => "TM",
		}
	}

	#[must_use]
	/// # Index.
	///
	/// The position within [`PredictionMode::ALL`].
	pub const fn index(self) -> usize {
		match self {
			Self::Horizontal => 0,
			Self::Vertical => 1,
			Self::Dc => 2,
			Self::TrueMotion => 3,
		}
	}

	#[must_use]
	/// # Pick Mode.
	///
	/// Given the errors for each mode (in [`PredictionMode::ALL`] order),
	/// return the mode with the smallest one. Ties go to whichever comes
	/// first.
	pub fn pick(errors: [f32; 4]) -> Self {
		let mut best = 0;
		for (idx, e) in errors.iter().enumerate().skip(1) {
			if *e < errors[best] { best = idx; }
		}
		Self::ALL[best]
	}

	#[allow(clippy::cast_precision_loss)] // Edges are short.
	#[must_use]
	/// # Predict.
	///
	/// Build the candidate tile for this mode. Both edges must hold `size`
	/// samples; missing values are treated as zero.
	pub fn predict(self, top: &[f32], left: &[f32], size: usize) -> Tile {
		let t = |c: usize| top.get(c).copied().unwrap_or(0.0);
		let l = |r: usize| left.get(r).copied().unwrap_or(0.0);

		let mut data = Vec::with_capacity(size * size);
		match self {
			Self::Horizontal => for r in 0..size {
				data.resize(data.len() + size, l(r));
			},
			Self::Vertical => for _ in 0..size {
				data.extend((0..size).map(t));
			},
			Self::Dc => {
				let sum: f32 = (0..size).map(|i| t(i) + l(i)).sum();
				let mean = if size == 0 { 0.0 } else { sum / (2 * size) as f32 };
				data.resize(size * size, mean);
			},
			Self::TrueMotion => {
				let corner = t(0);
				for r in 0..size {
					let left = l(r);
					data.extend((0..size).map(|c| clamp(left + t(c) - corner)));
				}
			},
		}

		Tile::from_parts(data, size)
	}
}



#[derive(Debug, Clone, PartialEq)]
/// # Prediction.
///
/// The winning mode for one tile, along with its predicted samples and the
/// residual left over.
pub struct Prediction {
	/// # Mode.
	mode: PredictionMode,

	/// # Predicted Samples.
	predicted: Tile,

	/// # Residual.
	residual: Tile,
}

impl Prediction {
	/// # Select.
	///
	/// Try all four modes against the tile and keep the one with the lowest
	/// sum of absolute differences.
	///
	/// ## Errors
	///
	/// Each edge must have exactly one sample per row/column of the tile.
	pub fn select(tile: &Tile, top: &[f32], left: &[f32]) -> Result<Self, MosaicError> {
		let size = tile.size();
		if top.len() != size || left.len() != size { return Err(Failure::TileShape.into()); }

		let candidates = PredictionMode::ALL.map(|m| m.predict(top, left, size));
		let errors = candidates.each_ref().map(|c| sad(tile, c));
		let mode = PredictionMode::pick(errors);
		let [h, v, dc, tm] = candidates;
		let predicted = match mode {
			PredictionMode::Horizontal => h,
			PredictionMode::Vertical => v,
			PredictionMode::Dc => dc,
			PredictionMode::TrueMotion => tm,
		};

		let residual = tile.iter()
			.zip(predicted.iter())
			.map(|(a, b)| a - b)
			.collect();

		Ok(Self {
			mode,
			predicted,
			residual: Tile::from_parts(residual, size),
		})
	}

	#[inline]
	#[must_use]
	/// # Mode.
	pub const fn mode(&self) -> PredictionMode { self.mode }

	#[inline]
	#[must_use]
	/// # Predicted Samples.
	pub const fn predicted(&self) -> &Tile { &self.predicted }

	#[inline]
	#[must_use]
	/// # Residual.
	pub const fn residual(&self) -> &Tile { &self.residual }

	/// # Reconstruct.
	///
	/// Add the prediction back to a (lossy) residual, clipping the result to
	/// `0..=255`.
	///
	/// ## Errors
	///
	/// The residual must be the same size as the prediction.
	pub fn reconstruct(&self, residual: &Tile) -> Result<Tile, MosaicError> {
		if residual.size() != self.predicted.size() || residual.len() != self.predicted.len() {
			return Err(Failure::TileShape.into());
		}

		let data = self.predicted.iter()
			.zip(residual.iter())
			.map(|(p, r)| clamp(p + r))
			.collect();
		Ok(Tile::from_parts(data, self.predicted.size()))
	}
}



/// # Edges.
///
/// Return the row just above and the column just left of the tile whose
/// top-left corner is at `(x, y)`. Edges that fall off the plane are zero.
pub(crate) fn edges(plane: &Plane, x: usize, y: usize, size: usize) -> (Vec<f32>, Vec<f32>) {
	let top: Vec<f32> =
		if let Some(above) = y.checked_sub(1) {
			(x..x + size).map(|c| plane.get(c, above).unwrap_or(0.0)).collect()
		}
		else { vec![0.0; size] };

	let left: Vec<f32> =
		if let Some(before) = x.checked_sub(1) {
			(y..y + size).map(|r| plane.get(before, r).unwrap_or(0.0)).collect()
		}
		else { vec![0.0; size] };

	(top, left)
}

/// # Sum of Absolute Differences.
fn sad(a: &Tile, b: &Tile) -> f32 {
	a.iter().zip(b.iter()).map(|(a, b)| (a - b).abs()).sum()
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_pick() {
		assert_eq!(PredictionMode::pick([5.0, 3.0, 4.0, 9.0]), PredictionMode::Vertical);
		assert_eq!(PredictionMode::pick([8.0, 8.0, 8.0, 1.0]), PredictionMode::TrueMotion);

		// Ties.
		assert_eq!(PredictionMode::pick([1.0, 1.0, 1.0, 1.0]), PredictionMode::Horizontal);
		assert_eq!(PredictionMode::pick([4.0, 2.0, 2.0, 2.0]), PredictionMode::Vertical);
		assert_eq!(PredictionMode::pick([4.0, 4.0, 2.0, 2.0]), PredictionMode::Dc);
	}

	#[test]
	fn t_candidates() {
		let top = [10.0, 20.0];
		let left = [30.0, 40.0];

		let h = PredictionMode::Horizontal.predict(&top, &left, 2);
		assert_eq!(&*h, &[30.0, 30.0, 40.0, 40.0]);

		let v = PredictionMode::Vertical.predict(&top, &left, 2);
		assert_eq!(&*v, &[10.0, 20.0, 10.0, 20.0]);

		let dc = PredictionMode::Dc.predict(&top, &left, 2);
		assert_eq!(&*dc, &[25.0; 4]);

		let tm = PredictionMode::TrueMotion.predict(&top, &left, 2);
		assert_eq!(&*tm, &[30.0, 40.0, 40.0, 50.0]);

		// True motion clips.
		let tm = PredictionMode::TrueMotion.predict(&[0.0, 200.0], &[250.0, 0.0], 2);
		assert_eq!(&*tm, &[250.0, 255.0, 0.0, 200.0]);
	}

	#[test]
	fn t_select() {
		let top = [1.0, 2.0, 3.0, 4.0];
		let left = [50.0, 60.0, 70.0, 80.0];

		// Vertical stripes.
		let tile = PredictionMode::Vertical.predict(&top, &left, 4);
		let p = Prediction::select(&tile, &top, &left).expect("Select failed.");
		assert_eq!(p.mode(), PredictionMode::Vertical);
		assert!(p.residual().iter().all(|&v| v == 0.0));

		// Horizontal stripes.
		let tile = PredictionMode::Horizontal.predict(&top, &left, 4);
		let p = Prediction::select(&tile, &top, &left).expect("Select failed.");
		assert_eq!(p.mode(), PredictionMode::Horizontal);

		// All-zero edges make every mode predict zero, so the first wins.
		let zero = [0.0; 4];
		let tile = Tile::new(vec![9.0; 16], 4).expect("Bad tile.");
		let p = Prediction::select(&tile, &zero, &zero).expect("Select failed.");
		assert_eq!(p.mode(), PredictionMode::Horizontal);
		assert!(p.residual().iter().all(|&v| v == 9.0));

		// Bad edges.
		assert_eq!(
			Prediction::select(&tile, &top[..3], &left),
			Err(MosaicError::CompressionFailure(Failure::TileShape)),
		);
	}

	#[test]
	fn t_reconstruct() {
		let top = [200.0; 2];
		let left = [200.0; 2];
		let tile = Tile::new(vec![250.0, 10.0, 200.0, 200.0], 2).expect("Bad tile.");
		let p = Prediction::select(&tile, &top, &left).expect("Select failed.");

		// The exact residual gets the tile back.
		let back = p.reconstruct(p.residual()).expect("Reconstruct failed.");
		assert_eq!(back, tile);

		// Out-of-range results are clipped.
		let big = Tile::new(vec![100.0, -300.0, 0.0, 0.0], 2).expect("Bad tile.");
		let back = p.reconstruct(&big).expect("Reconstruct failed.");
		assert_eq!(&*back, &[255.0, 0.0, 200.0, 200.0]);

		let wrong = Tile::new(vec![0.0; 9], 3).expect("Bad tile.");
		assert!(p.reconstruct(&wrong).is_err());
	}

	#[test]
	fn t_edges() {
		let data = (0..16_u8).map(f32::from).collect();
		let plane = Plane::new(data, 4, 4).expect("Bad plane.");

		// Top-left tile has nothing to lean on.
		assert_eq!(edges(&plane, 0, 0, 2), (vec![0.0; 2], vec![0.0; 2]));

		// Top-right tile has a left edge only.
		assert_eq!(edges(&plane, 2, 0, 2), (vec![0.0; 2], vec![1.0, 5.0]));

		// Bottom-right has both.
		assert_eq!(edges(&plane, 2, 2, 2), (vec![6.0, 7.0], vec![9.0, 13.0]));
	}
}
