/*!
# `Mosaic` - Image
*/

use crate::{
	Failure,
	MosaicError,
};
use std::{
	fmt,
	ops::Deref,
};



#[derive(Clone, Eq, PartialEq)]
/// # RGB Image.
///
/// This is a validated, 3-byte-per-pixel RGB buffer. It is what
/// [`validate`](crate::validate) produces and what
/// [`compress`](crate::compress) returns. The pixels cannot be changed once
/// set.
pub struct Image {
	/// # Pixels.
	pixels: Vec<u8>,

	/// # Width.
	width: usize,

	/// # Height.
	height: usize,
}

impl AsRef<[u8]> for Image {
	#[inline]
	fn as_ref(&self) -> &[u8] { self }
}

impl fmt::Debug for Image {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Image")
		.field("width", &self.width)
		.field("height", &self.height)
		.finish_non_exhaustive()
	}
}

impl Deref for Image {
	type Target = [u8];

	#[inline]
	fn deref(&self) -> &Self::Target { &self.pixels }
}

impl Image {
	/// # From Parts.
	///
	/// ## Errors
	///
	/// The dimensions must be non-zero and the buffer must hold exactly three
	/// bytes per pixel.
	pub(crate) fn from_parts(pixels: Vec<u8>, width: usize, height: usize)
	-> Result<Self, MosaicError> {
		if
			width != 0 &&
			height != 0 &&
			width.checked_mul(height)
				.and_then(|n| n.checked_mul(3))
				.is_some_and(|n| n == pixels.len())
		{
			Ok(Self { pixels, width, height })
		}
		else { Err(Failure::PlaneShape.into()) }
	}

	#[inline]
	#[must_use]
	/// # Into Pixels.
	///
	/// Consume the image, returning the raw RGB buffer.
	pub fn into_pixels(self) -> Vec<u8> { self.pixels }
}

/// ## Getters.
impl Image {
	#[inline]
	#[must_use]
	/// # Height.
	pub const fn height(&self) -> usize { self.height }

	#[must_use]
	/// # Pixel.
	///
	/// Return the RGB value at `(x, y)`, if it exists.
	pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
		if x < self.width && y < self.height {
			let idx = (y * self.width + x) * 3;
			Some([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
		}
		else { None }
	}

	#[inline]
	#[must_use]
	/// # Width.
	pub const fn width(&self) -> usize { self.width }
}

/// ## Comparison.
impl Image {
	#[allow(clippy::cast_precision_loss)] // Close enough.
	#[must_use]
	/// # Mean Absolute Difference.
	///
	/// Return the average per-channel difference between two images of the
	/// same size, or `None` if their dimensions differ.
	pub fn mean_abs_diff(&self, other: &Self) -> Option<f64> {
		if self.width != other.width || self.height != other.height { return None; }

		let total: u64 = self.pixels.iter()
			.zip(&other.pixels)
			.map(|(a, b)| u64::from(a.abs_diff(*b)))
			.sum();
		Some(total as f64 / self.pixels.len() as f64)
	}

	#[allow(clippy::cast_precision_loss)] // Close enough.
	#[must_use]
	/// # PSNR.
	///
	/// Return the peak signal-to-noise ratio (in decibels) between two images
	/// of the same size, or `None` if their dimensions differ. Identical
	/// images return infinity.
	pub fn psnr(&self, other: &Self) -> Option<f64> {
		if self.width != other.width || self.height != other.height { return None; }

		let total: u64 = self.pixels.iter()
			.zip(&other.pixels)
			.map(|(a, b)| u64::from(a.abs_diff(*b)).pow(2))
			.sum();
		if total == 0 { return Some(f64::INFINITY); }

		let mse = total as f64 / self.pixels.len() as f64;
		Some(10.0 * (255.0_f64 * 255.0 / mse).log10())
	}
}

#[cfg(feature = "png")]
/// ## Encoding.
impl Image {
	/// # To PNG.
	///
	/// Losslessly encode the image as an RGB PNG.
	///
	/// ## Errors
	///
	/// Returns an error if encoding fails.
	pub fn to_png(&self) -> Result<Vec<u8>, MosaicError> {
		crate::kind::png::encode_rgb(&self.pixels, self.width, self.height)
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_from_parts() {
		assert!(Image::from_parts(vec![0; 12], 2, 2).is_ok());
		assert!(Image::from_parts(vec![0; 11], 2, 2).is_err());
		assert!(Image::from_parts(Vec::new(), 0, 0).is_err());
		assert!(Image::from_parts(vec![0; 4 * 3], usize::MAX, 2).is_err());
	}

	#[test]
	fn t_pixel() {
		let img = Image::from_parts((0..12).collect(), 2, 2).expect("Bad image.");
		assert_eq!(img.pixel(0, 0), Some([0, 1, 2]));
		assert_eq!(img.pixel(1, 1), Some([9, 10, 11]));
		assert_eq!(img.pixel(2, 0), None);
		assert_eq!(img.pixel(0, 2), None);
	}

	#[test]
	fn t_compare() {
		let a = Image::from_parts(vec![10; 12], 2, 2).expect("Bad image.");
		let b = Image::from_parts(vec![14; 12], 2, 2).expect("Bad image.");
		let c = Image::from_parts(vec![10; 6], 2, 1).expect("Bad image.");

		assert_eq!(a.mean_abs_diff(&a), Some(0.0));
		assert_eq!(a.mean_abs_diff(&b), Some(4.0));
		assert_eq!(a.mean_abs_diff(&c), None);

		assert_eq!(a.psnr(&a), Some(f64::INFINITY));
		let psnr = a.psnr(&b).expect("Size mismatch.");
		assert!((psnr - 10.0 * (65_025.0_f64 / 16.0).log10()).abs() < 1e-9);
		assert_eq!(a.psnr(&c), None);
	}

	#[cfg(feature = "png")]
	#[test]
	fn t_to_png() {
		let img = Image::from_parts(vec![1, 2, 3, 4, 5, 6], 2, 1).expect("Bad image.");
		let raw = img.to_png().expect("Encode failed.");
		let input = crate::Input::try_from(raw.as_slice()).expect("Decode failed.");
		assert_eq!((input.width(), input.height()), (2, 1));
		assert_eq!(&input[..4], &[1, 2, 3, 255]);
	}
}
