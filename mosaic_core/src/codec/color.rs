/*!
# `Mosaic` - Color Space Transforms

Both spaces are a 3x3 linear transform plus a fixed chroma offset. The
inverse matrices are computed from the forward coefficients at compile time
so the two directions can never drift apart.
*/

use crate::{
	Failure,
	Image,
	MosaicError,
	Plane,
};



/// # 3x3 Matrix.
type Matrix = [[f32; 3]; 3];

/// # RGB to `YCbCr` (JPEG).
const YCBCR: Matrix = [
	[ 0.299,     0.587,     0.114    ],
	[-0.168_935, -0.331_665, 0.500_59 ],
	[ 0.499_813, -0.418_531, -0.081_282],
];

/// # `YCbCr` to RGB (JPEG).
const YCBCR_INV: Matrix = invert(&YCBCR);

/// # `YCbCr` Chroma Offset.
const YCBCR_OFFSET: f32 = 128.0;

/// # RGB to YUV (WebP).
const YUV: Matrix = [
	[ 0.299,    0.587,    0.114   ],
	[-0.147_13, -0.288_86, 0.436   ],
	[ 0.615,    -0.514_99, -0.100_01],
];

/// # YUV to RGB (WebP).
const YUV_INV: Matrix = invert(&YUV);

/// # YUV Chroma Offset.
///
/// YUV chroma is centered at `0.5` on a `0..=1` scale, which works out to
/// `127.5` once rescaled to `0..=255`.
const YUV_OFFSET: f32 = 0.5 * 255.0;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Color Space.
pub enum ColorSpace {
	/// # `YCbCr` (JPEG).
	YCbCr,

	/// # YUV (WebP).
	Yuv,
}

/// ## Pixel Conversion.
impl ColorSpace {
	/// # Matrices and Offset.
	const fn parts(self) -> (&'static Matrix, &'static Matrix, f32) {
		match self {
			Self::YCbCr => (&YCBCR, &YCBCR_INV, YCBCR_OFFSET),
			Self::Yuv => (&YUV, &YUV_INV, YUV_OFFSET),
		}
	}

	#[must_use]
	/// # RGB to Luma/Chroma.
	///
	/// Convert a single RGB pixel (`0..=255`) to this color space. The
	/// result is clamped to `0..=255`.
	pub fn forward(self, rgb: [f32; 3]) -> [f32; 3] {
		let (m, _, offset) = self.parts();
		let out = mul(m, rgb);
		[
			clamp(out[0]),
			clamp(out[1] + offset),
			clamp(out[2] + offset),
		]
	}

	#[must_use]
	/// # Luma/Chroma to RGB.
	///
	/// Convert a single pixel from this color space back to RGB. The result
	/// is clamped to `0..=255`.
	pub fn inverse(self, px: [f32; 3]) -> [f32; 3] {
		let (_, m, offset) = self.parts();
		mul(m, [px[0], px[1] - offset, px[2] - offset]).map(clamp)
	}
}

/// ## Image Conversion.
impl ColorSpace {
	#[must_use]
	/// # Split.
	///
	/// Convert an RGB image to this color space, returning one plane per
	/// channel: luma first, then the two chroma planes.
	pub fn split(self, img: &Image) -> [Plane; 3] {
		let len = img.width() * img.height();
		let mut planes = [
			Vec::with_capacity(len),
			Vec::with_capacity(len),
			Vec::with_capacity(len),
		];

		for px in img.chunks_exact(3) {
			let out = self.forward([
				f32::from(px[0]),
				f32::from(px[1]),
				f32::from(px[2]),
			]);
			for (p, v) in planes.iter_mut().zip(out) { p.push(v); }
		}

		planes.map(|p| Plane::from_parts(p, img.width(), img.height()))
	}

	/// # Merge.
	///
	/// Convert three planes in this color space back into an RGB image.
	///
	/// ## Errors
	///
	/// The planes must all share the same non-zero dimensions.
	pub fn merge(self, planes: &[Plane; 3]) -> Result<Image, MosaicError> {
		let width = planes[0].width();
		let height = planes[0].height();
		if
			width == 0 || height == 0 ||
			planes.iter().any(|p| p.width() != width || p.height() != height)
		{
			return Err(Failure::PlaneShape.into());
		}

		let [a, b, c] = planes;
		let pixels: Vec<u8> = a.iter()
			.zip(b.iter())
			.zip(c.iter())
			.fold(Vec::with_capacity(width * height * 3), |mut acc, ((&a, &b), &c)| {
				acc.extend_from_slice(&self.inverse([a, b, c]).map(to_u8));
				acc
			});

		Image::from_parts(pixels, width, height)
	}
}



#[must_use]
/// # Clamp.
///
/// Pin a value to the `0..=255` range.
pub(crate) fn clamp(v: f32) -> f32 { v.clamp(0.0, 255.0) }

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Values are in range.
#[must_use]
/// # To `u8`.
///
/// Round and clamp a float sample to a byte.
pub(crate) fn to_u8(v: f32) -> u8 { clamp(v.round()) as u8 }

/// # Matrix × Vector.
fn mul(m: &Matrix, v: [f32; 3]) -> [f32; 3] {
	[
		m[0][2].mul_add(v[2], m[0][1].mul_add(v[1], m[0][0] * v[0])),
		m[1][2].mul_add(v[2], m[1][1].mul_add(v[1], m[1][0] * v[0])),
		m[2][2].mul_add(v[2], m[2][1].mul_add(v[1], m[2][0] * v[0])),
	]
}

/// # Invert Matrix.
///
/// This is the adjugate over the determinant. None of the color matrices
/// are singular.
const fn invert(m: &Matrix) -> Matrix {
	let c00 = m[1][1] * m[2][2] - m[1][2] * m[2][1];
	let c01 = m[1][2] * m[2][0] - m[1][0] * m[2][2];
	let c02 = m[1][0] * m[2][1] - m[1][1] * m[2][0];
	let det = m[0][0] * c00 + m[0][1] * c01 + m[0][2] * c02;

	[
		[
			c00 / det,
			(m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
			(m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
		],
		[
			c01 / det,
			(m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
			(m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
		],
		[
			c02 / det,
			(m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
			(m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
		],
	]
}
