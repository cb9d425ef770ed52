/*!
# `Mosaic` - Input Image
*/

use crate::{
	ColorKind,
	SourceKind,
};
use std::{
	borrow::Cow,
	fmt,
	ops::Deref,
};

#[cfg(any(feature = "jpeg", feature = "png"))]
use crate::{
	MosaicError,
	traits::DecoderResult,
};

#[cfg(any(
	all(feature = "jpeg", not(feature = "png")),
	all(feature = "png", not(feature = "jpeg")),
))]
use crate::InputIssue;



#[derive(Clone)]
/// # Input Image.
///
/// This struct holds _decoded_ image data exactly as a caller supplied it:
/// a pixel buffer, its claimed dimensions, and its channel layout (depth).
///
/// Construction does not verify anything. A buffer that is too short, zero
/// dimensions, etc., are all caught by [`validate`](crate::validate), which
/// also coerces the pixels into the canonical 3-byte RGB [`Image`](crate::Image)
/// the pipeline works with.
///
/// Raw JPEG and PNG file bytes can be decoded into an [`Input`] via
/// `TryFrom<&[u8]>`.
///
/// ## Examples
///
/// ```
/// use mosaic_core::{ColorKind, Input};
///
/// // A 2x1 greyscale image.
/// let input = Input::new(&[0_u8, 255], 2, 1, ColorKind::Grey);
/// assert_eq!(input.width(), 2);
/// ```
pub struct Input<'a> {
	/// # Image Pixels.
	pixels: Cow<'a, [u8]>,

	/// # Image Width.
	width: usize,

	/// # Image Height.
	height: usize,

	/// # Color Kind.
	color: ColorKind,

	/// # Color Depth.
	depth: ColorKind,

	/// # Source Kind.
	kind: Option<SourceKind>,
}

impl AsRef<[u8]> for Input<'_> {
	#[inline]
	fn as_ref(&self) -> &[u8] { self }
}

impl fmt::Debug for Input<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Input")
		.field("width", &self.width)
		.field("height", &self.height)
		.field("color", &self.color)
		.field("depth", &self.depth)
		.field("kind", &self.kind)
		.finish_non_exhaustive()
	}
}

impl Deref for Input<'_> {
	type Target = [u8];

	#[inline]
	fn deref(&self) -> &Self::Target { self.pixels.as_ref() }
}

#[cfg(any(feature = "jpeg", feature = "png"))]
impl TryFrom<&[u8]> for Input<'_> {
	type Error = MosaicError;

	fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
		let kind = SourceKind::try_from(src)?;
		let (buf, width, height, color, depth) = match kind {
			SourceKind::Jpeg => decode_jpeg(src)?,
			SourceKind::Png => decode_png(src)?,
		};

		Ok(Self {
			pixels: Cow::Owned(buf),
			width,
			height,
			color,
			depth,
			kind: Some(kind),
		})
	}
}

impl<'a> Input<'a> {
	#[must_use]
	/// # New (Pre-Decoded).
	///
	/// Wrap an already-decoded pixel buffer. The `depth` describes how many
	/// bytes each pixel occupies and what they mean.
	///
	/// The buffer is borrowed; nothing is copied until validation.
	pub fn new(pixels: &'a [u8], width: usize, height: usize, depth: ColorKind) -> Self {
		Self {
			pixels: Cow::Borrowed(pixels),
			width,
			height,
			color: depth,
			depth,
			kind: None,
		}
	}
}

/// ## Getters.
impl Input<'_> {
	#[inline]
	#[must_use]
	/// # Color Kind.
	///
	/// This returns a [`ColorKind`] variant representing the channels actually
	/// used by the image. For pre-decoded buffers, this is simply the depth.
	pub const fn color(&self) -> ColorKind { self.color }

	#[inline]
	#[must_use]
	/// # Depth.
	///
	/// This returns a [`ColorKind`] variant representing the channels used by
	/// the instance's buffer.
	pub const fn depth(&self) -> ColorKind { self.depth }

	#[inline]
	#[must_use]
	/// # Height.
	pub const fn height(&self) -> usize { self.height }

	#[inline]
	#[must_use]
	/// # Source Kind.
	///
	/// This returns the format the image was decoded from, if any.
	pub const fn kind(&self) -> Option<SourceKind> { self.kind }

	#[inline]
	#[must_use]
	/// # Width.
	pub const fn width(&self) -> usize { self.width }
}



#[cfg(feature = "jpeg")]
/// # Decode JPEG.
fn decode_jpeg(raw: &[u8]) -> Result<DecoderResult, MosaicError> {
	use crate::traits::Decoder;
	crate::kind::jpeg::ImageJpeg::decode(raw)
}

#[cfg(all(feature = "png", not(feature = "jpeg")))]
/// # Decode JPEG (Unsupported).
fn decode_jpeg(_raw: &[u8]) -> Result<DecoderResult, MosaicError> {
	Err(InputIssue::Decode.into())
}

#[cfg(feature = "png")]
/// # Decode PNG.
fn decode_png(raw: &[u8]) -> Result<DecoderResult, MosaicError> {
	use crate::traits::Decoder;
	crate::kind::png::ImagePng::decode(raw)
}

#[cfg(all(feature = "jpeg", not(feature = "png")))]
/// # Decode PNG (Unsupported).
fn decode_png(_raw: &[u8]) -> Result<DecoderResult, MosaicError> {
	Err(InputIssue::Decode.into())
}
