/*!
# `Mosaic` - Profile
*/

use crate::{
	ColorSpace,
	InputIssue,
	MosaicError,
	Padding,
};
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
/// # Compression Profile.
///
/// A profile is just a bundle of settings for the one generic pipeline:
/// which color space to work in, how big the tiles are, how the plane edges
/// get padded, and whether or not spatial prediction runs.
///
/// | Profile | Color | Luma | Chroma | Padding | Prediction |
/// | ------- | ----- | ---- | ------ | ------- | ---------- |
/// | JPEG | `YCbCr` | 8x8 | 8x8 | Zero | No |
/// | WebP | YUV | 16x16 | 8x8 | Edge | Yes |
pub enum Profile {
	/// # JPEG-like.
	Jpeg,

	/// # WebP-like.
	Webp,
}

impl AsRef<str> for Profile {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for Profile {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<&str> for Profile {
	type Error = MosaicError;

	/// # From Format Name.
	///
	/// This accepts the format names "jpeg" (or "jpg") and "webp",
	/// case-insensitively, with surrounding whitespace ignored.
	fn try_from(src: &str) -> Result<Self, Self::Error> {
		let src = src.trim();
		if src.eq_ignore_ascii_case("jpeg") || src.eq_ignore_ascii_case("jpg") {
			Ok(Self::Jpeg)
		}
		else if src.eq_ignore_ascii_case("webp") { Ok(Self::Webp) }
		else { Err(MosaicError::InvalidInput(InputIssue::Profile)) }
	}
}

/// ## Getters.
impl Profile {
	/// # All Profiles.
	pub const ALL: [Self; 2] = [Self::Jpeg, Self::Webp];

	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Jpeg => "JPEG",
			Self::Webp => "WebP",
		}
	}

	#[must_use]
	/// # Format Name.
	///
	/// The lowercase name, as accepted by `TryFrom<&str>`.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Jpeg => "jpeg",
			Self::Webp => "webp",
		}
	}

	#[must_use]
	/// # Color Space.
	pub const fn color_space(self) -> ColorSpace {
		match self {
			Self::Jpeg => ColorSpace::YCbCr,
			Self::Webp => ColorSpace::Yuv,
		}
	}

	#[must_use]
	/// # Padding Mode.
	pub const fn padding(self) -> Padding {
		match self {
			Self::Jpeg => Padding::Zero,
			Self::Webp => Padding::Edge,
		}
	}

	#[must_use]
	/// # Uses Prediction?
	pub const fn predicts(self) -> bool { matches!(self, Self::Webp) }

	#[must_use]
	/// # Tile Size.
	///
	/// Return the tile size for the given plane. Plane `0` is luma; `1` and
	/// `2` are chroma.
	pub const fn tile_size(self, plane: usize) -> usize {
		match self {
			Self::Jpeg => 8,
			Self::Webp => if plane == 0 { 16 } else { 8 },
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_parse() {
		assert_eq!(Profile::try_from("jpeg"), Ok(Profile::Jpeg));
		assert_eq!(Profile::try_from(" JPG "), Ok(Profile::Jpeg));
		assert_eq!(Profile::try_from("WebP"), Ok(Profile::Webp));
		assert_eq!(
			Profile::try_from("png"),
			Err(MosaicError::InvalidInput(InputIssue::Profile)),
		);

		for p in Profile::ALL {
			assert_eq!(Profile::try_from(p.name()), Ok(p));
		}
	}

	#[test]
	fn t_settings() {
		assert_eq!(Profile::Jpeg.tile_size(0), 8);
		assert_eq!(Profile::Jpeg.tile_size(2), 8);
		assert_eq!(Profile::Webp.tile_size(0), 16);
		assert_eq!(Profile::Webp.tile_size(1), 8);
		assert_eq!(Profile::Webp.tile_size(2), 8);

		assert!(! Profile::Jpeg.predicts());
		assert!(Profile::Webp.predicts());
		assert_eq!(Profile::Jpeg.padding(), Padding::Zero);
		assert_eq!(Profile::Webp.padding(), Padding::Edge);
	}
}
