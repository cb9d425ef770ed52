/*!
# `Mosaic` - Color Kind
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Color Kind.
///
/// This describes a channel layout. It is used both for the colors actually
/// present in a source and for the layout of the pixel buffer holding them
/// (its "depth").
///
/// The alpha kinds ([`ColorKind::GreyAlpha`] and [`ColorKind::Rgba`]) require
/// at least one alpha value being less than `255`.
///
/// The greyscale kinds ([`ColorKind::Grey`] and [`ColorKind::GreyAlpha`])
/// require that every RGB set have equal R, G, and B values.
pub enum ColorKind {
	/// # Greyscale.
	Grey,
	/// # Greyscale with Alpha.
	GreyAlpha,
	/// # RGB.
	Rgb,
	/// # RGB with Alpha.
	Rgba,
}

impl fmt::Display for ColorKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// # Getters.
impl ColorKind {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Grey => "greyscale",
			Self::GreyAlpha => "greyscale with alpha",
			Self::Rgb => "RGB",
			Self::Rgba => "RGBA",
		}
	}

	#[inline]
	#[must_use]
	/// # Total Channels.
	///
	/// Return the number of channels.
	pub const fn channels(self) -> usize {
		match self {
			Self::Grey => 1,
			Self::GreyAlpha => 2,
			Self::Rgb => 3,
			Self::Rgba => 4,
		}
	}
}

/// # Setters.
impl ColorKind {
	#[must_use]
	/// # From RGBA.
	///
	/// Find out whether the 4-byte pixel slice is using any color or alpha
	/// channels.
	pub fn from_rgba(src: &[u8]) -> Self {
		let mut color: bool = false;
		let mut alpha: bool = false;
		for px in src.chunks_exact(4) {
			if ! color && (px[0] != px[1] || px[0] != px[2]) {
				color = true;
				if alpha { return Self::Rgba; }
			}
			if ! alpha && px[3] != 255 {
				alpha = true;
				if color { return Self::Rgba; }
			}
		}

		// RGBA will have already been returned if applicable. If we're here,
		// it's one of the other three.
		if color { Self::Rgb }
		else if alpha { Self::GreyAlpha }
		else { Self::Grey }
	}

	#[must_use]
	/// # From RGB.
	///
	/// Same as [`ColorKind::from_rgba`], but for 3-byte pixels (which can
	/// never have alpha).
	pub fn from_rgb(src: &[u8]) -> Self {
		if src.chunks_exact(3).any(|px| px[0] != px[1] || px[0] != px[2]) {
			Self::Rgb
		}
		else { Self::Grey }
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_from_rgba() {
		assert_eq!(ColorKind::from_rgba(&[1, 1, 1, 255, 9, 9, 9, 255]), ColorKind::Grey);
		assert_eq!(ColorKind::from_rgba(&[1, 1, 1, 255, 9, 9, 9, 0]), ColorKind::GreyAlpha);
		assert_eq!(ColorKind::from_rgba(&[1, 2, 1, 255, 9, 9, 9, 255]), ColorKind::Rgb);
		assert_eq!(ColorKind::from_rgba(&[1, 2, 1, 255, 9, 9, 9, 3]), ColorKind::Rgba);
	}

	#[test]
	fn t_from_rgb() {
		assert_eq!(ColorKind::from_rgb(&[4, 4, 4, 7, 7, 7]), ColorKind::Grey);
		assert_eq!(ColorKind::from_rgb(&[4, 4, 4, 7, 8, 7]), ColorKind::Rgb);
	}

	#[test]
	fn t_channels() {
		assert_eq!(ColorKind::Grey.channels(), 1);
		assert_eq!(ColorKind::GreyAlpha.channels(), 2);
		assert_eq!(ColorKind::Rgb.channels(), 3);
		assert_eq!(ColorKind::Rgba.channels(), 4);
	}

	#[test]
	fn t_as_str() {
		assert_eq!(ColorKind::Grey.to_string(), "greyscale");
		assert_eq!(ColorKind::Rgba.as_str(), "RGBA");
	}
}
