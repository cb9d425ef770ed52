/*!
# `Mosaic` - Source Kind
*/

use crate::{
	InputIssue,
	MosaicError,
};
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Source Kind.
///
/// The raw file formats [`Input`](crate::Input) knows how to decode.
pub enum SourceKind {
	/// # JPEG.
	Jpeg,

	/// # PNG.
	Png,
}

impl AsRef<str> for SourceKind {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for SourceKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<&[u8]> for SourceKind {
	type Error = MosaicError;

	/// # From Raw Bytes.
	///
	/// This examines the first 12 bytes of the raw image file to see what
	/// magic its headers contain.
	fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
		// We need at least twelve bytes to hold header info!
		if src.len() > 12 {
			// PNG has just one way to be!
			if src[..8] == [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'] {
				return Ok(Self::Png);
			}

			// JPEG can look a few different ways, particularly in the middle.
			if
				src[..3] == [0xFF, 0xD8, 0xFF] &&
				(
					src[3] == 0xDB ||
					src[3] == 0xEE ||
					(src[3..12] == [0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01]) ||
					(src[3] == 0xE1 && src[6..12] == [b'E', b'x', b'i', b'f', 0x00, 0x00])
				)
			{
				return Ok(Self::Jpeg);
			}
		}

		Err(MosaicError::InvalidInput(InputIssue::Decode))
	}
}

/// ## Getters.
impl SourceKind {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Jpeg => "JPEG",
			Self::Png => "PNG",
		}
	}
}
