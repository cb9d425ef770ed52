/*!
# `Mosaic` - Error
*/

use std::{
	error::Error,
	fmt,
};



#[cfg(feature = "bin")]
/// # Help Text.
const HELP: &str = concat!(r"
 ░░▒▒▓▓██  ", "\x1b[38;5;199mMosaic\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r#"
 ░░▒▒▓▓██  Lossy block-transform compression
 ██▓▓▒▒░░  previews for JPEG and PNG sources.

USAGE:
    mosaic [FLAGS] [OPTIONS] <PATH(S)>...

PROFILE FLAGS:
        --no-jpeg     Skip the JPEG-like (8x8 YCbCr) profile.
        --no-webp     Skip the WebP-like (predicted YUV) profile.

MISC FLAGS:
    -h, --help        Print help information and exit.
    -V, --version     Print version information and exit.

OPTIONS:
    -l, --list <FILE> Read (absolute) image and/or directory paths from this
                      text file, one path per line, instead of or in addition
                      to those specified inline via <PATH(S)>.
    -q, --quality <NUM>
                      Compression quality, an integer between 1 and 100.
                      [default: 85]

TRAILING ARGS:
    <PATH(S)>...      Image and/or directory paths to compress. Directories
                      will be crawled recursively.
"#);



#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # Errors.
pub enum MosaicError {
	/// # Invalid Input.
	///
	/// The image and/or quality were rejected before any numeric work began.
	InvalidInput(InputIssue),

	/// # Compression Failure.
	///
	/// Something went wrong after validation. This indicates a defect rather
	/// than bad input.
	CompressionFailure(Failure),

	/// # Encoding failed.
	Encode,

	#[cfg(feature = "bin")]
	/// # No images.
	NoImages,

	#[cfg(feature = "bin")]
	/// # I/O read error.
	Read,

	#[cfg(feature = "bin")]
	/// # I/O write error.
	Write,

	#[cfg(feature = "bin")]
	/// # Print Help (Not an Error).
	PrintHelp,

	#[cfg(feature = "bin")]
	/// # Print Version (Not an Error).
	PrintVersion,
}

impl Error for MosaicError {}

impl AsRef<str> for MosaicError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for MosaicError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<InputIssue> for MosaicError {
	#[inline]
	fn from(src: InputIssue) -> Self { Self::InvalidInput(src) }
}

impl From<Failure> for MosaicError {
	#[inline]
	fn from(src: Failure) -> Self { Self::CompressionFailure(src) }
}

impl MosaicError {
	#[must_use]
	/// # As Str.
	///
	/// Return the error as an English string slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::InvalidInput(e) => e.as_str(),
			Self::CompressionFailure(e) => e.as_str(),
			Self::Encode => "The image could not be encoded.",
			#[cfg(feature = "bin")] Self::NoImages => "No images were found.",
			#[cfg(feature = "bin")] Self::Read => "Unable to read the source file.",
			#[cfg(feature = "bin")] Self::Write => "Unable to save the file.",
			#[cfg(feature = "bin")] Self::PrintHelp => HELP,
			#[cfg(feature = "bin")] Self::PrintVersion => concat!("Mosaic v", env!("CARGO_PKG_VERSION")),
		}
	}

	#[must_use]
	/// # Is Invalid Input?
	pub const fn is_invalid_input(self) -> bool {
		matches!(self, Self::InvalidInput(_))
	}

	#[must_use]
	/// # Is Compression Failure?
	pub const fn is_compression_failure(self) -> bool {
		matches!(self, Self::CompressionFailure(_))
	}
}



#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # Input Issues.
///
/// These are the reasons an image/quality pair can be rejected by
/// [`validate`](crate::validate).
pub enum InputIssue {
	/// # Unsupported color.
	Color,

	/// # Decoding failed.
	Decode,

	/// # Zero width or height.
	Empty,

	/// # Buffer does not match the dimensions.
	Image,

	/// # No image at all.
	NoImage,

	/// # Image dimensions are too big.
	Overflow,

	/// # Unknown profile.
	Profile,

	/// # Bad quality.
	Quality,
}

impl fmt::Display for InputIssue {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl InputIssue {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Color => "Unsupported color encoding format.",
			Self::Decode => "The image could not be decoded.",
			Self::Empty => "The image has no pixels.",
			Self::Image => "The pixel buffer does not match the image dimensions.",
			Self::NoImage => "An input image is required.",
			Self::Overflow => "The image dimensions are out of range.",
			Self::Profile => "The compression format must be jpeg or webp.",
			Self::Quality => "Quality must be an integer between 1 and 100.",
		}
	}
}



#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # Compression Failures.
///
/// These are raised by the pipeline stages downstream of validation. None of
/// them should be reachable with a validated image; if one turns up, it is a
/// bug.
pub enum Failure {
	/// # Quantization matrix and tile disagree on size.
	MatrixShape,

	/// # A transform produced NaN or infinity.
	NonFinite,

	/// # Plane buffer does not match its dimensions.
	PlaneShape,

	/// # Wrong number of tiles for the plane.
	TileCount,

	/// # Tile buffer does not match its size.
	TileShape,
}

impl fmt::Display for Failure {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Failure {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::MatrixShape => "Compression failed: quantization matrix size mismatch.",
			Self::NonFinite => "Compression failed: non-finite transform coefficient.",
			Self::PlaneShape => "Compression failed: malformed channel plane.",
			Self::TileCount => "Compression failed: tile count mismatch.",
			Self::TileShape => "Compression failed: malformed tile.",
		}
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_classify() {
		let e = MosaicError::from(InputIssue::Quality);
		assert!(e.is_invalid_input());
		assert!(! e.is_compression_failure());
		assert_eq!(e.as_str(), InputIssue::Quality.as_str());

		let e = MosaicError::from(Failure::TileShape);
		assert!(e.is_compression_failure());
		assert!(! e.is_invalid_input());
		assert_eq!(e.to_string(), Failure::TileShape.as_str());

		assert!(! MosaicError::Encode.is_invalid_input());
		assert!(! MosaicError::Encode.is_compression_failure());
	}
}
