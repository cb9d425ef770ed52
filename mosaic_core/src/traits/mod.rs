/*!
# `Mosaic` - Traits.
*/

#[cfg(any(feature = "jpeg", feature = "png"))]
use crate::{
	ColorKind,
	MosaicError,
};



#[cfg(any(feature = "jpeg", feature = "png"))]
/// # The result type for `Decoder::decode`.
///
/// This is the pixel buffer, width, height, the color actually used by the
/// image, and the channel layout of the buffer (its depth), in that order.
pub(super) type DecoderResult = (Vec<u8>, usize, usize, ColorKind, ColorKind);

#[cfg(any(feature = "jpeg", feature = "png"))]
/// # Decoder.
///
/// This is implemented for source formats capable of decoding raw image data
/// into pixels.
pub(super) trait Decoder {
	/// # Decode.
	///
	/// Decode the bytes from a raw image file into a contiguous `u8` buffer.
	/// Unlike the compression pipeline, decoders are free to return whatever
	/// channel layout is most natural for the format; the depth is reported
	/// alongside so the validator can coerce it later.
	///
	/// ## Errors
	///
	/// Return any errors encountered during decoding.
	fn decode(raw: &[u8]) -> Result<DecoderResult, MosaicError>;
}
