/*!
# `Mosaic` - JPEG Sources.
*/

use crate::{
	ColorKind,
	InputIssue,
	MosaicError,
	traits::{
		Decoder,
		DecoderResult,
	},
};
use jpeg_decoder::PixelFormat;



/// # JPEG Image.
pub(crate) struct ImageJpeg;

impl Decoder for ImageJpeg {
	/// # Decode.
	///
	/// JPEGs come out of the decoder as either 1-byte greyscale or 3-byte RGB
	/// pixels. Both are passed through as-is.
	fn decode(mut raw: &[u8]) -> Result<DecoderResult, MosaicError> {
		// Decode the image.
		let mut jecoder = jpeg_decoder::Decoder::new(&mut raw);
		let pixels = jecoder.decode()
			.map_err(|_| InputIssue::Decode)?;
		let info = jecoder.info().ok_or(InputIssue::Decode)?;

		let width: usize = info.width.into();
		let height: usize = info.height.into();

		// So many ways to be a JPEG...
		let (color, depth) = match info.pixel_format {
			PixelFormat::L8 => (ColorKind::Grey, ColorKind::Grey),
			PixelFormat::RGB24 => (ColorKind::from_rgb(&pixels), ColorKind::Rgb),
			// Lossless and CMYK aren't supported.
			PixelFormat::CMYK32 | PixelFormat::L16 => return Err(InputIssue::Color.into()),
		};

		// Make sure the buffer was actually filled to the right size.
		let size = width.checked_mul(height)
			.and_then(|x| x.checked_mul(depth.channels()))
			.ok_or(InputIssue::Overflow)?;
		if pixels.len() == size {
			Ok((pixels, width, height, color, depth))
		}
		else { Err(InputIssue::Overflow.into()) }
	}
}
