/*!
# `Mosaic` - PNG Sources.
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
use rgb::ComponentSlice;



/// # PNG Image.
pub(crate) struct ImagePng;

impl Decoder for ImagePng {
	/// # Decode.
	///
	/// PNGs can be stored a dozen different ways, so we let `lodepng` upscale
	/// everything to 4-byte RGBA and sort out what's actually used afterward.
	fn decode(raw: &[u8]) -> Result<DecoderResult, MosaicError> {
		let img = lodepng::decode32(raw).map_err(|_| InputIssue::Decode)?;

		let size = img.width.checked_mul(img.height)
			.and_then(|x| x.checked_mul(4))
			.ok_or(InputIssue::Overflow)?;

		let buf: Vec<u8> = img.buffer.iter()
			.fold(Vec::with_capacity(size), |mut acc, px| {
				acc.extend_from_slice(px.as_slice());
				acc
			});

		// Make sure the buffer was actually filled to the right size.
		if buf.len() == size {
			let color = ColorKind::from_rgba(&buf);
			Ok((buf, img.width, img.height, color, ColorKind::Rgba))
		}
		else { Err(InputIssue::Decode.into()) }
	}
}



/// # Encode PNG.
///
/// Save a 3-byte RGB buffer as a PNG. This is only used for storing the
/// reconstructed output of the pipeline.
pub(crate) fn encode_rgb(pixels: &[u8], width: usize, height: usize)
-> Result<Vec<u8>, MosaicError> {
	lodepng::encode_memory(pixels, width, height, lodepng::ColorType::RGB, 8)
		.map_err(|_| MosaicError::Encode)
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_round_trip() {
		// A 2x2 image with one of each primary plus white.
		let pixels: [u8; 12] = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
		let raw = encode_rgb(&pixels, 2, 2).expect("Encode failed.");

		let (buf, width, height, color, depth) = ImagePng::decode(&raw)
			.expect("Decode failed.");
		assert_eq!((width, height), (2, 2));
		assert_eq!(color, ColorKind::Rgb);
		assert_eq!(depth, ColorKind::Rgba);
		assert_eq!(&buf[..4], &[255, 0, 0, 255]);
		assert_eq!(&buf[12..], &[255, 255, 255, 255]);
	}

	#[test]
	fn t_garbage() {
		assert_eq!(
			ImagePng::decode(b"definitely not a png").map(|_| ()),
			Err(MosaicError::InvalidInput(InputIssue::Decode)),
		);
	}
}
