/*!
# `Mosaic` - Input Validation
*/

use crate::{
	ColorKind,
	Image,
	Input,
	InputIssue,
	MosaicError,
	Quality,
};



/// # Validate.
///
/// Check an image and quality before compression, returning the image as a
/// canonical 3-byte RGB [`Image`] along with the parsed [`Quality`].
///
/// Greyscale buffers are expanded to RGB. Alpha channels, if any, are
/// dropped.
///
/// ## Examples
///
/// ```
/// use mosaic_core::{ColorKind, Input, InputIssue, MosaicError};
///
/// let px = [10_u8, 20, 30, 255];
/// let input = Input::new(&px, 1, 1, ColorKind::Rgba);
/// let (img, quality) = mosaic_core::validate(Some(&input), 50).unwrap();
/// assert_eq!(&*img, &[10, 20, 30]);
/// assert_eq!(quality.get(), 50);
///
/// assert_eq!(
///     mosaic_core::validate(Some(&input), 0).map(|_| ()),
///     Err(MosaicError::InvalidInput(InputIssue::Quality)),
/// );
/// ```
///
/// ## Errors
///
/// Returns [`MosaicError::InvalidInput`] if the image is missing, empty, too
/// big, or its buffer disagrees with its dimensions, or if the quality is
/// not an integer between `1` and `100`. Floats are always rejected.
pub fn validate<Q>(input: Option<&Input<'_>>, quality: Q)
-> Result<(Image, Quality), MosaicError>
where Q: TryInto<Quality> {
	let input = input.ok_or(InputIssue::NoImage)?;
	let quality = quality.try_into().map_err(|_| InputIssue::Quality)?;

	let (width, height) = (input.width(), input.height());
	if width == 0 || height == 0 { return Err(InputIssue::Empty.into()); }

	let depth = input.depth();
	let pixels = width.checked_mul(height).ok_or(InputIssue::Overflow)?;
	let expected = pixels.checked_mul(depth.channels())
		.filter(|_| pixels.checked_mul(3).is_some())
		.ok_or(InputIssue::Overflow)?;
	if input.len() != expected { return Err(InputIssue::Image.into()); }

	let rgb: Vec<u8> = match depth {
		ColorKind::Grey => input.iter().flat_map(|&v| [v, v, v]).collect(),
		ColorKind::GreyAlpha => input.chunks_exact(2).flat_map(|px| [px[0], px[0], px[0]]).collect(),
		ColorKind::Rgb => input.to_vec(),
		ColorKind::Rgba => input.chunks_exact(4).flat_map(|px| [px[0], px[1], px[2]]).collect(),
	};

	let img = Image::from_parts(rgb, width, height)
		.map_err(|_| MosaicError::InvalidInput(InputIssue::Image))?;
	Ok((img, quality))
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_missing() {
		assert_eq!(
			validate(None, 85).map(|_| ()),
			Err(MosaicError::InvalidInput(InputIssue::NoImage)),
		);
	}

	#[test]
	fn t_quality() {
		let px = [0_u8; 3];
		let input = Input::new(&px, 1, 1, ColorKind::Rgb);
		let err = Err(MosaicError::InvalidInput(InputIssue::Quality));

		assert_eq!(validate(Some(&input), 0).map(|_| ()), err);
		assert_eq!(validate(Some(&input), 101).map(|_| ()), err);
		assert_eq!(validate(Some(&input), -3_i64).map(|_| ()), err);
		assert_eq!(validate(Some(&input), 0.85_f64).map(|_| ()), err);
		assert_eq!(validate(Some(&input), "eighty").map(|_| ()), err);

		for q in [1, 50, 100] {
			let (_, quality) = validate(Some(&input), q).expect("Validation failed.");
			assert_eq!(i32::from(quality.get()), q);
		}
		assert_eq!(validate(Some(&input), 85.0_f32).map(|_| ()), err);
		assert_eq!(validate(Some(&input), "85.0").map(|_| ()), err);
		assert!(validate(Some(&input), "42").is_ok());
		assert!(validate(Some(&input), Quality::MAX).is_ok());
	}

	#[test]
	fn t_shape() {
		let px = [0_u8; 12];

		let input = Input::new(&px, 0, 4, ColorKind::Rgb);
		assert_eq!(
			validate(Some(&input), 85).map(|_| ()),
			Err(MosaicError::InvalidInput(InputIssue::Empty)),
		);

		let input = Input::new(&px, 3, 3, ColorKind::Rgb);
		assert_eq!(
			validate(Some(&input), 85).map(|_| ()),
			Err(MosaicError::InvalidInput(InputIssue::Image)),
		);

		let input = Input::new(&px, usize::MAX, 2, ColorKind::Rgb);
		assert_eq!(
			validate(Some(&input), 85).map(|_| ()),
			Err(MosaicError::InvalidInput(InputIssue::Overflow)),
		);
	}

	#[test]
	fn t_coerce() {
		let grey = [7_u8, 9];
		let (img, _) = validate(Some(&Input::new(&grey, 2, 1, ColorKind::Grey)), 85)
			.expect("Validation failed.");
		assert_eq!(&*img, &[7, 7, 7, 9, 9, 9]);

		let grey_alpha = [7_u8, 0, 9, 255];
		let (img, _) = validate(Some(&Input::new(&grey_alpha, 2, 1, ColorKind::GreyAlpha)), 85)
			.expect("Validation failed.");
		assert_eq!(&*img, &[7, 7, 7, 9, 9, 9]);

		let rgb = [1_u8, 2, 3, 4, 5, 6];
		let (img, _) = validate(Some(&Input::new(&rgb, 1, 2, ColorKind::Rgb)), 85)
			.expect("Validation failed.");
		assert_eq!(&*img, &rgb);
		assert_eq!((img.width(), img.height()), (1, 2));

		let rgba = [1_u8, 2, 3, 0, 4, 5, 6, 128];
		let (img, _) = validate(Some(&Input::new(&rgba, 2, 1, ColorKind::Rgba)), 85)
			.expect("Validation failed.");
		assert_eq!(&*img, &[1, 2, 3, 4, 5, 6]);
	}

	#[test]
	fn t_untouched() {
		// The caller's buffer is borrowed, never modified.
		let px = vec![50_u8; 8 * 8 * 3];
		let input = Input::new(&px, 8, 8, ColorKind::Rgb);
		let _res = crate::compress(Some(&input), crate::Profile::Jpeg, 10);
		assert!(input.iter().all(|&v| v == 50));
	}
}
