/*!
# `Mosaic` - Library

This crate implements a lossy block-transform compression engine with two
profiles: a JPEG-like profile (`YCbCr`, 8x8 tiles) and a WebP-like profile
(YUV, 16x16 luma and 8x8 chroma tiles, per-tile spatial prediction).

Neither profile produces a bitstream. Pixels go in, the engine runs the full
color → partition → (predict →) DCT → quantize → dequantize → inverse pipeline,
and the reconstructed pixels come back out at the original dimensions.

## Examples

```no_run
use mosaic_core::{
	Input,
	Profile,
};

let raw = std::fs::read("/path/to/my.jpg").unwrap();
let input = Input::try_from(raw.as_slice()).unwrap();
let out = mosaic_core::compress(Some(&input), Profile::Jpeg, 85).unwrap();
assert_eq!(out.width(), input.width());
```
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::module_name_repetitions)]



mod codec;
mod error;
mod image;
mod input;
mod kind;
mod quality;
mod traits;
mod validate;

pub use codec::{
	color::ColorSpace,
	compress,
	compress_image,
	compress_with_stats,
	dct,
	plane::{
		Padding,
		Plane,
		Tile,
	},
	predict::{
		Prediction,
		PredictionMode,
	},
	quant::QuantMatrix,
	Stats,
};
pub use error::{
	Failure,
	InputIssue,
	MosaicError,
};
pub use image::Image;
pub use input::Input;
pub use kind::{
	color::ColorKind,
	profile::Profile,
	source::SourceKind,
};
pub use quality::Quality;
pub use validate::validate;
