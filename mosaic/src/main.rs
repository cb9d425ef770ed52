/*!
# `Mosaic`

Run JPEG and PNG sources through the block-transform compression pipeline
and save the reconstructed previews alongside them as PNGs.
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



mod utility;

use argyle::Argument;
use dowser::{
	Dowser,
	Extension,
};
use fyi_msg::Msg;
use mosaic_core::{
	Input,
	MosaicError,
	Profile,
	Quality,
};
use std::{
	path::{
		Path,
		PathBuf,
	},
	time::Instant,
};



// The E_JPEG, E_JPG, and E_PNG constants are generated by build.rs.
include!(concat!(env!("OUT_DIR"), "/mosaic-extensions.rs"));



/// # Main.
///
/// This lets us bubble up startup errors so they can be pretty-printed.
fn main() {
	match _main() {
		Ok(()) => {},
		Err(e @ (MosaicError::PrintHelp | MosaicError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => {
			Msg::error(e.as_str()).eprint();
			std::process::exit(1);
		},
	}
}

#[inline]
/// # Actual Main.
fn _main() -> Result<(), MosaicError> {
	let settings = Settings::new()?;
	if settings.paths.is_empty() { return Err(MosaicError::NoImages); }

	let now = Instant::now();
	for path in &settings.paths {
		utility::print_header_path(path);
		if let Err(e) = crunch(path, &settings.profiles, settings.quality) {
			utility::print_error(e);
		}
		println!();
	}

	utility::print_computation_time(now.elapsed());
	Ok(())
}

/// # Crunch One Source.
///
/// Decode the image, then run it through each enabled profile, saving the
/// results as `<source>.<profile>.png`. Profile failures are printed but do
/// not stop the others.
fn crunch(path: &Path, profiles: &[Profile], quality: Quality)
-> Result<(), MosaicError> {
	let raw = std::fs::read(path).map_err(|_| MosaicError::Read)?;
	let input = Input::try_from(raw.as_slice())?;
	utility::print_source(&input);
	let (src, quality) = mosaic_core::validate(Some(&input), quality)?;
	drop(input);

	for &profile in profiles {
		utility::print_header_kind(profile);

		let now = Instant::now();
		let res = mosaic_core::compress_image(&src, profile, quality)
			.and_then(|(img, stats)| {
				let dst = utility::suffixed_path(path, profile);
				utility::write_image(&dst, &img.to_png()?)?;
				Ok((dst, img, stats))
			});

		match res {
			Ok((dst, img, stats)) => utility::print_success(
				&dst,
				&stats,
				src.mean_abs_diff(&img),
				src.psnr(&img),
				now.elapsed(),
			),
			Err(e) => utility::print_error(e),
		}
	}

	Ok(())
}



#[derive(Debug)]
/// # Settings.
///
/// The parsed command line.
struct Settings {
	/// # Source Paths.
	paths: Vec<PathBuf>,

	/// # Enabled Profiles.
	profiles: Vec<Profile>,

	/// # Quality.
	quality: Quality,
}

impl Settings {
	/// # New.
	///
	/// Parse the CLI arguments, unless `--help` or `--version` were requested
	/// instead.
	fn new() -> Result<Self, MosaicError> {
		let mut paths = Dowser::default();
		let mut jpeg = true;
		let mut webp = true;
		let mut quality = Quality::DEFAULT;

		let args = argyle::args()
			.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));
		for arg in args {
			match arg {
				Argument::Key("-h" | "--help") => return Err(MosaicError::PrintHelp),
				Argument::Key("--no-jpeg") => { jpeg = false; },
				Argument::Key("--no-webp") => { webp = false; },
				Argument::Key("-V" | "--version") => return Err(MosaicError::PrintVersion),

				Argument::KeyWithValue("-l" | "--list", s) => {
					let _res = paths.read_paths_from_file(s);
				},
				Argument::KeyWithValue("-q" | "--quality", s) => {
					quality = Quality::try_from(s.as_str())?;
				},

				// Assume paths.
				Argument::Other(s) => { paths = paths.with_path(s); },
				Argument::InvalidUtf8(s) => { paths = paths.with_path(s); },

				// Nothing else is relevant.
				_ => {},
			}
		}

		// Disabling both profiles is the same as disabling neither.
		if ! jpeg && ! webp {
			jpeg = true;
			webp = true;
		}

		let profiles = Profile::ALL.into_iter()
			.filter(|p| match p {
				Profile::Jpeg => jpeg,
				Profile::Webp => webp,
			})
			.collect();

		let mut paths: Vec<PathBuf> = paths.filter(|p| is_source(p)).collect();
		paths.sort();

		Ok(Self { paths, profiles, quality })
	}
}



/// # Is JPEG/PNG Source?
///
/// Our own outputs are PNGs too, so those are skipped to keep repeat runs
/// from compressing the previews of previews.
fn is_source(path: &Path) -> bool {
	let ext = Extension::try_from3(path).map_or_else(
		|| Extension::try_from4(path) == Some(E_JPEG),
		|e| e == E_JPG || e == E_PNG
	);

	ext && ! Profile::ALL.iter().any(|p| utility::is_output(path, *p))
}
