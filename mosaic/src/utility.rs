/*!
# `Mosaic` - Utility
*/

use dactyl::{
	NiceElapsed,
	NiceU64,
};
use fyi_msg::Msg;
use mosaic_core::{
	Input,
	MosaicError,
	PredictionMode,
	Profile,
	Stats,
};
use std::{
	borrow::Cow,
	ffi::OsStr,
	os::unix::ffi::OsStrExt,
	path::{
		Path,
		PathBuf,
	},
	time::Duration,
};



#[must_use]
/// # File Name.
///
/// This extracts the file name from a path. If for some reason it doesn't have
/// one, "?" is returned so that _something_ can be printed.
pub(super) fn file_name(path: &Path) -> Cow<'_, str> {
	path.file_name().map_or_else(|| Cow::Borrowed("?"), OsStr::to_string_lossy)
}

#[must_use]
/// # Is Output Path?
///
/// Returns `true` if the path looks like something [`suffixed_path`] would
/// have produced for the profile.
pub(super) fn is_output(path: &Path, profile: Profile) -> bool {
	path.as_os_str().as_bytes().ends_with(&output_suffix(profile))
}

/// # Print Profile Header.
///
/// This prints the profile name with nice ANSI colors, like:
///
/// ```ignore
/// [JPEG]
/// ```
pub(super) fn print_header_kind(kind: Profile) {
	println!("\x1b[34m[\x1b[96;1m{kind}\x1b[0;34m]\x1b[0m");
}

/// # Print Path Title.
///
/// This prints the source image path with a nice ANSI-colored border, like:
///
/// ```ignore
/// +---------------------+
/// | /path/to/source.png |
/// +---------------------+
/// ```
pub(super) fn print_header_path(path: &Path) {
	let txt = path.to_string_lossy();
	let dashes = "-".repeat(txt.len() + 2);

	println!("\x1b[38;5;199m+{dashes}+\n| \x1b[0m{txt} \x1b[38;5;199m|\n+{dashes}+\x1b[0m");
}

/// # Print Source Details.
///
/// Note what the decoder found: format, dimensions, and the channels actually
/// in use (which may be fewer than the buffer holds).
pub(super) fn print_source(input: &Input<'_>) {
	let kind = input.kind().map_or("Raw", mosaic_core::SourceKind::as_str);
	Msg::plain(format!(
		"\x1b[2m{kind} source, {}x{}, {}.\x1b[0m",
		NiceU64::from(input.width()).as_str(),
		NiceU64::from(input.height()).as_str(),
		input.color(),
	))
		.with_indent(1)
		.print();
}

/// # Print Computation Time.
pub(super) fn print_computation_time(time: Duration) {
	Msg::plain(format!(
		"\x1b[2mTotal computation time: {}.\x1b[0m\n",
		NiceElapsed::from(time).as_str(),
	))
		.with_indent(1)
		.print();
}

/// # Print Error.
pub(super) fn print_error(err: MosaicError) {
	Msg::warning(err.as_str())
		.with_indent(1)
		.print();
}

/// # Print Success.
///
/// Summarize a finished conversion: where it went, how close it came to the
/// source, and (for predicted profiles) how the modes shook out.
pub(super) fn print_success(
	dst_path: &Path,
	stats: &Stats,
	mad: Option<f64>,
	psnr: Option<f64>,
	time: Duration,
) {
	let tiles = NiceU64::from(stats.total_tiles());
	let mut suffix = format!(
		" \x1b[2m({} tiles, {}.)\x1b[0m",
		tiles.as_str(),
		NiceElapsed::from(time).as_str(),
	);

	if 0 != stats.predicted() {
		let modes = PredictionMode::ALL.iter()
			.map(|m| format!("{m} {}", NiceU64::from(stats.mode(*m)).as_str()))
			.collect::<Vec<_>>()
			.join(", ");
		suffix.push_str(&format!("\n    \x1b[2mModes: {modes}.\x1b[0m"));
	}

	let fidelity = match (mad, psnr) {
		(Some(mad), Some(psnr)) if psnr.is_finite() => format!("MAD {mad:.2}, PSNR {psnr:.2} dB"),
		(Some(mad), _) => format!("MAD {mad:.2}"),
		_ => "no comparison".to_owned(),
	};

	Msg::success(format!("Created \x1b[1m{}\x1b[0m with {fidelity}.", file_name(dst_path)))
		.with_indent(1)
		.with_suffix(suffix)
		.print();
}

#[must_use]
/// # Suffixed Path.
///
/// This appends the profile-specific suffix to a source path, e.g.
/// `image.jpg` becomes `image.jpg.webp.png`.
pub(super) fn suffixed_path(path: &Path, profile: Profile) -> PathBuf {
	PathBuf::from(OsStr::from_bytes(&[
		path.as_os_str().as_bytes(),
		&output_suffix(profile),
	].concat()))
}

/// # Write Image.
///
/// This saves image data to the specified path.
pub(super) fn write_image(path: &Path, data: &[u8]) -> Result<(), MosaicError> {
	write_atomic::write_file(path, data).map_err(|_| MosaicError::Write)
}

/// # Output Suffix.
fn output_suffix(profile: Profile) -> Vec<u8> {
	let name = profile.name().as_bytes();
	let mut out = Vec::with_capacity(name.len() + 5);
	out.push(b'.');
	out.extend_from_slice(name);
	out.extend_from_slice(b".png");
	out
}
