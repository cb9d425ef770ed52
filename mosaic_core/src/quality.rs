/*!
# `Mosaic` - Quality
*/

use crate::{
	InputIssue,
	MosaicError,
};
use std::{
	fmt,
	num::NonZeroU8,
};



#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
/// # Compression Quality.
///
/// This is an integer between `1..=100`. Lower values mean coarser
/// quantization (smaller, lossier); higher values mean finer quantization.
///
/// Instances are created through the various `TryFrom` implementations,
/// which reject anything that isn't an integer in range. Floats are never
/// accepted; callers working with a `0..=1` "quality level" need to rescale
/// and round it themselves first.
pub struct Quality(NonZeroU8);

impl Default for Quality {
	#[inline]
	fn default() -> Self { Self::DEFAULT }
}

impl fmt::Display for Quality {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "quality {}", self.0)
	}
}

impl From<Quality> for u8 {
	#[inline]
	fn from(src: Quality) -> Self { src.get() }
}

/// # Helper: Integer Conversions.
macro_rules! try_from_int {
	($($ty:ty),+) => ($(
		impl TryFrom<$ty> for Quality {
			type Error = MosaicError;

			#[inline]
			fn try_from(src: $ty) -> Result<Self, Self::Error> {
				u8::try_from(src).ok()
					.and_then(Self::new)
					.ok_or(MosaicError::InvalidInput(InputIssue::Quality))
			}
		}
	)+);
}

try_from_int!(u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl TryFrom<u8> for Quality {
	type Error = MosaicError;

	#[inline]
	fn try_from(src: u8) -> Result<Self, Self::Error> {
		Self::new(src).ok_or(MosaicError::InvalidInput(InputIssue::Quality))
	}
}

/// # Helper: Float Conversions.
///
/// Quality is an integer, full stop. Floats are rejected outright, even
/// whole ones, so a `0..=1` "quality level" can't sneak through unscaled.
macro_rules! try_from_float {
	($($ty:ty),+) => ($(
		impl TryFrom<$ty> for Quality {
			type Error = MosaicError;

			#[inline]
			fn try_from(_src: $ty) -> Result<Self, Self::Error> {
				Err(MosaicError::InvalidInput(InputIssue::Quality))
			}
		}
	)+);
}

try_from_float!(f32, f64);

impl TryFrom<&str> for Quality {
	type Error = MosaicError;

	/// # From String.
	///
	/// This parses the trimmed string as an integer. Decimal and exponent
	/// notations ("85.0", "1e2") are rejected.
	fn try_from(src: &str) -> Result<Self, Self::Error> {
		src.trim().parse::<u8>()
			.map_err(|_| MosaicError::InvalidInput(InputIssue::Quality))
			.and_then(Self::try_from)
	}
}

/// ## Instantiation.
impl Quality {
	/// # Minimum Quality.
	pub const MIN: Self = Self(NonZeroU8::MIN);

	/// # Maximum Quality.
	pub const MAX: Self = Self(NonZeroU8::new(100).unwrap());

	/// # Default Quality.
	pub const DEFAULT: Self = Self(NonZeroU8::new(85).unwrap());

	#[must_use]
	/// # New.
	///
	/// Return a new instance if the value is within `1..=100`.
	pub const fn new(src: u8) -> Option<Self> {
		if 100 < src { None }
		else if let Some(q) = NonZeroU8::new(src) { Some(Self(q)) }
		else { None }
	}
}

/// ## Getters.
impl Quality {
	#[inline]
	#[must_use]
	/// # Value.
	pub const fn get(self) -> u8 { self.0.get() }

	#[must_use]
	/// # Scale.
	///
	/// Qualities below `50` scale the base tables up (`5000 / q`); from `50`
	/// on, they scale them down (`200 - 2q`). The result is a percentage.
	pub fn scale(self) -> f32 {
		let q = f32::from(self.get());
		if self.get() < 50 { 5000.0 / q }
		else { 2.0_f32.mul_add(-q, 200.0) }
	}

	#[must_use]
	/// # Factor.
	///
	/// This is [`Quality::scale`] as a multiplier: `1.0` at quality `50`,
	/// `50.0` at quality `1`, and `0.0` at quality `100`.
	pub fn factor(self) -> f32 { self.scale() / 100.0 }
}
