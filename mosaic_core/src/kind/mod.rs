/*!
# `Mosaic` - Kinds
*/

pub(super) mod color;
#[cfg(feature = "jpeg")] pub(super) mod jpeg;
#[cfg(feature = "png")]  pub(super) mod png;
pub(super) mod profile;
pub(super) mod source;
