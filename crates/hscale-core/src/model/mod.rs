/// Data model for hscale.
///
/// Re-exports the scale descriptor and the built-in scale presets.
pub mod presets;
pub mod scale;

pub use scale::{Scale, THOUSAND_LABEL};
