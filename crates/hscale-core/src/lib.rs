/// hscale Core — scale selection, exact decimal round-trip checks, and data model.
///
/// This crate contains all formatting logic with zero CLI dependencies.
/// It is designed to be embedded by any frontend that needs "1.23 million"
/// style abbreviations without losing precision.
///
/// # Modules
///
/// - [`model`] — Scale descriptors and built-in scale presets.
/// - [`numeric`] — Working-precision decimal context and text helpers.
/// - [`format`] — The scale formatter itself and its error type.
/// - [`grouping`] — A plain thousands-grouping fallback.
/// - [`config`] — JSON-backed scale configuration.
pub mod config;
pub mod format;
pub mod grouping;
pub mod model;
pub mod numeric;

pub use format::{format_scaled, Fallback, FormatError, Formatter};
pub use model::Scale;
