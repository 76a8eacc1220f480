//! Converts Unicode text into ASCII-safe escaped text and back. Characters
//! with a code point above 255 are replaced with an escape sequence in one of
//! two formats: an HTML numeric character reference such as `&#256;`, or a
//! backslash-u literal such as `\u100` as used in source code. Characters
//! with a code point of 255 or below pass through unchanged.

mod escape_error;
mod internal;

use internal::escaper::{self, EscapeFormat};
use internal::unescaper;

pub use escape_error::EscapeError;

/// The granularity at which input text is scanned when escaping.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EscapeGranularity {
  /// Each Unicode scalar value is escaped as a whole, so a character outside
  /// the Basic Multilingual Plane produces a single escape sequence with its
  /// true code point.
  CodePoints,

  /// The text is viewed as its UTF-16 encoding and each 16-bit code unit
  /// above 255 is escaped independently. A character outside the Basic
  /// Multilingual Plane produces two escape sequences, one per surrogate.
  /// This matches the output of systems that iterate UTF-16 strings one unit
  /// at a time.
  CodeUnits,
}

/// Configures how text is escaped.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EscapeOptions {
  pub granularity: EscapeGranularity,
}

impl Default for EscapeOptions {
  /// The default options escape whole code points.
  ///
  fn default() -> Self {
    Self {
      granularity: EscapeGranularity::CodePoints,
    }
  }
}

/// Escapes characters with a code point above 255 as HTML numeric character
/// references, e.g. `"\u{100}"` becomes `"&#256;"`. All other characters pass
/// through unchanged, including HTML-special characters such as `<` and `&`.
///
/// The result of escaping already-escaped text is unchanged because escape
/// sequences contain only ASCII characters.
///
pub fn escape_to_html(input: &str) -> String {
  escaper::escape(input, EscapeFormat::HtmlReference, &EscapeOptions::default())
}

/// The same as [`escape_to_html`] but with control over the escape
/// granularity.
///
pub fn escape_to_html_with_options(
  input: &str,
  options: &EscapeOptions,
) -> String {
  escaper::escape(input, EscapeFormat::HtmlReference, options)
}

/// Escapes characters with a code point above 255 as backslash-u literals
/// with unpadded lowercase hex digits, e.g. `"\u{100}"` becomes `"\u100"`.
/// All other characters pass through unchanged.
///
/// No surrounding quoting or delimiter wrapping is performed.
///
pub fn escape_to_literal(input: &str) -> String {
  escaper::escape(input, EscapeFormat::ULiteral, &EscapeOptions::default())
}

/// The same as [`escape_to_literal`] but with control over the escape
/// granularity.
///
pub fn escape_to_literal_with_options(
  input: &str,
  options: &EscapeOptions,
) -> String {
  escaper::escape(input, EscapeFormat::ULiteral, options)
}

/// Reverses [`escape_to_html`], converting decimal numeric character
/// references back to characters. An `&` that does not start a numeric
/// character reference passes through unchanged.
///
/// A high surrogate reference immediately followed by a low surrogate
/// reference is recombined into the supplementary-plane character it encodes,
/// so output produced with [`EscapeGranularity::CodeUnits`] round-trips. A
/// lone surrogate reference decodes to the replacement character U+FFFD.
///
/// Returns an error if a reference is syntactically malformed.
///
pub fn unescape_html(input: &str) -> Result<String, EscapeError> {
  unescaper::unescape(input, EscapeFormat::HtmlReference)
}

/// Reverses [`escape_to_literal`], converting `\u` literals followed by up to
/// six hex digits back to characters. A `\` that does not start a `\u`
/// literal passes through unchanged.
///
/// Surrogate pairs are recombined the same way as in [`unescape_html`].
///
/// Returns an error if a `\u` is not followed by at least one hex digit.
///
pub fn unescape_literal(input: &str) -> Result<String, EscapeError> {
  unescaper::unescape(input, EscapeFormat::ULiteral)
}
