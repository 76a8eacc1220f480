//! Replaces characters above the pass-through limit with ASCII escape
//! sequences.

use crate::internal::utils;
use crate::{EscapeGranularity, EscapeOptions};

/// The highest codepoint value that passes through unchanged. Everything
/// above it is replaced with an escape sequence.
///
pub(crate) const PASS_THROUGH_MAX: u32 = 0xFF;

/// The escape sequence formats that can be emitted and parsed.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum EscapeFormat {
  /// An HTML decimal numeric character reference, e.g. `&#256;`.
  HtmlReference,

  /// A backslash-u literal with unpadded lowercase hex digits, e.g. `\u100`.
  ULiteral,
}

/// Escapes all characters in the input above [`PASS_THROUGH_MAX`] in the
/// given format, at the granularity selected by the options. The output is
/// built up in a single buffer and preserves input order exactly.
///
pub(crate) fn escape(
  input: &str,
  format: EscapeFormat,
  options: &EscapeOptions,
) -> String {
  let mut output = String::with_capacity(input.len());

  match options.granularity {
    EscapeGranularity::CodePoints => {
      for c in input.chars() {
        push_escaped(&mut output, c as u32, format);
      }
    }

    EscapeGranularity::CodeUnits => {
      for unit in input.encode_utf16() {
        push_escaped(&mut output, unit as u32, format);
      }
    }
  }

  output
}

fn push_escaped(output: &mut String, codepoint: u32, format: EscapeFormat) {
  if codepoint > PASS_THROUGH_MAX {
    match format {
      EscapeFormat::HtmlReference => {
        output.push_str(&format!("&#{};", codepoint))
      }
      EscapeFormat::ULiteral => output.push_str(&format!("\\u{:x}", codepoint)),
    }
  } else {
    // Codepoints at or below the pass-through limit are always valid chars
    output.push(utils::codepoint_to_char(codepoint));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn escape_html(input: &str) -> String {
    escape(input, EscapeFormat::HtmlReference, &EscapeOptions::default())
  }

  fn escape_literal(input: &str) -> String {
    escape(input, EscapeFormat::ULiteral, &EscapeOptions::default())
  }

  #[test]
  fn pass_through_test() {
    for s in ["", "Hello, world!", "<a href=\"x\">&amp;</a>", "\u{0}\t\u{7F}"] {
      assert_eq!(escape_html(s), s);
      assert_eq!(escape_literal(s), s);
    }
  }

  #[test]
  fn threshold_boundary_test() {
    assert_eq!(escape_html("\u{FF}"), "\u{FF}");
    assert_eq!(escape_literal("\u{FF}"), "\u{FF}");

    assert_eq!(escape_html("\u{100}"), "&#256;");
    assert_eq!(escape_literal("\u{100}"), "\\u100");
  }

  #[test]
  fn order_preservation_test() {
    assert_eq!(escape_html("A\u{100}B"), "A&#256;B");
    assert_eq!(escape_literal("A\u{100}B"), "A\\u100B");

    assert_eq!(escape_html("Đà Nẵng"), "&#272;à N&#7861;ng");
    assert_eq!(escape_literal("Đà Nẵng"), "\\u110à N\\u1eb5ng");
  }

  #[test]
  fn escape_is_fixed_point_test() {
    for s in ["\u{100}", "A\u{100}B\u{1000}", "😀", ""] {
      let escaped = escape_html(s);
      assert_eq!(escape_html(&escaped), escaped);

      let escaped = escape_literal(s);
      assert_eq!(escape_literal(&escaped), escaped);
    }
  }

  #[test]
  fn literal_format_test() {
    // Hex digits are lowercase and unpadded
    assert_eq!(escape_literal("\u{1000}"), "\\u1000");
    assert_eq!(escape_literal("\u{ABC}"), "\\uabc");
    assert_eq!(escape_literal("\u{10FFFF}"), "\\u10ffff");

    // Low codepoints never produce escape sequences, even control characters
    assert_eq!(escape_literal("\u{10}"), "\u{10}");
  }

  #[test]
  fn granularity_test() {
    let code_units = EscapeOptions {
      granularity: EscapeGranularity::CodeUnits,
    };

    // U+1F600 is a single escape at codepoint granularity and a surrogate
    // pair at code unit granularity
    assert_eq!(escape_html("😀"), "&#128512;");
    assert_eq!(
      escape("😀", EscapeFormat::HtmlReference, &code_units),
      "&#55357;&#56832;"
    );

    assert_eq!(escape_literal("😀"), "\\u1f600");
    assert_eq!(
      escape("😀", EscapeFormat::ULiteral, &code_units),
      "\\ud83d\\ude00"
    );

    // Both granularities agree for BMP characters
    assert_eq!(
      escape("A\u{100}B", EscapeFormat::HtmlReference, &code_units),
      "A&#256;B"
    );
  }
}
