//! Converts escape sequences produced by the escaper back into characters.

use crate::internal::escaper::EscapeFormat;
use crate::internal::utils;
use crate::EscapeError;

/// The maximum number of hex digits consumed by a `\u` literal. The escaper
/// emits at most six for codepoints up to U+10FFFF.
const U_LITERAL_MAX_HEX_DIGITS: usize = 6;

/// Unescapes all escape sequences in the given format back into characters.
/// Characters that don't start an escape sequence pass through unchanged.
///
/// A high surrogate escape immediately followed by a low surrogate escape is
/// recombined into the supplementary-plane character it encodes. Any other
/// escape whose value is not a Unicode scalar value decodes to U+FFFD.
///
/// Returns an error if an escape sequence is syntactically malformed.
///
pub(crate) fn unescape(
  input: &str,
  format: EscapeFormat,
) -> Result<String, EscapeError> {
  let mut output = String::with_capacity(input.len());
  let mut rest = input;

  loop {
    let offset = input.len() - rest.len();

    match next_escape_value(rest, format, offset)? {
      Some((value, next_rest)) => {
        rest = next_rest;

        // Recombine a high surrogate followed by a low surrogate so that
        // output escaped at code unit granularity round-trips
        if utils::is_high_surrogate(value) {
          let offset = input.len() - rest.len();

          if let Some((low, next_rest)) =
            next_escape_value(rest, format, offset)?
          {
            if utils::is_low_surrogate(low) {
              let codepoint =
                0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00);

              output.push(utils::codepoint_to_char(codepoint));
              rest = next_rest;
              continue;
            }
          }
        }

        output.push(utils::codepoint_to_char(value));
      }

      None => match rest.chars().next() {
        Some(c) => {
          output.push(c);
          rest = &rest[c.len_utf8()..];
        }

        None => return Ok(output),
      },
    }
  }
}

/// Parses the escape sequence at the start of the given text, returning its
/// codepoint value and the remaining text. Returns `None` if the text does
/// not start with the format's escape prefix.
///
fn next_escape_value(
  rest: &str,
  format: EscapeFormat,
  offset: usize,
) -> Result<Option<(u32, &str)>, EscapeError> {
  match format {
    EscapeFormat::HtmlReference => match rest.as_bytes() {
      [b'&', b'#', ..] => {
        let digits = &rest[2..];

        let digit_count =
          digits.bytes().take_while(u8::is_ascii_digit).count();

        if digit_count == 0 {
          return Err(EscapeError::new_invalid_reference(
            "Expected decimal digits after \"&#\"".to_string(),
            offset,
          ));
        }

        let value = digits[..digit_count].parse::<u32>().map_err(|_| {
          EscapeError::new_invalid_reference(
            "Numeric character reference value is too large".to_string(),
            offset,
          )
        })?;

        match digits.as_bytes().get(digit_count) {
          Some(b';') => Ok(Some((value, &digits[digit_count + 1..]))),

          _ => Err(EscapeError::new_invalid_reference(
            "Numeric character reference is not terminated with ';'"
              .to_string(),
            offset,
          )),
        }
      }

      _ => Ok(None),
    },

    EscapeFormat::ULiteral => match rest.as_bytes() {
      [b'\\', b'u', ..] => {
        let digits = &rest[2..];

        let digit_count = digits
          .bytes()
          .take_while(u8::is_ascii_hexdigit)
          .count()
          .min(U_LITERAL_MAX_HEX_DIGITS);

        if digit_count == 0 {
          return Err(EscapeError::new_invalid_reference(
            "Expected hex digits after \"\\u\"".to_string(),
            offset,
          ));
        }

        // This unwrap is safe because six hex digits always fit in a u32
        let value = u32::from_str_radix(&digits[..digit_count], 16).unwrap();

        Ok(Some((value, &digits[digit_count..])))
      }

      _ => Ok(None),
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn unescape_html(input: &str) -> Result<String, EscapeError> {
    unescape(input, EscapeFormat::HtmlReference)
  }

  fn unescape_literal(input: &str) -> Result<String, EscapeError> {
    unescape(input, EscapeFormat::ULiteral)
  }

  #[test]
  fn unescape_html_test() {
    for (input, expected) in [
      ("", ""),
      ("Hello, world!", "Hello, world!"),
      ("A&#256;B", "A\u{100}B"),
      ("&#272;à N&#7861;ng", "Đà Nẵng"),
      ("&#128512;", "😀"),
      // An ampersand that doesn't start a reference passes through
      ("fish & chips", "fish & chips"),
      ("&amp;", "&amp;"),
    ] {
      assert_eq!(unescape_html(input), Ok(expected.to_string()));
    }
  }

  #[test]
  fn unescape_literal_test() {
    for (input, expected) in [
      ("", ""),
      ("A\\u100 B", "A\u{100} B"),
      // The unpadded legacy format is ambiguous before hex-digit characters,
      // so the 'B' is consumed as part of the literal
      ("A\\u100B", "A\u{100B}"),
      ("\\u110à N\\u1eb5ng", "Đà Nẵng"),
      ("\\u1f600", "😀"),
      // A backslash that doesn't start a literal passes through
      ("a\\nb", "a\\nb"),
      // Only six hex digits are consumed
      ("\\u0010ffff", "\u{10FF}ff"),
    ] {
      assert_eq!(unescape_literal(input), Ok(expected.to_string()));
    }
  }

  #[test]
  fn round_trip_test() {
    use crate::internal::escaper::escape;
    use crate::{EscapeGranularity, EscapeOptions};

    let all_options = [
      EscapeOptions::default(),
      EscapeOptions {
        granularity: EscapeGranularity::CodeUnits,
      },
    ];

    // Inputs where no escape sequence ends up followed by a hex digit, so
    // unescaping exactly inverts escaping
    for s in ["", "A\u{100} B", "Đà Nẵng", "😀!"] {
      for options in &all_options {
        let escaped = escape(s, EscapeFormat::HtmlReference, options);
        assert_eq!(unescape_html(&escaped), Ok(s.to_string()));

        let escaped = escape(s, EscapeFormat::ULiteral, options);
        assert_eq!(unescape_literal(&escaped), Ok(s.to_string()));
      }
    }
  }

  #[test]
  fn surrogate_recombination_test() {
    // A surrogate pair escaped at code unit granularity recombines
    assert_eq!(unescape_html("&#55357;&#56832;"), Ok("😀".to_string()));
    assert_eq!(unescape_literal("\\ud83d\\ude00"), Ok("😀".to_string()));

    // Lone surrogates decode to the replacement character
    assert_eq!(unescape_html("&#55357;"), Ok("\u{FFFD}".to_string()));
    assert_eq!(unescape_html("&#56832;x"), Ok("\u{FFFD}x".to_string()));
    assert_eq!(
      unescape_html("&#55357;&#256;"),
      Ok("\u{FFFD}\u{100}".to_string())
    );
  }

  #[test]
  fn out_of_range_value_test() {
    // Values above U+10FFFF that still fit in a u32 decode to U+FFFD
    assert_eq!(unescape_html("&#1114112;"), Ok("\u{FFFD}".to_string()));
    assert_eq!(unescape_literal("\\uffffff"), Ok("\u{FFFD}".to_string()));
  }

  #[test]
  fn malformed_reference_test() {
    assert_eq!(
      unescape_html("&#;"),
      Err(EscapeError::new_invalid_reference(
        "Expected decimal digits after \"&#\"".to_string(),
        0
      ))
    );

    assert_eq!(
      unescape_html("x&#12"),
      Err(EscapeError::new_invalid_reference(
        "Numeric character reference is not terminated with ';'".to_string(),
        1
      ))
    );

    assert_eq!(
      unescape_html("&#99999999999;"),
      Err(EscapeError::new_invalid_reference(
        "Numeric character reference value is too large".to_string(),
        0
      ))
    );

    assert_eq!(
      unescape_literal("ab\\uzz"),
      Err(EscapeError::new_invalid_reference(
        "Expected hex digits after \"\\u\"".to_string(),
        2
      ))
    );
  }
}
