/// The `char` for the replacement character '�' that is emitted when an
/// escape sequence decodes to a value that is not a Unicode scalar value.
///
pub(crate) const REPLACEMENT_CHARACTER: char = '�';

/// Converts an integer codepoint value to a `char`. The replacement character
/// '�' is returned if the integer is not a valid codepoint.
///
pub(crate) fn codepoint_to_char(codepoint: u32) -> char {
  char::from_u32(codepoint).unwrap_or(REPLACEMENT_CHARACTER)
}

/// Returns whether a codepoint value is a UTF-16 high surrogate.
///
pub(crate) fn is_high_surrogate(codepoint: u32) -> bool {
  (0xD800..=0xDBFF).contains(&codepoint)
}

/// Returns whether a codepoint value is a UTF-16 low surrogate.
///
pub(crate) fn is_low_surrogate(codepoint: u32) -> bool {
  (0xDC00..=0xDFFF).contains(&codepoint)
}
