//! Provides the [`EscapeError`] type that describes the errors that can occur
//! when transcoding escaped text.

use owo_colors::{OwoColorize, Stream::Stdout};

/// An error that occurred when transcoding escaped text. An error can be one
/// of the following types:
///
/// 1. **Invalid reference**.
///
///    When unescaping, an escape sequence was syntactically malformed. E.g.
///    an `&#` with no digits or no terminating semicolon, or a `\u` with no
///    hex digits.
///
/// 2. **File error**.
///
///    An input or output stream could not be read or written, or input data
///    was not valid UTF-8.
///
#[derive(Clone, Debug, PartialEq)]
pub struct EscapeError(RawEscapeError);

#[derive(Clone, Debug, PartialEq)]
enum RawEscapeError {
  InvalidReference { details: String, offset: usize },
  FileError { when: String, details: String },
}

impl std::fmt::Display for EscapeError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let error = match &self.0 {
      RawEscapeError::InvalidReference { details, offset } => {
        format!("Invalid reference at byte offset {}: {}", offset, details)
      }
      RawEscapeError::FileError { when, details } => {
        format!("File error {}: {}", when, details)
      }
    };

    write!(f, "Escape Error: {}", error)
  }
}

impl std::error::Error for EscapeError {}

impl EscapeError {
  /// Constructs a new 'Invalid reference' escape error. The offset is the
  /// byte offset in the input at which the malformed escape sequence starts.
  ///
  pub fn new_invalid_reference(details: String, offset: usize) -> Self {
    Self(RawEscapeError::InvalidReference { details, offset })
  }

  /// Constructs a new 'File error' escape error.
  ///
  pub fn new_file_error(when: String, details: String) -> Self {
    Self(RawEscapeError::FileError { when, details })
  }

  /// Returns the byte offset at which an 'Invalid reference' error occurred.
  ///
  pub fn offset(&self) -> Option<usize> {
    match &self.0 {
      RawEscapeError::InvalidReference { offset, .. } => Some(*offset),
      RawEscapeError::FileError { .. } => None,
    }
  }

  /// Returns the name of an escape error as a human-readable string.
  ///
  pub fn name(&self) -> &'static str {
    match &self.0 {
      RawEscapeError::InvalidReference { .. } => "Invalid reference",
      RawEscapeError::FileError { .. } => "File error",
    }
  }

  /// Returns lines of text that describe an escape error in a human-readable
  /// format.
  ///
  pub fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("Escape error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self.name()),
    ];

    match &self.0 {
      RawEscapeError::InvalidReference { details, offset } => {
        lines.push(format!("  Offset: {} bytes", offset));
        lines.push(format!("  Details: {}", details));
      }
      RawEscapeError::FileError { when, details } => {
        lines.push(format!("  When: {}", when));
        lines.push(format!("  Details: {}", details));
      }
    };

    lines
  }

  /// Prints details on an escape error to stderr. This will include all
  /// details and contextual information stored in the error.
  ///
  pub fn print(&self, task_description: &str) {
    eprintln!();
    eprintln!("{}", "-----".if_supports_color(Stdout, |text| text.red()));

    for line in self.to_lines(task_description) {
      eprintln!("{}", line.if_supports_color(Stdout, |text| text.red()));
    }

    eprintln!();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_lines_test() {
    assert_eq!(
      EscapeError::new_invalid_reference(
        "Expected decimal digits after \"&#\"".to_string(),
        12
      )
      .to_lines("unescaping HTML"),
      vec![
        "Escape error unescaping HTML",
        "",
        "  Error: Invalid reference",
        "  Offset: 12 bytes",
        "  Details: Expected decimal digits after \"&#\"",
      ]
    );
  }
}
