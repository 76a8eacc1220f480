pub mod to_html_command;
pub mod to_literal_command;
pub mod unescape_command;

use std::fs::File;
use std::io::{Read, Write};

use uniesc::EscapeError;

/// Reads text content from the given filename. A filename of `-` reads from
/// stdin.
///
pub fn read_input_text(input_filename: &str) -> Result<String, EscapeError> {
  let mut input_stream: Box<dyn Read> = match input_filename {
    "-" => Box::new(std::io::stdin()),
    _ => match File::open(input_filename) {
      Ok(file) => Box::new(file),
      Err(e) => {
        return Err(EscapeError::new_file_error(
          "Opening input file".to_string(),
          e.to_string(),
        ));
      }
    },
  };

  let mut bytes = vec![];
  match input_stream.read_to_end(&mut bytes) {
    Ok(_) => (),
    Err(e) => {
      return Err(EscapeError::new_file_error(
        "Reading input file".to_string(),
        e.to_string(),
      ));
    }
  }

  String::from_utf8(bytes).map_err(|e| {
    EscapeError::new_file_error(
      "Reading input file".to_string(),
      e.to_string(),
    )
  })
}

/// Writes text content to the given filename. A filename of `-` writes to
/// stdout.
///
pub fn write_output_text(
  output_filename: &str,
  text: &str,
) -> Result<(), EscapeError> {
  let mut output_stream: Box<dyn Write> = match output_filename {
    "-" => Box::new(std::io::stdout()),
    _ => match File::create(output_filename) {
      Ok(file) => Box::new(file),
      Err(e) => {
        return Err(EscapeError::new_file_error(
          "Opening output file".to_string(),
          e.to_string(),
        ));
      }
    },
  };

  output_stream.write_all(text.as_bytes()).map_err(|e| {
    EscapeError::new_file_error(
      "Writing output file".to_string(),
      e.to_string(),
    )
  })
}
