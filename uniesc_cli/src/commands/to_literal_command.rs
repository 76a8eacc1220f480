use clap::Args;

use uniesc::{EscapeError, EscapeGranularity, EscapeOptions};

pub const ABOUT: &str =
  "Escapes characters above U+00FF as backslash-u literals";

#[derive(Args)]
pub struct ToLiteralArgs {
  #[clap(
    help = "The name of the file to read text from. Specify '-' to read from \
      stdin."
  )]
  input_filename: String,

  #[clap(
    help = "The name of the file to write escaped text to. Specify '-' to \
      write to stdout."
  )]
  output_filename: String,

  #[arg(
    long,
    default_value_t = false,
    help = "Whether to escape each UTF-16 code unit independently instead of \
      whole code points. Characters outside the Basic Multilingual Plane \
      then produce two escape sequences, one per surrogate."
  )]
  code_units: bool,
}

pub fn run(args: &ToLiteralArgs) -> Result<(), ()> {
  match perform_to_literal(args) {
    Ok(()) => Ok(()),
    Err(e) => {
      e.print(&format!(
        "escaping \"{}\" to literals",
        args.input_filename
      ));
      Err(())
    }
  }
}

fn perform_to_literal(args: &ToLiteralArgs) -> Result<(), EscapeError> {
  let input = super::read_input_text(&args.input_filename)?;

  let options = EscapeOptions {
    granularity: if args.code_units {
      EscapeGranularity::CodeUnits
    } else {
      EscapeGranularity::CodePoints
    },
  };

  let output = uniesc::escape_to_literal_with_options(&input, &options);

  super::write_output_text(&args.output_filename, &output)
}
