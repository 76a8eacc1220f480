use clap::{Args, ValueEnum};

use uniesc::EscapeError;

pub const ABOUT: &str = "Converts escaped text back to Unicode text";

#[derive(Clone, ValueEnum)]
enum UnescapeFormat {
  /// HTML numeric character references, e.g. `&#256;`
  Html,

  /// Backslash-u literals, e.g. `\u100`
  Literal,
}

#[derive(Args)]
pub struct UnescapeArgs {
  #[clap(
    help = "The name of the file to read escaped text from. Specify '-' to \
      read from stdin."
  )]
  input_filename: String,

  #[clap(
    help = "The name of the file to write unescaped text to. Specify '-' to \
      write to stdout."
  )]
  output_filename: String,

  #[arg(
    long,
    value_enum,
    help = "The escape sequence format to parse in the input"
  )]
  format: UnescapeFormat,
}

pub fn run(args: &UnescapeArgs) -> Result<(), ()> {
  match perform_unescape(args) {
    Ok(()) => Ok(()),
    Err(e) => {
      e.print(&format!("unescaping \"{}\"", args.input_filename));
      Err(())
    }
  }
}

fn perform_unescape(args: &UnescapeArgs) -> Result<(), EscapeError> {
  let input = super::read_input_text(&args.input_filename)?;

  let output = match args.format {
    UnescapeFormat::Html => uniesc::unescape_html(&input)?,
    UnescapeFormat::Literal => uniesc::unescape_literal(&input)?,
  };

  super::write_output_text(&args.output_filename, &output)
}
