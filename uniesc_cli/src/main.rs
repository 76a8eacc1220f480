//! Entry point for the uniesc CLI tool.

mod commands;

use clap::{Parser, Subcommand};

use commands::{to_html_command, to_literal_command, unescape_command};

#[derive(Parser)]
#[command(
  name = "uniesc",
  bin_name = "uniesc",
  version = env!("CARGO_PKG_VERSION"),
  about = "uniesc is a CLI app for escaping Unicode text into ASCII-safe \
    forms and back",
  max_term_width = 80
)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  #[arg(
    long,
    default_value_t = false,
    help = "Write timing and memory stats to stderr on exit"
  )]
  print_stats: bool,
}

#[derive(Subcommand)]
enum Commands {
  #[command(about = to_html_command::ABOUT)]
  ToHtml(to_html_command::ToHtmlArgs),

  #[command(about = to_literal_command::ABOUT)]
  ToLiteral(to_literal_command::ToLiteralArgs),

  #[command(about = unescape_command::ABOUT)]
  Unescape(unescape_command::UnescapeArgs),
}

fn main() -> Result<(), ()> {
  let cli = Cli::parse();

  let started_at = std::time::Instant::now();

  let r = match &cli.command {
    Commands::ToHtml(args) => to_html_command::run(args),
    Commands::ToLiteral(args) => to_literal_command::run(args),
    Commands::Unescape(args) => unescape_command::run(args),
  };

  if cli.print_stats {
    #[cfg(not(windows))]
    let peak_memory_mb = get_peak_memory_usage() as f64 / (1024.0 * 1024.0);

    eprintln!();
    eprintln!("-----");
    eprintln!(
      "Time elapsed:      {:.2} seconds",
      started_at.elapsed().as_secs_f64()
    );

    #[cfg(not(windows))]
    eprintln!("Peak memory usage: {:.0} MiB", peak_memory_mb);
  }

  r
}

#[cfg(not(windows))]
fn get_peak_memory_usage() -> i64 {
  let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
  unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };

  let mut max = usage.ru_maxrss;

  // On Linux, ru_maxrss is in KiB
  if std::env::consts::OS == "linux" {
    max *= 1024;
  }

  max
}
