use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{CommandFactory as _, Parser};
use radix_conv::Converter;

mod config;
mod directive;
mod error;
mod logging;
mod report;
mod session;

use session::Session;

/// Converts numbers between bases 2 to 36.
///
/// Arguments are processed in order. Directives of the form `-X=VALUE` change
/// the settings for all numbers that follow them. Every other argument is a
/// number, optionally prefixed with `-`, and is printed next to its converted
/// form.
#[derive(Debug, Parser)]
#[command(
    version,
    after_long_help = DIRECTIVES,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print help.
    #[arg(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,

    /// Print version.
    #[arg(long, action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Override whether this program outputs color.
    ///
    /// Auto-detection is performed, but in case it is wrong, you may use this
    /// to override the default.
    #[arg(long)]
    color: Option<bool>,

    /// An additional config file to load.
    ///
    /// It is applied after `conv.toml` from the working directory, if any.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report bad numbers and directives, but continue with the next argument.
    #[arg(long)]
    keep_going: bool,

    /// Directives and numbers, in the order to process them.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

const DIRECTIVES: &str = "\
Directives:
  -f=N      Base to convert from, 2 to 36. [default: 10]
  -t=N      Base to convert to, 2 to 36. [default: 2]
  -c=0|1    Digit case, 0 for minuscule and 1 for majuscule. [default: 0]
  -e=l|b    Digit order, l prints the most significant digit first and b
            prints the least significant digit first. [default: b]
  -r=N      Size of the output buffer, one slot is reserved. [default: 1024]
  -o=PATH   Append the following output to PATH.
  -h=       View this help.

Examples:
  conv -e=l 255 -t=16 -c=1 255
  conv -f=16 -t=10 -e=l ff -10";

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref()).context("cannot load config")?;
    logging::init(config.log).context("cannot set up logging")?;

    let stdout_color = utils::term::use_color(cli.color.or(config.color), &io::stdout());
    let stderr_color = utils::term::use_color(cli.color.or(config.color), &io::stderr());

    if cli.args.is_empty() {
        print_usage(io::stdout())?;
        return Ok(ExitCode::SUCCESS);
    }

    let converter = Converter::new(config.defaults).context("invalid default settings")?;
    log::debug!("starting with {:?}", converter.settings());

    let mut session = Session::new(converter, stdout_color);
    let mut failed = false;

    for arg in &cli.args {
        let Err(err) = session.process(arg) else {
            continue;
        };

        failed = true;
        log::debug!("`{arg}` failed: {err:?}");

        if matches!(
            err,
            error::RunError::Directive {
                source: error::DirectiveError::HelpRequested,
                ..
            }
        ) {
            print_usage(io::stdout())?;
            break;
        }

        report::print(&err, stderr_color);
        if err.wants_usage() {
            print_usage(io::stderr())?;
        }

        if err.is_fatal() || !cli.keep_going {
            break;
        }
    }

    if let Some(path) = session.output_path() {
        log::debug!("output was appended to {}", path.display());
    }

    log::logger().flush();
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_usage<W: io::Write>(mut w: W) -> io::Result<()> {
    write!(w, "{}", Cli::command().render_long_help())?;
    w.flush()
}
