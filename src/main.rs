// SPDX-License-Identifier: MPL-2.0
use iced_showcase::app::{self, paths, Flags};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_showcase - animated media showcase

USAGE:
  iced_showcase [OPTIONS] [MANIFEST]

ARGS:
  [MANIFEST]            Media manifest (TOML) to display

OPTIONS:
  --lang <ID>           Interface language, e.g. en-US or fr
  --config-dir <DIR>    Read settings.toml from DIR
  --no-particles        Disable the particle backdrop
  --verbose             Debug logging for this application
  -h, --help            Print this help
";

struct Cli {
    flags: Flags,
    config_dir: Option<String>,
    verbose: bool,
}

fn parse_args() -> Result<Option<Cli>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let no_particles = args.contains("--no-particles");
    let verbose = args.contains("--verbose");
    let manifest: Option<PathBuf> = args.opt_free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {rest:?}"),
        });
    }

    Ok(Some(Cli {
        flags: Flags {
            lang,
            manifest,
            no_particles,
        },
        config_dir,
        verbose,
    }))
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    if let Ok(directives) = std::env::var("RUST_LOG") {
        builder.parse_filters(&directives);
    } else {
        let level = if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        builder
            .filter_level(log::LevelFilter::Warn)
            .filter_module("iced_showcase", level);
    }
    builder.init();
}

fn main() -> ExitCode {
    let cli = match parse_args() {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    init_logging(cli.verbose);
    paths::init_cli_override(cli.config_dir);

    match app::run(cli.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("application exited with an error: {err}");
            ExitCode::FAILURE
        }
    }
}
