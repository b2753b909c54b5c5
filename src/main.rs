// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![allow(clippy::uninlined_format_args)]

use std::path;

use pwa_icons::{
    Backend, DownloadOptions, GenerateOptions, HttpFetcher, PlaceholderOptions, Report,
    ResizeOptions,
};

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

const HELP: &str = "\
pwa-icons prepares icon assets of a Progressive Web App.

USAGE:
  pwa-icons [OPTIONS] <COMMAND> [COMMAND OPTIONS]

  pwa-icons download
  pwa-icons generate --source logo.svg --sizes 192,512
  pwa-icons resize --source icons/icon-512x512.png
  pwa-icons placeholders

COMMANDS:
  download                      Downloads Material Icons SVGs and generates
                                an offline fallback script and stylesheet
  generate                      Converts an SVG into all app icon sizes
  resize                        Resamples an existing PNG into all app icon sizes
  placeholders                  Lists assets that need conversion and
                                creates placeholder PNGs for them

OPTIONS:
      --help                    Prints this help
  -V, --version                 Prints version
      --quiet                   Prints errors only
      --verbose                 Prints debug messages

DOWNLOAD OPTIONS:
  --icons-dir DIR               Sets the icons directory [default: ./icons]
  --url-template URL            Sets the icon URL template, where {icon_name}
                                is replaced by the icon name
                                [default: https://fonts.gstatic.com/s/i/materialicons/{icon_name}/v1/24px.svg]
  <NAME>...                     Icons to download [default: the app icons]

GENERATE OPTIONS:
  --source SVG                  Sets the SVG source
                                [default: ./icons/tiktok-logo/tiktok-logo.svg]
  --out-dir DIR                 Sets the output directory [default: ./icons]
  --sizes LIST                  Sets a comma-separated list of sizes
                                [default: 48,72,96,120,128,144,152,180,192,256,384,512]
  --backend NAME                Selects the converter
                                [default: auto]
                                [possible values: auto, inkscape, imagemagick, builtin]

RESIZE OPTIONS:
  --source PNG                  Sets the PNG source [default: ./icons/icon-512x512.png]
  --out-dir DIR                 Sets the output directory [default: ./icons]
  --sizes LIST                  Sets a comma-separated list of sizes

PLACEHOLDERS OPTIONS:
  --icons-dir DIR               Sets the icons directory [default: ./icons]
  --background COLOR            Sets the background color [default: #ff004f]
                                Examples: red, #fff, #fff000
  --no-instructions             Skips the manual conversion instructions
";

#[derive(Debug)]
enum Command {
    Download(DownloadOptions),
    Generate(GenerateOptions),
    Resize(ResizeOptions),
    Placeholders {
        icons_dir: path::PathBuf,
        options: PlaceholderOptions,
        instructions: bool,
    },
}

struct Args {
    level: log::LevelFilter,
    command: Command,
}

fn collect_args() -> Result<Args, pico_args::Error> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains("--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let level = if input.contains("--quiet") {
        log::LevelFilter::Error
    } else if input.contains("--verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let command = match input.subcommand()?.as_deref() {
        Some("download") => {
            let mut opt = DownloadOptions::default();
            if let Some(dir) = input.opt_value_from_str("--icons-dir")? {
                opt.icons_dir = dir;
            }
            if let Some(url) = input.opt_value_from_str("--url-template")? {
                opt.url_template = url;
            }

            let names = free_args(input)?;
            if !names.is_empty() {
                opt.icons = names;
            }

            Command::Download(opt)
        }
        Some("generate") => {
            let mut opt = GenerateOptions::default();
            if let Some(source) = input.opt_value_from_str("--source")? {
                opt.source = source;
            }
            if let Some(dir) = input.opt_value_from_str("--out-dir")? {
                opt.out_dir = dir;
            }
            if let Some(sizes) = input.opt_value_from_fn("--sizes", pwa_icons::parse_sizes)? {
                opt.sizes = sizes;
            }
            opt.backend = input
                .opt_value_from_fn("--backend", parse_backend)?
                .unwrap_or_default();
            reject_free_args(input)?;

            Command::Generate(opt)
        }
        Some("resize") => {
            let mut opt = ResizeOptions::default();
            if let Some(source) = input.opt_value_from_str("--source")? {
                opt.source = source;
            }
            if let Some(dir) = input.opt_value_from_str("--out-dir")? {
                opt.out_dir = dir;
            }
            if let Some(sizes) = input.opt_value_from_fn("--sizes", pwa_icons::parse_sizes)? {
                opt.sizes = sizes;
            }
            reject_free_args(input)?;

            Command::Resize(opt)
        }
        Some("placeholders") => {
            let icons_dir = input
                .opt_value_from_str("--icons-dir")?
                .unwrap_or_else(|| path::PathBuf::from("./icons"));

            let mut options = PlaceholderOptions::default();
            if let Some(color) = input.opt_value_from_str("--background")? {
                options.background = color;
            }

            let instructions = !input.contains("--no-instructions");
            reject_free_args(input)?;

            Command::Placeholders {
                icons_dir,
                options,
                instructions,
            }
        }
        Some(_) | None => {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: "a valid <COMMAND> must be set".to_string(),
            });
        }
    };

    Ok(Args { level, command })
}

fn parse_backend(s: &str) -> Result<Backend, String> {
    s.parse().map_err(|e: &str| e.to_string())
}

fn free_args(input: pico_args::Arguments) -> Result<Vec<String>, pico_args::Error> {
    icon_names(input.finish())
}

/// Converts remaining free arguments into icon names.
///
/// Anything that looks like a flag is an unknown option, not an icon.
fn icon_names(args: Vec<std::ffi::OsString>) -> Result<Vec<String>, pico_args::Error> {
    let mut names = Vec::with_capacity(args.len());
    for arg in args {
        let name = arg
            .into_string()
            .map_err(|_| pico_args::Error::NonUtf8Argument)?;

        if name.starts_with('-') {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unknown option '{}'", name),
            });
        }

        names.push(name);
    }

    Ok(names)
}

fn reject_free_args(input: pico_args::Arguments) -> Result<(), pico_args::Error> {
    let remaining = input.finish();
    if remaining.is_empty() {
        Ok(())
    } else {
        Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {:?}", remaining),
        })
    }
}

fn process() -> Result<(), String> {
    let args = match collect_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e.to_string());
        }
    };

    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(args.level);
    }

    match args.command {
        Command::Download(opt) => {
            let report =
                pwa_icons::download(&opt, &HttpFetcher::default()).map_err(|e| e.to_string())?;

            println!("Use the fallback script by adding this to your HTML:");
            println!("<script src=\"{}\"></script>", report.script.display());
        }
        Command::Generate(opt) => {
            let report = pwa_icons::generate(&opt).map_err(|e| e.to_string())?;
            print_failures(&report);
        }
        Command::Resize(opt) => {
            let report = pwa_icons::resize_icons(&opt).map_err(|e| e.to_string())?;
            print_failures(&report);
        }
        Command::Placeholders {
            icons_dir,
            options,
            instructions,
        } => {
            let assets = pwa_icons::default_assets(&icons_dir);

            if instructions {
                println!("===== SVG to PNG Conversion =====");
                println!("{}", pwa_icons::MANUAL_INSTRUCTIONS);
                println!("Here are all the SVGs that need conversion:");
                print!("{}", pwa_icons::conversion_report(&assets));
                println!();
                println!("Placeholder PNG files will be created.");
                println!("Replace them later with properly converted ones.");
            }

            let fontdb = pwa_icons::raster::load_fonts();
            let report = pwa_icons::create_placeholders(&assets, &fontdb, &options);
            print_failures(&report);
        }
    }

    Ok(())
}

fn print_failures(report: &Report) {
    for (path, reason) in &report.failed {
        println!("Failed: {} ({})", path.display(), reason);
    }
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error: {}", args),
                log::Level::Warn => eprintln!("Warning: {}", args),
                log::Level::Info => eprintln!("{}", args),
                log::Level::Debug => eprintln!("Debug: {}", args),
                log::Level::Trace => eprintln!("Trace: {}", args),
            }
        }
    }

    fn flush(&self) {}
}
