//! imgprobe - Identify an image's format and dimensions from its header.
//!
//! Prints one result line to stdout for a recognized image; logs go to
//! stderr. An unrecognized file prints nothing and exits with status 1.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgprobe::{identify, read_prefix, Config, ImageInfo, OutputFormat};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let data = match read_prefix(&config.file, config.max_bytes) {
        Ok(data) => data,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    debug!(path = %config.file.display(), bytes = data.len(), "Read file prefix");

    let info = identify(&data);
    if info.is_unknown() {
        debug!(path = %config.file.display(), "Unrecognized image format");
        return ExitCode::FAILURE;
    }

    print_result(&info, config.output);
    ExitCode::SUCCESS
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence over the `--verbose` default.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "imgprobe=debug"
    } else {
        "imgprobe=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_result(info: &ImageInfo, output: OutputFormat) {
    let format = info.format();

    match output {
        OutputFormat::Text => {
            println!(
                "{} {} {} {}",
                format,
                format.mime(),
                info.width(),
                info.height()
            );
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "format": format,
                "mime": format.mime(),
                "width": info.width(),
                "height": info.height(),
            });
            match serde_json::to_string_pretty(&json) {
                Ok(text) => println!("{}", text),
                Err(e) => error!("Failed to serialize result: {}", e),
            }
        }
    }
}
