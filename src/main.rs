use clap::Parser;
use resize_image::{OutputFormat, ResizeError, SizeSpec, paths, persist, pipeline};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "resize-image")]
#[command(about = "Resize a single image to an exact WIDTHxHEIGHT and write it atomically")]
#[command(long_about = "\
Resize a single image to an exact WIDTHxHEIGHT and write it atomically

The destination extension selects the output format (jpg, jpeg, png, tif,
tiff, webp). Images with transparency headed to JPEG are flattened over a
white background. The output is staged in a uniquely-named temporary file
next to the destination and committed with one atomic rename, so concurrent
runs targeting the same path never leave a torn file.

Exit codes: 1 usage, 2 source missing, 3 bad size token, 4 resize failure.")]
#[command(after_help = "Example:\n  resize-image photos/a.png 300x300 thumbs/a.png")]
#[command(version = version_string())]
struct Cli {
    /// Path to the source image
    source_path: PathBuf,

    /// Target size as WIDTHxHEIGHT, e.g. 100x100
    size: String,

    /// Destination path; its extension selects the output format
    target_path: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and exit 0; argument errors
            // print usage to stderr and exit 1
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(target) => {
            println!("{}", target.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.exit_code() {
                2 | 3 => eprintln!("{err}"),
                _ => eprintln!("Resize failed: {err}"),
            }
            ExitCode::from(err.exit_code())
        }
    }
}

/// One invocation: resolve paths, validate, render, commit.
///
/// Checks run in exit-code order: source existence before size validation,
/// format lookup before any decode work.
fn run(cli: &Cli) -> Result<PathBuf, ResizeError> {
    let source = paths::resolve(&cli.source_path);
    let target = paths::resolve(&cli.target_path);

    if !source.exists() {
        return Err(ResizeError::SourceNotFound(source));
    }
    let spec = SizeSpec::parse(&cli.size)?;
    let format = OutputFormat::from_path(&target)?;

    let bytes = pipeline::render(&source, spec, format)?;
    persist::commit(&bytes, &target)?;
    Ok(target)
}
