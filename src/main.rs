//! gmi2html CLI - convert gemtext to HTML

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug};

use gmi2html::Options;

/// Convert Gemini text (gemtext) to HTML
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Gemtext file to convert (reads stdin if omitted or `-`)
    file: Option<PathBuf>,

    /// Don't output container HTML, only the content fragment
    #[arg(long)]
    no_container: bool,

    /// Replace .gmi extension with .html in links
    #[arg(long)]
    replace_gmi_ext: bool,

    /// Document title used in the container HTML
    #[arg(short, long, default_value = "")]
    title: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> gmi2html::Result<()> {
    let bytes = match &cli.file {
        Some(path) if path.as_os_str() != "-" => {
            debug!("Reading {}", path.display());
            fs::read(path)?
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    // Invalid UTF-8 becomes U+FFFD instead of failing the whole document.
    let input = String::from_utf8_lossy(&bytes);

    let options = Options {
        replace_gmi_ext: cli.replace_gmi_ext,
        content_only: cli.no_container,
    };
    let html = gmi2html::render_with_options(&input, &cli.title, &options)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
