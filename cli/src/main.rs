//! markdeck CLI - document tree to slide deck converter
//!
//! Reads a structured document tree as JSON, runs the layout engine, and
//! writes the resulting deck as JSON. Container packaging (PPTX and
//! friends) is a separate tool's concern; this binary only drives the
//! layout engine.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use markdeck::{ConvertOptions, Document, Markdeck};

#[derive(Parser)]
#[command(name = "markdeck")]
#[command(version)]
#[command(about = "Lay out a structured document tree as a slide deck", long_about = None)]
struct Cli {
    /// Input document tree (JSON)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Disable syntax highlighting for code blocks
    #[arg(long)]
    no_highlight: bool,

    /// Base directory for resolving relative image paths
    /// (defaults to the input file's directory)
    #[arg(long, value_name = "DIR")]
    base_path: Option<PathBuf>,

    /// Slide width in inches
    #[arg(long, default_value = "10.0")]
    width: f64,

    /// Slide height in inches
    #[arg(long, default_value = "7.5")]
    height: f64,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(slide_count) => {
            if cli.output.is_some() {
                eprintln!(
                    "{} {} slide(s) written",
                    "done:".green().bold(),
                    slide_count
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<usize, markdeck::Error> {
    let text = fs::read_to_string(&cli.input)?;
    let mut doc: Document = serde_json::from_str(&text)?;
    if doc.metadata.created.is_none() {
        doc.metadata.created = Some(chrono::Utc::now());
    }

    let base_path = cli
        .base_path
        .clone()
        .or_else(|| cli.input.parent().map(PathBuf::from));

    let mut builder = Markdeck::new().with_slide_size(cli.width, cli.height);
    if cli.no_highlight {
        builder = builder.without_syntax_highlighting();
    }
    if let Some(base) = base_path {
        builder = builder.with_base_path(base);
    }
    let options: &ConvertOptions = builder.options();
    log::debug!(
        "layout {}x{}in, highlighting={}",
        options.slide_width,
        options.slide_height,
        options.syntax_highlighting
    );

    let deck = builder.to_deck(&doc)?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&deck)?
    } else {
        serde_json::to_string(&deck)?
    };

    match &cli.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(deck.slide_count())
}
