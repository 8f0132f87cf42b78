//! CLI for pandoc-wrap - thin front end over the library.

use clap::Parser;
use pandoc_wrap::{set_pandoc_path, Converter};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input files (reads stdin when omitted)
    inputs: Vec<PathBuf>,

    /// Input format passed to pandoc as --from
    #[arg(long)]
    from: Option<String>,

    /// Output format passed to pandoc as --to
    #[arg(long)]
    to: Option<String>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pandoc executable to invoke (default: pandoc on PATH)
    #[arg(long)]
    pandoc_path: Option<String>,

    /// Maximum seconds to wait for pandoc before killing it
    #[arg(long)]
    timeout: Option<f64>,

    /// Extra pandoc options, `name` or `name=value` (repeatable)
    #[arg(long = "opt")]
    opts: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = args.pandoc_path {
        set_pandoc_path(path);
    }

    let mut converter = if args.inputs.is_empty() {
        let mut text = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut text) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        Converter::new(text)
    } else {
        Converter::new(args.inputs)
    };

    if let Some(from) = args.from {
        converter = converter.option_with("from", from);
    }
    if let Some(to) = args.to {
        converter = converter.option_with("to", to);
    }
    if let Some(seconds) = args.timeout {
        match Duration::try_from_secs_f64(seconds) {
            Ok(limit) => converter = converter.timeout(limit),
            Err(e) => {
                eprintln!("Error: invalid --timeout value {}: {}", seconds, e);
                std::process::exit(1);
            }
        }
    }
    for opt in args.opts {
        converter = match opt.split_once('=') {
            Some((name, value)) => converter.option_with(name, value),
            None => converter.option(opt),
        };
    }
    match converter.convert() {
        Ok(bytes) => {
            let result = match &args.output {
                Some(path) => std::fs::write(path, &bytes),
                None => std::io::stdout().write_all(&bytes),
            };
            if let Err(e) = result {
                eprintln!("Error writing output: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error converting document: {}", e);
            std::process::exit(1);
        }
    }
}
