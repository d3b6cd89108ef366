//! mdoutline: write a linked outline of a markdown tree.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use mdoutline::creator::{OutlineCreator, Options};
use mdoutline::hash::HashFormatter;
use mdoutline::heading::{build_heading_tree, extract_headings, flatten_headings};
use mdoutline::outline::{render_outline, OutlineContext};
use mdoutline::render_tree::build_render_tree;
use mdoutline::{config, token, OutlineError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mdoutline")]
#[command(about = "Linked table of contents for markdown documents", long_about = None)]
struct Args {
    /// Markdown file or directory to outline
    #[arg(long, short = 'i', value_name = "PATH", default_value = ".")]
    input: PathBuf,

    /// Outline file to write (`.md` is appended if missing)
    #[arg(long, short = 'o', value_name = "PATH", required_unless_present = "tokens")]
    output: Option<PathBuf>,

    /// Anchor style: github or identity
    #[arg(long, value_name = "STYLE")]
    hash: Option<HashFormatter>,

    /// Include documents that have no headings
    #[arg(long)]
    keep_empty: bool,

    /// Escape brackets and parentheses in link text
    #[arg(long)]
    escape_titles: bool,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Print the outline of a JSON token stream instead of scanning documents
    #[arg(long, value_name = "FILE")]
    tokens: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), OutlineError> {
    let cfg = config::Config::load();
    let mut options = Options::try_from(&cfg)?;

    // Override config with command line args
    if let Some(hash) = args.hash {
        options.hash_formatter = hash;
    }
    if args.keep_empty {
        options.ignore_empty_files = false;
    }
    if args.escape_titles {
        options.escape_titles = true;
    }
    if !args.ext.is_empty() {
        options.file_extensions = args.ext;
    }

    if let Some(tokens_path) = args.tokens {
        return print_token_outline(&tokens_path, &options);
    }

    let output = args
        .output
        .ok_or_else(|| OutlineError::Config("an output path is required".to_string()))?;
    if !args.input.exists() {
        return Err(OutlineError::Config(format!(
            "input path does not exist: {}",
            args.input.display()
        )));
    }

    OutlineCreator::new(&args.input, &output, options)?.run()
}

fn print_token_outline(path: &Path, options: &Options) -> Result<(), OutlineError> {
    let json = std::fs::read_to_string(path)?;
    let tokens = token::tokens_from_json(&json)
        .map_err(|e| OutlineError::Parse(e.to_string()).in_document(path))?;
    let tree = build_render_tree(&tokens).map_err(|e| e.in_document(path))?;
    let flat = flatten_headings(&extract_headings(&tree)).map_err(|e| e.in_document(path))?;

    let formatter = options.hash_formatter;
    let hash = move |text: &str| formatter.apply(text);
    let ctx = OutlineContext {
        target: String::new(),
        hash: &hash,
        escape_titles: options.escape_titles,
        indent: options.indent.clone(),
    };
    print!("{}", render_outline(&build_heading_tree(&flat), 0, &ctx));
    Ok(())
}
