//! Marten CLI
//!
//! Parses a markup document and dumps the resulting tree, either as an
//! indented debug listing or as JSON. Useful for poking at the parser from
//! the command line.

use std::env;
use std::fs;

use anyhow::{Context, Result};
use marten_markup::{MarkupParser, print_tree};
use owo_colors::OwoColorize;
use strum_macros::{Display, EnumString};

/// How the parsed tree is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
enum OutputFormat {
    /// Indented debug listing.
    Tree,
    /// Pretty-printed JSON of the node arena.
    Json,
}

fn usage() -> ! {
    eprintln!("Usage: marten <file>");
    eprintln!("       marten --markup '<doc>...</doc>'");
    eprintln!("       marten --format json <file>");
    std::process::exit(1);
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage();
    }

    let mut format = OutputFormat::Tree;
    let mut source: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--format" => {
                i += 1;
                let Some(raw) = args.get(i) else {
                    anyhow::bail!(
                        "--format requires an argument ({} or {})",
                        OutputFormat::Tree,
                        OutputFormat::Json
                    );
                };
                format = raw
                    .parse()
                    .with_context(|| format!("unknown output format '{raw}'"))?;
            }
            "--markup" => {
                i += 1;
                let Some(markup) = args.get(i) else {
                    anyhow::bail!("--markup requires a markup string argument");
                };
                source = Some(markup.clone());
            }
            path => {
                source = Some(
                    fs::read_to_string(path)
                        .with_context(|| format!("failed to read '{path}'"))?,
                );
            }
        }
        i += 1;
    }

    let Some(markup) = source else {
        usage();
    };

    let mut parser = MarkupParser::new(&markup);
    let outcome = parser.parse();
    let tree = parser.document();

    match format {
        OutputFormat::Tree => {
            println!("=== Document Tree ===");
            print_tree(tree, tree.root(), 0);
            println!("\n{} nodes", tree.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(tree)?);
        }
    }

    if let Err(err) = outcome {
        eprintln!(
            "{}",
            format!("parse failed (code {}): {err}", err.code()).red()
        );
        std::process::exit(1);
    }

    Ok(())
}
