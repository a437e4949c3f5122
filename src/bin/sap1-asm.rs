use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use sap1_rs::isa::sap1::Sap1Isa;
use sap1_rs::Assembler;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble SAP-1 source into 8-bit machine words"
)]
struct Opts {
    /// Write the word list to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Emit a JSON listing pairing each source line with its word
    #[arg(long)]
    json: bool,
    /// Input assembly file, one instruction per line (blank lines skipped)
    #[arg(value_name = "ASMFILE")]
    input: PathBuf,
}

#[derive(Serialize)]
struct ListingEntry<'a> {
    line: &'a str,
    word: &'a str,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let text = std::fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

    let isa = Sap1Isa::new();
    let asm = Assembler::new(&isa, &lines)?;

    let mut out = if opts.json {
        let listing: Vec<ListingEntry> = lines
            .iter()
            .zip(asm.words())
            .map(|(line, word)| ListingEntry {
                line: line.trim(),
                word: word.as_str(),
            })
            .collect();
        serde_json::to_string_pretty(&listing)?
    } else {
        asm.words()
            .iter()
            .map(|w| w.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    };
    out.push('\n');

    match opts.output {
        Some(path) => std::fs::write(&path, out)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{out}"),
    }

    Ok(())
}
