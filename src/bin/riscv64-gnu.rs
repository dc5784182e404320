use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use riscv64_rs::{gnu_syntax, Inst};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render decoded RISC-V64 instructions in GNU (binutils) syntax"
)]
struct Opts {
    /// Input file with one JSON-encoded instruction per line (default: stdin)
    #[arg(value_name = "FILE")]
    input: Option<String>,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<String>,
    /// Skip lines that fail to parse instead of stopping
    #[arg(long)]
    lenient: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();

    let reader: Box<dyn BufRead> = match &opts.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("open {path}"))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut out: Box<dyn Write> = match &opts.out {
        Some(path) => Box::new(File::create(path).with_context(|| format!("create {path}"))?),
        None => Box::new(io::stdout().lock()),
    };

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let inst: Inst = match serde_json::from_str(&line) {
            Ok(inst) => inst,
            Err(err) if opts.lenient => {
                tracing::warn!(line = lineno + 1, %err, "skipping unparseable instruction");
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("parse instruction at line {}", lineno + 1))
            }
        };
        writeln!(out, "{}", gnu_syntax(&inst))?;
    }

    Ok(())
}
