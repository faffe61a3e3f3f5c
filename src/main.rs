use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seqwalk::{Element, OutlineReader, SequenceIterator, Traversal, WalkConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "seqwalk", about = "Drain restartable cursors over lists and trees")]
struct Cli {
    /// Spaces per nesting level in outline files.
    #[arg(long, global = true, default_value_t = 2)]
    indent: usize,
    /// Number of drains; the cursor is reset between passes.
    #[arg(long, global = true, default_value_t = 1)]
    passes: usize,
    /// Print items without their cursor positions.
    #[arg(long, global = true)]
    no_positions: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Drain a literal sequence given on the command line.
    List {
        /// Items in order.
        items: Vec<String>,
    },
    /// Drain the elements of an outline file in pre-order.
    Tree {
        /// Outline file (one node per line, nesting by indentation).
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = WalkConfig::default()
        .with_indent_width(cli.indent)
        .and_then(|config| config.with_passes(cli.passes))
        .map(|config| config.with_positions(!cli.no_positions))
        .context("invalid options")?;

    match cli.command {
        Commands::List { items } => run_list(items, &config)?,
        Commands::Tree { file } => run_tree(file, &config)?,
    }

    Ok(())
}

fn run_list(items: Vec<String>, config: &WalkConfig) -> Result<()> {
    let mut seq = SequenceIterator::new(items);
    write_passes(&mut io::stdout().lock(), &mut seq, config).context("failed to write output")
}

fn run_tree(path: PathBuf, config: &WalkConfig) -> Result<()> {
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read outline from {}", path.display()))?;
    let roots = OutlineReader::from_config(config)
        .read(&contents)
        .with_context(|| format!("failed to parse outline {}", path.display()))?;

    let mut seq: SequenceIterator<&Element> =
        roots.iter().flat_map(|root| root.elements()).collect();
    if seq.is_empty() {
        println!("No elements found.");
        return Ok(());
    }
    write_passes(&mut io::stdout().lock(), &mut seq, config).context("failed to write output")
}

/// Drain `seq` once per configured pass, resetting between passes.
fn write_passes<W: Write, T: Display>(
    out: &mut W,
    seq: &mut SequenceIterator<T>,
    config: &WalkConfig,
) -> io::Result<()> {
    for pass in 0..config.passes {
        if pass > 0 {
            seq.reset();
        }
        if config.passes > 1 {
            writeln!(out, "# pass {}", pass + 1)?;
        }
        loop {
            let position = seq.position();
            let Some(item) = seq.advance() else { break };
            if config.show_positions {
                writeln!(out, "{}\t{}", position, item)?;
            } else {
                writeln!(out, "{}", item)?;
            }
        }
    }
    Ok(())
}
