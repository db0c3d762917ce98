use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use fs_err as fs;
use serde_json::json;

use lessglob_core::{expand, Options};

mod config;
mod paths;

use config::Config;

/// Expands glob `@import` directives in LESS stylesheets into explicit
/// imports, one per matching file.
#[derive(Parser)]
#[clap(version, author, about)]
pub struct Cli {
    /// Stylesheet files or directories to process
    #[clap(required = true)]
    pub paths: Vec<PathBuf>,

    /// Extra directories to search after each file's own directory,
    /// in priority order
    #[clap(short = 'I', long = "include-path")]
    pub include_paths: Vec<PathBuf>,

    /// Glob patterns for matches that must never be emitted
    #[clap(long = "ignore")]
    pub ignore_paths: Vec<String>,

    /// Rewrite files in place
    #[clap(long, conflicts_with = "out_dir")]
    pub write: bool,

    /// Write results under this directory, mirroring the input layout
    #[clap(long)]
    pub out_dir: Option<PathBuf>,

    /// Output a per-file summary as JSON
    #[clap(long)]
    pub json: bool,
}

fn try_main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let current_dir = std::env::current_dir()?;

    // lessglob.toml provides project defaults; flags append to them
    let config = match Config::find(&current_dir) {
        Some(config) => config?,
        None => Config::default(),
    };

    let mut include_paths = config.include_paths;
    include_paths.extend(cli.include_paths.iter().cloned());
    let include_paths = include_paths
        .iter()
        .map(|p| paths::resolve_path(p))
        .collect::<Result<Vec<_>>>()?;

    let mut ignore_paths = config.ignore_paths;
    ignore_paths.extend(cli.ignore_paths.iter().cloned());

    let options = Options {
        include_paths,
        ignore_paths,
    };

    let inputs = paths::collect_inputs(&cli.paths)?;
    if inputs.is_empty() {
        bail!("No stylesheet files to process");
    }
    let to_stdout = !cli.write && cli.out_dir.is_none();
    if to_stdout && inputs.len() > 1 {
        bail!("Printing to stdout supports a single input file; use --write or --out-dir");
    }

    let mut summaries = Vec::new();
    for input in &inputs {
        let contents = fs::read_to_string(&input.file)?;
        let expanded = expand(&input.file, &contents, &options)
            .with_context(|| format!("Failed to expand {}", input.file.display()))?;
        let changed = expanded != contents;

        if let Some(out_dir) = &cli.out_dir {
            let target = out_dir.join(&input.relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, &expanded)?;
        } else if cli.write {
            if changed {
                fs::write(&input.file, &expanded)?;
            }
        } else {
            print!("{}", expanded);
        }

        summaries.push(json!({
            "path": input.file,
            "changed": changed,
        }));
        if !to_stdout && !cli.json {
            if changed {
                println!("Expanded: {}", input.file.display());
            } else {
                println!("Unchanged: {}", input.file.display());
            }
        }
    }

    if cli.json && !to_stdout {
        println!("{}", serde_json::to_string(&summaries)?);
    }
    Ok(())
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        ::std::process::exit(1)
    }
}
