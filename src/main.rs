use std::fmt::Display;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use bintree::{input, BinTree, Sequence};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "bintree",
    about = "Build binary search trees from `$$`-terminated lists of tokens"
)]
struct Cli {
    /// Input file. Reads stdin when omitted.
    input: Option<PathBuf>,
    /// Parse elements as integers instead of strings.
    #[arg(long)]
    numeric: bool,
    /// Also print each tree sideways.
    #[arg(long)]
    sideways: bool,
    /// Report the height of this element in every tree. May be repeated.
    #[arg(long = "height", value_name = "ELEMENT")]
    heights: Vec<String>,
    /// Flatten every tree and rebuild it balanced.
    #[arg(long)]
    rebalance: bool,
    /// Log more (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = read_input(cli.input.as_deref())?;
    if cli.numeric {
        run::<i64>(&cli, &text)
    } else {
        run::<String>(&cli, &text)
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run<T>(cli: &Cli, text: &str) -> Result<()>
where
    T: FromStr + Ord + Display,
    T::Err: Display,
{
    let trees = input::parse_trees::<T>(text).context("failed to parse input")?;
    let targets = cli
        .heights
        .iter()
        .map(|raw| {
            raw.parse::<T>()
                .map(|target| (raw.as_str(), target))
                .map_err(|e| anyhow!("invalid height query {:?}: {}", raw, e))
        })
        .collect::<Result<Vec<_>>>()?;
    info!(trees = trees.len(), queries = targets.len(), "processing input");

    for (index, mut tree) in trees.into_iter().enumerate() {
        print!("tree {}: {}", index + 1, tree);
        if cli.sideways {
            tree.display_sideways();
        }
        for (raw, target) in &targets {
            println!("height of {}: {}", raw, tree.height_of(target));
        }
        if cli.rebalance {
            rebalance(&mut tree).with_context(|| format!("failed to rebalance tree {}", index + 1))?;
            print!("rebalanced (height {}): {}", tree.height(), tree);
            if cli.sideways {
                tree.display_sideways();
            }
        }
    }

    Ok(())
}

fn rebalance<T: Ord>(tree: &mut BinTree<T>) -> bintree::Result<()> {
    let mut sequence = Sequence::with_capacity(tree.len());
    tree.flatten_into(&mut sequence)?;
    tree.rebuild_from(&mut sequence)
}
