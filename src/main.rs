use std::env::var;

use bstree::{parse_values, Tree};
use clap::Parser;
use eyre::{bail, Result as EyreResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{registry, EnvFilter};

const EXAMPLES: &str = r"Examples:
  # Build from random values, unbalance, and rebalance
  $ bstree

  # Reproducible run
  $ bstree --seed 42 --count 20

  # Start from explicit values
  $ bstree --values '1,7,4,23,8,9,4,3,5,7,9,67,6345,324'
";

/// Builds a balanced BST, knocks it off balance with inserts, and rebalances it, printing the
/// tree and its traversals along the way.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXAMPLES)]
struct Args {
    /// Initial values, separated by commas or whitespace. Random values are used when omitted.
    #[arg(long)]
    values: Option<String>,

    /// How many random values to start from
    #[arg(long, default_value_t = 15)]
    count: usize,

    /// Random values are drawn from `0..max`
    #[arg(long, default_value_t = 100)]
    max: u32,

    /// Seed for the random values
    #[arg(long)]
    seed: Option<u64>,

    /// How many values at or above `max` to insert before rebalancing
    #[arg(long, default_value_t = 5)]
    skew: u32,
}

fn main() -> EyreResult<()> {
    setup()?;

    let args = Args::parse();
    if args.max == 0 {
        bail!("--max must be at least 1");
    }

    let values = match &args.values {
        Some(raw) => parse_values(raw)?,
        None => random_values(args.count, args.max, args.seed),
    };
    info!(count = values.len(), "building tree");

    let mut tree = Tree::from_values(values);
    report(&tree);

    for offset in 0..args.skew {
        let value = args.max.saturating_add(offset);
        if !tree.insert(value) {
            info!(value, "already present");
        }
    }
    info!(skew = args.skew, "inserted values past the maximum");
    println!("{tree}");
    println!("balanced: {}", tree.is_balanced());

    tree.rebalance();
    info!("rebalanced");
    report(&tree);

    Ok(())
}

fn setup() -> EyreResult<()> {
    let directives = match var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => value,
        _ => "bstree=info".to_owned(),
    };

    registry()
        .with(EnvFilter::builder().parse(directives)?)
        .with(layer())
        .init();

    Ok(())
}

/// Bounded random integers to seed a new tree.
fn random_values(count: usize, max: u32, seed: Option<u64>) -> Vec<u32> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..count).map(|_| rng.gen_range(0..max)).collect()
}

fn report(tree: &Tree<u32>) {
    println!("{tree}");
    println!("balanced:    {}", tree.is_balanced());
    println!("level order: {:?}", tree.level_order());
    println!("pre order:   {:?}", tree.pre_order());
    println!("post order:  {:?}", tree.post_order());
    println!("in order:    {:?}", tree.in_order());
}
