#![allow(clippy::print_stdout)]

use clap::Parser;
use unichain::{ChainedMap, TableConfig, UnichainError};

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "capacity", default_value_t = 5)]
    capacity: usize,
    #[arg(short = 'p', long = "prime", default_value_t = 11)]
    prime: u64,
    #[arg(short = 't', long = "threshold", default_value_t = 0.7)]
    threshold: f64,
    #[arg(short = 'n', long = "num-keys", default_value_t = 20)]
    num_keys: usize,
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,
}

fn main() -> Result<(), UnichainError> {
    let args = Args::parse();

    let mut config = TableConfig::default()
        .with_initial_capacity(args.capacity)
        .with_initial_prime(args.prime)
        .with_load_factor_threshold(args.threshold);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut map: ChainedMap<String, usize> = ChainedMap::new(config)?;

    println!("Inserting key-value pairs:");
    for i in 0..args.num_keys {
        map.insert(format!("key{}", i), i)?;
    }
    print!("{}", map);

    println!("\nSearch results:");
    for key in ["key10", "key19", "nonexistent_key"] {
        println!("Search '{}': {:?}", key, map.get(key));
    }

    println!("\nDeleting 'key10' and 'key19':");
    map.remove("key10");
    map.remove("key19");
    print!("{}", map);

    println!("\n{:#?}", map.stats());
    Ok(())
}
