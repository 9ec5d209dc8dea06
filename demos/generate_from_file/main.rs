//! Example reading text from a file, training a chain, and then printing `n` generated sentences.
//!
//! Usage: generate_from_file <FILE_PATH> <ORDER> <N>
//! Using `cargo run`: `cargo run --example generate_from_file -- <FILE_PATH> <ORDER> <N>`
//!
//! Set `RUST_LOG=sentencechain=debug` to see what the chain is up to.

use sentencechain::Chain;

use rand::thread_rng;
use std::{path::PathBuf, process::exit};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: generate_from_file <FILE_PATH> <ORDER> <N>";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 4 {
        println!("{USAGE}");
        exit(1);
    }

    let text =
        std::fs::read_to_string(PathBuf::from(args[1].clone())).expect("could not read file");
    let order = args[2].parse().expect("did not provide a valid order");
    let n: usize = args[3]
        .parse()
        .expect("did not provide a valid sentence number");

    let mut chain = Chain::new(order).expect("could not create chain");
    chain.add_text(&text);

    if let Some((key, continuations)) = chain.longest_chain() {
        let counts = continuations
            .counts()
            .into_iter()
            .map(|(token, seen)| format!("{token} x{seen}"))
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!("most common context: {key} -> {counts}");
    }

    let mut rng = thread_rng();
    for _ in 0..n {
        let sentence = chain
            .generate_sentence(&mut rng)
            .expect("failed to generate text");
        println!("{sentence}");
    }
}
