use anyhow::Result;
use boggle_solver::{
    Error, Grid, Limits, Solver, DEFAULT_HEIGHT, DEFAULT_MAX_WORD_LEN, DEFAULT_MIN_WORD_LEN,
    DEFAULT_WIDTH,
};
use clap::Parser;
use std::time::Instant;

/// Find all words on a random boggle board
#[derive(Parser, Debug)]
struct Args {
    /// File with one word per line
    #[arg(default_value = "wordlists/words.txt")]
    wordfile: String,
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    /// Minimum word length
    #[arg(long, default_value_t = DEFAULT_MIN_WORD_LEN)]
    min: usize,
    /// Maximum word length
    #[arg(long, default_value_t = DEFAULT_MAX_WORD_LEN)]
    max: usize,
    /// Seed for a reproducible board
    #[arg(long)]
    seed: Option<u64>,
}

fn run(args: Args) -> Result<()> {
    let t0 = Instant::now();
    let solver =
        Solver::new(Limits::new(args.min, args.max)?).with_dictionary_from_file(&args.wordfile)?;
    println!("Read {} in {:?}", solver.dictionary(), t0.elapsed());

    let grid = match args.seed {
        Some(seed) => Grid::random_seeded(args.width, args.height, seed)?,
        None => Grid::random(args.width, args.height, &mut rand::thread_rng())?,
    };
    println!("Random board is:");
    for row in grid.to_strings() {
        println!("  {}", row);
    }
    println!();

    println!("All words:");
    for word in solver.find_words(&grid) {
        println!("  {}", word);
    }
    println!();

    let t0 = Instant::now();
    let stats = solver.par_word_stats(&grid);
    println!("Totals (in {:?}):", t0.elapsed());
    println!("  words: {}", stats.total());
    println!("  unique words: {}", stats.unique());
    println!();

    println!("Interesting Facts");
    match stats.most_frequent() {
        Err(Error::NoMatches) => println!("  This board contains no words."),
        Err(err) => return Err(err.into()),
        Ok((1, _)) => println!("  No words appear more than once on the board."),
        Ok((highest, words)) => println!(
            "  The following word(s) appeared {} times: {}.",
            highest,
            words.join(", ")
        ),
    }
    Ok(())
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {:?}", err);
    }
}
