//! Compares point-lookup latency between the AVL map and the unbalanced
//! reference map.
//!
//! Reads a word list, sorts it and inserts it into both engines in sorted
//! order, which degenerates the reference tree into a chain. Then every
//! word is looked up once in each engine and the elapsed wall-clock time
//! is printed. For a statistically sound comparison run the criterion
//! benchmarks instead.
//!
//! Usage: `search_timing <word-list>`

use std::env;
use std::fs;
use std::io;
use std::process::ExitCode;
use std::time::Instant;

use lextree::{AvlTreeMap, BstTreeMap, Latest};

const LOOKUPS: usize = 1_000;

fn main() -> ExitCode {
    let word_path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: search_timing <word-list>");
            return ExitCode::FAILURE;
        }
    };

    match run(&word_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("search_timing: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(word_path: &str) -> io::Result<()> {
    let text = fs::read_to_string(word_path)?;
    let mut words: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();
    words.sort_unstable();
    words.dedup();

    let mut avl: AvlTreeMap<String, Latest<usize>> = AvlTreeMap::new();
    let mut bst: BstTreeMap<String, Latest<usize>> = BstTreeMap::new();
    for (position, word) in words.iter().enumerate() {
        avl.insert_value(word.to_string(), position);
        bst.insert_value(word.to_string(), position);
    }

    println!(
        "{} keys inserted in sorted order: AVL height {}, reference height {}",
        words.len(),
        avl.height(),
        bst.height()
    );

    // The lexicographically last word sits at the bottom of the
    // reference chain.
    let needle = match words.last() {
        Some(word) => *word,
        None => return Ok(()),
    };

    let started = Instant::now();
    let mut found = 0usize;
    for _ in 0..LOOKUPS {
        if avl.get(needle).is_some() {
            found += 1;
        }
    }
    println!(
        "AVL search for {needle:?}: {found}/{LOOKUPS} hits in {:?}",
        started.elapsed()
    );

    let started = Instant::now();
    let mut found = 0usize;
    for _ in 0..LOOKUPS {
        if bst.get(needle).is_some() {
            found += 1;
        }
    }
    println!(
        "reference search for {needle:?}: {found}/{LOOKUPS} hits in {:?}",
        started.elapsed()
    );

    Ok(())
}
