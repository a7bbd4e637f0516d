//! Builds a word occurrence index from a text file.
//!
//! Reads the text line by line, lowercases it, splits it on non-alphabetic
//! characters, drops stop words and records every remaining word with its
//! line number. The finished index is written to stdout, one
//! `"word: l1 l2 l3"` line per word in ascending word order.
//!
//! Usage: `word_index <text-file> [stop-word-file]`

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

use lextree::OccurrenceIndex;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let text_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: word_index <text-file> [stop-word-file]");
            return ExitCode::FAILURE;
        }
    };
    let stop_path = args.next();

    match run(&text_path, stop_path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("word_index: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(text_path: &str, stop_path: Option<&str>) -> io::Result<()> {
    let stop_words = match stop_path {
        Some(path) => read_stop_words(path)?,
        None => Vec::new(),
    };
    let text = fs::read_to_string(text_path)?;

    let started = Instant::now();
    let mut index = OccurrenceIndex::new();
    for (line_number, line) in text.lines().enumerate() {
        for word in tokenize(line) {
            if stop_words.iter().any(|stop| stop == &word) {
                continue;
            }
            index.record(&word, line_number as u32);
        }
    }
    eprintln!(
        "indexed {} occurrences of {} distinct words in {:?}",
        index.occurrences(),
        index.len(),
        started.elapsed()
    );

    let mut out = BufWriter::new(io::stdout().lock());
    index.write_to(&mut out)?;
    out.flush()
}

fn read_stop_words(path: &str) -> io::Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(|word| word.trim().to_ascii_lowercase())
        .filter(|word| !word.is_empty())
        .collect())
}

fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_ascii_lowercase())
}
