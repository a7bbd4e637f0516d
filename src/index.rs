//! The word occurrence index: a session object over the AVL engine.

use std::fmt;
use std::io::{self, Write};

use crate::map::AvlTreeMap;
use crate::payload::{Occurrences, Payload};

/// A word occurrence index mapping each word to the line numbers it
/// appears on, in arrival order.
///
/// One index instance corresponds to one indexing run: it owns the tree
/// and the run counters, and is discarded with the run. The caller feeds
/// it already tokenized `(word, line)` records and finally renders the
/// ordered mapping into a sink.
///
/// ```
/// use lextree::OccurrenceIndex;
///
/// let mut index = OccurrenceIndex::new();
/// index.record("cat", 0);
/// index.record("dog", 1);
/// index.record("cat", 3);
/// assert_eq!(index.lines_of("cat"), Some(&[0, 3][..]));
///
/// let mut out = Vec::new();
/// index.write_to(&mut out).unwrap();
/// assert_eq!(out, b"cat: 0 3\ndog: 1\n");
/// ```
pub struct OccurrenceIndex {
    words: AvlTreeMap<String, Occurrences<u32>>,
    occurrences: u64,
}

impl OccurrenceIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            words: AvlTreeMap::new(),
            occurrences: 0,
        }
    }

    /// Records one occurrence of `word` on `line`.
    ///
    /// An existing word gets the line appended to its occurrence list; a
    /// new word is inserted with a singleton list. The word is only copied
    /// into an owned key when it is seen for the first time.
    pub fn record(&mut self, word: &str, line: u32) {
        if !self.words.update_or_append(word, line) {
            self.words.insert_value(word.to_owned(), line);
        }
        self.occurrences += 1;
    }

    /// Returns the line numbers recorded for a word, in arrival order.
    pub fn lines_of(&self, word: &str) -> Option<&[u32]> {
        self.words.get(word).map(Occurrences::as_slice)
    }

    /// Number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total number of occurrences recorded, duplicates included.
    pub fn occurrences(&self) -> u64 {
        self.occurrences
    }

    /// Gets an iterator over the indexed words in ascending order, each
    /// with its occurrence list.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.words
            .iter()
            .map(|(word, lines)| (word.as_str(), lines.as_slice()))
    }

    /// Writes the index to a sink, one `"word: l1 l2 l3"` line per word
    /// in ascending word order.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (word, lines) in self.words.iter() {
            write!(out, "{word}:")?;
            for line in lines.values() {
                write!(out, " {line}")?;
            }
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl Default for OccurrenceIndex {
    /// Creates an empty index.
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OccurrenceIndex {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_map().entries(self.iter()).finish()
    }
}
