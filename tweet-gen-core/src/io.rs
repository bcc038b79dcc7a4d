use std::path::Path;
use std::{fs, io};

/// Characters separating two words of a corpus.
pub const DELIMITERS: [char; 4] = [' ', '\n', '\t', '\r'];

/// Splits `text` into words.
///
/// - Splits on [`DELIMITERS`]
/// - Runs of delimiters never produce empty words
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
	text.split(DELIMITERS).filter(|word| !word.is_empty())
}

/// Reads a text file and returns all its words as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Invalid UTF-8 sequences become U+FFFD instead of failing the read
/// - Words are returned in document order
pub fn read_words<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let bytes = fs::read(filename)?;
	let contents = String::from_utf8_lossy(&bytes);
	Ok(split_words(&contents).map(str::to_owned).collect())
}
