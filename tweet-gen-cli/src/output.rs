use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use tweet_gen_core::{Termination, Tweet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	Text,
	Json,
}

/// One line of JSON output.
#[derive(Serialize)]
struct TweetRecord {
	index: usize,
	text: String,
	words: usize,
	termination: Termination,
}

/// Writes `tweet`, numbered from 1, in the requested format.
pub fn write_tweet<W: Write>(out: &mut W, format: OutputFormat, index: usize, tweet: &Tweet<'_>) -> io::Result<()> {
	match format {
		OutputFormat::Text => writeln!(out, "Tweet {index}: {tweet}"),
		OutputFormat::Json => {
			let record = TweetRecord {
				index,
				text: tweet.to_string(),
				words: tweet.len(),
				termination: tweet.termination(),
			};
			serde_json::to_writer(&mut *out, &record)?;
			writeln!(out)
		}
	}
}
