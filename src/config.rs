use std::path::PathBuf;

use clap::Parser;

use crate::api::GeneratorOptions;
use crate::dictionary::DictionarySources;
use crate::direction::Hardness;

/// Command-line configuration for the generator.
#[derive(Debug, Clone, Parser)]
#[command(name = "word-search")]
#[command(about = "Generate word searches")]
pub struct Config {
    /// Word to include in the word search (repeat for multiple)
    #[arg(long = "word", required_unless_present = "wordlist_file", conflicts_with = "wordlist_file")]
    pub words: Vec<String>,

    /// File containing words to include in the word search, one per line
    #[arg(long)]
    pub wordlist_file: Option<PathBuf>,

    /// Easy has all words left to right; medium adds backwards, down and
    /// right-down; hard adds right-up and left-(up/down)
    #[arg(long, value_enum, ignore_case = true, default_value_t = Hardness::Medium)]
    pub hardness_level: Hardness,

    /// Seed for the random numbers; reuse it to reproduce a word search
    #[arg(long)]
    pub random_seed: Option<u64>,

    /// Height of the word search (default: longest word + 2)
    #[arg(long)]
    pub height: Option<usize>,

    /// Width of the word search (default: longest word + 2)
    #[arg(long)]
    pub width: Option<usize>,

    /// Output file name
    #[arg(long, default_value = "wordsearch.txt")]
    pub output: PathBuf,

    /// Dictionary of words that must not appear by accident
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Offensive or otherwise disallowed words that must not appear by accident
    #[arg(long)]
    pub disallowed_words: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn generator_options(&self, seed: u64) -> GeneratorOptions {
        GeneratorOptions {
            width: self.width,
            height: self.height,
            hardness: self.hardness_level,
            seed: Some(seed),
        }
    }

    pub fn dictionary_sources(&self) -> DictionarySources {
        DictionarySources {
            dictionary: self.dictionary.clone(),
            disallowed: self.disallowed_words.clone(),
        }
    }
}
