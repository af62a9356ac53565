use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use word_search::{
    format_grid, format_placements, generate, normalize_words, random_seed, Config,
    DictionaryCache,
};

fn read_wordlist(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {path:?}"))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn main() -> Result<()> {
    let config = Config::parse();

    env_logger::Builder::from_default_env()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .parse_default_env()
        .init();

    let raw_words = match &config.wordlist_file {
        Some(path) => read_wordlist(path)?,
        None => config.words.clone(),
    };
    let words = normalize_words(&raw_words);
    if words.is_empty() {
        anyhow::bail!("Please provide at least one word or a wordlist file.");
    }

    let seed = config.random_seed.unwrap_or_else(random_seed);
    println!("Using random seed: {seed}");

    let mut cache = DictionaryCache::new();
    let dictionary = cache.get_or_load(&config.dictionary_sources())?;
    if dictionary.is_none() {
        info!("No dictionary found, accidental words will not be checked");
    }

    let puzzle = generate(&words, &config.generator_options(seed), dictionary)?;

    println!("{}", format_placements(&puzzle.placements));
    println!("{}", format_grid(&puzzle.answer_key));

    fs::write(&config.output, format_grid(&puzzle.grid))
        .with_context(|| format!("Failed to write {:?}", config.output))?;
    info!("Wrote word search to {:?}", config.output);

    Ok(())
}
