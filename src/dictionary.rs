use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

use crate::error::{Result, WordSearchError};
use crate::trie::PrefixTrie;

/// Shortest general dictionary entry that counts as a word.
pub const DICTIONARY_MIN_LENGTH: usize = 2;
/// Disallowed words are banned at any length.
pub const DISALLOWED_MIN_LENGTH: usize = 1;

/// Word lists whose entries must not show up in a finished grid by accident.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct DictionarySources {
    pub dictionary: Option<PathBuf>,
    pub disallowed: Option<PathBuf>,
}

impl DictionarySources {
    fn present(path: &Option<PathBuf>) -> Option<&Path> {
        path.as_deref().filter(|p| p.is_file())
    }

    /// Configured paths that are not readable files.
    pub fn missing(&self) -> Vec<&Path> {
        [&self.dictionary, &self.disallowed]
            .into_iter()
            .filter_map(|path| path.as_deref())
            .filter(|path| !path.is_file())
            .collect()
    }

    /// At least one of the lists exists on disk.
    pub fn any_present(&self) -> bool {
        Self::present(&self.dictionary).is_some() || Self::present(&self.disallowed).is_some()
    }

    /// Build a trie from whichever lists exist; None when neither does.
    pub fn load(&self) -> Result<Option<PrefixTrie>> {
        for path in self.missing() {
            warn!("Word list {path:?} does not exist, skipping it");
        }
        if !self.any_present() {
            return Ok(None);
        }
        let mut trie = PrefixTrie::new();
        if let Some(path) = Self::present(&self.dictionary) {
            info!("Loading dictionary words from {path:?}");
            let count = trie.extend_from_text(&read_list(path)?, DICTIONARY_MIN_LENGTH);
            info!("Loaded {count} dictionary words");
        }
        if let Some(path) = Self::present(&self.disallowed) {
            info!("Loading disallowed words from {path:?}");
            let count = trie.extend_from_text(&read_list(path)?, DISALLOWED_MIN_LENGTH);
            info!("Loaded {count} disallowed words");
        }
        Ok(Some(trie))
    }
}

fn read_list(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| WordSearchError::DictionaryRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Caller-owned memo of the last trie built, so repeated generations in one
/// process only pay for loading once.
#[derive(Debug, Default)]
pub struct DictionaryCache {
    loaded: Option<(DictionarySources, Option<PrefixTrie>)>,
    loads: usize,
}

impl DictionaryCache {
    pub fn new() -> Self {
        DictionaryCache::default()
    }

    pub fn get_or_load(&mut self, sources: &DictionarySources) -> Result<Option<&PrefixTrie>> {
        let stale = self.loaded.as_ref().map_or(true, |(cached, _)| cached != sources);
        if stale {
            let trie = sources.load()?;
            self.loads += 1;
            self.loaded = Some((sources.clone(), trie));
        }
        Ok(self.loaded.as_ref().and_then(|(_, trie)| trie.as_ref()))
    }

    /// How many times a trie has actually been built.
    pub const fn loads(&self) -> usize {
        self.loads
    }
}
