use hashbrown::HashMap;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    word_end: bool,
}

/// Prefix tree over lower-cased words. Lookups fold case, so grid letters can
/// be passed in as they are.
#[derive(Debug, Default, Clone)]
pub struct PrefixTrie {
    root: TrieNode,
    words: usize,
}

impl PrefixTrie {
    pub fn new() -> Self {
        PrefixTrie::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = PrefixTrie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Add `word`; inserting a word already present changes nothing.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars().flat_map(char::to_lowercase) {
            node = node.children.entry(c).or_default();
        }
        if !node.word_end {
            node.word_end = true;
            self.words += 1;
        }
    }

    /// Read newline-separated words, skipping blanks, `#` comments and entries
    /// shorter than `minimum_length`. Returns how many lines were inserted.
    pub fn extend_from_text(&mut self, text: &str, minimum_length: usize) -> usize {
        let mut inserted = 0;
        for line in text.lines() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') || word.chars().count() < minimum_length {
                continue;
            }
            self.insert(word);
            inserted += 1;
        }
        inserted
    }

    fn walk(&self, s: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in s.chars().flat_map(char::to_lowercase) {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// `s` is a complete word.
    pub fn contains_word(&self, s: &str) -> bool {
        self.walk(s).is_some_and(|node| node.word_end)
    }

    /// Some word starts with `s` (or is `s`).
    pub fn is_prefix(&self, s: &str) -> bool {
        self.walk(s).is_some()
    }

    /// Number of distinct words stored.
    pub const fn len(&self) -> usize {
        self.words
    }

    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }
}
