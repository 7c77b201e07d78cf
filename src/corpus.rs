use crate::error::{KeResult, KeyEvalError};
use itertools::Itertools;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// N-gram string → occurrence count. Ordered so every sum over it is reproducible.
pub type NgramTable = BTreeMap<String, u64>;

/// Character → occurrence count.
pub type CharTable = BTreeMap<char, u64>;

/// A body of text and its n-gram statistics.
///
/// Tables are computed on first access and kept for the lifetime of the value.
/// `clean` and `limit` replace the whole value, so a stale table can never survive them.
///
/// A corpus built from a frequency table ("mockup" mode) has no text: its tables are
/// fixed at construction and a typing simulation over it moves no fingers.
#[derive(Clone)]
pub struct Corpus {
    name: String,
    text: Option<String>,
    unigrams: OnceLock<CharTable>,
    bigrams: OnceLock<NgramTable>,
    trigrams: OnceLock<NgramTable>,
}

impl Corpus {
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            unigrams: OnceLock::new(),
            bigrams: OnceLock::new(),
            trigrams: OnceLock::new(),
        }
    }

    pub fn from_tables(
        name: impl Into<String>,
        unigrams: CharTable,
        bigrams: NgramTable,
        trigrams: NgramTable,
    ) -> Self {
        Self {
            name: name.into(),
            text: None,
            unigrams: OnceLock::from(unigrams),
            bigrams: OnceLock::from(bigrams),
            trigrams: OnceLock::from(trigrams),
        }
    }

    /// Concatenates every regular file under `path` (recursively, sorted by file name)
    /// into one corpus named after the directory.
    pub fn load<P: AsRef<Path>>(path: P) -> KeResult<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(KeyEvalError::CorpusNotFound(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        let mut text = String::new();
        let mut files = 0usize;
        let walker = WalkDir::new(path).follow_links(false).sort_by_file_name();
        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let bytes = fs::read(entry.path())?;
            text.push_str(&String::from_utf8_lossy(&bytes));
            files += 1;
        }

        info!("📚 Loaded corpus '{}' from {} files", name, files);
        Ok(Self::from_text(name, text))
    }

    /// Reads a tab separated `ngram<TAB>count` table. Keys of length 1, 2 and 3 fill the
    /// unigram, bigram and trigram tables; anything else is skipped.
    pub fn from_frequency_table<R: Read>(name: impl Into<String>, reader: R) -> KeResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut unigrams = CharTable::new();
        let mut bigrams = NgramTable::new();
        let mut trigrams = NgramTable::new();
        let mut skipped = 0usize;

        for rec in rdr.records().flatten() {
            if rec.len() < 2 || rec[0].is_empty() {
                skipped += 1;
                continue;
            }
            let key = &rec[0];
            let count: u64 = match rec[1].trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };

            let chars: Vec<char> = key.chars().collect();
            match chars.len() {
                1 => *unigrams.entry(chars[0]).or_default() += count,
                2 => *bigrams.entry(key.to_string()).or_default() += count,
                3 => *trigrams.entry(key.to_string()).or_default() += count,
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("Skipped {} rows in frequency table", skipped);
        }

        Ok(Self::from_tables(name, unigrams, bigrams, trigrams))
    }

    pub fn load_frequency_table<P: AsRef<Path>>(path: P) -> KeResult<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let file = File::open(path)?;
        Self::from_frequency_table(name, file)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw text, `None` for a corpus built from a frequency table.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_mockup(&self) -> bool {
        self.text.is_none()
    }

    pub fn unigrams(&self) -> &CharTable {
        self.unigrams.get_or_init(|| {
            let mut table = CharTable::new();
            for c in self.text.as_deref().unwrap_or_default().chars() {
                *table.entry(c).or_default() += 1;
            }
            table
        })
    }

    pub fn bigrams(&self) -> &NgramTable {
        self.bigrams.get_or_init(|| {
            let mut table = NgramTable::new();
            let text = self.text.as_deref().unwrap_or_default();
            for (a, b) in text.chars().tuple_windows() {
                *table.entry(String::from_iter([a, b])).or_default() += 1;
            }
            table
        })
    }

    pub fn trigrams(&self) -> &NgramTable {
        self.trigrams.get_or_init(|| {
            let mut table = NgramTable::new();
            let text = self.text.as_deref().unwrap_or_default();
            for (a, b, c) in text.chars().tuple_windows() {
                *table.entry(String::from_iter([a, b, c])).or_default() += 1;
            }
            table
        })
    }

    /// Total character count.
    pub fn length(&self) -> u64 {
        self.unigrams().values().sum()
    }

    pub fn char_usage(&self, c: char) -> u64 {
        self.unigrams().get(&c).copied().unwrap_or(0)
    }

    /// Sorted unique characters of the corpus.
    pub fn chars(&self) -> String {
        self.unigrams().keys().collect()
    }

    /// Copy of this corpus keeping only `allowed` characters. Tabs and newlines are
    /// turned into spaces before filtering.
    pub fn cleaned(&self, allowed: &str) -> Corpus {
        let allowed: HashSet<char> = allowed.chars().collect();
        match &self.text {
            Some(text) => {
                let text: String = text
                    .chars()
                    .map(|c| if c == '\t' || c == '\n' { ' ' } else { c })
                    .filter(|c| allowed.contains(c))
                    .collect();
                Corpus::from_text(self.name.clone(), text)
            }
            None => {
                let keep = |s: &str| s.chars().all(|c| allowed.contains(&c));
                let unigrams = self
                    .unigrams()
                    .iter()
                    .filter(|(c, _)| allowed.contains(*c))
                    .map(|(c, n)| (*c, *n))
                    .collect();
                let filter = |table: &NgramTable| -> NgramTable {
                    table
                        .iter()
                        .filter(|(k, _)| keep(k))
                        .map(|(k, n)| (k.clone(), *n))
                        .collect()
                };
                Corpus::from_tables(
                    self.name.clone(),
                    unigrams,
                    filter(self.bigrams()),
                    filter(self.trigrams()),
                )
            }
        }
    }

    /// Copy of this corpus truncated to its first `length` characters.
    pub fn limited(&self, length: usize) -> Corpus {
        match &self.text {
            Some(text) => Corpus::from_text(self.name.clone(), text.chars().take(length).collect::<String>()),
            None => {
                warn!(
                    "Corpus '{}' is a frequency table; limit({}) has no effect",
                    self.name, length
                );
                self.clone()
            }
        }
    }

    pub fn clean(&mut self, allowed: &str) {
        *self = self.cleaned(allowed);
    }

    pub fn limit(&mut self, length: usize) {
        *self = self.limited(length);
    }
}

impl fmt::Debug for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Corpus")
            .field("name", &self.name)
            .field("mockup", &self.is_mockup())
            .field("length", &self.length())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliding_windows_overlap() {
        let corpus = Corpus::from_text("t", "aab");
        assert_eq!(corpus.bigrams().get("aa"), Some(&1));
        assert_eq!(corpus.bigrams().get("ab"), Some(&1));
        assert_eq!(corpus.trigrams().get("aab"), Some(&1));
        assert_eq!(corpus.trigrams().len(), 1);
    }

    #[test]
    fn test_multibyte_chars_count_once() {
        let corpus = Corpus::from_text("ru", "привет");
        assert_eq!(corpus.length(), 6);
        assert_eq!(corpus.bigrams().values().sum::<u64>(), 5);
        assert_eq!(corpus.char_usage('п'), 1);
    }
}
