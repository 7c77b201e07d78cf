pub mod key;
pub mod types;

pub use key::Key;
pub use types::{Finger, Hand, Row};

use crate::analysis::NgramMetrics;
use crate::config::Thresholds;
use crate::corpus::Corpus;
use crate::error::KeResult;
use crate::geometry::{KeyboardModel, LayoutModel};
use key::ratio;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
struct UsageTable {
    per_key: Vec<u64>,
    total: u64,
    max: u64,
}

/// A physical keyboard with a layout applied, bound to the corpus it is evaluated on.
///
/// Immutable once built. Usage aggregates and n-gram metrics are computed on first
/// access; to evaluate another corpus or layout, build a new `Keyboard`.
#[derive(Debug)]
pub struct Keyboard {
    name: String,
    layout_name: String,
    one_unit: f64,
    thresholds: Thresholds,
    keys: Vec<Key>,
    code_index: HashMap<String, usize>,
    char_index: HashMap<char, usize>,
    duplicates: Vec<char>,
    corpus: Arc<Corpus>,
    usage: OnceLock<UsageTable>,
    pub(crate) ngrams: OnceLock<NgramMetrics>,
}

impl Keyboard {
    pub fn new(model: &KeyboardModel, layout: &LayoutModel, corpus: Arc<Corpus>) -> KeResult<Self> {
        model.validate()?;

        for code in layout.layout.keys() {
            if !model.keyboard.contains_key(code) {
                debug!("Layout '{}' maps '{}' which is not on '{}'", layout.name, code, model.name);
            }
        }

        let keys: Vec<Key> = model
            .keyboard
            .iter()
            .map(|(code, physical)| Key::new(code.clone(), physical, layout.layout.get(code)))
            .collect();

        let code_index = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.key_code.clone(), i))
            .collect();

        let mut char_index: HashMap<char, usize> = HashMap::new();
        let mut duplicates = BTreeSet::new();
        for (i, key) in keys.iter().enumerate() {
            let chars: BTreeSet<char> = key.mappings.keys().filter_map(|&l| key.char_at(l)).collect();
            for c in chars {
                if let Some(&prev) = char_index.get(&c) {
                    if !key.is_modifier && !keys[prev].is_modifier {
                        duplicates.insert(c);
                    }
                }
                char_index.insert(c, i);
            }
        }

        for c in &duplicates {
            warn!("⚠️  Mapping {:?} repeats on layout '{}'", c, layout.name);
        }

        Ok(Self {
            name: model.name.clone(),
            layout_name: layout.name.clone(),
            one_unit: model.one_unit,
            thresholds: Thresholds::default(),
            keys,
            code_index,
            char_index,
            duplicates: duplicates.into_iter().collect(),
            corpus,
            usage: OnceLock::new(),
            ngrams: OnceLock::new(),
        })
    }

    /// Replaces the classifier thresholds. Cached n-gram metrics are dropped.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self.ngrams = OnceLock::new();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout_name(&self) -> &str {
        &self.layout_name
    }

    pub fn one_unit(&self) -> f64 {
        self.one_unit
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Keys sorted by key code.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn keys_is_home(&self) -> Vec<&Key> {
        self.keys.iter().filter(|k| k.is_home).collect()
    }

    pub fn key_by_code(&self, code: &str) -> Option<&Key> {
        self.code_index.get(code).map(|&i| &self.keys[i])
    }

    pub fn key_by_mapping(&self, c: char) -> Option<&Key> {
        self.char_index.get(&c).map(|&i| &self.keys[i])
    }

    /// Characters that more than one non-modifier key produces, sorted.
    pub fn duplicate_mappings(&self) -> &[char] {
        &self.duplicates
    }

    /// Sorted single-character labels of every non-modifier key.
    pub fn chars(&self) -> String {
        self.keys
            .iter()
            .filter(|k| !k.is_modifier)
            .flat_map(|k| k.mappings.keys().filter_map(move |&l| k.char_at(l)))
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect()
    }

    pub fn info(&self) -> String {
        format!(
            "Keyboard: {}\nLayout: {}\nCorpus: {}",
            self.name,
            self.layout_name,
            self.corpus.name()
        )
    }

    fn usage_table(&self) -> &UsageTable {
        self.usage.get_or_init(|| {
            let per_key: Vec<u64> = self.keys.iter().map(|k| k.usage(&self.corpus)).collect();
            let total = per_key.iter().sum();
            let max = per_key.iter().copied().max().unwrap_or(0);
            UsageTable { per_key, total, max }
        })
    }

    fn usage_where(&self, pred: impl Fn(&Key) -> bool) -> u64 {
        let table = self.usage_table();
        self.keys
            .iter()
            .zip(&table.per_key)
            .filter(|(k, _)| pred(k))
            .map(|(_, u)| *u)
            .sum()
    }

    /// Total key presses the corpus produces on this layout.
    pub fn usage(&self) -> u64 {
        self.usage_table().total
    }

    pub fn key_usage(&self, key: &Key) -> u64 {
        match self.code_index.get(&key.key_code) {
            Some(&i) => self.usage_table().per_key[i],
            None => key.usage(&self.corpus),
        }
    }

    pub fn key_max_usage(&self) -> u64 {
        self.usage_table().max
    }

    pub fn finger_usage(&self, finger: Finger) -> u64 {
        self.usage_where(|k| k.finger == finger)
    }

    pub fn hand_usage(&self, hand: Hand) -> u64 {
        self.usage_where(|k| k.hand() == hand)
    }

    pub fn row_usage(&self, row: Row) -> u64 {
        self.usage_where(|k| k.row == row)
    }

    pub fn key_frequency(&self, key: &Key) -> f64 {
        ratio(self.key_usage(key), self.usage())
    }

    pub fn finger_frequency(&self, finger: Finger) -> f64 {
        ratio(self.finger_usage(finger), self.usage())
    }

    pub fn hand_frequency(&self, hand: Hand) -> f64 {
        ratio(self.hand_usage(hand), self.usage())
    }

    pub fn row_frequency(&self, row: Row) -> f64 {
        ratio(self.row_usage(row), self.usage())
    }
}
