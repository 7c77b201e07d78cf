use crate::error::{KeResult, KeyEvalError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    #[command(flatten)]
    pub sources: SourceSettings,
    #[command(flatten)]
    pub thresholds: Thresholds,
}

/// Where the keyboard, layout and corpus come from, and how the corpus is prepared.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceSettings {
    /// Keyboard model JSON file, or "ansi" for the built-in geometry.
    #[arg(short = 'k', long, default_value = "ansi")]
    pub keyboard: String,

    /// Layout model JSON file, or a known layout name (qwerty, dvorak, ...).
    #[arg(short = 'l', long, default_value = "qwerty")]
    pub layout: String,

    /// Directory of text files to analyze.
    #[arg(long)]
    pub corpus: Option<String>,

    /// Pre-computed n-gram table (ngram<TAB>count) used instead of raw text.
    #[arg(long)]
    pub frequencies: Option<String>,

    /// Inline text, mostly for quick checks.
    #[arg(long)]
    pub text: Option<String>,

    /// Keep only these characters (tabs and newlines become spaces first).
    #[arg(long)]
    pub allowed_chars: Option<String>,

    /// Truncate the corpus to this many characters.
    #[arg(long)]
    pub limit: Option<usize>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            keyboard: "ansi".to_string(),
            layout: "qwerty".to_string(),
            corpus: None,
            frequencies: None,
            text: None,
            allowed_chars: None,
            limit: None,
        }
    }
}

/// Geometric thresholds of the bigram classifiers, in layout units.
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Thresholds {
    #[arg(long, default_value_t = 2.0)]
    pub full_scissor_min_rows: f64,
    #[arg(long, default_value_t = 1.0)]
    pub half_scissor_min_rows: f64,
    #[arg(long, default_value_t = 2.0)]
    pub lateral_adjacent_min: f64,
    #[arg(long, default_value_t = 3.5)]
    pub lateral_semi_adjacent_min: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            full_scissor_min_rows: 2.0,
            half_scissor_min_rows: 1.0,
            lateral_adjacent_min: 2.0,
            lateral_semi_adjacent_min: 3.5,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> KeResult<()> {
        let values = [
            ("full_scissor_min_rows", self.full_scissor_min_rows),
            ("half_scissor_min_rows", self.half_scissor_min_rows),
            ("lateral_adjacent_min", self.lateral_adjacent_min),
            ("lateral_semi_adjacent_min", self.lateral_semi_adjacent_min),
        ];
        for (name, v) in values {
            if !v.is_finite() || v < 0.0 {
                return Err(KeyEvalError::Config(format!("{} must be >= 0, got {}", name, v)));
            }
        }
        if self.half_scissor_min_rows > self.full_scissor_min_rows {
            return Err(KeyEvalError::Config(format!(
                "half_scissor_min_rows ({}) exceeds full_scissor_min_rows ({})",
                self.half_scissor_min_rows, self.full_scissor_min_rows
            )));
        }
        Ok(())
    }
}

impl Settings {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KeResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> KeResult<()> {
        self.thresholds.validate()?;
        let s = &self.sources;
        let given = [&s.corpus, &s.frequencies, &s.text]
            .iter()
            .filter(|o| o.is_some())
            .count();
        if given > 1 {
            return Err(KeyEvalError::Config(
                "Only one of corpus, frequencies or text may be set".to_string(),
            ));
        }
        if s.limit == Some(0) {
            return Err(KeyEvalError::Config("limit must be positive".to_string()));
        }
        Ok(())
    }

    /// Overwrites file values with flags the user actually typed.
    pub fn merge_from_cli(&mut self, cli: &Settings, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(sources.keyboard);
        update_if_present!(sources.layout);
        update_if_present!(sources.corpus);
        update_if_present!(sources.frequencies);
        update_if_present!(sources.text);
        update_if_present!(sources.allowed_chars);
        update_if_present!(sources.limit);

        update_if_present!(thresholds.full_scissor_min_rows);
        update_if_present!(thresholds.half_scissor_min_rows);
        update_if_present!(thresholds.lateral_adjacent_min);
        update_if_present!(thresholds.lateral_semi_adjacent_min);
    }
}
