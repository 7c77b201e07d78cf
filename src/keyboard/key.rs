use super::types::{Finger, Hand, Row};
use super::Keyboard;
use crate::corpus::Corpus;
use crate::geometry::{Layer, LogicalKey, Notch, PhysicalKey};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// One key: where it sits, who presses it and what it types.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Key {
    pub key_code: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub row: Row,
    pub finger: Finger,
    pub is_home: bool,
    pub notch: Option<Notch>,
    pub mappings: BTreeMap<Layer, String>,
    pub is_modifier: bool,
}

impl Key {
    pub fn new(key_code: impl Into<String>, physical: &PhysicalKey, logical: Option<&LogicalKey>) -> Self {
        let (mappings, is_modifier) = match logical {
            Some(l) => (l.mappings.clone(), l.is_modifier),
            None => (BTreeMap::new(), false),
        };

        Self {
            key_code: key_code.into(),
            x: physical.x,
            y: physical.y,
            w: physical.w,
            h: physical.h,
            row: physical.row,
            finger: physical.finger,
            is_home: physical.is_home,
            notch: physical.notch.clone(),
            mappings,
            is_modifier,
        }
    }

    #[inline(always)]
    pub fn hand(&self) -> Hand {
        self.finger.hand()
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Center of the part of the key a legend is drawn on. Notched keys (ISO Enter)
    /// put it inside the notch box.
    pub fn visual_center(&self) -> (f64, f64) {
        let (cx, cy) = self.center();
        match &self.notch {
            Some(notch) => (cx, self.y + notch.h / 2.0),
            None => (cx, cy),
        }
    }

    /// Label at `layer`, falling back to the nearest lower layer that has one.
    pub fn mapping(&self, layer: Layer) -> Option<&str> {
        match self.mappings.range(..=layer).next_back() {
            Some((_, label)) => Some(label.as_str()),
            None => {
                warn!("Key '{}' has no mapping on layer 0", self.key_code);
                None
            }
        }
    }

    /// The label at `layer` when it is exactly one character.
    pub fn char_at(&self, layer: Layer) -> Option<char> {
        let label = self.mapping(layer)?;
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// How often the character on `layer` occurs in `corpus`. Modifiers and
    /// multi-character labels never count.
    pub fn layer_usage(&self, layer: Layer, corpus: &Corpus) -> u64 {
        if self.is_modifier {
            return 0;
        }
        self.char_at(layer).map(|c| corpus.char_usage(c)).unwrap_or(0)
    }

    pub fn usage(&self, corpus: &Corpus) -> u64 {
        self.mappings
            .keys()
            .map(|&layer| self.layer_usage(layer, corpus))
            .sum()
    }

    pub fn frequency(&self, keyboard: &Keyboard) -> f64 {
        ratio(self.usage(keyboard.corpus()), keyboard.usage())
    }

    pub fn layer_frequency(&self, layer: Layer, keyboard: &Keyboard) -> f64 {
        ratio(self.layer_usage(layer, keyboard.corpus()), keyboard.usage())
    }

    pub fn distance_to(&self, other: &Key) -> f64 {
        let (x1, y1) = self.center();
        let (x2, y2) = other.center();
        (x2 - x1).hypot(y2 - y1)
    }
}

pub(crate) fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
