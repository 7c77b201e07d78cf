#![allow(dead_code)] // Not every test binary uses every helper

use keyeval::corpus::Corpus;
use keyeval::geometry::{KeyboardModel, LayoutModel, LogicalKey, Notch, PhysicalKey};
use keyeval::keyboard::{Finger, Keyboard, Row};
use keyeval::layouts::{ansi_keyboard, KnownLayout};
use std::collections::BTreeMap;
use std::sync::Arc;

pub const EPS: f64 = 1e-9;

pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog. \
    Pack my box with five dozen liquor jugs; sphinx of black quartz, judge my vow!";

/// Builder for one key, both its physical and logical record
pub struct KeyBuilder {
    code: String,
    physical: PhysicalKey,
    logical: LogicalKey,
}

impl KeyBuilder {
    pub fn new(code: &str, x: f64, y: f64) -> Self {
        Self {
            code: code.to_string(),
            physical: PhysicalKey {
                x,
                y,
                w: 1.0,
                h: 1.0,
                row: Row::Home,
                finger: Finger::LeftIndex,
                is_home: false,
                notch: None,
            },
            logical: LogicalKey::default(),
        }
    }

    pub fn size(mut self, w: f64, h: f64) -> Self {
        self.physical.w = w;
        self.physical.h = h;
        self
    }

    pub fn row(mut self, row: Row) -> Self {
        self.physical.row = row;
        self
    }

    pub fn finger(mut self, finger: u8) -> Self {
        self.physical.finger = Finger::from_index(finger).expect("finger in 1..=10");
        self
    }

    pub fn home(mut self) -> Self {
        self.physical.is_home = true;
        self
    }

    pub fn notch(mut self, w: f64, h: f64) -> Self {
        self.physical.notch = Some(Notch {
            place: "top".to_string(),
            w,
            h,
        });
        self
    }

    pub fn map(mut self, layer: u8, label: &str) -> Self {
        self.logical.mappings.insert(layer, label.to_string());
        self
    }

    pub fn modifier(mut self) -> Self {
        self.logical.is_modifier = true;
        self
    }

    pub fn build(self) -> keyeval::keyboard::Key {
        keyeval::keyboard::Key::new(self.code, &self.physical, Some(&self.logical))
    }
}

/// Assembles keyboard + layout records from key builders
pub struct BoardBuilder {
    one_unit: f64,
    keys: Vec<KeyBuilder>,
}

impl BoardBuilder {
    pub fn new(one_unit: f64) -> Self {
        Self {
            one_unit,
            keys: Vec::new(),
        }
    }

    pub fn key(mut self, key: KeyBuilder) -> Self {
        self.keys.push(key);
        self
    }

    pub fn models(self) -> (KeyboardModel, LayoutModel) {
        let mut keyboard = BTreeMap::new();
        let mut layout = BTreeMap::new();
        for k in self.keys {
            keyboard.insert(k.code.clone(), k.physical);
            layout.insert(k.code, k.logical);
        }
        (
            KeyboardModel {
                name: "test_board".to_string(),
                one_unit: self.one_unit,
                keyboard,
            },
            LayoutModel {
                name: "test_layout".to_string(),
                layout,
            },
        )
    }

    pub fn build(self, text: &str) -> Keyboard {
        let (model, layout) = self.models();
        Keyboard::new(&model, &layout, Arc::new(Corpus::from_text("test", text))).unwrap()
    }
}

pub fn ansi(layout: KnownLayout, text: &str) -> Keyboard {
    ansi_with(layout, Corpus::from_text("test", text))
}

pub fn ansi_with(layout: KnownLayout, corpus: Corpus) -> Keyboard {
    Keyboard::new(&ansi_keyboard(), &layout.layout_model(), Arc::new(corpus)).unwrap()
}

pub fn qwerty(text: &str) -> Keyboard {
    ansi(KnownLayout::Qwerty, text)
}
