use crate::error::{KeResult, KeyEvalError};
use crate::geometry::{KeyboardModel, LayoutModel, LogicalKey, PhysicalKey, DEFAULT_ONE_UNIT};
use crate::keyboard::{Finger, Row};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Name accepted by `--keyboard` for the built-in geometry.
pub const ANSI: &str = "ansi";

/// Key codes of the 30-key alpha block, row by row (top, home, bottom).
pub const ALPHA_CODES: [&str; 30] = [
    "KeyQ", "KeyW", "KeyE", "KeyR", "KeyT", "KeyY", "KeyU", "KeyI", "KeyO", "KeyP", //
    "KeyA", "KeyS", "KeyD", "KeyF", "KeyG", "KeyH", "KeyJ", "KeyK", "KeyL", "Semicolon", //
    "KeyZ", "KeyX", "KeyC", "KeyV", "KeyB", "KeyN", "KeyM", "Comma", "Period", "Slash",
];

const DIGIT_CODES: [&str; 10] = [
    "Digit1", "Digit2", "Digit3", "Digit4", "Digit5", "Digit6", "Digit7", "Digit8", "Digit9", "Digit0",
];

// Finger per column of the main block
const COLUMN_FINGERS: [u8; 10] = [1, 2, 3, 4, 4, 7, 7, 8, 9, 10];

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Dvorak,
    Colemak,
    Workman,
    Sturdy,
}

impl KnownLayout {
    // Maps standard 30-key row-stagger.
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Qwerty => "qwertyuiopasdfghjkl;zxcvbnm,./",
            Self::Dvorak => "',.pyfgcrlaoeuidhtns;qjkxbmwvz",
            Self::Colemak => "qwfpgjluy;arstdhneiozxcvbkm,./",
            Self::Workman => "qdrwbjfup;ashtgyneoizxmcvkl,./",
            Self::Sturdy => "vmlhkqjou;strygfaeibxcdwnzp,./",
        }
    }

    /// Alpha block on layer 0 with uppercase letters on layer 1, plus digits,
    /// space and a left shift modifier.
    pub fn layout_model(&self) -> LayoutModel {
        let mut layout = BTreeMap::new();

        for (code, c) in ALPHA_CODES.iter().zip(self.get_str().chars()) {
            let mut mappings = BTreeMap::from([(0, c.to_string())]);
            if c.is_alphabetic() {
                mappings.insert(1, c.to_uppercase().to_string());
            }
            layout.insert(code.to_string(), logical(mappings, false));
        }

        for (code, c) in DIGIT_CODES.iter().zip("1234567890".chars()) {
            layout.insert(code.to_string(), logical(BTreeMap::from([(0, c.to_string())]), false));
        }

        layout.insert(
            "Space".to_string(),
            logical(BTreeMap::from([(0, " ".to_string())]), false),
        );
        layout.insert(
            "ShiftLeft".to_string(),
            logical(BTreeMap::from([(0, "shift".to_string())]), true),
        );

        LayoutModel {
            name: self.to_string(),
            layout,
        }
    }
}

fn logical(mappings: BTreeMap<u8, String>, is_modifier: bool) -> LogicalKey {
    LogicalKey { mappings, is_modifier }
}

fn physical(x: f64, y: f64, w: f64, row: Row, finger: u8, is_home: bool) -> PhysicalKey {
    let u = DEFAULT_ONE_UNIT;
    PhysicalKey {
        x: x * u,
        y: y * u,
        w: w * u,
        h: u,
        row,
        finger: Finger::from_index(finger).unwrap_or(Finger::LeftPinky),
        is_home,
        notch: None,
    }
}

/// Row-staggered ANSI main block: number row, three alpha rows, left shift and space.
pub fn ansi_keyboard() -> KeyboardModel {
    let mut keyboard = BTreeMap::new();

    for (i, code) in DIGIT_CODES.iter().enumerate() {
        let finger = COLUMN_FINGERS[i];
        keyboard.insert(code.to_string(), physical(1.0 + i as f64, 0.0, 1.0, Row::Number, finger, false));
    }
    keyboard.insert("Minus".into(), physical(11.0, 0.0, 1.0, Row::Number, 10, false));
    keyboard.insert("Equal".into(), physical(12.0, 0.0, 1.0, Row::Number, 10, false));

    // (row, first key offset in units, y in units)
    let rows = [(Row::Top, 1.5, 1.0), (Row::Home, 1.75, 2.0), (Row::Bottom, 2.25, 3.0)];
    for (r, (row, offset, y)) in rows.iter().enumerate() {
        for (i, code) in ALPHA_CODES[r * 10..(r + 1) * 10].iter().enumerate() {
            let finger = COLUMN_FINGERS[i];
            let is_home = *row == Row::Home && matches!(i, 0..=3 | 6..=9);
            keyboard.insert(code.to_string(), physical(offset + i as f64, *y, 1.0, *row, finger, is_home));
        }
    }

    keyboard.insert("BracketLeft".into(), physical(11.5, 1.0, 1.0, Row::Top, 10, false));
    keyboard.insert("BracketRight".into(), physical(12.5, 1.0, 1.0, Row::Top, 10, false));
    keyboard.insert("Quote".into(), physical(11.75, 2.0, 1.0, Row::Home, 10, false));
    keyboard.insert("ShiftLeft".into(), physical(0.0, 3.0, 2.25, Row::Bottom, 1, false));
    keyboard.insert("Space".into(), physical(3.75, 4.0, 6.25, Row::Space, 5, true));

    KeyboardModel {
        name: ANSI.to_string(),
        one_unit: DEFAULT_ONE_UNIT,
        keyboard,
    }
}

/// `ansi` or a keyboard model JSON file.
pub fn resolve_keyboard(source: &str) -> KeResult<KeyboardModel> {
    if source.eq_ignore_ascii_case(ANSI) {
        return Ok(ansi_keyboard());
    }
    KeyboardModel::load_from_file(source)
}

/// A layout model JSON file, or the name of a known layout.
pub fn resolve_layout(source: &str) -> KeResult<LayoutModel> {
    if Path::new(source).is_file() {
        return LayoutModel::load_from_file(source);
    }
    KnownLayout::from_str(&source.to_lowercase())
        .map(|l| l.layout_model())
        .map_err(|_| KeyEvalError::UnknownLayout(source.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_known_layouts_are_permutations() {
        for layout in KnownLayout::iter() {
            let s = layout.get_str();
            let unique: HashSet<char> = s.chars().collect();
            assert_eq!(s.chars().count(), 30, "{}", layout);
            assert_eq!(unique.len(), 30, "{} repeats a character", layout);
        }
    }

    #[test]
    fn test_ansi_has_one_home_key_per_finger() {
        let model = ansi_keyboard();
        let mut homes: Vec<Finger> = model.keyboard.values().filter(|k| k.is_home).map(|k| k.finger).collect();
        homes.sort();
        let before = homes.len();
        homes.dedup();
        assert_eq!(before, homes.len());
        assert_eq!(homes.len(), 9);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_resolve_layout_by_name() {
        let model = resolve_layout("Dvorak").unwrap();
        assert_eq!(model.name, "dvorak");
        assert!(matches!(
            resolve_layout("nonexistent_layout"),
            Err(KeyEvalError::UnknownLayout(_))
        ));
    }
}
