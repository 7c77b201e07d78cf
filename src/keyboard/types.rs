use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::{Display, EnumIter, EnumString};

/// The ten fingers, numbered from the left pinky (1) to the right pinky (10).
///
/// Serialized as the bare integer so layout records can write `finger: 4`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Finger {
    LeftPinky = 1,
    LeftRing = 2,
    LeftMiddle = 3,
    LeftIndex = 4,
    LeftThumb = 5,
    RightThumb = 6,
    RightIndex = 7,
    RightMiddle = 8,
    RightRing = 9,
    RightPinky = 10,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

/// Keyboard rows after the W3C naming, declared top to bottom.
///
/// The derived ordering follows declaration order, so `Row::Function < Row::Space`
/// reads as "the function row is above the space row".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Row {
    #[strum(serialize = "K")]
    #[serde(rename = "K")]
    Function,
    #[strum(serialize = "E")]
    #[serde(rename = "E")]
    Number,
    #[strum(serialize = "D")]
    #[serde(rename = "D")]
    Top,
    #[strum(serialize = "C")]
    #[serde(rename = "C")]
    Home,
    #[strum(serialize = "B")]
    #[serde(rename = "B")]
    Bottom,
    #[strum(serialize = "A")]
    #[serde(rename = "A")]
    Space,
}

impl Finger {
    pub const COUNT: usize = 10;

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::LeftPinky),
            2 => Some(Self::LeftRing),
            3 => Some(Self::LeftMiddle),
            4 => Some(Self::LeftIndex),
            5 => Some(Self::LeftThumb),
            6 => Some(Self::RightThumb),
            7 => Some(Self::RightIndex),
            8 => Some(Self::RightMiddle),
            9 => Some(Self::RightRing),
            10 => Some(Self::RightPinky),
            _ => None,
        }
    }

    /// 1-based finger number.
    #[inline(always)]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// 0-based slot for fixed-size per-finger arrays.
    #[inline(always)]
    pub fn slot(self) -> usize {
        self as usize - 1
    }

    #[inline(always)]
    pub fn hand(self) -> Hand {
        if self.index() <= 5 {
            Hand::Left
        } else {
            Hand::Right
        }
    }

    /// How strongly this finger prefers the physically higher key of a pair.
    /// Middle > ring > pinky > index > thumb.
    pub fn height_preference(self) -> u8 {
        match self {
            Self::LeftMiddle | Self::RightMiddle => 4,
            Self::LeftRing | Self::RightRing => 3,
            Self::LeftPinky | Self::RightPinky => 2,
            Self::LeftIndex | Self::RightIndex => 1,
            Self::LeftThumb | Self::RightThumb => 0,
        }
    }

    /// Sign of the finger-number step from `self` to `next`.
    #[inline(always)]
    pub fn direction_to(self, next: Finger) -> Ordering {
        self.index().cmp(&next.index())
    }

    #[inline(always)]
    pub fn distance_to(self, other: Finger) -> u8 {
        self.index().abs_diff(other.index())
    }
}

impl TryFrom<u8> for Finger {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Finger::from_index(value).ok_or_else(|| format!("finger must be in 1..=10, got {}", value))
    }
}

impl From<Finger> for u8 {
    fn from(finger: Finger) -> Self {
        finger.index()
    }
}

impl Hand {
    pub fn fingers(self) -> [Finger; 5] {
        match self {
            Hand::Left => [
                Finger::LeftPinky,
                Finger::LeftRing,
                Finger::LeftMiddle,
                Finger::LeftIndex,
                Finger::LeftThumb,
            ],
            Hand::Right => [
                Finger::RightThumb,
                Finger::RightIndex,
                Finger::RightMiddle,
                Finger::RightRing,
                Finger::RightPinky,
            ],
        }
    }
}

impl Row {
    /// W3C letter, lowercased, as used in report field names (`row_usage_c`).
    pub fn code(self) -> char {
        match self {
            Row::Function => 'k',
            Row::Number => 'e',
            Row::Top => 'd',
            Row::Home => 'c',
            Row::Bottom => 'b',
            Row::Space => 'a',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_hand_split() {
        let left: Vec<_> = Finger::iter().filter(|f| f.hand() == Hand::Left).collect();
        assert_eq!(left.len(), 5);
        assert!(left.iter().all(|f| f.index() <= 5));
        assert_eq!(Hand::Right.fingers()[0], Finger::RightThumb);
    }

    #[test]
    fn test_height_preference_distinct_per_hand() {
        for hand in Hand::iter() {
            let mut prefs: Vec<u8> = hand.fingers().iter().map(|f| f.height_preference()).collect();
            prefs.sort();
            prefs.dedup();
            assert_eq!(prefs.len(), 5);
        }
    }

    #[test]
    fn test_row_order_and_codes() {
        assert!(Row::Function < Row::Number);
        assert!(Row::Bottom < Row::Space);
        assert_eq!(Row::from_str("C").unwrap(), Row::Home);
        assert_eq!(Row::Home.to_string(), "C");
    }

    #[test]
    fn test_finger_serde_as_integer() {
        let f: Finger = serde_json::from_str("7").unwrap();
        assert_eq!(f, Finger::RightIndex);
        assert!(serde_json::from_str::<Finger>("11").is_err());
        assert_eq!(serde_json::to_string(&Finger::LeftThumb).unwrap(), "5");
    }
}
