use crate::config::Thresholds;
use crate::keyboard::Key;
use std::cmp::Ordering;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BigramInteraction {
    pub is_same_hand: bool,
    pub is_same_key: bool,
    pub is_same_finger: bool,

    // Interaction Types
    pub is_sfb: bool,
    pub is_full_scissor: bool,
    pub is_half_scissor: bool,
    pub is_lateral_stretch: bool,

    // Geometric Details (layout units)
    pub distance: f64,
    pub row_diff: f64,
    pub col_diff: f64,
}

/// True when `a` sits physically above `b`: row order first, center y within a row.
pub fn is_higher(a: &Key, b: &Key) -> bool {
    match a.row.cmp(&b.row) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => a.center().1 < b.center().1,
    }
}

/// Classifies a key pair. `is_sfb` here means "same finger, different key"; callers
/// working on characters narrow it further.
pub fn analyze_bigram(k1: &Key, k2: &Key, one_unit: f64, thresholds: &Thresholds) -> BigramInteraction {
    let (x1, y1) = k1.center();
    let (x2, y2) = k2.center();

    let mut res = BigramInteraction {
        distance: k1.distance_to(k2) / one_unit,
        row_diff: (y1 - y2).abs() / one_unit,
        col_diff: (x1 - x2).abs() / one_unit,
        ..Default::default()
    };

    res.is_same_key = k1.key_code == k2.key_code;
    res.is_same_finger = k1.finger == k2.finger;
    res.is_sfb = res.is_same_finger && !res.is_same_key;

    if k1.hand() != k2.hand() {
        return res;
    }
    res.is_same_hand = true;

    if res.is_same_finger {
        return res;
    }

    // 1. Scissors: the finger that prefers height is stuck on the lower key
    let (upper, lower) = if is_higher(k1, k2) { (k1, k2) } else { (k2, k1) };
    let upper_pref = upper.finger.height_preference();
    let lower_pref = lower.finger.height_preference();
    assert_ne!(
        upper_pref, lower_pref,
        "fingers {} and {} share a height preference",
        upper.finger, lower.finger
    );

    if lower_pref > upper_pref {
        if res.row_diff >= thresholds.full_scissor_min_rows {
            res.is_full_scissor = true;
        } else if res.row_diff >= thresholds.half_scissor_min_rows {
            res.is_half_scissor = true;
        }
    }

    // 2. Lateral Stretch
    res.is_lateral_stretch = match k1.finger.distance_to(k2.finger) {
        1 => res.col_diff >= thresholds.lateral_adjacent_min,
        2 => res.col_diff >= thresholds.lateral_semi_adjacent_min,
        _ => false,
    };

    res
}
