use crate::hands::Hands;
use crate::keyboard::{Finger, Hand, Keyboard, Row};
use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Every metric of one keyboard + layout + corpus combination.
///
/// Travel distances are in key widths per corpus character; usages are fractions
/// of all key presses; n-gram frequencies are fractions of the n-gram table weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub keyboard: String,
    pub layout: String,
    pub corpus: String,
    pub corpus_length: u64,

    pub travel_distance: f64,
    pub travel_distance_left_hand: f64,
    pub travel_distance_right_hand: f64,
    pub travel_distance_finger: [f64; Finger::COUNT],

    pub finger_usage: [f64; Finger::COUNT],
    pub hand_usage_left: f64,
    pub hand_usage_right: f64,
    pub row_usage: BTreeMap<Row, f64>,

    pub same_finger_bigram_frequency: f64,
    pub same_finger_bigram_mean_distance: f64,
    pub same_finger_skipgram_frequency: f64,
    pub same_finger_skipgram_mean_distance: f64,
    pub bigram_mean_distance: f64,

    pub half_scissor_bigram_frequency: f64,
    pub full_scissor_bigram_frequency: f64,
    pub half_scissor_skipgram_frequency: f64,
    pub full_scissor_skipgram_frequency: f64,

    pub lateral_stretch_bigram_frequency: f64,
    pub lateral_stretch_skipgram_frequency: f64,

    pub roll_frequency: f64,
    pub alternate_frequency: f64,
    pub onehand_frequency: f64,
    pub redirect_frequency: f64,
}

impl LayoutReport {
    /// `hands` is expected to have typed `keyboard`'s corpus already.
    pub fn build(keyboard: &Keyboard, hands: &Hands) -> Self {
        let corpus_length = keyboard.corpus().length();
        let scale = keyboard.one_unit() * corpus_length as f64;
        let norm = |d: f64| if corpus_length == 0 { 0.0 } else { d / scale };

        let mut travel_distance_finger = [0.0; Finger::COUNT];
        let mut finger_usage = [0.0; Finger::COUNT];
        for finger in Finger::iter() {
            travel_distance_finger[finger.slot()] = norm(hands.finger(finger).travel_distance);
            finger_usage[finger.slot()] = keyboard.finger_frequency(finger);
        }

        let row_usage = Row::iter().map(|r| (r, keyboard.row_frequency(r))).collect();

        Self {
            keyboard: keyboard.name().to_string(),
            layout: keyboard.layout_name().to_string(),
            corpus: keyboard.corpus().name().to_string(),
            corpus_length,

            travel_distance: norm(hands.travel_distance()),
            travel_distance_left_hand: norm(hands.travel_distance_left_hand()),
            travel_distance_right_hand: norm(hands.travel_distance_right_hand()),
            travel_distance_finger,

            finger_usage,
            hand_usage_left: keyboard.hand_frequency(Hand::Left),
            hand_usage_right: keyboard.hand_frequency(Hand::Right),
            row_usage,

            same_finger_bigram_frequency: keyboard.sfb_frequency(),
            same_finger_bigram_mean_distance: keyboard.same_finger_bigram_mean_distance(),
            same_finger_skipgram_frequency: keyboard.sfs_frequency(),
            same_finger_skipgram_mean_distance: keyboard.same_finger_skipgram_mean_distance(),
            bigram_mean_distance: keyboard.bigram_mean_distance(),

            half_scissor_bigram_frequency: keyboard.half_scissor_frequency(),
            full_scissor_bigram_frequency: keyboard.full_scissor_frequency(),
            half_scissor_skipgram_frequency: keyboard.half_scissor_skipgram_frequency(),
            full_scissor_skipgram_frequency: keyboard.full_scissor_skipgram_frequency(),

            lateral_stretch_bigram_frequency: keyboard.lateral_stretch_frequency(),
            lateral_stretch_skipgram_frequency: keyboard.lateral_stretch_skipgram_frequency(),

            roll_frequency: keyboard.roll_frequency(),
            alternate_frequency: keyboard.alternate_frequency(),
            onehand_frequency: keyboard.onehand_frequency(),
            redirect_frequency: keyboard.redirect_frequency(),
        }
    }

    /// Numeric fields under flat names (`finger_usage_1`, `row_usage_c`, ...).
    pub fn to_flat(&self) -> BTreeMap<String, f64> {
        let mut out = BTreeMap::new();
        let mut put = |name: &str, value: f64| {
            out.insert(name.to_string(), value);
        };

        put("travel_distance", self.travel_distance);
        put("travel_distance_left_hand", self.travel_distance_left_hand);
        put("travel_distance_right_hand", self.travel_distance_right_hand);
        for finger in Finger::iter() {
            put(
                &format!("travel_distance_finger_{}", finger.index()),
                self.travel_distance_finger[finger.slot()],
            );
            put(
                &format!("finger_usage_{}", finger.index()),
                self.finger_usage[finger.slot()],
            );
        }

        put("hand_usage_left", self.hand_usage_left);
        put("hand_usage_right", self.hand_usage_right);
        for (row, value) in &self.row_usage {
            put(&format!("row_usage_{}", row.code()), *value);
        }

        put("same_finger_bigram_frequency", self.same_finger_bigram_frequency);
        put("same_finger_bigram_mean_distance", self.same_finger_bigram_mean_distance);
        put("same_finger_skipgram_frequency", self.same_finger_skipgram_frequency);
        put("same_finger_skipgram_mean_distance", self.same_finger_skipgram_mean_distance);
        put("bigram_mean_distance", self.bigram_mean_distance);

        put("half_scissor_bigram_frequency", self.half_scissor_bigram_frequency);
        put("full_scissor_bigram_frequency", self.full_scissor_bigram_frequency);
        put("half_scissor_skipgram_frequency", self.half_scissor_skipgram_frequency);
        put("full_scissor_skipgram_frequency", self.full_scissor_skipgram_frequency);

        put("lateral_stretch_bigram_frequency", self.lateral_stretch_bigram_frequency);
        put("lateral_stretch_skipgram_frequency", self.lateral_stretch_skipgram_frequency);

        put("roll_frequency", self.roll_frequency);
        put("alternate_frequency", self.alternate_frequency);
        put("onehand_frequency", self.onehand_frequency);
        put("redirect_frequency", self.redirect_frequency);

        out
    }
}
