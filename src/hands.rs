use crate::corpus::Corpus;
use crate::keyboard::{Finger, Hand, Key, Keyboard};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// One finger during a typing simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FingerState {
    pub finger: Finger,
    pub x: f64,
    pub y: f64,
    pub travel_distance: f64,
}

impl FingerState {
    fn new(finger: Finger) -> Self {
        Self {
            finger,
            x: 0.0,
            y: 0.0,
            travel_distance: 0.0,
        }
    }

    fn move_to(&mut self, key: &Key) -> f64 {
        let (cx, cy) = key.center();
        let step = (cx - self.x).hypot(cy - self.y);
        self.travel_distance += step;
        self.x = cx;
        self.y = cy;
        step
    }
}

/// Ten fingers replaying a corpus on a keyboard.
///
/// Distances are raw layout coordinates; divide by `one_unit` for key widths.
/// There is no reset: build a new `Hands` for every run.
#[derive(Debug, Clone, Serialize)]
pub struct Hands {
    fingers: [FingerState; Finger::COUNT],
}

impl Hands {
    /// Places every finger on the center of its home key. Fingers without one stay at
    /// the origin.
    pub fn new(keyboard: &Keyboard) -> Self {
        let mut fingers: [FingerState; Finger::COUNT] = Finger::iter()
            .map(FingerState::new)
            .collect::<Vec<_>>()
            .try_into()
            .unwrap_or_else(|_| unreachable!("Finger has exactly {} variants", Finger::COUNT));

        for key in keyboard.keys_is_home() {
            let (cx, cy) = key.center();
            let state = &mut fingers[key.finger.slot()];
            state.x = cx;
            state.y = cy;
        }

        Self { fingers }
    }

    /// Moves `finger` to the center of `key`; returns the distance of this step.
    pub fn move_to(&mut self, finger: Finger, key: &Key) -> f64 {
        self.fingers[finger.slot()].move_to(key)
    }

    pub fn simulate_typing(&mut self, keyboard: &Keyboard, corpus: &Corpus) {
        let Some(text) = corpus.text() else {
            info!("Corpus '{}' has no text; skipping typing simulation", corpus.name());
            return;
        };

        let length = corpus.length();
        let one_percent = (length / 100).max(1);

        for (i, c) in text.chars().enumerate() {
            if let Some(key) = keyboard.key_by_mapping(c) {
                self.move_to(key.finger, key);
            }

            if i as u64 % one_percent == 0 {
                debug!("Typing progress: {}%", i as u64 * 100 / length);
            }
        }
    }

    pub fn finger(&self, finger: Finger) -> &FingerState {
        &self.fingers[finger.slot()]
    }

    pub fn fingers(&self) -> &[FingerState] {
        &self.fingers
    }

    /// Left plus right hand travel.
    pub fn travel_distance(&self) -> f64 {
        self.travel_distance_left_hand() + self.travel_distance_right_hand()
    }

    pub fn hand_travel_distance(&self, hand: Hand) -> f64 {
        hand.fingers()
            .iter()
            .map(|&f| self.finger(f).travel_distance)
            .sum()
    }

    pub fn travel_distance_left_hand(&self) -> f64 {
        self.hand_travel_distance(Hand::Left)
    }

    pub fn travel_distance_right_hand(&self) -> f64 {
        self.hand_travel_distance(Hand::Right)
    }
}
