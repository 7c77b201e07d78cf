//! Bigram and trigram classifiers over a [`Keyboard`].
//!
//! Predicates take the n-gram as a string and resolve each character through
//! [`Keyboard::key_by_mapping`]. A character with no key makes the predicate false.
//! Passing a string of the wrong length is a programming error and panics.

pub mod flow;
pub mod metrics;
pub mod physics;

pub use flow::{analyze_trigram, TrigramFlow};
pub use metrics::NgramMetrics;
pub use physics::{analyze_bigram, BigramInteraction};

use crate::keyboard::key::ratio;
use crate::keyboard::Keyboard;

fn ngram<const N: usize>(s: &str) -> [char; N] {
    let chars: Vec<char> = s.chars().collect();
    assert_eq!(chars.len(), N, "expected a {}-gram, got {:?}", N, s);
    let mut out = ['\0'; N];
    out.copy_from_slice(&chars);
    out
}

fn mean(sum: f64, weight: u64) -> f64 {
    if weight == 0 {
        0.0
    } else {
        sum / weight as f64
    }
}

impl Keyboard {
    /// Classifies the character pair `a`,`b`. `None` when either has no key.
    pub fn interaction(&self, a: char, b: char) -> Option<BigramInteraction> {
        let k1 = self.key_by_mapping(a)?;
        let k2 = self.key_by_mapping(b)?;
        let mut res = analyze_bigram(k1, k2, self.one_unit(), self.thresholds());
        res.is_sfb = res.is_same_finger && a != b;
        Some(res)
    }

    pub fn flow(&self, a: char, b: char, c: char) -> Option<TrigramFlow> {
        let k1 = self.key_by_mapping(a)?;
        let k2 = self.key_by_mapping(b)?;
        let k3 = self.key_by_mapping(c)?;
        Some(analyze_trigram(k1, k2, k3))
    }

    fn bigram_holds(&self, bigram: &str, pred: impl Fn(&BigramInteraction) -> bool) -> bool {
        let [a, b] = ngram::<2>(bigram);
        self.interaction(a, b).is_some_and(|res| pred(&res))
    }

    fn skipgram_holds(&self, trigram: &str, pred: impl Fn(&BigramInteraction) -> bool) -> bool {
        let [a, _, c] = ngram::<3>(trigram);
        self.interaction(a, c).is_some_and(|res| pred(&res))
    }

    fn flow_holds(&self, trigram: &str, pred: impl Fn(&TrigramFlow) -> bool) -> bool {
        let [a, b, c] = ngram::<3>(trigram);
        self.flow(a, b, c).is_some_and(|res| pred(&res))
    }

    pub fn is_sfb(&self, bigram: &str) -> bool {
        self.bigram_holds(bigram, |r| r.is_sfb)
    }

    pub fn is_full_scissor(&self, bigram: &str) -> bool {
        self.bigram_holds(bigram, |r| r.is_full_scissor)
    }

    pub fn is_half_scissor(&self, bigram: &str) -> bool {
        self.bigram_holds(bigram, |r| r.is_half_scissor)
    }

    pub fn is_lateral_stretch(&self, bigram: &str) -> bool {
        self.bigram_holds(bigram, |r| r.is_lateral_stretch)
    }

    pub fn is_sfs(&self, trigram: &str) -> bool {
        self.skipgram_holds(trigram, |r| r.is_sfb)
    }

    pub fn is_full_scissor_skipgram(&self, trigram: &str) -> bool {
        self.skipgram_holds(trigram, |r| r.is_full_scissor)
    }

    pub fn is_half_scissor_skipgram(&self, trigram: &str) -> bool {
        self.skipgram_holds(trigram, |r| r.is_half_scissor)
    }

    pub fn is_lateral_stretch_skipgram(&self, trigram: &str) -> bool {
        self.skipgram_holds(trigram, |r| r.is_lateral_stretch)
    }

    pub fn is_alternate(&self, trigram: &str) -> bool {
        self.flow_holds(trigram, |f| f.is_alternate)
    }

    pub fn is_roll(&self, trigram: &str) -> bool {
        self.flow_holds(trigram, |f| f.is_roll)
    }

    pub fn is_onehand(&self, trigram: &str) -> bool {
        self.flow_holds(trigram, |f| f.is_onehand)
    }

    pub fn is_redirect(&self, trigram: &str) -> bool {
        self.flow_holds(trigram, |f| f.is_redirect)
    }

    /// Weighted classifier counts for the bound corpus, computed once.
    pub fn ngram_metrics(&self) -> &NgramMetrics {
        self.ngrams.get_or_init(|| NgramMetrics::compute(self))
    }

    pub fn sfb_frequency(&self) -> f64 {
        let m = self.ngram_metrics();
        ratio(m.sfb, m.bigram_total)
    }

    pub fn full_scissor_frequency(&self) -> f64 {
        let m = self.ngram_metrics();
        ratio(m.full_scissor, m.bigram_total)
    }

    pub fn half_scissor_frequency(&self) -> f64 {
        let m = self.ngram_metrics();
        ratio(m.half_scissor, m.bigram_total)
    }

    pub fn lateral_stretch_frequency(&self) -> f64 {
        let m = self.ngram_metrics();
        ratio(m.lateral_stretch, m.bigram_total)
    }

    pub fn sfs_frequency(&self) -> f64 {
        let m = self.ngram_metrics();
        ratio(m.sfs, m.trigram_total)
    }

    pub fn full_scissor_skipgram_frequency(&self) -> f64 {
        let m = self.ngram_metrics();
        ratio(m.full_scissor_skipgram, m.trigram_total)
    }

    pub fn half_scissor_skipgram_frequency(&self) -> f64 {
        let m = self.ngram_metrics();
        ratio(m.half_scissor_skipgram, m.trigram_total)
    }

    pub fn lateral_stretch_skipgram_frequency(&self) -> f64 {
        let m = self.ngram_metrics();
        ratio(m.lateral_stretch_skipgram, m.trigram_total)
    }

    pub fn alternate_frequency(&self) -> f64 {
        let m = self.ngram_metrics();
        ratio(m.alternate, m.trigram_total)
    }

    pub fn roll_frequency(&self) -> f64 {
        let m = self.ngram_metrics();
        ratio(m.roll, m.trigram_total)
    }

    pub fn onehand_frequency(&self) -> f64 {
        let m = self.ngram_metrics();
        ratio(m.onehand, m.trigram_total)
    }

    pub fn redirect_frequency(&self) -> f64 {
        let m = self.ngram_metrics();
        ratio(m.redirect, m.trigram_total)
    }

    /// Mean SFB key distance in layout units.
    pub fn same_finger_bigram_mean_distance(&self) -> f64 {
        let m = self.ngram_metrics();
        mean(m.sfb_distance, m.sfb)
    }

    pub fn same_finger_skipgram_mean_distance(&self) -> f64 {
        let m = self.ngram_metrics();
        mean(m.sfs_distance, m.sfs)
    }

    /// Mean key distance over every bigram whose two characters resolve.
    pub fn bigram_mean_distance(&self) -> f64 {
        let m = self.ngram_metrics();
        mean(m.bigram_distance, m.resolved_bigrams)
    }
}
