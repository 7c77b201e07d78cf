use crate::keyboard::Keyboard;
use serde::Serialize;
use tracing::debug;

/// Weighted n-gram counts for every classifier, gathered in one pass per table.
///
/// Counts are n-gram occurrences where the predicate holds; `*_distance` fields are
/// weighted sums of key distances in layout units.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NgramMetrics {
    pub bigram_total: u64,
    pub trigram_total: u64,

    pub resolved_bigrams: u64,
    pub bigram_distance: f64,

    pub sfb: u64,
    pub sfb_distance: f64,
    pub full_scissor: u64,
    pub half_scissor: u64,
    pub lateral_stretch: u64,

    pub sfs: u64,
    pub sfs_distance: f64,
    pub full_scissor_skipgram: u64,
    pub half_scissor_skipgram: u64,
    pub lateral_stretch_skipgram: u64,

    pub alternate: u64,
    pub roll: u64,
    pub onehand: u64,
    pub redirect: u64,
}

impl NgramMetrics {
    pub fn compute(keyboard: &Keyboard) -> Self {
        let corpus = keyboard.corpus();
        let mut m = NgramMetrics::default();

        for (gram, &count) in corpus.bigrams() {
            m.bigram_total += count;
            let mut chars = gram.chars();
            let (Some(a), Some(b)) = (chars.next(), chars.next()) else {
                continue;
            };
            let Some(res) = keyboard.interaction(a, b) else {
                continue;
            };

            m.resolved_bigrams += count;
            m.bigram_distance += res.distance * count as f64;

            if res.is_sfb {
                m.sfb += count;
                m.sfb_distance += res.distance * count as f64;
            }
            if res.is_full_scissor {
                m.full_scissor += count;
            }
            if res.is_half_scissor {
                m.half_scissor += count;
            }
            if res.is_lateral_stretch {
                m.lateral_stretch += count;
            }
        }

        for (gram, &count) in corpus.trigrams() {
            m.trigram_total += count;
            let mut chars = gram.chars();
            let (Some(a), Some(b), Some(c)) = (chars.next(), chars.next(), chars.next()) else {
                continue;
            };

            if let Some(skip) = keyboard.interaction(a, c) {
                if skip.is_sfb {
                    m.sfs += count;
                    m.sfs_distance += skip.distance * count as f64;
                }
                if skip.is_full_scissor {
                    m.full_scissor_skipgram += count;
                }
                if skip.is_half_scissor {
                    m.half_scissor_skipgram += count;
                }
                if skip.is_lateral_stretch {
                    m.lateral_stretch_skipgram += count;
                }
            }

            if let Some(flow) = keyboard.flow(a, b, c) {
                if flow.is_alternate {
                    m.alternate += count;
                }
                if flow.is_roll {
                    m.roll += count;
                }
                if flow.is_onehand {
                    m.onehand += count;
                }
                if flow.is_redirect {
                    m.redirect += count;
                }
            }
        }

        debug!(
            "Computed n-gram metrics for '{}' ({} bigrams, {} trigrams)",
            keyboard.layout_name(),
            m.bigram_total,
            m.trigram_total
        );
        m
    }
}
