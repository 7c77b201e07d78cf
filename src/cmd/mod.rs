pub mod analyze;
pub mod clean;
pub mod compare;

use keyeval::config::{Settings, SourceSettings};
use keyeval::corpus::Corpus;
use keyeval::error::{KeResult, KeyEvalError};
use keyeval::geometry::KeyboardModel;
use keyeval::keyboard::Keyboard;
use keyeval::layouts;
use std::sync::Arc;
use tracing::info;

/// Builds the corpus named by the sources, then applies `allowed_chars` and `limit`.
pub fn load_corpus(sources: &SourceSettings) -> KeResult<Corpus> {
    let mut corpus = match (&sources.corpus, &sources.frequencies, &sources.text) {
        (Some(dir), _, _) => Corpus::load(dir)?,
        (_, Some(table), _) => Corpus::load_frequency_table(table)?,
        (_, _, Some(text)) => Corpus::from_text("inline", text.clone()),
        _ => {
            return Err(KeyEvalError::Config(
                "No corpus given: use --corpus, --frequencies or --text".to_string(),
            ))
        }
    };

    if let Some(allowed) = &sources.allowed_chars {
        corpus.clean(allowed);
    }
    if let Some(limit) = sources.limit {
        corpus.limit(limit);
    }

    info!("📖 Corpus '{}': {} chars", corpus.name(), corpus.length());
    Ok(corpus)
}

pub fn build_keyboard(
    model: &KeyboardModel,
    layout: &str,
    settings: &Settings,
    corpus: Arc<Corpus>,
) -> KeResult<Keyboard> {
    let layout = layouts::resolve_layout(layout)?;
    Ok(Keyboard::new(model, &layout, corpus)?.with_thresholds(settings.thresholds))
}
