use crate::reports;
use clap::Args;
use keyeval::config::Settings;
use keyeval::corpus::Corpus;
use keyeval::error::{KeResult, KeyEvalError};
use keyeval::keyboard::Keyboard;
use keyeval::layouts;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    #[command(flatten)]
    pub settings: Settings,

    /// Where to write the cleaned text.
    #[arg(short, long)]
    pub output: String,
}

/// Cleans and truncates a text corpus and writes it out. Without `--allowed-chars`
/// the characters of the selected layout are kept.
pub fn run(args: &CleanArgs, settings: &Settings) -> KeResult<()> {
    let sources = &settings.sources;
    let mut corpus = match (&sources.corpus, &sources.text) {
        (Some(dir), _) => Corpus::load(dir)?,
        (None, Some(text)) => Corpus::from_text("inline", text.clone()),
        (None, None) => {
            return Err(KeyEvalError::Config(
                "clean needs a text corpus (--corpus or --text)".to_string(),
            ))
        }
    };
    let before = (corpus.length(), corpus.chars().chars().count());

    let allowed = match &sources.allowed_chars {
        Some(chars) => chars.clone(),
        None => {
            let model = layouts::resolve_keyboard(&sources.keyboard)?;
            let layout = layouts::resolve_layout(&sources.layout)?;
            let keyboard = Keyboard::new(&model, &layout, Arc::new(Corpus::from_text("", "")))?;
            info!("🔤 Keeping characters of layout '{}'", keyboard.layout_name());
            keyboard.chars()
        }
    };

    corpus.clean(&allowed);
    if let Some(limit) = sources.limit {
        corpus.limit(limit);
    }
    let after = (corpus.length(), corpus.chars().chars().count());

    let output = Path::new(&args.output);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, corpus.text().unwrap_or_default())?;
    info!("💾 Saved cleaned corpus to {:?}", output);

    reports::print_clean_report(corpus.name(), before, after);
    Ok(())
}
