use super::{build_keyboard, load_corpus};
use crate::reports;
use clap::Args;
use keyeval::config::Settings;
use keyeval::error::KeResult;
use keyeval::hands::Hands;
use keyeval::layouts;
use keyeval::report::LayoutReport;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub settings: Settings,

    /// Print the flat metrics report as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &AnalyzeArgs, settings: &Settings) -> KeResult<()> {
    let corpus = Arc::new(load_corpus(&settings.sources)?);
    let model = layouts::resolve_keyboard(&settings.sources.keyboard)?;
    let keyboard = build_keyboard(&model, &settings.sources.layout, settings, corpus.clone())?;

    info!("⌨️  Simulating typing on '{}'...", keyboard.layout_name());
    let mut hands = Hands::new(&keyboard);
    hands.simulate_typing(&keyboard, &corpus);
    let report = LayoutReport::build(&keyboard, &hands);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.to_flat())?);
        return Ok(());
    }

    println!("\n{}", keyboard.info());
    reports::print_usage_report(&report);
    reports::print_travel_report(&report);
    reports::print_ngram_report(&report);

    let duplicates = keyboard.duplicate_mappings();
    if !duplicates.is_empty() {
        println!("\n⚠️  Duplicate mappings: {:?}", duplicates);
    }
    Ok(())
}
