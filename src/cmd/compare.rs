use super::{build_keyboard, load_corpus};
use crate::reports;
use clap::Args;
use keyeval::config::Settings;
use keyeval::error::KeResult;
use keyeval::hands::Hands;
use keyeval::layouts;
use keyeval::report::LayoutReport;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub settings: Settings,

    /// Layouts to compare: files or known layout names.
    #[arg(long, value_delimiter = ',', default_value = "qwerty,dvorak,colemak,workman,sturdy")]
    pub layouts: Vec<String>,

    /// Also write every flat report as one CSV row per layout.
    #[arg(long)]
    pub csv: Option<String>,
}

pub fn run(args: &CompareArgs, settings: &Settings) -> KeResult<()> {
    let corpus = Arc::new(load_corpus(&settings.sources)?);
    let model = layouts::resolve_keyboard(&settings.sources.keyboard)?;

    info!("⚖️  Comparing {} layouts on '{}'", args.layouts.len(), model.name);

    let results: Vec<LayoutReport> = args
        .layouts
        .par_iter()
        .map(|layout| -> KeResult<LayoutReport> {
            let keyboard = build_keyboard(&model, layout, settings, corpus.clone())?;
            let mut hands = Hands::new(&keyboard);
            hands.simulate_typing(&keyboard, &corpus);
            debug!("Finished '{}'", keyboard.layout_name());
            Ok(LayoutReport::build(&keyboard, &hands))
        })
        .collect::<KeResult<_>>()?;

    reports::print_comparison_report(&results);

    if let Some(path) = &args.csv {
        write_csv(path, &results)?;
        info!("💾 Saved comparison to {}", path);
    }
    Ok(())
}

pub fn write_csv(path: &str, results: &[LayoutReport]) -> KeResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let Some(first) = results.first() else {
        wtr.flush()?;
        return Ok(());
    };

    let fields: Vec<String> = first.to_flat().into_keys().collect();
    let mut header = vec!["keyboard".to_string(), "layout".to_string(), "corpus".to_string()];
    header.extend(fields.iter().cloned());
    wtr.write_record(&header)?;

    for report in results {
        let flat = report.to_flat();
        let mut row = vec![report.keyboard.clone(), report.layout.clone(), report.corpus.clone()];
        row.extend(fields.iter().map(|f| flat.get(f).copied().unwrap_or(0.0).to_string()));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
