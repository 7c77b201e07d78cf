use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyeval::keyboard::{Finger, Row};
use keyeval::report::LayoutReport;
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn pct(v: f64) -> String {
    format!("{:.2}", v * 100.0)
}

pub fn print_usage_report(report: &LayoutReport) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Finger").add_attribute(Attribute::Bold),
        Cell::new("Usage %").fg(Color::Cyan),
        Cell::new("Travel (u/char)"),
    ]);
    align_right(&mut table, 1..=2);

    for finger in Finger::iter() {
        table.add_row(vec![
            Cell::new(format!("{} {}", finger.index(), finger)),
            Cell::new(pct(report.finger_usage[finger.slot()])).fg(Color::Cyan),
            Cell::new(format!("{:.4}", report.travel_distance_finger[finger.slot()])),
        ]);
    }
    println!("\n{}", table);

    let mut table = new_table();
    let mut header = vec![Cell::new("Rows").add_attribute(Attribute::Bold)];
    header.extend(Row::iter().map(|r| Cell::new(r.to_string())));
    header.push(Cell::new("Left").fg(Color::Green));
    header.push(Cell::new("Right").fg(Color::Green));
    table.add_row(header);
    align_right(&mut table, 1..=8);

    let mut values = vec![Cell::new("Usage %")];
    values.extend(
        Row::iter().map(|r| Cell::new(pct(report.row_usage.get(&r).copied().unwrap_or(0.0)))),
    );
    values.push(Cell::new(pct(report.hand_usage_left)).fg(Color::Green));
    values.push(Cell::new(pct(report.hand_usage_right)).fg(Color::Green));
    table.add_row(values);
    println!("{}", table);
}

pub fn print_travel_report(report: &LayoutReport) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Travel (u/char)").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Left"),
        Cell::new("Right"),
    ]);
    align_right(&mut table, 1..=3);
    table.add_row(vec![
        Cell::new(&report.layout),
        Cell::new(format!("{:.4}", report.travel_distance)).fg(Color::Cyan),
        Cell::new(format!("{:.4}", report.travel_distance_left_hand)),
        Cell::new(format!("{:.4}", report.travel_distance_right_hand)),
    ]);
    println!("\n{}", table);
}

pub fn print_ngram_report(report: &LayoutReport) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Bigram"),
        Cell::new("Skipgram"),
    ]);
    align_right(&mut table, 1..=2);

    let rows = [
        ("SFB %", report.same_finger_bigram_frequency, report.same_finger_skipgram_frequency),
        ("Full Scissor %", report.full_scissor_bigram_frequency, report.full_scissor_skipgram_frequency),
        ("Half Scissor %", report.half_scissor_bigram_frequency, report.half_scissor_skipgram_frequency),
        ("Lateral Stretch %", report.lateral_stretch_bigram_frequency, report.lateral_stretch_skipgram_frequency),
    ];
    for (name, bi, skip) in rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(pct(bi)).fg(Color::Red),
            Cell::new(pct(skip)),
        ]);
    }
    table.add_row(vec![
        Cell::new("SF mean distance (u)"),
        Cell::new(format!("{:.3}", report.same_finger_bigram_mean_distance)),
        Cell::new(format!("{:.3}", report.same_finger_skipgram_mean_distance)),
    ]);
    println!("\n{}", table);

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Trigrams").add_attribute(Attribute::Bold),
        Cell::new("Roll").fg(Color::Green),
        Cell::new("Alternate").fg(Color::Green),
        Cell::new("Onehand"),
        Cell::new("Redirect").fg(Color::Red),
    ]);
    align_right(&mut table, 1..=4);
    table.add_row(vec![
        Cell::new("%"),
        Cell::new(pct(report.roll_frequency)).fg(Color::Green),
        Cell::new(pct(report.alternate_frequency)).fg(Color::Green),
        Cell::new(pct(report.onehand_frequency)),
        Cell::new(pct(report.redirect_frequency)).fg(Color::Red),
    ]);
    println!("{}", table);
}

pub fn print_comparison_report(results: &[LayoutReport]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Travel").fg(Color::Cyan),
        Cell::new("SFB").fg(Color::Red),
        Cell::new("SFS").fg(Color::Red),
        Cell::new("FSB"),
        Cell::new("HSB"),
        Cell::new("LSB"),
        Cell::new("Roll").fg(Color::Green),
        Cell::new("Alt").fg(Color::Green),
        Cell::new("One"),
        Cell::new("Redir"),
        Cell::new("Home").add_attribute(Attribute::Bold),
    ]);
    align_right(&mut table, 1..=11);

    for r in results {
        table.add_row(vec![
            Cell::new(&r.layout).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", r.travel_distance)).fg(Color::Cyan),
            Cell::new(pct(r.same_finger_bigram_frequency)).fg(Color::Red),
            Cell::new(pct(r.same_finger_skipgram_frequency)).fg(Color::Red),
            Cell::new(pct(r.full_scissor_bigram_frequency)),
            Cell::new(pct(r.half_scissor_bigram_frequency)),
            Cell::new(pct(r.lateral_stretch_bigram_frequency)),
            Cell::new(pct(r.roll_frequency)).fg(Color::Green),
            Cell::new(pct(r.alternate_frequency)).fg(Color::Green),
            Cell::new(pct(r.onehand_frequency)),
            Cell::new(pct(r.redirect_frequency)),
            Cell::new(pct(r.row_usage.get(&Row::Home).copied().unwrap_or(0.0)))
                .add_attribute(Attribute::Bold),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_clean_report(name: &str, before: (u64, usize), after: (u64, usize)) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("Cleaned '{}'", name)).add_attribute(Attribute::Bold),
        Cell::new("Chars"),
        Cell::new("Unique"),
    ]);
    align_right(&mut table, 1..=2);
    table.add_row(vec![
        Cell::new("Was"),
        Cell::new(before.0.to_string()),
        Cell::new(before.1.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Now").fg(Color::Green),
        Cell::new(after.0.to_string()).fg(Color::Green),
        Cell::new(after.1.to_string()).fg(Color::Green),
    ]);
    println!("\n{}", table);
}
