use clap::ValueEnum;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Modify, Style,
        object::{Columns, Rows},
        style::LineText,
    },
};

use crate::FormatEntry;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum TabStyle {
    Rounded,
    Modern,
    Ascii,
    Psql,
    Markdown,
    Sharp,
    Blank,
}

#[must_use]
pub fn format_tab(entries: &[FormatEntry], style: TabStyle) -> String {
    let mut b = Builder::default();
    b.push_record(["Input", "Days", "Hours", "Minutes", "Seconds", "Rendered"]);
    for e in entries {
        b.push_record([
            e.input.to_string(),
            e.breakdown.days.to_string(),
            e.breakdown.hours.to_string(),
            e.breakdown.minutes.to_string(),
            e.breakdown.seconds.to_string(),
            e.rendered.clone(),
        ]);
    }
    let mut t = b.build();
    apply_style(&mut t, style);
    t.with(Modify::new(Columns::new(0..5)).with(Alignment::right()));
    apply_title_line(&mut t, "Countdown");
    t.to_string()
}

fn apply_style(t: &mut tabled::Table, style: TabStyle) {
    match style {
        TabStyle::Rounded => t.with(Style::rounded()),
        TabStyle::Modern => t.with(Style::modern()),
        TabStyle::Ascii => t.with(Style::ascii()),
        TabStyle::Psql => t.with(Style::psql()),
        TabStyle::Markdown => t.with(Style::markdown()),
        TabStyle::Sharp => t.with(Style::sharp()),
        TabStyle::Blank => t.with(Style::blank()),
    };
}

fn apply_title_line(t: &mut tabled::Table, title: &str) {
    t.with(LineText::new(format!(" {title} "), Rows::first()).offset(1));
}
