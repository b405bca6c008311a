#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

use clap::{Parser, ValueEnum};
use passtime::{
    DefaultClock, FormatEntry, Mode, decompose, format_blocks, format_coarse, format_full,
    output::{TabStyle, format_tab, to_json},
    parse_target, remaining_secs,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Tab,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Humanize countdown durations for forecast displays.")]
struct Args {
    /// Durations to format, in whole seconds
    seconds: Vec<u64>,

    /// Format the time remaining until this RFC 3339 timestamp instead
    #[arg(long, value_name = "WHEN", conflicts_with = "seconds")]
    until: Option<String>,

    /// Rendering mode: full sentence, coarse sentence, or widget blocks
    #[arg(long, value_enum, default_value_t = Mode::Full)]
    mode: Mode,

    /// Output format: text (default), tab, or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Table style to use with --output tab
    #[arg(long, value_enum, default_value_t = TabStyle::Rounded)]
    tab_style: TabStyle,

    /// Print debug info while formatting
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    let mut seconds = args.seconds.clone();
    if let Some(when) = &args.until {
        let target = match parse_target(when) {
            Ok(t) => t,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(2);
            }
        };
        seconds.push(remaining_secs(target, &DefaultClock));
    }
    if seconds.is_empty() {
        eprintln!("error: no duration given; pass SECONDS or --until");
        std::process::exit(2);
    }

    let entries: Vec<FormatEntry> = seconds
        .iter()
        .map(|&secs| build_entry(secs, args.mode, args.debug))
        .collect();

    match args.output {
        OutputFormat::Text => {
            for e in &entries {
                println!("{}", e.rendered);
            }
        }
        OutputFormat::Tab => println!("{}", format_tab(&entries, args.tab_style)),
        OutputFormat::Json => match to_json(&entries) {
            Ok(out) => println!("{out}"),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(2);
            }
        },
    }
}

fn build_entry(secs: u64, mode: Mode, debug: bool) -> FormatEntry {
    let breakdown = decompose(secs);
    if debug {
        eprintln!(
            "[debug] input={secs} days={} hours={} minutes={} seconds={}",
            breakdown.days, breakdown.hours, breakdown.minutes, breakdown.seconds
        );
    }
    let rendered = match mode {
        Mode::Full => format_full(secs),
        Mode::Coarse => format_coarse(secs),
        Mode::Blocks => format_blocks(secs),
    };
    FormatEntry {
        input: secs,
        breakdown,
        rendered,
    }
}
