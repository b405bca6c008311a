use crate::markup::{HtmlBlocks, RenderBlock};
use crate::types::{Breakdown, UnitValue};

pub(crate) const SEC_PER_MIN: u64 = 60;
pub(crate) const SEC_PER_HOUR: u64 = 60 * 60;
pub(crate) const SEC_PER_DAY: u64 = 60 * 60 * 24;

/// Splits a second count into whole days, hours, minutes, and seconds.
#[must_use]
pub fn decompose(secs: u64) -> Breakdown {
    Breakdown {
        days: secs / SEC_PER_DAY,
        hours: secs % SEC_PER_DAY / SEC_PER_HOUR,
        minutes: secs % SEC_PER_HOUR / SEC_PER_MIN,
        seconds: secs % SEC_PER_MIN,
    }
}

// Everything from the first non-zero unit onward; zero magnitudes after
// that point stay in.
fn visible(units: &[UnitValue]) -> &[UnitValue] {
    match units.iter().position(|u| u.value > 0) {
        Some(first) => &units[first..],
        None => &[],
    }
}

fn render_unit(unit: UnitValue) -> String {
    format!("{} {}", unit.value, unit.label())
}

fn join_sentence(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

fn sentence(units: &[UnitValue]) -> String {
    let parts: Vec<String> = units.iter().copied().map(render_unit).collect();
    join_sentence(&parts)
}

/// Full sentence including the seconds unit.
#[must_use]
pub fn format_full(secs: u64) -> String {
    let units = decompose(secs).units();
    let kept = visible(&units);
    if kept.is_empty() {
        return "0 seconds".to_string();
    }
    sentence(kept)
}

/// Sentence without the seconds unit, for low-precision displays.
#[must_use]
pub fn format_coarse(secs: u64) -> String {
    let units = decompose(secs).units();
    let kept = visible(&units[..3]);
    if kept.is_empty() {
        return "less than a minute".to_string();
    }
    sentence(kept)
}

/// Concatenated `time-block` markup fragments for the countdown widget.
#[must_use]
pub fn format_blocks(secs: u64) -> String {
    format_blocks_with(secs, &HtmlBlocks)
}

/// Like [`format_blocks`] with a caller-supplied fragment renderer.
/// The seconds block is emitted even at zero; suppression only drops
/// larger leading zeros.
#[must_use]
pub fn format_blocks_with(secs: u64, renderer: &dyn RenderBlock) -> String {
    let units = decompose(secs).units();
    let mut kept = visible(&units);
    if kept.is_empty() {
        kept = &units[3..];
    }
    kept.iter()
        .map(|u| renderer.block(u.value, &u.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_splits_on_unit_boundaries() {
        let b = decompose(90061);
        assert_eq!(
            b,
            Breakdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn decompose_resums_to_input() {
        for secs in [0, 1, 59, 60, 61, 3599, 3600, 3661, 86399, 86400, 90061, 1_000_000] {
            assert_eq!(decompose(secs).total_secs(), secs);
        }
    }

    #[test]
    fn full_zero_duration() {
        assert_eq!(format_full(0), "0 seconds");
    }

    #[test]
    fn full_two_units() {
        assert_eq!(format_full(61), "1 minute and 1 second");
    }

    #[test]
    fn full_single_unit() {
        assert_eq!(format_full(45), "45 seconds");
    }

    #[test]
    fn full_oxford_join_over_four_units() {
        assert_eq!(format_full(90061), "1 day, 1 hour, 1 minute, and 1 second");
    }

    #[test]
    fn full_keeps_interior_zeros() {
        // 1 day plus 5 seconds: the zero hours and minutes stay in.
        assert_eq!(format_full(86405), "1 day, 0 hours, 0 minutes, and 5 seconds");
    }

    #[test]
    fn full_drops_leading_zeros_only() {
        assert_eq!(format_full(3605), "1 hour, 0 minutes, and 5 seconds");
    }

    #[test]
    fn coarse_below_a_minute() {
        assert_eq!(format_coarse(0), "less than a minute");
        assert_eq!(format_coarse(59), "less than a minute");
    }

    #[test]
    fn coarse_never_shows_seconds() {
        assert_eq!(format_coarse(90000), "1 day, 1 hour, and 0 minutes");
        assert_eq!(format_coarse(119), "1 minute");
    }

    #[test]
    fn pluralizes_everything_but_one() {
        assert_eq!(format_full(120), "2 minutes and 0 seconds");
        assert_eq!(format_full(60), "1 minute and 0 seconds");
    }

    #[test]
    fn formatting_is_pure() {
        assert_eq!(format_full(3661), format_full(3661));
        assert_eq!(format_blocks(3661), format_blocks(3661));
    }

    struct Bracketed;
    impl RenderBlock for Bracketed {
        fn block(&self, value: u64, label: &str) -> String {
            format!("[{value} {label}]")
        }
    }

    #[test]
    fn blocks_zero_duration_keeps_seconds_block() {
        assert_eq!(format_blocks_with(0, &Bracketed), "[0 seconds]");
    }

    #[test]
    fn blocks_concatenate_without_separator() {
        assert_eq!(
            format_blocks_with(3661, &Bracketed),
            "[1 hour][1 minute][1 second]"
        );
    }

    #[test]
    fn blocks_keep_interior_zeros() {
        assert_eq!(
            format_blocks_with(86405, &Bracketed),
            "[1 day][0 hours][0 minutes][5 seconds]"
        );
    }

    #[test]
    fn blocks_default_renderer_emits_time_block_markup() {
        let html = format_blocks(0);
        assert_eq!(html.matches("time-block").count(), 1);
        assert!(html.contains("<div class=\"time-value\">0</div>"));
        assert!(html.contains("<div class=\"time-label\">seconds</div>"));
    }
}
