use clap::ValueEnum;
use serde::Serialize;

use crate::humanize::{SEC_PER_DAY, SEC_PER_HOUR, SEC_PER_MIN};

/// Calendar-style granularities used for decomposition, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Day,
    Hour,
    Minute,
    Second,
}

impl UnitKind {
    #[must_use]
    pub fn singular(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitValue {
    pub kind: UnitKind,
    pub value: u64,
}

impl UnitValue {
    /// Pluralized label: the bare singular only for a magnitude of exactly 1.
    #[must_use]
    pub fn label(self) -> String {
        let singular = self.kind.singular();
        if self.value == 1 {
            singular.to_string()
        } else {
            format!("{singular}s")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Breakdown {
    /// Ordered unit sequence, day through second.
    #[must_use]
    pub fn units(self) -> [UnitValue; 4] {
        [
            UnitValue {
                kind: UnitKind::Day,
                value: self.days,
            },
            UnitValue {
                kind: UnitKind::Hour,
                value: self.hours,
            },
            UnitValue {
                kind: UnitKind::Minute,
                value: self.minutes,
            },
            UnitValue {
                kind: UnitKind::Second,
                value: self.seconds,
            },
        ]
    }

    #[must_use]
    pub fn total_secs(self) -> u64 {
        self.days * SEC_PER_DAY + self.hours * SEC_PER_HOUR + self.minutes * SEC_PER_MIN
            + self.seconds
    }
}

/// Rendering strategy for a humanized duration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Mode {
    /// Sentence including seconds ("1 minute and 1 second").
    Full,
    /// Sentence without seconds ("less than a minute" below one minute).
    Coarse,
    /// One markup fragment per unit, for countdown widgets.
    Blocks,
}

/// One formatted duration, as carried to the CLI output modes.
#[derive(Debug, Clone, Serialize)]
pub struct FormatEntry {
    pub input: u64,
    pub breakdown: Breakdown,
    pub rendered: String,
}
