use core::fmt;
use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Frequency, RadarError};

/// Calendar point at the granularity of its series.
///
/// Encoded as `2024` (annual), `2024-Q2` (quarterly) or `2024-06` (monthly).
/// Ordering is chronological between periods of the same frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    /// A calendar year.
    Year(i32),
    /// A calendar quarter, `quarter` in `1..=4`.
    Quarter {
        /// Calendar year.
        year: i32,
        /// Quarter number.
        quarter: u8,
    },
    /// A calendar month, `month` in `1..=12`.
    Month {
        /// Calendar year.
        year: i32,
        /// Month number.
        month: u8,
    },
}

impl Period {
    /// Build a monthly period, validating the month.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `month` is outside `1..=12`.
    pub fn month(year: i32, month: u8) -> Result<Self, RadarError> {
        if (1..=12).contains(&month) {
            Ok(Self::Month { year, month })
        } else {
            Err(RadarError::InvalidArg(format!("month out of range: {month}")))
        }
    }

    /// Build a quarterly period, validating the quarter.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `quarter` is outside `1..=4`.
    pub fn quarter(year: i32, quarter: u8) -> Result<Self, RadarError> {
        if (1..=4).contains(&quarter) {
            Ok(Self::Quarter { year, quarter })
        } else {
            Err(RadarError::InvalidArg(format!(
                "quarter out of range: {quarter}"
            )))
        }
    }

    /// Frequency implied by the encoding.
    #[must_use]
    pub const fn frequency(self) -> Frequency {
        match self {
            Self::Year(_) => Frequency::Annual,
            Self::Quarter { .. } => Frequency::Quarterly,
            Self::Month { .. } => Frequency::Monthly,
        }
    }

    /// Calendar year the period falls in.
    #[must_use]
    pub const fn year(self) -> i32 {
        match self {
            Self::Year(year) | Self::Quarter { year, .. } | Self::Month { year, .. } => year,
        }
    }

    /// Same period one calendar year earlier.
    #[must_use]
    pub const fn year_ago(self) -> Self {
        match self {
            Self::Year(year) => Self::Year(year - 1),
            Self::Quarter { year, quarter } => Self::Quarter {
                year: year - 1,
                quarter,
            },
            Self::Month { year, month } => Self::Month {
                year: year - 1,
                month,
            },
        }
    }

    /// Last calendar day covered by the period.
    #[must_use]
    pub fn end_date(self) -> Option<NaiveDate> {
        let (year, last_month) = match self {
            Self::Year(year) => (year, 12),
            Self::Quarter { year, quarter } => (year, u32::from(quarter) * 3),
            Self::Month { year, month } => (year, u32::from(month)),
        };
        if last_month == 12 {
            NaiveDate::from_ymd_opt(year, 12, 31)
        } else {
            NaiveDate::from_ymd_opt(year, last_month + 1, 1)?.pred_opt()
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(year) => write!(f, "{year:04}"),
            Self::Quarter { year, quarter } => write!(f, "{year:04}-Q{quarter}"),
            Self::Month { year, month } => write!(f, "{year:04}-{month:02}"),
        }
    }
}

fn parse_year(s: &str) -> Option<i32> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

fn parse_small(s: &str) -> Option<u8> {
    if (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

impl FromStr for Period {
    type Err = RadarError;

    /// Accepts `YYYY`, `YYYY-MM`, `YYYYMmm`, `YYYY-Qn` and `YYYYQn`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let bad = || RadarError::InvalidArg(format!("unrecognised period label: {label}"));
        if label.len() < 4 || !label.is_char_boundary(4) {
            return Err(bad());
        }
        let (head, rest) = label.split_at(4);
        let year = parse_year(head).ok_or_else(bad)?;
        if rest.is_empty() {
            return Ok(Self::Year(year));
        }
        let rest = rest.strip_prefix('-').unwrap_or(rest);
        if let Some(q) = rest.strip_prefix(['Q', 'q']) {
            let quarter = parse_small(q).ok_or_else(bad)?;
            return Self::quarter(year, quarter);
        }
        let m = rest.strip_prefix(['M', 'm']).unwrap_or(rest);
        let month = parse_small(m).ok_or_else(bad)?;
        Self::month(year, month)
    }
}

impl Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
