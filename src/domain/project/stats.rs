// src/domain/project/stats.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Duration, DurationRound, Utc};
use std::{fmt, str::FromStr};

const MAX_PERIOD_HOURS: u32 = 90 * 24;

/// Window of statistics to fetch, expressed as `<n>h` or `<n>d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatsPeriod {
    hours: u32,
}

impl StatsPeriod {
    pub fn from_hours(hours: u32) -> DomainResult<Self> {
        if hours == 0 {
            return Err(DomainError::Validation(
                "stats period must be positive".into(),
            ));
        }
        if hours > MAX_PERIOD_HOURS {
            return Err(DomainError::Validation(format!(
                "stats period cannot exceed {} days",
                MAX_PERIOD_HOURS / 24
            )));
        }
        Ok(Self { hours })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }
}

impl Default for StatsPeriod {
    fn default() -> Self {
        Self { hours: 24 }
    }
}

impl FromStr for StatsPeriod {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        let invalid = || DomainError::Validation(format!("invalid stats period `{value}`"));

        let Some((split, _)) = value.char_indices().last() else {
            return Err(invalid());
        };
        let (amount, unit) = value.split_at(split);
        if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let amount: u32 = amount.parse().map_err(|_| invalid())?;
        let hours = match unit {
            "h" => amount,
            "d" => amount.checked_mul(24).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        Self::from_hours(hours)
    }
}

impl fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours % 24 == 0 && self.hours >= 48 {
            write!(f, "{}d", self.hours / 24)
        } else {
            write!(f, "{}h", self.hours)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatPoint {
    pub timestamp: DateTime<Utc>,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub points: Vec<StatPoint>,
}

impl ProjectStats {
    /// Build hourly buckets ending at the hour containing `now`.
    ///
    /// `hourly` is ordered oldest first. Only the most recent `period` hours
    /// are kept; missing history is reported as zero.
    pub fn from_hourly(hourly: &[u64], now: DateTime<Utc>, period: StatsPeriod) -> Self {
        let hours = period.hours() as usize;
        let end = now.duration_trunc(Duration::hours(1)).unwrap_or(now);
        let recent = &hourly[hourly.len().saturating_sub(hours)..];
        let padding = hours - recent.len();

        let points = (0..hours)
            .map(|index| {
                let count = if index < padding {
                    0
                } else {
                    recent[index - padding]
                };
                let back = (hours - 1 - index) as i64;
                StatPoint {
                    timestamp: end - Duration::hours(back),
                    count,
                }
            })
            .collect();

        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_hours_and_days() {
        assert_eq!("24h".parse::<StatsPeriod>().unwrap().hours(), 24);
        assert_eq!("14d".parse::<StatsPeriod>().unwrap().hours(), 336);
        assert_eq!(" 1h ".parse::<StatsPeriod>().unwrap().hours(), 1);
    }

    #[test]
    fn rejects_malformed_periods() {
        for raw in ["", "h", "0h", "24", "24m", "-1d", "91d", "abc", "+5h", "+1d", "1 h"] {
            assert!(raw.parse::<StatsPeriod>().is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn display_prefers_days_for_whole_multi_day_periods() {
        assert_eq!(StatsPeriod::default().to_string(), "24h");
        assert_eq!("14d".parse::<StatsPeriod>().unwrap().to_string(), "14d");
        assert_eq!("36h".parse::<StatsPeriod>().unwrap().to_string(), "36h");
    }

    #[test]
    fn from_hourly_pads_and_truncates() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
        let period = StatsPeriod::from_hours(3).unwrap();

        let padded = ProjectStats::from_hourly(&[5], now, period);
        let counts: Vec<u64> = padded.points.iter().map(|p| p.count).collect();
        assert_eq!(counts, vec![0, 0, 5]);
        assert_eq!(
            padded.points.last().map(|p| p.timestamp),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(
            padded.points.first().map(|p| p.timestamp),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
        );

        let truncated = ProjectStats::from_hourly(&[1, 2, 3, 4, 5], now, period);
        let counts: Vec<u64> = truncated.points.iter().map(|p| p.count).collect();
        assert_eq!(counts, vec![3, 4, 5]);
    }
}
