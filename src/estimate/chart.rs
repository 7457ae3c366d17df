//! Chart-facing view of the trend: labelled points plus the axis and label
//! conventions a renderer should use. Drawing is left to the caller.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use super::combos::group_digits;
use super::duration;
use super::history::{History, Sample};
use super::profile::{Attacker, Profile};

pub const X_TITLE: &str = "Password length";
pub const Y_TITLE: &str = "Estimated time (seconds)";
pub const SERIES_LABEL: &str = "Decryption time";

const LOG_MIN: f64 = 0.001;
const LOG_SUGGESTED_MAX: f64 = 1e15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    #[default]
    Linear,
    Logarithmic,
}

impl Scale {
    pub fn flipped(self) -> Self {
        match self {
            Scale::Linear => Scale::Logarithmic,
            Scale::Logarithmic => Scale::Linear,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Linear => write!(f, "linear"),
            Scale::Logarithmic => write!(f, "log"),
        }
    }
}

impl FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Scale::Linear),
            "log" | "logarithmic" => Ok(Scale::Logarithmic),
            other => Err(format!("unknown scale '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub label: String,
    pub time: f64,
}

/// `"7 chars"`
pub fn length_label(length: usize) -> String {
    format!("{length} chars")
}

/// One point per sample, in history order.
pub fn points(history: &History) -> impl Iterator<Item = Point> + '_ {
    history.samples().iter().map(|s: &Sample| Point {
        label: length_label(s.length),
        time: s.time,
    })
}

/// Vertical axis bounds. `max` is a hard limit, `suggested_max` a hint the
/// renderer may exceed to fit the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub scale: Scale,
    pub min: f64,
    pub max: Option<f64>,
    pub suggested_max: Option<f64>,
}

/// Display settings for one attacker's chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub attacker: Attacker,
    pub title: String,
    pub scale: Scale,
}

impl ChartConfig {
    pub fn new(attacker: Attacker, scale: Scale) -> Self {
        let profile: &Profile = attacker.profile();
        let title = match attacker {
            Attacker::Human => format!("{SERIES_LABEL} ({} att./s)", profile.rate),
            Attacker::Computer => format!("{SERIES_LABEL} (computer)"),
        };
        Self {
            attacker,
            title,
            scale,
        }
    }

    /// Bounds for the given series. A linear axis leaves 10% headroom over
    /// the largest value.
    pub fn axis(&self, history: &History) -> Axis {
        match self.scale {
            Scale::Linear => {
                let peak = history
                    .samples()
                    .iter()
                    .map(|s| s.time)
                    .fold(0.0_f64, f64::max);
                let max = peak * 1.1;
                Axis {
                    scale: Scale::Linear,
                    min: 0.0,
                    max: Some(if max == 0.0 { 1.0 } else { max }),
                    suggested_max: None,
                }
            }
            Scale::Logarithmic => Axis {
                scale: Scale::Logarithmic,
                min: LOG_MIN,
                max: None,
                suggested_max: Some(LOG_SUGGESTED_MAX),
            },
        }
    }

    /// Label for a tick on the vertical axis.
    pub fn tick_label(&self, value: f64) -> String {
        if self.scale == Scale::Logarithmic {
            if value == 0.0 {
                return "0".to_string();
            }
            if value == 1.0 {
                return "1 sec".to_string();
            }
            if value == 0.001 {
                return "1 ms".to_string();
            }
            if value == 0.01 {
                return "10 ms".to_string();
            }
            if value == 0.1 {
                return "100 ms".to_string();
            }
            if let Some(exp) = power_of_ten(value) {
                let whole = BigUint::from(10u32).pow(exp);
                return format!("{} sec", group_digits(&whole));
            }
        }
        duration::format(value)
    }
}

/// `Some(n)` when `value == 10^n` for a positive `n`.
fn power_of_ten(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 10.0 {
        return None;
    }
    let exp = value.log10().round();
    if 10f64.powi(exp as i32) == value {
        Some(exp as u32)
    } else {
        None
    }
}

pub fn tooltip_title(point: &Point) -> String {
    format!("Length: {}", point.label)
}

pub fn tooltip_body(point: &Point) -> String {
    format!("{SERIES_LABEL}: {}", duration::format(point.time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::history::{Event, Tracker};
    use crate::estimate::charset::{CharClass, Selection};
    use rstest::rstest;

    fn typed(words: &[&str]) -> Tracker {
        let selection: Selection = [CharClass::Lowercase].into_iter().collect();
        let mut tracker = Tracker::new(selection);
        for word in words {
            tracker.advance(Event::Typed(*word));
        }
        tracker
    }

    #[test]
    fn test_points_follow_history() {
        let tracker = typed(&["a", "ab", "abc"]);
        let points: Vec<Point> = points(tracker.history(Attacker::Human)).collect();
        assert_eq!(
            points,
            vec![
                Point { label: "1 chars".into(), time: 52.0 },
                Point { label: "2 chars".into(), time: 1_352.0 },
                Point { label: "3 chars".into(), time: 35_152.0 },
            ]
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            ChartConfig::new(Attacker::Human, Scale::Linear).title,
            "Decryption time (0.5 att./s)"
        );
        assert_eq!(
            ChartConfig::new(Attacker::Computer, Scale::Linear).title,
            "Decryption time (computer)"
        );
    }

    #[test]
    fn test_linear_axis_headroom() {
        let tracker = typed(&["a", "ab"]);
        let config = ChartConfig::new(Attacker::Human, Scale::Linear);
        let axis = config.axis(tracker.history(Attacker::Human));
        assert_eq!(axis.min, 0.0);
        assert_eq!(axis.max, Some(1_352.0 * 1.1));
    }

    #[test]
    fn test_linear_axis_empty() {
        let tracker = typed(&[]);
        let config = ChartConfig::new(Attacker::Computer, Scale::Linear);
        assert_eq!(config.axis(tracker.history(Attacker::Computer)).max, Some(1.0));
    }

    #[test]
    fn test_log_axis() {
        let tracker = typed(&["a"]);
        let config = ChartConfig::new(Attacker::Computer, Scale::Logarithmic);
        let axis = config.axis(tracker.history(Attacker::Computer));
        assert_eq!(axis.min, 0.001);
        assert_eq!(axis.max, None);
        assert_eq!(axis.suggested_max, Some(1e15));
    }

    #[rstest]
    #[case(0.0, "0")]
    #[case(0.001, "1 ms")]
    #[case(0.01, "10 ms")]
    #[case(0.1, "100 ms")]
    #[case(1.0, "1 sec")]
    #[case(1000.0, "1,000 sec")]
    #[case(1e15, "1,000,000,000,000,000 sec")]
    #[case(90.0, "1.50 minutes")]
    fn test_log_ticks(#[case] value: f64, #[case] expected: &str) {
        let config = ChartConfig::new(Attacker::Human, Scale::Logarithmic);
        assert_eq!(config.tick_label(value), expected);
    }

    #[test]
    fn test_linear_ticks_use_duration() {
        let config = ChartConfig::new(Attacker::Human, Scale::Linear);
        assert_eq!(config.tick_label(1000.0), "16.67 minutes");
        assert_eq!(config.tick_label(0.0), "less than 1 millisecond");
    }

    #[test]
    fn test_tooltip() {
        let point = Point {
            label: length_label(7),
            time: 90.0,
        };
        assert_eq!(tooltip_title(&point), "Length: 7 chars");
        assert_eq!(tooltip_body(&point), "Decryption time: 1.50 minutes");
    }

    #[test]
    fn test_scale_round_trip() {
        assert_eq!("log".parse::<Scale>(), Ok(Scale::Logarithmic));
        assert_eq!(Scale::Linear.flipped().to_string(), "log");
        assert!("cubic".parse::<Scale>().is_err());
    }
}
