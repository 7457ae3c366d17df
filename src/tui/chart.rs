//! Text bar chart for one attacker's trend.

use cracktime::estimate::chart::{self, Axis, ChartConfig, Point, Scale, X_TITLE, Y_TITLE};
use cracktime::estimate::{History, duration};

use crate::terminal::{BLUE, DIM, Frame, RESET};

const BAR_WIDTH: usize = 24;
/// Newest points shown; older ones are summarized in one line.
const MAX_ROWS: usize = 10;

/// Where `time` falls between the axis bounds, in `0.0..=1.0`.
pub fn position(axis: &Axis, time: f64, peak: f64) -> f64 {
    let fraction = match axis.scale {
        Scale::Linear => {
            let max = axis.max.unwrap_or(peak.max(1.0));
            if max.is_finite() {
                (time - axis.min) / (max - axis.min)
            } else if time.is_infinite() {
                1.0
            } else {
                0.0
            }
        }
        Scale::Logarithmic => {
            let top = axis.max.unwrap_or_else(|| {
                axis.suggested_max
                    .map_or(peak, |suggested| suggested.max(peak))
            });
            let lo = axis.min.log10();
            let hi = top.log10();
            if time.is_infinite() {
                1.0
            } else if !hi.is_finite() || hi <= lo {
                0.0
            } else {
                (time.max(axis.min).log10() - lo) / (hi - lo)
            }
        }
    };
    fraction.clamp(0.0, 1.0)
}

fn bar(fraction: f64) -> String {
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    format!(
        "{BLUE}{}{RESET}{}",
        "█".repeat(filled),
        " ".repeat(BAR_WIDTH - filled)
    )
}

/// Draw the chart box for `history` into `frame`.
pub fn draw(frame: &mut Frame, config: &ChartConfig, history: &History) {
    let axis = config.axis(history);
    let points: Vec<Point> = chart::points(history).collect();
    let peak = points.iter().map(|p| p.time).fold(0.0_f64, f64::max);
    let top = axis.max.or(axis.suggested_max).unwrap_or(peak);

    frame.box_top(&config.title);
    frame.box_line(&format!(
        "{DIM}{Y_TITLE}, {} scale: {} .. {}{RESET}",
        config.scale,
        config.tick_label(axis.min),
        config.tick_label(top),
    ));

    if points.is_empty() {
        frame.box_line_center("(start typing)");
    } else {
        let skipped = points.len().saturating_sub(MAX_ROWS);
        if skipped > 0 {
            frame.box_line(&format!("{DIM}{:>10}   ... {skipped} shorter{RESET}", ""));
        }
        for point in &points[skipped..] {
            frame.box_line(&format!(
                "{:>10} │{} {}",
                point.label,
                bar(position(&axis, point.time, peak)),
                duration::format(point.time)
            ));
        }
    }

    frame.box_line(&format!("{DIM}{:>10} └─ {X_TITLE}{RESET}", ""));
    if let Some(last) = points.last() {
        frame.box_line(&format!(
            "{} · {}",
            chart::tooltip_title(last),
            chart::tooltip_body(last)
        ));
    }
    frame.box_bottom();
}
