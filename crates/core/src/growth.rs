//! Synthesized growth trend from a single profile snapshot.
//!
//! No historical data is persisted anywhere in the system, so the trend
//! is an interpolation toward the current snapshot, not a measurement:
//! each counter ramps linearly from a fixed fraction of today's value up
//! to today's value over twelve months.

use chrono::{DateTime, Datelike, Months, Utc};
use serde::{Deserialize, Serialize};

/// One synthesized month of the growth series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Month label, e.g. "Mar 2026".
    pub month: String,
    pub followers: u64,
    pub stars: u64,
    pub repos: u64,
}

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Synthesize a twelve-month growth series ending at `now`.
///
/// Ramp floors match the upstream presentation: followers start at 30%
/// of the snapshot, stars at 20%, repos at 40%, ramping toward the
/// snapshot value at the current month.
pub fn synthesize_growth(
    followers: u64,
    total_stars: u64,
    repos: u64,
    now: DateTime<Utc>,
) -> Vec<GrowthPoint> {
    (0..12u32)
        .map(|i| {
            let date = now
                .checked_sub_months(Months::new(11 - i))
                .unwrap_or(now);
            let t = i as f64 / 12.0;
            GrowthPoint {
                month: format!(
                    "{} {}",
                    MONTH_NAMES[date.month0() as usize],
                    date.year()
                ),
                followers: ramp(followers, 0.3, t),
                stars: ramp(total_stars, 0.2, t),
                repos: ramp(repos, 0.4, t),
            }
        })
        .collect()
}

fn ramp(value: u64, floor: f64, t: f64) -> u64 {
    (value as f64 * (floor + t * (1.0 - floor))).round() as u64
}
