//! Per-axis max-normalization for radar-style comparisons.
//!
//! Each axis is scaled independently: the strongest entity on an axis
//! always reads 100 there. That keeps the chart readable when axes differ
//! by orders of magnitude (stars in the thousands, gists in single
//! digits), at the cost of absolute values not being recoverable from the
//! normalized series.

use serde::{Deserialize, Serialize};

use crate::types::{Event, Profile, Repo};

/// One entity's raw values, parallel to a shared axis list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarEntity {
    pub label: String,
    pub values: Vec<f64>,
}

/// One entity's normalized 0-100 series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSeries {
    pub label: String,
    pub values: Vec<u64>,
}

/// Normalize entities axis-by-axis to 0-100.
///
/// For each axis the maximum across entities is the 100 mark; an all-zero
/// axis normalizes to 0 for everyone instead of dividing by zero. Entities
/// with fewer values than the longest series read 0 on the missing axes.
pub fn normalize_axes(entities: &[RadarEntity]) -> Vec<RadarSeries> {
    let axis_count = entities.iter().map(|e| e.values.len()).max().unwrap_or(0);

    let maxima: Vec<f64> = (0..axis_count)
        .map(|axis| {
            entities
                .iter()
                .filter_map(|e| e.values.get(axis))
                .fold(0.0f64, |acc, &v| acc.max(v))
        })
        .collect();

    entities
        .iter()
        .map(|entity| {
            let values = (0..axis_count)
                .map(|axis| {
                    let value = entity.values.get(axis).copied().unwrap_or(0.0);
                    let max = maxima[axis];
                    if max <= 0.0 {
                        0
                    } else {
                        (value / max * 100.0).round() as u64
                    }
                })
                .collect();
            RadarSeries {
                label: entity.label.clone(),
                values,
            }
        })
        .collect()
}

/// Axis names for [`user_axes`], in output order.
pub const USER_AXES: [&str; 6] = [
    "Influence",
    "Library Size",
    "Avg Quality",
    "Total Impact",
    "Recent Velocity",
    "Documentation",
];

/// Build the standard six comparison axes for a user from raw data.
///
/// Recent Velocity counts push, pull-request and issue events from the
/// public timeline sample.
pub fn user_axes(profile: &Profile, repos: &[Repo], events: &[Event]) -> RadarEntity {
    let total_stars: u64 = repos.iter().map(|r| r.stargazers_count).sum();
    let avg_stars = if repos.is_empty() {
        0.0
    } else {
        total_stars as f64 / repos.len() as f64
    };
    let velocity = events
        .iter()
        .filter(|e| {
            matches!(
                e.kind.as_str(),
                "PushEvent" | "PullRequestEvent" | "IssuesEvent"
            )
        })
        .count();

    RadarEntity {
        label: profile.login.clone(),
        values: vec![
            profile.followers as f64,
            profile.public_repos as f64,
            avg_stars,
            total_stars as f64,
            velocity as f64,
            profile.public_gists as f64,
        ],
    }
}
