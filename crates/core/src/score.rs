//! Developer score engine.
//!
//! Compresses the summary counters into a single 0-100 score with a
//! per-dimension breakdown and a qualitative level label.

use serde::Serialize;

use crate::types::SummaryMetrics;

/// Dimension table: (name, weight, cap). Weights sum to exactly 100, so
/// the total score is bounded to [0, 100] without an explicit clamp.
/// Caps mark the raw value at which a dimension saturates.
const DIMENSIONS: [(&str, f64, u64); 7] = [
    ("repos", 10.0, 100),
    ("stars", 15.0, 10_000),
    ("forks", 10.0, 1_000),
    ("followers", 20.0, 10_000),
    ("commits", 25.0, 5_000),
    ("languages", 10.0, 20),
    ("contributions", 10.0, 1_000),
];

/// Result of [`compute_score`].
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    /// Weighted sub-score per dimension, each in `0..=weight`.
    pub breakdown: Vec<(String, f64)>,
    pub level: &'static str,
}

/// Logarithmic normalization to 0-100: large raw counts are compressed
/// so 10,000 stars do not dwarf everything else. Zero maps to exactly
/// zero since log10(1) = 0.
fn normalize(value: u64, cap: u64) -> f64 {
    let scaled = ((value as f64) + 1.0).log10() / ((cap as f64) + 1.0).log10() * 100.0;
    scaled.min(100.0)
}

/// Compute the developer score from summary counters.
///
/// Monotonic non-decreasing in every individual metric. Callers must
/// supply non-negative counters; the unsigned field types enforce that.
pub fn compute_score(metrics: &SummaryMetrics) -> ScoreResult {
    let values = [
        metrics.repos,
        metrics.stars,
        metrics.forks,
        metrics.followers,
        metrics.commits,
        metrics.languages,
        metrics.contributions,
    ];

    let mut breakdown = Vec::with_capacity(DIMENSIONS.len());
    let mut total = 0.0;
    for ((name, weight, cap), value) in DIMENSIONS.iter().zip(values) {
        let subscore = normalize(value, *cap) * (weight / 100.0);
        total += subscore;
        breakdown.push((name.to_string(), subscore));
    }

    let score = total.round() as u8;
    ScoreResult {
        score,
        breakdown,
        level: level_for(score),
    }
}

/// Level label for a score, inclusive lower bounds checked highest-first.
fn level_for(score: u8) -> &'static str {
    match score {
        90.. => "Legendary",
        80..=89 => "Expert",
        70..=79 => "Advanced",
        60..=69 => "Intermediate",
        50..=59 => "Rising",
        40..=49 => "Developing",
        30..=39 => "Beginner",
        _ => "Getting Started",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_metrics_score_zero() {
        let result = compute_score(&SummaryMetrics::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.level, "Getting Started");
        assert!(result.breakdown.iter().all(|(_, s)| *s == 0.0));
    }

    #[test]
    fn score_is_bounded_even_at_saturation() {
        let maxed = SummaryMetrics {
            repos: u64::MAX / 2,
            stars: u64::MAX / 2,
            forks: u64::MAX / 2,
            followers: u64::MAX / 2,
            following: 0,
            commits: u64::MAX / 2,
            languages: u64::MAX / 2,
            contributions: u64::MAX / 2,
        };
        let result = compute_score(&maxed);
        assert_eq!(result.score, 100);
        assert_eq!(result.level, "Legendary");
    }

    #[test]
    fn subscores_stay_within_their_weight() {
        let metrics = SummaryMetrics {
            repos: 1_000_000,
            stars: 1_000_000,
            forks: 1_000_000,
            followers: 1_000_000,
            following: 0,
            commits: 1_000_000,
            languages: 1_000_000,
            contributions: 1_000_000,
        };
        let result = compute_score(&metrics);
        for ((name, weight, _), (bname, sub)) in
            DIMENSIONS.iter().zip(result.breakdown.iter())
        {
            assert_eq!(*name, bname.as_str());
            assert!(*sub <= *weight, "{name} subscore {sub} exceeds weight {weight}");
        }
    }

    #[test]
    fn monotonic_in_each_metric() {
        let base = SummaryMetrics {
            repos: 10,
            stars: 100,
            forks: 20,
            followers: 50,
            following: 5,
            commits: 300,
            languages: 4,
            contributions: 80,
        };
        let base_total: f64 = compute_score(&base).breakdown.iter().map(|(_, s)| s).sum();

        let bumped = [
            SummaryMetrics { repos: base.repos + 10, ..base },
            SummaryMetrics { stars: base.stars + 100, ..base },
            SummaryMetrics { forks: base.forks + 10, ..base },
            SummaryMetrics { followers: base.followers + 50, ..base },
            SummaryMetrics { commits: base.commits + 100, ..base },
            SummaryMetrics { languages: base.languages + 2, ..base },
            SummaryMetrics { contributions: base.contributions + 50, ..base },
        ];
        for metrics in bumped {
            let total: f64 = compute_score(&metrics).breakdown.iter().map(|(_, s)| s).sum();
            assert!(total > base_total);
        }
    }

    #[test]
    fn level_thresholds_are_inclusive() {
        assert_eq!(level_for(90), "Legendary");
        assert_eq!(level_for(89), "Expert");
        assert_eq!(level_for(80), "Expert");
        assert_eq!(level_for(70), "Advanced");
        assert_eq!(level_for(60), "Intermediate");
        assert_eq!(level_for(50), "Rising");
        assert_eq!(level_for(40), "Developing");
        assert_eq!(level_for(30), "Beginner");
        assert_eq!(level_for(29), "Getting Started");
        assert_eq!(level_for(0), "Getting Started");
    }

    #[test]
    fn idempotent() {
        let metrics = SummaryMetrics {
            repos: 25,
            stars: 1234,
            forks: 87,
            followers: 410,
            following: 12,
            commits: 900,
            languages: 7,
            contributions: 300,
        };
        let a = compute_score(&metrics);
        let b = compute_score(&metrics);
        assert_eq!(a.score, b.score);
        assert_eq!(a.level, b.level);
        assert_eq!(a.breakdown, b.breakdown);
    }
}
