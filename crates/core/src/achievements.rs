//! Threshold-based achievement badges.
//!
//! The catalog is a fixed static table; achievements are recomputed fresh
//! on every call and returned in catalog order. Consumers wanting
//! "unlocked first" partition on their side.

use serde::Serialize;

use crate::types::SummaryMetrics;

/// Which summary counter a catalog entry is measured against.
#[derive(Debug, Clone, Copy)]
enum Metric {
    Repos,
    Stars,
    Followers,
    Commits,
    Forks,
}

impl Metric {
    fn value(self, metrics: &SummaryMetrics) -> u64 {
        match self {
            Self::Repos => metrics.repos,
            Self::Stars => metrics.stars,
            Self::Followers => metrics.followers,
            Self::Commits => metrics.commits,
            Self::Forks => metrics.forks,
        }
    }
}

struct CatalogEntry {
    /// Stable identifier; treat as a public contract even though nothing
    /// persists it today.
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    metric: Metric,
    threshold: u64,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "repo-10",
        name: "Repository Starter",
        description: "Create 10 repositories",
        icon: "📦",
        metric: Metric::Repos,
        threshold: 10,
    },
    CatalogEntry {
        id: "repo-50",
        name: "Repository Master",
        description: "Create 50 repositories",
        icon: "📚",
        metric: Metric::Repos,
        threshold: 50,
    },
    CatalogEntry {
        id: "repo-100",
        name: "Repository Legend",
        description: "Create 100 repositories",
        icon: "🏆",
        metric: Metric::Repos,
        threshold: 100,
    },
    CatalogEntry {
        id: "star-100",
        name: "Star Collector",
        description: "Receive 100 stars",
        icon: "⭐",
        metric: Metric::Stars,
        threshold: 100,
    },
    CatalogEntry {
        id: "star-1000",
        name: "Star Magnet",
        description: "Receive 1,000 stars",
        icon: "🌟",
        metric: Metric::Stars,
        threshold: 1_000,
    },
    CatalogEntry {
        id: "star-10000",
        name: "Star Superstar",
        description: "Receive 10,000 stars",
        icon: "✨",
        metric: Metric::Stars,
        threshold: 10_000,
    },
    CatalogEntry {
        id: "follower-100",
        name: "Rising Star",
        description: "Reach 100 followers",
        icon: "👥",
        metric: Metric::Followers,
        threshold: 100,
    },
    CatalogEntry {
        id: "follower-1000",
        name: "Influencer",
        description: "Reach 1,000 followers",
        icon: "🌟",
        metric: Metric::Followers,
        threshold: 1_000,
    },
    CatalogEntry {
        id: "follower-10000",
        name: "GitHub Celebrity",
        description: "Reach 10,000 followers",
        icon: "🎖️",
        metric: Metric::Followers,
        threshold: 10_000,
    },
    CatalogEntry {
        id: "commit-100",
        name: "Committed Developer",
        description: "Make 100 commits",
        icon: "💻",
        metric: Metric::Commits,
        threshold: 100,
    },
    CatalogEntry {
        id: "commit-1000",
        name: "Code Machine",
        description: "Make 1,000 commits",
        icon: "⚡",
        metric: Metric::Commits,
        threshold: 1_000,
    },
    CatalogEntry {
        id: "commit-10000",
        name: "Commit Master",
        description: "Make 10,000 commits",
        icon: "🔥",
        metric: Metric::Commits,
        threshold: 10_000,
    },
    CatalogEntry {
        id: "fork-50",
        name: "Fork Enthusiast",
        description: "Get 50 forks",
        icon: "🍴",
        metric: Metric::Forks,
        threshold: 50,
    },
    CatalogEntry {
        id: "fork-500",
        name: "Fork Champion",
        description: "Get 500 forks",
        icon: "🥄",
        metric: Metric::Forks,
        threshold: 500,
    },
];

/// An evaluated badge. `progress` is the raw metric value, deliberately
/// not clamped to `max_progress`; display layers clamp the visual bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
    pub progress: u64,
    pub max_progress: u64,
}

/// Evaluate the full catalog against the summary counters.
pub fn compute_achievements(metrics: &SummaryMetrics) -> Vec<Achievement> {
    CATALOG
        .iter()
        .map(|entry| {
            let value = entry.metric.value(metrics);
            Achievement {
                id: entry.id,
                name: entry.name,
                description: entry.description,
                icon: entry.icon,
                unlocked: value >= entry.threshold,
                progress: value,
                max_progress: entry.threshold,
            }
        })
        .collect()
}

/// Number of unlocked achievements.
pub fn unlocked_count(achievements: &[Achievement]) -> usize {
    achievements.iter().filter(|a| a.unlocked).count()
}

/// Unlocked share of the catalog as a rounded percentage.
pub fn total_progress(achievements: &[Achievement]) -> u64 {
    if achievements.is_empty() {
        return 0;
    }
    let unlocked = unlocked_count(achievements) as f64;
    (unlocked / achievements.len() as f64 * 100.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique_and_ordered() {
        let achievements = compute_achievements(&SummaryMetrics::default());
        assert_eq!(achievements.len(), 14);
        assert_eq!(achievements[0].id, "repo-10");
        assert_eq!(achievements[13].id, "fork-500");

        let mut ids: Vec<&str> = achievements.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn unlocked_iff_progress_reaches_max() {
        let metrics = SummaryMetrics {
            repos: 50,
            stars: 999,
            forks: 49,
            followers: 10_000,
            commits: 150,
            ..SummaryMetrics::default()
        };
        for a in compute_achievements(&metrics) {
            assert_eq!(a.unlocked, a.progress >= a.max_progress, "{}", a.id);
        }
    }

    #[test]
    fn progress_is_not_clamped() {
        let metrics = SummaryMetrics {
            repos: 150,
            ..SummaryMetrics::default()
        };
        let achievements = compute_achievements(&metrics);
        let repo_10 = achievements.iter().find(|a| a.id == "repo-10").unwrap();
        assert!(repo_10.unlocked);
        assert_eq!(repo_10.progress, 150);
        assert_eq!(repo_10.max_progress, 10);
    }

    #[test]
    fn order_ignores_unlocked_status() {
        let metrics = SummaryMetrics {
            forks: 1_000,
            ..SummaryMetrics::default()
        };
        let achievements = compute_achievements(&metrics);
        // Fork badges are unlocked but still listed last.
        assert!(achievements[12].unlocked);
        assert_eq!(achievements[12].id, "fork-50");
    }

    #[test]
    fn progress_helpers() {
        let metrics = SummaryMetrics {
            repos: 10,
            commits: 1_500,
            ..SummaryMetrics::default()
        };
        let achievements = compute_achievements(&metrics);
        // repo-10, commit-100, commit-1000.
        assert_eq!(unlocked_count(&achievements), 3);
        assert_eq!(total_progress(&achievements), 21); // 3/14 ≈ 21.4 → 21
        assert_eq!(total_progress(&[]), 0);
    }
}
