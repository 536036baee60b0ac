//! Aggregation of raw repos, commits and events into grouped metrics.
//!
//! All groupings are order-independent over their input: concurrent
//! fetches may deliver records in any order without changing the result.
//! Malformed records (missing timestamp, missing language) are skipped,
//! never reported as errors.

use std::collections::BTreeMap;

use chrono::{FixedOffset, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{Commit, Repo};

/// Commit counts keyed by UTC calendar date.
///
/// Built by sampling commits across a bounded set of repositories, so the
/// counts are an approximation of recent activity, not an exhaustive
/// commit total.
pub type ActivityMap = BTreeMap<NaiveDate, u64>;

/// Parse a date-keyed counter map with string keys (`YYYY-MM-DD`).
///
/// Entries whose key does not parse as a calendar date are dropped with a
/// warning rather than failing the whole map.
pub fn activity_from_str_keys(raw: &BTreeMap<String, u64>) -> ActivityMap {
    let mut map = ActivityMap::new();
    for (key, &count) in raw {
        match key.parse::<NaiveDate>() {
            Ok(date) => {
                map.insert(date, count);
            }
            Err(_) => warn!(key = %key, "Dropping activity entry with unparseable date"),
        }
    }
    map
}

/// Per-language aggregate over a repository list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub language: String,
    pub count: u64,
    pub total_stars: u64,
    pub total_forks: u64,
}

/// Group repositories by primary language.
///
/// Repositories without a language are excluded entirely rather than
/// bucketed under a placeholder; downstream percentage calculations rely
/// on that. Output is sorted by repo count descending, then by name, so
/// the result is deterministic regardless of input order.
pub fn language_breakdown(repos: &[Repo]) -> Vec<LanguageStat> {
    let mut by_language: BTreeMap<&str, LanguageStat> = BTreeMap::new();

    for repo in repos {
        let Some(language) = repo.language.as_deref() else {
            continue;
        };
        let stat = by_language.entry(language).or_insert_with(|| LanguageStat {
            language: language.to_string(),
            count: 0,
            total_stars: 0,
            total_forks: 0,
        });
        stat.count += 1;
        stat.total_stars += repo.stargazers_count;
        stat.total_forks += repo.forks_count;
    }

    let mut stats: Vec<LanguageStat> = by_language.into_values().collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.language.cmp(&b.language)));
    stats
}

/// Group commits by the UTC calendar date of their author timestamp.
/// Commits without a valid timestamp are skipped.
pub fn activity_by_date(commits: &[Commit]) -> ActivityMap {
    let mut map = ActivityMap::new();
    for commit in commits {
        if let Some(at) = commit.authored_at() {
            *map.entry(at.date_naive()).or_insert(0) += 1;
        }
    }
    map
}

/// Histogram of commits by hour of day, 0..24.
///
/// The hour is taken after applying `offset` to the author timestamp. The
/// upstream data this was modeled on bucketed by the host's local time
/// zone; here the offset is an explicit parameter (pass
/// `FixedOffset::east_opt(0)` for UTC) so results are reproducible across
/// deployments.
pub fn activity_by_hour(commits: &[Commit], offset: FixedOffset) -> [u64; 24] {
    let mut hours = [0u64; 24];
    for commit in commits {
        if let Some(at) = commit.authored_at() {
            let hour = at.with_timezone(&offset).hour() as usize;
            hours[hour] += 1;
        }
    }
    hours
}

/// Language proficiency tiers derived from repo counts per language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub emerging: Vec<String>,
}

/// Tier languages by their share of the total repo count: >= 30% primary,
/// >= 10% secondary, the rest emerging (capped at five).
pub fn skill_assessment(stats: &[LanguageStat]) -> SkillAssessment {
    let total: u64 = stats.iter().map(|s| s.count).sum();
    if total == 0 {
        return SkillAssessment::default();
    }

    let mut assessment = SkillAssessment::default();
    for stat in stats {
        let share = stat.count as f64 / total as f64;
        if share >= 0.3 {
            assessment.primary.push(stat.language.clone());
        } else if share >= 0.1 {
            assessment.secondary.push(stat.language.clone());
        } else if assessment.emerging.len() < 5 {
            assessment.emerging.push(stat.language.clone());
        }
    }
    assessment
}
