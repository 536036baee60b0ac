//! Pull-request and issue statistics for a single repository.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Issue, PullRequest};

/// Pull-request state counts over one fetched page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PrStats {
    pub open: u64,
    pub closed: u64,
    pub merged: u64,
    /// Mean time from open to merge, in days, rounded to one decimal.
    pub avg_merge_time_days: f64,
}

/// Count PRs by state. "Closed" excludes merged PRs; GitHub reports
/// merged PRs with `state == "closed"` plus a `merged_at` timestamp.
pub fn pr_stats(pulls: &[PullRequest]) -> PrStats {
    let open = pulls.iter().filter(|pr| pr.state == "open").count() as u64;
    let closed = pulls
        .iter()
        .filter(|pr| pr.state == "closed" && pr.merged_at.is_none())
        .count() as u64;

    let merge_times: Vec<f64> = pulls
        .iter()
        .filter_map(|pr| {
            let merged = pr.merged_at?;
            let created = pr.created_at?;
            Some((merged - created).num_seconds() as f64 / 86_400.0)
        })
        .collect();

    let merged = pulls.iter().filter(|pr| pr.merged_at.is_some()).count() as u64;
    let avg_merge_time_days = if merge_times.is_empty() {
        0.0
    } else {
        let mean = merge_times.iter().sum::<f64>() / merge_times.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    PrStats {
        open,
        closed,
        merged,
        avg_merge_time_days,
    }
}

/// Issue state counts and label frequencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueStats {
    pub open: u64,
    pub closed: u64,
    pub labels: BTreeMap<String, u64>,
}

/// Count issues by state and tally label usage. Unnamed labels are
/// skipped.
pub fn issue_stats(issues: &[Issue]) -> IssueStats {
    let mut stats = IssueStats::default();
    for issue in issues {
        match issue.state.as_str() {
            "open" => stats.open += 1,
            "closed" => stats.closed += 1,
            _ => {}
        }
        for label in &issue.labels {
            if let Some(name) = &label.name {
                *stats.labels.entry(name.clone()).or_insert(0) += 1;
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IssueLabel;
    use chrono::{DateTime, Utc};

    fn pr(state: &str, created: Option<&str>, merged: Option<&str>) -> PullRequest {
        let parse = |s: &str| s.parse::<DateTime<Utc>>().unwrap();
        PullRequest {
            state: state.into(),
            created_at: created.map(parse),
            merged_at: merged.map(parse),
        }
    }

    #[test]
    fn merged_prs_are_not_counted_as_closed() {
        let pulls = vec![
            pr("open", Some("2026-01-01T00:00:00Z"), None),
            pr("closed", Some("2026-01-01T00:00:00Z"), None),
            pr(
                "closed",
                Some("2026-01-01T00:00:00Z"),
                Some("2026-01-03T00:00:00Z"),
            ),
        ];
        let stats = pr_stats(&pulls);
        assert_eq!(stats.open, 1);
        assert_eq!(stats.closed, 1);
        assert_eq!(stats.merged, 1);
        assert_eq!(stats.avg_merge_time_days, 2.0);
    }

    #[test]
    fn merge_time_is_rounded_to_tenths() {
        let pulls = vec![
            pr(
                "closed",
                Some("2026-01-01T00:00:00Z"),
                Some("2026-01-02T06:00:00Z"), // 1.25 days
            ),
            pr(
                "closed",
                Some("2026-01-01T00:00:00Z"),
                Some("2026-01-03T00:00:00Z"), // 2 days
            ),
        ];
        // Mean 1.625 rounds to 1.6.
        assert_eq!(pr_stats(&pulls).avg_merge_time_days, 1.6);
    }

    #[test]
    fn empty_pulls_yield_zeroes() {
        assert_eq!(pr_stats(&[]), PrStats::default());
    }

    #[test]
    fn issue_stats_count_states_and_labels() {
        let issues = vec![
            Issue {
                state: "open".into(),
                labels: vec![
                    IssueLabel { name: Some("bug".into()) },
                    IssueLabel { name: None },
                ],
            },
            Issue {
                state: "closed".into(),
                labels: vec![IssueLabel { name: Some("bug".into()) }],
            },
        ];
        let stats = issue_stats(&issues);
        assert_eq!(stats.open, 1);
        assert_eq!(stats.closed, 1);
        assert_eq!(stats.labels["bug"], 2);
        assert_eq!(stats.labels.len(), 1);
    }
}
