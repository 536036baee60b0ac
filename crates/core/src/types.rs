//! Raw GitHub API shapes and the summary counters derived from them.
//!
//! Field names follow the GitHub REST API so the collector can deserialize
//! responses directly. Extra fields in a response are ignored; optional
//! fields that are absent deserialize to `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub user profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub public_gists: u64,
}

/// A repository owned by a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    /// `owner/name`, populated by list and search endpoints.
    pub full_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub language: Option<String>,
    pub html_url: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A public timeline event (push, PR, issue, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: EventRepo,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

/// A commit from the repository commits endpoint. Only the author
/// timestamp is read; everything else is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub date: Option<DateTime<Utc>>,
}

impl Commit {
    /// Author timestamp, if the record carries one.
    pub fn authored_at(&self) -> Option<DateTime<Utc>> {
        self.commit.author.as_ref().and_then(|a| a.date)
    }
}

/// An issue as returned by the issues endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub labels: Vec<IssueLabel>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueLabel {
    pub name: Option<String>,
}

/// A pull request as returned by the pulls endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub state: String,
    pub merged_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A published release.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub name: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub prerelease: bool,
}

/// A contributor entry from the contributors endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contributor {
    pub login: Option<String>,
    #[serde(default)]
    pub contributions: u64,
}

/// The summary counters feeding the score and achievement engines.
///
/// Decouples those engines from the API shape: callers build this once
/// from whatever raw data they managed to fetch. All fields default to
/// zero, so a partially-populated summary is always valid input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub repos: u64,
    pub stars: u64,
    pub forks: u64,
    pub followers: u64,
    pub following: u64,
    pub commits: u64,
    pub languages: u64,
    pub contributions: u64,
}

impl SummaryMetrics {
    /// Build summary counters from a profile and its repositories.
    ///
    /// `commits` and `contributions` come from sampled activity data and
    /// are passed through as-is.
    pub fn from_raw(profile: &Profile, repos: &[Repo], commits: u64, contributions: u64) -> Self {
        let stars = repos.iter().map(|r| r.stargazers_count).sum();
        let forks = repos.iter().map(|r| r.forks_count).sum();
        let languages = {
            let mut seen: Vec<&str> = repos
                .iter()
                .filter_map(|r| r.language.as_deref())
                .collect();
            seen.sort_unstable();
            seen.dedup();
            seen.len() as u64
        };

        Self {
            repos: profile.public_repos,
            stars,
            forks,
            followers: profile.followers,
            following: profile.following,
            commits,
            languages,
            contributions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(language: Option<&str>, stars: u64, forks: u64) -> Repo {
        Repo {
            language: language.map(String::from),
            stargazers_count: stars,
            forks_count: forks,
            ..Repo::default()
        }
    }

    #[test]
    fn summary_sums_and_dedupes_languages() {
        let profile = Profile {
            login: "octocat".into(),
            public_repos: 3,
            followers: 7,
            following: 2,
            ..Profile::default()
        };
        let repos = vec![
            repo(Some("Rust"), 10, 1),
            repo(Some("Rust"), 5, 0),
            repo(None, 3, 2),
        ];

        let summary = SummaryMetrics::from_raw(&profile, &repos, 42, 9);
        assert_eq!(summary.repos, 3);
        assert_eq!(summary.stars, 18);
        assert_eq!(summary.forks, 3);
        assert_eq!(summary.followers, 7);
        assert_eq!(summary.languages, 1);
        assert_eq!(summary.commits, 42);
        assert_eq!(summary.contributions, 9);
    }

    #[test]
    fn summary_from_empty_input_is_zeroed() {
        let summary = SummaryMetrics::from_raw(&Profile::default(), &[], 0, 0);
        assert_eq!(summary, SummaryMetrics::default());
    }

    #[test]
    fn commit_author_date_is_optional() {
        let commit: Commit = serde_json::from_str(r#"{"commit":{"author":null}}"#).unwrap();
        assert!(commit.authored_at().is_none());
    }
}
