//! Global GitHub trends: trending repositories and rule-based insights.
//!
//! Language popularity over the global repo sample reuses
//! [`crate::activity::language_breakdown`]; this module adds the trending
//! view and the headline insights derived from both.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::activity::LanguageStat;
use crate::types::Repo;

/// A trending repository, shaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendingRepo {
    /// `owner/name` where available, bare name otherwise.
    pub name: String,
    pub stars: u64,
    pub forks: u64,
    pub language: Option<String>,
    pub url: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Map search results (already ranked by stars by the search endpoint)
/// into the trending view, keeping at most `limit` entries.
pub fn trending_repos(repos: &[Repo], limit: usize) -> Vec<TrendingRepo> {
    repos
        .iter()
        .take(limit)
        .map(|repo| TrendingRepo {
            name: repo
                .full_name
                .clone()
                .unwrap_or_else(|| repo.name.clone()),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            language: repo.language.clone(),
            url: repo.html_url.clone(),
            updated_at: repo.updated_at,
        })
        .collect()
}

/// A headline insight for the global dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub title: &'static str,
    pub value: String,
    pub description: String,
}

/// Derive headline insights from the trending list and the global
/// language table. Inputs that are empty simply contribute no insight;
/// the result may be shorter than two entries but is never an error.
pub fn generate_insights(trending: &[TrendingRepo], languages: &[LanguageStat]) -> Vec<Insight> {
    let mut insights = Vec::new();

    // language_breakdown already sorts by repo count descending.
    if let Some(top) = languages.first() {
        insights.push(Insight {
            title: "Most Popular Language",
            value: top.language.clone(),
            description: format!("{} dominates GitHub by repository count.", top.language),
        });
    }

    if let Some(hottest) = trending.first() {
        insights.push(Insight {
            title: "Hottest Repository",
            value: hottest.name.clone(),
            description: format!(
                "This repo leads the charts with {} stars.",
                hottest.stars
            ),
        });
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(full_name: Option<&str>, name: &str, stars: u64, language: Option<&str>) -> Repo {
        Repo {
            name: name.into(),
            full_name: full_name.map(String::from),
            stargazers_count: stars,
            language: language.map(String::from),
            ..Repo::default()
        }
    }

    fn stat(language: &str, count: u64) -> LanguageStat {
        LanguageStat {
            language: language.into(),
            count,
            total_stars: 0,
            total_forks: 0,
        }
    }

    #[test]
    fn trending_prefers_full_name_and_respects_limit() {
        let repos = vec![
            repo(Some("rust-lang/rust"), "rust", 90_000, Some("Rust")),
            repo(None, "orphan", 50_000, None),
            repo(Some("torvalds/linux"), "linux", 150_000, Some("C")),
        ];
        let trending = trending_repos(&repos, 2);
        assert_eq!(trending.len(), 2);
        assert_eq!(trending[0].name, "rust-lang/rust");
        assert_eq!(trending[1].name, "orphan");
    }

    #[test]
    fn insights_name_top_language_and_hottest_repo() {
        let trending = trending_repos(
            &[repo(Some("rust-lang/rust"), "rust", 90_000, Some("Rust"))],
            5,
        );
        let languages = vec![stat("JavaScript", 40), stat("Rust", 12)];

        let insights = generate_insights(&trending, &languages);
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].title, "Most Popular Language");
        assert_eq!(insights[0].value, "JavaScript");
        assert_eq!(insights[1].title, "Hottest Repository");
        assert_eq!(insights[1].value, "rust-lang/rust");
        assert!(insights[1].description.contains("90000 stars"));
    }

    #[test]
    fn empty_inputs_produce_no_insights_instead_of_failing() {
        assert!(generate_insights(&[], &[]).is_empty());

        let only_langs = generate_insights(&[], &[stat("Go", 3)]);
        assert_eq!(only_langs.len(), 1);
        assert_eq!(only_langs[0].title, "Most Popular Language");

        let trending = trending_repos(&[repo(None, "solo", 10, None)], 5);
        let only_trending = generate_insights(&trending, &[]);
        assert_eq!(only_trending.len(), 1);
        assert_eq!(only_trending[0].title, "Hottest Repository");
    }
}
