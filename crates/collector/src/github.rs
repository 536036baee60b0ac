//! GitHub API client.

use crate::{CollectorConfig, CollectorError, Result};
use devpulse_core::types::{
    Commit, Contributor, Event, Issue, Profile, PullRequest, Release, Repo,
};
use devpulse_core::ActivityMap;
use futures::future::join_all;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// How many repositories the commit-activity sampling touches. Together
/// with the per-repo commit page size this bounds API usage; the
/// resulting activity map is an approximation of recent activity, not a
/// total commit count.
pub const ACTIVITY_REPO_SAMPLE: usize = 10;

/// Commits fetched per repo for the daily activity map.
pub const DAILY_COMMIT_PAGE: u32 = 30;

/// Commits fetched per repo for the hourly histogram.
pub const HOURLY_COMMIT_PAGE: u32 = 100;

/// Repositories scanned for collaborator aggregation.
pub const COLLABORATOR_REPO_SAMPLE: usize = 20;

/// Recency window for the trending search, in days.
pub const TRENDING_WINDOW_DAYS: i64 = 30;

/// Repositories sampled for the global language table.
pub const GLOBAL_LANGUAGE_SAMPLE: u32 = 100;

/// GitHub REST client with auth and user-agent headers baked in.
pub struct GithubClient {
    client: Client,
    api_base: String,
}

impl GithubClient {
    pub fn new(config: CollectorConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| CollectorError::Api(format!("invalid user agent: {e}")))?,
        );

        if let Some(ref token) = config.github_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|e| CollectorError::Api(format!("invalid token: {e}")))?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            api_base: config.api_base,
        })
    }

    /// Fetch a user profile. A missing user is a hard error; every other
    /// view depends on the profile existing.
    pub async fn get_user(&self, login: &str) -> Result<Profile> {
        let url = format!("{}/users/{}", self.api_base, login);
        self.get_required(&url, || format!("user {login}")).await
    }

    /// Fetch up to 100 repositories, most recently updated first.
    pub async fn get_repos(&self, login: &str) -> Result<Vec<Repo>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page=100",
            self.api_base, login
        );
        self.get_required(&url, || format!("repos of {login}")).await
    }

    /// Fetch the public event timeline sample for a user.
    pub async fn get_events(&self, login: &str) -> Result<Vec<Event>> {
        let url = format!(
            "{}/users/{}/events/public?per_page=100",
            self.api_base, login
        );
        self.get_optional(&url).await
    }

    /// Fetch a single repository.
    pub async fn get_repo(&self, owner: &str, repo: &str) -> Result<Repo> {
        let url = format!("{}/repos/{}/{}", self.api_base, owner, repo);
        self.get_required(&url, || format!("repo {owner}/{repo}"))
            .await
    }

    /// Fetch one page of commits for a repository. Errors degrade to an
    /// empty page: an empty repo returns 409, which is not worth
    /// surfacing.
    pub async fn get_repo_commits(
        &self,
        owner: &str,
        repo: &str,
        per_page: u32,
    ) -> Result<Vec<Commit>> {
        let url = format!(
            "{}/repos/{}/{}/commits?per_page={}",
            self.api_base, owner, repo, per_page
        );
        self.get_optional(&url).await
    }

    /// Fetch one page of pull requests in any state.
    pub async fn get_pulls(&self, owner: &str, repo: &str) -> Result<Vec<PullRequest>> {
        let url = format!(
            "{}/repos/{}/{}/pulls?state=all&per_page=100",
            self.api_base, owner, repo
        );
        self.get_optional(&url).await
    }

    /// Fetch one page of issues in any state.
    pub async fn get_issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>> {
        let url = format!(
            "{}/repos/{}/{}/issues?state=all&per_page=100",
            self.api_base, owner, repo
        );
        self.get_optional(&url).await
    }

    /// Fetch top contributors for a repository.
    pub async fn get_contributors(
        &self,
        owner: &str,
        repo: &str,
        per_page: u32,
    ) -> Result<Vec<Contributor>> {
        let url = format!(
            "{}/repos/{}/{}/contributors?per_page={}",
            self.api_base, owner, repo, per_page
        );
        self.get_optional(&url).await
    }

    /// Fetch recent releases for a repository.
    pub async fn get_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>> {
        let url = format!(
            "{}/repos/{}/{}/releases?per_page=20",
            self.api_base, owner, repo
        );
        self.get_optional(&url).await
    }

    /// Search repositories, ranked by stars descending. Failures degrade
    /// to an empty result list.
    pub async fn search_repos(&self, query: &str, per_page: u32) -> Result<Vec<Repo>> {
        #[derive(Default, serde::Deserialize)]
        struct SearchResults {
            #[serde(default)]
            items: Vec<Repo>,
        }

        let url = format!("{}/search/repositories", self.api_base);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", &per_page.to_string()),
            ])
            .send()
            .await?;
        self.check_rate_limit(&response)?;

        if !response.status().is_success() {
            debug!(query = query, status = %response.status(), "Search failed, degrading to empty");
            return Ok(Vec::new());
        }

        let results: SearchResults = response.json().await.unwrap_or_default();
        Ok(results.items)
    }

    /// Fetch trending repositories: high-star repos pushed within the
    /// last [`TRENDING_WINDOW_DAYS`] days, as a proxy for activity.
    pub async fn get_trending(&self, limit: u32) -> Result<Vec<Repo>> {
        let since = (chrono::Utc::now() - chrono::TimeDelta::days(TRENDING_WINDOW_DAYS))
            .format("%Y-%m-%d");
        let query = format!("stars:>10000 pushed:>{since}");
        self.search_repos(&query, limit).await
    }

    /// Fetch the top-starred repository sample backing the global
    /// language table.
    pub async fn get_top_repos(&self) -> Result<Vec<Repo>> {
        self.search_repos("stars:>1000", GLOBAL_LANGUAGE_SAMPLE).await
    }

    /// Sample commits across the most recently updated repositories.
    ///
    /// At most [`ACTIVITY_REPO_SAMPLE`] repos are scanned, `per_page`
    /// commits each, with the per-repo fetches issued concurrently. A
    /// repo that fails to fetch is logged and skipped so one bad repo
    /// does not empty the whole sample.
    pub async fn sample_commits(
        &self,
        login: &str,
        repos: &[Repo],
        per_page: u32,
    ) -> Vec<Commit> {
        let fetches = repos.iter().take(ACTIVITY_REPO_SAMPLE).map(|repo| {
            let name = repo.name.clone();
            async move {
                match self.get_repo_commits(login, &name, per_page).await {
                    Ok(commits) => commits,
                    Err(e) => {
                        warn!(repo = %name, error = %e, "Failed to fetch commits");
                        Vec::new()
                    }
                }
            }
        });

        let commits: Vec<Commit> = join_all(fetches).await.into_iter().flatten().collect();
        debug!(login = login, count = commits.len(), "Sampled commits");
        commits
    }

    /// Build the daily activity map from sampled commits.
    pub async fn commit_activity(&self, login: &str, repos: &[Repo]) -> ActivityMap {
        let commits = self.sample_commits(login, repos, DAILY_COMMIT_PAGE).await;
        devpulse_core::activity_by_date(&commits)
    }

    /// Aggregate contributors across sampled repositories into a ranked
    /// collaborator list (the owner excluded).
    pub async fn collaborators(
        &self,
        login: &str,
        repos: &[Repo],
    ) -> Vec<devpulse_core::Collaborator> {
        let fetches = repos.iter().take(COLLABORATOR_REPO_SAMPLE).map(|repo| {
            let name = repo.name.clone();
            async move {
                match self.get_contributors(login, &name, 10).await {
                    Ok(contributors) => contributors,
                    Err(e) => {
                        warn!(repo = %name, error = %e, "Failed to fetch contributors");
                        Vec::new()
                    }
                }
            }
        });

        let per_repo: Vec<_> = join_all(fetches).await;
        let merged = devpulse_core::merge_collaborators(login, &per_repo);
        info!(login = login, count = merged.len(), "Aggregated collaborators");
        merged
    }

    /// GET a resource that must exist; 404 maps to [`CollectorError::NotFound`].
    async fn get_required<T: DeserializeOwned>(
        &self,
        url: &str,
        what: impl Fn() -> String,
    ) -> Result<T> {
        let response = self.client.get(url).send().await?;
        self.check_rate_limit(&response)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(CollectorError::NotFound(what())),
            status if !status.is_success() => {
                Err(CollectorError::Api(format!("GitHub API error: {status}")))
            }
            _ => Ok(response.json().await?),
        }
    }

    /// GET a resource where failure should degrade to "nothing", not an
    /// error the caller has to branch on.
    async fn get_optional<T: DeserializeOwned + Default>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;
        self.check_rate_limit(&response)?;

        if !response.status().is_success() {
            debug!(url = url, status = %response.status(), "Non-success response, degrading to default");
            return Ok(T::default());
        }

        Ok(response.json().await.unwrap_or_default())
    }

    fn check_rate_limit(&self, response: &reqwest::Response) -> Result<()> {
        if response.status() == StatusCode::FORBIDDEN {
            if let Some(remaining) = response.headers().get("x-ratelimit-remaining") {
                if remaining == "0" {
                    let reset = response
                        .headers()
                        .get("x-ratelimit-reset")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .unwrap_or(60);

                    let now = chrono::Utc::now().timestamp() as u64;
                    let wait = reset.saturating_sub(now);

                    return Err(CollectorError::RateLimited(wait));
                }
            }
        }
        Ok(())
    }
}
