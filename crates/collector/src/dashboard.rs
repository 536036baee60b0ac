//! Dashboard assembly: concurrent fetches plus core computation.
//!
//! The profile and repo list are the only fatal fetches; everything else
//! degrades to its zero value on failure so one flaky endpoint cannot
//! take down the whole view.

use chrono::{FixedOffset, Utc};
use devpulse_core::types::{Profile, Repo};
use devpulse_core::{
    compute_achievements, compute_score, compute_streak, language_breakdown, skill_assessment,
    synthesize_growth, user_axes, Achievement, ActivityMap, Collaborator, GrowthPoint,
    IssueStats, LanguageStat, PrStats, RadarEntity, RadarSeries, ScoreResult, SkillAssessment,
    StreakResult, SummaryMetrics,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::github::{GithubClient, HOURLY_COMMIT_PAGE};
use crate::Result;

/// Everything the user view needs, computed fresh per call.
#[derive(Debug, Serialize)]
pub struct UserDashboard {
    pub profile: Profile,
    pub summary: SummaryMetrics,
    pub score: ScoreResult,
    pub achievements: Vec<Achievement>,
    pub languages: Vec<LanguageStat>,
    pub skills: SkillAssessment,
    /// Sampled daily commit counts; an approximation, not a total.
    pub activity: ActivityMap,
    pub hourly: [u64; 24],
    pub streak: StreakResult,
    pub growth: Vec<GrowthPoint>,
    pub collaborators: Vec<Collaborator>,
    pub radar: RadarEntity,
    pub repos: Vec<Repo>,
}

/// Detail view for a single repository.
#[derive(Debug, Serialize)]
pub struct RepoDetail {
    pub repo: Repo,
    pub pr_stats: PrStats,
    pub issue_stats: IssueStats,
    pub releases: Vec<devpulse_core::types::Release>,
}

/// Radar comparison of two users.
#[derive(Debug, Serialize)]
pub struct Comparison {
    pub axes: Vec<&'static str>,
    pub series: Vec<RadarSeries>,
}

/// Ecosystem-wide view: trending repos, global language popularity and
/// the headline insights derived from both.
#[derive(Debug, Serialize)]
pub struct GlobalDashboard {
    pub trending: Vec<devpulse_core::TrendingRepo>,
    pub languages: Vec<LanguageStat>,
    pub insights: Vec<devpulse_core::Insight>,
}

/// Fetch and compute the full dashboard for one user.
///
/// Profile and repo fetches run first and are fatal on failure. The
/// remaining sub-fetches (events, two commit samples, collaborators) are
/// independent and run concurrently, each degrading to empty on error.
pub async fn fetch_dashboard(client: &GithubClient, login: &str) -> Result<UserDashboard> {
    let (profile, repos) = tokio::try_join!(client.get_user(login), client.get_repos(login))?;

    let (events, activity, hourly_commits, collaborators) = tokio::join!(
        client.get_events(login),
        client.commit_activity(login, &repos),
        client.sample_commits(login, &repos, HOURLY_COMMIT_PAGE),
        client.collaborators(login, &repos),
    );

    let events = events.unwrap_or_else(|e| {
        warn!(login = login, error = %e, "Failed to fetch events");
        Vec::new()
    });

    let commits: u64 = activity.values().sum();
    let contributions = events.iter().filter(|e| e.kind == "PushEvent").count() as u64;

    let summary = SummaryMetrics::from_raw(&profile, &repos, commits, contributions);
    let languages = language_breakdown(&repos);
    let utc = FixedOffset::east_opt(0).expect("zero offset is valid");

    let dashboard = UserDashboard {
        summary,
        score: compute_score(&summary),
        achievements: compute_achievements(&summary),
        skills: skill_assessment(&languages),
        streak: compute_streak(&activity, Utc::now().date_naive()),
        hourly: devpulse_core::activity_by_hour(&hourly_commits, utc),
        growth: synthesize_growth(
            profile.followers,
            summary.stars,
            profile.public_repos,
            Utc::now(),
        ),
        radar: user_axes(&profile, &repos, &events),
        languages,
        activity,
        collaborators,
        profile,
        repos,
    };

    info!(
        login = login,
        score = dashboard.score.score,
        repos = dashboard.summary.repos,
        "Assembled dashboard"
    );
    Ok(dashboard)
}

/// Fetch and compute the detail view for one repository.
pub async fn fetch_repo_detail(
    client: &GithubClient,
    owner: &str,
    repo: &str,
) -> Result<RepoDetail> {
    let repo_info = client.get_repo(owner, repo).await?;

    let (pulls, issues, releases) = tokio::join!(
        client.get_pulls(owner, repo),
        client.get_issues(owner, repo),
        client.get_releases(owner, repo),
    );

    Ok(RepoDetail {
        repo: repo_info,
        pr_stats: devpulse_core::pr_stats(&pulls.unwrap_or_default()),
        issue_stats: devpulse_core::issue_stats(&issues.unwrap_or_default()),
        releases: releases.unwrap_or_default(),
    })
}

/// Fetch both users concurrently and build the radar comparison.
pub async fn fetch_comparison(client: &GithubClient, a: &str, b: &str) -> Result<Comparison> {
    let (entity_a, entity_b) = tokio::try_join!(user_entity(client, a), user_entity(client, b))?;

    Ok(Comparison {
        axes: devpulse_core::radar::USER_AXES.to_vec(),
        series: devpulse_core::normalize_axes(&[entity_a, entity_b]),
    })
}

/// Number of trending entries shown on the global dashboard.
const GLOBAL_TRENDING_LIMIT: usize = 5;

/// Fetch and compute the global dashboard. The two search fetches are
/// independent; either degrading to empty just thins out the insights.
pub async fn fetch_global_dashboard(client: &GithubClient) -> Result<GlobalDashboard> {
    let (trending_repos, top_repos) = tokio::join!(
        client.get_trending(GLOBAL_TRENDING_LIMIT as u32),
        client.get_top_repos(),
    );

    let trending_repos = trending_repos.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to fetch trending repos");
        Vec::new()
    });
    let top_repos = top_repos.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to fetch top repo sample");
        Vec::new()
    });

    let trending = devpulse_core::trending_repos(&trending_repos, GLOBAL_TRENDING_LIMIT);
    let languages = language_breakdown(&top_repos);
    let insights = devpulse_core::generate_insights(&trending, &languages);

    info!(
        trending = trending.len(),
        languages = languages.len(),
        "Assembled global dashboard"
    );
    Ok(GlobalDashboard {
        trending,
        languages,
        insights,
    })
}

async fn user_entity(client: &GithubClient, login: &str) -> Result<RadarEntity> {
    let (profile, repos) = tokio::try_join!(client.get_user(login), client.get_repos(login))?;
    let events = client.get_events(login).await.unwrap_or_default();
    Ok(user_axes(&profile, &repos, &events))
}
