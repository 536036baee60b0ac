//! API request handlers

use crate::SharedState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use devpulse_collector::{dashboard, CollectorError};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn err(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                success: false,
                data: None,
                error: Some(message.into()),
            }),
        )
    }
}

fn error_response(context: &str, e: CollectorError) -> axum::response::Response {
    let status = match &e {
        CollectorError::NotFound(_) => StatusCode::NOT_FOUND,
        CollectorError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("{context}: {e}");
    }
    ApiResponse::<()>::err(status, e.to_string()).into_response()
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Full dashboard for a user
pub async fn get_user_dashboard(
    State(state): State<SharedState>,
    Path(login): Path<String>,
) -> impl IntoResponse {
    match dashboard::fetch_dashboard(&state.client, &login).await {
        Ok(view) => ApiResponse::ok(view).into_response(),
        Err(e) => error_response(&format!("dashboard for {login}"), e),
    }
}

/// Developer score for a user
pub async fn get_user_score(
    State(state): State<SharedState>,
    Path(login): Path<String>,
) -> impl IntoResponse {
    match dashboard::fetch_dashboard(&state.client, &login).await {
        Ok(view) => ApiResponse::ok(view.score).into_response(),
        Err(e) => error_response(&format!("score for {login}"), e),
    }
}

/// Achievement badges for a user
pub async fn get_user_achievements(
    State(state): State<SharedState>,
    Path(login): Path<String>,
) -> impl IntoResponse {
    match dashboard::fetch_dashboard(&state.client, &login).await {
        Ok(view) => ApiResponse::ok(view.achievements).into_response(),
        Err(e) => error_response(&format!("achievements for {login}"), e),
    }
}

#[derive(Serialize)]
pub struct StreakView {
    pub streak: devpulse_core::StreakResult,
    pub activity: devpulse_core::ActivityMap,
}

/// Commit streak for a user, computed from sampled activity
pub async fn get_user_streak(
    State(state): State<SharedState>,
    Path(login): Path<String>,
) -> impl IntoResponse {
    let repos = match state.client.get_repos(&login).await {
        Ok(repos) => repos,
        Err(e) => return error_response(&format!("repos for {login}"), e),
    };

    let activity = state.client.commit_activity(&login, &repos).await;
    let streak = devpulse_core::compute_streak(&activity, Utc::now().date_naive());
    ApiResponse::ok(StreakView { streak, activity }).into_response()
}

/// Compute streak figures from an activity map supplied by the caller,
/// for clients that already hold contribution data. Keys are `YYYY-MM-DD`
/// strings; unparseable keys are dropped.
pub async fn compute_streak(
    Json(raw): Json<std::collections::BTreeMap<String, u64>>,
) -> impl IntoResponse {
    let activity = devpulse_core::activity_from_str_keys(&raw);
    let streak = devpulse_core::compute_streak(&activity, Utc::now().date_naive());
    ApiResponse::ok(StreakView { streak, activity }).into_response()
}

#[derive(Serialize)]
pub struct LanguageView {
    pub languages: Vec<devpulse_core::LanguageStat>,
    pub skills: devpulse_core::SkillAssessment,
}

/// Language breakdown for a user
pub async fn get_user_languages(
    State(state): State<SharedState>,
    Path(login): Path<String>,
) -> impl IntoResponse {
    match state.client.get_repos(&login).await {
        Ok(repos) => {
            let languages = devpulse_core::language_breakdown(&repos);
            let skills = devpulse_core::skill_assessment(&languages);
            ApiResponse::ok(LanguageView { languages, skills }).into_response()
        }
        Err(e) => error_response(&format!("languages for {login}"), e),
    }
}

#[derive(Serialize)]
pub struct ActivityView {
    pub daily: devpulse_core::ActivityMap,
    pub hourly: [u64; 24],
}

#[derive(Deserialize)]
pub struct ActivityQuery {
    /// Hour-bucket timezone as minutes east of UTC, default UTC.
    #[serde(default)]
    utc_offset_minutes: i32,
}

/// Validate a minutes-east-of-UTC offset and convert it to seconds.
///
/// The range check must run before the seconds conversion: multiplying
/// an unchecked query value by 60 can overflow `i32` long before
/// `FixedOffset::east_opt` gets a chance to reject it.
fn parse_utc_offset(minutes: i32) -> Option<chrono::FixedOffset> {
    if !(-1440..=1440).contains(&minutes) {
        return None;
    }
    chrono::FixedOffset::east_opt(minutes * 60)
}

/// Daily and hourly activity for a user
pub async fn get_user_activity(
    State(state): State<SharedState>,
    Path(login): Path<String>,
    Query(query): Query<ActivityQuery>,
) -> impl IntoResponse {
    let repos = match state.client.get_repos(&login).await {
        Ok(repos) => repos,
        Err(e) => return error_response(&format!("repos for {login}"), e),
    };

    let Some(offset) = parse_utc_offset(query.utc_offset_minutes) else {
        return ApiResponse::<()>::err(
            StatusCode::BAD_REQUEST,
            "utc_offset_minutes out of range",
        )
        .into_response();
    };

    let commits = state
        .client
        .sample_commits(&login, &repos, devpulse_collector::github::HOURLY_COMMIT_PAGE)
        .await;

    ApiResponse::ok(ActivityView {
        daily: devpulse_core::activity_by_date(&commits),
        hourly: devpulse_core::activity_by_hour(&commits, offset),
    })
    .into_response()
}

/// Synthesized growth trend for a user
pub async fn get_user_growth(
    State(state): State<SharedState>,
    Path(login): Path<String>,
) -> impl IntoResponse {
    let (profile, repos) = match tokio::try_join!(
        state.client.get_user(&login),
        state.client.get_repos(&login)
    ) {
        Ok(pair) => pair,
        Err(e) => return error_response(&format!("growth for {login}"), e),
    };

    let total_stars: u64 = repos.iter().map(|r| r.stargazers_count).sum();
    let growth = devpulse_core::synthesize_growth(
        profile.followers,
        total_stars,
        profile.public_repos,
        Utc::now(),
    );
    ApiResponse::ok(growth).into_response()
}

#[derive(Deserialize)]
pub struct CompareQuery {
    a: String,
    b: String,
}

/// Radar comparison of two users
pub async fn compare_users(
    State(state): State<SharedState>,
    Query(query): Query<CompareQuery>,
) -> impl IntoResponse {
    match dashboard::fetch_comparison(&state.client, &query.a, &query.b).await {
        Ok(comparison) => ApiResponse::ok(comparison).into_response(),
        Err(e) => error_response(&format!("compare {} vs {}", query.a, query.b), e),
    }
}

/// Repository detail with PR/issue stats and releases
pub async fn get_repo_detail(
    State(state): State<SharedState>,
    Path((owner, repo)): Path<(String, String)>,
) -> impl IntoResponse {
    match dashboard::fetch_repo_detail(&state.client, &owner, &repo).await {
        Ok(detail) => ApiResponse::ok(detail).into_response(),
        Err(e) => error_response(&format!("repo {owner}/{repo}"), e),
    }
}

/// Global dashboard: trending repos, language popularity, insights
pub async fn get_global_dashboard(State(state): State<SharedState>) -> impl IntoResponse {
    match dashboard::fetch_global_dashboard(&state.client).await {
        Ok(view) => ApiResponse::ok(view).into_response(),
        Err(e) => error_response("global dashboard", e),
    }
}

#[derive(Deserialize)]
pub struct TrendingQuery {
    #[serde(default = "default_trending_limit")]
    limit: u32,
}

fn default_trending_limit() -> u32 {
    10
}

/// Trending repositories, ranked by stars over the recent push window
pub async fn get_trending(
    State(state): State<SharedState>,
    Query(query): Query<TrendingQuery>,
) -> impl IntoResponse {
    let limit = query.limit.min(100);
    match state.client.get_trending(limit).await {
        Ok(repos) => {
            ApiResponse::ok(devpulse_core::trending_repos(&repos, limit as usize)).into_response()
        }
        Err(e) => error_response("trending repos", e),
    }
}

/// Global language popularity over the top-starred repo sample
pub async fn get_global_languages(State(state): State<SharedState>) -> impl IntoResponse {
    match state.client.get_top_repos().await {
        Ok(repos) => {
            ApiResponse::ok(devpulse_core::language_breakdown(&repos)).into_response()
        }
        Err(e) => error_response("global languages", e),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_utc_offset;

    #[test]
    fn offset_accepts_whole_and_half_hour_zones() {
        assert_eq!(
            parse_utc_offset(0),
            chrono::FixedOffset::east_opt(0)
        );
        assert_eq!(
            parse_utc_offset(330),
            chrono::FixedOffset::east_opt(330 * 60)
        );
        assert_eq!(
            parse_utc_offset(-480),
            chrono::FixedOffset::east_opt(-480 * 60)
        );
    }

    #[test]
    fn offset_rejects_out_of_range_minutes() {
        assert!(parse_utc_offset(1441).is_none());
        assert!(parse_utc_offset(-1441).is_none());
    }

    #[test]
    fn offset_rejects_values_that_would_overflow_in_seconds() {
        // Large enough that minutes * 60 no longer fits in i32; the range
        // check has to reject it before any arithmetic runs.
        assert!(parse_utc_offset(2_000_000_000).is_none());
        assert!(parse_utc_offset(i32::MAX).is_none());
        assert!(parse_utc_offset(i32::MIN).is_none());
    }
}
