//! DevPulse Metrics Core
//!
//! Pure derived-metrics engines over raw GitHub data. Every function in
//! this crate is total: it accepts empty or partially-populated input and
//! degrades to zero-valued output instead of failing. All I/O lives in
//! `devpulse-collector`.

pub mod achievements;
pub mod activity;
pub mod collaborators;
pub mod global;
pub mod growth;
pub mod radar;
pub mod repo_stats;
pub mod score;
pub mod streak;
pub mod types;

pub use achievements::{compute_achievements, total_progress, unlocked_count, Achievement};
pub use activity::{
    activity_by_date, activity_by_hour, activity_from_str_keys, language_breakdown,
    skill_assessment, ActivityMap, LanguageStat, SkillAssessment,
};
pub use collaborators::{merge_collaborators, Collaborator};
pub use global::{generate_insights, trending_repos, Insight, TrendingRepo};
pub use growth::{synthesize_growth, GrowthPoint};
pub use radar::{normalize_axes, user_axes, RadarEntity, RadarSeries};
pub use repo_stats::{issue_stats, pr_stats, IssueStats, PrStats};
pub use score::{compute_score, ScoreResult};
pub use streak::{compute_streak, StreakResult};
pub use types::SummaryMetrics;
