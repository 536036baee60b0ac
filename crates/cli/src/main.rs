//! DevPulse CLI
//!
//! Terminal dashboard and web server runner.

use anyhow::Result;
use clap::{Parser, Subcommand};
use devpulse_api::{create_router, AppState};
use devpulse_collector::{
    dashboard::{fetch_comparison, fetch_dashboard, fetch_global_dashboard},
    github::GithubClient,
    CollectorConfig,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "dp")]
#[command(about = "DevPulse - GitHub Developer Analytics")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind to
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,

        /// Static files directory
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
    },

    /// Show the full dashboard for a user
    User {
        /// GitHub login
        login: String,
    },

    /// Show the developer score for a user
    Score {
        /// GitHub login
        login: String,
    },

    /// Show achievement badges for a user
    Achievements {
        /// GitHub login
        login: String,
    },

    /// Show commit streaks for a user
    Streak {
        /// GitHub login
        login: String,
    },

    /// Show the language breakdown for a user
    Languages {
        /// GitHub login
        login: String,
    },

    /// Compare two users on the radar axes
    Compare {
        /// First GitHub login
        a: String,
        /// Second GitHub login
        b: String,
    },

    /// Show trending repositories
    Trending {
        /// Maximum entries to show
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },

    /// Show the global dashboard (trending, languages, insights)
    Global,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let config = CollectorConfig::from_env();
    if config.github_token.is_none() {
        eprintln!("Warning: GITHUB_TOKEN not set. API rate limits will be restricted.");
    }
    let client = GithubClient::new(config)?;

    match cli.command {
        Commands::Serve { bind, static_dir } => {
            serve(client, bind, static_dir).await?;
        }
        Commands::User { login } => {
            user(&client, &login).await?;
        }
        Commands::Score { login } => {
            score(&client, &login).await?;
        }
        Commands::Achievements { login } => {
            achievements(&client, &login).await?;
        }
        Commands::Streak { login } => {
            streak(&client, &login).await?;
        }
        Commands::Languages { login } => {
            languages(&client, &login).await?;
        }
        Commands::Compare { a, b } => {
            compare(&client, &a, &b).await?;
        }
        Commands::Trending { limit } => {
            trending(&client, limit).await?;
        }
        Commands::Global => {
            global(&client).await?;
        }
    }

    Ok(())
}

async fn serve(client: GithubClient, bind: SocketAddr, static_dir: Option<PathBuf>) -> Result<()> {
    let state = Arc::new(AppState::new(client));
    let router = create_router(state, static_dir.clone());

    info!("Starting DevPulse server on {}", bind);
    if let Some(ref dir) = static_dir {
        info!("Serving static files from {}", dir.display());
    }
    info!("API available at http://{}/api/v1", bind);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

async fn user(client: &GithubClient, login: &str) -> Result<()> {
    let view = fetch_dashboard(client, login).await?;

    let name = view.profile.name.as_deref().unwrap_or(&view.profile.login);
    println!("{} (@{})", name, view.profile.login);
    if let Some(ref bio) = view.profile.bio {
        println!("{bio}");
    }
    println!();

    println!(
        "Score: {}/100 [{}]   Streak: {} current / {} longest / {} active days",
        view.score.score,
        view.score.level,
        view.streak.current_streak,
        view.streak.longest_streak,
        view.streak.total_active_days
    );
    println!(
        "Repos: {}  Stars: {}  Forks: {}  Followers: {}  Languages: {}",
        view.summary.repos,
        view.summary.stars,
        view.summary.forks,
        view.summary.followers,
        view.summary.languages
    );

    let unlocked = devpulse_core::unlocked_count(&view.achievements);
    println!(
        "Achievements: {}/{} unlocked ({}%)",
        unlocked,
        view.achievements.len(),
        devpulse_core::total_progress(&view.achievements)
    );

    if !view.languages.is_empty() {
        println!("\nTop languages:");
        for stat in view.languages.iter().take(5) {
            println!(
                "  {:<15} {:>3} repos  ⭐{}",
                stat.language, stat.count, stat.total_stars
            );
        }
    }

    if !view.collaborators.is_empty() {
        println!("\nTop collaborators:");
        for collaborator in view.collaborators.iter().take(5) {
            println!(
                "  {:<20} {} contributions",
                collaborator.login, collaborator.contributions
            );
        }
    }

    Ok(())
}

async fn score(client: &GithubClient, login: &str) -> Result<()> {
    let view = fetch_dashboard(client, login).await?;

    println!("Developer Score: {}/100 [{}]", view.score.score, view.score.level);
    println!();
    for (dimension, subscore) in &view.score.breakdown {
        println!("  {:<15} {:>5.1}", dimension, subscore);
    }

    Ok(())
}

async fn achievements(client: &GithubClient, login: &str) -> Result<()> {
    let view = fetch_dashboard(client, login).await?;

    println!("{:<4} {:<22} {:<10} PROGRESS", "", "ACHIEVEMENT", "STATUS");
    println!("{}", "-".repeat(60));
    for a in &view.achievements {
        let status = if a.unlocked { "unlocked" } else { "locked" };
        println!(
            "{:<4} {:<22} {:<10} {}/{}",
            a.icon, a.name, status, a.progress, a.max_progress
        );
    }

    Ok(())
}

async fn streak(client: &GithubClient, login: &str) -> Result<()> {
    let repos = client.get_repos(login).await?;
    let activity = client.commit_activity(login, &repos).await;
    let result = devpulse_core::compute_streak(&activity, chrono::Utc::now().date_naive());

    println!("Current streak:    {} days", result.current_streak);
    println!("Longest streak:    {} days", result.longest_streak);
    println!("Total active days: {}", result.total_active_days);
    println!("\n(Computed from a sample of recent commits, not full history.)");

    Ok(())
}

async fn languages(client: &GithubClient, login: &str) -> Result<()> {
    let repos = client.get_repos(login).await?;
    let stats = devpulse_core::language_breakdown(&repos);
    let skills = devpulse_core::skill_assessment(&stats);

    println!("{:<15} {:<8} {:<8} {:<8}", "LANGUAGE", "REPOS", "STARS", "FORKS");
    println!("{}", "-".repeat(42));
    for stat in &stats {
        println!(
            "{:<15} {:<8} {:<8} {:<8}",
            stat.language, stat.count, stat.total_stars, stat.total_forks
        );
    }

    if !skills.primary.is_empty() {
        println!("\nPrimary:   {}", skills.primary.join(", "));
    }
    if !skills.secondary.is_empty() {
        println!("Secondary: {}", skills.secondary.join(", "));
    }
    if !skills.emerging.is_empty() {
        println!("Emerging:  {}", skills.emerging.join(", "));
    }

    Ok(())
}

async fn trending(client: &GithubClient, limit: u32) -> Result<()> {
    let repos = client.get_trending(limit).await?;
    let trending = devpulse_core::trending_repos(&repos, limit as usize);

    println!("{:<35} {:<10} {:<8} LANGUAGE", "REPOSITORY", "STARS", "FORKS");
    println!("{}", "-".repeat(70));
    for repo in &trending {
        println!(
            "{:<35} {:<10} {:<8} {}",
            repo.name,
            repo.stars,
            repo.forks,
            repo.language.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

async fn global(client: &GithubClient) -> Result<()> {
    let view = fetch_global_dashboard(client).await?;

    if !view.insights.is_empty() {
        for insight in &view.insights {
            println!("{}: {}", insight.title, insight.value);
            println!("  {}", insight.description);
        }
        println!();
    }

    println!("Trending:");
    for repo in &view.trending {
        println!("  {:<35} ⭐{}", repo.name, repo.stars);
    }

    println!("\nTop languages:");
    for stat in view.languages.iter().take(10) {
        println!("  {:<15} {:>3} repos  ⭐{}", stat.language, stat.count, stat.total_stars);
    }

    Ok(())
}

async fn compare(client: &GithubClient, a: &str, b: &str) -> Result<()> {
    let comparison = fetch_comparison(client, a, b).await?;

    let labels: Vec<&str> = comparison.series.iter().map(|s| s.label.as_str()).collect();
    println!("{:<18} {:<12} {:<12}", "AXIS", labels[0], labels[1]);
    println!("{}", "-".repeat(44));
    for (i, axis) in comparison.axes.iter().enumerate() {
        println!(
            "{:<18} {:<12} {:<12}",
            axis, comparison.series[0].values[i], comparison.series[1].values[i]
        );
    }
    println!("\n(Each axis is scaled to its leader; values are relative, not absolute.)");

    Ok(())
}
