use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use team_balancer::api::state::AppState;
use team_balancer::api::{build_router, cors_layer};
use team_balancer::config::AppConfig;
use team_balancer::partition::RandomTieBreaker;
use team_balancer::report;
use team_balancer::roster::RosterStore;

#[derive(Parser)]
#[command(name = "team-balancer")]
#[command(about = "Split selected participants into balanced teams")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./team-balancer.toml")]
    config: PathBuf,

    /// Roster file (overrides the config and the built-in roster)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List roster participants
    List {
        /// Only show names containing this keyword (case-insensitive)
        #[arg(long)]
        filter: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Make balanced teams from selected participants
    MakeTeams {
        /// Participant names to select
        names: Vec<String>,

        /// Also select every participant whose name contains this keyword
        #[arg(long)]
        select_matching: Option<String>,

        /// Tie-break seed for reproducible teams
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;

    init_tracing(
        cli.log_level.as_deref().unwrap_or(&config.log_level),
        cli.json_logs,
    );

    tracing::debug!("Starting team-balancer v{}", env!("CARGO_PKG_VERSION"));

    let roster_path = cli.roster.clone().or_else(|| config.roster_path.clone());
    let roster = RosterStore::load(roster_path.as_deref()).context("loading roster")?;

    match cli.command {
        Commands::List { filter, json } => {
            let keyword = filter.unwrap_or_default();
            let participants: Vec<_> = roster.filter(&keyword).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&participants)?);
            } else {
                print!("{}", report::render_participants(participants));
            }
        }
        Commands::MakeTeams {
            names,
            select_matching,
            seed,
            json,
        } => {
            let selected = roster.select(names, select_matching.as_deref());
            if selected.len() < 2 {
                eprintln!("Select at least 2 participants.");
                return Ok(());
            }

            let mut tie_breaker = RandomTieBreaker::new(seed.or(config.seed));
            let result = roster.make_teams(&selected, &mut tie_breaker);
            tracing::info!(
                "Made {} teams from {} selected names",
                result.team_count(),
                selected.len()
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", report::render_result(&result));
            }
        }
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let cors = cors_layer(&config.server.cors_origin)?;

            let state = AppState::new(Arc::new(roster), config.seed);
            let app = build_router(state).layer(cors);

            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
