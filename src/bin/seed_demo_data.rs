// ABOUTME: Demo data seeder binary for the Matchday platform
// ABOUTME: Seeds the JS Cugnaux U14 roster and match history for the demo account
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchday

//! Demo data seeder for Matchday.
//!
//! Populates the database with the fixed demo data set: the JS Cugnaux U14
//! roster and 7 played matches with simulated statistics. Destructive for the
//! target club — existing players and matches are replaced.
//!
//! Usage:
//! ```bash
//! # Seed using DATABASE_URL from the environment
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific account
//! cargo run --bin seed-demo-data -- --email coach@example.com
//!
//! # Reproducible statistics
//! cargo run --bin seed-demo-data -- --seed 42
//!
//! # Verbose output
//! cargo run --bin seed-demo-data -- -v
//! ```

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::SqlitePool;
use tracing::{error, info};

use matchday_seeder::{fixtures, seed_demo_data, SeedConfig, SeedError};

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Matchday Demo Data Seeder",
    long_about = "Populate the database with the JS Cugnaux U14 demo roster and match history"
)]
struct SeedArgs {
    /// Email of the account to seed the demo club for
    #[arg(long, default_value = fixtures::DEFAULT_TARGET_EMAIL)]
    email: String,

    /// Database URL override (default: DATABASE_URL environment variable)
    #[arg(long)]
    database_url: Option<String>,

    /// Random seed for reproducible statistics (optional)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Matchday Demo Data Seeder ===");
    info!("   Target account: {}", args.email);

    let config = SeedConfig::resolve(args.database_url)?;
    info!("Connecting to database: {}", config.database_url);
    let pool = SqlitePool::connect(&config.database_url).await?;

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(12345)
    });
    let mut rng = StdRng::seed_from_u64(seed);
    info!("   Random seed: {}", seed);

    let report = match seed_demo_data(&pool, &args.email, &mut rng).await {
        Ok(report) => report,
        Err(SeedError::UserNotFound { email }) => {
            error!("User {email} not found — nothing was seeded");
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    info!("");
    info!("=== Seeding Complete ===");
    if report.club_created {
        info!("Club {} created and attached", fixtures::CLUB_NAME);
    }
    info!(
        "{} players and {} matches seeded for club {}",
        report.players_inserted, report.matches_inserted, report.club_id
    );
    print_summary(&pool, &report.club_id).await?;
    info!("Log in with {} to see the demo data.", args.email);

    Ok(())
}

/// Print post-run row counts for the seeded club.
async fn print_summary(pool: &SqlitePool, club_id: &str) -> Result<()> {
    print_count(
        pool,
        "Players",
        "SELECT COUNT(*) FROM players WHERE club_id = ?",
        club_id,
    )
    .await?;
    print_count(
        pool,
        "Matches",
        "SELECT COUNT(*) FROM matches WHERE club_id = ?",
        club_id,
    )
    .await?;
    Ok(())
}

/// Helper to print a single count query result.
async fn print_count(pool: &SqlitePool, label: &str, query: &str, club_id: &str) -> Result<()> {
    let row: (i64,) = sqlx::query_as(query).bind(club_id).fetch_one(pool).await?;
    info!("{}: {}", label, row.0);
    Ok(())
}
