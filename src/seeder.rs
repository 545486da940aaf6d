// ABOUTME: The seed procedure: resolve user, ensure club, replace players and matches
// ABOUTME: All writes run inside a single transaction committed at the end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchday

use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{SeedError, SeedResult};
use crate::fixtures;
use crate::stats::MatchStats;

/// Summary of one seeding run.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub user_id: String,
    pub club_id: String,
    /// Whether the club was created (and attached to the user) this run.
    pub club_created: bool,
    pub players_inserted: usize,
    pub matches_inserted: usize,
}

/// Run the full seed procedure against `pool` for the user owning `email`.
///
/// Resolves the user, creates and attaches a club if they have none, then
/// wipes and reinserts the fixed roster and match list for that club. Every
/// write happens inside one transaction committed at the end; if the user is
/// missing, [`SeedError::UserNotFound`] comes back before any mutation.
pub async fn seed_demo_data(
    pool: &SqlitePool,
    email: &str,
    rng: &mut impl Rng,
) -> SeedResult<SeedReport> {
    let mut tx = pool.begin().await?;

    let (user_id, club_id) = resolve_user(&mut tx, email).await?;
    debug!("Resolved user {user_id} (club: {club_id:?})");

    let (club_id, club_created) = ensure_club(&mut tx, &user_id, club_id).await?;
    let players_inserted = replace_players(&mut tx, &club_id).await?;
    let matches_inserted = replace_matches(&mut tx, &club_id, rng).await?;

    tx.commit().await?;

    Ok(SeedReport {
        user_id,
        club_id,
        club_created,
        players_inserted,
        matches_inserted,
    })
}

/// Look up the target user by email, returning its id and current club link.
async fn resolve_user(
    tx: &mut Transaction<'_, Sqlite>,
    email: &str,
) -> SeedResult<(String, Option<String>)> {
    let row = sqlx::query("SELECT id, club_id FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(&mut **tx)
        .await?;

    let Some(row) = row else {
        return Err(SeedError::UserNotFound {
            email: email.to_owned(),
        });
    };

    Ok((row.get("id"), row.get("club_id")))
}

/// Create the demo club and attach it to the user, unless they already have
/// one. Returns the club id to seed under.
async fn ensure_club(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: &str,
    club_id: Option<String>,
) -> SeedResult<(String, bool)> {
    if let Some(club_id) = club_id {
        debug!("User already attached to club {club_id}");
        return Ok((club_id, false));
    }

    let club_id = Uuid::new_v4().to_string();
    sqlx::query(
        "INSERT INTO clubs (id, name, quota_matches) VALUES (?, ?, ?) ON CONFLICT DO NOTHING",
    )
    .bind(&club_id)
    .bind(fixtures::CLUB_NAME)
    .bind(fixtures::CLUB_QUOTA_MATCHES)
    .execute(&mut **tx)
    .await?;

    sqlx::query("UPDATE users SET club_id = ? WHERE id = ?")
        .bind(&club_id)
        .bind(user_id)
        .execute(&mut **tx)
        .await?;

    info!("  Created club {} ({club_id})", fixtures::CLUB_NAME);
    Ok((club_id, true))
}

/// Delete the club's players and reinsert the fixed roster.
async fn replace_players(tx: &mut Transaction<'_, Sqlite>, club_id: &str) -> SeedResult<usize> {
    let deleted = sqlx::query("DELETE FROM players WHERE club_id = ?")
        .bind(club_id)
        .execute(&mut **tx)
        .await?
        .rows_affected();
    if deleted > 0 {
        info!("  Removed {deleted} existing players");
    }

    let roster = fixtures::roster();
    for player in &roster {
        sqlx::query(
            "INSERT INTO players (id, club_id, name, number, position, category, status, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(club_id)
        .bind(player.name)
        .bind(player.number)
        .bind(player.position)
        .bind(fixtures::CATEGORY)
        .bind(fixtures::PLAYER_STATUS)
        .bind(Utc::now().to_rfc3339())
        .execute(&mut **tx)
        .await?;

        debug!("  Inserted player #{} {}", player.number, player.name);
    }

    info!("  Created {} players", roster.len());
    Ok(roster.len())
}

/// Delete the club's matches and reinsert the fixed list with synthesized
/// statistics. Match dates are execution time plus each entry's day offset.
async fn replace_matches(
    tx: &mut Transaction<'_, Sqlite>,
    club_id: &str,
    rng: &mut impl Rng,
) -> SeedResult<usize> {
    let deleted = sqlx::query("DELETE FROM matches WHERE club_id = ?")
        .bind(club_id)
        .execute(&mut **tx)
        .await?
        .rows_affected();
    if deleted > 0 {
        info!("  Removed {deleted} existing matches");
    }

    let schedule = fixtures::match_schedule();
    for m in &schedule {
        let date = Utc::now() + Duration::days(m.date_offset_days);
        let stats = MatchStats::simulate(rng, m.score_home);
        let payload = serde_json::to_string(&stats)?;

        sqlx::query(
            "INSERT INTO matches (id, club_id, opponent, date, competition, location, category, \
             score_home, score_away, status, stats, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(club_id)
        .bind(m.opponent)
        .bind(date.to_rfc3339())
        .bind(m.competition)
        .bind(m.location)
        .bind(fixtures::CATEGORY)
        .bind(i64::from(m.score_home))
        .bind(i64::from(m.score_away))
        .bind(fixtures::MATCH_STATUS)
        .bind(payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&mut **tx)
        .await?;

        debug!("  Inserted match vs {} ({})", m.opponent, m.competition);
    }

    info!("  Created {} matches with stats", schedule.len());
    Ok(schedule.len())
}
