// ABOUTME: Shared test utilities for the seeder integration tests
// ABOUTME: In-memory database setup with the consumed schema and user helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchday
#![allow(dead_code)]

//! Shared test setup for `matchday_seeder` integration tests.

use std::sync::Once;

use anyhow::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process).
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory database with the schema the seeder consumes.
///
/// The real tables are owned by the Matchday backend; this mirrors the
/// columns the seeder touches.
pub async fn create_test_pool() -> Result<SqlitePool> {
    init_test_logging();
    let pool = SqlitePool::connect("sqlite::memory:").await?;

    sqlx::query(
        "CREATE TABLE users (
            id TEXT PRIMARY KEY,
            club_id TEXT,
            email TEXT NOT NULL UNIQUE
        )",
    )
    .execute(&pool)
    .await?;

    sqlx::query(
        "CREATE TABLE clubs (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            quota_matches INTEGER NOT NULL
        )",
    )
    .execute(&pool)
    .await?;

    sqlx::query(
        "CREATE TABLE players (
            id TEXT PRIMARY KEY,
            club_id TEXT NOT NULL,
            name TEXT NOT NULL,
            number INTEGER NOT NULL,
            position TEXT NOT NULL,
            category TEXT NOT NULL,
            status TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await?;

    sqlx::query(
        "CREATE TABLE matches (
            id TEXT PRIMARY KEY,
            club_id TEXT NOT NULL,
            opponent TEXT NOT NULL,
            date TEXT NOT NULL,
            competition TEXT NOT NULL,
            location TEXT NOT NULL,
            category TEXT NOT NULL,
            score_home INTEGER NOT NULL,
            score_away INTEGER NOT NULL,
            status TEXT NOT NULL,
            stats TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}

/// Insert a user row, optionally pre-attached to a club. Returns the user id.
pub async fn insert_user(pool: &SqlitePool, email: &str, club_id: Option<&str>) -> Result<String> {
    let id = Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO users (id, club_id, email) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(club_id)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(id)
}

/// Insert a club row. Returns the club id.
pub async fn insert_club(pool: &SqlitePool, name: &str) -> Result<String> {
    let id = Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO clubs (id, name, quota_matches) VALUES (?, ?, 50)")
        .bind(&id)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(id)
}

/// Count rows in `table` belonging to `club_id`.
pub async fn count_for_club(pool: &SqlitePool, table: &str, club_id: &str) -> Result<i64> {
    let query = format!("SELECT COUNT(*) FROM {table} WHERE club_id = ?");
    let row: (i64,) = sqlx::query_as(&query).bind(club_id).fetch_one(pool).await?;
    Ok(row.0)
}
