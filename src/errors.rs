// ABOUTME: Error types for the Matchday demo data seeder
// ABOUTME: Library-level SeedError enum with sqlx conversion and result alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchday

use thiserror::Error;

/// Errors produced while seeding demo data.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The target user does not exist. Raised before any write, so the
    /// database is untouched when this comes back.
    #[error("user not found: {email}")]
    UserNotFound { email: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to encode stats payload: {0}")]
    Stats(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type SeedResult<T> = Result<T, SeedError>;
