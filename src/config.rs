// ABOUTME: Runtime configuration for the seeder
// ABOUTME: Resolves the database URL from a CLI override or DATABASE_URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchday

use std::env;

use crate::errors::{SeedError, SeedResult};

/// Runtime configuration for a seeding run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Database connection string (sqlx URL).
    pub database_url: String,
}

impl SeedConfig {
    /// Resolve configuration from an optional CLI override, falling back to
    /// the `DATABASE_URL` environment variable.
    pub fn resolve(database_url: Option<String>) -> SeedResult<Self> {
        let database_url = database_url
            .or_else(|| env::var("DATABASE_URL").ok())
            .ok_or_else(|| {
                SeedError::Config(
                    "DATABASE_URL is not set and no --database-url override was given".into(),
                )
            })?;

        Ok(Self { database_url })
    }
}
