// ABOUTME: Library entry point for the Matchday demo data seeder
// ABOUTME: Wires the config, fixtures, stats, and seeder modules together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchday

#![deny(unsafe_code)]

//! # Matchday demo data seeder
//!
//! Seeds a Matchday database with fixed demo data: the JS Cugnaux U14 roster
//! (19 players) and 7 historical matches with synthesized statistics. This is
//! a one-shot operator tool, not a running service — it resolves the demo
//! account by email, creates and attaches a club if needed, then wipes and
//! reinserts the roster and match list for that club in one transaction.
//!
//! The destructive delete-then-insert pattern is deliberate: after a run,
//! exactly the fixed data set exists for the club, regardless of what was
//! there before.
//!
//! Run it with the `seed-demo-data` binary:
//!
//! ```bash
//! # Seed using DATABASE_URL from the environment
//! cargo run --bin seed-demo-data
//!
//! # Target a different account, with reproducible stats
//! cargo run --bin seed-demo-data -- --email coach@example.com --seed 42
//! ```

pub mod config;
pub mod errors;
pub mod fixtures;
pub mod seeder;
pub mod stats;

pub use config::SeedConfig;
pub use errors::{SeedError, SeedResult};
pub use seeder::{seed_demo_data, SeedReport};
pub use stats::MatchStats;
