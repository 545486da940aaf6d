// ABOUTME: Fixed demo data for the seeder
// ABOUTME: U14 roster and match list for the JS Cugnaux demo club
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Matchday

/// Email of the demo account the seeded club is attached to.
pub const DEFAULT_TARGET_EMAIL: &str = "ryad.bouharaoua@gmail.com";

/// Name given to the club when the target user has none yet.
pub const CLUB_NAME: &str = "JS Cugnaux";

/// Match quota written on club creation (not otherwise exercised here).
pub const CLUB_QUOTA_MATCHES: i64 = 50;

/// Age-group label applied to every seeded player and match.
pub const CATEGORY: &str = "U14";

/// Status written on every seeded player.
pub const PLAYER_STATUS: &str = "actif";

/// Status written on every seeded match (all are historical results).
pub const MATCH_STATUS: &str = "completed";

/// One roster entry.
///
/// `foot` and `birth_year` are part of the demo data set but the consumed
/// schema has no columns for them, so they are not inserted.
pub struct PlayerFixture {
    pub name: &'static str,
    pub number: i64,
    pub position: &'static str,
    pub foot: &'static str,
    pub birth_year: i32,
}

/// One historical match. `date_offset_days` is relative to execution time
/// and negative for every entry (all matches are already played).
pub struct MatchFixture {
    pub opponent: &'static str,
    pub date_offset_days: i64,
    pub score_home: u32,
    pub score_away: u32,
    pub competition: &'static str,
    pub location: &'static str,
}

/// The fixed 19-player U14 roster.
pub fn roster() -> Vec<PlayerFixture> {
    vec![
        PlayerFixture { name: "Carvalho Tiago", number: 1, position: "Gardien", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Despres Rafael", number: 2, position: "Défenseur", foot: "Gauche", birth_year: 2012 },
        PlayerFixture { name: "Garrouchdi Wissam", number: 3, position: "Défenseur", foot: "Gauche", birth_year: 2012 },
        PlayerFixture { name: "Dahbani Mohamed", number: 4, position: "Défenseur", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Ghali Hamza", number: 5, position: "Défenseur", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Crivemale Tao", number: 6, position: "Défenseur", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Semamra Matys", number: 7, position: "Défenseur", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Ouakki Amin", number: 8, position: "Milieu", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Boutdarine Imran", number: 9, position: "Milieu", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Sidali Bilal", number: 10, position: "Milieu", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Manni Amrany Yassin", number: 11, position: "Milieu", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "El Korri Nassim", number: 12, position: "Milieu", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Bargou Adem", number: 13, position: "Milieu", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Tailhan Noa", number: 14, position: "Milieu", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Touré Cheick", number: 15, position: "Attaquant", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Lievi Joyce", number: 16, position: "Attaquant", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Bouzelif Kelym", number: 17, position: "Attaquant", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Golet Nabil", number: 18, position: "Attaquant", foot: "Droit", birth_year: 2012 },
        PlayerFixture { name: "Boughazi Salaheddine", number: 19, position: "Attaquant", foot: "Droit", birth_year: 2012 },
    ]
}

/// The fixed list of played matches, oldest first.
pub fn match_schedule() -> Vec<MatchFixture> {
    vec![
        MatchFixture { opponent: "FC Muret U14", date_offset_days: -90, score_home: 3, score_away: 1, competition: "Championnat District", location: "Stade de Cugnaux" },
        MatchFixture { opponent: "Toulouse FC U14", date_offset_days: -75, score_home: 1, score_away: 2, competition: "Championnat District", location: "Stade Antoine Béguère" },
        MatchFixture { opponent: "US Colomiers U14", date_offset_days: -60, score_home: 4, score_away: 0, competition: "Championnat District", location: "Stade de Cugnaux" },
        MatchFixture { opponent: "SC Tournefeuille U14", date_offset_days: -45, score_home: 2, score_away: 2, competition: "Championnat District", location: "Stade Pierre Baudis" },
        MatchFixture { opponent: "AS Plaisance U14", date_offset_days: -30, score_home: 5, score_away: 1, competition: "Coupe du District", location: "Stade de Cugnaux" },
        MatchFixture { opponent: "FC Portet U14", date_offset_days: -15, score_home: 2, score_away: 3, competition: "Championnat District", location: "Stade Jean Pégot" },
        MatchFixture { opponent: "AS Seysses U14", date_offset_days: -7, score_home: 3, score_away: 0, competition: "Championnat District", location: "Stade de Cugnaux" },
    ]
}
