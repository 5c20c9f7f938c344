//! Read-only queries over the fixture table.
//!
//! The store is built once in `main` and shared behind an `Arc`; nothing mutates it
//! afterwards, so concurrent readers need no locking.

use chrono::NaiveDate;
use thiserror::Error;

use crate::fixtures::data::{self, RICH_STATS_SPORT};
use crate::models::fixture::{
    LiveMatch, MatchDetail, MatchStats, MatchStatus, NewsItem, SportBundle, StatSplit,
};

/// Category value that disables news filtering.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureError {
    #[error("Sport not found")]
    SportNotFound(String),

    /// Carries the id exactly as requested, which may not even be numeric.
    #[error("Match not found")]
    MatchNotFound(String),
}

#[derive(Debug)]
pub struct FixtureStore {
    sports: Vec<(&'static str, SportBundle)>,
    news: Vec<NewsItem>,
}

impl FixtureStore {
    /// Builds the store with every date pinned relative to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            sports: data::sports(today),
            news: data::news(today),
        }
    }

    /// Builds the store dated from the local clock at call time.
    pub fn seeded() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn sport_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sports.iter().map(|(name, _)| *name)
    }

    /// Exact, case-sensitive lookup of a sport bundle.
    pub fn get_sport(&self, name: &str) -> Result<&SportBundle, FixtureError> {
        self.sports
            .iter()
            .find(|(sport, _)| *sport == name)
            .map(|(_, bundle)| bundle)
            .ok_or_else(|| FixtureError::SportNotFound(name.to_string()))
    }

    /// All live matches across sports, in table order, each tagged with its sport.
    pub fn list_live_matches(&self) -> Vec<LiveMatch> {
        self.sports
            .iter()
            .flat_map(|(sport, bundle)| {
                let sport = *sport;
                bundle
                    .matches
                    .iter()
                    .filter(|m| m.status == MatchStatus::Live)
                    .map(move |m| LiveMatch {
                        fixture: m.clone(),
                        sport,
                    })
            })
            .collect()
    }

    /// First match with the given id, with per-match stats for the rich-stats sport.
    pub fn get_match_by_id(&self, id: u32) -> Result<MatchDetail, FixtureError> {
        self.sports
            .iter()
            .find_map(|(sport, bundle)| {
                bundle
                    .matches
                    .iter()
                    .find(|m| m.id == id)
                    .map(|m| MatchDetail {
                        fixture: m.clone(),
                        sport: *sport,
                        stats: stats_for(sport),
                    })
            })
            .ok_or_else(|| FixtureError::MatchNotFound(id.to_string()))
    }

    /// News in table order. `"all"` returns everything; anything else is an exact
    /// category match and may yield an empty list.
    pub fn list_news(&self, category: &str) -> Vec<&NewsItem> {
        if category == ALL_CATEGORIES {
            return self.news.iter().collect();
        }
        self.news
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }
}

fn stats_for(sport: &str) -> MatchStats {
    if sport != RICH_STATS_SPORT {
        return MatchStats::default();
    }
    MatchStats {
        possession: Some(StatSplit { home: 55, away: 45 }),
        shots: Some(StatSplit { home: 12, away: 8 }),
        corners: Some(StatSplit { home: 6, away: 4 }),
    }
}
