//! Hand-authored sample table standing in for a live sports data feed.

use chrono::{Days, NaiveDate};

use crate::models::fixture::{Match, MatchStatus, NewsItem, Score, SportBundle, StandingRow};

/// The one sport whose match detail carries possession/shots/corners.
pub const RICH_STATS_SPORT: &str = "football";

/// Builds the sport table in its fixed iteration order: football, basketball, cricket.
/// `today` is frozen into every date; the upcoming fixture is dated the next day.
pub fn sports(today: NaiveDate) -> Vec<(&'static str, SportBundle)> {
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);

    vec![
        (
            "football",
            SportBundle {
                matches: vec![
                    Match {
                        id: 1,
                        home_team: "Manchester United",
                        away_team: "Liverpool",
                        home_score: Score::Points(2),
                        away_score: Score::Points(1),
                        status: MatchStatus::Live,
                        clock_or_result: "67'",
                        league: "Premier League",
                        date: today,
                    },
                    Match {
                        id: 2,
                        home_team: "Barcelona",
                        away_team: "Real Madrid",
                        home_score: Score::Points(3),
                        away_score: Score::Points(3),
                        status: MatchStatus::Finished,
                        clock_or_result: "FT",
                        league: "La Liga",
                        date: today,
                    },
                    Match {
                        id: 3,
                        home_team: "Chelsea",
                        away_team: "Arsenal",
                        home_score: Score::Points(0),
                        away_score: Score::Points(0),
                        status: MatchStatus::Upcoming,
                        clock_or_result: "15:00",
                        league: "Premier League",
                        date: tomorrow,
                    },
                ],
                standings: vec![
                    football_row(1, "Manchester City", 25, 18, 4, 3, 58),
                    football_row(2, "Arsenal", 25, 17, 5, 3, 56),
                    football_row(3, "Liverpool", 25, 16, 6, 3, 54),
                    football_row(4, "Aston Villa", 25, 15, 4, 6, 49),
                    football_row(5, "Tottenham", 25, 14, 5, 6, 47),
                ],
            },
        ),
        (
            "basketball",
            SportBundle {
                matches: vec![
                    Match {
                        id: 4,
                        home_team: "LA Lakers",
                        away_team: "Boston Celtics",
                        home_score: Score::Points(108),
                        away_score: Score::Points(102),
                        status: MatchStatus::Live,
                        clock_or_result: "Q3 5:23",
                        league: "NBA",
                        date: today,
                    },
                    Match {
                        id: 5,
                        home_team: "Golden State Warriors",
                        away_team: "Miami Heat",
                        home_score: Score::Points(115),
                        away_score: Score::Points(110),
                        status: MatchStatus::Finished,
                        clock_or_result: "Final",
                        league: "NBA",
                        date: today,
                    },
                ],
                standings: vec![
                    basketball_row(1, "Boston Celtics", 55, 42, 13, ".764"),
                    basketball_row(2, "Milwaukee Bucks", 55, 38, 17, ".691"),
                    basketball_row(3, "Philadelphia 76ers", 55, 35, 20, ".636"),
                    basketball_row(4, "Cleveland Cavaliers", 55, 34, 21, ".618"),
                    basketball_row(5, "New York Knicks", 55, 33, 22, ".600"),
                ],
            },
        ),
        (
            "cricket",
            SportBundle {
                matches: vec![
                    Match {
                        id: 6,
                        home_team: "India",
                        away_team: "Australia",
                        home_score: Score::Text("285/7"),
                        away_score: Score::Text("156/4"),
                        status: MatchStatus::Live,
                        clock_or_result: "Innings 2: Over 35",
                        league: "Test Series",
                        date: today,
                    },
                    Match {
                        id: 7,
                        home_team: "England",
                        away_team: "Pakistan",
                        home_score: Score::Text("320/8"),
                        away_score: Score::Text("295/10"),
                        status: MatchStatus::Finished,
                        clock_or_result: "ENG Won",
                        league: "ODI Series",
                        date: today,
                    },
                ],
                standings: vec![
                    cricket_row(1, "India", 12, 9, 2, 1, 108),
                    cricket_row(2, "Australia", 12, 8, 3, 1, 98),
                    cricket_row(3, "England", 12, 7, 4, 1, 86),
                    cricket_row(4, "South Africa", 12, 6, 5, 1, 74),
                    cricket_row(5, "New Zealand", 12, 5, 6, 1, 62),
                ],
            },
        ),
    ]
}

pub fn news(today: NaiveDate) -> Vec<NewsItem> {
    vec![
        NewsItem {
            title: "Historic Victory: Underdog Team Claims Championship",
            summary: "In a stunning turn of events, the underdogs secured their first championship title in franchise history.",
            category: "football",
            date: today,
            image: "trophy.jpg",
        },
        NewsItem {
            title: "Record-Breaking Performance Sets New Standard",
            summary: "Star player achieves unprecedented statistics, breaking records that stood for decades.",
            category: "basketball",
            date: today,
            image: "record.jpg",
        },
        NewsItem {
            title: "International Tournament Announces New Format",
            summary: "Major changes to tournament structure promise more excitement for fans worldwide.",
            category: "cricket",
            date: today,
            image: "tournament.jpg",
        },
    ]
}

fn football_row(
    position: u32,
    team: &'static str,
    played: u32,
    won: u32,
    drawn: u32,
    lost: u32,
    points: u32,
) -> StandingRow {
    StandingRow {
        position,
        team,
        played,
        won,
        drawn: Some(drawn),
        lost,
        tied: None,
        points: Some(points),
        win_pct: None,
    }
}

fn basketball_row(
    position: u32,
    team: &'static str,
    played: u32,
    won: u32,
    lost: u32,
    win_pct: &'static str,
) -> StandingRow {
    StandingRow {
        position,
        team,
        played,
        won,
        drawn: None,
        lost,
        tied: None,
        points: None,
        win_pct: Some(win_pct),
    }
}

fn cricket_row(
    position: u32,
    team: &'static str,
    played: u32,
    won: u32,
    lost: u32,
    tied: u32,
    points: u32,
) -> StandingRow {
    StandingRow {
        position,
        team,
        played,
        won,
        drawn: None,
        lost,
        tied: Some(tied),
        points: Some(points),
        win_pct: None,
    }
}
