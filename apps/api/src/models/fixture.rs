use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    Live,
    Finished,
    Upcoming,
}

/// A side's score. Cricket reports runs/wickets as text, other sports a plain count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Score {
    Points(u32),
    Text(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: u32,
    pub home_team: &'static str,
    pub away_team: &'static str,
    pub home_score: Score,
    pub away_score: Score,
    pub status: MatchStatus,
    /// Match clock while live, kick-off time when upcoming, result text when finished.
    #[serde(rename = "time")]
    pub clock_or_result: &'static str,
    pub league: &'static str,
    pub date: NaiveDate,
}

/// One league-table row. Columns vary by sport; absent ones are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingRow {
    pub position: u32,
    pub team: &'static str,
    pub played: u32,
    pub won: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawn: Option<u32>,
    pub lost: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tied: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_pct: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub title: &'static str,
    pub summary: &'static str,
    pub category: &'static str,
    pub date: NaiveDate,
    pub image: &'static str,
}

/// Everything known about one sport: its fixtures and its league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportBundle {
    pub matches: Vec<Match>,
    pub standings: Vec<StandingRow>,
}

/// A live match tagged with the sport it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveMatch {
    #[serde(flatten)]
    pub fixture: Match,
    pub sport: &'static str,
}

/// Home/away split of a single statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatSplit {
    pub home: u32,
    pub away: u32,
}

/// Per-match statistics. Serializes to `{}` for sports without rich stats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub possession: Option<StatSplit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shots: Option<StatSplit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corners: Option<StatSplit>,
}

impl MatchStats {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.possession.is_none() && self.shots.is_none() && self.corners.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchDetail {
    #[serde(flatten)]
    pub fixture: Match,
    pub sport: &'static str,
    pub stats: MatchStats,
}
