//! Read models for the Korastats payloads.
//!
//! Every field the upstream may omit is optional, and each display default
//! is declared exactly once in a dedicated resolution method so the
//! formatting layer never reaches into raw JSON.
//!
//! The upstream is loose about types: numeric fields arrive as numbers or
//! as numeric strings depending on the endpoint, and record lists can mix
//! well-formed and odd entries. Numeric fields therefore parse leniently,
//! and lists parse element-wise so one odd record degrades to its own
//! defaults instead of sinking the page.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reads an integer that may arrive as a JSON number or a numeric string;
/// anything else resolves to `None`.
fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_i64))
}

/// Parses a record list element-wise: entries that fail to parse degrade
/// to their defaults, and a non-array value degrades to an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

/// Nested tournament reference carried inside a season record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TournamentRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Season {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub tournament: Option<TournamentRef>,
}

impl Season {
    pub fn id_display(&self) -> String {
        self.id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    pub fn start_display(&self) -> &str {
        self.start_date.as_deref().unwrap_or("Unknown")
    }

    pub fn end_display(&self) -> &str {
        self.end_date.as_deref().unwrap_or("Unknown")
    }

    /// Tournament name with the nested object and empty strings both
    /// degrading to "Unknown".
    pub fn tournament_name(&self) -> &str {
        self.tournament
            .as_ref()
            .and_then(|t| t.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
    }
}

/// Season list payload: records plus pagination metadata living alongside them
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SeasonPage {
    #[serde(rename = "Data", default, deserialize_with = "lenient_list")]
    pub data: Vec<Season>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total_records: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub pages: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub current_page: Option<i64>,
}

/// Nested team reference carried inside match records
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamRef {
    #[serde(default)]
    pub name: Option<String>,
}

impl TeamRef {
    fn name_or<'a>(team: Option<&'a TeamRef>, fallback: &'a str) -> &'a str {
        team.and_then(|t| t.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback)
    }
}

/// Match status object; the paged listing uses `name`, the flat match
/// detail uses `strStatus`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchStatus {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "strStatus", default)]
    pub str_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Score {
    #[serde(default)]
    pub home: Option<i64>,
    #[serde(default)]
    pub away: Option<i64>,
}

/// Accepts the `score` field only when it is a JSON object; any other
/// shape (string, number, null) resolves to `None` so one odd field
/// cannot sink the whole record.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<Score>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Object(map)) => Some(Score {
            home: map.get("home").and_then(value_as_i64),
            away: map.get("away").and_then(value_as_i64),
        }),
        _ => None,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchSummary {
    #[serde(rename = "matchId", default, deserialize_with = "lenient_i64")]
    pub match_id: Option<i64>,
    #[serde(default)]
    pub home: Option<TeamRef>,
    #[serde(default)]
    pub away: Option<TeamRef>,
    #[serde(rename = "dateTime", default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub status: Option<MatchStatus>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<Score>,
}

impl MatchSummary {
    pub fn id_display(&self) -> String {
        self.match_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn home_name(&self) -> &str {
        TeamRef::name_or(self.home.as_ref(), "Home")
    }

    pub fn away_name(&self) -> &str {
        TeamRef::name_or(self.away.as_ref(), "Away")
    }

    pub fn kickoff_display(&self) -> &str {
        self.date_time.as_deref().unwrap_or("Unknown")
    }

    pub fn status_display(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
    }

    /// `"{home}-{away}"`, or `"N/A"` when either side is absent or the
    /// score was not a JSON object.
    pub fn score_display(&self) -> String {
        match &self.score {
            Some(Score {
                home: Some(home),
                away: Some(away),
            }) => format!("{home}-{away}"),
            _ => "N/A".to_string(),
        }
    }
}

/// Match list payload; pagination metadata uses the upstream's alternate
/// `RowsCount`/`PageCount` spelling.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MatchPage {
    #[serde(rename = "Data", default, deserialize_with = "lenient_list")]
    pub data: Vec<MatchSummary>,
    #[serde(rename = "RowsCount", default, deserialize_with = "lenient_i64")]
    pub rows_count: Option<i64>,
    #[serde(rename = "PageCount", default, deserialize_with = "lenient_i64")]
    pub page_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchEvent {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub half: Option<i64>,
    #[serde(rename = "min", default, deserialize_with = "lenient_i64")]
    pub minute: Option<i64>,
    #[serde(rename = "sec", default, deserialize_with = "lenient_i64")]
    pub second: Option<i64>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "event", default)]
    pub action: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
}

impl MatchEvent {
    pub fn half_display(&self) -> String {
        self.half
            .map(|h| h.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn minute_display(&self) -> String {
        self.minute
            .map(|m| m.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn second_or_zero(&self) -> i64 {
        self.second.unwrap_or(0)
    }

    pub fn team_display(&self) -> &str {
        self.team
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Unknown")
    }

    /// Prefer the nickname, fall back to the full player field, then to
    /// "Unknown player". Empty strings count as absent.
    pub fn player_display(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.player.as_deref().filter(|p| !p.is_empty()))
            .unwrap_or("Unknown player")
    }

    pub fn category_display(&self) -> &str {
        self.category.as_deref().unwrap_or("Event")
    }

    pub fn action_display(&self) -> &str {
        self.action.as_deref().unwrap_or("Action")
    }

    pub fn result_display(&self) -> &str {
        self.result.as_deref().unwrap_or("Unknown")
    }
}

/// Match record of the flat `MatchEventList` payload
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MatchDetail {
    #[serde(default)]
    pub home: Option<TeamRef>,
    #[serde(default)]
    pub away: Option<TeamRef>,
    #[serde(default)]
    pub status: Option<MatchStatus>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub events: Vec<MatchEvent>,
}

impl MatchDetail {
    pub fn home_name(&self) -> &str {
        TeamRef::name_or(self.home.as_ref(), "Home")
    }

    pub fn away_name(&self) -> &str {
        TeamRef::name_or(self.away.as_ref(), "Away")
    }

    pub fn status_display(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|s| s.str_status.as_deref())
            .filter(|status| !status.is_empty())
            .unwrap_or("Unknown")
    }
}

/// Flat envelope payload: the record of interest lives under `data.match`
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MatchEventData {
    #[serde(rename = "match", default)]
    pub match_detail: Option<MatchDetail>,
}
