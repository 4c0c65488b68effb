//! Tool endpoints: Validate → Request → Unwrap → Format pipelines.
//!
//! Each public method terminates in a string. Success reports carry the 📊
//! prefix, empty results the ⚠️ prefix, and every failure is resolved to
//! its ❌ string at this boundary; nothing propagates past a tool call.

use crate::config::Config;
use crate::constants::{limits, paging};
use crate::error::AppError;
use crate::korastats::models::{MatchEventData, MatchPage, SeasonPage};
use crate::korastats::{KorastatsClient, UnwrapStrategy};
use crate::report;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// The three Korastats tools sharing one client and one pipeline skeleton.
#[derive(Debug, Clone)]
pub struct KorastatsTools {
    client: KorastatsClient,
}

impl KorastatsTools {
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        Ok(Self {
            client: KorastatsClient::new(config)?,
        })
    }

    /// List Korastats seasons with pagination support.
    pub async fn list_seasons(&self, page_number: &str, page_size: &str) -> String {
        self.list_seasons_inner(page_number, page_size)
            .await
            .unwrap_or_else(|e| e.user_message())
    }

    async fn list_seasons_inner(
        &self,
        page_number: &str,
        page_size: &str,
    ) -> Result<String, AppError> {
        let page = parse_page_param("page_number", page_number, paging::DEFAULT_PAGE_NUMBER)?;
        let size = parse_page_param("page_size", page_size, paging::DEFAULT_PAGE_SIZE)?;

        self.run_pipeline(
            "SeasonList",
            &[
                ("page_number", page.to_string()),
                ("page_size", size.to_string()),
            ],
            UnwrapStrategy::Nested,
            |payload: SeasonPage, message| report::seasons::render(&payload, message),
        )
        .await
    }

    /// List matches for a Korastats season with pagination.
    pub async fn list_season_matches(
        &self,
        season_id: &str,
        page_number: &str,
        page_size: &str,
    ) -> String {
        self.list_season_matches_inner(season_id, page_number, page_size)
            .await
            .unwrap_or_else(|e| e.user_message())
    }

    async fn list_season_matches_inner(
        &self,
        season_id: &str,
        page_number: &str,
        page_size: &str,
    ) -> Result<String, AppError> {
        let season = parse_required_id("season_id", season_id)?;
        let page = parse_page_param("page_number", page_number, paging::DEFAULT_PAGE_NUMBER)?;
        let size = parse_page_param("page_size", page_size, paging::DEFAULT_PAGE_SIZE)?;

        self.run_pipeline(
            "SeasonMatchList",
            &[
                ("season_id", season.to_string()),
                ("page_number", page.to_string()),
                ("page_size", size.to_string()),
            ],
            UnwrapStrategy::Nested,
            |payload: MatchPage, message| report::matches::render(&payload, page, message),
        )
        .await
    }

    /// Summarize Korastats match events with an optional preview limit.
    pub async fn get_match_events(&self, match_id: &str, limit: &str) -> String {
        self.get_match_events_inner(match_id, limit)
            .await
            .unwrap_or_else(|e| e.user_message())
    }

    async fn get_match_events_inner(
        &self,
        match_id: &str,
        limit: &str,
    ) -> Result<String, AppError> {
        let match_value = parse_required_id("match_id", match_id)?;
        // Validated and clamped here, but only applied to the preview;
        // the upstream operation takes no limit parameter.
        let limit_value = parse_limit(limit)?;

        self.run_pipeline(
            "MatchEventList",
            &[("match_id", match_value.to_string())],
            UnwrapStrategy::Flat,
            |payload: MatchEventData, message| {
                report::events::render(match_value, &payload, limit_value, message)
            },
        )
        .await
    }

    /// Request → Unwrap → Format shared by all endpoints. Only the unwrap
    /// strategy and the formatter differ per tool; the two envelope shapes
    /// stay separate because the upstream genuinely uses both.
    async fn run_pipeline<T, F>(
        &self,
        api_name: &str,
        params: &[(&str, String)],
        strategy: UnwrapStrategy,
        format: F,
    ) -> Result<String, AppError>
    where
        T: DeserializeOwned + Default,
        F: FnOnce(T, &str) -> String,
    {
        let raw = self.client.execute(api_name, params).await?;
        let envelope = strategy.unwrap(&raw)?;
        let payload: T = serde_json::from_value(envelope.payload).unwrap_or_default();
        Ok(format(payload, &envelope.message))
    }
}

/// Mandatory identifier: non-empty and integer-parsable, checked before
/// any network call. The error carries the raw value as supplied.
fn parse_required_id(name: &'static str, raw: &str) -> Result<i64, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::missing_param(name));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| AppError::invalid_param(name, raw))
}

/// Optional pagination value: defaulted when blank, clamped to a minimum
/// of 1 when supplied.
fn parse_page_param(name: &'static str, raw: &str, default: i64) -> Result<i64, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| AppError::invalid_param(name, raw))?;
    Ok(value.max(paging::MIN_PAGE_VALUE))
}

/// Optional event limit: defaulted when blank, clamped to [1, 50].
fn parse_limit(raw: &str) -> Result<usize, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(limits::DEFAULT_EVENT_LIMIT);
    }
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| AppError::invalid_param("limit", raw))?;
    Ok(value.clamp(limits::MIN_EVENT_LIMIT as i64, limits::MAX_EVENT_LIMIT as i64) as usize)
}
