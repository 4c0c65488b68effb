//! MCP surface: thin adapters from tool-call parameters to the
//! string-in/string-out pipeline in [`crate::tools`].
//!
//! Every handler succeeds at the protocol level; validation and upstream
//! failures travel inside the returned text, prefix-tagged per the tool
//! contract.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::config::Config;
use crate::error::AppError;
use crate::tools::KorastatsTools;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListSeasonsParams {
    /// 1-based page number; blank or absent defaults to 1
    #[serde(default)]
    pub page_number: Option<String>,
    /// Records per page; blank or absent defaults to 20
    #[serde(default)]
    pub page_size: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListSeasonMatchesParams {
    /// Numeric season identifier (required)
    pub season_id: String,
    /// 1-based page number; blank or absent defaults to 1
    #[serde(default)]
    pub page_number: Option<String>,
    /// Records per page; blank or absent defaults to 20
    #[serde(default)]
    pub page_size: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetMatchEventsParams {
    /// Numeric match identifier (required)
    pub match_id: String,
    /// Events to show, clamped to 1..=50; blank or absent defaults to 10
    #[serde(default)]
    pub limit: Option<String>,
}

/// Korastats MCP server serving the three reporting tools.
#[derive(Clone)]
pub struct KorastatsServer {
    tools: KorastatsTools,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl KorastatsServer {
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        Ok(Self {
            tools: KorastatsTools::new(config)?,
            tool_router: Self::tool_router(),
        })
    }

    #[tool(description = "List Korastats seasons with pagination support")]
    async fn list_seasons(
        &self,
        Parameters(params): Parameters<ListSeasonsParams>,
    ) -> Result<CallToolResult, McpError> {
        let report = self
            .tools
            .list_seasons(
                params.page_number.as_deref().unwrap_or(""),
                params.page_size.as_deref().unwrap_or(""),
            )
            .await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "List matches for a Korastats season with pagination")]
    async fn list_season_matches(
        &self,
        Parameters(params): Parameters<ListSeasonMatchesParams>,
    ) -> Result<CallToolResult, McpError> {
        let report = self
            .tools
            .list_season_matches(
                &params.season_id,
                params.page_number.as_deref().unwrap_or(""),
                params.page_size.as_deref().unwrap_or(""),
            )
            .await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(description = "Summarize Korastats match events with an optional limit")]
    async fn get_match_events(
        &self,
        Parameters(params): Parameters<GetMatchEventsParams>,
    ) -> Result<CallToolResult, McpError> {
        let report = self
            .tools
            .get_match_events(&params.match_id, params.limit.as_deref().unwrap_or(""))
            .await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}

#[tool_handler]
impl ServerHandler for KorastatsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Korastats football statistics. Use list_seasons to discover season ids, \
                 list_season_matches for a season's fixtures, and get_match_events for a \
                 single match timeline. All results are bounded text reports."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_seasons_params_all_optional() {
        let params: ListSeasonsParams = serde_json::from_value(json!({})).unwrap();
        assert!(params.page_number.is_none());
        assert!(params.page_size.is_none());
    }

    #[test]
    fn test_season_matches_params_require_season_id() {
        assert!(serde_json::from_value::<ListSeasonMatchesParams>(json!({})).is_err());

        let params: ListSeasonMatchesParams =
            serde_json::from_value(json!({ "season_id": "114", "page_size": "5" })).unwrap();
        assert_eq!(params.season_id, "114");
        assert_eq!(params.page_size.as_deref(), Some("5"));
    }

    #[test]
    fn test_match_events_params() {
        let params: GetMatchEventsParams =
            serde_json::from_value(json!({ "match_id": "501" })).unwrap();
        assert_eq!(params.match_id, "501");
        assert!(params.limit.is_none());
    }
}
