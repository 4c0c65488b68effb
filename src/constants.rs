//! Application-wide constants and configuration values
//!
//! This module centralizes the fixed wire-protocol fields and the
//! numeric bounds used by input validation and report truncation.

/// Default Korastats endpoint used when `KORASTATS_API_BASE_URL` is unset
pub const DEFAULT_API_BASE_URL: &str = "https://korastats.pro/pro/api.php";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 15;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Fixed query fields merged into every outgoing request
pub mod wire {
    /// Module selector, constant for the whole API surface
    pub const MODULE: &str = "api";

    /// Protocol version the upstream expects
    pub const VERSION: &str = "V2";

    /// Response format requested from the upstream
    pub const RESPONSE: &str = "json";

    /// Language for upstream-provided display strings
    pub const LANG: &str = "en";
}

/// Pagination defaults and bounds shared by the season and match tools
pub mod paging {
    /// Page number used when the caller supplies none
    pub const DEFAULT_PAGE_NUMBER: i64 = 1;

    /// Page size used when the caller supplies none
    pub const DEFAULT_PAGE_SIZE: i64 = 20;

    /// Lower clamp for both page number and page size
    pub const MIN_PAGE_VALUE: i64 = 1;
}

/// Event limit defaults and bounds for the match-events tool
pub mod limits {
    /// Event count rendered when the caller supplies no limit
    pub const DEFAULT_EVENT_LIMIT: usize = 10;

    /// Smallest accepted event limit
    pub const MIN_EVENT_LIMIT: usize = 1;

    /// Largest accepted event limit
    pub const MAX_EVENT_LIMIT: usize = 50;
}

/// Upper bound on records rendered in the season and match reports,
/// regardless of the requested page size
pub const LIST_PREVIEW_CAP: usize = 5;
