pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of event buffer size for worker tasks
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of in-flight snapshot updates.
    /// Snapshots arrive at most once per refresh cycle, so a small buffer suffices.
    pub const SNAPSHOT_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Snapshot refresh cadence configuration
    pub mod refresh {
        use std::time::Duration;

        /// Interval between scheduled snapshot refreshes (milliseconds).
        /// One minute, matching the market API's effective update frequency.
        pub const REFRESH_INTERVAL_MS: u64 = 60_000;

        /// A fetch still in flight after this long is displayed as timed out.
        pub const FETCH_TIMEOUT_SECS: u64 = 15;

        /// Helper function to get the refresh interval
        pub const fn refresh_interval() -> Duration {
            Duration::from_millis(REFRESH_INTERVAL_MS)
        }
    }

    // =============================================================================
    // MARKET DATA CONFIGURATION
    // =============================================================================

    /// Market data request configuration
    pub mod market {
        use std::time::Duration;

        /// Number of assets requested per snapshot, top-N by market cap.
        pub const PAGE_SIZE: u32 = 30;

        /// Page index requested. A single page is one complete snapshot.
        pub const PAGE: u32 = 1;

        /// Reference currency for all prices and valuations.
        pub const DEFAULT_VS_CURRENCY: &str = "usd";

        /// Market API ordering parameter for the snapshot request.
        pub const ORDER: &str = "market_cap_desc";

        /// HTTP connect/request timeout (seconds)
        pub const HTTP_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the HTTP timeout
        pub const fn http_timeout() -> Duration {
            Duration::from_secs(HTTP_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Terminal UI configuration
    pub mod ui {
        use std::time::Duration;

        /// Width of the inline sparkline cell, in terminal columns.
        pub const SPARKLINE_WIDTH: usize = 16;

        /// How long the splash screen is shown before the dashboard.
        pub const SPLASH_DURATION_SECS: u64 = 2;

        /// Helper function to get the splash duration
        pub const fn splash_duration() -> Duration {
            Duration::from_secs(SPLASH_DURATION_SECS)
        }
    }
}
