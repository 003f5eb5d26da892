use thiserror::Error;

/// Failure of a single count source, or of the whole resolution chain.
///
/// Every source adapter reports its failures through this taxonomy so that
/// the resolver can log and fall through uniformly. The variants map onto the
/// ways an external source can disappoint: the request itself failed, the
/// endpoint answered with a non-success status, the body was not the JSON we
/// expected, or the body was fine but carried no usable count.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Request could not be completed (unreachable host, timeout, TLS failure).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status code.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not valid JSON or did not match the expected shape.
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response decoded fine but none of the recognized count fields was present.
    #[error("no recognized guild count field in response")]
    MissingCountField,

    /// The source has no credentials or endpoint configured for this bot.
    ///
    /// The resolver skips unconfigured sources, so this is only seen when a
    /// source is invoked directly.
    #[error("source not configured for this bot")]
    NotConfigured,

    /// Only mutual guilds could be counted, which is never a true total.
    ///
    /// The partial count is carried for diagnostic logging but the result is
    /// still a failure: showing a mutual-only count as a real total would
    /// under-report every bot the monitor does not share all guilds with.
    #[error("only mutual guilds counted ({count} shared), not a total")]
    MutualOnly {
        /// Number of guilds the monitor shares with the target bot
        count: u64,
    },

    /// The target bot is not visible in any guild the monitor is in.
    #[error("target bot not found in any mutual guild")]
    NotInMutualGuilds,

    /// Every source in the chain was skipped or failed.
    #[error("no source could provide a guild count")]
    Exhausted,
}
