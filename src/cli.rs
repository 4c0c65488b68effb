use clap::Parser;

/// Korastats MCP Server
///
/// Serves three Korastats football-statistics tools over MCP stdio
/// transport: season listings, per-season match listings, and match event
/// summaries. Diagnostics go to stderr so stdout stays clean for the
/// protocol stream.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Also write diagnostics to this file (daily rotation) in addition to stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Log at debug level regardless of MCP_LOG_LEVEL.
    #[arg(short, long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["korastats_mcp"]);
        assert!(args.log_file.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn test_args_log_file_and_debug() {
        let args = Args::parse_from(["korastats_mcp", "--log-file", "/tmp/k.log", "--debug"]);
        assert_eq!(args.log_file.as_deref(), Some("/tmp/k.log"));
        assert!(args.debug);
    }
}
