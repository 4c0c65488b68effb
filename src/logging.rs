use crate::cli::Args;
use crate::error::AppError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging for the server.
///
/// Stdout carries the MCP protocol stream, so diagnostics always go to
/// stderr; with `--log-file` they additionally go to a daily-rolling file
/// through a non-blocking writer. Verbosity comes from `MCP_LOG_LEVEL`
/// (default `warn`), overridden to `debug` by the `--debug` flag;
/// `RUST_LOG` directives still apply on top.
///
/// Returns the appender guard when file logging is active; it must be kept
/// alive for the duration of the program so logs are flushed properly.
pub fn setup_logging(args: &Args) -> Result<Option<WorkerGuard>, AppError> {
    let level = if args.debug {
        "debug".to_string()
    } else {
        std::env::var("MCP_LOG_LEVEL")
            .map(|value| value.to_lowercase())
            .unwrap_or_else(|_| "warn".to_string())
    };
    let directive = format!("korastats_mcp={level}");

    let build_filter = || -> Result<EnvFilter, AppError> {
        let parsed = directive
            .parse::<tracing_subscriber::filter::Directive>()
            .map_err(|e| AppError::log_setup_error(format!("Invalid log level '{level}': {e}")))?;
        Ok(EnvFilter::from_default_env().add_directive(parsed))
    };

    let stderr_layer = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_filter(build_filter()?);

    match &args.log_file {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("korastats_mcp.log");

            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::log_setup_error(format!("Failed to create log directory: {e}"))
                })?;
            }

            let file_appender = RollingFileAppender::new(Rotation::DAILY, parent, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(
                    fmt::Layer::new()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_filter(build_filter()?),
                )
                .init();

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry().with(stderr_layer).init();
            Ok(None)
        }
    }
}
