//! Logging setup shared by the stdio and HTTP binaries.

/// Per-target overrides that keep rmcp internals quiet by default.
pub const QUIET_TARGETS: &str = "rmcp=warn,serve_inner=warn";

/// Log filter from `WELLNESS_LOG_LEVEL`, falling back to `RUST_LOG`, default `info`.
pub fn log_filter_from<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get("WELLNESS_LOG_LEVEL")
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| "info".to_string())
}

pub fn env_filter(log_env: &str) -> tracing_subscriber::EnvFilter {
    let combined_filter = format!("{},{}", log_env, QUIET_TARGETS);
    tracing_subscriber::EnvFilter::try_new(combined_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("info,{}", QUIET_TARGETS)))
}

/// Install the global subscriber. Logs go to stderr so stdout stays free for
/// the stdio transport.
pub fn init_tracing() -> String {
    let log_env = log_filter_from(|k| std::env::var(k).ok());
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&log_env))
        .init();
    log_env
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wellness_level_takes_priority() {
        let get = |k: &str| match k {
            "WELLNESS_LOG_LEVEL" => Some("debug".into()),
            "RUST_LOG" => Some("warn".into()),
            _ => None,
        };
        assert_eq!(log_filter_from(get), "debug");
    }

    #[test]
    fn falls_back_to_rust_log_then_info() {
        let get = |k: &str| match k {
            "RUST_LOG" => Some("trace".into()),
            _ => None,
        };
        assert_eq!(log_filter_from(get), "trace");
        assert_eq!(log_filter_from(|_| None), "info");
    }

    #[test]
    fn env_filter_accepts_combined_spec() {
        let f = env_filter("debug");
        assert!(f.to_string().contains("rmcp=warn"));
    }
}
