use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for `level`. Debug and trace also let dependencies log at info.
fn filter_directive(level: &str) -> String {
    match level {
        "debug" | "trace" => format!("herdbook={},info", level),
        _ => format!("herdbook={}", level),
    }
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(level)))
}

pub fn init_cli_logger(level: &str) {
    tracing_subscriber::registry()
        .with(default_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(level: &str) {
    tracing_subscriber::registry()
        .with(default_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_follows_configured_level() {
        assert_eq!(filter_directive("info"), "herdbook=info");
        assert_eq!(filter_directive("warn"), "herdbook=warn");
        assert_eq!(filter_directive("error"), "herdbook=error");
        assert_eq!(filter_directive("debug"), "herdbook=debug,info");
        assert_eq!(filter_directive("trace"), "herdbook=trace,info");
    }

    #[test]
    fn test_directives_parse() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(filter_directive(level).parse::<EnvFilter>().is_ok());
        }
    }
}
