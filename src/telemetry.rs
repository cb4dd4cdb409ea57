//! Tracing subscriber setup shared by all binaries.

use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// `log_level` is an `EnvFilter` directive string such as `info` or
/// `url_redirector=debug,tower_http=info`. `log_format` is `text` or `json`.
/// Timestamps are omitted when `with_time` is false, since Lambda adds its own.
pub fn init(log_level: &str, log_format: &str, with_time: bool) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match (log_format, with_time) {
        ("json", true) => builder.json().init(),
        ("json", false) => builder.json().without_time().init(),
        (_, true) => builder.init(),
        (_, false) => builder.without_time().init(),
    }
}
