use env_logger::Env;

/// Installs the process logger. `RUST_LOG` overrides `default_level`.
/// Safe to call more than once; later calls are ignored.
pub fn init(default_level: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .try_init();
}
