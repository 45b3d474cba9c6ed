use env_logger::Env;
use log::SetLoggerError;

const DEFAULT_FILTER: &str = "info";

/// Installs `env_logger` as the global logger; `RUST_LOG` overrides the default filter.
pub fn init() -> Result<(), SetLoggerError> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)).try_init()
}
