//! CLI entry point for the `usergate` tool.
//!
//! Reads `APP_USER`, reports whether it names the administrator, and always
//! exits successfully. Log output goes through `env_logger`, filtered by
//! `APP_LOG`.

use env_logger::{Builder, Env, Target};
use usergate::{
    Config, UserGate,
    config::{DEFAULT_LOG_FILTER, LOG_FILTER_VAR},
};

fn main() {
    Builder::from_env(Env::default().filter_or(LOG_FILTER_VAR, DEFAULT_LOG_FILTER))
        .target(Target::Stderr)
        .init();

    let config = Config::from_env();
    // The outcome is only reported through the log; the exit status stays 0.
    let _outcome = UserGate::new().process(&config);
}
