//! Helpers shared by the unit tests

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards one-time logger installation
static INIT: Once = Once::new();

/// Installs an `env_logger` at debug level unless `RUST_LOG` says otherwise
pub fn init_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chainmap", LevelFilter::Debug)
            .is_test(true)
            .parse_default_env();

        // Another test binary may have installed a logger already.
        let _ = builder.try_init();
    });
}
