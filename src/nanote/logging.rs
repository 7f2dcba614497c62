//! Logger setup for clients of the library.
//!
//! The core only emits records through the `log` facade. A client that wants to see
//! persistence warnings calls [`init`] once at startup.

use log::debug;

/// Installs `env_logger` with an `info` default, honouring `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let installed = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(true)
        .try_init()
        .is_ok();

    if installed {
        debug!("Logger initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        log::info!("still logging after a second init");
    }
}
