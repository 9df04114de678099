//! logging.rs
//! Routes the crate's `tracing` events to logcat.
//!
//! Installed once per process from `JNI_OnLoad`. On Android events go to
//! logcat under `LOG_TAG`; on other targets (desktop JVM, tests) they go to
//! stderr. An already-installed global subscriber is left in place.

use bloodtest_core::runtime::{InitGuard, InitState};
use tracing_subscriber::filter::LevelFilter;

/// Logcat tag of the native side.
pub const LOG_TAG: &str = "TestAnalysis_native";

static LOGGING: InitGuard<()> = InitGuard::new();

#[cfg(target_os = "android")]
fn install() -> std::io::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let logcat = tracing_android::layer(LOG_TAG)?;
    let _ = tracing_subscriber::registry()
        .with(LevelFilter::DEBUG)
        .with(logcat)
        .try_init();
    Ok(())
}

#[cfg(not(target_os = "android"))]
fn install() -> std::io::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

/// Install the subscriber unless an earlier call already did.
pub fn init_logging() -> std::io::Result<InitState> {
    LOGGING.get_or_try_init(install).map(|(_, state)| state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installs_global_subscriber_once() {
        let first = init_logging().unwrap();
        assert!(matches!(first, InitState::Initialized | InitState::AlreadyInitialized));
        // Stays `OFF` while no subscriber is installed.
        assert_ne!(LevelFilter::current(), LevelFilter::OFF);

        assert_eq!(init_logging().unwrap(), InitState::AlreadyInitialized);
    }
}
