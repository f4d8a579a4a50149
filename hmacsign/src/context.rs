use hmacsign_core::{Context, OsEnv, SystemClock};

/// Create a context wired to the running process.
///
/// - Environment variables are read from the OS.
/// - Requests are stamped with the system clock.
pub fn default_context() -> Context {
    Context::new().with_env(OsEnv).with_clock(SystemClock)
}
