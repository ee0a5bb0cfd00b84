//! Build metadata emitted by `vergen` in `build.rs`.

/// Short git commit hash, or "unknown" when built outside a git checkout.
pub fn commit() -> &'static str {
    option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
}

pub fn build_time() -> &'static str {
    option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
}
