//! Version metadata baked in by `build.rs`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Short commit hash, or `unknown` outside a git checkout.
pub const GIT_COMMIT: &str = env!("REPLSHIM_BUILD_GIT_HASH");

/// Text for `replshim --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("REPLSHIM_BUILD_GIT_HASH"),
    ")"
);

/// One-line banner shown when an interactive session starts.
pub fn banner_line(responder: &str) -> String {
    format!("replshim v{VERSION} ({GIT_COMMIT}) - responder: {responder} - Ctrl-C to quit")
}
