//! Build metadata.

/// Returns `pkg_version (git_sha)`, with `unknown` when git metadata was not
/// available at build time.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");

    format!("{pkg_version} ({git_sha})")
}
