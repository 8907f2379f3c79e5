//! Build metadata injected by `build.rs`.

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

pub fn current() -> BuildInfo {
    BuildInfo {
        version: CLI_VERSION,
        git_hash: env!("FINANCE_CORE_BUILD_HASH"),
        git_status: env!("FINANCE_CORE_BUILD_STATUS"),
        timestamp: env!("FINANCE_CORE_BUILD_TIMESTAMP"),
        target: env!("FINANCE_CORE_BUILD_TARGET"),
        profile: env!("FINANCE_CORE_BUILD_PROFILE"),
        rustc: env!("FINANCE_CORE_BUILD_RUSTC"),
    }
}
